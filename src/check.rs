//! Numeric safety layer - overflow-checked casts and fail-fast guards
//!
//! Two families live here:
//!
//! - [`safe_cast`] / [`try_cast`]: conversions between integer-like types that
//!   never silently truncate or wrap. `safe_cast` is for values the caller
//!   guarantees by construction and panics on overflow; `try_cast` is the
//!   recoverable form for untrusted input (deserialized genomes).
//! - Guards ([`positive`], [`present`], [`non_empty`], [`size_less_than`]):
//!   each returns its input unchanged on success and panics on violation.
//!   A failed guard is a logic bug or corrupted upstream state, never an
//!   expected runtime condition. A long-running search must not keep producing
//!   results after its invariants break.

use crate::error::{EvocoreError, Result};
use std::any::type_name;
use std::fmt;

/// Cast between integer types, panicking if the value cannot be represented
/// in the output type without overflow.
///
/// For trusted internal values only. Use [`try_cast`] at boundaries that
/// consume external input.
pub fn safe_cast<In, Out>(value: In) -> Out
where
    In: Copy + fmt::Display,
    Out: TryFrom<In>,
{
    match Out::try_from(value) {
        Ok(out) => out,
        Err(_) => panic!(
            "cast overflow: {} does not fit in {}",
            value,
            type_name::<Out>()
        ),
    }
}

/// Checked cast for untrusted input: same overflow rule as [`safe_cast`],
/// but reports failure as an error instead of panicking.
pub fn try_cast<In, Out>(value: In) -> Result<Out>
where
    In: Copy + fmt::Display,
    Out: TryFrom<In>,
{
    Out::try_from(value).map_err(|_| EvocoreError::CastOverflow {
        value: value.to_string(),
        target: type_name::<Out>(),
    })
}

/// Assert that a numeric value is strictly positive, returning it unchanged.
pub fn positive<T>(value: T) -> T
where
    T: PartialOrd + Default + fmt::Debug,
{
    if value <= T::default() {
        panic!("found non-positive: {:?}", value);
    }
    value
}

/// Assert that an optional value is present, returning the contained value.
pub fn present<T>(value: Option<T>) -> T {
    match value {
        Some(inner) => inner,
        None => panic!("found absent value"),
    }
}

/// Length for the container shapes the guards accept. Also works for strings.
pub trait HasLen {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HasLen for str {
    fn len(&self) -> usize {
        str::len(self)
    }
}

impl HasLen for String {
    fn len(&self) -> usize {
        String::len(self)
    }
}

impl<T> HasLen for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> HasLen for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: HasLen + ?Sized> HasLen for &T {
    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Assert that a container or string is non-empty, returning it unchanged.
pub fn non_empty<C: HasLen>(value: C) -> C {
    if value.is_empty() {
        panic!("found empty");
    }
    value
}

/// Assert that a container's length is strictly below `max_size`, returning
/// it unchanged.
pub fn size_less_than<C: HasLen>(value: C, max_size: usize) -> C {
    if value.len() >= max_size {
        panic!("too large: len {} >= {}", value.len(), max_size);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_cast_roundtrip() {
        let small: i64 = 1234;
        let narrowed: i32 = safe_cast(small);
        assert_eq!(narrowed, 1234);
        let widened: i64 = safe_cast(narrowed);
        assert_eq!(widened, small);

        let exact: u32 = safe_cast(u32::MAX as u64);
        assert_eq!(exact, u32::MAX);
    }

    #[test]
    #[should_panic(expected = "cast overflow")]
    fn test_safe_cast_overflow_panics() {
        let huge: u64 = 1 << 63;
        let _: i32 = safe_cast(huge);
    }

    #[test]
    fn test_try_cast() {
        let ok: Result<u16> = try_cast(42i64);
        assert_eq!(ok.unwrap(), 42);

        let err: Result<i32> = try_cast(1u64 << 63);
        assert!(matches!(err, Err(EvocoreError::CastOverflow { .. })));
    }

    #[test]
    fn test_try_cast_negative_to_unsigned() {
        let err: Result<u16> = try_cast(-1i64);
        assert!(err.is_err());
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive(3i64), 3);
        assert_eq!(positive(0.5f64), 0.5);
    }

    #[test]
    #[should_panic(expected = "non-positive")]
    fn test_positive_rejects_zero() {
        positive(0i64);
    }

    #[test]
    fn test_present() {
        assert_eq!(present(Some(7)), 7);
    }

    #[test]
    #[should_panic(expected = "absent")]
    fn test_present_rejects_none() {
        present::<i64>(None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("x"), "x");
        assert_eq!(non_empty(vec![1, 2]), vec![1, 2]);
    }

    #[test]
    #[should_panic(expected = "found empty")]
    fn test_non_empty_rejects_empty_str() {
        non_empty("");
    }

    #[test]
    fn test_size_less_than() {
        assert_eq!(size_less_than(vec![1, 2], 3), vec![1, 2]);
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_size_less_than_rejects_boundary() {
        size_less_than(vec![1, 2, 3], 3);
    }
}
