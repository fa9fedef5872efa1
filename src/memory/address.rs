//! Typed register addresses and reserved-slot conventions
//!
//! Every instruction operand, mutation operator, and fitness evaluator agrees
//! on the address space defined here. Each bank kind has its own address type;
//! the types are deliberately not comparable or convertible across kinds, so a
//! scalar operand can never be resolved against the vector bank by accident.
//!
//! ## Reserved addresses
//!
//! ```text
//! Scalar bank: s0 = ground-truth label, s1 = prediction (first out)
//! Vector bank: v0 = input features, v1 = label, v2 = prediction (first out = v1)
//! Matrix bank: m0 = first general-purpose/output slot (nothing reserved)
//! ```
//!
//! Evolved programs must never repurpose a reserved slot. Everything above the
//! reserved set, up to the bank's capacity, is general-purpose.
//!
//! ## Capacities
//!
//! The defaults below bound each bank at 20 slots. Capacity is a compile-time
//! property: the banks take it as a const parameter, so a build wanting larger
//! address spaces instantiates them differently. Changing capacity changes the
//! meaning of any previously serialized program that encodes addresses against
//! the old bounds; capacity is part of the compatibility contract.

use crate::error::{EvocoreError, Result};
use crate::types::Integer;
use std::fmt;

/// Default scalar bank capacity
pub const MAX_SCALAR_ADDRESSES: usize = 20;
/// Default vector bank capacity
pub const MAX_VECTOR_ADDRESSES: usize = 20;
/// Default matrix bank capacity
pub const MAX_MATRIX_ADDRESSES: usize = 20;

/// Address into the scalar register bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarAddress(pub u16);

impl ScalarAddress {
    /// Ground-truth label slot
    pub const LABELS: Self = Self(0);
    /// Model prediction output slot
    pub const PREDICTIONS: Self = Self(1);
    /// First address available for program output
    pub const FIRST_OUT: Self = Self(1);

    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Zero-based slot index
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Valid iff strictly below the bank's capacity
    pub const fn is_valid(&self, capacity: usize) -> bool {
        (self.0 as usize) < capacity
    }

    /// Validate a raw integer from an untrusted source against `capacity`.
    pub fn checked(value: Integer, capacity: usize) -> Result<Self> {
        match u16::try_from(value) {
            Ok(raw) if (raw as usize) < capacity => Ok(Self(raw)),
            _ => Err(EvocoreError::InvalidAddress {
                bank: "scalar",
                value,
                capacity,
            }),
        }
    }
}

impl fmt::Display for ScalarAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Address into the vector register bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorAddress(pub u16);

impl VectorAddress {
    /// Input feature vector slot
    pub const FEATURES: Self = Self(0);
    /// Ground-truth label slot (vector form)
    pub const LABELS: Self = Self(1);
    /// Model prediction output slot (vector form)
    pub const PREDICTIONS: Self = Self(2);
    /// First address available for program output
    pub const FIRST_OUT: Self = Self(1);

    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Zero-based slot index
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Valid iff strictly below the bank's capacity
    pub const fn is_valid(&self, capacity: usize) -> bool {
        (self.0 as usize) < capacity
    }

    /// Validate a raw integer from an untrusted source against `capacity`.
    pub fn checked(value: Integer, capacity: usize) -> Result<Self> {
        match u16::try_from(value) {
            Ok(raw) if (raw as usize) < capacity => Ok(Self(raw)),
            _ => Err(EvocoreError::InvalidAddress {
                bank: "vector",
                value,
                capacity,
            }),
        }
    }
}

impl fmt::Display for VectorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Address into the matrix register bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixAddress(pub u16);

impl MatrixAddress {
    /// First address available for program output (no input slots reserved)
    pub const FIRST_OUT: Self = Self(0);

    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Zero-based slot index
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Valid iff strictly below the bank's capacity
    pub const fn is_valid(&self, capacity: usize) -> bool {
        (self.0 as usize) < capacity
    }

    /// Validate a raw integer from an untrusted source against `capacity`.
    pub fn checked(value: Integer, capacity: usize) -> Result<Self> {
        match u16::try_from(value) {
            Ok(raw) if (raw as usize) < capacity => Ok(Self(raw)),
            _ => Err(EvocoreError::InvalidAddress {
                bank: "matrix",
                value,
                capacity,
            }),
        }
    }
}

impl fmt::Display for MatrixAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}
