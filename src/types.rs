//! Shared type vocabulary for the search substrate.
//!
//! Every component of the engine (interpreter, mutators, evaluators,
//! orchestration) agrees on these aliases. Use [`Integer`] for all integers
//! unless an external interface or a measured speed/space concern demands
//! otherwise.

/// The preferred integer type crate-wide. Must be widening-castable to
/// [`RandomSeed`] inputs when deriving seeds.
pub type Integer = i64;

/// Probability values (mutation rates, acceptance probabilities).
pub type Probability = f32;

/// Seed type for all pseudo-random generators in the engine.
///
/// Seeds are only ever produced by the mixer in [`crate::seed`]; constructing
/// one any other way breaks run-level reproducibility.
pub type RandomSeed = u32;

/// Coordinate index into the feature dimension `F` of vectors and matrices.
pub type FeatureIndex = usize;

/// Index of an instruction within a candidate program.
pub type InstructionIndex = u16;

/// Lower bound of the fitness range reported by evaluators.
pub const MIN_FITNESS: f64 = 0.0;

/// Upper bound of the fitness range reported by evaluators.
pub const MAX_FITNESS: f64 = 1.0;
