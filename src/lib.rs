//! # Evocore - Execution Substrate for Evolutionary Program Search
//!
//! Candidate "programs" in the search are short instruction sequences over
//! three typed, fixed-capacity register banks (scalar, vector, matrix). This
//! crate is the contract everything downstream builds on: the interpreter,
//! the mutation/crossover operators, the fitness evaluators, and the
//! distributed worker orchestration all import the same address space,
//! numeric-safety helpers, and seed derivation from here. A single
//! inconsistency in any of these silently corrupts reproducibility, so none
//! of them may be redefined elsewhere.
//!
//! ## Core Components
//!
//! - **[`memory`]**: typed register banks with compile-time capacities and
//!   reserved I/O slots (features in, label, prediction out)
//! - **[`ops`]**: validated instruction-operation codes; raw genome integers
//!   are rejected, never coerced
//! - **[`seed`]**: deterministic hash mixing so every generator in a run is
//!   derived from the run's base seeds
//! - **[`check`]**: overflow-safe casts and fail-fast invariant guards
//! - **[`budget`]**: "unlimited" sentinels and the shared atomic budget
//!   counter workers draw down
//!
//! ## Design Principles
//!
//! - **Fail fast, fail loud**: internal invariant violations panic; only
//!   boundaries consuming untrusted genome data return `Result`. A
//!   long-running search must never keep producing results of doubtful
//!   validity.
//! - **Lock-free hot loop**: register memory is owned per evaluation episode;
//!   the budget counter is the only cross-thread shared state.
//! - **Reproducible by construction**: seeds come from the mixer, generators
//!   from [`seed::seeded_rng`], nothing else.
//!
//! ## Example
//!
//! ```
//! use evocore::memory::{Memory, Vector};
//! use evocore::ops::convert_to_ops;
//! use evocore::seed::{derive_seed, seeded_rng};
//!
//! // Validate a genome's raw op codes.
//! let ops = convert_to_ops(&[0, 27, 31]).unwrap();
//! assert_eq!(ops.len(), 3);
//!
//! // Per-episode register state for a 4-feature task.
//! let mut memory: Memory<4> = Memory::new();
//! memory.set_features(Vector::from([0.25, 0.5, 0.75, 1.0]));
//! memory.set_label(1.0);
//!
//! // Reproducible per-worker generator from run seed + worker index.
//! let _rng = seeded_rng(derive_seed(&[1000, 3]));
//! ```

pub mod budget;
pub mod check;
pub mod debug;
mod error;
pub mod memory;
pub mod ops;
pub mod seed;
pub mod types;

pub use error::{EvocoreError, Result};

pub use budget::{
    chill, BudgetCounter, NANOS_PER_MICRO, NANOS_PER_SECOND, UNLIMITED_INDIVIDUALS, UNLIMITED_TIME,
};
pub use check::{non_empty, positive, present, safe_cast, size_less_than, try_cast};
pub use debug::DebugPrinter;
pub use memory::{
    Matrix, MatrixAddress, MatrixBank, Memory, ScalarAddress, ScalarBank, Vector, VectorAddress,
    VectorBank, MAX_MATRIX_ADDRESSES, MAX_SCALAR_ADDRESSES, MAX_VECTOR_ADDRESSES,
};
pub use ops::{convert_to_ops, Op};
pub use seed::{derive_seed, hash_mix, mix_pair, seeded_rng, SeedMixer};
pub use types::{
    FeatureIndex, InstructionIndex, Integer, Probability, RandomSeed, MAX_FITNESS, MIN_FITNESS,
};
