//! Register memory model - typed banks, addresses, reserved slots
//!
//! Three fixed-capacity typed register banks back every candidate-program
//! evaluation:
//!
//! ```text
//! Scalar bank (f64):        s0 = label, s1 = prediction, s1.. = general
//! Vector bank (Vector<F>):  v0 = features, v1 = label, v2 = prediction, v1.. = general
//! Matrix bank (Matrix<F>):  m0.. = general (nothing reserved)
//! ```
//!
//! This module is the single source of truth for capacities and reserved
//! address meaning. The interpreter, mutation operators, and any genome
//! serializer import these definitions rather than hard-coding their own.

mod address;
mod bank;
mod linalg;

pub use address::{
    MatrixAddress, ScalarAddress, VectorAddress, MAX_MATRIX_ADDRESSES, MAX_SCALAR_ADDRESSES,
    MAX_VECTOR_ADDRESSES,
};
pub use bank::{MatrixBank, Memory, ScalarBank, VectorBank};
pub use linalg::{Matrix, Vector};
