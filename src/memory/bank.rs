//! Register banks and per-episode memory
//!
//! A bank is a fixed-capacity, zero-indexed array of typed slots, addressed
//! only by its own address type. Capacity is a const parameter, fixed at
//! build time per instantiation.
//!
//! One [`Memory`] is the complete register state for a single evaluation
//! episode. A worker owns its memory exclusively for the episode and wipes or
//! recreates it before the next one; memories are never shared across
//! threads, which keeps the evaluation hot loop lock-free.
//!
//! Indexing with an out-of-range address panics: operands are validated with
//! the address types' `checked` constructors when a genome enters the system,
//! so a bad address inside an evaluation is an internal logic bug, not an
//! input error.

use super::address::{
    MatrixAddress, ScalarAddress, VectorAddress, MAX_MATRIX_ADDRESSES, MAX_SCALAR_ADDRESSES,
    MAX_VECTOR_ADDRESSES,
};
use super::linalg::{Matrix, Vector};
use std::ops::{Index, IndexMut};

/// Fixed-capacity bank of double-precision scalars
#[derive(Debug, Clone)]
pub struct ScalarBank<const CAP: usize> {
    slots: [f64; CAP],
}

impl<const CAP: usize> ScalarBank<CAP> {
    /// Zero-initialized bank
    pub const fn new() -> Self {
        Self { slots: [0.0; CAP] }
    }

    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Whether `address` resolves within this bank
    pub const fn contains(&self, address: ScalarAddress) -> bool {
        address.is_valid(CAP)
    }

    pub fn get(&self, address: ScalarAddress) -> Option<&f64> {
        self.slots.get(address.index())
    }

    pub fn get_mut(&mut self, address: ScalarAddress) -> Option<&mut f64> {
        self.slots.get_mut(address.index())
    }

    /// Reset every slot to zero
    pub fn wipe(&mut self) {
        self.slots = [0.0; CAP];
    }
}

impl<const CAP: usize> Default for ScalarBank<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> Index<ScalarAddress> for ScalarBank<CAP> {
    type Output = f64;

    fn index(&self, address: ScalarAddress) -> &f64 {
        &self.slots[address.index()]
    }
}

impl<const CAP: usize> IndexMut<ScalarAddress> for ScalarBank<CAP> {
    fn index_mut(&mut self, address: ScalarAddress) -> &mut f64 {
        &mut self.slots[address.index()]
    }
}

/// Fixed-capacity bank of F-dimensional vectors
#[derive(Debug, Clone)]
pub struct VectorBank<const F: usize, const CAP: usize> {
    slots: [Vector<F>; CAP],
}

impl<const F: usize, const CAP: usize> VectorBank<F, CAP> {
    /// Zero-initialized bank
    pub const fn new() -> Self {
        Self {
            slots: [Vector::zero(); CAP],
        }
    }

    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Whether `address` resolves within this bank
    pub const fn contains(&self, address: VectorAddress) -> bool {
        address.is_valid(CAP)
    }

    pub fn get(&self, address: VectorAddress) -> Option<&Vector<F>> {
        self.slots.get(address.index())
    }

    pub fn get_mut(&mut self, address: VectorAddress) -> Option<&mut Vector<F>> {
        self.slots.get_mut(address.index())
    }

    /// Reset every slot to zero
    pub fn wipe(&mut self) {
        self.slots = [Vector::zero(); CAP];
    }
}

impl<const F: usize, const CAP: usize> Default for VectorBank<F, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const F: usize, const CAP: usize> Index<VectorAddress> for VectorBank<F, CAP> {
    type Output = Vector<F>;

    fn index(&self, address: VectorAddress) -> &Vector<F> {
        &self.slots[address.index()]
    }
}

impl<const F: usize, const CAP: usize> IndexMut<VectorAddress> for VectorBank<F, CAP> {
    fn index_mut(&mut self, address: VectorAddress) -> &mut Vector<F> {
        &mut self.slots[address.index()]
    }
}

/// Fixed-capacity bank of F×F row-major matrices
#[derive(Debug, Clone)]
pub struct MatrixBank<const F: usize, const CAP: usize> {
    slots: [Matrix<F>; CAP],
}

impl<const F: usize, const CAP: usize> MatrixBank<F, CAP> {
    /// Zero-initialized bank
    pub const fn new() -> Self {
        Self {
            slots: [Matrix::zero(); CAP],
        }
    }

    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Whether `address` resolves within this bank
    pub const fn contains(&self, address: MatrixAddress) -> bool {
        address.is_valid(CAP)
    }

    pub fn get(&self, address: MatrixAddress) -> Option<&Matrix<F>> {
        self.slots.get(address.index())
    }

    pub fn get_mut(&mut self, address: MatrixAddress) -> Option<&mut Matrix<F>> {
        self.slots.get_mut(address.index())
    }

    /// Reset every slot to zero
    pub fn wipe(&mut self) {
        self.slots = [Matrix::zero(); CAP];
    }
}

impl<const F: usize, const CAP: usize> Default for MatrixBank<F, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const F: usize, const CAP: usize> Index<MatrixAddress> for MatrixBank<F, CAP> {
    type Output = Matrix<F>;

    fn index(&self, address: MatrixAddress) -> &Matrix<F> {
        &self.slots[address.index()]
    }
}

impl<const F: usize, const CAP: usize> IndexMut<MatrixAddress> for MatrixBank<F, CAP> {
    fn index_mut(&mut self, address: MatrixAddress) -> &mut Matrix<F> {
        &mut self.slots[address.index()]
    }
}

/// Complete register state for one evaluation episode, at default capacities.
///
/// Owned exclusively by the evaluating worker; created fresh or wiped per
/// episode. The reserved-slot accessors are the supported way to move data
/// across the episode boundary (features in, prediction out).
#[derive(Debug, Clone, Default)]
pub struct Memory<const F: usize> {
    pub scalar: ScalarBank<MAX_SCALAR_ADDRESSES>,
    pub vector: VectorBank<F, MAX_VECTOR_ADDRESSES>,
    pub matrix: MatrixBank<F, MAX_MATRIX_ADDRESSES>,
}

impl<const F: usize> Memory<F> {
    /// Zero-initialized memory
    pub const fn new() -> Self {
        Self {
            scalar: ScalarBank::new(),
            vector: VectorBank::new(),
            matrix: MatrixBank::new(),
        }
    }

    /// Reset all three banks to zero
    pub fn wipe(&mut self) {
        self.scalar.wipe();
        self.vector.wipe();
        self.matrix.wipe();
    }

    /// Ground-truth label slot
    pub fn label(&self) -> f64 {
        self.scalar[ScalarAddress::LABELS]
    }

    pub fn set_label(&mut self, label: f64) {
        self.scalar[ScalarAddress::LABELS] = label;
    }

    /// Model prediction slot
    pub fn prediction(&self) -> f64 {
        self.scalar[ScalarAddress::PREDICTIONS]
    }

    pub fn set_prediction(&mut self, prediction: f64) {
        self.scalar[ScalarAddress::PREDICTIONS] = prediction;
    }

    /// Input feature vector slot
    pub fn features(&self) -> &Vector<F> {
        &self.vector[VectorAddress::FEATURES]
    }

    pub fn set_features(&mut self, features: Vector<F>) {
        self.vector[VectorAddress::FEATURES] = features;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banks_start_zeroed() {
        let memory: Memory<4> = Memory::new();
        assert_eq!(memory.label(), 0.0);
        assert_eq!(*memory.features(), Vector::zero());
        assert_eq!(memory.matrix[MatrixAddress::FIRST_OUT], Matrix::zero());
    }

    #[test]
    fn test_bank_indexing() {
        let mut bank: ScalarBank<MAX_SCALAR_ADDRESSES> = ScalarBank::new();
        let addr = ScalarAddress::new(5);
        bank[addr] = 2.5;
        assert_eq!(bank[addr], 2.5);
        assert_eq!(bank.get(addr), Some(&2.5));
    }

    #[test]
    fn test_bank_capacity_boundary() {
        let bank: VectorBank<4, MAX_VECTOR_ADDRESSES> = VectorBank::new();
        let last = VectorAddress::new((MAX_VECTOR_ADDRESSES - 1) as u16);
        let past = VectorAddress::new(MAX_VECTOR_ADDRESSES as u16);

        assert!(bank.contains(last));
        assert!(bank.get(last).is_some());
        assert!(!bank.contains(past));
        assert!(bank.get(past).is_none());
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_panics() {
        let bank: MatrixBank<2, MAX_MATRIX_ADDRESSES> = MatrixBank::new();
        let _ = bank[MatrixAddress::new(MAX_MATRIX_ADDRESSES as u16)];
    }

    #[test]
    fn test_custom_capacity_instantiation() {
        let bank: ScalarBank<64> = ScalarBank::new();
        assert_eq!(bank.capacity(), 64);
        assert!(bank.contains(ScalarAddress::new(63)));
        assert!(!bank.contains(ScalarAddress::new(64)));
    }

    #[test]
    fn test_wipe_clears_all_banks() {
        let mut memory: Memory<2> = Memory::new();
        memory.set_label(1.0);
        memory.set_prediction(0.5);
        memory.set_features(Vector::from([1.0, 2.0]));
        memory.matrix[MatrixAddress::FIRST_OUT] = Matrix::identity();

        memory.wipe();

        assert_eq!(memory.label(), 0.0);
        assert_eq!(memory.prediction(), 0.0);
        assert_eq!(*memory.features(), Vector::zero());
        assert_eq!(memory.matrix[MatrixAddress::FIRST_OUT], Matrix::zero());
    }

    #[test]
    fn test_reserved_slots_roundtrip() {
        let mut memory: Memory<2> = Memory::new();
        memory.set_label(1.0);
        memory.set_prediction(0.75);

        assert_eq!(memory.scalar[ScalarAddress::LABELS], 1.0);
        assert_eq!(memory.scalar[ScalarAddress::PREDICTIONS], 0.75);
    }
}
