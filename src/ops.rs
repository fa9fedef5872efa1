//! Op - validated instruction-operation identifiers
//!
//! Operations grouped by the bank kinds they touch:
//!
//! | Range  | Category        | Purpose                                  |
//! |--------|-----------------|------------------------------------------|
//! | 0      | No-op           | placeholder slot in a candidate program  |
//! | 1-15   | Scalar          | arithmetic, trig, exp/log, heaviside     |
//! | 16-28  | Vector          | elementwise ops, norms, inner/outer      |
//! | 29-43  | Matrix          | elementwise ops, products, transpose     |
//! | 44-55  | Reductions      | min/max/mean/st-dev per bank kind        |
//! | 56-64  | Initialization  | const set and randomized set per kind    |
//!
//! The semantics of each operation belong to the interpreter. This module
//! defines identity and the statically-known valid range only: raw integers
//! from a serialized or mutated genome become [`Op`] values exclusively
//! through [`Op::from_integer`] / [`convert_to_ops`], which reject anything
//! out of range rather than coercing it.

use crate::error::{EvocoreError, Result};
use crate::types::Integer;
use std::fmt;

/// One instruction operation.
///
/// Discriminants are dense from 0 and are the canonical integer encoding of
/// an operation in a serialized genome. Changing them changes the meaning of
/// every previously serialized program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Op {
    NoOp = 0,

    // Scalar arithmetic
    ScalarSum = 1,
    ScalarDiff = 2,
    ScalarProduct = 3,
    ScalarDivision = 4,
    ScalarAbs = 5,
    ScalarReciprocal = 6,
    ScalarSin = 7,
    ScalarCos = 8,
    ScalarTan = 9,
    ScalarArcSin = 10,
    ScalarArcCos = 11,
    ScalarArcTan = 12,
    ScalarExp = 13,
    ScalarLog = 14,
    ScalarHeaviside = 15,

    // Vector ops
    VectorHeaviside = 16,
    MatrixHeaviside = 17,
    ScalarVectorProduct = 18,
    ScalarBroadcast = 19,
    VectorReciprocal = 20,
    VectorNorm = 21,
    VectorAbs = 22,
    VectorSum = 23,
    VectorDiff = 24,
    VectorProduct = 25,
    VectorDivision = 26,
    VectorInnerProduct = 27,
    VectorOuterProduct = 28,

    // Matrix ops
    ScalarMatrixProduct = 29,
    MatrixReciprocal = 30,
    MatrixVectorProduct = 31,
    VectorColumnBroadcast = 32,
    VectorRowBroadcast = 33,
    MatrixNorm = 34,
    MatrixColumnNorm = 35,
    MatrixRowNorm = 36,
    MatrixTranspose = 37,
    MatrixAbs = 38,
    MatrixSum = 39,
    MatrixDiff = 40,
    MatrixProduct = 41,
    MatrixDivision = 42,
    MatrixMatrixProduct = 43,

    // Reductions
    ScalarMin = 44,
    VectorMin = 45,
    MatrixMin = 46,
    ScalarMax = 47,
    VectorMax = 48,
    MatrixMax = 49,
    ScalarMean = 50,
    VectorMean = 51,
    MatrixMean = 52,
    ScalarStDev = 53,
    VectorStDev = 54,
    MatrixStDev = 55,

    // Initialization
    ScalarConstSet = 56,
    VectorConstSet = 57,
    MatrixConstSet = 58,
    ScalarUniformSet = 59,
    VectorUniformSet = 60,
    MatrixUniformSet = 61,
    ScalarGaussianSet = 62,
    VectorGaussianSet = 63,
    MatrixGaussianSet = 64,
}

impl Op {
    /// Number of valid operations. Valid integer encodings are `0..COUNT`.
    pub const COUNT: usize = 65;

    /// All operations in encoding order. Also the sampling domain for
    /// mutation operators picking a random op.
    pub const ALL: [Op; Self::COUNT] = [
        Op::NoOp,
        Op::ScalarSum,
        Op::ScalarDiff,
        Op::ScalarProduct,
        Op::ScalarDivision,
        Op::ScalarAbs,
        Op::ScalarReciprocal,
        Op::ScalarSin,
        Op::ScalarCos,
        Op::ScalarTan,
        Op::ScalarArcSin,
        Op::ScalarArcCos,
        Op::ScalarArcTan,
        Op::ScalarExp,
        Op::ScalarLog,
        Op::ScalarHeaviside,
        Op::VectorHeaviside,
        Op::MatrixHeaviside,
        Op::ScalarVectorProduct,
        Op::ScalarBroadcast,
        Op::VectorReciprocal,
        Op::VectorNorm,
        Op::VectorAbs,
        Op::VectorSum,
        Op::VectorDiff,
        Op::VectorProduct,
        Op::VectorDivision,
        Op::VectorInnerProduct,
        Op::VectorOuterProduct,
        Op::ScalarMatrixProduct,
        Op::MatrixReciprocal,
        Op::MatrixVectorProduct,
        Op::VectorColumnBroadcast,
        Op::VectorRowBroadcast,
        Op::MatrixNorm,
        Op::MatrixColumnNorm,
        Op::MatrixRowNorm,
        Op::MatrixTranspose,
        Op::MatrixAbs,
        Op::MatrixSum,
        Op::MatrixDiff,
        Op::MatrixProduct,
        Op::MatrixDivision,
        Op::MatrixMatrixProduct,
        Op::ScalarMin,
        Op::VectorMin,
        Op::MatrixMin,
        Op::ScalarMax,
        Op::VectorMax,
        Op::MatrixMax,
        Op::ScalarMean,
        Op::VectorMean,
        Op::MatrixMean,
        Op::ScalarStDev,
        Op::VectorStDev,
        Op::MatrixStDev,
        Op::ScalarConstSet,
        Op::VectorConstSet,
        Op::MatrixConstSet,
        Op::ScalarUniformSet,
        Op::VectorUniformSet,
        Op::MatrixUniformSet,
        Op::ScalarGaussianSet,
        Op::VectorGaussianSet,
        Op::MatrixGaussianSet,
    ];

    /// Validate a raw integer as an operation code.
    ///
    /// Anything outside `0..COUNT` is rejected, never coerced.
    pub fn from_integer(value: Integer) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .ok_or(EvocoreError::InvalidOpCode(value))
    }

    /// Canonical integer encoding of this operation.
    pub const fn as_integer(&self) -> Integer {
        *self as Integer
    }

    /// Whether this operation draws from the evaluation's pseudo-random
    /// generator when executed.
    pub const fn is_randomized(&self) -> bool {
        matches!(
            self,
            Op::ScalarUniformSet
                | Op::VectorUniformSet
                | Op::MatrixUniformSet
                | Op::ScalarGaussianSet
                | Op::VectorGaussianSet
                | Op::MatrixGaussianSet
        )
    }

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Op::NoOp => "NO_OP",
            Op::ScalarSum => "SCALAR_SUM",
            Op::ScalarDiff => "SCALAR_DIFF",
            Op::ScalarProduct => "SCALAR_PRODUCT",
            Op::ScalarDivision => "SCALAR_DIVISION",
            Op::ScalarAbs => "SCALAR_ABS",
            Op::ScalarReciprocal => "SCALAR_RECIPROCAL",
            Op::ScalarSin => "SCALAR_SIN",
            Op::ScalarCos => "SCALAR_COS",
            Op::ScalarTan => "SCALAR_TAN",
            Op::ScalarArcSin => "SCALAR_ARCSIN",
            Op::ScalarArcCos => "SCALAR_ARCCOS",
            Op::ScalarArcTan => "SCALAR_ARCTAN",
            Op::ScalarExp => "SCALAR_EXP",
            Op::ScalarLog => "SCALAR_LOG",
            Op::ScalarHeaviside => "SCALAR_HEAVISIDE",
            Op::VectorHeaviside => "VECTOR_HEAVISIDE",
            Op::MatrixHeaviside => "MATRIX_HEAVISIDE",
            Op::ScalarVectorProduct => "SCALAR_VECTOR_PRODUCT",
            Op::ScalarBroadcast => "SCALAR_BROADCAST",
            Op::VectorReciprocal => "VECTOR_RECIPROCAL",
            Op::VectorNorm => "VECTOR_NORM",
            Op::VectorAbs => "VECTOR_ABS",
            Op::VectorSum => "VECTOR_SUM",
            Op::VectorDiff => "VECTOR_DIFF",
            Op::VectorProduct => "VECTOR_PRODUCT",
            Op::VectorDivision => "VECTOR_DIVISION",
            Op::VectorInnerProduct => "VECTOR_INNER_PRODUCT",
            Op::VectorOuterProduct => "VECTOR_OUTER_PRODUCT",
            Op::ScalarMatrixProduct => "SCALAR_MATRIX_PRODUCT",
            Op::MatrixReciprocal => "MATRIX_RECIPROCAL",
            Op::MatrixVectorProduct => "MATRIX_VECTOR_PRODUCT",
            Op::VectorColumnBroadcast => "VECTOR_COLUMN_BROADCAST",
            Op::VectorRowBroadcast => "VECTOR_ROW_BROADCAST",
            Op::MatrixNorm => "MATRIX_NORM",
            Op::MatrixColumnNorm => "MATRIX_COLUMN_NORM",
            Op::MatrixRowNorm => "MATRIX_ROW_NORM",
            Op::MatrixTranspose => "MATRIX_TRANSPOSE",
            Op::MatrixAbs => "MATRIX_ABS",
            Op::MatrixSum => "MATRIX_SUM",
            Op::MatrixDiff => "MATRIX_DIFF",
            Op::MatrixProduct => "MATRIX_PRODUCT",
            Op::MatrixDivision => "MATRIX_DIVISION",
            Op::MatrixMatrixProduct => "MATRIX_MATRIX_PRODUCT",
            Op::ScalarMin => "SCALAR_MIN",
            Op::VectorMin => "VECTOR_MIN",
            Op::MatrixMin => "MATRIX_MIN",
            Op::ScalarMax => "SCALAR_MAX",
            Op::VectorMax => "VECTOR_MAX",
            Op::MatrixMax => "MATRIX_MAX",
            Op::ScalarMean => "SCALAR_MEAN",
            Op::VectorMean => "VECTOR_MEAN",
            Op::MatrixMean => "MATRIX_MEAN",
            Op::ScalarStDev => "SCALAR_ST_DEV",
            Op::VectorStDev => "VECTOR_ST_DEV",
            Op::MatrixStDev => "MATRIX_ST_DEV",
            Op::ScalarConstSet => "SCALAR_CONST_SET",
            Op::VectorConstSet => "VECTOR_CONST_SET",
            Op::MatrixConstSet => "MATRIX_CONST_SET",
            Op::ScalarUniformSet => "SCALAR_UNIFORM_SET",
            Op::VectorUniformSet => "VECTOR_UNIFORM_SET",
            Op::MatrixUniformSet => "MATRIX_UNIFORM_SET",
            Op::ScalarGaussianSet => "SCALAR_GAUSSIAN_SET",
            Op::VectorGaussianSet => "VECTOR_GAUSSIAN_SET",
            Op::MatrixGaussianSet => "MATRIX_GAUSSIAN_SET",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for Op {
    fn default() -> Self {
        Self::NoOp
    }
}

/// Validate a sequence of raw integers as operation codes.
///
/// Output preserves input order and length exactly. The first out-of-range
/// element fails the whole conversion: the input is expected to come from a
/// source that guarantees validity, so a bad element means corruption or a
/// logic bug upstream.
pub fn convert_to_ops(values: &[Integer]) -> Result<Vec<Op>> {
    let mut converted = Vec::with_capacity(values.len());
    for &value in values {
        let op = Op::from_integer(value).map_err(|err| {
            log::warn!("rejecting corrupt op sequence: op code {} out of range", value);
            err
        })?;
        converted.push(op);
    }
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_is_dense() {
        assert_eq!(Op::ALL.len(), Op::COUNT);
        for (index, op) in Op::ALL.iter().enumerate() {
            assert_eq!(op.as_integer(), index as Integer);
            assert_eq!(Op::from_integer(index as Integer).unwrap(), *op);
        }
    }

    #[test]
    fn test_from_integer_rejects_out_of_range() {
        assert!(matches!(
            Op::from_integer(Op::COUNT as Integer),
            Err(EvocoreError::InvalidOpCode(_))
        ));
        assert!(Op::from_integer(-1).is_err());
        assert!(Op::from_integer(999).is_err());
    }

    #[test]
    fn test_convert_to_ops_preserves_order() {
        let ops = convert_to_ops(&[0, 1, 2]).unwrap();
        assert_eq!(ops, vec![Op::NoOp, Op::ScalarSum, Op::ScalarDiff]);
    }

    #[test]
    fn test_convert_to_ops_rejects_corrupt_element() {
        assert!(convert_to_ops(&[0, 999]).is_err());
    }

    #[test]
    fn test_convert_to_ops_empty() {
        assert_eq!(convert_to_ops(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn test_randomized_ops() {
        assert!(Op::VectorGaussianSet.is_randomized());
        assert!(Op::ScalarUniformSet.is_randomized());
        assert!(!Op::ScalarSum.is_randomized());
        assert!(!Op::NoOp.is_randomized());
    }

    #[test]
    fn test_display() {
        assert_eq!(Op::VectorInnerProduct.to_string(), "VECTOR_INNER_PRODUCT");
        assert_eq!(Op::NoOp.to_string(), "NO_OP");
    }
}
