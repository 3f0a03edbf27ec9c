use thiserror::Error;

/// 比对前的配置错误。
///
/// 这些错误都在 DP 计算开始之前检测并返回；计算过程中的内部不变量被破坏
/// （例如回溯段不连续）属于实现 bug，直接 panic 而不是返回这里的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    #[error("invalid band: lower diagonal {lower} > upper diagonal {upper}")]
    InvalidBand { lower: i64, upper: i64 },

    #[error("band [{lower}, {upper}] does not intersect a {len_h}x{len_v} matrix")]
    BandOutsideMatrix {
        lower: i64,
        upper: i64,
        len_h: usize,
        len_v: usize,
    },

    #[error("band [{lower}, {upper}] must contain diagonals 0 and {end_diag} for global alignment")]
    BandMissesCorner { lower: i64, upper: i64, end_diag: i64 },

    #[error("pairwise alignment needs exactly 2 rows, got {0}")]
    RowCount(usize),

    #[error("unsupported configuration: {0}")]
    Unsupported(&'static str),

    #[error("x-drop threshold must be non-negative, got {0}")]
    NegativeXDrop(i32),

    #[error("seed [{begin_h}..{end_h}) x [{begin_v}..{end_v}) lies outside sequences of length {len_h} and {len_v}")]
    SeedOutOfBounds {
        begin_h: usize,
        end_h: usize,
        begin_v: usize,
        end_v: usize,
        len_h: usize,
        len_v: usize,
    },

    #[error("clipping [{begin}, {end}) out of range for source of length {len}")]
    ClippingOutOfRange { begin: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, AlignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_offending_values() {
        let e = AlignError::InvalidBand { lower: 3, upper: -1 };
        assert_eq!(e.to_string(), "invalid band: lower diagonal 3 > upper diagonal -1");
        let e = AlignError::RowCount(3);
        assert!(e.to_string().contains("got 3"));
    }
}
