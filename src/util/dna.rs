//! 核酸残基工具，供 DNA 替换矩阵与命令行预处理使用。

/// 规范化后的核酸残基；U 归为 T，其它字符一律归为 N
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
    N,
}

impl Base {
    #[inline]
    pub fn from_ascii(b: u8) -> Base {
        match b.to_ascii_uppercase() {
            b'A' => Base::A,
            b'C' => Base::C,
            b'G' => Base::G,
            b'T' | b'U' => Base::T,
            _ => Base::N,
        }
    }

    #[inline]
    pub fn to_ascii(self) -> u8 {
        match self {
            Base::A => b'A',
            Base::C => b'C',
            Base::G => b'G',
            Base::T => b'T',
            Base::N => b'N',
        }
    }

    #[inline]
    pub fn complement(self) -> Base {
        match self {
            Base::A => Base::T,
            Base::C => Base::G,
            Base::G => Base::C,
            Base::T => Base::A,
            Base::N => Base::N,
        }
    }
}

/// 转为大写 ACGTN
pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|&b| Base::from_ascii(b).to_ascii()).collect()
}

/// 只含 ACGTUN（大小写不敏感）时视为核酸序列
pub fn looks_like_dna(seq: &[u8]) -> bool {
    seq.iter()
        .all(|b| matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T' | b'U' | b'N'))
}

pub fn revcomp(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&b| Base::from_ascii(b).complement().to_ascii())
        .collect()
}
