use serde::{Deserialize, Serialize};

use crate::util::dna::Base;

/// 打分模型：替换得分 + 间隙开启 / 延伸代价。
///
/// 约定“得分越高越好”，间隙代价是负的增量。`gap_open` 是一段间隙中第一个
/// 位置的代价，`gap_extend` 是其后每个位置的代价；两者相等时退化为线性间隙
/// 模型，DP 会选用更便宜的线性递推。
pub trait Scoring {
    fn score(&self, a: u8, b: u8) -> i32;
    fn gap_open(&self) -> i32;
    fn gap_extend(&self) -> i32;

    #[inline]
    fn is_affine(&self) -> bool {
        self.gap_open() != self.gap_extend()
    }
}

impl<S: Scoring + ?Sized> Scoring for &S {
    #[inline]
    fn score(&self, a: u8, b: u8) -> i32 {
        (**self).score(a, b)
    }

    #[inline]
    fn gap_open(&self) -> i32 {
        (**self).gap_open()
    }

    #[inline]
    fn gap_extend(&self) -> i32 {
        (**self).gap_extend()
    }
}

/// 匹配 / 错配两档得分的简单打分方案
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleScore {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_open: i32,
    pub gap_extend: i32,
}

impl SimpleScore {
    pub fn new(match_score: i32, mismatch_score: i32, gap_open: i32, gap_extend: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
        }
    }

    /// 线性间隙：每个间隙位置代价都是 `gap`
    pub fn linear(match_score: i32, mismatch_score: i32, gap: i32) -> Self {
        Self::new(match_score, mismatch_score, gap, gap)
    }
}

impl Scoring for SimpleScore {
    #[inline]
    fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    #[inline]
    fn gap_open(&self) -> i32 {
        self.gap_open
    }

    #[inline]
    fn gap_extend(&self) -> i32 {
        self.gap_extend
    }
}

/// 编辑距离：匹配 0，错配与间隙均为 -1，得分取负即 Levenshtein 距离
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDistanceScore;

impl Scoring for EditDistanceScore {
    #[inline]
    fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            0
        } else {
            -1
        }
    }

    #[inline]
    fn gap_open(&self) -> i32 {
        -1
    }

    #[inline]
    fn gap_extend(&self) -> i32 {
        -1
    }
}

/// 256x256 替换矩阵，按字节直接查表
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixScore {
    table: Vec<i32>,
    gap_open: i32,
    gap_extend: i32,
}

impl MatrixScore {
    pub fn from_fn<F>(f: F, gap_open: i32, gap_extend: i32) -> Self
    where
        F: Fn(u8, u8) -> i32,
    {
        let mut table = vec![0i32; 256 * 256];
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                table[(a as usize) << 8 | b as usize] = f(a, b);
            }
        }
        Self {
            table,
            gap_open,
            gap_extend,
        }
    }

    /// 核酸矩阵：大小写不敏感，U 视作 T，任一侧为 N（或非 ACGTU 字符）时得 `n_score`
    pub fn dna(match_score: i32, mismatch_score: i32, n_score: i32, gap_open: i32, gap_extend: i32) -> Self {
        Self::from_fn(
            |a, b| {
                let (ca, cb) = (Base::from_ascii(a), Base::from_ascii(b));
                if ca == Base::N || cb == Base::N {
                    n_score
                } else if ca == cb {
                    match_score
                } else {
                    mismatch_score
                }
            },
            gap_open,
            gap_extend,
        )
    }

    /// 同时设置 (a, b) 与 (b, a)
    pub fn set(&mut self, a: u8, b: u8, score: i32) {
        self.table[(a as usize) << 8 | b as usize] = score;
        self.table[(b as usize) << 8 | a as usize] = score;
    }

    pub fn is_symmetric(&self) -> bool {
        (0..256usize).all(|a| (0..a).all(|b| self.table[a << 8 | b] == self.table[b << 8 | a]))
    }
}

impl Scoring for MatrixScore {
    #[inline]
    fn score(&self, a: u8, b: u8) -> i32 {
        self.table[(a as usize) << 8 | b as usize]
    }

    #[inline]
    fn gap_open(&self) -> i32 {
        self.gap_open
    }

    #[inline]
    fn gap_extend(&self) -> i32 {
        self.gap_extend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_score_lookup() {
        let s = SimpleScore::new(4, -2, -4, -2);
        assert_eq!(s.score(b'A', b'A'), 4);
        assert_eq!(s.score(b'A', b'C'), -2);
        assert!(s.is_affine());
        assert!(!SimpleScore::linear(1, -1, -2).is_affine());
    }

    #[test]
    fn edit_distance_is_linear() {
        let s = EditDistanceScore;
        assert_eq!(s.score(b'G', b'G'), 0);
        assert_eq!(s.score(b'G', b'T'), -1);
        assert!(!s.is_affine());
    }

    #[test]
    fn dna_matrix_handles_case_and_n() {
        let m = MatrixScore::dna(2, -3, -1, -5, -2);
        assert_eq!(m.score(b'a', b'A'), 2);
        assert_eq!(m.score(b'U', b't'), 2);
        assert_eq!(m.score(b'A', b'C'), -3);
        assert_eq!(m.score(b'N', b'A'), -1);
        assert!(m.is_symmetric());
        assert!(m.is_affine());
    }

    #[test]
    fn matrix_set_keeps_symmetry() {
        let mut m = MatrixScore::from_fn(|a, b| if a == b { 1 } else { 0 }, -1, -1);
        m.set(b'L', b'I', 2);
        assert_eq!(m.score(b'I', b'L'), 2);
        assert!(m.is_symmetric());
    }

    #[test]
    fn reference_forwards() {
        let s = SimpleScore::linear(1, -1, -3);
        let r = &s;
        assert_eq!(Scoring::gap_open(&r), -3);
        assert_eq!(Scoring::score(&r, b'A', b'A'), 1);
    }
}
