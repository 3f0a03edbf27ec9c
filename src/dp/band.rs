use serde::{Deserialize, Serialize};

use crate::error::{AlignError, Result};

/// 对角带 `[lower, upper]`，对角线编号 `d = col - row`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub lower: i64,
    pub upper: i64,
}

impl Band {
    pub fn new(lower: i64, upper: i64) -> Result<Self> {
        if lower > upper {
            return Err(AlignError::InvalidBand { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    #[inline]
    pub fn contains(&self, diag: i64) -> bool {
        self.lower <= diag && diag <= self.upper
    }

    pub fn width(&self) -> usize {
        (self.upper - self.lower + 1) as usize
    }
}

/// 计算域：给出每一列需要计算的行区间。
///
/// 不带状时每列都是 `0..=len_v`；带状时取带与矩阵的交集。带外邻居一律视作
/// `NEG_INF`，由导航器处理。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain {
    len_h: usize,
    len_v: usize,
    band: Option<Band>,
}

impl Domain {
    pub fn full(len_h: usize, len_v: usize) -> Self {
        Self { len_h, len_v, band: None }
    }

    /// 带状计算域；带与矩阵无交集时报错
    pub fn banded(len_h: usize, len_v: usize, band: Band) -> Result<Self> {
        // Band 的字段是公开的，可能绕过了 Band::new
        if band.lower > band.upper {
            return Err(AlignError::InvalidBand {
                lower: band.lower,
                upper: band.upper,
            });
        }
        if band.upper < -(len_v as i64) || band.lower > len_h as i64 {
            return Err(AlignError::BandOutsideMatrix {
                lower: band.lower,
                upper: band.upper,
                len_h,
                len_v,
            });
        }
        Ok(Self { len_h, len_v, band: Some(band) })
    }

    /// 全局比对要求原点与终点都在带内
    pub fn require_corners(&self) -> Result<()> {
        if let Some(band) = self.band {
            let end_diag = self.len_h as i64 - self.len_v as i64;
            if !band.contains(0) || !band.contains(end_diag) {
                return Err(AlignError::BandMissesCorner {
                    lower: band.lower,
                    upper: band.upper,
                    end_diag,
                });
            }
        }
        Ok(())
    }

    pub fn len_h(&self) -> usize {
        self.len_h
    }

    pub fn len_v(&self) -> usize {
        self.len_v
    }

    pub fn band(&self) -> Option<Band> {
        self.band
    }

    /// 第 `col` 列的行区间（闭区间），空列返回 `None`
    #[inline]
    pub fn rows(&self, col: usize) -> Option<(usize, usize)> {
        match self.band {
            None => Some((0, self.len_v)),
            Some(band) => {
                let c = col as i64;
                let first = (c - band.upper).max(0);
                let last = (c - band.lower).min(self.len_v as i64);
                if first > last {
                    None
                } else {
                    Some((first as usize, last as usize))
                }
            }
        }
    }

    #[inline]
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col <= self.len_h
            && row <= self.len_v
            && self.band.map_or(true, |b| b.contains(col as i64 - row as i64))
    }

    /// 单列最多的格数，用于预分配列缓冲
    pub fn max_height(&self) -> usize {
        match self.band {
            None => self.len_v + 1,
            Some(band) => band.width().min(self.len_v + 1),
        }
    }
}
