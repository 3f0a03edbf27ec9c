use log::debug;
use serde::{Deserialize, Serialize};

use super::xdrop_dp;
use crate::dp::scout::XDropState;
use crate::error::{AlignError, Result};
use crate::score::Scoring;

/// 种子：seqH 上 `[begin_h, end_h)` 与 seqV 上 `[begin_v, end_v)` 的一段匹配
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed {
    pub begin_h: usize,
    pub begin_v: usize,
    pub end_h: usize,
    pub end_v: usize,
    pub score: i32,
}

impl Seed {
    pub fn new(begin_h: usize, begin_v: usize, end_h: usize, end_v: usize) -> Self {
        Self {
            begin_h,
            begin_v,
            end_h,
            end_v,
            score: 0,
        }
    }

    /// 对角线上长度为 `len` 的种子
    pub fn with_length(begin_h: usize, begin_v: usize, len: usize) -> Self {
        Self::new(begin_h, begin_v, begin_h + len, begin_v + len)
    }

    pub fn len_h(&self) -> usize {
        self.end_h - self.begin_h
    }

    pub fn len_v(&self) -> usize {
        self.end_v - self.begin_v
    }

    fn check_bounds(&self, len_h: usize, len_v: usize) -> Result<()> {
        if self.begin_h > self.end_h || self.end_h > len_h || self.begin_v > self.end_v || self.end_v > len_v {
            return Err(AlignError::SeedOutOfBounds {
                begin_h: self.begin_h,
                end_h: self.end_h,
                begin_v: self.begin_v,
                end_v: self.end_v,
                len_h,
                len_v,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtendDirection {
    Left,
    Right,
    Both,
}

impl ExtendDirection {
    fn left(self) -> bool {
        matches!(self, ExtendDirection::Left | ExtendDirection::Both)
    }

    fn right(self) -> bool {
        matches!(self, ExtendDirection::Right | ExtendDirection::Both)
    }
}

/// 种子延伸方式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtendMode {
    /// 两侧字符相同就继续
    Match,
    /// 沿对角线走，得分比最好值低出阈值后停止，回退到最好位置
    UngappedXDrop(i32),
    /// 有间隙的 DP 延伸，X-drop 终止
    GappedXDrop(i32),
}

/// 沿 `pairs` 给出的字符对做无间隙 X-drop：返回 (延伸长度, 得分增量)
fn ungapped_xdrop<S, I>(pairs: I, scoring: &S, x_drop: i32) -> (usize, i32)
where
    S: Scoring + ?Sized,
    I: Iterator<Item = (u8, u8)>,
{
    let (mut score, mut best, mut best_len) = (0i32, 0i32, 0usize);
    for (k, (a, b)) in pairs.enumerate() {
        score += scoring.score(a, b);
        if score > best {
            best = score;
            best_len = k + 1;
        } else if best - score > x_drop {
            break;
        }
    }
    (best_len, best)
}

/// 延伸种子，原地更新种子边界与得分。
///
/// 配置检查（种子越界、负的 X-drop 阈值）在延伸前完成。`Both` 先左后右。
pub fn extend_seed<S: Scoring + ?Sized>(
    seed: &mut Seed,
    seq_h: &[u8],
    seq_v: &[u8],
    direction: ExtendDirection,
    mode: ExtendMode,
    scoring: &S,
) -> Result<()> {
    seed.check_bounds(seq_h.len(), seq_v.len())?;
    match mode {
        ExtendMode::UngappedXDrop(x) | ExtendMode::GappedXDrop(x) if x < 0 => {
            return Err(AlignError::NegativeXDrop(x));
        }
        _ => {}
    }

    if direction.left() {
        let h = &seq_h[..seed.begin_h];
        let v = &seq_v[..seed.begin_v];
        let (dh, dv, gain) = match mode {
            ExtendMode::Match => {
                let n = h.iter().rev().zip(v.iter().rev()).take_while(|(a, b)| a == b).count();
                let gain = h[h.len() - n..].iter().zip(&v[v.len() - n..]).map(|(&a, &b)| scoring.score(a, b)).sum::<i32>();
                (n, n, gain)
            }
            ExtendMode::UngappedXDrop(x) => {
                let (n, gain) = ungapped_xdrop(h.iter().rev().copied().zip(v.iter().rev().copied()), scoring, x);
                (n, n, gain)
            }
            ExtendMode::GappedXDrop(x) => {
                let rh: Vec<u8> = h.iter().rev().copied().collect();
                let rv: Vec<u8> = v.iter().rev().copied().collect();
                gapped_xdrop(&rh, &rv, scoring, x)
            }
        };
        seed.begin_h -= dh;
        seed.begin_v -= dv;
        seed.score += gain;
    }

    if direction.right() {
        let h = &seq_h[seed.end_h..];
        let v = &seq_v[seed.end_v..];
        let (dh, dv, gain) = match mode {
            ExtendMode::Match => {
                let n = h.iter().zip(v).take_while(|(a, b)| a == b).count();
                let gain = h[..n].iter().zip(&v[..n]).map(|(&a, &b)| scoring.score(a, b)).sum::<i32>();
                (n, n, gain)
            }
            ExtendMode::UngappedXDrop(x) => {
                let (n, gain) = ungapped_xdrop(h.iter().copied().zip(v.iter().copied()), scoring, x);
                (n, n, gain)
            }
            ExtendMode::GappedXDrop(x) => gapped_xdrop(h, v, scoring, x),
        };
        seed.end_h += dh;
        seed.end_v += dv;
        seed.score += gain;
    }

    debug!(
        "seed extended {:?}/{:?}: h [{}, {}) v [{}, {}) score {}",
        direction, mode, seed.begin_h, seed.end_h, seed.begin_v, seed.end_v, seed.score
    );
    Ok(())
}

/// 有间隙 X-drop：返回最优终点的 (seqH 延伸量, seqV 延伸量, 得分增量)
fn gapped_xdrop<S: Scoring + ?Sized>(h: &[u8], v: &[u8], scoring: &S, x_drop: i32) -> (usize, usize, i32) {
    let mut state = XDropState::new(x_drop);
    let out = xdrop_dp(h, v, scoring, &mut state, false);
    match out.end {
        Some(end) => (end.col, end.row, out.score),
        None => (0, 0, 0),
    }
}
