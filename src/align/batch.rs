use rayon::prelude::*;

use super::alignment::Align;
use super::{align_pair, pair_score, AlignAlgorithm, AlignConfig};
use crate::error::{AlignError, Result};
use crate::score::Scoring;

/// 一对待比对序列
pub type SeqPair<'a> = (&'a [u8], &'a [u8]);

/// 整批共享的配置检查，避免每个 worker 各自报同一个错
fn check_config(config: &AlignConfig) -> Result<()> {
    match config.algorithm {
        AlignAlgorithm::Split => Err(AlignError::Unsupported(
            "split alignment yields two alignments, use split_alignment",
        )),
        AlignAlgorithm::Extend { x_drop, .. } if x_drop < 0 => Err(AlignError::NegativeXDrop(x_drop)),
        _ => Ok(()),
    }
}

/// 在 rayon 线程池上并行计算每一对的得分，结果与输入一一对应
pub fn score_batch<S>(pairs: &[SeqPair<'_>], scoring: &S, config: &AlignConfig) -> Result<Vec<i32>>
where
    S: Scoring + Sync + ?Sized,
{
    check_config(config)?;
    pairs
        .par_iter()
        .map(|&(h, v)| pair_score(h, v, scoring, config))
        .collect()
}

/// 并行比对每一对并保留回溯，结果与输入一一对应
pub fn align_batch<'a, S>(pairs: &[SeqPair<'a>], scoring: &S, config: &AlignConfig) -> Result<Vec<(i32, Align<'a>)>>
where
    S: Scoring + Sync + ?Sized,
{
    check_config(config)?;
    pairs
        .par_iter()
        .map(|&(h, v)| {
            let mut align = Align::new(h, v);
            let score = align_pair(&mut align, scoring, config)?;
            Ok((score, align))
        })
        .collect()
}
