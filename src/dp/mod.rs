//! 动态规划核心：单元格递推、带状计算域、scout、列优先导航与回溯矩阵。
//!
//! 对外的入口是 [`run_dp`]：按打分模型选择线性或仿射递推（单态化），
//! 遍历计算域，由调用方提供的 [`Scout`](scout::Scout) 决定最优终点与是否提前终止。

pub mod band;
pub mod cell;
mod navigator;
pub mod recurrence;
pub mod scout;
pub mod trace;

use log::debug;
use serde::{Deserialize, Serialize};

use self::band::Domain;
use self::cell::CellPos;
use self::navigator::navigate;
use self::recurrence::{AffineGaps, LinearGaps, Recurrence};
use self::scout::Scout;
use self::trace::{trace_back, TraceMatrix, TraceSegment};
use crate::score::Scoring;

/// 免费端间隙：比对两端落在矩阵边界上的间隙不计分。
///
/// - `first_row`：可以从第 0 行任意位置开始（seqH 的前导字符免费）
/// - `first_column`：可以从第 0 列任意位置开始（seqV 的前导字符免费）
/// - `last_row`：可以在最后一行任意位置结束（seqH 的尾部字符免费）
/// - `last_column`：可以在最后一列任意位置结束（seqV 的尾部字符免费）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FreeEndGaps {
    pub first_row: bool,
    pub first_column: bool,
    pub last_row: bool,
    pub last_column: bool,
}

impl FreeEndGaps {
    /// 两端都计分（标准全局比对）
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            first_row: true,
            first_column: true,
            last_row: true,
            last_column: true,
        }
    }

    /// 只有尾部免费（半全局，常用于拆分比对与读段延伸）
    pub fn trailing() -> Self {
        Self {
            last_row: true,
            last_column: true,
            ..Self::default()
        }
    }

    /// 只有前导免费
    pub fn leading() -> Self {
        Self {
            first_row: true,
            first_column: true,
            ..Self::default()
        }
    }
}

/// 一次 DP 运行的参数
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DpProfile {
    /// 局部比对：任何格都可以 0 分重新开始
    pub local: bool,
    pub free: FreeEndGaps,
    /// 是否记录回溯矩阵
    pub traceback: bool,
}

impl DpProfile {
    pub fn global(free: FreeEndGaps, traceback: bool) -> Self {
        Self {
            local: false,
            free,
            traceback,
        }
    }

    pub fn local(traceback: bool) -> Self {
        Self {
            local: true,
            free: FreeEndGaps::none(),
            traceback,
        }
    }

    #[inline(always)]
    pub fn may_restart(&self, col: usize, row: usize) -> bool {
        self.local
            || (col == 0 && row == 0)
            || (row == 0 && self.free.first_row)
            || (col == 0 && self.free.first_column)
    }
}

/// 一次 DP 运行的结果
#[derive(Debug)]
pub struct DpOutcome {
    pub score: i32,
    /// 最优终点；scout 一个格都没看到时为 `None`
    pub end: Option<CellPos>,
    pub trace: Option<TraceMatrix>,
    /// 实际计算的列数（X-drop 提前终止时小于 `len_h + 1`）
    pub columns: usize,
    pub terminated: bool,
}

impl DpOutcome {
    /// 从最优终点回溯；没有回溯矩阵或没有终点时返回 `None`
    pub fn trace_back(&self) -> Option<(CellPos, Vec<TraceSegment>)> {
        let end = self.end?;
        let matrix = self.trace.as_ref()?;
        let (start, segments) = trace_back(matrix, end);
        Some((start, segments))
    }
}

/// 在 `domain` 上运行一次 DP。
///
/// `gap_open == gap_extend` 时走线性递推，否则走仿射递推；两者结果在线性参数下一致。
pub fn run_dp<S, Sc>(
    seq_h: &[u8],
    seq_v: &[u8],
    domain: &Domain,
    scoring: &S,
    profile: &DpProfile,
    scout: &mut Sc,
) -> DpOutcome
where
    S: Scoring + ?Sized,
    Sc: Scout,
{
    assert_eq!(domain.len_h(), seq_h.len(), "domain width does not match seqH");
    assert_eq!(domain.len_v(), seq_v.len(), "domain height does not match seqV");

    let (nav, model) = if scoring.is_affine() {
        (navigate::<AffineGaps, S, Sc>(seq_h, seq_v, domain, scoring, profile, scout), AffineGaps::NAME)
    } else {
        (navigate::<LinearGaps, S, Sc>(seq_h, seq_v, domain, scoring, profile, scout), LinearGaps::NAME)
    };

    let outcome = DpOutcome {
        score: scout.best_score(),
        end: scout.best_pos(),
        trace: nav.trace,
        columns: nav.columns,
        terminated: scout.is_terminated(),
    };
    debug!(
        "dp {}x{} {} band={:?} local={} -> score {} at {:?} ({} columns{})",
        seq_h.len(),
        seq_v.len(),
        model,
        domain.band(),
        profile.local,
        outcome.score,
        outcome.end,
        outcome.columns,
        if outcome.terminated { ", x-drop" } else { "" }
    );
    outcome
}
