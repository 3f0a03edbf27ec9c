//! 拆分比对：读段前半段比对到左参考、后半段比对到右参考，寻找最优断点。
//!
//! 正向在 (read, 左参考) 上跑一遍带拆分 scout 的全局 DP，得到读段每个前缀的
//! 最优得分；反向在两者的反转序列上同样跑一遍，得到每个后缀的最优得分。
//! 断点取两者之和最大的位置（相同时取最靠前的）。

use log::debug;

use super::adapt::adapt_trace_segments;
use super::alignment::Align;
use super::global_run;
use crate::dp::band::Domain;
use crate::dp::scout::{Scout, SplitScout, SplitState};
use crate::dp::trace::TraceSegment;
use crate::dp::{run_dp, DpProfile, FreeEndGaps};
use crate::score::Scoring;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitBreakpoint {
    /// 读段拆分位置：`read[..read_pos]` 属于左半，`read[read_pos..]` 属于右半
    pub read_pos: usize,
    /// 左参考上左半比对的终点（开区间）
    pub left_end: usize,
    /// 右参考上右半比对的起点
    pub right_begin: usize,
    pub left_score: i32,
    pub right_score: i32,
}

impl SplitBreakpoint {
    pub fn score(&self) -> i32 {
        self.left_score + self.right_score
    }
}

/// 拆分比对结果；两条比对的第 0 行是参考，第 1 行是读段
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitAlignment<'a> {
    pub breakpoint: SplitBreakpoint,
    pub left: Align<'a>,
    pub right: Align<'a>,
}

/// 对 `read` 的每个前缀，求它与 `reference` 某个前缀的最优全局得分
fn prefix_scores<S: Scoring + ?Sized>(read: &[u8], reference: &[u8], scoring: &S) -> (SplitState, i32) {
    let mut state = SplitState::new();
    let domain = Domain::full(read.len(), reference.len());
    let parent_best = {
        let mut scout = SplitScout::new(&mut state, read.len(), FreeEndGaps::trailing());
        run_dp(
            read,
            reference,
            &domain,
            scoring,
            &DpProfile::global(FreeEndGaps::none(), false),
            &mut scout,
        );
        scout.best_score()
    };
    (state, parent_best)
}

pub fn split_breakpoint<S: Scoring + ?Sized>(
    ref_left: &[u8],
    ref_right: &[u8],
    read: &[u8],
    scoring: &S,
) -> SplitBreakpoint {
    let n = read.len();
    let (forward, forward_best) = prefix_scores(read, ref_left, scoring);

    let rev_read: Vec<u8> = read.iter().rev().copied().collect();
    let rev_right: Vec<u8> = ref_right.iter().rev().copied().collect();
    let (backward, backward_best) = prefix_scores(&rev_read, &rev_right, scoring);

    let mut best: Option<SplitBreakpoint> = None;
    for j in 0..=n {
        let candidate = SplitBreakpoint {
            read_pos: j,
            left_end: forward.split_pos[j],
            right_begin: ref_right.len() - backward.split_pos[n - j],
            left_score: forward.split_score[j],
            right_score: backward.split_score[n - j],
        };
        if best.map_or(true, |b| candidate.score() > b.score()) {
            best = Some(candidate);
        }
    }

    let Some(best) = best else {
        unreachable!("split search covers at least the empty prefix");
    };
    debug!(
        "split breakpoint at read {} (left end {}, right begin {}): {} + {} (single-sided best {} / {})",
        best.read_pos, best.left_end, best.right_begin, best.left_score, best.right_score, forward_best, backward_best
    );
    best
}

fn shifted(segments: Vec<TraceSegment>, dh: usize, dv: usize) -> Vec<TraceSegment> {
    segments
        .into_iter()
        .map(|s| TraceSegment::new(s.op, s.begin_h + dh, s.begin_v + dv, s.len))
        .collect()
}

/// 求断点，再把左右两半分别全局比对写成两条 [`Align`]
pub fn split_alignment<'a, S: Scoring + ?Sized>(
    ref_left: &'a [u8],
    ref_right: &'a [u8],
    read: &'a [u8],
    scoring: &S,
) -> SplitAlignment<'a> {
    let bp = split_breakpoint(ref_left, ref_right, read, scoring);

    let realign = |reference: &'a [u8], ref_range: (usize, usize), read_range: (usize, usize)| {
        let h = &reference[ref_range.0..ref_range.1];
        let v = &read[read_range.0..read_range.1];
        let run = global_run(h, v, &Domain::full(h.len(), v.len()), scoring, FreeEndGaps::none(), true);
        let segments = shifted(run.segments.unwrap_or_default(), ref_range.0, read_range.0);
        let mut align = Align::new(reference, read);
        let (row_ref, row_read) = align.pair_mut();
        if segments.is_empty() {
            row_ref.clip_to(ref_range.0, ref_range.0);
            row_read.clip_to(read_range.0, read_range.0);
        } else {
            adapt_trace_segments(row_ref, row_read, &segments);
        }
        align
    };

    let left = realign(ref_left, (0, bp.left_end), (0, bp.read_pos));
    let right = realign(ref_right, (bp.right_begin, ref_right.len()), (bp.read_pos, read.len()));
    SplitAlignment {
        breakpoint: bp,
        left,
        right,
    }
}
