//! 双序列比对：算法分派、回溯结果写回 [`Align`]、种子延伸、拆分比对与批量比对。
//!
//! 所有入口都先做配置检查（行数、带宽、X-drop 阈值），出错时在任何 DP 计算
//! 之前返回 [`AlignError`](crate::error::AlignError)。

pub mod adapt;
pub mod alignment;
pub mod batch;
pub mod gaps;
pub mod seed;
pub mod split;

pub use adapt::adapt_trace_segments;
pub use alignment::Align;
pub use batch::{align_batch, score_batch};
pub use gaps::Gaps;
pub use seed::{extend_seed, ExtendDirection, ExtendMode, Seed};
pub use split::{split_alignment, split_breakpoint, SplitAlignment, SplitBreakpoint};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dp::band::{Band, Domain};
use crate::dp::scout::{DefaultScout, LocalScout, XDropScout, XDropState};
use crate::dp::trace::{mirror_segments, pad_to_corners, TraceSegment};
use crate::dp::{run_dp, DpOutcome, DpProfile, FreeEndGaps};
use crate::error::{AlignError, Result};
use crate::score::Scoring;

/// 比对算法
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlignAlgorithm {
    /// Needleman-Wunsch 全局比对
    Global,
    /// Smith-Waterman 局部比对
    Local,
    /// 带状全局比对；带必须包含原点与终点
    GlobalBanded(Band),
    LocalBanded(Band),
    /// 从两行开头（Right）或结尾（Left）出发的 X-drop 有间隙延伸
    Extend { direction: ExtendDirection, x_drop: i32 },
    /// 拆分比对，结果是两条比对，见 [`split_alignment`]
    Split,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignConfig {
    pub algorithm: AlignAlgorithm,
    /// 只对全局类算法生效
    pub free_end_gaps: FreeEndGaps,
}

impl AlignConfig {
    pub fn new(algorithm: AlignAlgorithm) -> Self {
        Self {
            algorithm,
            free_end_gaps: FreeEndGaps::none(),
        }
    }

    pub fn with_free_end_gaps(mut self, free: FreeEndGaps) -> Self {
        self.free_end_gaps = free;
        self
    }

}

impl Default for AlignConfig {
    fn default() -> Self {
        Self::new(AlignAlgorithm::Global)
    }
}

/// 一次运行的产物：得分，以及（开启回溯时）源坐标系下的回溯段
struct PairRun {
    score: i32,
    segments: Option<Vec<TraceSegment>>,
}

impl PairRun {
    fn empty(traceback: bool) -> Self {
        Self {
            score: 0,
            segments: traceback.then(Vec::new),
        }
    }
}

fn global_domain(len_h: usize, len_v: usize, band: Option<Band>) -> Result<Domain> {
    match band {
        None => Ok(Domain::full(len_h, len_v)),
        Some(band) => {
            let domain = Domain::banded(len_h, len_v, band)?;
            domain.require_corners()?;
            Ok(domain)
        }
    }
}

fn local_domain(len_h: usize, len_v: usize, band: Option<Band>) -> Result<Domain> {
    match band {
        None => Ok(Domain::full(len_h, len_v)),
        Some(band) => Domain::banded(len_h, len_v, band),
    }
}

fn global_run<S: Scoring + ?Sized>(
    h: &[u8],
    v: &[u8],
    domain: &Domain,
    scoring: &S,
    free: FreeEndGaps,
    traceback: bool,
) -> PairRun {
    if h.is_empty() && v.is_empty() {
        return PairRun::empty(traceback);
    }
    let mut scout = DefaultScout::new(free);
    let out = run_dp(h, v, domain, scoring, &DpProfile::global(free, traceback), &mut scout);
    let segments = traceback.then(|| {
        let (Some(end), Some((start, segments))) = (out.end, out.trace_back()) else {
            unreachable!("global run finished without reaching a final cell");
        };
        pad_to_corners(segments, start, end, h.len(), v.len())
    });
    PairRun {
        score: out.score,
        segments,
    }
}

fn local_run<S: Scoring + ?Sized>(h: &[u8], v: &[u8], domain: &Domain, scoring: &S, traceback: bool) -> PairRun {
    let mut scout = LocalScout::new();
    let out = run_dp(h, v, domain, scoring, &DpProfile::local(traceback), &mut scout);
    if out.score <= 0 {
        return PairRun::empty(traceback);
    }
    let segments = traceback.then(|| {
        let Some((_, segments)) = out.trace_back() else {
            unreachable!("local run with a positive score has no end cell");
        };
        segments
    });
    PairRun {
        score: out.score,
        segments,
    }
}

/// X-drop 延伸的 DP：从原点出发，无剪切重启，由 `state` 决定何时终止
pub(crate) fn xdrop_dp<S: Scoring + ?Sized>(
    h: &[u8],
    v: &[u8],
    scoring: &S,
    state: &mut XDropState,
    traceback: bool,
) -> DpOutcome {
    let domain = Domain::full(h.len(), v.len());
    let mut scout = XDropScout::new(state);
    run_dp(h, v, &domain, scoring, &DpProfile::global(FreeEndGaps::none(), traceback), &mut scout)
}

fn extend_run<S: Scoring + ?Sized>(
    h: &[u8],
    v: &[u8],
    scoring: &S,
    direction: ExtendDirection,
    state: &mut XDropState,
    traceback: bool,
) -> Result<PairRun> {
    if state.threshold < 0 {
        return Err(AlignError::NegativeXDrop(state.threshold));
    }
    let run = match direction {
        ExtendDirection::Right => {
            let out = xdrop_dp(h, v, scoring, state, traceback);
            PairRun {
                score: out.score,
                segments: traceback.then(|| out.trace_back().map(|(_, s)| s).unwrap_or_default()),
            }
        }
        ExtendDirection::Left => {
            let rh: Vec<u8> = h.iter().rev().copied().collect();
            let rv: Vec<u8> = v.iter().rev().copied().collect();
            let out = xdrop_dp(&rh, &rv, scoring, state, traceback);
            PairRun {
                score: out.score,
                segments: traceback.then(|| {
                    let segments = out.trace_back().map(|(_, s)| s).unwrap_or_default();
                    mirror_segments(&segments, h.len(), v.len())
                }),
            }
        }
        ExtendDirection::Both => {
            return Err(AlignError::Unsupported(
                "alignment extension runs in one direction at a time",
            ))
        }
    };
    debug!(
        "x-drop {:?} extension: score {} after {} columns{}",
        direction,
        run.score,
        state.columns_explored(),
        match state.terminated_at() {
            Some(col) => format!(", stopped at column {}", col),
            None => String::new(),
        }
    );
    Ok(run)
}

fn run_pair<S: Scoring + ?Sized>(h: &[u8], v: &[u8], scoring: &S, config: &AlignConfig, tb: bool) -> Result<PairRun> {
    match config.algorithm {
        AlignAlgorithm::Global => Ok(global_run(h, v, &Domain::full(h.len(), v.len()), scoring, config.free_end_gaps, tb)),
        AlignAlgorithm::GlobalBanded(band) => {
            let domain = global_domain(h.len(), v.len(), Some(band))?;
            Ok(global_run(h, v, &domain, scoring, config.free_end_gaps, tb))
        }
        AlignAlgorithm::Local => Ok(local_run(h, v, &Domain::full(h.len(), v.len()), scoring, tb)),
        AlignAlgorithm::LocalBanded(band) => {
            let domain = local_domain(h.len(), v.len(), Some(band))?;
            Ok(local_run(h, v, &domain, scoring, tb))
        }
        AlignAlgorithm::Extend { direction, x_drop } => {
            let mut state = XDropState::new(x_drop);
            extend_run(h, v, scoring, direction, &mut state, tb)
        }
        AlignAlgorithm::Split => Err(AlignError::Unsupported(
            "split alignment yields two alignments, use split_alignment",
        )),
    }
}

/// 按 `config` 比对 `align` 的两行，把回溯写回行中，返回得分。
///
/// 总是使用两行的完整源序列；已有的间隙与剪切被覆盖。只需要得分时用
/// [`pair_score`]。
pub fn align_pair<S: Scoring + ?Sized>(align: &mut Align<'_>, scoring: &S, config: &AlignConfig) -> Result<i32> {
    align.check_pairwise()?;
    let (h, v) = (align.row(0).source(), align.row(1).source());
    let run = run_pair(h, v, scoring, config, true)?;
    let segments = run.segments.unwrap_or_default();
    let (row_h, row_v) = align.pair_mut();
    adapt_trace_segments(row_h, row_v, &segments);
    Ok(run.score)
}

/// 只计算得分，不记录回溯
pub fn pair_score<S: Scoring + ?Sized>(seq_h: &[u8], seq_v: &[u8], scoring: &S, config: &AlignConfig) -> Result<i32> {
    run_pair(seq_h, seq_v, scoring, config, false).map(|run| run.score)
}

pub fn global_alignment<S: Scoring + ?Sized>(align: &mut Align<'_>, scoring: &S) -> Result<i32> {
    align_pair(align, scoring, &AlignConfig::new(AlignAlgorithm::Global))
}

pub fn global_alignment_banded<S: Scoring + ?Sized>(align: &mut Align<'_>, scoring: &S, band: Band) -> Result<i32> {
    align_pair(align, scoring, &AlignConfig::new(AlignAlgorithm::GlobalBanded(band)))
}

pub fn global_alignment_score<S: Scoring + ?Sized>(seq_h: &[u8], seq_v: &[u8], scoring: &S) -> i32 {
    let domain = Domain::full(seq_h.len(), seq_v.len());
    global_run(seq_h, seq_v, &domain, scoring, FreeEndGaps::none(), false).score
}

pub fn global_alignment_banded_score<S: Scoring + ?Sized>(
    seq_h: &[u8],
    seq_v: &[u8],
    scoring: &S,
    band: Band,
) -> Result<i32> {
    let domain = global_domain(seq_h.len(), seq_v.len(), Some(band))?;
    Ok(global_run(seq_h, seq_v, &domain, scoring, FreeEndGaps::none(), false).score)
}

pub fn local_alignment<S: Scoring + ?Sized>(align: &mut Align<'_>, scoring: &S) -> Result<i32> {
    align_pair(align, scoring, &AlignConfig::new(AlignAlgorithm::Local))
}

pub fn local_alignment_banded<S: Scoring + ?Sized>(align: &mut Align<'_>, scoring: &S, band: Band) -> Result<i32> {
    align_pair(align, scoring, &AlignConfig::new(AlignAlgorithm::LocalBanded(band)))
}

pub fn local_alignment_score<S: Scoring + ?Sized>(seq_h: &[u8], seq_v: &[u8], scoring: &S) -> i32 {
    let domain = Domain::full(seq_h.len(), seq_v.len());
    local_run(seq_h, seq_v, &domain, scoring, false).score
}

pub fn local_alignment_banded_score<S: Scoring + ?Sized>(
    seq_h: &[u8],
    seq_v: &[u8],
    scoring: &S,
    band: Band,
) -> Result<i32> {
    let domain = local_domain(seq_h.len(), seq_v.len(), Some(band))?;
    Ok(local_run(seq_h, seq_v, &domain, scoring, false).score)
}

/// X-drop 延伸 `align` 的两行；`state` 的阈值决定何时停止，运行后可读取终止列。
///
/// Right 从两行开头出发，Left 从两行结尾出发；结果剪切到延伸到达的区域。
pub fn extend_alignment<S: Scoring + ?Sized>(
    align: &mut Align<'_>,
    scoring: &S,
    direction: ExtendDirection,
    state: &mut XDropState,
) -> Result<i32> {
    align.check_pairwise()?;
    let (h, v) = (align.row(0).source(), align.row(1).source());
    let run = extend_run(h, v, scoring, direction, state, true)?;
    let segments = run.segments.unwrap_or_default();
    let (row_h, row_v) = align.pair_mut();
    adapt_trace_segments(row_h, row_v, &segments);
    Ok(run.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{EditDistanceScore, SimpleScore};

    fn rows(align: &Align<'_>) -> (String, String) {
        (align.row(0).to_string(), align.row(1).to_string())
    }

    fn random_seq(x: &mut u32, len: usize) -> Vec<u8> {
        let bases = [b'A', b'C', b'G', b'T'];
        (0..len)
            .map(|_| {
                *x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                bases[(*x >> 16) as usize % 4]
            })
            .collect()
    }

    fn strip_gaps(row: &Gaps<'_>) -> Vec<u8> {
        row.iter().flatten().collect()
    }

    #[test]
    fn affine_global_tutorial_pair() {
        let h = b"AAATGACGGATTG";
        let v = b"AGTCGGATCTACTG";
        let mut align = Align::new(h, v);
        let score = global_alignment(&mut align, &SimpleScore::new(4, -2, -4, -2)).unwrap();
        assert_eq!(score, 16);
        assert_eq!(rows(&align), ("AAATGACGGAT----TG".to_string(), "A---GTCGGATCTACTG".to_string()));
        assert_eq!(
            align.to_string(),
            "      0     .    :    .   \n        AAATGACGGAT----TG\n        |   | |||||    ||\n        A---GTCGGATCTACTG\n\n\n"
        );
    }

    #[test]
    fn affine_global_cheap_open_expensive_extend() {
        let h = b"AAATGACGGATTG";
        let v = b"AGTCGGATCTACTG";
        let mut align = Align::new(h, v);
        let score = global_alignment(&mut align, &SimpleScore::new(4, -2, -2, -4)).unwrap();
        assert_eq!(score, 20);
        assert_eq!(rows(&align), ("AAATGACGGA--T--TG".to_string(), "--A-GTCGGATCTACTG".to_string()));
    }

    #[test]
    fn linear_global_layout() {
        let mut align = Align::new(b"CDFGHC", b"CDEFGAHC");
        let score = global_alignment(&mut align, &SimpleScore::linear(0, -1, -1)).unwrap();
        assert_eq!(score, -2);
        assert_eq!(rows(&align), ("CD-FG-HC".to_string(), "CDEFGAHC".to_string()));
        assert_eq!(
            align.to_string(),
            "      0     .    \n        CD-FG-HC\n        || || ||\n        CDEFGAHC\n\n\n"
        );
    }

    #[test]
    fn banded_global_matches_unbanded() {
        let s = SimpleScore::linear(0, -1, -1);
        let mut align = Align::new(b"CDFGHC", b"CDEFGAHC");
        let score = global_alignment_banded(&mut align, &s, Band::new(-2, 0).unwrap()).unwrap();
        assert_eq!(score, -2);
        assert_eq!(rows(&align), ("CD-FG-HC".to_string(), "CDEFGAHC".to_string()));
    }

    #[test]
    fn banded_global_rejects_band_missing_corner() {
        let s = SimpleScore::linear(0, -1, -1);
        let mut align = Align::new(b"CDFGHC", b"CDEFGAHC");
        let err = global_alignment_banded(&mut align, &s, Band::new(-1, 0).unwrap()).unwrap_err();
        assert_eq!(err, AlignError::BandMissesCorner { lower: -1, upper: 0, end_diag: -2 });
        // 出错时两行保持原样
        assert_eq!(rows(&align), ("CDFGHC".to_string(), "CDEFGAHC".to_string()));
    }

    #[test]
    fn band_outside_matrix_is_rejected() {
        let s = SimpleScore::linear(1, -1, -1);
        assert_eq!(
            local_alignment_banded_score(b"ACGT", b"ACGT", &s, Band { lower: 5, upper: 9 }),
            Err(AlignError::BandOutsideMatrix { lower: 5, upper: 9, len_h: 4, len_v: 4 })
        );
        assert_eq!(
            local_alignment_banded_score(b"ACGT", b"ACGT", &s, Band { lower: 2, upper: 1 }),
            Err(AlignError::InvalidBand { lower: 2, upper: 1 })
        );
    }

    #[test]
    fn empty_against_nonempty() {
        let mut align = Align::new(b"ACGT", b"");
        let score = global_alignment(&mut align, &SimpleScore::linear(1, -1, -3)).unwrap();
        assert_eq!(score, -12);
        assert_eq!(rows(&align), ("ACGT".to_string(), "----".to_string()));

        assert_eq!(global_alignment_score(b"", b"ACGT", &SimpleScore::new(1, -1, -2, -1)), -5);
    }

    #[test]
    fn both_empty_is_not_an_error() {
        let mut align = Align::new(b"", b"");
        assert_eq!(global_alignment(&mut align, &SimpleScore::linear(1, -1, -1)).unwrap(), 0);
        assert!(align.is_empty());
        assert_eq!(local_alignment_score(b"", b"", &SimpleScore::linear(1, -1, -1)), 0);
    }

    #[test]
    fn local_bounds_common_substring() {
        let h = b"CCCCCCGATTACACCCCCC";
        let v = b"GGGGTTGATTACATTGGGG";
        for (s, expected) in [
            (SimpleScore::new(2, -3, -5, -1), 14),
            (SimpleScore::linear(1, -1, -1), 7),
            (SimpleScore::new(2, -1, -2, -2), 14),
        ] {
            let mut align = Align::new(h, v);
            assert_eq!(local_alignment(&mut align, &s).unwrap(), expected);
            assert_eq!(rows(&align), ("GATTACA".to_string(), "GATTACA".to_string()));
            assert_eq!((align.row(0).clipped_begin(), align.row(0).clipped_end()), (6, 13));
            assert_eq!((align.row(1).clipped_begin(), align.row(1).clipped_end()), (6, 13));
            assert_eq!(local_alignment_score(h, v, &s), expected);
        }
    }

    #[test]
    fn local_without_positive_cell_is_empty() {
        let mut align = Align::new(b"AAAA", b"TTTT");
        assert_eq!(local_alignment(&mut align, &SimpleScore::linear(1, -1, -1)).unwrap(), 0);
        assert!(align.row(0).is_empty());
        assert!(align.row(1).is_empty());
    }

    #[test]
    fn row_count_checked_before_work() {
        let mut align = Align::from_rows(vec![Gaps::new(b"A"), Gaps::new(b"A"), Gaps::new(b"A")]);
        assert_eq!(
            global_alignment(&mut align, &SimpleScore::linear(1, -1, -1)),
            Err(AlignError::RowCount(3))
        );
    }

    #[test]
    fn split_and_both_are_unsupported_here() {
        let s = SimpleScore::linear(1, -1, -1);
        let mut align = Align::new(b"ACGT", b"ACGT");
        assert!(matches!(
            align_pair(&mut align, &s, &AlignConfig::new(AlignAlgorithm::Split)),
            Err(AlignError::Unsupported(_))
        ));
        let both = AlignAlgorithm::Extend {
            direction: ExtendDirection::Both,
            x_drop: 5,
        };
        assert!(matches!(
            align_pair(&mut align, &s, &AlignConfig::new(both)),
            Err(AlignError::Unsupported(_))
        ));
        let negative = AlignAlgorithm::Extend {
            direction: ExtendDirection::Right,
            x_drop: -1,
        };
        assert_eq!(pair_score(b"A", b"A", &s, &AlignConfig::new(negative)), Err(AlignError::NegativeXDrop(-1)));
    }

    #[test]
    fn free_end_gaps_overlap() {
        let s = SimpleScore::linear(1, -1, -1);
        let config = AlignConfig::new(AlignAlgorithm::Global).with_free_end_gaps(FreeEndGaps {
            first_row: true,
            last_row: true,
            ..FreeEndGaps::none()
        });
        let mut align = Align::new(b"TTTTACGTTTTT", b"ACGT");
        assert_eq!(align_pair(&mut align, &s, &config).unwrap(), 4);
        assert_eq!(rows(&align), ("TTTTACGTTTTT".to_string(), "----ACGT----".to_string()));
        assert_eq!(pair_score(b"TTTTACGTTTTT", b"ACGT", &s, &config).unwrap(), 4);
    }

    #[test]
    fn extend_right_stops_after_divergence() {
        let s = SimpleScore::linear(1, -1, -1);
        let h = b"ACGTACGTTTTTTTTTTTTTTTTTTTTTTTTT";
        let v = b"ACGTACGTGGGGGGGGGGGGGGGGGGGGGGGG";
        let mut align = Align::new(h, v);
        let mut state = XDropState::new(3);
        let score = extend_alignment(&mut align, &s, ExtendDirection::Right, &mut state).unwrap();
        assert_eq!(score, 8);
        assert_eq!(rows(&align), ("ACGTACGT".to_string(), "ACGTACGT".to_string()));
        assert_eq!(state.terminated_at(), Some(11));
    }

    #[test]
    fn extend_left_mirrors_right() {
        let s = SimpleScore::new(2, -3, -5, -2);
        let h = b"TTTTTTTTTTTTGGCATGCAT";
        let v = b"CCCCCCCCCCCCGCATGCAT";
        let mut align = Align::new(h, v);
        let mut state = XDropState::new(4);
        let score = extend_alignment(&mut align, &s, ExtendDirection::Left, &mut state).unwrap();
        assert_eq!(score, 16);
        assert_eq!(rows(&align), ("GCATGCAT".to_string(), "GCATGCAT".to_string()));
        assert_eq!(align.row(0).clipped_end(), h.len());
        assert_eq!(align.row(1).clipped_end(), v.len());
        assert!(state.terminated_at().is_some());
    }

    #[test]
    fn reconstruction_is_idempotent() {
        let s = SimpleScore::new(3, -2, -5, -1);
        let mut a = Align::new(b"GATTACAGATTACA", b"GACAGATTTACA");
        let mut b = Align::new(b"GATTACAGATTACA", b"GACAGATTTACA");
        let sa = global_alignment(&mut a, &s).unwrap();
        global_alignment(&mut b, &s).unwrap();
        let sb = global_alignment(&mut b, &s).unwrap();
        assert_eq!(sa, sb);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn random_pairs_round_trip_and_symmetry() {
        let mut x: u32 = 7;
        let schemes = [
            SimpleScore::new(2, -3, -5, -2),
            SimpleScore::linear(1, -1, -2),
            SimpleScore::new(1, -2, -1, -3),
        ];
        for round in 0..60 {
            let len_h = 1 + (round * 7) % 23;
            let len_v = 1 + (round * 11) % 19;
            let h = random_seq(&mut x, len_h);
            let v = random_seq(&mut x, len_v);
            for s in &schemes {
                let mut hv = Align::new(&h, &v);
                let forward = global_alignment(&mut hv, s).unwrap();
                assert_eq!(strip_gaps(hv.row(0)), h);
                assert_eq!(strip_gaps(hv.row(1)), v);
                assert_eq!(hv.row(0).len(), hv.row(1).len());

                let mut vh = Align::new(&v, &h);
                assert_eq!(global_alignment(&mut vh, s).unwrap(), forward);
                assert_eq!(global_alignment_score(&h, &v, s), forward);

                let mut local = Align::new(&h, &v);
                let ls = local_alignment(&mut local, s).unwrap();
                assert_eq!(local.row(0).len(), local.row(1).len());
                assert_eq!(local_alignment_score(&v, &h, s), ls);
            }
        }
    }

    #[test]
    fn wide_band_equals_unbanded() {
        let mut x: u32 = 1234;
        let s = SimpleScore::new(2, -3, -4, -1);
        for round in 0..40 {
            let h = random_seq(&mut x, 5 + round % 11);
            let v = random_seq(&mut x, 4 + round % 9);
            let band = Band::new(-(v.len() as i64), h.len() as i64).unwrap();
            assert_eq!(
                global_alignment_banded_score(&h, &v, &s, band).unwrap(),
                global_alignment_score(&h, &v, &s)
            );
            assert_eq!(
                local_alignment_banded_score(&h, &v, &s, band).unwrap(),
                local_alignment_score(&h, &v, &s)
            );
        }
    }

    #[test]
    fn larger_xdrop_explores_at_least_as_far() {
        let mut x: u32 = 2024;
        let s = SimpleScore::new(1, -2, -3, -1);
        for _ in 0..30 {
            let h = random_seq(&mut x, 40);
            let v = random_seq(&mut x, 40);
            let mut last = (i32::MIN, 0usize);
            for threshold in [0, 1, 2, 4, 8, 16, 64] {
                let mut state = XDropState::new(threshold);
                let out = xdrop_dp(&h, &v, &s, &mut state, false);
                assert!(out.score >= last.0);
                assert!(out.columns >= last.1);
                last = (out.score, out.columns);
            }
        }
    }

    #[test]
    fn edit_distance_is_negated_levenshtein() {
        assert_eq!(global_alignment_score(b"kitten", b"sitting", &EditDistanceScore), -3);
        assert_eq!(global_alignment_score(b"flaw", b"lawn", &EditDistanceScore), -2);
    }
}
