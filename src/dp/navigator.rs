use super::band::Domain;
use super::cell::{CellFlags, CellPos, CellRole, DpCell, NEG_INF};
use super::recurrence::Recurrence;
use super::scout::{Scout, ScoutSignal};
use super::trace::TraceMatrix;
use super::DpProfile;
use crate::score::Scoring;

/// 导航结果：回溯矩阵（若开启）与实际计算的列数
pub(crate) struct Navigation {
    pub trace: Option<TraceMatrix>,
    pub columns: usize,
}

/// 前一列在 `row` 处的格；落在前一列计算区间外时视作不可达
#[inline(always)]
fn lookup(column: &[DpCell], first_row: usize, row: usize) -> DpCell {
    row.checked_sub(first_row)
        .and_then(|i| column.get(i))
        .copied()
        .unwrap_or(DpCell::UNREACHABLE)
}

/// 列优先遍历计算域。
///
/// 只保留两列滚动缓冲（前一列与当前列），按 `row - first_row` 索引；
/// 每列算完交换。每个格先交给 scout，开启回溯时同时记录回溯编码。
/// scout 报告终止后，在当前列结束时停止。
pub(crate) fn navigate<R, S, Sc>(
    seq_h: &[u8],
    seq_v: &[u8],
    domain: &Domain,
    scoring: &S,
    profile: &DpProfile,
    scout: &mut Sc,
) -> Navigation
where
    R: Recurrence,
    S: Scoring + ?Sized,
    Sc: Scout,
{
    let len_h = domain.len_h();
    let len_v = domain.len_v();
    let height = domain.max_height();
    let gap_open = scoring.gap_open();
    let gap_extend = scoring.gap_extend();

    let mut prev: Vec<DpCell> = Vec::with_capacity(height);
    let mut curr: Vec<DpCell> = Vec::with_capacity(height);
    let mut prev_first = 0usize;
    let mut trace = profile
        .traceback
        .then(|| TraceMatrix::with_capacity(len_h + 1, (len_h + 1) * height));
    let mut columns = 0usize;

    for col in 0..=len_h {
        curr.clear();
        let span = domain.rows(col);
        let first_row = span.map_or(0, |(first, _)| first);
        if let Some(t) = trace.as_mut() {
            t.begin_column(first_row);
        }

        let mut stop = false;
        if let Some((first, last)) = span {
            for row in first..=last {
                let left = lookup(&prev, prev_first, row);
                let up = curr.last().copied().unwrap_or(DpCell::UNREACHABLE);

                let diag_score = if col > 0 && row > 0 {
                    let diag = lookup(&prev, prev_first, row - 1).score;
                    if diag <= NEG_INF {
                        NEG_INF
                    } else {
                        diag + scoring.score(seq_h[col - 1], seq_v[row - 1])
                    }
                } else {
                    NEG_INF
                };

                let restart = profile.may_restart(col, row);
                let (cell, bits) = R::compute(diag_score, &left, &up, gap_open, gap_extend, restart);

                let role = if row == last {
                    CellRole::Last
                } else if row == first {
                    CellRole::First
                } else {
                    CellRole::Inner
                };
                let flags = CellFlags {
                    role,
                    last_row: row == len_v,
                    last_column: col == len_h,
                };
                if scout.observe(&cell, CellPos::new(col, row), flags) == ScoutSignal::Terminate {
                    stop = true;
                }
                if let Some(t) = trace.as_mut() {
                    t.push(bits);
                }
                curr.push(cell);
            }
        }

        columns += 1;
        std::mem::swap(&mut prev, &mut curr);
        prev_first = first_row;

        if stop || scout.is_terminated() {
            break;
        }
    }

    Navigation { trace, columns }
}
