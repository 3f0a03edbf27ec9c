use super::gaps::Gaps;
use crate::dp::trace::{assert_contiguous, TraceOp, TraceSegment};

/// 把回溯段写入两行：先清空旧的间隙，按路径首尾剪切，再逐段插入间隙。
///
/// 水平段在 seqV 行插入间隙，垂直段在 seqH 行插入间隙。对同一组回溯段
/// 重复调用得到完全相同的行。空路径得到两条空行。
pub fn adapt_trace_segments(row_h: &mut Gaps<'_>, row_v: &mut Gaps<'_>, segments: &[TraceSegment]) {
    row_h.clear_gaps();
    row_v.clear_gaps();
    assert_contiguous(segments);

    let (first, last) = match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            row_h.clip_to(0, 0);
            row_v.clip_to(0, 0);
            return;
        }
    };
    row_h.clip_to(first.begin_h, last.end_h());
    row_v.clip_to(first.begin_v, last.end_v());

    let mut view_pos = 0usize;
    for seg in segments {
        match seg.op {
            TraceOp::Diagonal => {}
            TraceOp::Horizontal => row_v.insert_gaps(view_pos, seg.len),
            TraceOp::Vertical => row_h.insert_gaps(view_pos, seg.len),
        }
        view_pos += seg.len;
    }
    debug_assert_eq!(row_h.len(), row_v.len());
}
