use super::cell::CellPos;

/// 每个单元格一个字节的回溯编码。
///
/// 低两位记录 `score` 来自哪个前驱；另外两位记录该格的垂直 / 水平间隙状态
/// 是在此处新开启的（来自前驱的 `score`）还是从前驱的间隙状态延伸而来。
pub mod code {
    pub const STOP: u8 = 0;
    pub const DIAGONAL: u8 = 1;
    pub const VERTICAL: u8 = 2;
    pub const HORIZONTAL: u8 = 3;
    pub const SOURCE_MASK: u8 = 0b11;
    pub const VERTICAL_OPEN: u8 = 0b0100;
    pub const HORIZONTAL_OPEN: u8 = 0b1000;
}

/// 回溯段的操作类型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraceOp {
    /// 匹配 / 错配，同时消耗 seqH 与 seqV
    Diagonal,
    /// 只消耗 seqH，seqV 一行插入间隙
    Horizontal,
    /// 只消耗 seqV，seqH 一行插入间隙
    Vertical,
}

/// 一段同类操作，覆盖矩阵坐标 `[begin, begin + len)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TraceSegment {
    pub op: TraceOp,
    pub begin_h: usize,
    pub begin_v: usize,
    pub len: usize,
}

impl TraceSegment {
    pub fn new(op: TraceOp, begin_h: usize, begin_v: usize, len: usize) -> Self {
        Self { op, begin_h, begin_v, len }
    }

    pub fn end_h(&self) -> usize {
        match self.op {
            TraceOp::Vertical => self.begin_h,
            _ => self.begin_h + self.len,
        }
    }

    pub fn end_v(&self) -> usize {
        match self.op {
            TraceOp::Horizontal => self.begin_v,
            _ => self.begin_v + self.len,
        }
    }
}

/// 追加一段，与末尾同类且首尾相接的段合并；长度为 0 的段直接丢弃
pub(crate) fn push_segment(segments: &mut Vec<TraceSegment>, seg: TraceSegment) {
    if seg.len == 0 {
        return;
    }
    if let Some(last) = segments.last_mut() {
        if last.op == seg.op && last.end_h() == seg.begin_h && last.end_v() == seg.begin_v {
            last.len += seg.len;
            return;
        }
    }
    segments.push(seg);
}

#[derive(Clone, Copy, Debug)]
struct ColumnSpan {
    first_row: usize,
    len: usize,
    offset: usize,
}

/// 带状存储的回溯矩阵：每列只保存计算过的行
#[derive(Debug, Default)]
pub struct TraceMatrix {
    columns: Vec<ColumnSpan>,
    data: Vec<u8>,
}

impl TraceMatrix {
    pub fn with_capacity(columns: usize, cells: usize) -> Self {
        Self {
            columns: Vec::with_capacity(columns),
            data: Vec::with_capacity(cells),
        }
    }

    /// 开始新的一列；空列（带外）也要调用以保持列号对齐
    pub fn begin_column(&mut self, first_row: usize) {
        self.columns.push(ColumnSpan {
            first_row,
            len: 0,
            offset: self.data.len(),
        });
    }

    #[inline]
    pub fn push(&mut self, bits: u8) {
        self.data.push(bits);
        if let Some(span) = self.columns.last_mut() {
            span.len += 1;
        }
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn get(&self, pos: CellPos) -> u8 {
        let span = self.columns.get(pos.col).copied();
        match span {
            Some(s) if pos.row >= s.first_row && pos.row - s.first_row < s.len => {
                self.data[s.offset + pos.row - s.first_row]
            }
            _ => panic!("trace walk left the computed region at {:?}", pos),
        }
    }
}

fn emit(ops: &mut Vec<(TraceOp, usize)>, op: TraceOp) {
    match ops.last_mut() {
        Some((last, n)) if *last == op => *n += 1,
        _ => ops.push((op, 1)),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Score,
    VerticalGap,
    HorizontalGap,
}

/// 从 `end` 沿回溯编码走到 STOP 格，返回起点与正向排列的回溯段。
///
/// 线性与仿射共用同一套状态机：在间隙状态中，只有遇到“开启”位才回到
/// 主状态。
pub fn trace_back(matrix: &TraceMatrix, end: CellPos) -> (CellPos, Vec<TraceSegment>) {
    let mut ops: Vec<(TraceOp, usize)> = Vec::new();
    let mut pos = end;
    let mut state = WalkState::Score;

    loop {
        let bits = matrix.get(pos);
        match state {
            WalkState::Score => match bits & code::SOURCE_MASK {
                code::STOP => break,
                code::DIAGONAL => {
                    emit(&mut ops, TraceOp::Diagonal);
                    pos.col -= 1;
                    pos.row -= 1;
                }
                code::VERTICAL => state = WalkState::VerticalGap,
                _ => state = WalkState::HorizontalGap,
            },
            WalkState::VerticalGap => {
                emit(&mut ops, TraceOp::Vertical);
                if bits & code::VERTICAL_OPEN != 0 {
                    state = WalkState::Score;
                }
                pos.row -= 1;
            }
            WalkState::HorizontalGap => {
                emit(&mut ops, TraceOp::Horizontal);
                if bits & code::HORIZONTAL_OPEN != 0 {
                    state = WalkState::Score;
                }
                pos.col -= 1;
            }
        }
    }

    let start = pos;
    let mut segments = Vec::with_capacity(ops.len());
    let (mut h, mut v) = (start.col, start.row);
    for &(op, len) in ops.iter().rev() {
        let seg = TraceSegment::new(op, h, v, len);
        h = seg.end_h();
        v = seg.end_v();
        segments.push(seg);
    }
    (start, segments)
}

/// 全局比对：把路径补齐到 (0,0) 与 (len_h, len_v)，免费端间隙落在这两端
pub fn pad_to_corners(
    segments: Vec<TraceSegment>,
    start: CellPos,
    end: CellPos,
    len_h: usize,
    len_v: usize,
) -> Vec<TraceSegment> {
    assert!(start.col == 0 || start.row == 0, "global trace must start on the first row or column");
    assert!(end.col == len_h || end.row == len_v, "global trace must end on the last row or column");

    let mut out = Vec::with_capacity(segments.len() + 2);
    push_segment(&mut out, TraceSegment::new(TraceOp::Horizontal, 0, 0, start.col));
    push_segment(&mut out, TraceSegment::new(TraceOp::Vertical, 0, 0, start.row));
    for seg in segments {
        push_segment(&mut out, seg);
    }
    push_segment(&mut out, TraceSegment::new(TraceOp::Horizontal, end.col, end.row, len_h - end.col));
    push_segment(&mut out, TraceSegment::new(TraceOp::Vertical, end.col, end.row, len_v - end.row));
    out
}

/// 反转序列上得到的回溯段映射回原始坐标（用于向左延伸）
pub fn mirror_segments(segments: &[TraceSegment], len_h: usize, len_v: usize) -> Vec<TraceSegment> {
    let mut out = Vec::with_capacity(segments.len());
    for seg in segments.iter().rev() {
        let begin_h = len_h - seg.end_h();
        let begin_v = len_v - seg.end_v();
        push_segment(&mut out, TraceSegment::new(seg.op, begin_h, begin_v, seg.len));
    }
    out
}

/// 检查回溯段首尾相接；不连续说明导航器有 bug
pub fn assert_contiguous(segments: &[TraceSegment]) {
    for w in segments.windows(2) {
        assert!(
            w[0].end_h() == w[1].begin_h && w[0].end_v() == w[1].begin_v,
            "trace segments are not contiguous: {:?} -> {:?}",
            w[0],
            w[1]
        );
        assert!(w[0].len > 0, "zero-length trace segment {:?}", w[0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(cols: &[&[u8]]) -> TraceMatrix {
        let mut m = TraceMatrix::default();
        for col in cols {
            m.begin_column(0);
            for &b in col.iter() {
                m.push(b);
            }
        }
        m
    }

    #[test]
    fn diagonal_walk_produces_one_segment() {
        use code::*;
        let m = matrix(&[&[STOP, STOP, STOP], &[STOP, DIAGONAL, DIAGONAL], &[STOP, DIAGONAL, DIAGONAL]]);
        let (start, segs) = trace_back(&m, CellPos::new(2, 2));
        assert_eq!(start, CellPos::ORIGIN);
        assert_eq!(segs, vec![TraceSegment::new(TraceOp::Diagonal, 0, 0, 2)]);
    }

    #[test]
    fn affine_gap_state_is_followed_until_open() {
        use code::*;
        // 第 1 列第 1 行为对角；第 1 列第 2、3 行为垂直间隙：第 2 行开启，第 3 行延伸
        let m = matrix(&[
            &[STOP, STOP, STOP, STOP],
            &[STOP, DIAGONAL, VERTICAL | VERTICAL_OPEN, VERTICAL],
        ]);
        let (start, segs) = trace_back(&m, CellPos::new(1, 3));
        assert_eq!(start, CellPos::ORIGIN);
        assert_eq!(
            segs,
            vec![
                TraceSegment::new(TraceOp::Diagonal, 0, 0, 1),
                TraceSegment::new(TraceOp::Vertical, 1, 1, 2),
            ]
        );
        assert_contiguous(&segs);
    }

    #[test]
    fn padding_reaches_both_corners() {
        let segs = vec![TraceSegment::new(TraceOp::Diagonal, 0, 2, 3)];
        let padded = pad_to_corners(segs, CellPos::new(0, 2), CellPos::new(3, 5), 3, 7);
        assert_eq!(
            padded,
            vec![
                TraceSegment::new(TraceOp::Vertical, 0, 0, 2),
                TraceSegment::new(TraceOp::Diagonal, 0, 2, 3),
                TraceSegment::new(TraceOp::Vertical, 3, 5, 2),
            ]
        );
    }

    #[test]
    fn mirror_reverses_coordinates() {
        let segs = vec![
            TraceSegment::new(TraceOp::Diagonal, 0, 0, 2),
            TraceSegment::new(TraceOp::Horizontal, 2, 2, 1),
        ];
        let m = mirror_segments(&segs, 5, 4);
        assert_eq!(
            m,
            vec![
                TraceSegment::new(TraceOp::Horizontal, 2, 2, 1),
                TraceSegment::new(TraceOp::Diagonal, 3, 2, 2),
            ]
        );
        assert_contiguous(&m);
    }

    #[test]
    #[should_panic(expected = "not contiguous")]
    fn gap_between_segments_is_fatal() {
        assert_contiguous(&[
            TraceSegment::new(TraceOp::Diagonal, 0, 0, 2),
            TraceSegment::new(TraceOp::Diagonal, 3, 3, 1),
        ]);
    }
}
