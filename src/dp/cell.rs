/// 不可达 / 带外单元格的得分。取 `i32::MIN / 4` 以便再加若干代价也不会溢出。
pub const NEG_INF: i32 = i32::MIN / 4;

/// DP 单元格。
///
/// `score` 是以该格结束的最优得分；`gap_h` / `gap_v` 是仿射模型下分别以
/// 水平间隙（消耗 seqH 字符）和垂直间隙（消耗 seqV 字符）结束的最优得分。
/// 线性模型不使用这两个字段，保持为 [`NEG_INF`]。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DpCell {
    pub score: i32,
    pub gap_h: i32,
    pub gap_v: i32,
}

impl DpCell {
    pub const UNREACHABLE: DpCell = DpCell {
        score: NEG_INF,
        gap_h: NEG_INF,
        gap_v: NEG_INF,
    };
}

impl Default for DpCell {
    fn default() -> Self {
        Self::UNREACHABLE
    }
}

/// 矩阵坐标：`col` 沿 seqH（0..=len_h），`row` 沿 seqV（0..=len_v）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub col: usize,
    pub row: usize,
}

impl CellPos {
    pub const ORIGIN: CellPos = CellPos { col: 0, row: 0 };

    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// 单元格在当前列中的角色；只有一个格的列视为 `Last`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRole {
    First,
    Inner,
    Last,
}

/// 传给 scout 的单元格上下文
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellFlags {
    pub role: CellRole,
    /// 矩阵最后一行（row == len_v）
    pub last_row: bool,
    /// 矩阵最后一列（col == len_h）
    pub last_column: bool,
}
