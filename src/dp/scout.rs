//! Scout：观察每个计算出的单元格，维护最优得分并决定是否提前终止。
//!
//! 四种实现：
//! - [`DefaultScout`]：全局比对，只统计终点格（右下角，或按免费端间隙策略
//!   统计最后一行 / 最后一列）
//! - [`LocalScout`]：任意格的最大值
//! - [`XDropScout`]：任意格的最大值 + 每列末尾的 X-drop 终止检查
//! - [`SplitScout`]：每列的最优得分与行号，终点格转交内部的 `DefaultScout`

use log::trace;

use super::cell::{CellFlags, CellPos, CellRole, DpCell, NEG_INF};
use super::FreeEndGaps;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoutSignal {
    Continue,
    Terminate,
}

pub trait Scout {
    fn observe(&mut self, cell: &DpCell, pos: CellPos, flags: CellFlags) -> ScoutSignal;

    fn best_score(&self) -> i32;

    fn best_pos(&self) -> Option<CellPos>;

    fn is_terminated(&self) -> bool {
        false
    }
}

/// 运行中的最优格；得分严格更大时才替换（列优先顺序下先到者胜）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BestCell {
    score: i32,
    pos: Option<CellPos>,
}

impl BestCell {
    const EMPTY: BestCell = BestCell { score: NEG_INF, pos: None };

    #[inline]
    fn offer(&mut self, score: i32, pos: CellPos) {
        if self.pos.is_none() || score > self.score {
            self.score = score;
            self.pos = Some(pos);
        }
    }
}

/// 全局比对的默认 scout
#[derive(Clone, Debug)]
pub struct DefaultScout {
    best: BestCell,
    free_last_row: bool,
    free_last_column: bool,
}

impl DefaultScout {
    pub fn new(free: FreeEndGaps) -> Self {
        Self {
            best: BestCell::EMPTY,
            free_last_row: free.last_row,
            free_last_column: free.last_column,
        }
    }

    #[inline]
    fn is_final(&self, flags: CellFlags) -> bool {
        (flags.last_row && flags.last_column)
            || (flags.last_row && self.free_last_row)
            || (flags.last_column && self.free_last_column)
    }
}

impl Scout for DefaultScout {
    #[inline]
    fn observe(&mut self, cell: &DpCell, pos: CellPos, flags: CellFlags) -> ScoutSignal {
        if self.is_final(flags) {
            self.best.offer(cell.score, pos);
        }
        ScoutSignal::Continue
    }

    fn best_score(&self) -> i32 {
        self.best.score
    }

    fn best_pos(&self) -> Option<CellPos> {
        self.best.pos
    }
}

/// 局部比对 scout：记录全矩阵最大值
#[derive(Clone, Debug)]
pub struct LocalScout {
    best: BestCell,
}

impl LocalScout {
    pub fn new() -> Self {
        Self { best: BestCell::EMPTY }
    }
}

impl Default for LocalScout {
    fn default() -> Self {
        Self::new()
    }
}

impl Scout for LocalScout {
    #[inline]
    fn observe(&mut self, cell: &DpCell, pos: CellPos, _flags: CellFlags) -> ScoutSignal {
        self.best.offer(cell.score, pos);
        ScoutSignal::Continue
    }

    fn best_score(&self) -> i32 {
        self.best.score
    }

    fn best_pos(&self) -> Option<CellPos> {
        self.best.pos
    }
}

/// X-drop 状态，由调用方持有，运行结束后可读取终止位置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XDropState {
    pub threshold: i32,
    column_max: i32,
    columns_explored: usize,
    terminated_at: Option<usize>,
}

impl XDropState {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            column_max: NEG_INF,
            columns_explored: 0,
            terminated_at: None,
        }
    }

    /// 本次运行完整计算过的列数
    pub fn columns_explored(&self) -> usize {
        self.columns_explored
    }

    /// 触发终止的列号；跑完整个矩阵时为 `None`
    pub fn terminated_at(&self) -> Option<usize> {
        self.terminated_at
    }

    fn reset(&mut self) {
        self.column_max = NEG_INF;
        self.columns_explored = 0;
        self.terminated_at = None;
    }
}

impl Default for XDropState {
    /// 阈值为 `i32::MAX`，永不终止
    fn default() -> Self {
        Self::new(i32::MAX)
    }
}

/// X-drop 终止 scout
pub struct XDropScout<'s> {
    best: BestCell,
    state: &'s mut XDropState,
    terminated: bool,
}

impl<'s> XDropScout<'s> {
    pub fn new(state: &'s mut XDropState) -> Self {
        state.reset();
        Self {
            best: BestCell::EMPTY,
            state,
            terminated: false,
        }
    }
}

impl Scout for XDropScout<'_> {
    #[inline]
    fn observe(&mut self, cell: &DpCell, pos: CellPos, flags: CellFlags) -> ScoutSignal {
        self.best.offer(cell.score, pos);
        self.state.column_max = self.state.column_max.max(cell.score);

        if flags.role != CellRole::Last {
            return ScoutSignal::Continue;
        }

        self.state.columns_explored += 1;
        let drop = self.best.score - self.state.column_max;
        if drop >= self.state.threshold {
            trace!("x-drop: column {} max {} best {} -> terminate", pos.col, self.state.column_max, self.best.score);
            self.terminated = true;
            self.state.terminated_at = Some(pos.col);
            ScoutSignal::Terminate
        } else {
            self.state.column_max = NEG_INF;
            ScoutSignal::Continue
        }
    }

    fn best_score(&self) -> i32 {
        self.best.score
    }

    fn best_pos(&self) -> Option<CellPos> {
        self.best.pos
    }

    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

/// 拆分比对状态：每列（seqH 位置）的最优得分与所在行
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitState {
    pub split_score: Vec<i32>,
    pub split_pos: Vec<usize>,
}

impl SplitState {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self, columns: usize) {
        self.split_score.clear();
        self.split_score.resize(columns, NEG_INF);
        self.split_pos.clear();
        self.split_pos.resize(columns, 0);
    }
}

/// 拆分比对 scout，组合一个 `DefaultScout` 负责终点
pub struct SplitScout<'s> {
    parent: DefaultScout,
    state: &'s mut SplitState,
}

impl<'s> SplitScout<'s> {
    pub fn new(state: &'s mut SplitState, len_h: usize, free: FreeEndGaps) -> Self {
        state.reset(len_h + 1);
        Self {
            parent: DefaultScout::new(free),
            state,
        }
    }
}

impl Scout for SplitScout<'_> {
    #[inline]
    fn observe(&mut self, cell: &DpCell, pos: CellPos, flags: CellFlags) -> ScoutSignal {
        let slot = &mut self.state.split_score[pos.col];
        if *slot < cell.score {
            *slot = cell.score;
            self.state.split_pos[pos.col] = pos.row;
        }
        if flags.last_row || flags.last_column {
            self.parent.observe(cell, pos, flags);
        }
        ScoutSignal::Continue
    }

    fn best_score(&self) -> i32 {
        self.parent.best_score()
    }

    fn best_pos(&self) -> Option<CellPos> {
        self.parent.best_pos()
    }
}
