use std::fmt;

use super::gaps::{Gaps, GAP_CHAR};
use crate::error::{AlignError, Result};

/// 每个显示窗口的列数
const WINDOW: usize = 50;

/// 表格形式的比对结果：若干带间隙的行（双序列比对恰好两行）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Align<'a> {
    rows: Vec<Gaps<'a>>,
}

impl<'a> Align<'a> {
    /// 双序列比对：第 0 行为 seqH，第 1 行为 seqV
    pub fn new(seq_h: &'a [u8], seq_v: &'a [u8]) -> Self {
        Self {
            rows: vec![Gaps::new(seq_h), Gaps::new(seq_v)],
        }
    }

    pub fn from_rows(rows: Vec<Gaps<'a>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Gaps<'a>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> &Gaps<'a> {
        &self.rows[i]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut Gaps<'a> {
        &mut self.rows[i]
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// 比对列数：各行视图长度的最小值
    pub fn len(&self) -> usize {
        self.rows.iter().map(Gaps::len).min().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 第 `i` 列在各行上的字符，间隙为 `None`
    pub fn column(&self, i: usize) -> Vec<Option<u8>> {
        self.rows.iter().map(|r| r.get(i)).collect()
    }

    pub fn columns(&self) -> impl Iterator<Item = Vec<Option<u8>>> + '_ {
        (0..self.len()).map(move |i| self.column(i))
    }

    pub fn clear_clipping(&mut self) {
        self.rows.iter_mut().for_each(Gaps::clear_clipping);
    }

    pub fn clear_gaps(&mut self) {
        self.rows.iter_mut().for_each(Gaps::clear_gaps);
    }

    /// 双序列算法的前置检查
    pub fn check_pairwise(&self) -> Result<()> {
        if self.rows.len() != 2 {
            return Err(AlignError::RowCount(self.rows.len()));
        }
        Ok(())
    }

    pub(crate) fn pair_mut(&mut self) -> (&mut Gaps<'a>, &mut Gaps<'a>) {
        let (h, v) = self.rows.split_at_mut(1);
        (&mut h[0], &mut v[0])
    }
}

/// 按 50 列一窗输出：列号 + 刻度尺，每行之间一条匹配指示行（`|` 表示相同字符）
impl fmt::Display for Align<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.len();
        let rows: Vec<Vec<Option<u8>>> = self.rows.iter().map(|r| r.iter().collect()).collect();

        let mut begin = 0usize;
        while begin < end {
            let width = WINDOW.min(end - begin);

            write!(f, "{:7} ", begin)?;
            for k in 1..=width {
                let tick = if k % 10 == 0 {
                    ':'
                } else if k % 5 == 0 {
                    '.'
                } else {
                    ' '
                };
                write!(f, "{}", tick)?;
            }
            writeln!(f, " ")?;

            for (i, row) in rows.iter().enumerate() {
                let cells = &row[begin..begin + width];
                let line: String = cells.iter().map(|c| c.unwrap_or(GAP_CHAR) as char).collect();
                writeln!(f, "        {}", line)?;

                if let Some(next) = rows.get(i + 1) {
                    let marks: String = cells
                        .iter()
                        .zip(&next[begin..begin + width])
                        .map(|(a, b)| match (a, b) {
                            (Some(x), Some(y)) if x == y => '|',
                            _ => ' ',
                        })
                        .collect();
                    writeln!(f, "        {}", marks)?;
                }
            }
            writeln!(f)?;
            begin += width;
        }
        writeln!(f)
    }
}
