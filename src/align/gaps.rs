use std::fmt;

use crate::error::{AlignError, Result};

/// 渲染间隙时使用的字符
pub const GAP_CHAR: u8 = b'-';

/// 带间隙的行：源序列上的一个视图。
///
/// 视图 = `source[clip_begin..clip_end]` 中插入若干间隙段。间隙段以
/// `(源位置, 长度)` 保存，表示插在源字符 `pos` 之前（`pos == clip_end`
/// 表示尾部间隙）；按位置升序、位置唯一、长度非零。
#[derive(Clone, Debug)]
pub struct Gaps<'a> {
    source: &'a [u8],
    gaps: Vec<(usize, usize)>,
    clip_begin: usize,
    clip_end: usize,
}

impl<'a> Gaps<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            gaps: Vec::new(),
            clip_begin: 0,
            clip_end: source.len(),
        }
    }

    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// 视图长度（字符 + 间隙）
    pub fn len(&self) -> usize {
        self.clip_end - self.clip_begin + self.gaps.iter().map(|&(_, n)| n).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clipped_begin(&self) -> usize {
        self.clip_begin
    }

    pub fn clipped_end(&self) -> usize {
        self.clip_end
    }

    /// 视图中的源字符（去掉间隙）
    pub fn ungapped(&self) -> &'a [u8] {
        &self.source[self.clip_begin..self.clip_end]
    }

    /// 设置剪切区间 `[begin, end)`；落在新区间外的间隙段被丢弃
    pub fn set_clipping(&mut self, begin: usize, end: usize) -> Result<()> {
        if begin > end || end > self.source.len() {
            return Err(AlignError::ClippingOutOfRange {
                begin,
                end,
                len: self.source.len(),
            });
        }
        self.clip_to(begin, end);
        Ok(())
    }

    pub(crate) fn clip_to(&mut self, begin: usize, end: usize) {
        assert!(begin <= end && end <= self.source.len(), "clipping [{}, {}) out of range", begin, end);
        self.clip_begin = begin;
        self.clip_end = end;
        self.gaps.retain(|&(pos, _)| begin <= pos && pos <= end);
    }

    pub fn clear_clipping(&mut self) {
        self.clip_to(0, self.source.len());
    }

    pub fn clear_gaps(&mut self) {
        self.gaps.clear();
    }

    pub fn gap_runs(&self) -> &[(usize, usize)] {
        &self.gaps
    }

    /// 在视图位置 `view_pos` 插入 `count` 个间隙（`view_pos == len()` 时追加在末尾）。
    ///
    /// 插入点紧邻已有间隙段时并入该段，保持段位置唯一。
    pub fn insert_gaps(&mut self, view_pos: usize, count: usize) {
        if count == 0 {
            return;
        }
        assert!(view_pos <= self.len(), "gap insertion at {} beyond row of length {}", view_pos, self.len());

        let mut gaps_before = 0usize;
        for idx in 0..self.gaps.len() {
            let (pos, n) = self.gaps[idx];
            let anchor = self.clip_begin + view_pos - gaps_before;
            if anchor < pos {
                self.gaps.insert(idx, (anchor, count));
                return;
            }
            // 源字符 pos 在视图中的位置
            if view_pos <= pos - self.clip_begin + gaps_before + n {
                self.gaps[idx].1 += count;
                return;
            }
            gaps_before += n;
        }
        let anchor = self.clip_begin + view_pos - gaps_before;
        debug_assert!(anchor <= self.clip_end);
        self.gaps.push((anchor, count));
    }

    /// 定位视图位置：`Ok(源下标)` 为字符，`Err((间隙段下标, 段内剩余长度))` 为间隙
    fn locate(&self, view_pos: usize) -> std::result::Result<usize, (usize, usize)> {
        let mut gaps_before = 0usize;
        for (idx, &(pos, n)) in self.gaps.iter().enumerate() {
            let run_start = pos - self.clip_begin + gaps_before;
            if view_pos < run_start {
                break;
            }
            if view_pos < run_start + n {
                return Err((idx, run_start + n - view_pos));
            }
            gaps_before += n;
        }
        Ok(self.clip_begin + view_pos - gaps_before)
    }

    pub fn is_gap(&self, view_pos: usize) -> bool {
        self.get(view_pos).is_none()
    }

    /// 视图位置上的字符，间隙返回 `None`
    pub fn get(&self, view_pos: usize) -> Option<u8> {
        assert!(view_pos < self.len(), "view position {} out of range", view_pos);
        self.locate(view_pos).ok().map(|i| self.source[i])
    }

    /// 视图位置对应的源位置；落在间隙上时返回其后第一个字符的源位置
    pub fn to_source_position(&self, view_pos: usize) -> usize {
        assert!(view_pos <= self.len(), "view position {} out of range", view_pos);
        match self.locate(view_pos) {
            Ok(i) => i,
            Err((idx, _)) => self.gaps[idx].0,
        }
    }

    /// 源位置在视图中的位置；`clipped_end()` 映射到 `len()`
    pub fn to_view_position(&self, source_pos: usize) -> usize {
        assert!(
            self.clip_begin <= source_pos && source_pos <= self.clip_end,
            "source position {} outside clipping [{}, {})",
            source_pos,
            self.clip_begin,
            self.clip_end
        );
        let gaps: usize = self.gaps.iter().take_while(|&&(pos, _)| pos <= source_pos).map(|&(_, n)| n).sum();
        source_pos - self.clip_begin + gaps
    }

    /// 从 `view_pos` 开始连续的间隙个数
    pub fn count_gaps(&self, view_pos: usize) -> usize {
        if view_pos >= self.len() {
            return 0;
        }
        match self.locate(view_pos) {
            Ok(_) => 0,
            Err((_, remaining)) => remaining,
        }
    }

    pub fn iter(&self) -> GapsIter<'_, 'a> {
        GapsIter {
            gaps: self,
            pos: self.clip_begin,
            run: 0,
            emitted: 0,
        }
    }
}

/// 依次产出视图中的字符（`Some`）与间隙（`None`）
pub struct GapsIter<'g, 'a> {
    gaps: &'g Gaps<'a>,
    pos: usize,
    run: usize,
    emitted: usize,
}

impl Iterator for GapsIter<'_, '_> {
    type Item = Option<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(&(anchor, n)) = self.gaps.gaps.get(self.run) {
            if anchor == self.pos {
                if self.emitted < n {
                    self.emitted += 1;
                    return Some(None);
                }
                self.run += 1;
                self.emitted = 0;
            }
        }
        if self.pos < self.gaps.clip_end {
            let c = self.gaps.source[self.pos];
            self.pos += 1;
            Some(Some(c))
        } else {
            None
        }
    }
}

impl PartialEq for Gaps<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Gaps<'_> {}

impl fmt::Display for Gaps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.iter().map(|c| c.unwrap_or(GAP_CHAR) as char).collect();
        f.write_str(&s)
    }
}
