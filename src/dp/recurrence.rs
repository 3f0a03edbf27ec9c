use super::cell::DpCell;
use super::trace::code;

/// 单元格递推。
///
/// 线性 / 仿射两种间隙模型各实现一次，导航器按模型单态化，
/// 内层循环里没有模型分支。
pub trait Recurrence {
    const NAME: &'static str;

    /// 由三个前驱计算当前格，返回新单元格与回溯编码。
    ///
    /// `diag_score` 已经加上替换得分（对角前驱不可达时为 `NEG_INF`）；
    /// `restart` 为真时允许以 0 分重新开始（局部比对、原点、免费端间隙边界）。
    fn compute(
        diag_score: i32,
        left: &DpCell,
        up: &DpCell,
        gap_open: i32,
        gap_extend: i32,
        restart: bool,
    ) -> (DpCell, u8);
}

pub struct LinearGaps;

pub struct AffineGaps;

/// 取最大值；相等时的优先级：对角 > 垂直 > 水平 > 重新开始
#[inline(always)]
fn select(diag_score: i32, vertical: i32, horizontal: i32, restart: bool) -> (i32, u8) {
    let mut best = diag_score;
    let mut src = code::DIAGONAL;
    if vertical > best {
        best = vertical;
        src = code::VERTICAL;
    }
    if horizontal > best {
        best = horizontal;
        src = code::HORIZONTAL;
    }
    if restart && best <= 0 {
        best = 0;
        src = code::STOP;
    }
    (best, src)
}

impl Recurrence for LinearGaps {
    const NAME: &'static str = "linear";

    #[inline(always)]
    fn compute(
        diag_score: i32,
        left: &DpCell,
        up: &DpCell,
        _gap_open: i32,
        gap_extend: i32,
        restart: bool,
    ) -> (DpCell, u8) {
        let vertical = up.score + gap_extend;
        let horizontal = left.score + gap_extend;
        let (score, src) = select(diag_score, vertical, horizontal, restart);
        let cell = DpCell {
            score,
            ..DpCell::UNREACHABLE
        };
        // 线性模型里每个间隙位置都等价于“开启”
        (cell, src | code::VERTICAL_OPEN | code::HORIZONTAL_OPEN)
    }
}

impl Recurrence for AffineGaps {
    const NAME: &'static str = "affine";

    #[inline(always)]
    fn compute(
        diag_score: i32,
        left: &DpCell,
        up: &DpCell,
        gap_open: i32,
        gap_extend: i32,
        restart: bool,
    ) -> (DpCell, u8) {
        let mut bits = 0u8;

        let v_open = up.score + gap_open;
        let v_ext = up.gap_v + gap_extend;
        let gap_v = if v_open >= v_ext {
            bits |= code::VERTICAL_OPEN;
            v_open
        } else {
            v_ext
        };

        let h_open = left.score + gap_open;
        let h_ext = left.gap_h + gap_extend;
        let gap_h = if h_open >= h_ext {
            bits |= code::HORIZONTAL_OPEN;
            h_open
        } else {
            h_ext
        };

        let (score, src) = select(diag_score, gap_v, gap_h, restart);
        (DpCell { score, gap_h, gap_v }, src | bits)
    }
}
