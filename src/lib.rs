//! # pairalign
//!
//! 双序列比对的动态规划引擎。
//!
//! 本 crate 提供：
//!
//! - **打分模型**：匹配 / 错配得分 + 线性或仿射间隙代价，另有编辑距离与替换矩阵
//! - **DP 核心**：Gotoh 递推、对角带限制、列优先导航与紧凑回溯矩阵
//! - **Scout**：全局终点、局部最大值、X-drop 提前终止、按列记录的拆分断点
//! - **比对结果**：带间隙的行与 [`Align`](align::Align) 表格，支持剪切与带刻度尺的文本输出
//! - **上层算法**：全局 / 局部 / 带状比对、X-drop 延伸、种子延伸、拆分比对、rayon 批量比对
//!
//! ## 快速示例
//!
//! ```rust
//! use pairalign::align::{global_alignment, Align};
//! use pairalign::score::SimpleScore;
//!
//! let mut align = Align::new(b"CDFGHC", b"CDEFGAHC");
//! let score = global_alignment(&mut align, &SimpleScore::linear(0, -1, -1)).unwrap();
//! assert_eq!(score, -2);
//! assert_eq!(align.row(0).to_string(), "CD-FG-HC");
//! print!("{}", align);
//! ```
//!
//! ## 模块说明
//!
//! - [`score`]：打分模型
//! - [`dp`]：单元格、递推、计算域、scout、导航与回溯
//! - [`align`]：比对结果类型与各种比对算法
//! - [`error`]：配置错误
//! - [`io`]：FASTA 读取（供命令行使用）
//! - [`util`]：核酸编码 / 反向互补

pub mod align;
pub mod dp;
pub mod error;
pub mod io;
pub mod score;
pub mod util;

pub use align::{Align, AlignAlgorithm, AlignConfig, Gaps};
pub use dp::band::Band;
pub use dp::FreeEndGaps;
pub use error::{AlignError, Result};
pub use score::{EditDistanceScore, MatrixScore, Scoring, SimpleScore};
