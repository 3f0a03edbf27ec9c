//! 演示如何在 library 模式下使用 pairalign 做双序列比对。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_align
//! ```

use pairalign::align::{self, Align, ExtendDirection, ExtendMode, Seed};
use pairalign::dp::band::Band;
use pairalign::score::SimpleScore;

fn main() -> pairalign::Result<()> {
    // 1. 仿射间隙全局比对
    let seq_h = b"AAATGACGGATTG";
    let seq_v = b"AGTCGGATCTACTG";
    let scoring = SimpleScore::new(4, -2, -4, -2);

    let mut alignment = Align::new(seq_h, seq_v);
    let score = align::global_alignment(&mut alignment, &scoring)?;
    println!("全局比对得分: {}", score);
    print!("{}", alignment);

    // 2. 带状全局比对：带 [-2, 0] 覆盖原点与终点对角线
    let mut banded = Align::new(b"CDFGHC", b"CDEFGAHC");
    let linear = SimpleScore::linear(0, -1, -1);
    let score = align::global_alignment_banded(&mut banded, &linear, Band::new(-2, 0)?)?;
    println!("带状比对得分: {}", score);
    print!("{}", banded);

    // 3. 局部比对：只保留公共核心，两端被剪切
    let mut local = Align::new(b"CCCCCCGATTACACCCCCC", b"GGGGTTGATTACATTGGGG");
    let score = align::local_alignment(&mut local, &SimpleScore::new(2, -3, -5, -1))?;
    println!(
        "局部比对得分: {}，seqH [{}, {})",
        score,
        local.row(0).clipped_begin(),
        local.row(0).clipped_end()
    );
    print!("{}", local);

    // 4. 种子延伸
    let h = b"The quick BROWN fox jumped again!";
    let v = b"thick BROWNIES for me!";
    let mut seed = Seed::new(11, 7, 14, 10);
    align::extend_seed(&mut seed, h, v, ExtendDirection::Both, ExtendMode::Match, &SimpleScore::linear(1, -1, -1))?;
    println!(
        "种子延伸后: seqH [{}, {}) = '{}'",
        seed.begin_h,
        seed.end_h,
        String::from_utf8_lossy(&h[seed.begin_h..seed.end_h])
    );

    Ok(())
}
