use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pairalign::align::{self, Align, AlignAlgorithm, AlignConfig, ExtendDirection, ExtendMode, Seed};
use pairalign::dp::band::Band;
use pairalign::dp::scout::XDropState;
use pairalign::score::SimpleScore;

fn make_sequence(len: usize, seed: u32) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = seed;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

/// 每隔 `every` 个位置引入一个替换，制造高相似度的读段
fn mutate(seq: &[u8], every: usize) -> Vec<u8> {
    seq.iter()
        .enumerate()
        .map(|(i, &b)| if i % every == every / 2 { if b == b'A' { b'C' } else { b'A' } } else { b })
        .collect()
}

fn scoring() -> SimpleScore {
    SimpleScore::new(2, -3, -5, -2)
}

fn bench_global_affine(c: &mut Criterion) {
    let h = make_sequence(500, 42);
    let v = mutate(&h, 17);
    let s = scoring();

    c.bench_function("global_affine_500bp_traceback", |b| {
        b.iter(|| {
            let mut alignment = Align::new(black_box(&h), black_box(&v));
            black_box(align::global_alignment(&mut alignment, &s).unwrap());
        })
    });
    c.bench_function("global_affine_500bp_score_only", |b| {
        b.iter(|| black_box(align::global_alignment_score(black_box(&h), black_box(&v), &s)))
    });
}

fn bench_banded_local(c: &mut Criterion) {
    let h = make_sequence(1_000, 7);
    let v = mutate(&h, 23);
    let s = scoring();
    let band = Band::new(-16, 16).unwrap();

    c.bench_function("local_banded_1kbp_w33", |b| {
        b.iter(|| black_box(align::local_alignment_banded_score(black_box(&h), black_box(&v), &s, band).unwrap()))
    });
}

fn bench_xdrop_extension(c: &mut Criterion) {
    let reference = make_sequence(2_000, 99);
    let mut read = mutate(&reference[..300], 31);
    read.extend(make_sequence(300, 5));
    let s = scoring();

    c.bench_function("xdrop_extend_right_600bp", |b| {
        b.iter(|| {
            let mut state = XDropState::new(30);
            let mut alignment = Align::new(black_box(&reference), black_box(&read));
            black_box(align::extend_alignment(&mut alignment, &s, ExtendDirection::Right, &mut state).unwrap());
        })
    });
    c.bench_function("seed_gapped_xdrop_both", |b| {
        b.iter(|| {
            let mut seed = Seed::with_length(140, 140, 20);
            align::extend_seed(&mut seed, &reference, &read, ExtendDirection::Both, ExtendMode::GappedXDrop(30), &s)
                .unwrap();
            black_box(seed)
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let seqs: Vec<Vec<u8>> = (0..64).map(|i| make_sequence(150, 1_000 + i)).collect();
    let pairs: Vec<(&[u8], &[u8])> = seqs.chunks(2).map(|p| (p[0].as_slice(), p[1].as_slice())).collect();
    let s = scoring();
    let config = AlignConfig::new(AlignAlgorithm::Local);

    c.bench_function("score_batch_32x150bp_local", |b| {
        b.iter(|| black_box(align::score_batch(black_box(&pairs), &s, &config).unwrap()))
    });
}

criterion_group!(benches, bench_global_affine, bench_banded_local, bench_xdrop_extension, bench_batch);
criterion_main!(benches);
