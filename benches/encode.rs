use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_gen::encoder::bitstream;
use rust_qr_gen::layout::build_canvas;
use rust_qr_gen::layout::penalty::penalty_score;
use rust_qr_gen::{ECLevel, MaskPattern, MaskSelection, Mode, Symbol};

fn bench_encode_small(c: &mut Criterion) {
    c.bench_function("symbol_hello_world_1m", |b| {
        b.iter(|| Symbol::new(black_box("HELLO WORLD"), Mode::Alphanumeric, ECLevel::M))
    });
}

fn bench_encode_url(c: &mut Criterion) {
    let url = "https://github.com/rizwankce/RustQR/blob/main/README.md";
    c.bench_function("symbol_url_byte_q", |b| {
        b.iter(|| Symbol::new(black_box(url), Mode::Byte, ECLevel::Q))
    });
}

fn bench_encode_large(c: &mut Criterion) {
    let digits = "31415926535".repeat(600);
    c.bench_function("symbol_numeric_6600_l", |b| {
        b.iter(|| Symbol::new(black_box(&digits), Mode::Numeric, ECLevel::L))
    });
}

fn bench_fixed_mask_v40(c: &mut Criterion) {
    let text = "x".repeat(2900);
    c.bench_function("symbol_v40_fixed_mask", |b| {
        b.iter(|| {
            Symbol::builder()
                .mode(Mode::Byte)
                .level(ECLevel::L)
                .mask(MaskSelection::Fixed(MaskPattern::Pattern2))
                .build(black_box(&text))
        })
    });
}

fn bench_data_encoding(c: &mut Criterion) {
    let text = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG ".repeat(20);
    c.bench_function("bitstream_alphanumeric_880", |b| {
        b.iter(|| bitstream::encode(black_box(&text), Mode::Alphanumeric, ECLevel::M))
    });
}

fn bench_penalty(c: &mut Criterion) {
    let symbol = Symbol::new(&"y".repeat(1000), Mode::Byte, ECLevel::M).unwrap();
    let canvas = build_canvas(
        symbol.version(),
        symbol.level(),
        symbol.codewords(),
        MaskPattern::Pattern0,
    );
    c.bench_function("penalty_score_1000_bytes", |b| {
        b.iter(|| penalty_score(black_box(&canvas)))
    });
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_url,
    bench_encode_large,
    bench_fixed_mask_v40,
    bench_data_encoding,
    bench_penalty
);
criterion_main!(benches);
