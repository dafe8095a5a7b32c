// PPU throughput benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use nescore::Ppu;

/// A PPU with rendering enabled and a patterned nametable
fn bench_ppu() -> Ppu {
    let mut ppu = Ppu::new();

    for i in 0..960u16 {
        ppu.write_ppu_memory(0x2000 + i, (i & 0xFF) as u8);
    }
    ppu.write_register(1, 0x1E);

    ppu
}

fn ppu_benchmark(c: &mut Criterion) {
    c.bench_function("ppu_one_frame", |b| {
        let mut ppu = bench_ppu();
        b.iter(|| {
            loop {
                black_box(&mut ppu).step();
                if ppu.take_frame_complete() {
                    break;
                }
            }
        });
    });

    c.bench_function("ppu_one_scanline", |b| {
        let mut ppu = bench_ppu();
        b.iter(|| {
            for _ in 0..341 {
                black_box(&mut ppu).step();
            }
        });
    });
}

criterion_group!(benches, ppu_benchmark);
criterion_main!(benches);
