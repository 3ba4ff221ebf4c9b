use std::hint::black_box;
use std::time::Instant;
use vxoshiro::{Generator, Isa};

const NUM_RANDOM: usize = 10_000;
const NUM_ITER: usize = 1_000;
const SEED_BYTE: u8 = 0x9e;

fn bench_bits<F>(mut rng_func: F, bits_per_call: usize) -> f64
where
    F: FnMut(),
{
    let mut results = Vec::with_capacity(NUM_ITER);

    // Warm-up
    for _ in 0..10_000 {
        rng_func();
    }

    for _ in 0..NUM_ITER {
        let start = Instant::now();
        let mut bits_generated = 0usize;

        for _ in 0..NUM_RANDOM {
            rng_func();
            bits_generated += bits_per_call;
        }

        let elapsed_us = start.elapsed().as_secs_f64() * 1e6;
        results.push(bits_generated as f64 / elapsed_us);
    }

    results.sort_by(|a, b| a.total_cmp(b));

    // median
    results[NUM_ITER / 2]
}

fn generator(isa: Isa) -> Option<Generator> {
    if !isa.is_available() {
        return None;
    }

    Generator::builder()
        .isa(isa)
        .state_bytes(vec![SEED_BYTE; isa.seed_len()])
        .build()
        .ok()
}

fn bench_isa(isa: Isa) {
    let Some(mut rng) = generator(isa) else {
        println!("| {:<8} | {:>20} | {:>20} | {:>20} |", isa, "n/a", "n/a", "n/a");
        return;
    };

    let next = bench_bits(
        || {
            black_box(rng.next_u32());
        },
        32,
    );
    let d20 = bench_bits(
        || {
            black_box(rng.sample(20));
        },
        32,
    );

    const BATCH: usize = 64;
    let mut buf = [0u32; BATCH];
    let fill = bench_bits(
        || {
            rng.fill_u32(&mut buf);
            black_box(&buf);
        },
        BATCH * 32,
    );

    println!("| {:<8} | {:>20.2} | {:>20.2} | {:>20.2} |", isa, next, d20, fill);
}

fn main() {
    println!("## Benchmarks (bits/µs, median of {} runs)", NUM_ITER);
    println!();
    println!("detected ISA: {} ({} words per refill)", Isa::detect(), Isa::detect().full_width());
    println!();
    println!("| ISA      | next_u32             | sample(20)           | fill_u32 (64)        |");
    println!("|:--------:|:--------------------:|:--------------------:|:--------------------:|");

    for isa in [Isa::Avx2, Isa::Sse2, Isa::Neon, Isa::Portable] {
        bench_isa(isa);
    }
}
