use statrs::statistics::{Data, Distribution};
use vxoshiro::Generator;

const DEFAULT_DRAWS: usize = 1_000_000;
const NUM_BINS: usize = 256;

fn draws_from_args() -> usize {
    std::env::args()
        .nth(1)
        .and_then(|arg| arg.replace('_', "").parse().ok())
        .unwrap_or(DEFAULT_DRAWS)
}

fn main() -> vxoshiro::Result<()> {
    let n = draws_from_args();
    let total = n as f64;
    let mut rng = Generator::new()?;

    let mut samples = Vec::with_capacity(n);
    let mut hist = [0usize; NUM_BINS];

    for _ in 0..n {
        samples.push(rng.next_u32() as f64 / u32::MAX as f64);
    }

    for &v in &samples {
        let idx = ((v * NUM_BINS as f64) as usize).min(NUM_BINS - 1);
        hist[idx] += 1;
    }

    let data = Data::new(samples);
    let mean = data.mean().unwrap_or(f64::NAN);
    let var = data.variance().unwrap_or(f64::NAN);

    let entropy: f64 = hist
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum();

    let expected = total / NUM_BINS as f64;
    let chi2: f64 = hist
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();

    println!("Stats ({} draws, isa={}):", n, rng.isa());
    println!("  mean     : {:.6}", mean);
    println!("  variance : {:.6}", var);
    println!("  entropy  : {:.3} bits", entropy);
    println!("  chi2     : {:.2} ({} dof)", chi2, NUM_BINS - 1);
    println!();
    println!("(expected ~mean=0.5, var=0.0833, entropy≈8 bits, chi2≈255)");

    Ok(())
}
