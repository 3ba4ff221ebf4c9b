//! Rolls a 20-sided die and prints how often each face came up.
//!
//! `d20 [rolls]`, one billion rolls by default.

const DEFAULT_ROLLS: u64 = 1_000_000_000;
const SIDES: u32 = 20;

fn main() -> vxoshiro::Result<()> {
    let rolls = std::env::args()
        .nth(1)
        .and_then(|arg| arg.replace('_', "").parse().ok())
        .unwrap_or(DEFAULT_ROLLS);

    vxoshiro::seed()?;

    // index 0 stays empty, faces are 1..=SIDES
    let mut d20 = [0u64; SIDES as usize + 1];

    for _ in 0..rolls {
        d20[vxoshiro::sample(SIDES) as usize] += 1;
    }

    for (face, count) in d20.iter().enumerate().skip(1) {
        println!("{}: {}", face, count);
    }

    Ok(())
}
