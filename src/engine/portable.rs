//! Target independent engine.
//!
//! Each "lane" is a plain `[u64; W]`, and every column is advanced through the
//! scalar generator. Used when no vector ISA is available, and as the baseline
//! the vector engines must match bit for bit.
use super::{init_engine_state, Engine};
use crate::scalar::Xoshiro256Plus;

pub(crate) const PORTABLE_LANES: usize = 2;
pub(crate) const PORTABLE_FULL: usize = PORTABLE_LANES * 2;

pub(crate) struct Portable<const W: usize>;

impl<const W: usize, const FULL: usize> Engine<W, FULL> for Portable<W> {
    type Lane = [u64; W];

    #[inline(always)]
    unsafe fn new(bytes: &[u8]) -> [Self::Lane; 4] {
        init_engine_state::<Self::Lane, W>(bytes, |block| {
            core::array::from_fn(|k| {
                let mut word = [0u8; 8];
                word.copy_from_slice(&block[k * 8..k * 8 + 8]);
                u64::from_le_bytes(word)
            })
        })
    }

    #[inline(always)]
    unsafe fn step(state: &mut [Self::Lane; 4]) -> [u32; FULL] {
        // sanity check
        debug_assert_eq!(FULL, 2 * W);

        let mut out = [0u32; FULL];

        for k in 0..W {
            let mut column = Xoshiro256Plus::from_state([state[0][k], state[1][k], state[2][k], state[3][k]]);
            let r = column.next_u64();

            for (v, s) in column.state().into_iter().enumerate() {
                state[v][k] = s;
            }

            out[2 * k] = r as u32;
            out[2 * k + 1] = (r >> 32) as u32;
        }

        out
    }

    #[inline(always)]
    unsafe fn is_zero(state: &[Self::Lane; 4]) -> bool {
        state.iter().flatten().all(|&w| w == 0)
    }
}

#[cfg(test)]
mod portable_tests {
    use super::*;
    use crate::engine::testing::{counting_bytes, reference_steps};

    #[test]
    fn test_golden_words_for_counting_seed() {
        let bytes = counting_bytes::<2>();

        unsafe {
            let mut state = <Portable<2> as Engine<2, 4>>::new(&bytes);

            let first = <Portable<2> as Engine<2, 4>>::step(&mut state);
            let second = <Portable<2> as Engine<2, 4>>::step(&mut state);
            let third = <Portable<2> as Engine<2, 4>>::step(&mut state);

            assert_eq!(first, [0x36343230, 0x3e3c3a38, 0x46444240, 0x4e4c4a48]);
            assert_eq!(second, [0x27262524, 0x2b2a2928, 0x2f2e2d2c, 0x33323130]);
            assert_eq!(third, [0x5a3a1afa, 0xdaba9a7a, 0x5b3b1bfb, 0xdbbb9b7b]);
        }
    }

    #[test]
    fn test_single_lane_matches_scalar() {
        let bytes = counting_bytes::<1>();
        let expected = reference_steps::<1>(&bytes, 64);

        unsafe {
            let mut state = <Portable<1> as Engine<1, 2>>::new(&bytes);

            for (i, want) in expected.iter().enumerate() {
                let got = <Portable<1> as Engine<1, 2>>::step(&mut state);
                assert_eq!(got.as_slice(), want.as_slice(), "step {}", i);
            }
        }
    }

    #[test]
    fn test_wide_lanes_match_scalar() {
        let bytes = counting_bytes::<4>();
        let expected = reference_steps::<4>(&bytes, 64);

        unsafe {
            let mut state = <Portable<4> as Engine<4, 8>>::new(&bytes);

            for (i, want) in expected.iter().enumerate() {
                let got = <Portable<4> as Engine<4, 8>>::step(&mut state);
                assert_eq!(got.as_slice(), want.as_slice(), "step {}", i);
            }
        }
    }

    #[test]
    fn test_is_zero_detects_fixed_point() {
        unsafe {
            let zero = <Portable<2> as Engine<2, 4>>::new(&[0u8; 64]);
            assert!(<Portable<2> as Engine<2, 4>>::is_zero(&zero));

            let mut bytes = [0u8; 64];
            bytes[63] = 1;

            let one = <Portable<2> as Engine<2, 4>>::new(&bytes);
            assert!(!<Portable<2> as Engine<2, 4>>::is_zero(&one));
        }
    }
}
