use super::{init_engine_state, Engine};
use core::arch::x86_64::*;

pub(crate) const SSE2_LANES: usize = 2;
pub(crate) const SSE2_FULL: usize = SSE2_LANES * 2;

const _: () = assert!(SSE2_FULL * 32 == 128);

const SHIFT: i32 = 17;
const ROT: i32 = 45;
const ROT_BACK: i32 = 64 - ROT;

pub(crate) struct Sse2;

impl Engine<SSE2_LANES, SSE2_FULL> for Sse2 {
    type Lane = __m128i;

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn new(bytes: &[u8]) -> [Self::Lane; 4] {
        init_engine_state::<Self::Lane, SSE2_LANES>(bytes, |block| unsafe {
            _mm_loadu_si128(block.as_ptr() as *const __m128i)
        })
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn step(state: &mut [Self::Lane; 4]) -> [u32; SSE2_FULL] {
        let [mut s0, mut s1, mut s2, mut s3] = *state;

        let result = _mm_add_epi64(s0, s3);
        let t = _mm_slli_epi64(s1, SHIFT);

        s2 = _mm_xor_si128(s2, s0);
        s3 = _mm_xor_si128(s3, s1);
        s1 = _mm_xor_si128(s1, s2);
        s0 = _mm_xor_si128(s0, s3);

        s2 = _mm_xor_si128(s2, t);
        s3 = rotl_epi64(s3);

        *state = [s0, s1, s2, s3];

        let mut out = [0u32; SSE2_FULL];
        _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, result);

        out
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn is_zero(state: &[Self::Lane; 4]) -> bool {
        let any = _mm_or_si128(_mm_or_si128(state[0], state[1]), _mm_or_si128(state[2], state[3]));
        let eq = _mm_cmpeq_epi8(any, _mm_setzero_si128());

        _mm_movemask_epi8(eq) == 0xFFFF
    }
}

#[inline(always)]
#[allow(unsafe_op_in_unsafe_fn)]
/// Per lane rotate left by `ROT`, SSE2 has no 64-bit rotate.
///
/// ```md
/// out = (x << ROT) | (x >> (64 - ROT))
/// ```
unsafe fn rotl_epi64(x: __m128i) -> __m128i {
    _mm_or_si128(_mm_slli_epi64(x, ROT), _mm_srli_epi64(x, ROT_BACK))
}

#[cfg(test)]
mod sse2_tests {
    use super::*;
    use crate::engine::testing::{counting_bytes, reference_steps};

    mod indep_functions {
        use super::*;

        #[test]
        fn test_rotl_matches_scalar_rotate() {
            unsafe {
                let words: [u64; 2] = [0x0123_4567_89ab_cdef, 0x8000_0000_0000_0001];
                let x = _mm_loadu_si128(words.as_ptr() as *const __m128i);

                let mut out = [0u64; 2];
                _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, rotl_epi64(x));

                assert_eq!(out, [words[0].rotate_left(45), words[1].rotate_left(45)]);
            }
        }
    }

    mod engine {
        use super::*;

        #[test]
        fn test_stream_matches_scalar_reference() {
            let bytes = counting_bytes::<SSE2_LANES>();
            let expected = reference_steps::<SSE2_LANES>(&bytes, 256);

            unsafe {
                let mut state = Sse2::new(&bytes);

                for (i, want) in expected.iter().enumerate() {
                    let got = Sse2::step(&mut state);
                    assert_eq!(got.as_slice(), want.as_slice(), "step {}", i);
                }
            }
        }

        #[test]
        fn test_lanes_with_equal_seed_stay_equal() {
            let mut bytes = vec![0u8; 32 * SSE2_LANES];

            for (i, b) in bytes.iter_mut().enumerate() {
                *b = ((i % 8) as u8).wrapping_mul(31).wrapping_add(((i / 16) as u8) * 7 + 1);
            }

            unsafe {
                let mut state = Sse2::new(&bytes);

                for _ in 0..32 {
                    let out = Sse2::step(&mut state);
                    assert_eq!(out[0..2], out[2..4], "identical lanes must not diverge");
                }
            }
        }

        #[test]
        fn test_is_zero() {
            unsafe {
                assert!(Sse2::is_zero(&Sse2::new(&[0u8; 64])));

                let mut bytes = [0u8; 64];
                bytes[17] = 0x80;
                assert!(!Sse2::is_zero(&Sse2::new(&bytes)));
            }
        }
    }
}
