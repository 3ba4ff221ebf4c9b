//! # AVX2 Engine
//!
//! Four 64-bit lanes per `__m256i`, so one step yields eight 32-bit words.
//!
//! AVX2 is not part of the x86_64 baseline, the `Isa` check must pass before any
//! of these functions run.
use super::{init_engine_state, Engine};
use core::arch::x86_64::*;

pub(crate) const AVX2_LANES: usize = 4;
pub(crate) const AVX2_FULL: usize = AVX2_LANES * 2;

const _: () = assert!(AVX2_FULL * 32 == 256);

const SHIFT: i32 = 17;
const ROT: i32 = 45;
const ROT_BACK: i32 = 64 - ROT;

pub(crate) struct Avx2;

impl Engine<AVX2_LANES, AVX2_FULL> for Avx2 {
    type Lane = __m256i;

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn new(bytes: &[u8]) -> [Self::Lane; 4] {
        init_engine_state::<Self::Lane, AVX2_LANES>(bytes, |block| unsafe { load(block) })
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn step(state: &mut [Self::Lane; 4]) -> [u32; AVX2_FULL] {
        step_avx2(state)
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn is_zero(state: &[Self::Lane; 4]) -> bool {
        is_zero_avx2(state)
    }
}

#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn load(block: &[u8]) -> __m256i {
    _mm256_loadu_si256(block.as_ptr() as *const __m256i)
}

#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn step_avx2(state: &mut [__m256i; 4]) -> [u32; AVX2_FULL] {
    let [mut s0, mut s1, mut s2, mut s3] = *state;

    let result = _mm256_add_epi64(s0, s3);
    let t = _mm256_slli_epi64(s1, SHIFT);

    s2 = _mm256_xor_si256(s2, s0);
    s3 = _mm256_xor_si256(s3, s1);
    s1 = _mm256_xor_si256(s1, s2);
    s0 = _mm256_xor_si256(s0, s3);

    s2 = _mm256_xor_si256(s2, t);

    // no 64-bit rotate below AVX-512
    s3 = _mm256_or_si256(_mm256_slli_epi64(s3, ROT), _mm256_srli_epi64(s3, ROT_BACK));

    *state = [s0, s1, s2, s3];

    let mut out = [0u32; AVX2_FULL];
    _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, result);

    out
}

#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn is_zero_avx2(state: &[__m256i; 4]) -> bool {
    let any = _mm256_or_si256(_mm256_or_si256(state[0], state[1]), _mm256_or_si256(state[2], state[3]));
    _mm256_testz_si256(any, any) == 1
}
