//! # NEON Engine
//!
//! **Only for aarch64 architectures!**
//!
//! NEON is baseline on aarch64, so no runtime check is needed. Two 64-bit lanes
//! per `uint64x2_t`.
use super::{init_engine_state, Engine};
use core::arch::aarch64::*;

pub(crate) const NEON_LANES: usize = 2;
pub(crate) const NEON_FULL: usize = NEON_LANES * 2;

const _: () = assert!(NEON_FULL * 32 == 128);

pub(crate) struct Neon;

impl Engine<NEON_LANES, NEON_FULL> for Neon {
    type Lane = uint64x2_t;

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn new(bytes: &[u8]) -> [Self::Lane; 4] {
        // byte loads carry no alignment requirement
        init_engine_state::<Self::Lane, NEON_LANES>(bytes, |block| unsafe {
            vreinterpretq_u64_u8(vld1q_u8(block.as_ptr()))
        })
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn step(state: &mut [Self::Lane; 4]) -> [u32; NEON_FULL] {
        let [mut s0, mut s1, mut s2, mut s3] = *state;

        let result = vaddq_u64(s0, s3);
        let t = vshlq_n_u64::<17>(s1);

        s2 = veorq_u64(s2, s0);
        s3 = veorq_u64(s3, s1);
        s1 = veorq_u64(s1, s2);
        s0 = veorq_u64(s0, s3);

        s2 = veorq_u64(s2, t);
        s3 = vorrq_u64(vshlq_n_u64::<45>(s3), vshrq_n_u64::<19>(s3));

        *state = [s0, s1, s2, s3];

        let mut out = [0u32; NEON_FULL];
        vst1q_u32(out.as_mut_ptr(), vreinterpretq_u32_u64(result));

        out
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn is_zero(state: &[Self::Lane; 4]) -> bool {
        let any = vorrq_u64(vorrq_u64(state[0], state[1]), vorrq_u64(state[2], state[3]));
        vmaxvq_u32(vreinterpretq_u32_u64(any)) == 0
    }
}
