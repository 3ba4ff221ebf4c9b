#[cfg(target_arch = "x86_64")]
pub(crate) mod avx2;
#[cfg(target_arch = "aarch64")]
pub(crate) mod neon;
pub(crate) mod portable;
#[cfg(target_arch = "x86_64")]
pub(crate) mod sse2;

/// One xoshiro256+ round over `W` independent 64-bit lanes.
///
/// `FULL` is always `2 * W`: every 64-bit sum is handed out as two 32-bit words,
/// low half first.
pub(crate) trait Engine<const W: usize, const FULL: usize> {
    type Lane: Copy;

    /// Builds `[s0, s1, s2, s3]` from `32 * W` bytes, each vector taking the next
    /// `8 * W` bytes in little-endian lane order.
    unsafe fn new(bytes: &[u8]) -> [Self::Lane; 4];

    unsafe fn step(state: &mut [Self::Lane; 4]) -> [u32; FULL];

    unsafe fn is_zero(state: &[Self::Lane; 4]) -> bool;
}

#[inline(always)]
pub(super) fn init_engine_state<Lane, const W: usize>(bytes: &[u8], load: impl Fn(&[u8]) -> Lane) -> [Lane; 4] {
    // sanity check
    debug_assert_eq!(bytes.len(), 32 * W, "seed must cover four vectors of W lanes");

    let block = 8 * W;
    core::array::from_fn(|v| load(&bytes[v * block..(v + 1) * block]))
}
