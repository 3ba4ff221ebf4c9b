use crate::engine::Engine;

/// Warm-up bound used when priming a freshly seeded buffer.
pub(crate) const PRIME_MAX: u32 = 32767;

/// Live generator state plus the `FULL` words produced by its last step.
///
/// The cursor starts on the last slot, so the first draw hands out the (zeroed)
/// slot and triggers the first refill.
#[repr(align(32))]
pub(crate) struct Lanes<E: Engine<W, FULL>, const W: usize, const FULL: usize> {
    state: [E::Lane; 4],
    buf: [u32; FULL],
    idx: usize,
    refills: u64,
}

impl<E: Engine<W, FULL>, const W: usize, const FULL: usize> Lanes<E, W, FULL> {
    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    pub(crate) unsafe fn new(bytes: &[u8]) -> Self {
        // sanity check
        debug_assert_eq!(FULL, 2 * W);

        Self {
            state: E::new(bytes),
            buf: [0; FULL],
            idx: FULL - 1,
            refills: 0,
        }
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    pub(crate) unsafe fn is_zero(&self) -> bool {
        E::is_zero(&self.state)
    }

    #[inline(always)]
    pub(crate) fn refills(&self) -> u64 {
        self.refills
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn refill(&mut self) {
        self.buf = E::step(&mut self.state);
        self.refills += 1;
    }

    /// Hands out the word under the cursor, then advances. On the last slot the
    /// word is read before the buffer is regenerated, so it comes from the
    /// previous step.
    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    pub(crate) unsafe fn next_u32(&mut self) -> u32 {
        // sanity check
        debug_assert!(self.idx < FULL);

        let val = *self.buf.get_unchecked(self.idx);

        if self.idx == FULL - 1 {
            self.idx = 0;
            self.refill();
        } else {
            self.idx += 1;
        }

        val
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    pub(crate) unsafe fn sample(&mut self, max: u32) -> u32 {
        mulhi_u32(self.next_u32(), max) + 1
    }

    #[inline(always)]
    #[allow(unsafe_op_in_unsafe_fn)]
    pub(crate) unsafe fn fill_u32(&mut self, out: &mut [u32]) {
        for slot in out.iter_mut() {
            *slot = self.next_u32();
        }
    }
}

/// Maps a 32-bit word onto `[0, max)` without division. Biased for ranges that
/// are not a power of two.
#[inline(always)]
pub(crate) fn mulhi_u32(a: u32, b: u32) -> u32 {
    ((a as u64 * b as u64) >> 32) as u32
}
