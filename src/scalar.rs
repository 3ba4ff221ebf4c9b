/// Scalar xoshiro256+, one 256-bit state.
///
/// Every engine lane-column advances exactly like this generator, so it is the
/// reference the vector engines are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xoshiro256Plus {
    s: [u64; 4],
}

impl Xoshiro256Plus {
    pub const SHIFT: u32 = 17;
    pub const ROTATE: u32 = 45;

    #[inline(always)]
    pub const fn from_state(s: [u64; 4]) -> Self {
        Self { s }
    }

    #[inline(always)]
    pub const fn state(&self) -> [u64; 4] {
        self.s
    }

    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let result = self.s[0].wrapping_add(self.s[3]);
        let t = self.s[1] << Self::SHIFT;

        // NOTE: order matters, each line reads the value written by the one above
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(Self::ROTATE);

        result
    }
}
