/// Instruction set the generator runs on. Decides the lane width `W` and with
/// it the number of words produced per step (`2 * W`).
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Isa {
    /// 4 lanes of `__m256i`, an upgrade over SSE2 if available at runtime
    Avx2,

    /// 2 lanes of `__m128i`, baseline on x86_64
    Sse2,

    /// 2 lanes of `uint64x2_t`, baseline on aarch64
    Neon,

    /// Scalar columns, available everywhere
    Portable,
}

impl Isa {
    /// Widest ISA the running CPU supports.
    #[allow(unreachable_code)]
    pub fn detect() -> Isa {
        // NOTE: On x86_64 we upgrade to AVX2 if available, otherwise
        // treat SSE2 as baseline
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx2") {
                return Isa::Avx2;
            }

            return Isa::Sse2;
        }

        #[cfg(target_arch = "aarch64")]
        {
            return Isa::Neon;
        }

        Isa::Portable
    }

    pub fn is_available(self) -> bool {
        match self {
            #[cfg(target_arch = "x86_64")]
            Isa::Avx2 => is_x86_feature_detected!("avx2"),
            #[cfg(target_arch = "x86_64")]
            Isa::Sse2 => true,
            #[cfg(target_arch = "aarch64")]
            Isa::Neon => true,
            Isa::Portable => true,
            _ => false,
        }
    }

    /// 64-bit lanes per state vector.
    pub const fn lanes(self) -> usize {
        match self {
            Isa::Avx2 => 4,
            Isa::Sse2 | Isa::Neon => 2,
            Isa::Portable => crate::engine::portable::PORTABLE_LANES,
        }
    }

    /// 32-bit words handed out per refill.
    pub const fn full_width(self) -> usize {
        2 * self.lanes()
    }

    /// Bytes of state: four vectors of `lanes()` 64-bit words.
    pub const fn seed_len(self) -> usize {
        32 * self.lanes()
    }
}

impl std::fmt::Display for Isa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Isa::Avx2 => "avx2",
            Isa::Sse2 => "sse2",
            Isa::Neon => "neon",
            Isa::Portable => "portable",
        };

        f.write_str(name)
    }
}
