//! Batch oriented xoshiro256+.
//!
//! One step advances `W` independent xoshiro256+ states at once, `W` being the
//! number of 64-bit lanes in the widest vector register the CPU offers. Each
//! 64-bit sum is handed out as two 32-bit words, so a step refills a buffer of
//! `2 * W` words that is then drained one word per draw.
//!
//! ```no_run
//! let mut rng = vxoshiro::Generator::new()?;
//! let roll = rng.sample(20);
//! assert!((1..=20).contains(&roll));
//! # Ok::<(), vxoshiro::Error>(())
//! ```
//!
//! Not a CSPRNG.
mod engine;
mod entropy;
mod error;
mod global;
mod isa;
mod scalar;
mod state;

pub use error::{Error, Result};
pub use global::{sample, seed};
pub use isa::Isa;
pub use scalar::Xoshiro256Plus;

use engine::portable::{Portable, PORTABLE_FULL, PORTABLE_LANES};
use state::Lanes;

#[cfg(target_arch = "x86_64")]
use engine::avx2::{Avx2, AVX2_FULL, AVX2_LANES};
#[cfg(target_arch = "aarch64")]
use engine::neon::{Neon, NEON_FULL, NEON_LANES};
#[cfg(target_arch = "x86_64")]
use engine::sse2::{Sse2, SSE2_FULL, SSE2_LANES};

enum Core {
    #[cfg(target_arch = "x86_64")]
    Avx2(Lanes<Avx2, AVX2_LANES, AVX2_FULL>),

    #[cfg(target_arch = "x86_64")]
    Sse2(Lanes<Sse2, SSE2_LANES, SSE2_FULL>),

    #[cfg(target_arch = "aarch64")]
    Neon(Lanes<Neon, NEON_LANES, NEON_FULL>),

    Portable(Lanes<Portable<PORTABLE_LANES>, PORTABLE_LANES, PORTABLE_FULL>),
}

/// Runs `$body` against whichever `Lanes` the core holds.
///
/// The unsafe block is sound as a `Core` is only ever built for an ISA that
/// passed `Isa::is_available`.
macro_rules! with_lanes {
    (@arm $body:expr) => {{
        #[allow(unused_unsafe)]
        let out = unsafe { $body };
        out
    }};
    ($core:expr, |$lanes:ident| $body:expr) => {
        match $core {
            #[cfg(target_arch = "x86_64")]
            Core::Avx2($lanes) => with_lanes!(@arm $body),
            #[cfg(target_arch = "x86_64")]
            Core::Sse2($lanes) => with_lanes!(@arm $body),
            #[cfg(target_arch = "aarch64")]
            Core::Neon($lanes) => with_lanes!(@arm $body),
            Core::Portable($lanes) => with_lanes!(@arm $body),
        }
    };
}

impl Core {
    /// `isa` must be available and `bytes` exactly `isa.seed_len()` long.
    #[allow(unsafe_op_in_unsafe_fn)]
    unsafe fn new(isa: Isa, bytes: &[u8]) -> Core {
        // sanity check
        debug_assert!(isa.is_available());
        debug_assert_eq!(bytes.len(), isa.seed_len());

        match isa {
            #[cfg(target_arch = "x86_64")]
            Isa::Avx2 => Core::Avx2(Lanes::new(bytes)),
            #[cfg(target_arch = "x86_64")]
            Isa::Sse2 => Core::Sse2(Lanes::new(bytes)),
            #[cfg(target_arch = "aarch64")]
            Isa::Neon => Core::Neon(Lanes::new(bytes)),
            _ => Core::Portable(Lanes::new(bytes)),
        }
    }
}

/// Seeded, primed generator handle.
///
/// Only obtainable through [`Generator::new`] or a [`Builder`], both of which
/// seed the state and prime the output buffer first. Methods take `&mut self`;
/// it is `Send`, so move it or keep one per thread.
pub struct Generator {
    core: Core,
    isa: Isa,
}

impl Generator {
    /// Widest available ISA, seeded from OS entropy.
    pub fn new() -> Result<Self> {
        Builder::default().build()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    fn from_state(isa: Isa, bytes: &[u8]) -> Result<Self> {
        let core = unsafe { Core::new(isa, bytes) };

        if with_lanes!(&core, |lanes| lanes.is_zero()) {
            return Err(Error::ZeroState);
        }

        let mut rng = Self { core, isa };

        // prime the buffer, the first draw reads an unfilled slot
        let _ = rng.sample(state::PRIME_MAX);

        Ok(rng)
    }

    /// Value in `[1, max]` via `((word * max) >> 32) + 1`.
    ///
    /// No rejection step, so ranges that are not a power of two carry a bias of
    /// at most `max / 2^32`. `max == 0` is not rejected and always yields `1`,
    /// use [`Generator::try_sample`] to refuse it.
    #[inline(always)]
    pub fn sample(&mut self, max: u32) -> u32 {
        with_lanes!(&mut self.core, |lanes| lanes.sample(max))
    }

    #[inline(always)]
    pub fn try_sample(&mut self, max: u32) -> Result<u32> {
        if max == 0 {
            return Err(Error::EmptyRange);
        }

        Ok(self.sample(max))
    }

    /// Raw 32-bit word from the buffer.
    #[inline(always)]
    pub fn next_u32(&mut self) -> u32 {
        with_lanes!(&mut self.core, |lanes| lanes.next_u32())
    }

    /// Fills `out` with the next `out.len()` raw words, same stream as `next_u32`.
    #[inline(always)]
    pub fn fill_u32(&mut self, out: &mut [u32]) {
        with_lanes!(&mut self.core, |lanes| lanes.fill_u32(out))
    }

    /// Replaces state, buffer and cursor with a freshly seeded set on the same ISA.
    pub fn reseed(&mut self) -> Result<()> {
        let bytes = entropy::draw(self.isa.seed_len())?;
        *self = Self::from_state(self.isa, &bytes)?;

        Ok(())
    }

    pub fn isa(&self) -> Isa {
        self.isa
    }

    /// Words produced per refill, `2 * lanes`.
    pub fn full_width(&self) -> usize {
        self.isa.full_width()
    }

    /// Number of steps taken so far, priming included.
    pub fn refills(&self) -> u64 {
        with_lanes!(&self.core, |lanes| lanes.refills())
    }
}

/// Configures how a [`Generator`] is built.
///
/// ```no_run
/// use vxoshiro::{Generator, Isa};
///
/// let mut rng = Generator::builder()
///     .isa(Isa::Portable)
///     .state_bytes(vec![7u8; Isa::Portable.seed_len()])
///     .build()?;
///
/// let _ = rng.sample(6);
/// # Ok::<(), vxoshiro::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Builder {
    isa: Option<Isa>,
    state: Option<Vec<u8>>,
}

impl Builder {
    /// Forces an ISA instead of detecting the widest one.
    pub fn isa(mut self, isa: Isa) -> Self {
        self.isa = Some(isa);
        self
    }

    /// Uses fixed state instead of OS entropy, `isa.seed_len()` bytes laid out as
    /// `s0 | s1 | s2 | s3`, lanes little-endian.
    pub fn state_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.state = Some(bytes.into());
        self
    }

    pub fn build(self) -> Result<Generator> {
        let isa = self.isa.unwrap_or_else(Isa::detect);

        if !isa.is_available() {
            return Err(Error::UnsupportedIsa(isa));
        }

        let bytes = match self.state {
            Some(bytes) if bytes.len() != isa.seed_len() => {
                return Err(Error::StateLength {
                    expected: isa.seed_len(),
                    actual: bytes.len(),
                });
            }
            Some(bytes) => bytes,
            None => entropy::draw(isa.seed_len())?,
        };

        Generator::from_state(isa, &bytes)
    }
}
