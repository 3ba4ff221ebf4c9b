use crate::error::Result;
use rand_core::{OsRng, RngCore};

/// Draws `len` bytes of OS entropy as four separate reads, one per state vector.
pub(crate) fn draw(len: usize) -> Result<Vec<u8>> {
    // sanity check
    debug_assert!(len > 0 && len % 4 == 0);

    let mut bytes = vec![0u8; len];

    for block in bytes.chunks_exact_mut(len / 4) {
        OsRng.try_fill_bytes(block)?;
    }

    Ok(bytes)
}
