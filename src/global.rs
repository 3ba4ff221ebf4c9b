//! Process-style entry points over a per-thread generator.
//!
//! `seed` installs a freshly seeded [`Generator`] for the calling thread and
//! `sample` draws from it. Each thread owns its own instance, so nothing is
//! shared or locked.
use crate::error::Result;
use crate::Generator;
use std::cell::RefCell;

thread_local! {
    static GENERATOR: RefCell<Option<Generator>> = const { RefCell::new(None) };
}

/// Seeds this thread's generator from OS entropy, replacing any previous one.
pub fn seed() -> Result<()> {
    let rng = Generator::new()?;
    GENERATOR.with(|cell| *cell.borrow_mut() = Some(rng));

    Ok(())
}

/// Draws a value in `[1, max]` from this thread's generator.
///
/// ## Panics
///
/// If [`seed`] has not been called on this thread. An unseeded xoshiro256+
/// state only ever yields zeros.
pub fn sample(max: u32) -> u32 {
    GENERATOR.with(|cell| match cell.borrow_mut().as_mut() {
        Some(rng) => rng.sample(max),
        None => panic!("`sample` called before `seed` on this thread"),
    })
}
