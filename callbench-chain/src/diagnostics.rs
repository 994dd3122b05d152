//! Tracking of call chains which left their fixed path.
//!
//! A divergence is logged and recorded for the current thread, and execution
//! continues. Timings collected while a divergence occurs should be
//! discarded.

use core::cell::Cell;

use tracing::warn;

use crate::error::Divergence;

thread_local! {
    static COUNT: Cell<usize> = Cell::new(0);
    static FIRST: Cell<Option<Divergence>> = Cell::new(None);
}

#[cold]
#[inline(never)]
pub(crate) fn report(input: i32, flag: bool) {
    warn!(input, b = flag, "failed: input = {}, b = {}", input, flag);
    COUNT.with(|count| count.set(count.get() + 1));
    FIRST.with(|first| {
        if first.get().is_none() {
            first.set(Some(Divergence { input, flag }));
        }
    });
}

/// The number of divergences recorded on the current thread.
pub fn count() -> usize {
    COUNT.with(Cell::get)
}

/// Run `f`, returning the first divergence it recorded on the current thread
/// as an error.
pub fn checked<T>(f: impl FnOnce() -> T) -> Result<T, Divergence> {
    let outer = FIRST.with(Cell::take);
    let result = f();
    match FIRST.with(|first| first.replace(outer)) {
        Some(divergence) => Err(divergence),
        None => Ok(result),
    }
}
