//! Future adapters controlling how suspendable calls are compiled.

use core::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

/// A future wrapper whose `poll` is never inlined into the caller.
///
/// Marking an `async fn` with `#[inline(never)]` only affects the function
/// constructing the future. Wrapping the returned future keeps the state
/// machine of each level behind a real call when it is awaited.
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct NeverInline<F> {
    inner: F,
}

impl<F> NeverInline<F> {
    /// Wrap a future.
    #[inline(never)]
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: Future> Future for NeverInline<F> {
    type Output = F::Output;

    #[inline(never)]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<F::Output> {
        // `inner` is structurally pinned and never moved out while pinned
        unsafe { self.map_unchecked_mut(|slf| &mut slf.inner) }.poll(cx)
    }
}
