//! A resumable computation stepped one poll at a time.

use core::{
    fmt::{self, Debug, Formatter},
    future::Future,
    pin::Pin,
    ptr,
    task::{Context, RawWaker, RawWakerVTable, Waker},
};

/// Owns a suspended computation and resumes it on demand.
///
/// Each call to [`Continuation::run`] polls the computation once: it proceeds
/// until it either completes or reaches its next suspension point. No
/// scheduler is involved and wakeups are ignored.
pub struct Continuation {
    body: Option<Pin<Box<dyn Future<Output = ()>>>>,
}

impl Continuation {
    /// Create a new `Continuation` which has not started running.
    pub fn new(body: impl Future<Output = ()> + 'static) -> Self {
        Self {
            body: Some(Box::pin(body)),
        }
    }

    /// Resume the computation until the next suspension point, returning
    /// `true` once it has completed. Running a completed continuation does
    /// nothing.
    pub fn run(&mut self) -> bool {
        if let Some(body) = self.body.as_mut() {
            let waker = NullWaker::waker();
            let mut cx = Context::from_waker(&waker);
            if body.as_mut().poll(&mut cx).is_pending() {
                return false;
            }
            self.body = None;
        }
        true
    }

    /// Determine if the computation has completed.
    pub fn is_done(&self) -> bool {
        self.body.is_none()
    }
}

impl Debug for Continuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuation")
            .field("done", &self.is_done())
            .finish()
    }
}

struct NullWaker;

fn waker_noop(_data: *const ()) {}

impl NullWaker {
    const RAW_WAKER: RawWaker = RawWaker::new(ptr::null(), &Self::WAKER_VTABLE);

    const WAKER_VTABLE: RawWakerVTable =
        RawWakerVTable::new(Self::clone_waker, waker_noop, waker_noop, waker_noop);

    fn waker() -> Waker {
        unsafe { Waker::from_raw(Self::RAW_WAKER) }
    }

    fn clone_waker(_: *const ()) -> RawWaker {
        Self::RAW_WAKER
    }
}
