//! Drive futures to completion on the current thread.

use core::{
    cell::RefCell,
    future::Future,
    task::{Context, Poll, Waker},
};
use std::sync::Arc;
use std::task::Wake;
use std::time::{Duration, Instant};

use parking::{Parker, Unparker};
use tracing::debug;

use crate::error::TimedOut;

struct ThreadNotify(Unparker);

impl Wake for ThreadNotify {
    fn wake(self: Arc<Self>) {
        self.0.unpark();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.0.unpark();
    }
}

fn parker_and_waker() -> (Parker, Waker) {
    let (parker, unparker) = parking::pair();
    let waker = Waker::from(Arc::new(ThreadNotify(unparker)));
    (parker, waker)
}

thread_local! {
    static THREAD_PARKER: RefCell<(Parker, Waker)> = RefCell::new(parker_and_waker());
}

/// Block the current thread on the result of a [`Future`].
///
/// The future is polled on the calling thread, which parks between polls until
/// the future's waker is notified. A future which never returns
/// [`Poll::Pending`] is polled exactly once.
pub fn block_on<T>(fut: impl Future<Output = T>) -> T {
    pin!(fut);
    with_parker(|parker, waker| {
        let mut cx = Context::from_waker(waker);
        loop {
            if let Poll::Ready(result) = fut.as_mut().poll(&mut cx) {
                break result;
            }
            parker.park();
        }
    })
}

/// Block the current thread on the result of a poll function, with an optional timeout.
/// [`Poll::Pending`] is returned if the timeout is reached.
pub fn block_on_poll<T>(
    mut poll: impl FnMut(&mut Context<'_>) -> Poll<T>,
    timeout: Option<Duration>,
) -> Poll<T> {
    let deadline = timeout.map(|timeout| Instant::now() + timeout);
    with_parker(|parker, waker| {
        let mut cx = Context::from_waker(waker);
        loop {
            let result = poll(&mut cx);
            if result.is_ready() {
                break result;
            }
            if let Some(deadline) = deadline {
                if !parker.park_deadline(deadline) {
                    debug!("block_on_poll timed out after {:?}", timeout);
                    break result;
                }
            } else {
                parker.park();
            }
        }
    })
}

/// Block the current thread on the result of a [`Future`], giving up once
/// `timeout` has elapsed.
pub fn block_on_timeout<T>(
    fut: impl Future<Output = T>,
    timeout: Duration,
) -> Result<T, TimedOut> {
    pin!(fut);
    match block_on_poll(|cx| fut.as_mut().poll(cx), Some(timeout)) {
        Poll::Ready(result) => Ok(result),
        Poll::Pending => Err(TimedOut(timeout)),
    }
}

fn with_parker<T>(f: impl FnOnce(&Parker, &Waker) -> T) -> T {
    THREAD_PARKER.with(|cached| {
        if let Ok(borrowed) = cached.try_borrow_mut() {
            let (parker, waker) = &*borrowed;
            f(parker, waker)
        } else {
            // thread parker in use by an outer runner, create a new one
            let (parker, waker) = parker_and_waker();
            f(&parker, &waker)
        }
    })
}
