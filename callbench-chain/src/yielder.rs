//! Recursive workloads which suspend at the bottom of a deep call stack.
//!
//! Each level of the recursion is a separately allocated, non-inlined
//! future. Resuming a suspended [`Continuation`] polls every level from the
//! top down to the suspension point, so the cost of a resume grows with the
//! depth.

use core::{
    future::Future,
    pin::Pin,
    sync::atomic::{AtomicI32, Ordering},
};

use callbench_core::Continuation;
use futures_lite::future::yield_now;

use crate::error::YielderError;

/// Recursion depths measured by the yield-and-return benchmark
pub const RETURN_DEPTHS: &[usize] = &[5, 50, 100, 200, 300, 400, 500];

/// Recursion depths measured by the yield-and-stay benchmark
pub const STAY_DEPTHS: &[usize] = &[5, 10, 20, 100, 200, 500];

type Level<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// An extra parameter threaded through each level
#[derive(Debug, Default)]
pub struct Arg {
    field: AtomicI32,
}

impl Arg {
    fn clear(&self) {
        self.field.store(0, Ordering::Relaxed);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bottom {
    Return,
    YieldOnce,
    YieldForever,
}

/// Builds continuations recursing to a fixed depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Yielder {
    param_count: usize,
    depth: usize,
}

impl Yielder {
    /// The largest supported parameter count
    pub const MAX_PARAMS: usize = 3;

    /// Create a new `Yielder` passing `param_count` parameters to each of
    /// `depth` nested calls.
    pub fn new(param_count: usize, depth: usize) -> Result<Self, YielderError> {
        if param_count == 0 || param_count > Self::MAX_PARAMS {
            return Err(YielderError::ParamCount(param_count));
        }
        Ok(Self { param_count, depth })
    }

    /// The number of parameters passed to each level
    pub const fn param_count(&self) -> usize {
        self.param_count
    }

    /// The recursion depth
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// A continuation which descends to the bottom, yields once if
    /// `should_yield` is set, and returns.
    pub fn yield_and_return(self, should_yield: bool) -> Continuation {
        self.continuation(if should_yield {
            Bottom::YieldOnce
        } else {
            Bottom::Return
        })
    }

    /// A continuation which descends to the bottom and yields on every
    /// resume, never completing.
    pub fn yield_and_stay(self) -> Continuation {
        self.continuation(Bottom::YieldForever)
    }

    fn continuation(self, bottom: Bottom) -> Continuation {
        let Self { param_count, depth } = self;
        Continuation::new(async move {
            match param_count {
                1 => run1(depth, bottom).await,
                2 => {
                    let arg2 = Arg::default();
                    run2(depth, bottom, &arg2).await;
                }
                _ => {
                    let (arg2, arg3) = (Arg::default(), Arg::default());
                    run3(depth, bottom, &arg2, &arg3).await;
                }
            }
        })
    }
}

async fn bottom_out(bottom: Bottom) {
    match bottom {
        Bottom::Return => (),
        Bottom::YieldOnce => yield_now().await,
        Bottom::YieldForever => loop {
            yield_now().await;
        },
    }
}

#[inline(never)]
fn run1(depth: usize, bottom: Bottom) -> Level<'static> {
    Box::pin(async move {
        if depth > 0 {
            run1(depth - 1, bottom).await;
        } else {
            bottom_out(bottom).await;
        }
    })
}

#[inline(never)]
fn run2(depth: usize, bottom: Bottom, arg2: &Arg) -> Level<'_> {
    Box::pin(async move {
        if depth > 0 {
            run2(depth - 1, bottom, arg2).await;
            arg2.clear();
        } else {
            bottom_out(bottom).await;
        }
    })
}

#[inline(never)]
fn run3<'a>(depth: usize, bottom: Bottom, arg2: &'a Arg, arg3: &'a Arg) -> Level<'a> {
    Box::pin(async move {
        if depth > 0 {
            run3(depth - 1, bottom, arg2, arg3).await;
            arg2.clear();
            arg3.clear();
        } else {
            bottom_out(bottom).await;
        }
    })
}
