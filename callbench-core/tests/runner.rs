use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::thread;
use std::time::Duration;

use futures_lite::future;

use callbench_core::runner::{block_on, block_on_poll, block_on_timeout};
use callbench_core::{NeverInline, TimedOut};

use self::utils::run_test;

mod utils;

struct Repoll {
    pending: usize,
    thread: bool,
}

impl Future for Repoll {
    type Output = usize;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<usize> {
        let slf = self.get_mut();
        if slf.pending == 0 {
            return Poll::Ready(0);
        }
        slf.pending -= 1;
        if slf.thread {
            let waker = cx.waker().clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(5));
                waker.wake();
            });
        } else {
            cx.waker().wake_by_ref();
        }
        Poll::Pending
    }
}

#[test]
fn block_on_ready() {
    run_test(|| {
        assert_eq!(block_on(async { true }), true);
        assert_eq!(block_on(future::ready(7)), 7);
    })
}

#[test]
fn block_on_empty() {
    run_test(|| block_on(async {}))
}

#[test]
fn block_on_yield() {
    run_test(|| {
        assert_eq!(
            block_on(async {
                for _ in 0..10 {
                    future::yield_now().await;
                }
                true
            }),
            true
        );
    })
}

#[test]
fn block_on_repoll() {
    run_test(|| {
        assert_eq!(
            block_on(Repoll {
                pending: 3,
                thread: false
            }),
            0
        );
    })
}

#[test]
fn block_on_repoll_threaded() {
    run_test(|| {
        assert_eq!(
            block_on(Repoll {
                pending: 3,
                thread: true
            }),
            0
        );
    })
}

#[test]
fn block_on_never_inline() {
    run_test(|| {
        let fut = NeverInline::new(async {
            future::yield_now().await;
            NeverInline::new(async { 3 }).await
        });
        assert_eq!(block_on(fut), 3);
    })
}

#[test]
fn block_on_poll_timeout() {
    run_test(|| {
        assert_eq!(
            block_on_poll(|_cx| Poll::<bool>::Pending, Some(Duration::from_millis(100))),
            Poll::Pending
        );
    })
}

#[test]
fn block_on_poll_repoll_delay() {
    run_test(|| {
        let mut ready = false;
        assert_eq!(
            block_on_poll(
                |cx| {
                    if ready {
                        Poll::Ready(true)
                    } else {
                        ready = true;
                        let waker = cx.waker().clone();
                        thread::spawn(|| {
                            thread::sleep(Duration::from_millis(50));
                            waker.wake()
                        });
                        Poll::Pending
                    }
                },
                Some(Duration::from_millis(500))
            ),
            Poll::Ready(true)
        );
    })
}

#[test]
fn block_on_timeout_pending() {
    run_test(|| {
        let timeout = Duration::from_millis(50);
        assert_eq!(
            block_on_timeout(future::pending::<()>(), timeout),
            Err(TimedOut(timeout))
        );
    })
}

#[test]
fn block_on_timeout_ready() {
    run_test(|| {
        assert_eq!(
            block_on_timeout(
                Repoll {
                    pending: 2,
                    thread: true
                },
                Duration::from_secs(5)
            ),
            Ok(0)
        );
    })
}
