//! Benchmark entry points. Each runs its workload inside [`block_on`].

use callbench_core::runner::block_on;

use crate::{plain, suspend, INPUT};

/// Run an empty body through the blocking runner.
pub fn run_blocking_empty() {
    block_on(async {})
}

/// Run the plain `test`.
pub fn baseline() -> i32 {
    block_on(async { plain::test(INPUT) })
}

/// Run the non-inlined `test`.
pub fn no_inline() -> i32 {
    block_on(async { crate::no_inline::test(INPUT) })
}

/// Run the suspendable `test`.
pub fn suspend_usual() -> i32 {
    block_on(async { suspend::test(INPUT).await })
}

/// Run the suspendable, non-inlined `test`.
pub fn suspend_no_inline() -> i32 {
    block_on(async { crate::suspend_no_inline::test(INPUT).await })
}

/// A named benchmark entry point
#[derive(Debug, Clone, Copy)]
pub struct EntryPoint {
    name: &'static str,
    run: fn() -> Option<i32>,
}

impl EntryPoint {
    /// The benchmark name
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the entry point, returning the value computed if any
    pub fn run(&self) -> Option<i32> {
        (self.run)()
    }
}

/// Every benchmark entry point, in benchmark order
pub const ENTRY_POINTS: &[EntryPoint] = &[
    EntryPoint {
        name: "testRunBlocking",
        run: run_empty_entry,
    },
    EntryPoint {
        name: "baseline",
        run: run_baseline_entry,
    },
    EntryPoint {
        name: "noInline",
        run: run_no_inline_entry,
    },
    EntryPoint {
        name: "suspendUsual",
        run: run_suspend_usual_entry,
    },
    EntryPoint {
        name: "suspendNoInline",
        run: run_suspend_no_inline_entry,
    },
];

fn run_empty_entry() -> Option<i32> {
    run_blocking_empty();
    None
}

fn run_baseline_entry() -> Option<i32> {
    Some(baseline())
}

fn run_no_inline_entry() -> Option<i32> {
    Some(no_inline())
}

fn run_suspend_usual_entry() -> Option<i32> {
    Some(suspend_usual())
}

fn run_suspend_no_inline_entry() -> Option<i32> {
    Some(suspend_no_inline())
}
