//! Call chains timed by the overhead benchmarks.
//!
//! The same ladder of functions (`validate_raw`, `validate`, `foo`, `bar`,
//! `baz`, `test`) is instantiated four times, differing only in whether each
//! function may be inlined and whether it is a suspendable (`async`) call.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub use self::{
    entry::{
        baseline, no_inline, run_blocking_empty, suspend_no_inline, suspend_usual, EntryPoint,
        ENTRY_POINTS,
    },
    error::{Divergence, YielderError},
    variant::Variant,
    yielder::Yielder,
};

#[macro_use]
mod macros;

pub mod diagnostics;

mod entry;
mod error;
mod variant;

pub mod yielder;

/// The input passed to each variant's `test` by the entry points
pub const INPUT: i32 = 42;

/// The value returned by every `foo`
pub const FOO_VALUE: i32 = 37;

/// The number of `foo` calls made inside each `bar` loop
pub const LOOP_COUNT: i32 = 300;

/// Ordinary calls, inlining left to the optimizer.
pub mod plain {
    call_chain!(modulus = 13);
}

/// Ordinary calls which are never inlined.
pub mod no_inline {
    call_chain!(#[inline(never)] modulus = 13);
}

/// Suspendable calls, inlining left to the optimizer.
pub mod suspend {
    suspend_chain!(wrap = core::convert::identity, modulus = 134125);
}

/// Suspendable calls which are never inlined, including the poll of each
/// returned future.
pub mod suspend_no_inline {
    suspend_chain!(
        #[inline(never)]
        wrap = callbench_core::NeverInline::new,
        modulus = 134125
    );
}
