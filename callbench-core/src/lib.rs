//! Blocking runner and future adapters used to time plain, non-inlined and
//! suspending call chains.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub use self::config::HarnessConfig;
pub use self::continuation::Continuation;
pub use self::error::TimedOut;
pub use self::future::NeverInline;

#[macro_use]
mod macros;

mod config;

mod continuation;

mod error;

pub mod future;

pub mod runner;
