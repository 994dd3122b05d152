use std::fmt::{self, Display, Formatter};

use callbench_core::runner::block_on;

use crate::{no_inline, plain, suspend, suspend_no_inline};

/// One instantiation of the call chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Ordinary calls
    Plain,
    /// Ordinary calls which are never inlined
    NoInline,
    /// Suspendable calls
    Suspend,
    /// Suspendable calls which are never inlined
    SuspendNoInline,
}

impl Variant {
    /// Every variant, in benchmark order
    pub const ALL: [Variant; 4] = [
        Self::Plain,
        Self::NoInline,
        Self::Suspend,
        Self::SuspendNoInline,
    ];

    /// The module name of the variant
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::NoInline => "no_inline",
            Self::Suspend => "suspend",
            Self::SuspendNoInline => "suspend_no_inline",
        }
    }

    /// The divisor checked by the variant's `validate_raw`
    pub const fn modulus(self) -> i32 {
        match self {
            Self::Plain => plain::MODULUS,
            Self::NoInline => no_inline::MODULUS,
            Self::Suspend => suspend::MODULUS,
            Self::SuspendNoInline => suspend_no_inline::MODULUS,
        }
    }

    /// Determine if the variant's calls are suspendable
    pub const fn is_suspending(self) -> bool {
        matches!(self, Self::Suspend | Self::SuspendNoInline)
    }

    /// Evaluate the variant's `test`, blocking on suspendable variants
    pub fn run_test(self, input: i32) -> i32 {
        match self {
            Self::Plain => plain::test(input),
            Self::NoInline => no_inline::test(input),
            Self::Suspend => block_on(suspend::test(input)),
            Self::SuspendNoInline => block_on(suspend_no_inline::test(input)),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
