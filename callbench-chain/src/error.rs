use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A call chain reached the branch its fixed inputs should never reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Divergence {
    /// The value which failed validation
    pub input: i32,
    /// Whether the value was the expected constant
    pub flag: bool,
}

impl Display for Divergence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "failed: input = {}, b = {}", self.input, self.flag)
    }
}

impl Error for Divergence {}

/// An error raised when configuring a [`Yielder`](crate::Yielder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YielderError {
    /// The parameter count was outside of `1..=3`
    ParamCount(usize),
}

impl Display for YielderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParamCount(count) => write!(f, "Unsupported parameter count: {}", count),
        }
    }
}

impl Error for YielderError {}
