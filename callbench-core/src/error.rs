use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

/// An error indicating that a blocking operation did not complete in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimedOut(pub Duration);

impl TimedOut {
    /// The timeout which was exceeded
    pub const fn timeout(&self) -> Duration {
        self.0
    }
}

impl Display for TimedOut {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Timed out after {:?}", self.0)
    }
}

impl Error for TimedOut {}
