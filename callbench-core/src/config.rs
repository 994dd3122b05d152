use std::time::Duration;

/// Timing parameters handed to the benchmark harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    warmup_iterations: u32,
    warmup_time: Duration,
    measurement_iterations: u32,
    measurement_time: Duration,
    sample_size: usize,
}

impl HarnessConfig {
    /// The smallest sample size accepted by the harness
    pub const MIN_SAMPLE_SIZE: usize = 10;

    /// Set the number of warmup iterations
    pub fn warmup_iterations(mut self, count: u32) -> Self {
        self.warmup_iterations = count;
        self
    }

    /// Set the duration of each warmup iteration
    pub fn warmup_time(mut self, time: Duration) -> Self {
        self.warmup_time = time;
        self
    }

    /// Set the number of measured iterations
    pub fn measurement_iterations(mut self, count: u32) -> Self {
        self.measurement_iterations = count;
        self
    }

    /// Set the duration of each measured iteration
    pub fn measurement_time(mut self, time: Duration) -> Self {
        self.measurement_time = time;
        self
    }

    /// Set the number of samples collected, clamped to [`Self::MIN_SAMPLE_SIZE`]
    pub fn sample_size(mut self, count: usize) -> Self {
        self.sample_size = count.max(Self::MIN_SAMPLE_SIZE);
        self
    }

    /// The number of samples collected
    pub fn samples(&self) -> usize {
        self.sample_size
    }

    /// Total time spent warming up
    pub fn total_warmup(&self) -> Duration {
        self.warmup_time * self.warmup_iterations
    }

    /// Total time spent measuring
    pub fn total_measurement(&self) -> Duration {
        self.measurement_time * self.measurement_iterations
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: 5,
            warmup_time: Duration::from_secs(2),
            measurement_iterations: 5,
            measurement_time: Duration::from_secs(2),
            sample_size: 100,
        }
    }
}
