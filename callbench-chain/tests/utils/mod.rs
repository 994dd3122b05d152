/// `test(42)` in every variant
pub const TEST_RESULT: i32 = 2084107161;

/// `bar(3)` in every variant: `37 + (37 * 45150) * 3`
pub const BAR_3: i32 = 5011687;

/// `bar(79)` in every variant, reached from `test` as `bar(37 + 42)`
pub const BAR_79: i32 = 131973487;

/// `baz(42)` in every variant: `37 - 42 * 5011687`
pub const BAZ_42: i32 = -210490817;

pub fn run_test<T>(test: impl FnOnce() -> T) -> T {
    tracing_subscriber::fmt::try_init().ok();
    test()
}
