// Arithmetic wraps on overflow: `baz(r + l)` exceeds the range of `i32`
// and every variant must produce the same bits in every build profile.

/// Expand the synchronous call chain into the enclosing module.
macro_rules! call_chain {
    ($(#[$attr:meta])* modulus = $modulus:expr) => {
        /// The divisor checked by [`validate_raw`].
        pub const MODULUS: i32 = $modulus;

        /// Determine if `input` is not a multiple of [`MODULUS`].
        $(#[$attr])*
        pub fn validate_raw(input: i32) -> bool {
            input % MODULUS != 0
        }

        /// Report a divergence if `input` is neither valid nor `42`.
        $(#[$attr])*
        pub fn validate(input: i32) {
            let b = input == 42;
            if !validate_raw(input) && !b {
                $crate::diagnostics::report(input, b);
            }
        }

        /// Always returns `37`.
        $(#[$attr])*
        pub fn foo() -> i32 {
            validate(14);
            $crate::FOO_VALUE
        }

        /// Sum `i * foo()` over the loop and scale it by `input`.
        $(#[$attr])*
        pub fn bar(input: i32) -> i32 {
            let mut res = 0i32;
            validate(input);
            for i in 1..=$crate::LOOP_COUNT {
                res = res.wrapping_add(i.wrapping_mul(foo()));
            }
            foo().wrapping_add(res.wrapping_mul(input))
        }

        /// Subtract `input * bar(3)` from `foo()`.
        $(#[$attr])*
        pub fn baz(input: i32) -> i32 {
            validate(input);
            foo().wrapping_sub(input.wrapping_mul(bar(3)))
        }

        /// The top of the chain. The input is ignored.
        $(#[$attr])*
        pub fn test(_input: i32) -> i32 {
            let r = foo();
            validate(r);
            let l = bar(r.wrapping_add(42));
            validate(l);
            baz(r.wrapping_add(l))
        }
    };
}

/// Expand the suspendable call chain into the enclosing module. Each function
/// returns its future passed through `$wrap`.
macro_rules! suspend_chain {
    ($(#[$attr:meta])* wrap = $wrap:path, modulus = $modulus:expr) => {
        use core::future::Future;

        /// The divisor checked by [`validate_raw`].
        pub const MODULUS: i32 = $modulus;

        /// Determine if `input` is not a multiple of [`MODULUS`].
        $(#[$attr])*
        pub fn validate_raw(input: i32) -> impl Future<Output = bool> {
            $wrap(async move { input % MODULUS != 0 })
        }

        /// Report a divergence if `input` is neither valid nor `42`.
        $(#[$attr])*
        pub fn validate(input: i32) -> impl Future<Output = ()> {
            $wrap(async move {
                let b = input == 42;
                if !validate_raw(input).await && !b {
                    $crate::diagnostics::report(input, b);
                }
            })
        }

        /// Always resolves to `37`.
        $(#[$attr])*
        pub fn foo() -> impl Future<Output = i32> {
            $wrap(async move {
                validate(14).await;
                $crate::FOO_VALUE
            })
        }

        /// Sum `i * foo()` over the loop and scale it by `input`.
        $(#[$attr])*
        pub fn bar(input: i32) -> impl Future<Output = i32> {
            $wrap(async move {
                let mut res = 0i32;
                validate(input).await;
                for i in 1..=$crate::LOOP_COUNT {
                    res = res.wrapping_add(i.wrapping_mul(foo().await));
                }
                foo().await.wrapping_add(res.wrapping_mul(input))
            })
        }

        /// Subtract `input * bar(3)` from `foo()`.
        $(#[$attr])*
        pub fn baz(input: i32) -> impl Future<Output = i32> {
            $wrap(async move {
                validate(input).await;
                foo()
                    .await
                    .wrapping_sub(input.wrapping_mul(bar(3).await))
            })
        }

        /// The top of the chain. The input is ignored.
        $(#[$attr])*
        pub fn test(_input: i32) -> impl Future<Output = i32> {
            $wrap(async move {
                let r = foo().await;
                validate(r).await;
                let l = bar(r.wrapping_add(42)).await;
                validate(l).await;
                baz(r.wrapping_add(l)).await
            })
        }
    };
}
