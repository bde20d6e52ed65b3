/// The Fibonacci index computed by the default workload.
pub const DEFAULT_FIB_N: u32 = 28;

/// Calculates the `n`th Fibonacci number by naive double recursion, with `fib(0) == fib(1) == 1`.
///
/// This is deliberately inefficient: it makes an exponential number of calls without any
/// memoization, which turns it into a CPU-bound workload that performs no I/O and no allocation.
///
/// # Examples
///
/// ```
/// use thread_scaling::fib;
///
/// assert_eq!(fib(0), 1);
/// assert_eq!(fib(1), 1);
/// assert_eq!(fib(10), 89);
/// ```
#[must_use]
#[allow(
    clippy::arithmetic_side_effects,
    reason = "n is at least 2 in the recursive arm and workload indexes stay far below u64 overflow"
)]
pub fn fib(n: u32) -> u64 {
    match n {
        0 | 1 => 1,
        _ => fib(n - 1) + fib(n - 2),
    }
}
