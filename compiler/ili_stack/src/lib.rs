//! Stack growth for deep recursion.
//!
//! The parser descends once per nesting level of parentheses and blocks,
//! and the evaluator once per nested expression and per user function
//! call. A recursive Ithilios function like `fib` therefore consumes
//! native stack in proportion to its call depth. Wrapping those descents
//! in [`ensure_sufficient_stack`] moves the limit from the thread's stack
//! size to available memory.
//!
//! On `wasm32` the wrapper is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
