//! Stack growth for deep recursion.
//!
//! Nested code blocks recurse in the grouping parser, and every procedure call,
//! `if`, `ifelse`, `for` and `forall` re-enters the execution engine. A recursive
//! user procedure therefore grows the host call stack with its own depth.
//!
//! Wrap each recursive step in [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn execute(&mut self, body: &[Value]) -> EvalResult<()> {
//!     ensure_sufficient_stack(|| self.execute_inner(body))
//! }
//! ```
//!
//! On native targets the stack is grown on demand through `stacker`, so the limit that
//! matters is the interpreter's own recursion budget, not the thread's stack size.
//! On WASM the closure is called directly.

/// Run `f`, first growing the stack if the remaining space is inside the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow the stack when less than this much remains (128KB).
    const RED_ZONE: usize = 128 * 1024;

    /// Size of each newly allocated stack segment (2MB).
    const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_depth(levels: u32) -> u32 {
        ensure_sufficient_stack(|| {
            if levels == 0 {
                0
            } else {
                nested_depth(levels - 1) + 1
            }
        })
    }

    #[test]
    fn shallow_nesting() {
        assert_eq!(nested_depth(16), 16);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        assert_eq!(nested_depth(200_000), 200_000);
    }

    #[test]
    fn passes_results_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("boom"));
        assert_eq!(result, Err("boom"));
    }
}
