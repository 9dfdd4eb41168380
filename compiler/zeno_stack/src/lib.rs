//! Stack growth for recursive passes.
//!
//! The parser, the binder and the type checker all recurse over nested
//! function types. Each recursive step goes through
//! [`ensure_sufficient_stack`], which switches to a freshly allocated stack
//! segment when the current one is nearly exhausted.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if it is close to overflowing.
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

#[cfg(test)]
mod tests {
    use super::*;

    fn nest(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    #[test]
    fn passes_through_results() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("boom"));
        assert_eq!(result, Err("boom"));
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        assert_eq!(nest(200_000), 200_000);
    }
}
