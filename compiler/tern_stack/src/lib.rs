//! Stack growth for deeply nested evaluation.
//!
//! The evaluator recurses once per AST level. Nesting depth is bounded only by
//! whatever the parser produced, so each recursive step goes through
//! [`ensure_sufficient_stack`], which allocates a fresh stack segment when the
//! current one runs low.
//!
//! Growth only moves the limit: a tree deep enough to exhaust memory still
//! aborts the host process. There is no recursion budget and no recoverable
//! error for runaway nesting.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: the runtime owns the stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Run `f` through [`ensure_sufficient_stack`] when `grow` is set, directly otherwise.
#[inline]
pub fn with_stack_growth<R>(grow: bool, f: impl FnOnce() -> R) -> R {
    if grow {
        ensure_sufficient_stack(f)
    } else {
        f()
    }
}

#[cfg(test)]
mod tests;
