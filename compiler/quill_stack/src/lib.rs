//! Stack growth for deeply nested Quill programs.
//!
//! Both the Pratt parser and the tree-walking evaluator recurse once per
//! level of AST nesting, and the evaluator additionally recurses once per
//! interpreted function call. Wrapping those recursion points in
//! [`ensure_sufficient_stack`] moves execution onto a freshly allocated
//! segment whenever the remaining native stack drops below the red zone,
//! so input like `((((...))))` nested thousands of levels deep parses and
//! evaluates instead of aborting the process.
//!
//! Interpreted recursion is still bounded separately by the evaluator's
//! call-depth limit; this crate only protects the host.

/// Remaining stack below which a new segment is allocated (128 KiB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2 MiB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
