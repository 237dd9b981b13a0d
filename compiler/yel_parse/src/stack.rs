//! Stack growth for deep recursion.
//!
//! `((((...))))` or long prefix chains recurse once per level. Recursion
//! points call [`ensure_sufficient_stack`], which grows the stack on native
//! targets when less than the red zone remains.

/// Minimum stack space to keep available.
const RED_ZONE: usize = 100 * 1024;

/// Stack space allocated per growth.
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
