//! Stack safety for recursive descent over untrusted descriptors.
//!
//! Nesting depth in a type descriptor is chosen by whoever wrote the
//! string. The parser caps it with a configurable depth limit, but a
//! generous limit on a small thread stack can still overflow, so every
//! recursive production runs inside [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain call; the runtime manages the stack.

/// Grow the stack when less than this much remains (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn parse_type(&mut self) -> Result<T, ParseError> {
///     ensure_sufficient_stack(|| self.parse_type_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
