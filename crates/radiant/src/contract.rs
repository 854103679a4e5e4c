//! Contract checks for programmer errors.
//!
//! Two tiers:
//! - [`dcheck!`](crate::dcheck): NaN propagation and component indices.
//!   Compiled in when [`ENABLED`] is true (debug builds, or any build with the
//!   `contracts` feature). When disabled the condition is never evaluated.
//! - [`check!`](crate::check): always on. Guards scalar division by exactly zero.
//!
//! A failed check emits a `tracing` error event and panics. Nothing in this
//! crate returns a violation to the caller as a value.

/// Whether debug-tier checks run in this build.
pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "contracts"));

/// A broken contract, named after the type that detected it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("{ty} has a NaN component")]
    NaN { ty: &'static str },
    #[error("index {index} out of range for {ty} (valid: 0..{len})")]
    IndexOutOfRange {
        ty: &'static str,
        index: usize,
        len: usize,
    },
    #[error("{ty} divided by zero")]
    ZeroDivisor { ty: &'static str },
}

#[cold]
#[inline(never)]
#[track_caller]
pub fn violated(violation: Violation) -> ! {
    tracing::error!(target: "radiant::contract", %violation, "contract violated");
    panic!("contract violated: {violation}");
}

/// Debug-tier check. `$cond` must hold; it is skipped entirely unless
/// [`contract::ENABLED`](crate::contract::ENABLED).
#[macro_export]
macro_rules! dcheck {
    ($cond:expr, $violation:expr $(,)?) => {
        if $crate::contract::ENABLED && !$cond {
            $crate::contract::violated($violation)
        }
    };
}

/// Always-on check.
#[macro_export]
macro_rules! check {
    ($cond:expr, $violation:expr $(,)?) => {
        if !$cond {
            $crate::contract::violated($violation)
        }
    };
}
