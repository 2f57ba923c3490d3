//! Callable interception.
//!
//! An [`Interceptor`] builds wrappers that sit in front of existing
//! callables. A wrapper forwards every call to the original, but first
//! replaces each function-typed argument with a guarded copy that reports
//! failures instead of propagating them, and afterwards may re-intercept
//! named function properties of the result so fluent APIs stay covered.
//! Failures of the original callable itself are not caught; only the
//! callbacks passed through it are, since those typically run later,
//! outside any try-scope the caller still has.

mod guard;
mod interceptor;
mod target;

pub use guard::guard;
pub use interceptor::Interceptor;
pub use target::{Target, split_names};
