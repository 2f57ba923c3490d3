pub mod context;
pub mod diagnostics;
pub mod intercept;
pub mod registry;
pub mod runtime;
