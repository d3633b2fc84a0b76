#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// allocation and tracing context shared by the operations.
pub mod context;

/// filter selection and dispatch.
pub mod filter;

/// utility functions for resizing images.
pub mod resize;

/// row-wise pixel iteration utilities.
pub mod rows;

pub use context::ProcContext;
