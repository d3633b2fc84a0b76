#![deny(missing_docs)]
//! Owned 8-bit pixel buffers with channel-aware pixel access.

/// Memory allocation for pixel buffers.
pub mod allocator;

/// Error types for the image module.
pub mod error;

/// image representation and sizes.
pub mod image;

/// Transient RGBA pixel values.
pub mod pixel;

/// Injectable tracing of buffer operations.
pub mod trace;

pub use crate::allocator::{BufferAllocator, CpuAllocator};
pub use crate::error::{ErrorKind, ImageError};
pub use crate::image::{ImageSize, PixelBuffer, MAX_CHANNELS};
pub use crate::pixel::Pixel;
pub use crate::trace::{LogTracer, NullTracer, TraceEvent, Tracer};
