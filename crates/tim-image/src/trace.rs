use std::fmt;

use crate::image::ImageSize;

/// A notable step inside a buffer operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceEvent {
    /// A destination buffer was allocated.
    Allocate {
        /// Size of the new buffer.
        size: ImageSize,
        /// Channel count of the new buffer.
        channels: u8,
        /// Number of bytes allocated.
        bytes: usize,
    },

    /// A nearest-neighbor resize is about to sample the source.
    Resize {
        /// Size of the source image.
        from: ImageSize,
        /// Size of the destination image.
        to: ImageSize,
        /// Horizontal scale factor.
        ratio_w: f32,
        /// Vertical scale factor.
        ratio_h: f32,
    },

    /// A resize request resolved to the source size.
    NoOpResize {
        /// Size of the source image.
        size: ImageSize,
        /// Whether the source was copied rather than rejected.
        copied: bool,
    },

    /// A luminance grayscale conversion is about to run.
    Grayscale {
        /// Size of the source image.
        size: ImageSize,
        /// Channel count of the source image.
        channels: u8,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TraceEvent::Allocate {
                size,
                channels,
                bytes,
            } => write!(f, "allocated {size}x{channels} ({bytes} bytes)"),
            TraceEvent::Resize {
                from,
                to,
                ratio_w,
                ratio_h,
            } => write!(f, "resize {from} -> {to} (r_w={ratio_w}, r_h={ratio_h})"),
            TraceEvent::NoOpResize { size, copied } => {
                write!(f, "resize to the same size {size} (copied: {copied})")
            }
            TraceEvent::Grayscale { size, channels } => {
                write!(f, "grayscale {size}x{channels} -> {size}x3")
            }
        }
    }
}

/// Receives trace events from buffer operations.
///
/// Operations take the tracer as an argument, so tracing can be turned off,
/// redirected or recorded per call.
pub trait Tracer {
    /// Handle one event.
    fn trace(&self, event: &TraceEvent);
}

/// Forwards events to the [`log`] facade.
///
/// Allocations are logged at trace level, everything else at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&self, event: &TraceEvent) {
        match event {
            TraceEvent::Allocate { .. } => log::trace!("{event}"),
            _ => log::debug!("{event}"),
        }
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTracer;

impl Tracer for NullTracer {
    fn trace(&self, _event: &TraceEvent) {}
}
