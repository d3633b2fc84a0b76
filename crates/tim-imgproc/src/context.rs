use tim_image::{
    BufferAllocator, CpuAllocator, ImageError, ImageSize, LogTracer, PixelBuffer, TraceEvent,
    Tracer,
};

/// The allocator and tracer an operation runs with.
///
/// The default context allocates with [`CpuAllocator`] and logs through [`LogTracer`].
///
/// # Example
///
/// ```
/// use tim_image::{ImageSize, NullTracer, PixelBuffer};
/// use tim_imgproc::{resize, ProcContext};
///
/// let image = PixelBuffer::allocate(ImageSize { width: 4, height: 4 }, 3).unwrap();
///
/// let ctx = ProcContext::default().with_tracer(&NullTracer);
/// let small = resize::resize_nearest_with(&image, 2, 2, &Default::default(), &ctx).unwrap();
///
/// assert_eq!(small.size(), ImageSize { width: 2, height: 2 });
/// ```
#[derive(Clone, Copy)]
pub struct ProcContext<'a> {
    /// Allocator for destination buffers.
    pub allocator: &'a dyn BufferAllocator,
    /// Receiver of trace events.
    pub tracer: &'a dyn Tracer,
}

impl Default for ProcContext<'_> {
    fn default() -> Self {
        Self {
            allocator: &CpuAllocator,
            tracer: &LogTracer,
        }
    }
}

impl<'a> ProcContext<'a> {
    /// Create a context from an allocator and a tracer.
    pub fn new(allocator: &'a dyn BufferAllocator, tracer: &'a dyn Tracer) -> Self {
        Self { allocator, tracer }
    }

    /// Replace the tracer.
    pub fn with_tracer(self, tracer: &'a dyn Tracer) -> Self {
        Self { tracer, ..self }
    }

    /// Replace the allocator.
    pub fn with_allocator(self, allocator: &'a dyn BufferAllocator) -> Self {
        Self { allocator, ..self }
    }

    /// Allocate a zero-filled destination buffer and report it to the tracer.
    pub fn allocate(&self, size: ImageSize, channels: u8) -> Result<PixelBuffer, ImageError> {
        let image = PixelBuffer::allocate_with(size, channels, self.allocator)?;
        self.tracer.trace(&TraceEvent::Allocate {
            size,
            channels,
            bytes: image.len(),
        });
        Ok(image)
    }
}
