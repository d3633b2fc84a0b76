use crate::error::ImageError;

/// A trait for allocating the backing storage of pixel buffers.
///
/// Storage is released when the owning buffer is dropped.
pub trait BufferAllocator {
    /// Allocates `len` zero-filled bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::AllocationFailed`] if the memory cannot be reserved.
    fn alloc_zeroed(&self, len: usize) -> Result<Vec<u8>, ImageError>;
}

/// A buffer allocator that uses the system allocator.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuAllocator;

impl BufferAllocator for CpuAllocator {
    /// Reserves exactly `len` bytes, reporting failure instead of aborting.
    fn alloc_zeroed(&self, len: usize) -> Result<Vec<u8>, ImageError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ImageError::AllocationFailed(len))?;
        data.resize(len, 0);
        Ok(data)
    }
}
