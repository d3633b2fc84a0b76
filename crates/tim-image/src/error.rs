/// Broad classification of an [`ImageError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A malformed buffer, coordinate or request was passed in.
    InvalidArgument,

    /// The destination buffer could not be allocated.
    Allocation,
}

/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The channel count is outside of `1..=4`.
    #[error("Invalid channel count {0}, expected 1 to 4")]
    InvalidChannelCount(u8),

    /// Width or height is zero.
    #[error("Image size {0}x{1} has a zero dimension")]
    ZeroImageSize(usize, usize),

    /// `width * height * channels` does not fit in memory addressing.
    #[error("Image size {0}x{1}x{2} overflows")]
    SizeOverflow(usize, usize, u8),

    /// The data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Two images that must match in size do not.
    #[error("Image size mismatch: {0}x{1} vs {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// The pixel coordinates are out of the image bounds.
    #[error("Pixel ({0}, {1}) is out of bounds for an image of size {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// The operation needs more channels than the image has.
    #[error("Unsupported channel count {0}, at least {1} required")]
    UnsupportedChannelCount(u8, u8),

    /// The resize request resolves to the source size.
    #[error("Resize to the same size {0}x{1} requested")]
    NoOpResize(usize, usize),

    /// The allocator could not provide the requested bytes.
    #[error("Failed to allocate {0} bytes")]
    AllocationFailed(usize),
}

impl ImageError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImageError::AllocationFailed(_) => ErrorKind::Allocation,
            _ => ErrorKind::InvalidArgument,
        }
    }
}
