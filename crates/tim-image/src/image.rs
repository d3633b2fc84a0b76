use crate::allocator::{BufferAllocator, CpuAllocator};
use crate::error::ImageError;
use crate::pixel::Pixel;

/// Maximum number of interleaved channels in a [`PixelBuffer`].
pub const MAX_CHANNELS: u8 = 4;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use tim_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Scale the size to fit inside `bounds` while keeping its aspect ratio.
    ///
    /// Both sides are scaled by `min(bounds.width / width, bounds.height / height)`
    /// and truncated. Smaller images are scaled up.
    ///
    /// # Examples
    ///
    /// ```
    /// use tim_image::ImageSize;
    ///
    /// let window = ImageSize { width: 1024, height: 720 };
    /// let fitted = ImageSize { width: 2048, height: 1024 }.fit_within(window);
    ///
    /// assert_eq!(fitted, ImageSize { width: 1024, height: 512 });
    /// ```
    pub fn fit_within(&self, bounds: ImageSize) -> ImageSize {
        let ratio_w = bounds.width as f32 / self.width as f32;
        let ratio_h = bounds.height as f32 / self.height as f32;
        let proportion = ratio_w.min(ratio_h);
        ImageSize {
            width: (self.width as f32 * proportion) as usize,
            height: (self.height as f32 * proportion) as usize,
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Byte length of a buffer, validating the channel count and the size.
fn buffer_len(size: ImageSize, channels: u8) -> Result<usize, ImageError> {
    if !(1..=MAX_CHANNELS).contains(&channels) {
        return Err(ImageError::InvalidChannelCount(channels));
    }

    if size.width == 0 || size.height == 0 {
        return Err(ImageError::ZeroImageSize(size.width, size.height));
    }

    size.width
        .checked_mul(size.height)
        .and_then(|n| n.checked_mul(channels as usize))
        .ok_or(ImageError::SizeOverflow(size.width, size.height, channels))
}

/// An owned image of interleaved 8-bit channel samples.
///
/// The data is stored row-major with the channels of a pixel next to each other:
/// channel `c` of pixel `(x, y)` lives at `(x + width * y) * channels + c`, in
/// red, green, blue, alpha order. Buffers with fewer channels omit the trailing ones.
///
/// A buffer always holds exactly `width * height * channels` bytes, has between
/// one and four channels and a non-zero size. Cloning copies the data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    size: ImageSize,
    channels: u8,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zero-filled buffer with the system allocator.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `channels` - The number of interleaved channels, `1..=4`.
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error on a bad channel count, a zero or an
    /// overflowing size, and with [`ImageError::AllocationFailed`] if the memory
    /// cannot be reserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use tim_image::{ImageSize, PixelBuffer};
    ///
    /// let image = PixelBuffer::allocate(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     3,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// assert_eq!(image.channels(), 3);
    /// assert_eq!(image.as_slice().len(), 10 * 20 * 3);
    /// ```
    pub fn allocate(size: ImageSize, channels: u8) -> Result<Self, ImageError> {
        Self::allocate_with(size, channels, &CpuAllocator)
    }

    /// Allocate a zero-filled buffer with the given allocator.
    pub fn allocate_with<A>(
        size: ImageSize,
        channels: u8,
        allocator: &A,
    ) -> Result<Self, ImageError>
    where
        A: BufferAllocator + ?Sized,
    {
        let len = buffer_len(size, channels)?;
        let data = allocator.alloc_zeroed(len)?;
        Self::from_raw(size, channels, data)
    }

    /// Adopt already decoded pixel data.
    ///
    /// # Errors
    ///
    /// Same as [`PixelBuffer::allocate`], plus [`ImageError::InvalidDataLength`]
    /// if `data` does not hold exactly `width * height * channels` bytes.
    pub fn from_raw(size: ImageSize, channels: u8, data: Vec<u8>) -> Result<Self, ImageError> {
        let len = buffer_len(size, channels)?;
        if data.len() != len {
            return Err(ImageError::InvalidDataLength(data.len(), len));
        }

        Ok(Self {
            size,
            channels,
            data,
        })
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Number of bytes in the image.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false, buffers are never empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The interleaved pixel data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The interleaved pixel data, mutably.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its data, e.g. to hand it to an encoder.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Offset of the first channel of pixel `(x, y)` in the data.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] unless `x < width` and `y < height`.
    pub fn pixel_offset(&self, x: usize, y: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        Ok((x + self.width() * y) * self.channels as usize)
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// Channels the buffer does not have read as `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tim_image::{ImageSize, Pixel, PixelBuffer};
    ///
    /// let image = PixelBuffer::from_raw(
    ///     ImageSize {
    ///         width: 2,
    ///         height: 1,
    ///     },
    ///     3,
    ///     vec![0, 0, 0, 255, 128, 0],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.get_pixel(1, 0).unwrap(), Pixel::rgb(255, 128, 0));
    /// assert!(image.get_pixel(2, 0).is_err());
    /// ```
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, ImageError> {
        let offset = self.pixel_offset(x, y)?;
        let channels = &self.data[offset..offset + self.channels as usize];
        Ok(Pixel::from_channels(channels))
    }

    /// Write the pixel at `(x, y)`.
    ///
    /// Channels the buffer does not have are skipped; the others are still written.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), ImageError> {
        let offset = self.pixel_offset(x, y)?;
        let channels = &mut self.data[offset..offset + self.channels as usize];
        pixel.write_channels(channels);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::allocator::BufferAllocator;
    use crate::image::{ImageSize, PixelBuffer};
    use crate::{ErrorKind, ImageError, Pixel};

    struct FailingAllocator;

    impl BufferAllocator for FailingAllocator {
        fn alloc_zeroed(&self, len: usize) -> Result<Vec<u8>, ImageError> {
            Err(ImageError::AllocationFailed(len))
        }
    }

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.to_string(), "10x20");
        assert_eq!(ImageSize::from([10, 20]), image_size);
    }

    #[test]
    fn image_size_fit_within() {
        let window = ImageSize {
            width: 1024,
            height: 720,
        };

        let tall = ImageSize {
            width: 360,
            height: 1440,
        };
        assert_eq!(
            tall.fit_within(window),
            ImageSize {
                width: 180,
                height: 720
            }
        );

        let small = ImageSize {
            width: 256,
            height: 128,
        };
        assert_eq!(
            small.fit_within(window),
            ImageSize {
                width: 1024,
                height: 512
            }
        );
    }

    #[test]
    fn allocate_zero_filled() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 5,
            height: 3,
        };
        for channels in 1..=4u8 {
            let image = PixelBuffer::allocate(size, channels)?;
            assert_eq!(image.len(), 5 * 3 * channels as usize);
            assert!(image.as_slice().iter().all(|&b| b == 0));
            assert_eq!(image.channels(), channels);
            assert_eq!(image.size(), size);
        }
        Ok(())
    }

    #[test]
    fn allocate_invalid_channels() {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        assert_eq!(
            PixelBuffer::allocate(size, 0),
            Err(ImageError::InvalidChannelCount(0))
        );
        assert_eq!(
            PixelBuffer::allocate(size, 5),
            Err(ImageError::InvalidChannelCount(5))
        );
    }

    #[test]
    fn allocate_zero_size() {
        let res = PixelBuffer::allocate(
            ImageSize {
                width: 0,
                height: 2,
            },
            3,
        );
        assert_eq!(res, Err(ImageError::ZeroImageSize(0, 2)));
    }

    #[test]
    fn allocate_overflow() {
        let res = PixelBuffer::allocate(
            ImageSize {
                width: usize::MAX,
                height: 2,
            },
            1,
        );
        assert_eq!(res, Err(ImageError::SizeOverflow(usize::MAX, 2, 1)));
    }

    #[test]
    fn allocate_failure() {
        let res = PixelBuffer::allocate_with(
            ImageSize {
                width: 4,
                height: 4,
            },
            4,
            &FailingAllocator,
        );
        let err = res.unwrap_err();
        assert_eq!(err, ImageError::AllocationFailed(64));
        assert_eq!(err.kind(), ErrorKind::Allocation);
    }

    #[test]
    fn from_raw_length_mismatch() {
        let res = PixelBuffer::from_raw(
            ImageSize {
                width: 2,
                height: 2,
            },
            3,
            vec![0u8; 11],
        );
        assert_eq!(res, Err(ImageError::InvalidDataLength(11, 12)));
    }

    #[test]
    fn pixel_layout() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = PixelBuffer::from_raw(
            ImageSize {
                width: 2,
                height: 2,
            },
            2,
            vec![
                0, 1, 2, 3,
                4, 5, 6, 7,
            ],
        )?;

        assert_eq!(image.pixel_offset(1, 1)?, 6);
        assert_eq!(image.get_pixel(0, 1)?, Pixel::new(4, 5, 0, 0));
        assert_eq!(image.get_pixel(1, 0)?, Pixel::new(2, 3, 0, 0));

        Ok(())
    }

    #[test]
    fn set_get_roundtrip_all_channel_counts() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let pixel = Pixel::new(10, 20, 30, 40);
        let expected = [
            Pixel::new(10, 0, 0, 0),
            Pixel::new(10, 20, 0, 0),
            Pixel::new(10, 20, 30, 0),
            Pixel::new(10, 20, 30, 40),
        ];

        for channels in 1..=4u8 {
            let mut image = PixelBuffer::allocate(size, channels)?;
            image.set_pixel(2, 1, pixel)?;
            assert_eq!(image.get_pixel(2, 1)?, expected[channels as usize - 1]);
            // neighbours untouched
            assert_eq!(image.get_pixel(1, 1)?, Pixel::default());
        }

        Ok(())
    }

    #[test]
    fn pixel_out_of_bounds() -> Result<(), ImageError> {
        let mut image = PixelBuffer::allocate(
            ImageSize {
                width: 4,
                height: 3,
            },
            3,
        )?;

        for (x, y) in [(4, 0), (0, 3), (4, 3), (100, 100)] {
            let err = image.get_pixel(x, y).unwrap_err();
            assert_eq!(err, ImageError::PixelIndexOutOfBounds(x, y, 4, 3));
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(image.set_pixel(x, y, Pixel::rgb(1, 2, 3)).is_err());
        }

        assert!(image.as_slice().iter().all(|&b| b == 0));
        assert!(image.get_pixel(3, 2).is_ok());

        Ok(())
    }

    #[test]
    fn clone_is_deep() -> Result<(), ImageError> {
        let mut image = PixelBuffer::allocate(
            ImageSize {
                width: 1,
                height: 1,
            },
            1,
        )?;
        let copy = image.clone();
        image.set_pixel(0, 0, Pixel::rgb(9, 0, 0))?;

        assert_eq!(copy.get_pixel(0, 0)?.red, 0);
        assert_ne!(copy.as_slice().as_ptr(), image.as_slice().as_ptr());

        Ok(())
    }
}
