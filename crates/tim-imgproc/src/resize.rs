use tim_image::{ImageError, ImageSize, PixelBuffer, TraceEvent};

use crate::context::ProcContext;

/// What to do when a resize request resolves to the source size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoOpPolicy {
    /// Return a fresh copy of the source.
    #[default]
    Copy,

    /// Fail with [`ImageError::NoOpResize`].
    Reject,
}

/// Optional arguments for the resize operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeOptions {
    /// Behavior for requests that do not change the size.
    pub no_op: NoOpPolicy,
}

impl ResizeOptions {
    /// Set the no-op policy.
    pub fn with_no_op(self, no_op: NoOpPolicy) -> Self {
        Self { no_op }
    }
}

/// Resolve the requested size, where `0` keeps the source dimension.
pub fn resolve_size(src: ImageSize, new_width: usize, new_height: usize) -> ImageSize {
    ImageSize {
        width: if new_width == 0 { src.width } else { new_width },
        height: if new_height == 0 { src.height } else { new_height },
    }
}

/// Resize an image with nearest-neighbor sampling.
///
/// A zero `new_width` or `new_height` keeps that dimension of the source. A
/// request that keeps both returns a copy of the source.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `new_width` - The width of the output image, or `0` to keep the source width.
/// * `new_height` - The height of the output image, or `0` to keep the source height.
///
/// # Returns
///
/// A new image with the requested size and the channel count of the source.
///
/// # Example
///
/// ```
/// use tim_image::{ImageSize, PixelBuffer};
/// use tim_imgproc::resize::resize_nearest;
///
/// let image = PixelBuffer::from_raw(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     1,
///     vec![10, 20],
/// )
/// .unwrap();
///
/// let resized = resize_nearest(&image, 4, 0).unwrap();
///
/// assert_eq!(resized.size(), ImageSize { width: 4, height: 1 });
/// assert_eq!(resized.as_slice(), &[10, 10, 20, 20]);
/// ```
pub fn resize_nearest(
    src: &PixelBuffer,
    new_width: usize,
    new_height: usize,
) -> Result<PixelBuffer, ImageError> {
    resize_nearest_with(
        src,
        new_width,
        new_height,
        &ResizeOptions::default(),
        &ProcContext::default(),
    )
}

/// Resize an image with nearest-neighbor sampling, using explicit options and context.
///
/// Every destination pixel `(x, y)` pulls the source pixel
/// `(floor(x / ratio_w), floor(y / ratio_h))` where `ratio_w = new_width / width`
/// and `ratio_h = new_height / height`. Downscaling skips source pixels and
/// upscaling repeats them; nothing is blended.
///
/// # Errors
///
/// * [`ImageError::NoOpResize`] if the size does not change and the policy is
///   [`NoOpPolicy::Reject`].
/// * [`ImageError::SizeOverflow`] if the destination size overflows.
/// * [`ImageError::AllocationFailed`] if the destination cannot be allocated.
///
/// The source is never modified.
pub fn resize_nearest_with(
    src: &PixelBuffer,
    new_width: usize,
    new_height: usize,
    options: &ResizeOptions,
    ctx: &ProcContext,
) -> Result<PixelBuffer, ImageError> {
    let src_size = src.size();
    let new_size = resolve_size(src_size, new_width, new_height);

    if new_size == src_size {
        let copied = options.no_op == NoOpPolicy::Copy;
        ctx.tracer.trace(&TraceEvent::NoOpResize {
            size: src_size,
            copied,
        });
        if !copied {
            return Err(ImageError::NoOpResize(src_size.width, src_size.height));
        }

        let mut dst = ctx.allocate(src_size, src.channels())?;
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(dst);
    }

    let ratio_w = new_size.width as f32 / src_size.width as f32;
    let ratio_h = new_size.height as f32 / src_size.height as f32;
    ctx.tracer.trace(&TraceEvent::Resize {
        from: src_size,
        to: new_size,
        ratio_w,
        ratio_h,
    });

    let mut dst = ctx.allocate(new_size, src.channels())?;

    let channels = src.channels() as usize;
    let src_stride = src_size.width * channels;
    let src_data = src.as_slice();

    for (dst_y, dst_row) in dst
        .as_slice_mut()
        .chunks_exact_mut(new_size.width * channels)
        .enumerate()
    {
        let src_y = source_index(dst_y, ratio_h, src_size.height);
        let src_row = &src_data[src_y * src_stride..(src_y + 1) * src_stride];

        for (dst_x, dst_pixel) in dst_row.chunks_exact_mut(channels).enumerate() {
            let src_x = source_index(dst_x, ratio_w, src_size.width);
            dst_pixel.copy_from_slice(&src_row[src_x * channels..(src_x + 1) * channels]);
        }
    }

    Ok(dst)
}

/// Map a destination index back to the source, truncating the quotient.
///
/// The result is clamped to the last source index against rounding in the division.
#[inline]
fn source_index(dst: usize, ratio: f32, src_len: usize) -> usize {
    ((dst as f32 / ratio) as usize).min(src_len - 1)
}
