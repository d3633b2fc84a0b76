use tim_image::{ImageError, PixelBuffer, TraceEvent};

use crate::context::ProcContext;
use crate::rows;

/// Red weight of the relative luminance.
pub const RW: f32 = 0.2126;
/// Green weight of the relative luminance.
pub const GW: f32 = 0.7152;
/// Blue weight of the relative luminance.
pub const BW: f32 = 0.0722;

/// Channels written by the grayscale conversion.
const GRAY_CHANNELS: u8 = 3;

/// Relative luminance of an RGB triple, rounded to 8 bits.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = RW * r as f32 + GW * g as f32 + BW * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Convert an RGB(A) image to grayscale using the formula:
///
/// Y = 0.2126 * R + 0.7152 * G + 0.0722 * B
///
/// The result is written to all three channels of a new 3-channel image, so
/// consumers expecting RGB data keep working. Alpha is dropped.
///
/// # Arguments
///
/// * `src` - The input image with 3 or 4 channels.
///
/// Precondition: the input image must have at least 3 channels.
///
/// # Example
///
/// ```
/// use tim_image::{ImageSize, Pixel, PixelBuffer};
/// use tim_imgproc::color::grayscale;
///
/// let image = PixelBuffer::from_raw(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     3,
///     vec![255, 0, 0],
/// )
/// .unwrap();
///
/// let gray = grayscale(&image).unwrap();
///
/// assert_eq!(gray.channels(), 3);
/// assert_eq!(gray.get_pixel(0, 0).unwrap(), Pixel::rgb(54, 54, 54));
/// ```
pub fn grayscale(src: &PixelBuffer) -> Result<PixelBuffer, ImageError> {
    grayscale_with(src, &ProcContext::default())
}

/// Convert an RGB(A) image to grayscale with an explicit context.
///
/// # Errors
///
/// * [`ImageError::UnsupportedChannelCount`] if the input has fewer than 3 channels.
/// * [`ImageError::AllocationFailed`] if the destination cannot be allocated.
pub fn grayscale_with(src: &PixelBuffer, ctx: &ProcContext) -> Result<PixelBuffer, ImageError> {
    if src.channels() < GRAY_CHANNELS {
        return Err(ImageError::UnsupportedChannelCount(
            src.channels(),
            GRAY_CHANNELS,
        ));
    }

    ctx.tracer.trace(&TraceEvent::Grayscale {
        size: src.size(),
        channels: src.channels(),
    });

    let mut dst = ctx.allocate(src.size(), GRAY_CHANNELS)?;

    rows::iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        let y = luminance(src_pixel[0], src_pixel[1], src_pixel[2]);
        dst_pixel.fill(y);
    })?;

    Ok(dst)
}
