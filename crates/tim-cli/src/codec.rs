use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, ExtendedColorType, ImageFormat};
use tim::image::{ImageError, ImageSize, PixelBuffer};

/// An error type for reading and writing image files.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    /// Error to decode the image.
    #[error("Failed to decode the image. {0}")]
    ImageDecodeError(#[source] image::ImageError),

    /// Error to encode the image.
    #[error("Failed to encode the image. {0}")]
    ImageEncodeError(#[source] image::ImageError),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] ImageError),

    /// The image does not fit the encoder's 32-bit dimensions.
    #[error("Image of size {0} is too large to encode")]
    ImageTooLarge(ImageSize),
}

/// Decode an image file into a pixel buffer, keeping its channel count.
///
/// Samples wider than 8 bits are reduced to 8 bits.
pub fn read_image(path: impl AsRef<Path>) -> Result<PixelBuffer, CodecError> {
    let path = path.as_ref();
    let start = Instant::now();

    let decoded = image::open(path).map_err(CodecError::ImageDecodeError)?;
    let channels = decoded.color().channel_count();

    let ((width, height), data) = match channels {
        1 => {
            let buf = decoded.into_luma8();
            (buf.dimensions(), buf.into_raw())
        }
        2 => {
            let buf = decoded.into_luma_alpha8();
            (buf.dimensions(), buf.into_raw())
        }
        3 => {
            let buf = decoded.into_rgb8();
            (buf.dimensions(), buf.into_raw())
        }
        _ => {
            let buf = decoded.into_rgba8();
            (buf.dimensions(), buf.into_raw())
        }
    };

    let size = ImageSize {
        width: width as usize,
        height: height as usize,
    };
    let src = PixelBuffer::from_raw(size, channels.min(4), data)?;

    log::debug!(
        "read {} ({}x{}) in {:?}",
        path.display(),
        size,
        src.channels(),
        start.elapsed()
    );

    Ok(src)
}

/// Quality used for JPEG outputs.
pub const JPEG_QUALITY: u8 = 100;

/// Encode a pixel buffer to a file, picking the format from the extension.
///
/// JPEG has no alpha channel, so alpha is dropped before encoding to `.jpg`
/// or `.jpeg`, which are always written at [`JPEG_QUALITY`].
pub fn write_image(path: impl AsRef<Path>, src: &PixelBuffer) -> Result<(), CodecError> {
    let path = path.as_ref();
    let start = Instant::now();

    let too_large = || CodecError::ImageTooLarge(src.size());
    let width = u32::try_from(src.width()).map_err(|_| too_large())?;
    let height = u32::try_from(src.height()).map_err(|_| too_large())?;

    if let Ok(ImageFormat::Jpeg) = ImageFormat::from_path(path) {
        write_jpeg(path, src, width, height).map_err(CodecError::ImageEncodeError)?;
    } else {
        let color = match src.channels() {
            1 => ColorType::L8,
            2 => ColorType::La8,
            3 => ColorType::Rgb8,
            _ => ColorType::Rgba8,
        };

        image::save_buffer(path, src.as_slice(), width, height, color)
            .map_err(CodecError::ImageEncodeError)?;
    }

    log::debug!(
        "wrote {} ({}x{}) in {:?}",
        path.display(),
        src.size(),
        src.channels(),
        start.elapsed()
    );

    Ok(())
}

fn write_jpeg(
    path: &Path,
    src: &PixelBuffer,
    width: u32,
    height: u32,
) -> image::ImageResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    let mut encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);

    match src.channels() {
        1 => encoder.encode(src.as_slice(), width, height, ExtendedColorType::L8),
        3 => encoder.encode(src.as_slice(), width, height, ExtendedColorType::Rgb8),
        channels => {
            let color = if channels == 2 {
                ExtendedColorType::L8
            } else {
                ExtendedColorType::Rgb8
            };
            let opaque = drop_alpha(src);
            encoder.encode(&opaque, width, height, color)
        }
    }
}

/// Copy the samples of a 2 or 4 channel buffer without the trailing alpha channel.
fn drop_alpha(src: &PixelBuffer) -> Vec<u8> {
    let channels = src.channels() as usize;
    src.as_slice()
        .chunks_exact(channels)
        .flat_map(|px| &px[..channels - 1])
        .copied()
        .collect()
}
