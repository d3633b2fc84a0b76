use tim_image::{ImageError, PixelBuffer};

/// Apply a function to every pair of source and destination pixels, row by row.
///
/// The function receives the interleaved channels of one source pixel and of the
/// pixel at the same coordinates in the destination.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the images differ in size.
pub fn iter_rows(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    mut f: impl FnMut(&[u8], &mut [u8]),
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let src_channels = src.channels() as usize;
    let dst_channels = dst.channels() as usize;
    let cols = src.width();

    src.as_slice()
        .chunks_exact(src_channels * cols)
        .zip(dst.as_slice_mut().chunks_exact_mut(dst_channels * cols))
        .for_each(|(src_row, dst_row)| {
            src_row
                .chunks_exact(src_channels)
                .zip(dst_row.chunks_exact_mut(dst_channels))
                .for_each(|(src_pixel, dst_pixel)| f(src_pixel, dst_pixel));
        });

    Ok(())
}
