/// Channel offset of red inside an interleaved pixel.
pub const RED: usize = 0;
/// Channel offset of green inside an interleaved pixel.
pub const GREEN: usize = 1;
/// Channel offset of blue inside an interleaved pixel.
pub const BLUE: usize = 2;
/// Channel offset of alpha inside an interleaved pixel.
pub const ALPHA: usize = 3;

/// A single pixel with up to four 8-bit channels.
///
/// Pixels are only used at the accessor boundary of a
/// [`PixelBuffer`](crate::PixelBuffer); buffers never store them.
///
/// # Examples
///
/// ```
/// use tim_image::Pixel;
///
/// let pixel = Pixel::from_channels(&[10, 20]);
///
/// assert_eq!(pixel.red, 10);
/// assert_eq!(pixel.green, 20);
/// assert_eq!(pixel.blue, 0);
/// assert_eq!(pixel.alpha, 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel.
    pub alpha: u8,
}

impl Pixel {
    /// Create a pixel from all four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a pixel with alpha left at zero, as read from a 3-channel buffer.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0)
    }

    /// Build a pixel from interleaved channel samples.
    ///
    /// Channels missing from `channels` read as `0`; samples past the fourth are ignored.
    pub fn from_channels(channels: &[u8]) -> Self {
        let mut px = [0u8; 4];
        let n = channels.len().min(px.len());
        px[..n].copy_from_slice(&channels[..n]);
        Self::from(px)
    }

    /// Write the pixel into interleaved channel samples.
    ///
    /// Only the channels present in `dst` are written; the rest are dropped.
    pub fn write_channels(&self, dst: &mut [u8]) {
        let px = self.to_array();
        let n = dst.len().min(px.len());
        dst[..n].copy_from_slice(&px[..n]);
    }

    /// The channels in `[red, green, blue, alpha]` order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(px: [u8; 4]) -> Self {
        Self::new(px[RED], px[GREEN], px[BLUE], px[ALPHA])
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_array()
    }
}
