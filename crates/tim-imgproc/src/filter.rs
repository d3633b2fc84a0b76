use std::fmt;
use std::str::FromStr;

use tim_image::{ImageError, PixelBuffer};

use crate::color;
use crate::context::ProcContext;

/// A pixel filter that produces a new image from a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Relative luminance grayscale, see [`color::grayscale`].
    Grayscale,
}

impl Filter {
    /// Every available filter.
    pub const ALL: [Filter; 1] = [Filter::Grayscale];

    /// The lower-case name of the filter.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown filter name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown filter '{}', expected one of: {}", .0, filter_names())]
pub struct ParseFilterError(String);

fn filter_names() -> String {
    Filter::ALL
        .iter()
        .map(Filter::name)
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}

/// Apply a filter to an image, returning a new image.
///
/// # Example
///
/// ```
/// use tim_image::{ImageSize, PixelBuffer};
/// use tim_imgproc::filter::{apply_filter, Filter};
///
/// let image = PixelBuffer::allocate(ImageSize { width: 2, height: 2 }, 4).unwrap();
/// let gray = apply_filter(&image, Filter::Grayscale).unwrap();
///
/// assert_eq!(gray.channels(), 3);
/// ```
pub fn apply_filter(src: &PixelBuffer, filter: Filter) -> Result<PixelBuffer, ImageError> {
    apply_filter_with(src, filter, &ProcContext::default())
}

/// Apply a filter to an image with an explicit context.
pub fn apply_filter_with(
    src: &PixelBuffer,
    filter: Filter,
    ctx: &ProcContext,
) -> Result<PixelBuffer, ImageError> {
    match filter {
        Filter::Grayscale => color::grayscale_with(src, ctx),
    }
}
