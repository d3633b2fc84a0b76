#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use tim_image as image;

#[doc(inline)]
pub use tim_imgproc as imgproc;
