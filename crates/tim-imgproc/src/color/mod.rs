mod gray;

pub use gray::{grayscale, grayscale_with, luminance, BW, GW, RW};
