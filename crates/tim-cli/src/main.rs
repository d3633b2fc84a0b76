use argh::FromArgs;
use std::path::PathBuf;

use tim::imgproc::filter::{self, Filter};
use tim::imgproc::resize::{self, NoOpPolicy, ResizeOptions};
use tim::imgproc::ProcContext;

mod codec;
mod dimension;

use dimension::Dimension;

#[derive(FromArgs)]
/// Resize an image with nearest-neighbor sampling and optionally apply a filter.
///
/// Dimensions are pixel counts (150) or percentages of the source (50%).
/// Zero keeps the source dimension.
struct Args {
    /// path to an input image
    #[argh(positional)]
    input: PathBuf,

    /// new width, e.g. 1920 or 120%
    #[argh(positional)]
    width: Dimension,

    /// new height, e.g. 1080 or 50%; omitted keeps the height
    #[argh(positional)]
    height: Option<Dimension>,

    /// path to the output image
    #[argh(option, short = 'o', default = "PathBuf::from(\"resized.jpg\")")]
    output: PathBuf,

    /// filter applied after resizing: grayscale
    #[argh(option, short = 'f')]
    filter: Option<Filter>,

    /// fail instead of copying when the size does not change
    #[argh(switch)]
    strict: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the image
    let image = codec::read_image(&args.input)?;

    let new_width = args.width.resolve(image.width());
    let new_height = args.height.map_or(0, |h| h.resolve(image.height()));

    let options = ResizeOptions::default().with_no_op(if args.strict {
        NoOpPolicy::Reject
    } else {
        NoOpPolicy::Copy
    });
    let ctx = ProcContext::default();

    let mut out = resize::resize_nearest_with(&image, new_width, new_height, &options, &ctx)?;

    if let Some(f) = args.filter {
        out = filter::apply_filter_with(&out, f, &ctx)?;
    }

    codec::write_image(&args.output, &out)?;

    log::info!(
        "{} ({}) -> {} ({})",
        args.input.display(),
        image.size(),
        args.output.display(),
        out.size()
    );

    Ok(())
}
