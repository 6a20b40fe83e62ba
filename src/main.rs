use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use sensor_dump_rs::logger;
use sensor_dump_rs::sample_pipeline::{
    BytesPerSample, ConversionConfig, DEFAULT_BITS_PER_PIXEL, DumpFormat, DumpToImagePipeline,
    OverflowPolicy, PngHistogramPlotter, SampleImage, TiffCompression,
};

use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert raw sensor dumps into viewable images")]
struct Args {
    /// Input dump: CSV text, or packed binary when --width and --height are given
    input: PathBuf,

    /// Output image, format chosen from the extension
    output: PathBuf,

    /// Image width in pixels for packed dumps
    #[arg(long, requires = "height")]
    width: Option<usize>,

    /// Image height in pixels for packed dumps
    #[arg(long, requires = "width")]
    height: Option<usize>,

    /// Significant bits per sample produced by the sensor
    #[arg(short, long, default_value_t = DEFAULT_BITS_PER_PIXEL)]
    bits: u32,

    /// Packed dump stores one byte per sample instead of two
    #[arg(long)]
    single_byte: bool,

    /// Render the intensity histogram to this image file
    #[arg(long)]
    histogram: Option<PathBuf>,

    /// How the histogram treats samples of 1024 and above
    #[arg(long, value_enum, default_value_t = OverflowArg::Discard)]
    overflow: OverflowArg,

    /// Also save the unscaled samples as 16-bit TIFF
    #[arg(long)]
    raw_tiff: Option<PathBuf>,

    /// Compression for --raw-tiff
    #[arg(long, value_enum, default_value_t = CompressionArg::None)]
    compression: CompressionArg,

    /// Show the converted image in a window (requires the `window` feature)
    #[arg(long)]
    show: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OverflowArg {
    Discard,
    Clamp,
    Error,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Discard => OverflowPolicy::Discard,
            OverflowArg::Clamp => OverflowPolicy::Clamp,
            OverflowArg::Error => OverflowPolicy::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

impl Args {
    fn input_format(&self) -> DumpFormat {
        match (self.width, self.height) {
            (Some(width), Some(height)) => DumpFormat::Packed {
                width,
                height,
                bytes_per_sample: if self.single_byte {
                    BytesPerSample::One
                } else {
                    BytesPerSample::Two
                },
            },
            _ => DumpFormat::Csv,
        }
    }
}

#[cfg(feature = "window")]
fn show(image: &SampleImage) -> anyhow::Result<()> {
    use sensor_dump_rs::sample_pipeline::WindowViewer;

    let mut viewer = WindowViewer::new("sensor dump");
    image.show_image(&mut viewer)?;
    viewer.wait_until_closed();
    Ok(())
}

#[cfg(not(feature = "window"))]
fn show(_image: &SampleImage) -> anyhow::Result<()> {
    bail!("this build has no display support, rebuild with `--features window`");
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.single_byte && args.width.is_none() {
        bail!("--single-byte only applies to packed dumps (--width/--height)");
    }

    let config = ConversionConfig::builder()
        .bits_per_pixel(args.bits)
        .input_format(args.input_format())
        .overflow_policy(args.overflow.into())
        .tiff_compression(args.compression.into())
        .build();

    info!("Input format: {:?}", config.input_format);
    info!("Bits per pixel: {}", config.bits_per_pixel);

    let pipeline = DumpToImagePipeline::new(config);
    let image = pipeline
        .convert_file(&args.input, &args.output)
        .with_context(|| format!("converting {}", args.input.display()))?;

    if let Some(path) = &args.histogram {
        let histogram = image.histogram_with_plot(&mut PngHistogramPlotter::new(path))?;
        info!(
            total = histogram.total(),
            overflow = histogram.overflow,
            "Histogram written to {}",
            path.display()
        );
    }

    if let Some(path) = &args.raw_tiff {
        image.save_raw_tiff(path, pipeline.config().tiff_compression)?;
        info!("Full-depth TIFF written to {}", path.display());
    }

    if args.show {
        show(&image)?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_with_default(if args.verbose { "debug" } else { "info" });

    info!("Starting sensor-dump...");

    match run(&args) {
        Ok(()) => {
            info!("Conversion successful!");
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            Err(e)
        }
    }
}
