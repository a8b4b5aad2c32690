//! Command-line interface for splitting, blending and reassembling images

use crate::blend::Compositor;
use crate::io::configuration::{DEFAULT_BLOCK_SIZE, DEFAULT_OUTPUT_SIZE, DEFAULT_SLOT_COUNT};
use crate::io::error::Result;
use crate::io::image::{
    collect_image_paths, load_image, load_parts, save_buffer, save_parts, with_default_extension,
};
use crate::io::progress::ProgressReporter;
use crate::pixel::{FillMode, PixelBuffer};
use crate::scatter::reassemble::reassemble;
use crate::scatter::{ScatterConfig, ScatterSplitter};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "scatterblend")]
#[command(
    author,
    version,
    about = "Scatter an image into inverted block canvases, or blend images together"
)]
/// Command-line arguments for the image tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and all logging below errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available operations
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split one image into scattered, inverted block canvases
    Split(SplitArgs),
    /// Blend two or more images with multiply (white) or screen (black)
    Blend(BlendArgs),
    /// Rebuild the inverted canvas from previously split parts
    Reassemble(ReassembleArgs),
}

/// Scatter geometry shared by `split` and `reassemble`
#[derive(Args, Debug, Clone, Copy)]
pub struct GeometryArgs {
    /// Side length of the square output canvases
    #[arg(long, default_value_t = DEFAULT_OUTPUT_SIZE)]
    pub output_size: u32,

    /// Side length of one block (must divide the output size)
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: u32,

    /// Number of output canvases
    #[arg(long, default_value_t = DEFAULT_SLOT_COUNT)]
    pub slots: usize,
}

impl GeometryArgs {
    /// Scatter configuration described by these arguments
    pub const fn config(&self) -> ScatterConfig {
        ScatterConfig {
            output_size: self.output_size,
            block_size: self.block_size,
            slot_count: self.slots,
        }
    }
}

/// Arguments of the `split` command
#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Image to split
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory receiving part_1.png ... part_K.png (created if missing)
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Color of empty blocks and of flattened transparency
    #[arg(short, long, value_enum, default_value_t = FillMode::Black)]
    pub fill: FillMode,

    /// Seed for a reproducible block assignment
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Canvas geometry
    #[command(flatten)]
    pub geometry: GeometryArgs,
}

/// Arguments of the `blend` command
#[derive(Args, Debug, Clone)]
pub struct BlendArgs {
    /// Images or directories of images, blended in the given order
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output file; `.png` is appended when no extension is given
    #[arg(short, long)]
    pub output: PathBuf,

    /// Background color; white blends with multiply, black with screen
    #[arg(short, long, value_enum, default_value_t = FillMode::White)]
    pub background: FillMode,

    /// Invert the colors of the final composite
    #[arg(short, long)]
    pub invert: bool,
}

/// Arguments of the `reassemble` command
#[derive(Args, Debug, Clone)]
pub struct ReassembleArgs {
    /// Directory containing part_1.png ... part_K.png
    #[arg(value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Output file; `.png` is appended when no extension is given
    #[arg(short, long)]
    pub output: PathBuf,

    /// Fill color the parts were split with
    #[arg(short, long, value_enum, default_value_t = FillMode::Black)]
    pub fill: FillMode,

    /// Canvas geometry the parts were split with
    #[command(flatten)]
    pub geometry: GeometryArgs,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Maximum log level selected by `--quiet` and `-v`
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Install a stderr log subscriber at the selected level
    ///
    /// Does nothing if a global subscriber is already set.
    pub fn init_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_max_level(self.log_level())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Runs the selected command with progress reporting
pub struct CommandRunner {
    cli: Cli,
    progress: ProgressReporter,
}

impl CommandRunner {
    /// Create a runner for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        let progress = ProgressReporter::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Run the command and return the files it wrote
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, decoding, processing or
    /// saving fails
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        match &self.cli.command {
            Command::Split(args) => run_split(args, &mut self.progress),
            Command::Blend(args) => run_blend(args, &mut self.progress),
            Command::Reassemble(args) => run_reassemble(args),
        }
    }
}

fn run_split(args: &SplitArgs, progress: &mut ProgressReporter) -> Result<Vec<PathBuf>> {
    // Geometry is validated before the input is touched
    let splitter = ScatterSplitter::new(args.geometry.config())?;

    let parts = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            splitter.split_file(&args.input, args.fill, &mut rng)?
        }
        None => splitter.split_file(&args.input, args.fill, &mut rand::rng())?,
    };

    progress.start(parts.len(), "Saving parts");
    let written = save_parts(&parts, &args.output_dir, |path| progress.advance(path))?;
    progress.finish("Parts saved");

    tracing::info!(
        parts = written.len(),
        output_dir = %args.output_dir.display(),
        "split complete"
    );
    Ok(written)
}

fn run_blend(args: &BlendArgs, progress: &mut ProgressReporter) -> Result<Vec<PathBuf>> {
    let paths = collect_image_paths(&args.inputs)?;
    Compositor::check_input_count(paths.len())?;
    let compositor = Compositor::new(args.background, args.invert);

    progress.start(paths.len(), "Loading images");
    let mut images = Vec::with_capacity(paths.len());
    for path in &paths {
        images.push(load_image(path)?);
        progress.advance(path);
    }
    progress.finish("Images loaded");

    let composite = compositor.blend(&images)?;
    let output = with_default_extension(&args.output);
    save_buffer(&composite, &output)?;

    tracing::info!(
        inputs = paths.len(),
        output = %output.display(),
        "blend complete"
    );
    Ok(vec![output])
}

fn run_reassemble(args: &ReassembleArgs) -> Result<Vec<PathBuf>> {
    let splitter = ScatterSplitter::new(args.geometry.config())?;
    let parts = load_parts(&args.input_dir, splitter.slot_count())?
        .iter()
        .map(|image| PixelBuffer::from_dynamic(image, args.fill))
        .collect::<Result<Vec<_>>>()?;

    let canvas = reassemble(&parts, splitter.grid(), args.fill)?;
    let output = with_default_extension(&args.output);
    save_buffer(&canvas, &output)?;

    tracing::info!(output = %output.display(), "reassemble complete");
    Ok(vec![output])
}
