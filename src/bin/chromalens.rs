use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use chromalens::{
    CaptureConstraints, CaptureProvider, FilterRegistry, FramePump, FrameSize, ImmediateTicker,
    IntervalTicker, MODE_KEYS, MemoryCanvas, PumpOpts, StillImageProvider, TestPatternProvider,
    acquire_stream, parse_mode,
};

#[derive(Parser, Debug)]
#[command(name = "chromalens", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the selectable filter mode keys.
    Modes,
    /// Apply a filter mode to a single image.
    Frame(FrameArgs),
    /// Run the live pipeline against a capture source.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input image (PNG/JPEG).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Filter mode key (e.g. `daltonize:protanope`).
    #[arg(long, default_value = "daltonize")]
    mode: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Filter mode key.
    #[arg(long, default_value = "toDeuteranopia")]
    mode: String,

    /// Number of frames to pump before the source ends.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Target region width.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Target region height.
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Still image standing in for the camera; omit for the test pattern.
    #[arg(long)]
    source: Option<PathBuf>,

    /// Pump pacing in frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Run unpaced (ignore --fps).
    #[arg(long, default_value_t = false)]
    max_rate: bool,

    /// Write the final surface as a PNG.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Modes => cmd_modes(),
        Command::Frame(args) => cmd_frame(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn cmd_modes() -> anyhow::Result<()> {
    let blurbs = [
        "show the feed unchanged",
        "deuteranopia simulation (linear matrix)",
        "hue-compression remap (exponent 0.7)",
        "CVD correction; daltonize:<protanope|deuteranope|tritanope>",
    ];
    for (key, blurb) in MODE_KEYS.iter().zip(blurbs) {
        println!("{key:<18}{blurb}");
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mode = parse_mode(&args.mode)
        .with_context(|| format!("unknown filter mode '{}'", args.mode))?;

    let img = image::open(&args.in_path)
        .with_context(|| format!("open '{}'", args.in_path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let mut data = img.into_raw();

    mode.build().apply(&mut data);

    write_png(&args.out, &data, width, height)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let size = FrameSize::new(args.width, args.height)?;

    let mut registry = FilterRegistry::new();
    if !registry.select_key(&args.mode) {
        anyhow::bail!("unknown filter mode '{}'", args.mode);
    }

    let mut providers: Vec<Box<dyn CaptureProvider>> = Vec::new();
    if let Some(path) = &args.source {
        providers.push(Box::new(StillImageProvider {
            path: path.clone(),
            budget: Some(args.frames),
        }));
    }
    providers.push(Box::new(TestPatternProvider {
        size,
        budget: Some(args.frames),
    }));

    let mut source = acquire_stream(&providers, &CaptureConstraints::default())
        .context("video capture error")?;

    let mut surface = MemoryCanvas::new(size.width, size.height)?;
    let mut pump = FramePump::new(PumpOpts { region: size });
    pump.notify_playing();

    let stats = if args.max_rate {
        let mut ticker = ImmediateTicker;
        pump.run(source.as_mut(), &mut surface, &registry, &mut ticker)?
    } else {
        let mut ticker = IntervalTicker::target_fps(args.fps);
        pump.run(source.as_mut(), &mut surface, &registry, &mut ticker)?
    };

    eprintln!(
        "pumped {} frames ({} filtered) in mode '{}'",
        stats.ticks_total,
        stats.frames_filtered,
        registry.mode().key()
    );

    if let Some(out) = &args.out {
        write_png(out, surface.bytes(), size.width, size.height)?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn write_png(path: &std::path::Path, data: &[u8], width: u32, height: u32) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        data,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
