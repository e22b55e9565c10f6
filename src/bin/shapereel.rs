use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shapereel", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print element durations and the frame count.
    Info(InfoArgs),
    /// Print the composed state of every element at a time as JSON.
    Sample(SampleArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Delete frame files (or videos) from a directory.
    Clean(CleanArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override frames per second.
    #[arg(long)]
    fps: Option<f64>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Time in seconds; clamped to the timeline.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override image width.
    #[arg(long)]
    width: Option<u32>,

    /// Override image height.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Override frames per second.
    #[arg(long)]
    fps: Option<f64>,

    /// Override video width.
    #[arg(long)]
    width: Option<u32>,

    /// Override video height.
    #[arg(long)]
    height: Option<u32>,

    /// Override bitrate in Mbit/s.
    #[arg(long)]
    bitrate: Option<u32>,

    /// Directory for intermediate frames (defaults to `<out>.frames`).
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Keep the PNG frames after encoding.
    #[arg(long)]
    keep_frames: bool,

    /// Encoder executable.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: PathBuf,
}

#[derive(Parser, Debug)]
struct CleanArgs {
    /// Directory to clean.
    #[arg(long)]
    dir: PathBuf,

    /// Delete `.mp4` files instead of everything else.
    #[arg(long)]
    videos: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Clean(args) => cmd_clean(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> anyhow::Result<(shapereel::TimelineDoc, Vec<shapereel::Element>)> {
    let doc = shapereel::TimelineDoc::load(path)
        .with_context(|| format!("load timeline '{}'", path.display()))?;
    let elements = doc
        .to_elements()
        .with_context(|| format!("build elements from '{}'", path.display()))?;
    Ok((doc, elements))
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let (doc, elements) = load(&args.in_path)?;
    let fps = args.fps.unwrap_or(doc.render.fps);

    let mut tl = shapereel::Timeline::new(shapereel::SceneTree::new());
    tl.set_elements(elements)?;

    for e in tl.elements() {
        let kinds: Vec<&str> = e.active_kinds().iter().map(|k| k.as_str()).collect();
        println!(
            "{}: {:.3}s order={} transforms=[{}] color={}",
            e.name(),
            e.duration(),
            e.order(),
            kinds.join(","),
            e.color().is_some()
        );
    }
    println!("duration: {:.3}s", tl.max_duration());
    println!(
        "frames: {} at {fps} fps",
        shapereel::frame_count(fps, tl.max_duration())
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let (_, elements) = load(&args.in_path)?;
    let states: Vec<shapereel::ComposedElement> = elements
        .iter()
        .map(|e| shapereel::compose_element(e, args.time))
        .collect();
    let json = serde_json::to_string_pretty(&states).context("serialize sampled state")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (doc, elements) = load(&args.in_path)?;

    let mut tl = shapereel::Timeline::new(shapereel::SceneTree::new());
    tl.set_elements(elements)?;
    let max = tl.max_duration();
    if max > 0.0 {
        tl.seek_to_progress(args.time / max);
    }

    let mut capture = doc.render.png_capture();
    if let Some(w) = args.width {
        capture.width = w;
    }
    if let Some(h) = args.height {
        capture.height = h;
    }

    shapereel::ensure_parent_dir(&args.out)?;
    let img = capture.render(tl.scene())?;
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (doc, elements) = load(&args.in_path)?;

    let frames_dir = args
        .frames_dir
        .clone()
        .unwrap_or_else(|| args.out.with_extension("frames"));
    let mut settings = doc.render.export_settings(frames_dir, &args.out);
    if let Some(fps) = args.fps {
        settings.fps = fps;
    }
    if let Some(w) = args.width {
        settings.width = w;
    }
    if let Some(h) = args.height {
        settings.height = h;
    }
    if let Some(b) = args.bitrate {
        settings.bitrate_mbps = b;
    }
    settings.keep_frames = args.keep_frames;

    let mut capture = doc.render.png_capture();
    capture.width = settings.width;
    capture.height = settings.height;

    let mut tl = shapereel::Timeline::new(shapereel::SceneTree::new());
    tl.set_elements(elements)?;

    let encoder = shapereel::FfmpegEncoder::new(&args.ffmpeg);
    let report = shapereel::render_to_mp4(&mut tl, &settings, &mut capture, &encoder, |p| {
        tracing::debug!(frame = p.frame, total = p.total_frames, "captured");
        ControlFlow::Continue(())
    })?;

    eprintln!(
        "wrote {} ({} frames)",
        args.out.display(),
        report.frame_count
    );
    Ok(())
}

fn cmd_clean(args: CleanArgs) -> anyhow::Result<()> {
    let removed = if args.videos {
        shapereel::clear_videos(&args.dir)?
    } else {
        shapereel::clear_frames(&args.dir)?
    };
    eprintln!("removed {removed} files from {}", args.dir.display());
    Ok(())
}
