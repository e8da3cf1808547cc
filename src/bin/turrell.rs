use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "turrell", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the static gradient disc (no rings) as a PNG.
    Still(StillArgs),
    /// Render a single animated frame as a PNG.
    Frame(FrameArgs),
    /// Render the animation as a numbered PNG sequence.
    Frames(FramesArgs),
    /// Render the animation as an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene config JSON. Defaults apply to missing fields, or to everything when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for ring colors (overrides the config).
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second (overrides the config).
    #[arg(long)]
    fps: Option<u32>,

    /// Number of frames to render (overrides the config).
    #[arg(long)]
    frames: Option<u64>,
}

#[derive(Args, Debug)]
struct StillArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output PNG path.
    #[arg(long, default_value = "turrell_circle.png")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output directory for `frame_0000.png`, `frame_0001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Still(args) => cmd_still(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_scene(args: &SceneArgs) -> anyhow::Result<turrell::Scene> {
    let mut cfg = match &args.config {
        Some(path) => turrell::SceneConfig::from_json_path(path)?,
        None => turrell::SceneConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(fps) = args.fps {
        cfg.fps = fps;
    }
    if let Some(frames) = args.frames {
        cfg.frames = frames;
    }
    cfg.validate().context("validate scene config")
}

fn write_png(frame: &turrell::FrameBuffer, out: &Path) -> anyhow::Result<()> {
    turrell::ensure_parent_dir(out)?;
    frame.save_png(out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_still(args: StillArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let session = turrell::RenderSession::new(scene);
    write_png(&session.still(), &args.out)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let mut session = turrell::RenderSession::new(scene);
    let mut sink = turrell::InMemorySink::new();
    let range = turrell::FrameRange::new(
        turrell::FrameIndex(args.frame),
        turrell::FrameIndex(args.frame.saturating_add(1)),
    )?;
    session.render_range(range, &mut sink)?;

    let (_, frame) = sink
        .frames()
        .first()
        .context("frame render produced no output (bug)")?;
    write_png(frame, &args.out)
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let mut session = turrell::RenderSession::new(scene);
    let mut sink = turrell::PngSequenceSink::new(&args.out_dir);
    let stats = session.render_all(&mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    eprintln!(
        "encode with: ffmpeg -framerate {} -i {}/frame_%04d.png -pix_fmt yuv420p output.mp4",
        session.scene().fps.num,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let mut session = turrell::RenderSession::new(scene);
    let mut sink = turrell::FfmpegSink::new(turrell::FfmpegSinkOpts::new(&args.out));
    session.render_all(&mut sink)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
