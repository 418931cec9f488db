use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use whisperwire::api::example::{LocalRoute, fetch_example};
use whisperwire::{
    ActivationStore, FfmpegSink, FfmpegSinkOpts, FrameIndex, PngSequenceSink, QuestionBook,
    ShowConfig, ShowSession, TerminalDisplay, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "whisperwire", version, about = "Render and inspect the AI Whisperers page")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the whole show as an MP4 (requires `ffmpeg` on PATH) or a PNG sequence.
    Render(RenderArgs),
    /// Print the terminal panel for a question.
    Answer(AnswerArgs),
    /// Print the example API document.
    Api,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Show config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output MP4 path.
    #[arg(long, conflicts_with = "png_dir", required_unless_present = "png_dir")]
    out: Option<PathBuf>,

    /// Write numbered PNG files into this directory instead of encoding a video.
    #[arg(long)]
    png_dir: Option<PathBuf>,

    /// Fail instead of replacing an existing MP4.
    #[arg(long = "no-overwrite", action = clap::ArgAction::SetFalse)]
    overwrite: bool,
}

#[derive(Args, Debug)]
struct AnswerArgs {
    /// Question id, e.g. `what-is-this`.
    #[arg(long)]
    id: String,

    /// Question book JSON. The built-in book is used when omitted.
    #[arg(long)]
    questions: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Answer(args) => cmd_answer(args),
        Command::Api => cmd_api(),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ShowConfig> {
    match path {
        Some(p) => ShowConfig::from_json_file(p)
            .with_context(|| format!("load show config '{}'", p.display())),
        None => Ok(ShowConfig::default()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let mut sess = ShowSession::new(cfg)?;
    let frame = sess.render_frame(FrameIndex(args.frame))?;
    write_png(&args.out, &frame).with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let mut sess = ShowSession::new(cfg)?;

    let (stats, written) = match (args.out, args.png_dir) {
        (Some(out), _) => {
            let opts = FfmpegSinkOpts {
                overwrite: args.overwrite,
                ..FfmpegSinkOpts::new(&out)
            };
            let mut sink = FfmpegSink::new(opts);
            (sess.render_all(&mut sink)?, out)
        }
        (None, Some(dir)) => {
            let mut sink = PngSequenceSink::new(&dir);
            (sess.render_all(&mut sink)?, dir)
        }
        (None, None) => anyhow::bail!("either --out or --png-dir is required"),
    };

    eprintln!(
        "wrote {} ({} frames)",
        written.display(),
        stats.frames_rendered
    );
    Ok(())
}

fn cmd_answer(args: AnswerArgs) -> anyhow::Result<()> {
    let book = match &args.questions {
        Some(p) => QuestionBook::from_json_file(p)
            .with_context(|| format!("load question book '{}'", p.display()))?,
        None => QuestionBook::default(),
    };
    if !book.contains(&args.id) {
        anyhow::bail!(
            "unknown question id '{}' (known: {})",
            args.id,
            book.ids().join(", ")
        );
    }

    let store = ActivationStore::new();
    store.set(args.id.as_str());
    let terminal = TerminalDisplay::new(store, Rc::new(book));
    for line in terminal.lines() {
        println!("{line}");
    }
    Ok(())
}

fn cmd_api() -> anyhow::Result<()> {
    let outcome = fetch_example(&LocalRoute);
    println!("{}", outcome.to_json_pretty()?);
    Ok(())
}
