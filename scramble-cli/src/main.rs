use std::io::Write as _;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scramble::{
    BufferSurface, GlyphSet, PlayerStatus, Rng64, ScrambleParams, Scrambler, Script, ScriptPlayer,
    TextSurface, TickStatus,
};

#[derive(Parser, Debug)]
#[command(name = "scramble", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a decode animation on the current terminal line.
    Play(PlayArgs),
    /// Print every frame of a single run, one line per tick.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Texts to decode, in order.
    texts: Vec<String>,

    /// Script JSON path. The script carries its own seed, holds, and
    /// parameters, so it cannot be combined with the tuning flags.
    #[arg(
        long = "in",
        conflicts_with_all = ["texts", "seed", "hold", "jitter_width", "reroll_probability", "glyphs"]
    )]
    in_path: Option<PathBuf>,

    /// Ticks per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Frames to hold each finished text before the next one starts.
    #[arg(long, default_value_t = 45)]
    hold: u64,

    /// Determinism seed (defaults to a clock-derived value).
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    params: ParamArgs,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Target text.
    #[arg(long)]
    text: String,

    /// Text already displayed before the run starts.
    #[arg(long, default_value = "")]
    from: String,

    /// Determinism seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[command(flatten)]
    params: ParamArgs,
}

#[derive(Parser, Debug)]
struct ParamArgs {
    /// Jitter width W: per-character start/end offsets are drawn from [0, W).
    #[arg(long = "jitter-width", default_value_t = 40)]
    jitter_width: u64,

    /// Per-tick probability of re-rolling a latched placeholder glyph.
    #[arg(long = "reroll-probability", default_value_t = 0.28)]
    reroll_probability: f64,

    /// Placeholder alphabet (defaults to the shipped symbol set).
    #[arg(long)]
    glyphs: Option<String>,
}

impl ParamArgs {
    fn to_params(&self) -> anyhow::Result<ScrambleParams> {
        let glyphs = match &self.glyphs {
            Some(alphabet) => GlyphSet::new(alphabet)?,
            None => GlyphSet::default(),
        };
        let params = ScrambleParams {
            jitter_width: self.jitter_width,
            reroll_probability: self.reroll_probability,
            glyphs,
        };
        params.validate()?;
        Ok(params)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

/// Rewrites the current terminal line on every commit.
#[derive(Debug, Default)]
struct TermSurface {
    text: String,
}

impl TextSurface for TermSurface {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        let mut out = std::io::stdout().lock();
        let _ = write!(out, "\r\x1b[2K{text}");
        let _ = out.flush();
    }
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps >= 1, "--fps must be >= 1");

    let script = match &args.in_path {
        Some(path) => Script::from_path(path)
            .with_context(|| format!("load script '{}'", path.display()))?,
        None => {
            anyhow::ensure!(
                !args.texts.is_empty(),
                "pass at least one text or --in <script.json>"
            );
            let mut script = Script::new(args.seed.unwrap_or_else(clock_seed))
                .with_params(args.params.to_params()?);
            for text in &args.texts {
                script = script.step(text.as_str(), args.hold);
            }
            script
        }
    };

    let frame = Duration::from_secs_f64(1.0 / f64::from(args.fps));
    let mut player = ScriptPlayer::new(TermSurface::default(), script)?;
    while player.tick() == PlayerStatus::Running {
        std::thread::sleep(frame);
    }
    println!();
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let params = args.params.to_params()?;
    let surface = BufferSurface::new(args.from.as_str());
    let mut scrambler = Scrambler::new(surface, params, Rng64::new(args.seed))?;

    let signal = scrambler.set_text(&args.text);
    println!("{}", scrambler.surface().contents());
    loop {
        match scrambler.tick() {
            TickStatus::Idle => break,
            TickStatus::Active => println!("{}", scrambler.surface().contents()),
            TickStatus::Completed => {
                println!("{}", scrambler.surface().contents());
                break;
            }
        }
    }
    anyhow::ensure!(signal.is_resolved(), "run ended without resolving");
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
