//! Relay CLI
//!
//! Runs one of the demo rosters as a terminal conversation:
//! - travel: destinations, flights, hotels, things to do
//! - career: fields, skill roadmaps, job roles
//! - adventure: narration, dice combat, loot
//! - study: study plans, research links, summaries
//!
//! Turns come from stdin (or `--script`), replies go to stdout as narration or
//! JSON lines, and logs go to stderr.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use clap::{Parser, ValueEnum};
use relay_agent::{
    Agent, JsonLinesSink, LineSource, OutputSink, Session, TextSink, TurnSource,
};
use relay_agents::Demo;
use relay_config::{ConfigError, OutputFormat, RelayConfig};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::BufReader;
use tracing::{info, warn};

/// Multi-agent handoff demos in the terminal
#[derive(Parser, Debug)]
#[command(name = "relay")]
#[command(about = "Multi-agent handoff demos in the terminal")]
struct Args {
    /// Demo to run: travel, career, adventure or study
    #[arg(short, long)]
    demo: Option<String>,

    /// Config file (defaults to ~/.relay/relay.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How turn reports are printed
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Read turns from a file, one per line, instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write the conversation history as JSON when the session ends
    /// (without a path, into the configured transcripts directory)
    #[arg(long, num_args = 0..=1)]
    transcript: Option<Option<PathBuf>>,

    /// Cancel a turn that takes longer than this
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Seed for the adventure dice
    #[arg(long)]
    seed: Option<u64>,

    /// List the demos and exit
    #[arg(long)]
    list: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Flags merged over the config file
#[derive(Debug, PartialEq)]
struct Settings {
    demo: Demo,
    format: OutputFormat,
    timeout: Option<Duration>,
    seed: Option<u64>,
    script: Option<PathBuf>,
    transcript: Option<PathBuf>,
}

fn resolve(args: &Args, config: &RelayConfig) -> Result<Settings> {
    let demo_name = args.demo.as_deref().unwrap_or(&config.default_demo);
    let demo = Demo::from_name(demo_name).ok_or_else(|| {
        let known: Vec<_> = Demo::all().iter().map(|d| d.name()).collect();
        anyhow!("Unknown demo '{}', expected one of: {}", demo_name, known.join(", "))
    })?;

    let timeout = match args.timeout_secs {
        Some(0) => return Err(anyhow!("--timeout-secs must be at least 1")),
        Some(secs) => Some(Duration::from_secs(secs)),
        None => config.turn_timeout(),
    };

    let transcript = args.transcript.as_ref().map(|path| match path {
        Some(path) => path.clone(),
        None => config.transcript_path(&format!(
            "{}-{}",
            demo.name(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        )),
    });

    Ok(Settings {
        demo,
        format: args.format.map(Into::into).unwrap_or(config.output),
        timeout,
        seed: args.seed.or(config.rng_seed),
        script: args.script.clone(),
        transcript,
    })
}

/// Load `--config`, or the default file when no flag was given
///
/// The default file falls back to built-in settings only when it cannot be
/// read or written; a file that exists but does not parse or validate is an
/// error either way.
fn load_config(explicit: Option<&Path>, default_path: &Path) -> Result<RelayConfig> {
    match explicit {
        Some(path) => RelayConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => match RelayConfig::load_or_init(default_path) {
            Ok(config) => Ok(config),
            Err(ConfigError::Io(e)) => {
                warn!("Using default config, {} is unavailable: {}", default_path.display(), e);
                Ok(RelayConfig::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to load config from {}", default_path.display())),
        },
    }
}

fn print_demos(out: &mut impl Write) -> std::io::Result<()> {
    for (demo, description) in Demo::list() {
        writeln!(out, "{:<10} {}", demo.name(), description)?;
        let agents: Vec<String> = demo
            .specialists()
            .iter()
            .map(|s| {
                if *s == demo.default_agent() {
                    format!("{} (default)", s.name())
                } else {
                    s.name().to_string()
                }
            })
            .collect();
        writeln!(out, "{:<10} {}", "", agents.join(", "))?;
    }
    Ok(())
}

/// Shows a prompt before each interactive read
struct Prompted<S> {
    inner: S,
}

#[async_trait]
impl<S: TurnSource> TurnSource for Prompted<S> {
    async fn next_turn(&mut self) -> relay_agent::Result<Option<String>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "🧑 You: ")?;
        stdout.flush()?;
        self.inner.next_turn().await
    }
}

async fn open_source(settings: &Settings) -> Result<Box<dyn TurnSource>> {
    match &settings.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Ok(Box::new(LineSource::new(BufReader::new(file))))
        }
        None => {
            let stdin = LineSource::new(BufReader::new(tokio::io::stdin()));
            match settings.format {
                OutputFormat::Text => Ok(Box::new(Prompted { inner: stdin })),
                OutputFormat::Json => Ok(Box::new(stdin)),
            }
        }
    }
}

fn write_transcript(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write transcript {}", path.display()))?;
    info!("Transcript written to {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for JSON lines
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list {
        print_demos(&mut std::io::stdout())?;
        return Ok(());
    }

    let default_path = relay_config::default_home().join(relay_config::CONFIG_FILE);
    let config = load_config(args.config.as_deref(), &default_path)?;
    let settings = resolve(&args, &config)?;
    info!(demo = %settings.demo, format = %settings.format, "Starting session");

    let roster = settings.demo.roster(settings.seed)?;
    let mut session = Session::new(roster);
    if let Some(limit) = settings.timeout {
        session = session.with_turn_timeout(limit);
    }

    let mut sink: Box<dyn OutputSink> = match settings.format {
        OutputFormat::Text => {
            println!(
                "🤖 Welcome to the {} demo! {}\nType 'exit' to quit.\n",
                settings.demo,
                settings.demo.description()
            );
            Box::new(TextSink::new(std::io::stdout()))
        }
        OutputFormat::Json => Box::new(JsonLinesSink::new(std::io::stdout())),
    };
    let mut source = open_source(&settings).await?;

    session.run(source.as_mut(), sink.as_mut()).await?;

    if let Some(path) = &settings.transcript {
        write_transcript(path, &session.history().to_json()?)?;
    }

    Ok(())
}
