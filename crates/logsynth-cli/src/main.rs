use clap::{Parser, Subcommand};
use logsynth_catalog::EventGenerator;
use logsynth_core::config::Config;
use logsynth_core::emitter::Emitter;
use logsynth_core::fanout::SinkFanout;
use logsynth_core::shutdown::ShutdownFlag;
use logsynth_core::traits::EventSink;
use logsynth_sinks::{ConsoleSink, JsonlSink};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "logsynth")]
#[command(about = "Synthetic structured-event generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate events continuously until interrupted.
    Run {
        /// TOML config file; defaults apply when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Durable sink target, overrides the config.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Delay between events in milliseconds.
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Stop after this many events.
        #[arg(long)]
        max_events: Option<u64>,
        /// RNG seed for deterministic output.
        #[arg(long)]
        seed: Option<u64>,
        /// Print the resolved config and exit.
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Operator messages go to stderr; stdout belongs to the console sink.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Run {
            config,
            output,
            interval_ms,
            max_events,
            seed,
            dry_run,
        } => {
            let mut loaded = match config {
                Some(path) => Config::from_path(&path)?,
                None => Config::default(),
            };

            if let Some(path) = output {
                loaded.output.path = path.to_string_lossy().to_string();
            }
            if let Some(ms) = interval_ms {
                loaded.emitter.interval_ms = ms;
            }
            if let Some(max) = max_events {
                loaded.emitter.max_events = Some(max);
            }
            if let Some(seed) = seed {
                loaded.seed = Some(seed);
            }

            if dry_run {
                println!("config loaded: {loaded:#?}");
                return Ok(());
            }

            // The durable sink must be writable before the loop starts.
            let durable = JsonlSink::open(&loaded.output.path).map_err(|err| {
                format!("cannot open durable sink {}: {err}", loaded.output.path)
            })?;
            info!(path = %loaded.output.path, "durable sink open");

            let generator = EventGenerator::new(loaded.stream.identity(), loaded.seed);
            let sinks: Vec<Box<dyn EventSink + Send>> =
                vec![Box::new(durable), Box::new(ConsoleSink::stdout())];
            let fanout = SinkFanout::new(sinks);
            let shutdown = ShutdownFlag::new();

            let signal_flag = shutdown.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    info!("interrupt received, stopping after in-flight delivery");
                    signal_flag.trigger();
                }
            });

            let interval = Duration::from_millis(loaded.emitter.interval_ms);
            let max_events = loaded.emitter.max_events;
            let mut emitter = Emitter::new(generator, fanout, interval, max_events, shutdown);
            let summary = tokio::task::spawn_blocking(move || emitter.run()).await?;

            info!(
                emitted = summary.emitted,
                delivery_failures = summary.delivery_failures,
                "emission loop stopped"
            );
            println!("log generation stopped after {} events", summary.emitted);
        }
    }

    Ok(())
}
