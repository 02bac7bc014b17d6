use std::io;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use mini_adventure::{GameState, banner, default_world, load_world_from_file, run_session};

#[derive(Parser, Debug)]
#[command(name = "mini_adventure", about = "A tiny room-to-room text adventure")]
struct Args {
    /// TOML world file; the bundled two-room world is used when omitted.
    world: Option<PathBuf>,

    /// Diagnostics filter (RUST_LOG takes precedence).
    #[arg(long, default_value = "warn")]
    log: String,

    /// Skip the startup banner.
    #[arg(long)]
    no_banner: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log);

    let world = match &args.world {
        Some(path) => load_world_from_file(path)
            .with_context(|| format!("failed to load world file '{}'", path.display()))?,
        None => default_world().context("bundled world is broken")?,
    };

    if !args.no_banner {
        println!("{}", banner(&world));
    }

    let mut state = GameState::new(world);
    if !state.initialize() {
        bail!("start_room '{}' not found", state.world.start_room);
    }

    let stdin = io::stdin();
    run_session(&mut state, stdin.lock(), io::stdout().lock())?;

    Ok(())
}

fn init_tracing(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
