use gladiator_arena::{run_arena, ArenaState};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Diagnostics go to stderr; the arena itself owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut state = ArenaState::default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_arena(
        &mut state,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut rand::thread_rng(),
    )
}
