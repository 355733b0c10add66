use clap::Parser;
use tally::cli::Cli;

fn main() -> anyhow::Result<()> {
    tally::logging::init_tracing();
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // One cooperative thread for the store, the effect timers and the UI loop.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(tally::ui::runtime::run(config))
}
