use std::time::Duration;

use blockfall_engine::PieceSeed;
use tui_runtime::Runtime;

use self::app::PlayApp;

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Gravity interval in milliseconds
    #[clap(long, default_value_t = 1000)]
    tick_ms: u64,
    /// Piece sequence seed (32 hex characters); random when omitted
    #[clap(long)]
    seed: Option<PieceSeed>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { tick_ms, seed } = arg;

    let mut app = PlayApp::new(Duration::from_millis(*tick_ms), *seed);
    Runtime::new().run(&mut app)?;

    Ok(())
}
