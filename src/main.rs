use anyhow::Result;
use draughts_protocol::TextEngine;
use tracing::info;

fn main() -> Result<()> {
    // stdout carries protocol replies; logs go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("draughts starting");
    TextEngine::new().run()?;
    Ok(())
}
