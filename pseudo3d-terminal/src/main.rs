/// Pseudo3D Terminal Demo - rotating axes over a ground grid
///
/// Usage: pseudo3d-terminal [scene-config.json]
///
/// Controls:
///   - A/D / Left/Right: Rotate about the vertical axis
///   - W/S / Up/Down: Move the viewer closer or further
///   - P: Toggle perspective
///   - G: Toggle the grid
///   - Q/ESC: Quit

use anyhow::Context;
use pseudo3d_core::SceneConfig;
use pseudo3d_terminal::TerminalApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load(&path)
            .with_context(|| format!("Failed to load scene config {}", path))?,
        None => SceneConfig::default(),
    };

    let mut app = TerminalApp::new(config).context("Failed to set up the terminal")?;
    app.run().context("Terminal renderer failed")?;

    Ok(())
}
