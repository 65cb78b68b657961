use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cuboid_painter::config::{self, RenderConfig};
use cuboid_painter::window::{FrameLimiter, InputState, Window};
use cuboid_painter::{Engine, Session};

#[derive(Parser)]
#[command(name = "cuboid-painter", about = "Painter's-algorithm cuboid viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Frame rate cap (0 = uncapped)
    #[arg(long, default_value_t = config::DEFAULT_FPS)]
    fps: u32,

    /// Render one frame from the start position to a PNG and exit
    #[arg(long, value_name = "PATH")]
    screenshot: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = RenderConfig::default();
    let mut session = Session::new(&config);
    let mut engine = Engine::new(&config);

    if let Some(path) = cli.screenshot {
        return screenshot(&mut engine, &session, &path);
    }

    tracing::info!(cuboids = session.cuboids().len(), "cuboid-painter starting");

    let mut window = Window::new(config::WINDOW_TITLE, config.width, config.height)
        .context("failed to open window")?;
    let mut limiter = FrameLimiter::new(&window, cli.fps);
    let mut input = InputState::default();

    loop {
        let delta_time = limiter.wait_and_get_delta(&window);

        window.poll_input(&mut input);
        if let Some(reason) = input.quit {
            tracing::info!(?reason, "shutting down");
            break;
        }
        session.apply_input(delta_time, &input.keys, &input.mouse_motions);

        engine.render_frame(&session);
        window.present(engine.frame_buffer())?;
    }

    Ok(())
}

fn screenshot(engine: &mut Engine, session: &Session, path: &Path) -> Result<()> {
    let stats = engine.render_frame(session);
    engine
        .renderer()
        .to_image()
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        drawn = stats.drawn,
        skipped = stats.skipped,
        "screenshot saved"
    );
    Ok(())
}
