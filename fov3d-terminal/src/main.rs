/// FOV3D - orbit a wireframe graph in the terminal
///
/// Controls:
///   - Space: Pause / resume
///   - Left/Right: Step one frame
///   - Q/ESC: Quit

use clap::Parser;
use fov3d_core::orbit::{render_frames_parallel, Orbit};
use fov3d_terminal::{dump_frames, load_graph, AppError, Cli, TerminalApp};
use std::io::{self, stdout};
use std::process::ExitCode;
use tracing::warn;

fn init_tracing() {
    // Logs go to stderr so they never mix with the picture on stdout.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    if std::env::var("FOV3D_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .with_target(true)
            .compact()
            .init();
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = cli.into_config()?;
    let graph = load_graph(&config.source)?;
    let orbit = Orbit::around(&graph, config.orbit)?;
    let frames = render_frames_parallel(&graph, &orbit);

    let blank = frames.iter().filter(|frame| frame.is_blank()).count();
    if blank == frames.len() {
        warn!(frames = frames.len(), "the graph is out of view in every frame");
    }

    if config.dump {
        dump_frames(&frames, config.width, config.height, &mut stdout().lock())?;
    } else {
        let mut app = TerminalApp::new(frames, config.fps)?;
        app.run()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
