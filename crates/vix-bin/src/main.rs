//! vix entrypoint: CLI parsing, logging bootstrap, terminal setup, and
//! hand-off to the session loop.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use core_actions::io_ops;
use core_config::UndoBranch;
use core_state::{BranchPolicy, EditorState};
use core_terminal::{CrosstermBackend, TerminalBackend};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod render;
mod session;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "vix", version, about = "A small modal text editor")]
struct Args {
    /// File to edit. Defaults to the configured placeholder name.
    path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `vix.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
}

/// Route tracing output to `vix.log`; the terminal itself belongs to the
/// renderer. Filter via the `VIX_LOG` environment variable.
fn init_logging() -> WorkerGuard {
    let appender = tracing_appender::rolling::never(".", "vix.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env("VIX_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

/// Restore the terminal before the default panic output so the message is
/// readable instead of landing on the alternate screen in raw mode.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        default_hook(info);
    }));
}

fn branch_policy(branch: UndoBranch) -> BranchPolicy {
    match branch {
        UndoBranch::InsertShift => BranchPolicy::InsertShift,
        UndoBranch::Truncate => BranchPolicy::Truncate,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let config = core_config::load_from(args.config.as_deref())?;
    let path = args
        .path
        .unwrap_or_else(|| PathBuf::from(&config.editor.default_file_name));
    let buffer = io_ops::open_buffer(&path);
    let state = EditorState::new(buffer, path, branch_policy(config.undo.branch));

    let mut backend = CrosstermBackend::new();
    let (rows, cols) = backend.size()?;
    let guard = backend.enter_guard()?;

    let mut session = session::EditorSession::new(state, rows, cols);
    let outcome = session.run();

    drop(guard);
    info!(target: "runtime", "shutdown");
    outcome
}
