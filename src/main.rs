use std::io;
use stickman_jump::frame_loop;
use stickman_jump::terminal::{restore_terminal, TerminalFrontend};
use stickman_jump::{Session, TARGET_FPS};
use tracing::Level;

/// Warnings and errors only, written to stderr.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    std::panic::set_hook(Box::new(|info| {
        restore_terminal();
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> io::Result<()> {
    init_tracing();

    let mut frontend = TerminalFrontend::start().map_err(|e| {
        tracing::error!(error = %e, "failed to initialize terminal");
        e
    })?;

    let mut session = Session::new();
    let result = frame_loop::run(&mut session, &mut frontend, TARGET_FPS);

    // Leave the alternate screen before anything is printed
    drop(frontend);

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!(error = %e, score = session.score, "game loop failed");
            Err(e)
        }
    }
}
