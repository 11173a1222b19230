use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::Event;
use glide::config::InteractionConfig;
use glide::core::{Clock, MonotonicClock};
use glide::tui::app::DemoApp;
use glide::tui::render::render;
use glide::tui::terminal_guard::TerminalGuard;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::Instant;

const IDLE_WAIT: Duration = Duration::from_secs(3600);

fn main() -> io::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("glide.json"));

    let _logging = glide::logging::init(None);
    let config = InteractionConfig::load_or_default(&config_path);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(run(config))
}

async fn run(config: InteractionConfig) -> io::Result<()> {
    let clock = MonotonicClock::new();
    let origin = Instant::now();

    let mut app = DemoApp::new(&config, clock.now_ms())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let mut guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let size = terminal.size()?;
    app.set_viewport(size.width, size.height);

    let mut events = spawn_input_reader();
    loop {
        terminal.draw(|frame| render(&app, frame))?;

        let now = clock.now_ms();
        let wake_at = app
            .next_deadline(now)
            .map(|ms| origin + Duration::from_millis(ms))
            .unwrap_or_else(|| Instant::now() + IDLE_WAIT);

        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    break;
                };
                let event = event?;
                if app.handle_event(&event, clock.now_ms()).is_quit() {
                    break;
                }
            }
            _ = tokio::time::sleep_until(wake_at) => {}
        }
        app.poll(clock.now_ms());
    }

    app.shutdown();
    drop(terminal);
    guard.restore()?;
    tracing::info!("demo exited");
    Ok(())
}

/// crossterm's reader blocks, so it gets its own thread and feeds the loop
/// through a channel.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<io::Result<Event>> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || loop {
        let event = crossterm::event::read();
        let failed = event.is_err();
        if tx.send(event).is_err() || failed {
            break;
        }
    });
    rx
}
