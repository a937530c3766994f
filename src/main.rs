use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use dealerdash::app::App;
use dealerdash::config;
use dealerdash::notification::NotificationSpec;
use dealerdash::stats::DashboardStats;

/// Car-dealership catalog dashboard
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Car-dealership catalog dashboard with summary cards and notifications"
)]
struct Args {
    /// Dashboard stats as JSON (camelCase keys); all zeros if omitted
    stats: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/dealerdash-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/dealerdash-debug.log")
            .expect("Failed to open /tmp/dealerdash-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== DEALERDASH DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    // Fail before touching the terminal so the error stays readable
    let stats = match &args.stats {
        Some(path) => DashboardStats::from_file(path)?,
        None => DashboardStats::default(),
    };

    let config_result = config::load_config();

    let terminal = init_terminal()?;

    let mut app = App::new(stats, config::Config::default());
    app.apply_config_result(config_result);
    if args.stats.is_some() {
        app.notifications.enqueue(
            NotificationSpec::success("Dashboard loaded").with_duration(Duration::from_millis(
                app.config.notifications.default_duration_ms,
            )),
        );
    }

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== DEALERDASH DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    // Cancel outstanding timers before the app goes away
    app.notifications.shutdown();
    Ok(())
}
