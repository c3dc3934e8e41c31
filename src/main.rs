mod error;
mod models;
mod settings;
mod storage;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::error::FolioResult;
use crate::models::SnippetFeed;
use crate::storage::load_config;
use crate::ui::{Action, App, Schedule, handle_key_event, handle_mouse_event, render};

/// 滚动动画的最长重绘间隔
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// 获取应用目录路径，如 ~/.config/folio/
fn app_dir(base: Option<PathBuf>) -> io::Result<PathBuf> {
    let dir = base
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot locate user directory"))?
        .join("folio");

    fs::create_dir_all(&dir)?;

    Ok(dir)
}

/// 日志写入 ~/.local/share/folio/folio.log（标准输出归 TUI 所有）
fn init_logging() {
    let writer: Box<dyn io::Write + Send> = match app_dir(dirs::data_dir())
        .and_then(|dir| fs::File::create(dir.join("folio.log")))
    {
        Ok(file) => Box::new(file),
        Err(e) => {
            eprintln!("Failed to create log file: {e}, logging disabled");
            Box::new(io::sink())
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(writer))
        .with_ansi(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> FolioResult<()> {
    // 配置文件路径 (~/.config/folio/folio.toml)
    let config_path = app_dir(dirs::config_dir())?.join("folio.toml");

    // 内容有误时在进入终端前失败
    let config = load_config(&config_path)?;
    match &config.source {
        Some(path) => tracing::info!("content loaded from {}", path.display()),
        None => tracing::info!("using built-in content"),
    }

    let feed = SnippetFeed::new(config.content.snippets.clone())?;
    let mut app = App::new(config.content, config.settings, feed);

    // panic 时恢复终端，须在进入 raw 模式前安装
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    // 设置终端，中途失败同样恢复
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e.into());
        }
    };

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    restore_terminal()?;
    terminal.show_cursor()?;
    tracing::info!("shutdown");

    Ok(result?)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    // 启动时计算一次布局
    let size = terminal.size()?;
    app.dispatch(Action::Resize(app.settings.viewport_width_px(size.width)));

    // 计时器随循环作用域存在，返回时取消
    let mut schedule = Schedule::new(&app.settings, Instant::now());

    loop {
        terminal.draw(|f| render(f, app))?;

        let timeout = schedule
            .time_until_next(Instant::now())
            .map_or(FRAME_INTERVAL, |d| d.min(FRAME_INTERVAL));

        if event::poll(timeout)? {
            let quit = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key)?,
                Event::Mouse(mouse) => handle_mouse_event(app, mouse)?,
                Event::Resize(width, _) => {
                    app.dispatch(Action::Resize(app.settings.viewport_width_px(width)))
                }
                _ => false,
            };
            if quit {
                break;
            }
        }

        for action in schedule.due(Instant::now()) {
            app.dispatch(action);
        }
    }

    schedule.cancel();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_without_setup_is_harmless() {
        // 设置中途失败时 raw 模式可能从未开启
        assert!(restore_terminal().is_ok());
        assert!(restore_terminal().is_ok());
    }
}
