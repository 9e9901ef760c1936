pub mod app;
pub mod event;
pub mod layout;
pub mod settings;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::fetcher::StoryLoader;
use crate::query;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Link offered by the about overlay, opened with the system URI handler.
pub const ABOUT_URL: &str = "https://open-platform.theguardian.com/";

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut tui_app = TuiApp::new(ctx.config()?.search);
    let event_handler = EventHandler::new(Duration::from_millis(100));

    // Initial load: pre-flight first, fetch only when reachable
    let mut loader = start_fetch(&mut tui_app, &ctx).await?;

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app))?;

        // Deliver a completed fetch before handling input
        if let Some(active) = loader.as_mut() {
            if let Some(stories) = active.try_recv() {
                tui_app.replace_stories(stories);
                loader = None;
            }
        }

        match event_handler.next()? {
            AppEvent::Key(key) => {
                if tui_app.settings.is_some() {
                    settings::handle_key(&mut tui_app, &ctx, key)?;
                } else if tui_app.show_about {
                    handle_about_key(&mut tui_app, key);
                } else {
                    match Action::from(key) {
                        Action::Quit => {
                            tui_app.should_quit = true;
                        }
                        Action::MoveUp => {
                            tui_app.move_up();
                        }
                        Action::MoveDown => {
                            tui_app.move_down();
                        }
                        Action::NextPane => {
                            tui_app.active_pane = tui_app.active_pane.next();
                        }
                        Action::PrevPane => {
                            tui_app.active_pane = tui_app.active_pane.prev();
                        }
                        Action::Open => {
                            if let Some(story) = tui_app.selected_story() {
                                let short_url = story.short_url.clone();
                                if let Err(e) = open::that(&short_url) {
                                    tui_app.set_status(format!("Failed to open browser: {}", e));
                                }
                            }
                        }
                        Action::Refresh => {
                            // One fetch at a time per screen instance
                            if loader.is_none() {
                                loader = start_fetch(&mut tui_app, &ctx).await?;
                            }
                        }
                        Action::Settings => {
                            tui_app.open_settings();
                        }
                        Action::About => {
                            tui_app.show_about = true;
                        }
                        Action::None => {}
                    }
                }
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    // Dropping an in-flight loader aborts the fetch; nothing lands after
    // teardown.
    Ok(())
}

/// Run the pre-flight check and, when online, start a fetch from a fresh
/// preferences snapshot.
async fn start_fetch(tui_app: &mut TuiApp, ctx: &AppContext) -> Result<Option<StoryLoader>> {
    if !ctx.fetcher.is_reachable(&query::endpoint()).await {
        tui_app.set_offline();
        return Ok(None);
    }

    let config = ctx.config()?;
    let url = query::build_search_url(&config, Local::now().date_naive());

    tui_app.begin_loading();
    Ok(Some(StoryLoader::spawn(ctx.fetcher.clone(), url)))
}

fn handle_about_key(tui_app: &mut TuiApp, key: KeyEvent) {
    if let KeyCode::Char('o') | KeyCode::Enter = key.code {
        if let Err(e) = open::that(ABOUT_URL) {
            tui_app.set_status(format!("Failed to open browser: {}", e));
        }
    }
    tui_app.show_about = false;
}
