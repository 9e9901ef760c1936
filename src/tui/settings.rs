//! The settings overlay.
//!
//! Edits the working preference copy held by [`TuiApp`] and persists each
//! committed change immediately. A fetch already in flight keeps the values
//! it started with; the next fetch reads the new ones.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{AppContext, Result};
use crate::config::SearchPrefs;
use crate::tui::app::TuiApp;

/// The four adjustable preferences, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Keyword,
    FromDate,
    ShowImages,
    ShowAuthor,
}

pub const FIELDS: [SettingsField; 4] = [
    SettingsField::Keyword,
    SettingsField::FromDate,
    SettingsField::ShowImages,
    SettingsField::ShowAuthor,
];

impl SettingsField {
    pub fn label(self) -> &'static str {
        match self {
            SettingsField::Keyword => "Search keyword",
            SettingsField::FromDate => "From date",
            SettingsField::ShowImages => "Load thumbnails",
            SettingsField::ShowAuthor => "Show author names",
        }
    }

    /// Summary string shown next to the field, reflecting its live value.
    pub fn summary(self, prefs: &SearchPrefs) -> String {
        match self {
            SettingsField::Keyword => prefs.keyword.clone(),
            SettingsField::FromDate => {
                if prefs.from_date.is_empty() {
                    "(today)".to_string()
                } else {
                    prefs.from_date.clone()
                }
            }
            SettingsField::ShowImages => toggle_summary(prefs.show_images),
            SettingsField::ShowAuthor => toggle_summary(prefs.show_author),
        }
    }

    /// Transient notice shown when a boolean preference changes.
    pub fn toggle_notice(self, enabled: bool) -> &'static str {
        match (self, enabled) {
            (SettingsField::ShowImages, true) => "Thumbnails will be shown",
            (SettingsField::ShowImages, false) => "Thumbnails will be hidden",
            (SettingsField::ShowAuthor, true) => "Author names will be shown",
            (SettingsField::ShowAuthor, false) => "Author names will be hidden",
            _ => "",
        }
    }
}

fn toggle_summary(enabled: bool) -> String {
    if enabled { "shown" } else { "hidden" }.to_string()
}

/// State of the open settings overlay.
pub struct SettingsPane {
    pub selected: usize,
    /// Buffer for the text field being edited, if any.
    pub editing: Option<String>,
}

impl SettingsPane {
    pub fn new() -> Self {
        Self {
            selected: 0,
            editing: None,
        }
    }

    pub fn field(&self) -> SettingsField {
        FIELDS[self.selected]
    }
}

impl Default for SettingsPane {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle one key while the settings overlay is open.
pub fn handle_key(tui_app: &mut TuiApp, ctx: &AppContext, key: KeyEvent) -> Result<()> {
    let TuiApp {
        settings,
        prefs,
        status_message,
        ..
    } = tui_app;

    let pane = match settings.as_mut() {
        Some(pane) => pane,
        None => return Ok(()),
    };

    // Text editing is modal: keys go into the buffer until Enter or Esc.
    if pane.editing.is_some() {
        match key.code {
            KeyCode::Enter => {
                if let Some(value) = pane.editing.take() {
                    match pane.field() {
                        SettingsField::Keyword => prefs.keyword = value,
                        SettingsField::FromDate => prefs.from_date = value,
                        _ => {}
                    }
                    persist(ctx, prefs)?;
                }
            }
            KeyCode::Esc => {
                pane.editing = None;
            }
            KeyCode::Backspace => {
                if let Some(buffer) = pane.editing.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = pane.editing.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            pane.selected = pane.selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if pane.selected + 1 < FIELDS.len() {
                pane.selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => match pane.field() {
            SettingsField::Keyword => {
                pane.editing = Some(prefs.keyword.clone());
            }
            SettingsField::FromDate => {
                pane.editing = Some(prefs.from_date.clone());
            }
            SettingsField::ShowImages => {
                prefs.show_images = !prefs.show_images;
                persist(ctx, prefs)?;
                *status_message = Some(
                    SettingsField::ShowImages
                        .toggle_notice(prefs.show_images)
                        .to_string(),
                );
            }
            SettingsField::ShowAuthor => {
                prefs.show_author = !prefs.show_author;
                persist(ctx, prefs)?;
                *status_message = Some(
                    SettingsField::ShowAuthor
                        .toggle_notice(prefs.show_author)
                        .to_string(),
                );
            }
        },
        KeyCode::Esc => {
            persist(ctx, prefs)?;
            *settings = None;
        }
        _ => {}
    }

    Ok(())
}

/// Write the edited preferences back through the store, keeping the API
/// section from disk.
fn persist(ctx: &AppContext, prefs: &SearchPrefs) -> Result<()> {
    let mut config = ctx.config()?;
    config.search = prefs.clone();
    ctx.save_config(&config)
}
