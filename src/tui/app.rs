use ratatui::widgets::ListState;

use crate::config::SearchPrefs;
use crate::domain::Story;
use crate::tui::settings::SettingsPane;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePane {
    Stories,
    Preview,
}

impl ActivePane {
    pub fn next(self) -> Self {
        match self {
            ActivePane::Stories => ActivePane::Preview,
            ActivePane::Preview => ActivePane::Stories,
        }
    }

    pub fn prev(self) -> Self {
        // Two panes, so cycling either way lands on the other one
        self.next()
    }
}

/// The two user-visible empty states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The connectivity pre-flight failed; no fetch was started.
    NoConnection,
    /// A fetch completed with nothing to show.
    NoStories,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoConnection => "No internet connection.",
            EmptyState::NoStories => "No stories found.",
        }
    }
}

pub struct TuiApp {
    pub active_pane: ActivePane,
    pub stories: Vec<Story>,
    pub story_index: usize,
    pub preview_scroll: u16,
    pub is_loading: bool,
    pub empty_state: Option<EmptyState>,
    pub status_message: Option<String>,
    /// Working copy of the preferences, edited by the settings overlay.
    pub prefs: SearchPrefs,
    /// Present while the settings overlay is open.
    pub settings: Option<SettingsPane>,
    pub show_about: bool,
    pub should_quit: bool,
    pub story_list_state: ListState,
}

impl TuiApp {
    pub fn new(prefs: SearchPrefs) -> Self {
        let mut story_list_state = ListState::default();
        story_list_state.select(Some(0));

        Self {
            active_pane: ActivePane::Stories,
            stories: Vec::new(),
            story_index: 0,
            preview_scroll: 0,
            is_loading: false,
            empty_state: None,
            status_message: None,
            prefs,
            settings: None,
            show_about: false,
            should_quit: false,
            story_list_state,
        }
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.stories.get(self.story_index)
    }

    /// Swap in the result of a completed fetch.
    ///
    /// The previous list is cleared first; a fetch never partially updates
    /// what is displayed.
    pub fn replace_stories(&mut self, stories: Vec<Story>) {
        self.stories.clear();
        self.stories.extend(stories);
        self.story_index = 0;
        self.story_list_state.select(Some(0));
        self.preview_scroll = 0;
        self.is_loading = false;
        self.empty_state = if self.stories.is_empty() {
            Some(EmptyState::NoStories)
        } else {
            None
        };
    }

    pub fn clear_stories(&mut self) {
        self.stories.clear();
        self.story_index = 0;
        self.story_list_state.select(Some(0));
        self.preview_scroll = 0;
    }

    /// Mark the screen as waiting on an in-flight fetch.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.empty_state = None;
    }

    /// Pre-flight failed: show the no-connection state without fetching.
    pub fn set_offline(&mut self) {
        self.is_loading = false;
        self.clear_stories();
        self.empty_state = Some(EmptyState::NoConnection);
    }

    pub fn move_up(&mut self) {
        match self.active_pane {
            ActivePane::Stories => {
                if self.story_index > 0 {
                    self.story_index -= 1;
                    self.story_list_state.select(Some(self.story_index));
                    self.preview_scroll = 0;
                }
            }
            ActivePane::Preview => {
                self.preview_scroll = self.preview_scroll.saturating_sub(1);
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.active_pane {
            ActivePane::Stories => {
                if !self.stories.is_empty() && self.story_index < self.stories.len() - 1 {
                    self.story_index += 1;
                    self.story_list_state.select(Some(self.story_index));
                    self.preview_scroll = 0;
                }
            }
            ActivePane::Preview => {
                self.preview_scroll = self.preview_scroll.saturating_add(1);
            }
        }
    }

    pub fn open_settings(&mut self) {
        self.clear_status();
        self.settings = Some(SettingsPane::new());
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(n: usize) -> Story {
        Story::new(format!("Headline {}", n), format!("https://gu.com/p/{}", n))
    }

    fn app() -> TuiApp {
        TuiApp::new(SearchPrefs::default())
    }

    #[test]
    fn test_replace_swaps_whole_list() {
        let mut app = app();
        app.replace_stories(vec![story(1), story(2), story(3)]);
        assert_eq!(app.stories.len(), 3);

        app.replace_stories(vec![story(4)]);
        assert_eq!(app.stories.len(), 1);
        // No residual entries from the first fetch
        assert_eq!(app.stories[0].headline, "Headline 4");
    }

    #[test]
    fn test_replace_resets_selection() {
        let mut app = app();
        app.replace_stories(vec![story(1), story(2), story(3)]);
        app.move_down();
        app.move_down();
        assert_eq!(app.story_index, 2);

        app.replace_stories(vec![story(4), story(5)]);
        assert_eq!(app.story_index, 0);
    }

    #[test]
    fn test_empty_fetch_shows_no_stories_message() {
        let mut app = app();
        app.begin_loading();
        app.replace_stories(Vec::new());

        assert!(!app.is_loading);
        assert_eq!(app.empty_state, Some(EmptyState::NoStories));
        assert_eq!(app.empty_state.unwrap().message(), "No stories found.");
    }

    #[test]
    fn test_successful_fetch_clears_empty_state() {
        let mut app = app();
        app.set_offline();
        app.begin_loading();
        app.replace_stories(vec![story(1)]);

        assert_eq!(app.empty_state, None);
    }

    #[test]
    fn test_offline_shows_no_connection_message() {
        let mut app = app();
        app.replace_stories(vec![story(1)]);
        app.set_offline();

        assert!(app.stories.is_empty());
        assert_eq!(app.empty_state, Some(EmptyState::NoConnection));
        assert_eq!(
            app.empty_state.unwrap().message(),
            "No internet connection."
        );
    }

    #[test]
    fn test_loading_clears_previous_empty_state() {
        let mut app = app();
        app.set_offline();
        app.begin_loading();

        assert!(app.is_loading);
        assert_eq!(app.empty_state, None);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app();
        app.replace_stories(vec![story(1), story(2)]);

        app.move_up();
        assert_eq!(app.story_index, 0);

        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.story_index, 1);
    }

    #[test]
    fn test_selected_story() {
        let mut app = app();
        assert!(app.selected_story().is_none());

        app.replace_stories(vec![story(1), story(2)]);
        app.move_down();
        assert_eq!(app.selected_story().unwrap().headline, "Headline 2");
    }

    #[test]
    fn test_pane_cycle() {
        assert_eq!(ActivePane::Stories.next(), ActivePane::Preview);
        assert_eq!(ActivePane::Preview.next(), ActivePane::Stories);
        assert_eq!(ActivePane::Stories.prev(), ActivePane::Preview);
    }
}
