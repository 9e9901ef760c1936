//! # Broadsheet
//!
//! A terminal news reader for the Guardian content API.
//!
//! ## Architecture
//!
//! Broadsheet follows a small pipeline architecture:
//!
//! ```text
//! Preferences → Query Builder → Fetcher → Response Parser → UI
//! ```
//!
//! - [`config`]: TOML preference store (keyword, from-date, display toggles)
//! - [`query`]: builds the search URL from a preferences snapshot
//! - [`fetcher`]: HTTP client and the cancellable story loader
//! - [`response`]: converts the API's JSON envelope to domain models
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the reader
//! broadsheet
//!
//! # Fetch stories once and print them
//! broadsheet fetch
//!
//! # Change the search keyword
//! broadsheet config keyword brexit
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Search preference persistence
//! - [`domain`]: Core domain model ([`Story`](domain::Story))
//! - [`fetcher`]: HTTP fetching and the one-shot loader
//! - [`query`]: Search URL construction
//! - [`response`]: Search response parsing
//! - [`tui`]: Terminal user interface

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the fetcher and
/// the preference store path.
pub mod app;

/// Command-line interface using clap.
///
/// - `fetch` - Fetch stories once and print them
/// - `config` - Inspect or change search preferences
/// - `tui` - Launch the TUI (the default)
pub mod cli;

/// Search preference persistence.
///
/// Loads from `~/.config/broadsheet/config.toml`; a commented default file is
/// created on first use.
pub mod config;

/// Core domain model.
///
/// [`Story`](domain::Story): one article entry with a deterministic SHA256 id.
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for the network layer
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`StoryLoader`](fetcher::StoryLoader): cancellable one-shot load
pub mod fetcher;

/// Search URL construction from a preferences snapshot.
pub mod query;

/// Parsing of the search API's JSON envelope into [`Story`](domain::Story) records.
pub mod response;

/// Terminal user interface.
///
/// Two-pane layout built with ratatui (story list, preview) plus a settings
/// overlay and an about overlay.
///
/// Keybindings: j/k navigate, Tab cycles panes, Enter/o opens in browser,
/// R refreshes, s opens settings, a shows the about box, q quits.
pub mod tui;
