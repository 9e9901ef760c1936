use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One article entry as returned by the news API.
///
/// Stories are immutable once parsed; every completed fetch replaces the
/// whole displayed list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub headline: String,
    pub trail_text: Option<String>,
    pub thumbnail: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub short_url: String,
}

impl Story {
    pub fn new(headline: String, short_url: String) -> Self {
        let id = Self::generate_id(&short_url);
        Self {
            id,
            headline,
            trail_text: None,
            thumbnail: None,
            author: None,
            published_at: None,
            short_url,
        }
    }

    /// Generate a deterministic ID from the story's short URL
    pub fn generate_id(short_url: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(short_url.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Trail text for display; no summary collapses to the empty string.
    pub fn display_trail(&self) -> &str {
        self.trail_text.as_deref().unwrap_or("")
    }

    pub fn date_line(&self) -> String {
        self.published_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_generation_deterministic() {
        let id1 = Story::generate_id("https://gu.com/p/abc12");
        let id2 = Story::generate_id("https://gu.com/p/abc12");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_id_generation_different_inputs() {
        let id1 = Story::generate_id("https://gu.com/p/abc12");
        let id2 = Story::generate_id("https://gu.com/p/xyz99");
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_id_is_hex_sha256() {
        let id = Story::generate_id("https://gu.com/p/abc12");
        assert_eq!(id.len(), 64); // SHA256 produces 32 bytes = 64 hex chars
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_display_trail_with_text() {
        let mut story = Story::new("Headline".into(), "https://gu.com/p/abc12".into());
        story.trail_text = Some("A short summary".into());
        assert_eq!(story.display_trail(), "A short summary");
    }

    #[test]
    fn test_display_trail_empty_when_missing() {
        let story = Story::new("Headline".into(), "https://gu.com/p/abc12".into());
        assert_eq!(story.display_trail(), "");
    }

    #[test]
    fn test_date_line_formats_date() {
        let mut story = Story::new("Headline".into(), "https://gu.com/p/abc12".into());
        story.published_at = Some(Utc.with_ymd_and_hms(2026, 8, 1, 10, 30, 0).unwrap());
        assert_eq!(story.date_line(), "2026-08-01");
    }

    #[test]
    fn test_date_line_pads_when_missing() {
        let story = Story::new("Headline".into(), "https://gu.com/p/abc12".into());
        assert_eq!(story.date_line(), "          ");
    }
}
