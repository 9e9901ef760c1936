//! Search response parsing.
//!
//! Converts the API's JSON envelope (`response.status`, `response.results`)
//! into [`Story`] records, decoding HTML entities in the text fields.

use chrono::{DateTime, Utc};
use html_escape::decode_html_entities;
use serde::Deserialize;

use crate::app::{BroadsheetError, Result};
use crate::domain::Story;

#[derive(Debug, Deserialize)]
struct Envelope {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    web_title: String,
    web_url: String,
    web_publication_date: Option<DateTime<Utc>>,
    fields: Option<ResultFields>,
    #[serde(default)]
    tags: Vec<ResultTag>,
}

/// Optional per-story fields; which ones the API returns is controlled by
/// the request's `show-fields` selector.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultFields {
    headline: Option<String>,
    trail_text: Option<String>,
    thumbnail: Option<String>,
    short_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResultTag {
    #[serde(rename = "type")]
    tag_type: String,
    #[serde(rename = "webTitle")]
    web_title: String,
}

/// Parse a search response body into stories, preserving the API's order.
pub fn parse_stories(body: &[u8]) -> Result<Vec<Story>> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    if envelope.response.status != "ok" {
        return Err(BroadsheetError::Api(format!(
            "search returned status {:?}",
            envelope.response.status
        )));
    }

    Ok(envelope
        .response
        .results
        .into_iter()
        .map(story_from_result)
        .collect())
}

fn story_from_result(result: SearchResult) -> Story {
    let fields = result.fields.unwrap_or_default();

    let headline = fields
        .headline
        .map(|h| decode_html_entities(&h).to_string())
        .unwrap_or(result.web_title);
    let short_url = fields.short_url.unwrap_or(result.web_url);

    let mut story = Story::new(headline, short_url);
    story.trail_text = fields
        .trail_text
        .map(|t| decode_html_entities(&t).to_string());
    story.thumbnail = fields.thumbnail;
    story.author = result
        .tags
        .into_iter()
        .find(|t| t.tag_type == "contributor")
        .map(|t| t.web_title);
    story.published_at = result.web_publication_date;
    story
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SEARCH_SAMPLE: &str = r#"{
  "response": {
    "status": "ok",
    "total": 2,
    "results": [
      {
        "id": "politics/2026/aug/01/budget",
        "type": "article",
        "sectionName": "Politics",
        "webPublicationDate": "2026-08-01T10:30:00Z",
        "webTitle": "Budget shake-up announced",
        "webUrl": "https://www.theguardian.com/politics/2026/aug/01/budget",
        "fields": {
          "headline": "Budget shake-up &amp; what it means",
          "trailText": "A <strong>closer</strong> look at the numbers",
          "thumbnail": "https://media.guim.co.uk/budget/500.jpg",
          "shortUrl": "https://gu.com/p/abc12"
        },
        "tags": [
          {
            "id": "profile/jane-doe",
            "type": "contributor",
            "webTitle": "Jane Doe"
          }
        ]
      },
      {
        "id": "world/2026/aug/02/summit",
        "type": "article",
        "sectionName": "World news",
        "webTitle": "Summit ends without agreement",
        "webUrl": "https://www.theguardian.com/world/2026/aug/02/summit",
        "tags": []
      }
    ]
  }
}"#;

    #[test]
    fn test_parse_full_result() {
        let stories = parse_stories(SEARCH_SAMPLE.as_bytes()).unwrap();
        assert_eq!(stories.len(), 2);

        let story = &stories[0];
        assert_eq!(story.headline, "Budget shake-up & what it means");
        assert_eq!(
            story.trail_text.as_deref(),
            Some("A <strong>closer</strong> look at the numbers")
        );
        assert_eq!(
            story.thumbnail.as_deref(),
            Some("https://media.guim.co.uk/budget/500.jpg")
        );
        assert_eq!(story.author.as_deref(), Some("Jane Doe"));
        assert_eq!(story.short_url, "https://gu.com/p/abc12");
        assert_eq!(
            story.published_at,
            Some(Utc.with_ymd_and_hms(2026, 8, 1, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_result_without_fields_falls_back() {
        let stories = parse_stories(SEARCH_SAMPLE.as_bytes()).unwrap();

        let story = &stories[1];
        assert_eq!(story.headline, "Summit ends without agreement");
        assert_eq!(
            story.short_url,
            "https://www.theguardian.com/world/2026/aug/02/summit"
        );
        assert_eq!(story.trail_text, None);
        assert_eq!(story.thumbnail, None);
        assert_eq!(story.author, None);
        assert_eq!(story.published_at, None);
    }

    #[test]
    fn test_non_contributor_tags_are_ignored() {
        let body = r#"{
  "response": {
    "status": "ok",
    "results": [
      {
        "webTitle": "Title",
        "webUrl": "https://example.com/a",
        "tags": [
          { "id": "tone/news", "type": "tone", "webTitle": "News" }
        ]
      }
    ]
  }
}"#;
        let stories = parse_stories(body.as_bytes()).unwrap();
        assert_eq!(stories[0].author, None);
    }

    #[test]
    fn test_empty_results() {
        let body = r#"{ "response": { "status": "ok", "results": [] } }"#;
        let stories = parse_stories(body.as_bytes()).unwrap();
        assert!(stories.is_empty());
    }

    #[test]
    fn test_error_status_is_an_error() {
        let body = r#"{ "response": { "status": "error", "results": [] } }"#;
        let result = parse_stories(body.as_bytes());
        assert!(matches!(result, Err(BroadsheetError::Api(_))));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = parse_stories(b"not json");
        assert!(matches!(result, Err(BroadsheetError::Json(_))));
    }

    #[test]
    fn test_story_ids_are_stable_across_parses() {
        let first = parse_stories(SEARCH_SAMPLE.as_bytes()).unwrap();
        let second = parse_stories(SEARCH_SAMPLE.as_bytes()).unwrap();
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[1].id, second[1].id);
    }
}
