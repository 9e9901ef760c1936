//! The one asynchronous load per screen instance.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use url::Url;

use crate::domain::Story;
use crate::fetcher::Fetcher;
use crate::response;

/// A cancellable, in-flight story fetch.
///
/// The fetch body runs on a spawned task; the result is delivered over a
/// oneshot channel polled from the UI loop. Dropping the loader aborts the
/// task, so a torn-down screen can never receive a late result.
pub struct StoryLoader {
    handle: JoinHandle<()>,
    rx: oneshot::Receiver<Vec<Story>>,
}

impl StoryLoader {
    /// Spawn the fetch-and-parse task for `url`.
    pub fn spawn(fetcher: Arc<dyn Fetcher + Send + Sync>, url: Url) -> Self {
        let (tx, rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            let stories = load_stories(fetcher.as_ref(), &url).await;
            // The receiver may already be gone if the screen was torn down.
            let _ = tx.send(stories);
        });

        Self { handle, rx }
    }

    /// Poll for the completed result without blocking.
    pub fn try_recv(&mut self) -> Option<Vec<Story>> {
        self.rx.try_recv().ok()
    }
}

impl Drop for StoryLoader {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Fetch and parse stories, swallowing every failure into an empty list.
///
/// The caller cannot distinguish an error from zero results; failures are
/// logged for diagnostics only.
pub async fn load_stories(fetcher: &(dyn Fetcher + Send + Sync), url: &Url) -> Vec<Story> {
    let body = match fetcher.fetch(url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Story fetch failed: {}", e);
            return Vec::new();
        }
    };

    match response::parse_stories(&body) {
        Ok(stories) => {
            tracing::debug!("Fetched {} stories", stories.len());
            stories
        }
        Err(e) => {
            tracing::warn!("Story response unreadable: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::BroadsheetError;
    use async_trait::async_trait;

    const OK_BODY: &str = r#"{
  "response": {
    "status": "ok",
    "results": [
      { "webTitle": "First", "webUrl": "https://example.com/first" },
      { "webTitle": "Second", "webUrl": "https://example.com/second" }
    ]
  }
}"#;

    struct StaticFetcher {
        body: Option<Vec<u8>>,
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, _url: &Url) -> crate::app::Result<Vec<u8>> {
            match &self.body {
                Some(body) => Ok(body.clone()),
                None => Err(BroadsheetError::Api("request failed".to_string())),
            }
        }

        async fn is_reachable(&self, _url: &Url) -> bool {
            self.body.is_some()
        }
    }

    fn search_url() -> Url {
        Url::parse("https://content.guardianapis.com/search?q=news").unwrap()
    }

    #[test]
    fn test_load_parses_stories() {
        let fetcher = StaticFetcher {
            body: Some(OK_BODY.as_bytes().to_vec()),
        };

        let stories = tokio_test::block_on(load_stories(&fetcher, &search_url()));

        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].headline, "First");
    }

    #[test]
    fn test_fetch_error_swallowed_into_empty_list() {
        let fetcher = StaticFetcher { body: None };

        let stories = tokio_test::block_on(load_stories(&fetcher, &search_url()));

        assert!(stories.is_empty());
    }

    #[test]
    fn test_unparseable_body_swallowed_into_empty_list() {
        let fetcher = StaticFetcher {
            body: Some(b"<html>not json</html>".to_vec()),
        };

        let stories = tokio_test::block_on(load_stories(&fetcher, &search_url()));

        assert!(stories.is_empty());
    }

    #[test]
    fn test_error_envelope_swallowed_into_empty_list() {
        let fetcher = StaticFetcher {
            body: Some(br#"{ "response": { "status": "error", "results": [] } }"#.to_vec()),
        };

        let stories = tokio_test::block_on(load_stories(&fetcher, &search_url()));

        assert!(stories.is_empty());
    }

    #[tokio::test]
    async fn test_loader_delivers_result() {
        let fetcher = Arc::new(StaticFetcher {
            body: Some(OK_BODY.as_bytes().to_vec()),
        });

        let mut loader = StoryLoader::spawn(fetcher, search_url());

        let mut delivered = None;
        for _ in 0..50 {
            if let Some(stories) = loader.try_recv() {
                delivered = Some(stories);
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        let stories = delivered.expect("loader should deliver within the wait window");
        assert_eq!(stories.len(), 2);
    }

    #[tokio::test]
    async fn test_dropped_loader_aborts_without_delivering() {
        let fetcher = Arc::new(StaticFetcher {
            body: Some(OK_BODY.as_bytes().to_vec()),
        });

        let loader = StoryLoader::spawn(fetcher, search_url());
        drop(loader);
        // Nothing to assert beyond "no panic": the receiver died with the
        // loader, so a late send has nowhere to land.
    }
}
