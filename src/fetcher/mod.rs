pub mod http_fetcher;
pub mod loader;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;

pub use loader::StoryLoader;

#[async_trait]
pub trait Fetcher {
    /// Perform a GET and return the response body. A non-2xx status is an
    /// error.
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>>;

    /// Cheap reachability probe, run before a fetch is started at all.
    async fn is_reachable(&self, url: &Url) -> bool;
}
