//! Search URL construction.
//!
//! A pure mapping from a preferences snapshot to the GET URL for one fetch.
//! Display toggles that are off are sent as the literal `false` field
//! selector, which suppresses the field in the response, rather than being
//! omitted from the request.

use chrono::NaiveDate;
use url::Url;

use crate::config::Config;

/// Fixed search endpoint of the Guardian content API.
pub const SEARCH_ENDPOINT: &str = "https://content.guardianapis.com/search";

/// Stories requested per fetch.
const PAGE_SIZE: &str = "100";

/// The endpoint as a parsed URL, used as the connectivity probe target.
pub fn endpoint() -> Url {
    Url::parse(SEARCH_ENDPOINT).expect("endpoint is a valid URL")
}

/// Build the search URL for one fetch.
///
/// `today` substitutes for an empty from-date preference. The keyword is
/// passed through with standard query encoding and no validation; this
/// operation cannot fail.
pub fn build_search_url(config: &Config, today: NaiveDate) -> Url {
    let prefs = &config.search;

    let from_date = if prefs.from_date.is_empty() {
        today.format("%Y-%m-%d").to_string()
    } else {
        prefs.from_date.clone()
    };

    let thumbnail = if prefs.show_images {
        "thumbnail"
    } else {
        "false"
    };
    let contributor = if prefs.show_author {
        "contributor"
    } else {
        "false"
    };

    let mut url = endpoint();
    url.query_pairs_mut()
        .append_pair("q", &prefs.keyword)
        .append_pair("from-date", &from_date)
        .append_pair("page-size", PAGE_SIZE)
        .append_pair("show-tags", contributor)
        .append_pair(
            "show-fields",
            &format!("trailText,headline,{},shortUrl", thumbnail),
        )
        .append_pair("api-key", &config.api.key);

    url
}
