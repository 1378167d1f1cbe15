//! Wallhaven search API client.
//!
//! Two operations: search for wallpapers matching a query, and download one
//! result to disk.  Requests are blocking — the changer runs once per
//! invocation and has nothing else to do while waiting.
//!
//! Downloads stream into a `<name>.part` sibling and are renamed into place
//! only on success, so a failed transfer never leaves a truncated file under
//! the final name.

use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Search endpoint base.
const API_BASE: &str = "https://wallhaven.cc/api/v1";

/// Fixed filter parameters: SFW purity, photo-ish categories, random order.
const PURITY: &str = "100";
const CATEGORIES: &str = "110";
const SORTING: &str = "random";

/// Errors from the search-and-download pipeline.
///
/// All variants are fatal for the current run; there are no retries.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The search request failed or returned undecodable JSON.
    #[error("wallhaven search failed: {0}")]
    Search(#[source] reqwest::Error),

    /// The search succeeded but matched nothing.
    #[error("no wallpapers found for query {query:?}")]
    NoResults { query: String },

    /// The image transfer itself failed.
    #[error("download of {url} failed: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Writing or renaming the downloaded file failed.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One search result.  The API exposes many more fields; only the direct
/// image URL matters here.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    #[serde(rename = "path")]
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Vec<SearchHit>,
}

/// Blocking Wallhaven client.
pub struct WallhavenClient {
    http: reqwest::blocking::Client,
    base: String,
}

impl Default for WallhavenClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WallhavenClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base: API_BASE.to_string(),
        }
    }

    /// Search for wallpapers matching `query`.
    ///
    /// The query is passed through as the `q` parameter (URL escaping is the
    /// client's job) together with the fixed purity/category/sorting filters.
    /// An empty result list is reported as [`FetchError::NoResults`].
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>, FetchError> {
        debug!("searching wallhaven for {:?}", query);
        let response: SearchResponse = self
            .http
            .get(format!("{}/search", self.base))
            .query(&[
                ("q", query),
                ("purity", PURITY),
                ("categories", CATEGORIES),
                ("sorting", SORTING),
            ])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(FetchError::Search)?
            .json()
            .map_err(FetchError::Search)?;

        non_empty(response.data, query)
    }

    /// Download `url` to `dest`, streaming through a `.part` sibling.
    pub fn download(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        info!("downloading {}", url);
        let mut response = self
            .http
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|source| FetchError::Download {
                url: url.to_string(),
                source,
            })?;

        let part = partial_path(dest);
        let result = (|| {
            let mut file = fs::File::create(&part).map_err(|source| FetchError::Io {
                path: part.clone(),
                source,
            })?;
            response
                .copy_to(&mut file)
                .map_err(|source| FetchError::Download {
                    url: url.to_string(),
                    source,
                })?;
            fs::rename(&part, dest).map_err(|source| FetchError::Io {
                path: dest.to_path_buf(),
                source,
            })
        })();

        if result.is_err() {
            let _ = fs::remove_file(&part);
        }
        result
    }
}

/// An empty result list is reported as [`FetchError::NoResults`].
fn non_empty(hits: Vec<SearchHit>, query: &str) -> Result<Vec<SearchHit>, FetchError> {
    if hits.is_empty() {
        return Err(FetchError::NoResults {
            query: query.to_string(),
        });
    }
    Ok(hits)
}

/// Derive the local filename for a download: the sanitized topic label
/// (lowercase, spaces → hyphens) joined to the remote file's base name.
pub fn local_filename(label: &str, url: &str) -> String {
    let sanitized = label.to_lowercase().replace(' ', "-");
    let base = url
        .rsplit('/')
        .find(|part| !part.is_empty())
        .unwrap_or("wallpaper");
    format!("{}-{}", sanitized, base)
}

/// The in-flight sibling a download streams into.
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_data_array() {
        let json = r#"{
            "data": [
                { "path": "https://w.wallhaven.cc/full/x8/wallhaven-x8ggod.jpg", "id": "x8ggod" },
                { "path": "https://w.wallhaven.cc/full/we/wallhaven-wejje7.png" }
            ],
            "meta": { "total": 2 }
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 2);
        assert_eq!(
            resp.data[0].url,
            "https://w.wallhaven.cc/full/x8/wallhaven-x8ggod.jpg"
        );
    }

    #[test]
    fn empty_data_is_a_no_results_error() {
        let resp: SearchResponse = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
        let err = non_empty(resp.data, "id:42").unwrap_err();
        assert!(matches!(err, FetchError::NoResults { query } if query == "id:42"));
    }

    #[test]
    fn non_empty_passes_hits_through() {
        let hits = vec![SearchHit {
            url: "https://w.wallhaven.cc/full/x8/wallhaven-x8ggod.jpg".into(),
        }];
        assert_eq!(non_empty(hits.clone(), "cats").unwrap(), hits);
    }

    #[test]
    fn filename_joins_sanitized_label_and_base_name() {
        let name = local_filename(
            "Foo Bar",
            "https://w.wallhaven.cc/full/x8/wallhaven-x8ggod.jpg",
        );
        assert_eq!(name, "foo-bar-wallhaven-x8ggod.jpg");
    }

    #[test]
    fn filename_without_url_path_gets_fallback_base() {
        assert_eq!(local_filename("lofi", ""), "lofi-wallpaper");
        assert_eq!(local_filename("lofi", "https://host/"), "lofi-host");
    }

    #[test]
    fn partial_path_appends_part_suffix() {
        let p = partial_path(Path::new("/walls/lofi-x8ggod.jpg"));
        assert_eq!(p, Path::new("/walls/lofi-x8ggod.jpg.part"));
    }
}
