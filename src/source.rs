//! Loading match files from disk or over HTTP

use crate::error::{Result, StatsError};
use std::time::Duration;
use url::Url;

/// The location as an http(s) URL, if it is one
pub fn remote_url(location: &str) -> Option<Url> {
    let url = Url::parse(location).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Read the text at `location`: fetched when it is an http(s) URL, read from
/// disk otherwise. Only the one location is tried.
pub fn load(location: &str) -> Result<String> {
    match remote_url(location) {
        Some(url) => fetch(&url),
        None => Ok(std::fs::read_to_string(location)?),
    }
}

/// Fetch a URL as text
pub fn fetch(url: &Url) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("tifoso-stats/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| StatsError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

    log::info!("Fetching {}", url);
    let response = client
        .get(url.as_str())
        .send()
        .map_err(|e| StatsError::Fetch(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(StatsError::Fetch(format!(
            "HTTP error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    response
        .text()
        .map_err(|e| StatsError::Fetch(format!("Failed to read response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_url_detection() {
        assert!(remote_url("https://example.com/dataset.csv").is_some());
        assert!(remote_url("http://localhost:8000/assets/dataset/dataset.csv").is_some());
        assert!(remote_url("assets/dataset/dataset.csv").is_none());
        assert!(remote_url("/tmp/dataset.csv").is_none());
        assert!(remote_url("file:///tmp/dataset.csv").is_none());
        assert!(remote_url("C:\\data\\dataset.csv").is_none());
    }

    #[test]
    fn test_load_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        std::fs::write(&path, "Date;HomeTeam\n").unwrap();
        let text = load(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "Date;HomeTeam\n");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        assert!(matches!(load(path.to_str().unwrap()), Err(StatsError::Io(_))));
    }

    #[test]
    #[ignore] // Requires network access
    fn test_fetch_remote() {
        let url = Url::parse("https://www.football-data.co.uk/mmz4281/2425/I1.csv").unwrap();
        let text = fetch(&url).unwrap();
        assert!(text.starts_with("Div"));
    }
}
