//! Synchronous page fetching.
//!
//! One blocking GET per run, no retries, no caching. A failed fetch is
//! fatal for that dataset's run.

use crate::error::{Error, Result};

/// Fetch a page and return its body as text.
///
/// Non-success status codes are mapped to [`Error::Status`] rather than
/// being handed to the parser.
pub fn fetch_html(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url)?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text()?)
}
