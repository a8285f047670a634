//! URL fetch entry point (feature `fetch`).
//!
//! One HTTP GET per extraction; the only suspension point in the crate.
//! Transport errors never panic the pipeline, they surface as typed errors
//! at this boundary.

use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Fetch a URL and return its body as UTF-8 HTML.
///
/// The URL must parse and use an http(s) scheme (`InvalidUrl`); the body
/// must be valid UTF-8 (`DecodingFailed`). Transport failures map to
/// `Unknown`.
pub(crate) async fn fetch_utf8(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|_| Error::InvalidUrl(url.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::InvalidUrl(url.to_string()));
    }

    debug!(%parsed, "fetching document");
    let response = reqwest::get(parsed)
        .await
        .map_err(|err| Error::Unknown(err.to_string()))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|err| Error::Unknown(err.to_string()))?;

    match std::str::from_utf8(&bytes) {
        Ok(body) => Ok(body.to_owned()),
        Err(_) => Err(Error::DecodingFailed),
    }
}
