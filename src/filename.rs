//! Filesystem-safe filename derivation from URLs

use crate::error::Result;
use url::Url;

/// Fallback name used when sanitization leaves nothing behind.
pub const FALLBACK_STEM: &str = "qr-code";

/// Derive a filesystem-safe filename stem from a URL.
///
/// The host and path are concatenated and every character outside
/// `[A-Za-z0-9]` becomes a hyphen. A single leading hyphen (artifact of a
/// path starting with `/` on a host-less URL) is stripped; trailing hyphens
/// are kept. An empty result falls back to `"qr-code"`.
///
/// Parsing is full URL grammar and can fail where the upstream format
/// heuristic did not, so the error is surfaced rather than assumed away.
pub fn sanitize(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;

    let host = parsed.host_str().unwrap_or("");
    let combined = format!("{}{}", host, parsed.path());

    let mut stem: String = combined
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    if let Some(rest) = stem.strip_prefix('-') {
        stem = rest.to_string();
    }

    if stem.is_empty() {
        return Ok(FALLBACK_STEM.to_string());
    }

    Ok(stem)
}
