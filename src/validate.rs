//! URL validation: format heuristic plus PHI token scan
//!
//! Both checks are deliberately coarse. The format check accepts anything
//! shaped like `http(s)://<something>.<something>` and rejects dotless hosts
//! such as `http://localhost`. The PHI scan is a case-insensitive substring
//! match over a fixed token list, so `username` trips on `name` (accepted
//! false positive) while encoded identifiers pass undetected. Tightening
//! either heuristic is a policy change, not a bug fix.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Tokens that indicate patient-identifying data in a URL.
///
/// Matched case-insensitively as substrings anywhere in the input.
pub const PHI_TOKENS: [&str; 7] = ["patient", "name", "dob", "email", "ssn", "mrn", "phone"];

static FORMAT_RE: OnceLock<Regex> = OnceLock::new();

fn format_re() -> &'static Regex {
    // Minimal scheme://host.tld shape, not full URL grammar.
    FORMAT_RE.get_or_init(|| Regex::new(r"^https?://.+\..+").expect("format regex is valid"))
}

/// A URL string that has passed both the format check and the PHI scan.
///
/// The encoder only accepts this type, so a QR surface can never be rendered
/// for unvalidated input. The wrapped string is the caller's input, unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUrl(String);

impl ValidUrl {
    /// The validated URL string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ValidUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate a raw URL string.
///
/// Runs the format heuristic first, then the PHI scan, mirroring the order
/// the errors are surfaced to the user. Returns the unmodified input wrapped
/// in [`ValidUrl`] when both pass.
pub fn validate(raw: &str) -> Result<ValidUrl> {
    if !format_re().is_match(raw) {
        return Err(Error::InvalidFormat);
    }

    if let Some(token) = find_phi_token(raw) {
        return Err(Error::PhiDetected(token.to_string()));
    }

    Ok(ValidUrl(raw.to_string()))
}

/// Scan for the first blocked PHI token contained in `raw`, case-insensitively.
pub fn find_phi_token(raw: &str) -> Option<&'static str> {
    let lowered = raw.to_ascii_lowercase();
    PHI_TOKENS
        .iter()
        .copied()
        .find(|token| lowered.contains(token))
}
