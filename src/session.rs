//! Interaction state machine for a single QR request
//!
//! Models the form lifecycle: input is mutable until submission, a surface is
//! only rendered for input that passed validation, and any edit or explicit
//! reset discards the frozen URL and returns to `Idle`.

use crate::error::Error;
use crate::validate::{self, ValidUrl};

/// Outcome state of the current QR request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No input, or input not yet submitted
    Idle,
    /// Last submission failed the URL format check
    Invalid,
    /// Last submission was blocked by the PHI scan
    PhiFlagged,
    /// Last submission validated; a surface may be rendered for it
    Displayed,
}

/// A single in-flight QR request
///
/// `raw_url` is mutable until submission. On a successful submit the input is
/// frozen into `rendered`, which stays fixed until the input is edited or the
/// request is reset.
#[derive(Debug)]
pub struct QrRequest {
    raw_url: String,
    rendered: Option<ValidUrl>,
    state: SessionState,
    last_error: Option<String>,
}

impl QrRequest {
    /// Create an empty request in the `Idle` state.
    pub fn new() -> Self {
        Self {
            raw_url: String::new(),
            rendered: None,
            state: SessionState::Idle,
            last_error: None,
        }
    }

    /// Replace the raw input.
    ///
    /// Any edit invalidates a currently displayed surface and returns the
    /// request to `Idle`.
    pub fn edit(&mut self, input: &str) {
        self.raw_url = input.to_string();
        self.rendered = None;
        self.last_error = None;
        self.state = SessionState::Idle;
    }

    /// Submit the current input for validation.
    ///
    /// Empty input stays `Idle`. Otherwise the request moves to `Invalid`,
    /// `PhiFlagged`, or `Displayed`; on `Displayed` the input is frozen into
    /// the rendered URL. Returns the resulting state.
    pub fn submit(&mut self) -> SessionState {
        self.rendered = None;
        self.last_error = None;

        if self.raw_url.is_empty() {
            self.state = SessionState::Idle;
            return self.state;
        }

        match validate::validate(&self.raw_url) {
            Ok(valid) => {
                self.rendered = Some(valid);
                self.state = SessionState::Displayed;
            }
            Err(err @ Error::InvalidFormat) => {
                self.last_error = Some(err.to_string());
                self.state = SessionState::Invalid;
            }
            Err(err @ Error::PhiDetected(_)) => {
                self.last_error = Some(err.to_string());
                self.state = SessionState::PhiFlagged;
            }
            Err(err) => {
                // validate() only produces the two variants above; treat
                // anything else as a format failure.
                self.last_error = Some(err.to_string());
                self.state = SessionState::Invalid;
            }
        }

        self.state
    }

    /// Discard everything and return to `Idle` ("New QR Code").
    pub fn reset(&mut self) {
        self.raw_url.clear();
        self.rendered = None;
        self.last_error = None;
        self.state = SessionState::Idle;
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The raw input as last edited.
    pub fn raw_url(&self) -> &str {
        &self.raw_url
    }

    /// The frozen validated URL, present only in the `Displayed` state.
    pub fn rendered_url(&self) -> Option<&ValidUrl> {
        self.rendered.as_ref()
    }

    /// Human-readable message for the last failed submission.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl Default for QrRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_is_idle() {
        let request = QrRequest::new();
        assert_eq!(request.state(), SessionState::Idle);
        assert!(request.rendered_url().is_none());
    }

    #[test]
    fn test_empty_submit_stays_idle() {
        let mut request = QrRequest::new();
        assert_eq!(request.submit(), SessionState::Idle);
        assert!(request.last_error().is_none());
    }

    #[test]
    fn test_invalid_format_transition() {
        let mut request = QrRequest::new();
        request.edit("ftp://example.com");
        assert_eq!(request.submit(), SessionState::Invalid);
        assert!(request.last_error().unwrap().contains("Invalid URL format"));
        assert!(request.rendered_url().is_none());
    }

    #[test]
    fn test_phi_flagged_transition() {
        let mut request = QrRequest::new();
        request.edit("https://example.com/patient/42");
        assert_eq!(request.submit(), SessionState::PhiFlagged);
        assert!(request.last_error().unwrap().contains("PHI detected"));
    }

    #[test]
    fn test_successful_submit_freezes_url() {
        let mut request = QrRequest::new();
        request.edit("https://unc.edu/health");
        assert_eq!(request.submit(), SessionState::Displayed);
        assert_eq!(
            request.rendered_url().unwrap().as_str(),
            "https://unc.edu/health"
        );
    }

    #[test]
    fn test_edit_discards_rendered_url() {
        let mut request = QrRequest::new();
        request.edit("https://unc.edu/health");
        request.submit();
        assert_eq!(request.state(), SessionState::Displayed);

        request.edit("https://unc.edu/health2");
        assert_eq!(request.state(), SessionState::Idle);
        assert!(request.rendered_url().is_none());
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut request = QrRequest::new();
        request.edit("https://unc.edu/health");
        request.submit();

        request.reset();
        assert_eq!(request.state(), SessionState::Idle);
        assert!(request.raw_url().is_empty());
        assert!(request.rendered_url().is_none());
    }

    #[test]
    fn test_resubmit_after_failure_recovers() {
        let mut request = QrRequest::new();
        request.edit("ftp://example.com");
        assert_eq!(request.submit(), SessionState::Invalid);

        request.edit("https://example.com/ok");
        assert_eq!(request.submit(), SessionState::Displayed);
        assert!(request.last_error().is_none());
    }
}
