//! Latest-wins guard for fetches that cannot be cancelled.
//!
//! A section issues a token per request and only applies a response whose
//! token is still the newest one. Older responses that resolve late are
//! dropped instead of overwriting newer state.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Identifies one in-flight request within a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Per-section token counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: RequestToken,
}

impl RequestSeq {
    /// Issue a token newer than every token issued before it.
    pub fn issue(&mut self) -> RequestToken {
        self.latest = RequestToken(self.latest.0.wrapping_add(1));
        self.latest
    }

    /// Whether a response carrying `token` may still be applied.
    #[must_use]
    pub fn is_latest(&self, token: RequestToken) -> bool {
        token == self.latest
    }
}
