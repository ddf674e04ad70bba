use std::fmt;

const PREVIEW_CHARS: usize = 50;

/// Opaque bearer credential for one embedded dashboard session.
///
/// Expiry is enforced by the dashboard server; a fresh token is fetched for
/// every session. `Debug` never prints the full value.
#[derive(Clone, PartialEq, Eq)]
pub struct GuestToken(String);

impl GuestToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Full token value, for handing to the embedded frame.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First 50 characters followed by `...`, safe for logs.
    pub fn preview(&self) -> String {
        let head: String = self.0.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}

impl fmt::Debug for GuestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GuestToken(len={})", self.0.len())
    }
}
