use crate::OptionsError;

/// Tunables for [`Scanner`](crate::Scanner) and [`TokenStream`](crate::TokenStream).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerOptions {
    /// Only accept a keyword when no identifier character follows it.
    /// Off by default: `selected` scans as `SELECT` + `ed`.
    pub keyword_boundary: bool,
    /// Streaming only: replace everything from the first illegal token on
    /// with a single unparsed token.
    pub bail_on_illegal: bool,
    /// Streaming only: bound on queued tokens; unbounded when `None`.
    pub channel_capacity: Option<usize>,
}

impl ScannerOptions {
    pub fn from_json(source: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_keyword_boundary(mut self, enabled: bool) -> Self {
        self.keyword_boundary = enabled;
        self
    }

    pub fn with_bail_on_illegal(mut self, enabled: bool) -> Self {
        self.bail_on_illegal = enabled;
        self
    }

    pub fn with_channel_capacity(mut self, capacity: Option<usize>) -> Self {
        self.channel_capacity = capacity;
        self
    }
}
