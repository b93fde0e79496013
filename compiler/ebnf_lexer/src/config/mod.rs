//! Scanner configuration.

/// Default number of characters of unmatched input quoted in a fatal
/// diagnostic.
pub const DEFAULT_PREVIEW_LEN: usize = 20;

/// How the scanner picks candidate matchers for the next lexeme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Strategy {
    /// Look up the leading character in the activation table every time.
    #[default]
    Pattern,
    /// Try the follow set of the last accepted matcher first, falling back
    /// to the activation table on a miss.
    Predictive,
}

/// Configuration for a scan.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScanConfig {
    pub strategy: Strategy,
    /// Maximum characters of remaining input quoted in fatal diagnostics.
    pub preview_len: usize,
    /// Yield whitespace and comment tokens instead of eliding them.
    pub retain_trivia: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            strategy: Strategy::Pattern,
            preview_len: DEFAULT_PREVIEW_LEN,
            retain_trivia: false,
        }
    }
}

impl ScanConfig {
    /// Default configuration with predictive dispatch.
    pub fn predictive() -> Self {
        ScanConfig::default().with_strategy(Strategy::Predictive)
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_preview_len(mut self, preview_len: usize) -> Self {
        self.preview_len = preview_len;
        self
    }

    #[must_use]
    pub fn with_trivia(mut self, retain_trivia: bool) -> Self {
        self.retain_trivia = retain_trivia;
        self
    }
}
