//! Activation table: leading character to candidate matchers.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::OnceLock;

use crate::matcher::Matcher;

/// Pre-computed lookup from an activation symbol to the matchers that can
/// start on it, in [`Matcher::ALL`] order.
///
/// Immutable once built. Most symbols have a single candidate; `/` has
/// two (line and block comments).
#[derive(Debug)]
pub struct ActivationTable {
    entries: FxHashMap<char, SmallVec<[Matcher; 2]>>,
}

impl ActivationTable {
    pub fn new() -> Self {
        let mut entries: FxHashMap<char, SmallVec<[Matcher; 2]>> = FxHashMap::default();
        for &matcher in Matcher::ALL {
            for &symbol in matcher.activation_symbols() {
                entries.entry(symbol).or_default().push(matcher);
            }
        }
        ActivationTable { entries }
    }

    /// Candidates for `symbol`, or `None` when no matcher starts on it.
    #[inline]
    pub fn candidates(&self, symbol: char) -> Option<&[Matcher]> {
        self.entries.get(&symbol).map(SmallVec::as_slice)
    }

    /// Number of distinct activation symbols.
    pub fn symbol_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ActivationTable {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_TABLE: OnceLock<ActivationTable> = OnceLock::new();

/// The shared activation table, built on first use.
pub fn global_table() -> &'static ActivationTable {
    GLOBAL_TABLE.get_or_init(ActivationTable::new)
}
