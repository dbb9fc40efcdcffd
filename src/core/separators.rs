//! Separator set - the configurable characters that delimit words
//!
//! A separator set is built once from a configuration string and is immutable
//! for the rest of the run. Duplicate characters in the configuration string
//! are collapsed.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Default separator configuration: space, tab, comma, period, hyphen,
/// exclamation mark, underscore.
pub const DEFAULT_SEPARATORS: &str = " \t,.-!_";

static DEFAULT_SET: Lazy<SeparatorSet> = Lazy::new(|| SeparatorSet::new(DEFAULT_SEPARATORS));

/// The set of characters that delimit words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Build a separator set from a configuration string.
    ///
    /// Each distinct character of the string becomes a member; repeats are
    /// ignored. An empty string yields an empty set, in which case every
    /// line is a single word token.
    pub fn new(config: &str) -> Self {
        Self {
            chars: config.chars().collect(),
        }
    }

    /// Whether `c` is a separator character.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct separator characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        DEFAULT_SET.clone()
    }
}
