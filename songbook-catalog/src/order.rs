//! Result ordering requested by callers of the query layer.

use thiserror::Error;

/// How textual results should be ordered.
///
/// Ordering is always case-insensitive. `None` leaves row order to the
/// engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    None,
    #[default]
    Ascending,
    Descending,
}

const ALL_ORDERS: &[SortOrder] = &[SortOrder::None, SortOrder::Ascending, SortOrder::Descending];

impl SortOrder {
    /// All orderings, in declaration order.
    pub fn all() -> &'static [SortOrder] {
        ALL_ORDERS
    }

    /// Short lowercase name, as accepted on the command line.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Additional accepted spellings.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::None => &["unordered", "off"],
            Self::Ascending => &["ascending", "up"],
            Self::Descending => &["descending", "down"],
        }
    }

    /// SQL direction keyword, or `None` when no `ORDER BY` should be emitted.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Ascending => Some("ASC"),
            Self::Descending => Some("DESC"),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Error returned when a string cannot be parsed into a `SortOrder`.
#[derive(Debug, Clone, Error)]
#[error("unknown sort order: '{0}' (expected none, asc or desc)")]
pub struct SortOrderParseError(pub String);

impl std::str::FromStr for SortOrder {
    type Err = SortOrderParseError;

    /// Parse an ordering from its short name or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &order in ALL_ORDERS {
            if order.short_name() == lower || order.aliases().contains(&lower.as_str()) {
                return Ok(order);
            }
        }
        Err(SortOrderParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[test]
    fn none_has_no_keyword() {
        assert_eq!(SortOrder::None.keyword(), None);
        assert_eq!(SortOrder::Ascending.keyword(), Some("ASC"));
        assert_eq!(SortOrder::Descending.keyword(), Some("DESC"));
    }
}
