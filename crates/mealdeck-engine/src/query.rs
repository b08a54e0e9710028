use mealdeck_types::Area;
use std::fmt;

/// Strip angle brackets from user input and trim surrounding whitespace.
///
/// No other escaping happens here; the HTTP layer URL-encodes the result.
pub fn sanitize_query(input: &str) -> String {
    input.trim().replace(['<', '>'], "")
}

/// The request that produced the current catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchContext {
    /// Meals whose name starts with `letter` (the default browse set)
    Browse { letter: char },
    /// Free-text search by name
    Search { term: String },
    /// Meals of one area
    Area { area: Area },
}

impl FetchContext {
    /// Browse and area catalogs are what an empty search falls back to
    pub fn is_browse_set(&self) -> bool {
        !matches!(self, FetchContext::Search { .. })
    }
}

impl fmt::Display for FetchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchContext::Browse { letter } => {
                write!(f, "Meals starting with '{}'", letter.to_ascii_uppercase())
            }
            FetchContext::Search { term } => write!(f, "Search: \"{}\"", term),
            FetchContext::Area { area } => write!(f, "{} cuisine", area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_trims_and_strips_angle_brackets() {
        assert_eq!(sanitize_query(" <b>chicken</b> "), "bchicken/b");
    }

    #[test]
    fn test_sanitize_keeps_other_characters() {
        assert_eq!(sanitize_query("mac & \"cheese\""), "mac & \"cheese\"");
    }

    #[test]
    fn test_sanitize_whitespace_only_is_empty() {
        assert_eq!(sanitize_query("   \t "), "");
        assert_eq!(sanitize_query(" <> "), "");
    }

    #[test]
    fn test_strip_happens_after_trim() {
        // Inner spaces exposed by stripping are kept
        assert_eq!(sanitize_query("< pie >"), " pie ");
    }

    #[test]
    fn test_context_display() {
        assert_eq!(
            FetchContext::Browse { letter: 'a' }.to_string(),
            "Meals starting with 'A'"
        );
        assert_eq!(
            FetchContext::Area {
                area: Area::new("Thai")
            }
            .to_string(),
            "Thai cuisine"
        );
    }
}
