//! Expense category classification
//!
//! Categories are classified by case-insensitive substring match against two
//! keyword lists. The lists are checked independently, so a category can be
//! both inflexible and survival; feasibility checks treat inflexible first.

/// Fixed obligations that cannot be cut to make room for savings
pub const INFLEXIBLE_KEYWORDS: &[&str] = &[
    "rent",
    "debt",
    "tuition",
    "loan",
    "mortgage",
    "car payment",
    "insurance",
    "child support",
    "alimony",
];

/// Essentials that can shrink but not disappear
pub const SURVIVAL_KEYWORDS: &[&str] = &[
    "food",
    "groceries",
    "utilities",
    "transport",
    "gas",
    "health",
    "medicine",
    "phone",
];

/// Result of classifying one expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub inflexible: bool,
    pub survival: bool,
}

impl Classification {
    /// Survival spending that is not already counted as a fixed obligation
    pub fn is_flexible_essential(&self) -> bool {
        self.survival && !self.inflexible
    }

    /// Neither fixed nor essential
    pub fn is_discretionary(&self) -> bool {
        !self.inflexible && !self.survival
    }
}

/// Classify a category label
pub fn classify(category: &str) -> Classification {
    let lowered = category.to_lowercase();
    Classification {
        inflexible: matches_any(&lowered, INFLEXIBLE_KEYWORDS),
        survival: matches_any(&lowered, SURVIVAL_KEYWORDS),
    }
}

/// The first keyword contained in `category`, if any
pub fn matched_keyword(category: &str, keywords: &[&'static str]) -> Option<&'static str> {
    let lowered = category.to_lowercase();
    keywords.iter().copied().find(|kw| lowered.contains(kw))
}

fn matches_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lowered.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lists_are_lowercase() {
        for kw in INFLEXIBLE_KEYWORDS.iter().chain(SURVIVAL_KEYWORDS) {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }

    #[test]
    fn test_inflexible_match_is_case_insensitive() {
        assert!(classify("RENT").inflexible);
        assert!(classify("Student Loan").inflexible);
        assert!(classify("Car Payment - Honda").inflexible);
        assert!(!classify("Car wash").inflexible);
    }

    #[test]
    fn test_survival_match() {
        let c = classify("Groceries");
        assert!(c.survival);
        assert!(!c.inflexible);
        assert!(c.is_flexible_essential());
    }

    #[test]
    fn test_item_can_match_both_sets() {
        // "health insurance" hits "insurance" and "health"
        let c = classify("Health Insurance");
        assert!(c.inflexible);
        assert!(c.survival);
        assert!(!c.is_flexible_essential());
    }

    #[test]
    fn test_substring_containment() {
        // "gas" is inside "Vegas", matching is plain containment
        assert!(classify("Vegas trip").survival);
        assert!(classify("Parent rent").inflexible);
    }

    #[test]
    fn test_discretionary() {
        let c = classify("Streaming");
        assert!(c.is_discretionary());
        assert_eq!(c, Classification::default());
    }

    #[test]
    fn test_matched_keyword() {
        assert_eq!(matched_keyword("Home Mortgage", INFLEXIBLE_KEYWORDS), Some("mortgage"));
        assert_eq!(matched_keyword("Phone bill", SURVIVAL_KEYWORDS), Some("phone"));
        assert_eq!(matched_keyword("Movies", SURVIVAL_KEYWORDS), None);
    }
}
