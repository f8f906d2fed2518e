//! Category classification output

use crate::models::keywords::matched_keyword;
use crate::models::{classify, INFLEXIBLE_KEYWORDS, SURVIVAL_KEYWORDS};

/// Describe how a category is treated by the validator
pub fn format_classification(category: &str) -> String {
    let class = classify(category);
    let kind = if class.inflexible {
        "fixed (inflexible)"
    } else if class.survival {
        "essential (survival)"
    } else {
        "discretionary"
    };

    let mut output = format!("{}: {}\n", category.trim(), kind);
    if let Some(keyword) = matched_keyword(category, INFLEXIBLE_KEYWORDS) {
        output.push_str(&format!("  matches fixed keyword '{}'\n", keyword));
    }
    if let Some(keyword) = matched_keyword(category, SURVIVAL_KEYWORDS) {
        output.push_str(&format!("  matches essential keyword '{}'\n", keyword));
    }
    if class.inflexible {
        output.push_str("  counted against income before any savings goal\n");
    } else if class.survival {
        output.push_str("  can shrink but must keep some money when a goal is set\n");
    } else {
        output.push_str("  first in line for cuts\n");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_category() {
        let text = format_classification("Car Payment");
        assert!(text.starts_with("Car Payment: fixed (inflexible)"));
        assert!(text.contains("'car payment'"));
    }

    #[test]
    fn test_fixed_and_essential() {
        let text = format_classification("Health Insurance");
        assert!(text.contains("fixed (inflexible)"));
        assert!(text.contains("'insurance'"));
        assert!(text.contains("'health'"));
    }

    #[test]
    fn test_discretionary() {
        let text = format_classification("  Concerts ");
        assert!(text.starts_with("Concerts: discretionary"));
        assert!(!text.contains("matches"));
    }
}
