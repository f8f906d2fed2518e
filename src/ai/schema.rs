//! Structured-output schema for plan responses
//!
//! Uses the OpenAPI subset the Gemini API accepts for `responseSchema`.

use serde_json::{json, Value};

/// Top-level keys the model must always return
pub const REQUIRED_FIELDS: [&str; 5] = [
    "potentialMonthlySavings",
    "potentialAnnualSavings",
    "summary",
    "budgetBreakdown",
    "financialTips",
];

/// The response schema for one budget plan
pub fn budget_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "potentialMonthlySavings": {
                "type": "NUMBER",
                "description": "The total potential savings per month, as a number."
            },
            "potentialAnnualSavings": {
                "type": "NUMBER",
                "description": "The total potential savings per year, calculated as monthly savings times 12."
            },
            "summary": {
                "type": "STRING",
                "description": "A brief, encouraging summary of the budget plan, 2-3 sentences long."
            },
            "budgetBreakdown": {
                "type": "ARRAY",
                "description": "A detailed breakdown of the budget by spending category.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": {
                            "type": "STRING",
                            "description": "The name of the spending category, exactly as the user wrote it."
                        },
                        "recommendedAmount": {
                            "type": "NUMBER",
                            "description": "The recommended monthly spending amount for this category."
                        },
                        "notes": {
                            "type": "STRING",
                            "description": "A brief tip or explanation for this category's recommended budget."
                        }
                    },
                    "required": ["category", "recommendedAmount", "notes"]
                }
            },
            "financialTips": {
                "type": "ARRAY",
                "description": "A list of 2-4 general and actionable financial tips to help the user save more.",
                "items": { "type": "STRING" }
            },
            "surplusSuggestions": {
                "type": "ARRAY",
                "description": "Optional ideas for using money left over after the recommended budget.",
                "items": { "type": "STRING" }
            }
        },
        "required": REQUIRED_FIELDS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_shape() {
        let schema = budget_plan_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"].as_array().unwrap().len(), 5);
        assert!(schema["properties"]["surplusSuggestions"].is_object());

        let item = &schema["properties"]["budgetBreakdown"]["items"];
        assert_eq!(item["required"], json!(["category", "recommendedAmount", "notes"]));
    }

    #[test]
    fn test_surplus_is_optional() {
        let schema = budget_plan_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(!required.contains(&"surplusSuggestions"));
    }
}
