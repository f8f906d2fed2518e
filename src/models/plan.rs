//! Budget plan model
//!
//! The plan comes back from the AI service as loosely-typed JSON. Instead of
//! trusting it, `BudgetPlan::from_value` walks the document, fills defaults
//! for missing collections, coerces numeric fields, and records every repair
//! it had to make.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{BudgetError, BudgetResult};

/// One recommended category allocation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub category: String,
    pub recommended_amount: f64,
    pub notes: String,
}

impl BudgetItem {
    pub fn new(category: impl Into<String>, recommended_amount: f64, notes: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            recommended_amount,
            notes: notes.into(),
        }
    }
}

/// A generated budget plan
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    /// Advisory only; the results view recomputes savings locally
    pub potential_monthly_savings: f64,
    /// Advisory only; the results view recomputes savings locally
    pub potential_annual_savings: f64,
    pub summary: String,
    pub budget_breakdown: Vec<BudgetItem>,
    pub financial_tips: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surplus_suggestions: Option<Vec<String>>,
}

/// A coerced plan plus the repairs applied to the raw document
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPlan {
    pub plan: BudgetPlan,
    pub warnings: Vec<String>,
}

impl BudgetPlan {
    /// Parse a plan from JSON text
    pub fn from_json_str(text: &str) -> BudgetResult<ParsedPlan> {
        let value: Value = serde_json::from_str(text.trim()).map_err(|e| {
            BudgetError::MalformedResponse(format!("plan is not valid JSON: {}", e))
        })?;
        Self::from_value(value)
    }

    /// Coerce an untyped JSON document into a plan
    ///
    /// Only a non-object root is rejected. Everything else is repaired and
    /// noted in `ParsedPlan::warnings`.
    pub fn from_value(value: Value) -> BudgetResult<ParsedPlan> {
        let Value::Object(root) = value else {
            return Err(BudgetError::MalformedResponse(
                "plan must be a JSON object".into(),
            ));
        };

        let mut warnings = Vec::new();

        let potential_monthly_savings =
            number_field(&root, "potentialMonthlySavings", &mut warnings);
        let potential_annual_savings = number_field(&root, "potentialAnnualSavings", &mut warnings);

        let summary = match root.get("summary") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                warnings.push("summary is not a string".into());
                other.to_string()
            }
            None => {
                warnings.push("summary is missing".into());
                String::new()
            }
        };

        let budget_breakdown = match root.get("budgetBreakdown") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| budget_item(index, item, &mut warnings))
                .collect(),
            Some(_) => {
                warnings.push("budgetBreakdown is not a list; using an empty breakdown".into());
                Vec::new()
            }
            None => {
                warnings.push("budgetBreakdown is missing; using an empty breakdown".into());
                Vec::new()
            }
        };

        let financial_tips = match string_list(&root, "financialTips", &mut warnings) {
            Some(tips) => tips,
            None => {
                warnings.push("financialTips is missing; using no tips".into());
                Vec::new()
            }
        };

        let surplus_suggestions = string_list(&root, "surplusSuggestions", &mut warnings);

        Ok(ParsedPlan {
            plan: BudgetPlan {
                potential_monthly_savings,
                potential_annual_savings,
                summary,
                budget_breakdown,
                financial_tips,
                surplus_suggestions,
            },
            warnings,
        })
    }

    /// Surplus suggestions, only when the list has entries
    pub fn surplus(&self) -> Option<&[String]> {
        self.surplus_suggestions
            .as_deref()
            .filter(|suggestions| !suggestions.is_empty())
    }
}

/// Read a number, accepting numeric strings; anything else becomes 0
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn number_field(obj: &Map<String, Value>, key: &str, warnings: &mut Vec<String>) -> f64 {
    match obj.get(key) {
        Some(value) => coerce_number(value).unwrap_or_else(|| {
            warnings.push(format!("{} is not numeric; using 0", key));
            0.0
        }),
        None => {
            warnings.push(format!("{} is missing; using 0", key));
            0.0
        }
    }
}

fn budget_item(index: usize, value: &Value, warnings: &mut Vec<String>) -> Option<BudgetItem> {
    let Value::Object(obj) = value else {
        warnings.push(format!("budgetBreakdown[{}] is not an object; dropped", index));
        return None;
    };

    let category = match obj.get("category").and_then(Value::as_str).map(str::trim) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => {
            warnings.push(format!("budgetBreakdown[{}] has no category; dropped", index));
            return None;
        }
    };

    let recommended_amount = obj
        .get("recommendedAmount")
        .and_then(coerce_number)
        .unwrap_or_else(|| {
            warnings.push(format!(
                "budgetBreakdown[{}].recommendedAmount is not numeric; using 0",
                index
            ));
            0.0
        });

    let notes = obj
        .get("notes")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(BudgetItem {
        category,
        recommended_amount,
        notes,
    })
}

/// `None` when the key is absent; non-string entries are skipped
fn string_list(
    obj: &Map<String, Value>,
    key: &str,
    warnings: &mut Vec<String>,
) -> Option<Vec<String>> {
    match obj.get(key)? {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    _ => {
                        warnings.push(format!("{} contains a non-string entry; skipped", key));
                        None
                    }
                })
                .collect(),
        ),
        Value::Null => None,
        _ => {
            warnings.push(format!("{} is not a list; ignored", key));
            Some(Vec::new())
        }
    }
}
