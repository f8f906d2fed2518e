//! Prompt text sent with every plan request

use crate::models::{BudgetMode, FinancialData};

/// Persona and output rules for the model
pub const SYSTEM_INSTRUCTION: &str = "You are 'Budget Boss', an expert financial advisor AI. \
Your goal is to create clear, actionable, and personalized budget plans to help users achieve \
their financial goals, such as retirement. Your tone must be encouraging, positive, and \
informative. Always provide a summary of potential monthly and annual savings. Use the user's \
currency implicitly without specifying a symbol. All monetary values in your response must be \
numbers, precise to two decimal places.";

/// How aggressively the model should cut, per mode
pub fn mode_instructions(mode: BudgetMode) -> &'static str {
    match mode {
        BudgetMode::Minimalist => {
            "For this plan, adopt a 'minimalist' approach. Be very aggressive in suggesting cuts \
to non-essential spending to maximize savings potential. Provide a list of specific areas to cut \
back on and justify why these cuts are impactful for long-term savings goals like retirement. \
Focus on needs over wants."
        }
        BudgetMode::Standard => {
            "For this plan, create a balanced '50/30/20' style budget (50% needs, 30% wants, 20% \
savings) as a guiding principle, but adjust it based on the user's data. The goal is a \
sustainable budget that allows for comfortable living while still achieving significant \
savings. The user should not feel overly restricted."
        }
    }
}

/// Build the user prompt for one request
pub fn build_prompt(data: &FinancialData, mode: BudgetMode) -> String {
    let goal_line = match data.savings_goal {
        Some(goal) => format!("Monthly Savings Goal: {}\n", goal),
        None => String::new(),
    };
    let goal_step = match data.savings_goal {
        Some(_) => {
            "Make sure the recommended budget leaves at least the monthly savings goal \
unallocated. Cut flexible categories before fixed obligations, and set a category to 0 only \
when the goal cannot be met otherwise."
        }
        None => "Aim for meaningful savings without cutting fixed obligations.",
    };

    format!(
        "Please analyze the following financial information and generate a personalized budget plan.

Budgeting Mode: {mode}
Monthly Income: {income}
{goal_line}Current Monthly Expenses (user-provided list): \"{expenses}\"

Instructions:
1. Analyze the income and the list of expenses provided. Infer categories and amounts from the user's expense list.
2. Crucially, only create budget breakdown categories for items explicitly mentioned by the user. Do not invent or add categories that are not in the user's list. Keep the user's category names exactly as written.
3. Based on the selected '{mode}' mode, create a new budget allocation for the provided expense categories.
4. {mode_instructions}
5. {goal_step}
6. Calculate the total potential monthly and annual savings based on your recommended budget.
7. Provide a summary and some actionable tips. If money is left over after the recommended budget, add a few suggestions for using the surplus.
8. Your final output must be a JSON object that strictly adheres to the provided schema.
",
        mode = mode,
        income = data.income,
        goal_line = goal_line,
        expenses = data.expenses,
        mode_instructions = mode_instructions(mode),
        goal_step = goal_step,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(goal: Option<f64>) -> FinancialData {
        FinancialData {
            income: 4500.0,
            expenses: "Rent 1500, Food 300".into(),
            savings_goal: goal,
        }
    }

    #[test]
    fn test_prompt_carries_form_data() {
        let prompt = build_prompt(&data(None), BudgetMode::Standard);
        assert!(prompt.contains("Budgeting Mode: Standard"));
        assert!(prompt.contains("Monthly Income: 4500"));
        assert!(prompt.contains("\"Rent 1500, Food 300\""));
        assert!(prompt.contains("50/30/20"));
        assert!(!prompt.contains("Savings Goal"));
    }

    #[test]
    fn test_prompt_includes_goal() {
        let prompt = build_prompt(&data(Some(750.0)), BudgetMode::Standard);
        assert!(prompt.contains("Monthly Savings Goal: 750\n"));
        assert!(prompt.contains("at least the monthly savings goal"));
    }

    #[test]
    fn test_minimalist_instructions() {
        let prompt = build_prompt(&data(None), BudgetMode::Minimalist);
        assert!(prompt.contains("Budgeting Mode: Minimalist"));
        assert!(prompt.contains("needs over wants"));
        assert!(!prompt.contains("50/30/20"));
    }
}
