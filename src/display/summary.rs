//! Dashboard and analytics formatting

use super::report::{double_separator, format_bar, separator, truncate};
use crate::models::Money;
use crate::reports::{MonthlyBreakdown, Summary};

/// Format the headline metrics shown on the dashboard
pub fn format_summary(summary: Option<&Summary>, currency: &str) -> String {
    let Some(summary) = summary else {
        return "No data available. Please add some expenses.\n".to_string();
    };

    let show = |value: Option<Money>| match value {
        Some(amount) => amount.format_with_symbol(currency),
        None => "-".to_string(),
    };

    let mut output = String::new();
    output.push_str("Dashboard\n");
    output.push_str(&double_separator(40));
    output.push('\n');
    output.push_str(&format!(
        "{:<22}{:>18}\n",
        "Total Spending",
        summary.total.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "{:<22}{:>18}\n",
        "Average Transaction",
        show(summary.average)
    ));
    output.push_str(&format!(
        "{:<22}{:>18}\n",
        "Daily Average",
        show(summary.daily_average)
    ));
    output.push_str(&format!(
        "{:<22}{:>18}\n",
        "Transactions", summary.transaction_count
    ));
    if let Some(top) = summary.top_category() {
        output.push_str(&format!("{:<22}{:>18}\n", "Top Category", truncate(top, 18)));
    }

    output
}

/// How often each category was used, most frequent first
pub fn format_category_frequency(summary: Option<&Summary>) -> String {
    let Some(summary) = summary.filter(|s| !s.category_counts.is_empty()) else {
        return "No data to display category frequency.\n".to_string();
    };

    let mut counts: Vec<(&String, &usize)> = summary.category_counts.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1));
    let max = counts.first().map(|(_, count)| **count).unwrap_or(0) as f64;

    let mut output = String::new();
    output.push_str("Category Frequency\n");
    output.push_str(&separator(56));
    output.push('\n');
    for (category, count) in counts {
        output.push_str(&format!(
            "{:<20} {:>5}  {}\n",
            truncate(category, 20),
            count,
            format_bar(*count as f64, max, 28)
        ));
    }

    output
}

/// Format a month-keyed series with a bar per month
pub fn format_monthly_breakdown(title: &str, breakdown: &MonthlyBreakdown, currency: &str) -> String {
    if breakdown.is_empty() {
        return format!("{}: no data yet.\n", title);
    }

    let max = breakdown
        .values()
        .map(Money::as_f64)
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    output.push_str(title);
    output.push('\n');
    output.push_str(&separator(60));
    output.push('\n');
    for (month, amount) in breakdown {
        output.push_str(&format!(
            "{:<10} {:>15}  {}\n",
            month,
            amount.format_with_symbol(currency),
            format_bar(amount.as_f64(), max, 30)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use chrono::NaiveDate;

    fn sample_summary() -> Summary {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Summary::from_expenses(&[
            Expense::new(Money::from_cents(10000), "Food", date),
            Expense::new(Money::from_cents(5000), "Food", date),
            Expense::new(Money::from_cents(3000), "Transport", date),
        ])
        .unwrap()
    }

    #[test]
    fn test_format_summary_without_data() {
        assert!(format_summary(None, "₦").contains("No data available"));
        assert!(format_category_frequency(None).contains("No data"));
    }

    #[test]
    fn test_format_summary() {
        let summary = sample_summary();
        let text = format_summary(Some(&summary), "₦");

        assert!(text.contains("₦180.00"));
        assert!(text.contains("₦60.00"));
        assert!(text.contains("Top Category"));
        assert!(text.contains("Food"));
    }

    #[test]
    fn test_category_frequency_order() {
        let summary = sample_summary();
        let text = format_category_frequency(Some(&summary));

        let food = text.find("Food").unwrap();
        let transport = text.find("Transport").unwrap();
        assert!(food < transport);
    }

    #[test]
    fn test_format_monthly_breakdown() {
        let mut breakdown = MonthlyBreakdown::new();
        assert!(format_monthly_breakdown("Income", &breakdown, "$").contains("no data"));

        breakdown.insert("2024-02".into(), Money::from_cents(500));
        breakdown.insert("2024-01".into(), Money::from_cents(1000));
        let text = format_monthly_breakdown("Income", &breakdown, "$");

        assert!(text.find("2024-01").unwrap() < text.find("2024-02").unwrap());
        assert!(text.contains("$10.00"));
    }
}
