//! Renders the dashboard cards for a single prediction.

use super::ui;
use crate::core::chart;
use crate::core::insights;
use crate::core::prediction::AssetPrediction;
use crate::core::recommend;
use anyhow::Result;
use comfy_table::Cell;

/// Assembles the full dashboard for one prediction record: the projection
/// card, the recommendation card, the pros & cons card, and the indicator
/// table. Fails when the record cannot be classified (zero or non-finite
/// latest price).
pub fn render(prediction: &AssetPrediction) -> Result<String> {
    let recommendation = recommend::recommend(prediction)?;
    let upside = recommend::upside_pct(prediction.latest_price, prediction.short_term_prediction)?;
    let series = chart::from_prediction(prediction);
    let insights = insights::generate_insights(prediction);

    let mut output = format!(
        "{}\n",
        ui::style_text(
            &format!("{} Prediction Engine", prediction.symbol),
            ui::StyleType::Title
        )
    );
    output.push_str(&format!(
        "{}\n\n",
        ui::style_text(
            &format!("Generated at {}", chrono::Local::now().format("%Y-%m-%d %H:%M")),
            ui::StyleType::Subtle
        )
    ));

    // Projection card
    let mut projection = ui::new_styled_table();
    projection.set_header(vec![
        ui::header_cell("Horizon"),
        ui::header_cell("Price"),
        ui::header_cell("Change"),
    ]);
    for point in &series {
        let change = (point.value - prediction.latest_price) / prediction.latest_price * 100.0;
        projection.add_row(vec![
            Cell::new(point.label),
            ui::price_cell(point.value),
            ui::change_cell(change),
        ]);
    }
    output.push_str(&projection.to_string());
    output.push_str(&format!(
        "\nConfidence: {}\n\n",
        ui::style_text(
            &format!("{:.1}%", prediction.confidence_score),
            ui::StyleType::Positive
        )
    ));

    // Recommendation card
    output.push_str(&format!(
        "{}\n",
        ui::style_text("Investment Recommendation", ui::StyleType::CardLabel)
    ));
    let mut recommendation_table = ui::new_styled_table();
    recommendation_table.add_row(vec![
        Cell::new("Action"),
        ui::action_cell(recommendation.action),
    ]);
    recommendation_table.add_row(vec![
        Cell::new("Upside"),
        ui::change_cell(upside),
    ]);
    recommendation_table.add_row(vec![
        Cell::new("Risk Level"),
        ui::risk_cell(recommendation.risk_level),
    ]);
    recommendation_table.add_row(vec![
        Cell::new("Suggested Duration"),
        Cell::new(recommendation.investment_duration),
    ]);
    recommendation_table.add_row(vec![
        Cell::new("Portfolio Allocation"),
        Cell::new(format!("{:.2}%", recommendation.portfolio_allocation_pct)),
    ]);
    output.push_str(&recommendation_table.to_string());
    output.push_str("\n\n");

    // Pros & cons card
    output.push_str(&format!(
        "{}\n",
        ui::style_text("Pros & Cons Analyzer", ui::StyleType::CardLabel)
    ));
    for pro in &insights.pros {
        output.push_str(&format!(
            "  {} {}\n",
            ui::style_text("+", ui::StyleType::Positive),
            pro
        ));
    }
    for con in &insights.cons {
        output.push_str(&format!(
            "  {} {}\n",
            ui::style_text("-", ui::StyleType::Error),
            con
        ));
    }

    // Indicator table
    if !prediction.indicators.is_empty() {
        output.push_str(&format!(
            "\n{}\n",
            ui::style_text("Technical Indicators", ui::StyleType::CardLabel)
        ));
        let mut indicator_table = ui::new_styled_table();
        indicator_table.set_header(vec![ui::header_cell("Indicator"), ui::header_cell("Value")]);
        for (name, value) in &prediction.indicators {
            indicator_table.add_row(vec![Cell::new(name), ui::price_cell(*value)]);
        }
        output.push_str(&indicator_table.to_string());
        output.push('\n');
    }

    Ok(output)
}
