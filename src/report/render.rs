//! Plain-text rendering of a report.

use super::types::LoadoutReport;
use crate::catalog::{Attribute, Item};
use crate::search::{Combination, SearchRequest};
use std::fmt::Write;

const RULE_WIDTH: usize = 80;

/// Renders the best `top` combinations of `report` as text.
///
/// `request` must be the request the report was produced from; it supplies
/// the carried load, weight class, availability, and dimension names shown
/// in the output.
pub fn render_report(report: &LoadoutReport<'_>, request: &SearchRequest, top: usize) -> String {
    let mut out = String::new();

    if report.is_empty() {
        out.push_str("No suitable armor combinations found.\n");
        return out;
    }

    let ranked_by: Vec<&str> = request.labeled_dimensions().map(|(label, _)| label).collect();
    let _ = writeln!(
        out,
        "Top {top} Armor Combinations (Ranked by {}, availability: {}):",
        ranked_by.join(", "),
        request.availability
    );

    for (i, combination) in report.top(top).iter().enumerate() {
        let _ = writeln!(out, "\nCombination {}:", i + 1);
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        render_combination(&mut out, combination, report, request);
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
    }

    if report.truncated {
        let _ = writeln!(
            out,
            "\nSearch stopped after {} evaluations; results may be incomplete.",
            report.evaluated
        );
    }
    out
}

fn render_combination(
    out: &mut String,
    combination: &Combination<'_>,
    report: &LoadoutReport<'_>,
    request: &SearchRequest,
) {
    for item in combination.items() {
        let _ = writeln!(out, "{}", item_line(item));
    }

    let total = combination.total_weight + request.carried_load;
    let _ = writeln!(out, "Current Equip Load: {}", request.carried_load);
    let _ = writeln!(out, "Armor Weight: {}", combination.total_weight);
    let _ = writeln!(out, "Total Weight (with current equip load): {total}");
    let _ = writeln!(
        out,
        "Headroom for {} roll: {:.2} (Max allowed: {:.2})",
        request.weight_class, combination.headroom, report.ceiling
    );
    for (label, dimension) in request.labeled_dimensions() {
        let _ = writeln!(out, "{label}: {}", combination.scores.value(dimension));
    }
}

fn item_line(item: &Item) -> String {
    let mut line = format!("{} - Weight: {}", item.name, item.weight);
    for attr in Attribute::ALL {
        let _ = write!(line, ", {}: {}", attr.label(), item.attributes[attr]);
    }
    let _ = write!(line, ", Available: {}", item.availability);
    line
}
