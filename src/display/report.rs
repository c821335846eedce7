//! Formatting of the shock-query summary and the sector listing.

use std::fmt::Write;

use crate::analysis::impact::ImpactResult;

const RULE_WIDTH: usize = 80;

/// Renders the numbered `index: sector` listing used to pick a shock
/// target.
pub fn format_sector_list(sectors: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Available sectors:");
    for (i, sector) in sectors.iter().enumerate() {
        let _ = writeln!(out, "{i:>4}: {sector}");
    }
    out
}

/// Renders the console summary of a shock query: header, top-N ranked
/// impacts, aggregate impact, multiplier.
pub fn format_impact_report(result: &ImpactResult, top: usize) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "DEMAND SHOCK IMPACT: ${}",
        format_amount(result.shock_magnitude, 0)
    );
    let _ = writeln!(out, "Sector: {}", result.shocked_sector);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);

    let shown = top.min(result.ranked.len());
    let _ = writeln!(out, "Top {shown} most impacted sectors:");
    let _ = writeln!(out, "  {:<50} {:>15}", "Sector", "Impact");
    for row in result.ranked.iter().take(shown) {
        let _ = writeln!(
            out,
            "  {:<50} {:>15}",
            truncate_label(&row.sector, 50),
            format_amount(row.impact, 2)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total economy-wide impact: ${}",
        format_amount(result.aggregate_impact, 2)
    );
    let _ = writeln!(out, "Multiplier: {:.2}", result.multiplier);
    out
}

/// Formats a currency amount with thousands grouping, e.g. `12,345.68`.
fn format_amount(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (pos, digit) in int_part.chars().enumerate() {
        if pos > 0 && (int_part.len() - pos) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        label.chars().take(max).collect()
    }
}
