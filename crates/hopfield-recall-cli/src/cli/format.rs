//! Output formatting utilities

use colored::*;
use hopfield_recall::{Cell, Grid, RecallReport};

/// Render a grid under a bold title, active cells highlighted.
pub fn format_grid(title: &str, grid: &Grid) -> String {
    let mut output = format!("{}\n", title.bold());
    for row in grid.rows() {
        for &cell in row {
            let symbol = cell.symbol().to_string();
            match cell {
                Cell::Active => output.push_str(&symbol.cyan().to_string()),
                Cell::Inactive => output.push_str(&symbol.dimmed().to_string()),
            }
        }
        output.push('\n');
    }
    output
}

/// Format a full recall report: the three grids followed by metrics.
pub fn format_report(report: &RecallReport) -> String {
    let convergence = if report.converged {
        format!("converged after {} iteration(s)", report.iterations)
            .green()
            .to_string()
    } else {
        format!("no fixed point within {} iteration(s)", report.iterations)
            .yellow()
            .to_string()
    };

    format!(
        "{}\n{}\n{}\n{} {}\n  Noisy agreement: {}\n{} {}\n",
        format_grid("Ideal pattern:", &report.ideal),
        format_grid("Noisy observation:", &report.noisy),
        format_grid("Recovered:", &report.recovered),
        "Recall:".bold(),
        convergence,
        format_percent(report.noisy_agreement),
        "Match with ideal:".bold(),
        format_percent(report.recovered_agreement).green(),
    )
}

/// Fraction as a percentage with two decimals, e.g. `96.88%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Format error message
pub fn format_error(msg: &str) -> String {
    format!("{} {}", "Error:".red().bold(), msg)
}
