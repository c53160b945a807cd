use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::model::{CalculationMethod, CalculationResult, Criterion};
use crate::scoring::{normalize_weights, total_weight, MethodComparison};

const EMPTY_RESULTS: &str = "No results. Add criteria and candidates first.";
/// Criterion names longer than this are truncated in the table header.
const CRITERION_HEADER_MAX: usize = 16;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Scores are shown with 4 decimals; the engine itself never rounds.
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Format a weight without a trailing ".0" for whole numbers (30, 12.5)
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.is_finite() {
        format!("{:.0}", weight)
    } else {
        format!("{}", weight)
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn style_rank_cell(cell: String, rank: usize, use_colors: bool) -> String {
    if !use_colors {
        return cell;
    }
    match rank {
        1 => cell.yellow().bold().to_string(),
        2 => cell.bold().to_string(),
        3 => cell.magenta().to_string(),
        _ => cell.dimmed().to_string(),
    }
}

/// One-line banner for the rank 1 candidate, None when there are no results
pub fn format_winner(results: &[CalculationResult], use_colors: bool) -> Option<String> {
    let top = results.first()?;
    let line = format!(
        "Top candidate: {} (score {})",
        top.candidate_name,
        format_score(top.final_score)
    );
    Some(if use_colors {
        line.yellow().bold().to_string()
    } else {
        line
    })
}

/// Format ranked results as a table.
///
/// Columns: rank, candidate name, one normalized score per criterion
/// (in criteria order), final score. Two header lines: criterion ids,
/// then each criterion's raw weight as `W: <weight>`.
pub fn format_result_table(
    results: &[CalculationResult],
    criteria: &[Criterion],
    method: CalculationMethod,
    use_colors: bool,
) -> String {
    format_result_table_with_width(results, criteria, method, use_colors, get_terminal_width())
}

fn format_result_table_with_width(
    results: &[CalculationResult],
    criteria: &[Criterion],
    method: CalculationMethod,
    use_colors: bool,
    term_width: Option<usize>,
) -> String {
    if results.is_empty() {
        return EMPTY_RESULTS.to_string();
    }

    let separator = "  ";
    let rank_width = 4; // fits "#999"
    let score_width = 7; // fits "12.3456"

    let name_labels: Vec<String> = criteria
        .iter()
        .map(|c| truncate_name(&c.name, CRITERION_HEADER_MAX))
        .collect();
    let weight_labels: Vec<String> = criteria
        .iter()
        .map(|c| format!("W: {}", format_weight(c.weight)))
        .collect();
    let column_widths: Vec<usize> = name_labels
        .iter()
        .zip(&weight_labels)
        .map(|(n, w)| n.chars().count().max(w.chars().count()).max(score_width))
        .collect();

    let fixed_width = rank_width
        + separator.len()
        + column_widths.iter().map(|w| w + separator.len()).sum::<usize>()
        + separator.len()
        + score_width;
    let longest_name = results
        .iter()
        .map(|r| r.candidate_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Candidate".len());
    let name_width = match term_width {
        Some(width) if width > fixed_width + 12 => longest_name.min(width - fixed_width),
        Some(_) => longest_name.min(12),
        None => longest_name,
    };

    let mut lines = Vec::with_capacity(results.len() + 4);

    let title = format!("Results - {}", method);
    lines.push(if use_colors {
        title.bold().to_string()
    } else {
        title
    });

    let mut header = format!(
        "{:<rw$}{sep}{:<nw$}",
        "Rank",
        "Candidate",
        rw = rank_width,
        nw = name_width,
        sep = separator
    );
    let mut weight_row = format!("{:<rw$}{sep}{:<nw$}", "", "", rw = rank_width, nw = name_width, sep = separator);
    for ((name, label), width) in name_labels.iter().zip(&weight_labels).zip(&column_widths) {
        header.push_str(&format!("{}{:>w$}", separator, name, w = width));
        weight_row.push_str(&format!("{}{:>w$}", separator, label, w = width));
    }
    header.push_str(&format!("{}{:>w$}", separator, "Final", w = score_width));
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });
    let weight_row = weight_row.trim_end().to_string();
    lines.push(if use_colors {
        weight_row.dimmed().to_string()
    } else {
        weight_row
    });

    for result in results {
        let mut row = format!(
            "{:<rw$}{sep}{:<nw$}",
            format!("#{}", result.rank),
            truncate_name(&result.candidate_name, name_width),
            rw = rank_width,
            nw = name_width,
            sep = separator
        );
        for (criterion, width) in criteria.iter().zip(&column_widths) {
            let score = result
                .normalized_scores
                .get(&criterion.id)
                .copied()
                .unwrap_or(0.0);
            row.push_str(&format!("{}{:>w$}", separator, format_score(score), w = width));
        }
        row.push_str(&format!(
            "{}{:>w$}",
            separator,
            format_score(result.final_score),
            w = score_width
        ));
        lines.push(style_rank_cell(row, result.rank, use_colors));
    }

    lines.join("\n")
}

/// Format ranked results as tab-separated values for scripting.
/// Columns: rank, id, name, final score, then one normalized score per
/// criterion. First line is a header, no colors.
pub fn format_tsv(results: &[CalculationResult], criteria: &[Criterion]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let mut header = vec![
        "rank".to_string(),
        "id".to_string(),
        "name".to_string(),
        "final".to_string(),
    ];
    header.extend(criteria.iter().map(|c| c.id.clone()));

    let mut lines = vec![header.join("\t")];
    for result in results {
        let mut fields = vec![
            result.rank.to_string(),
            result.candidate_id.clone(),
            result.candidate_name.clone(),
            format_score(result.final_score),
        ];
        fields.extend(criteria.iter().map(|c| {
            format_score(result.normalized_scores.get(&c.id).copied().unwrap_or(0.0))
        }));
        lines.push(fields.join("\t"));
    }
    lines.join("\n")
}

/// Full-precision results as pretty JSON
pub fn format_json(results: &[CalculationResult]) -> Result<String> {
    serde_json::to_string_pretty(results).context("Failed to serialize results")
}

/// List criteria with raw and normalized weights, plus the total raw weight.
pub fn format_weights(criteria: &[Criterion], use_colors: bool) -> String {
    if criteria.is_empty() {
        return "No criteria defined.".to_string();
    }

    let normalized = normalize_weights(criteria);
    let id_width = criteria
        .iter()
        .map(|c| c.id.chars().count())
        .max()
        .unwrap_or(0)
        .max("Criterion".len());

    let mut lines = vec![format!(
        "{:<iw$}  {:<7}  {:>8}  {:>10}  Name",
        "Criterion",
        "Type",
        "Weight",
        "Normalized",
        iw = id_width
    )];
    for (criterion, weight) in criteria.iter().zip(&normalized) {
        lines.push(format!(
            "{:<iw$}  {:<7}  {:>8}  {:>10}  {}",
            criterion.id,
            criterion.kind.to_string(),
            format_weight(criterion.weight),
            format_score(*weight),
            criterion.name,
            iw = id_width
        ));
    }

    let total = total_weight(criteria);
    let total_line = format!("Total weight: {}", format_weight(total));
    lines.push(String::new());
    lines.push(if !use_colors {
        total_line
    } else if total == 0.0 {
        total_line.red().bold().to_string()
    } else {
        total_line.bold().to_string()
    });

    lines.join("\n")
}

/// Side-by-side SAW and SMART outcome, one line per candidate in input order
pub fn format_comparison(rows: &[MethodComparison], use_colors: bool) -> String {
    if rows.is_empty() {
        return EMPTY_RESULTS.to_string();
    }

    let name_width = rows
        .iter()
        .map(|r| r.candidate_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Candidate".len());

    let mut lines = vec![format!(
        "{:<nw$}  {:>8}  {:>9}  {:>10}  {:>11}",
        "Candidate",
        "SAW rank",
        "SAW score",
        "SMART rank",
        "SMART score",
        nw = name_width
    )];
    for row in rows {
        let line = format!(
            "{:<nw$}  {:>8}  {:>9}  {:>10}  {:>11}",
            row.candidate_name,
            format!("#{}", row.saw_rank),
            format_score(row.saw_score),
            format!("#{}", row.smart_rank),
            format_score(row.smart_score),
            nw = name_width
        );
        let agree = row.saw_rank == row.smart_rank;
        lines.push(if use_colors && !agree {
            line.cyan().to_string()
        } else {
            line
        });
    }
    lines.join("\n")
}
