pub mod formatter;

pub use formatter::{
    format_comparison, format_json, format_result_table, format_score, format_tsv, format_weight,
    format_weights, format_winner, should_use_colors,
};
