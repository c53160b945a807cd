use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, save_config, Dataset};
use crate::model::CalculationMethod;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

fn parse_method(input: &str) -> Result<CalculationMethod, String> {
    CalculationMethod::from_str(input, true)
        .map_err(|_| format!("unknown method '{}', expected SAW or SMART", input))
}

/// Write a starter dataset file.
///
/// With `force` the demo dataset is written without asking, replacing
/// any existing file. Otherwise the user picks the default method, whether
/// to start from the demo data, and confirms an overwrite.
///
/// Returns the path written, or None if the user declined.
pub fn run_init(path: Option<PathBuf>, force: bool) -> Result<Option<PathBuf>> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if force {
        save_config(&config_path, &Dataset::demo())?;
        return Ok(Some(config_path));
    }

    println!();
    println!("spk-rank dataset setup");
    println!("======================");
    println!();

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            println!("Keeping existing dataset.");
            return Ok(None);
        }
    }

    println!("SAW divides by the best value (benefit: x / max, cost: min / x).");
    println!("SMART rescales each criterion linearly between its worst and best value.");
    let method = loop {
        let input = prompt_with_default("Default method (SAW/SMART)", "SAW")?;
        match parse_method(&input) {
            Ok(m) => break m,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    println!();
    let use_demo = prompt_yes_no(
        "Start from the demo scholarship dataset (5 criteria, 5 candidates)?",
        true,
    )?;

    let dataset = if use_demo {
        Dataset {
            method: Some(method),
            ..Dataset::demo()
        }
    } else {
        Dataset {
            method: Some(method),
            ..Dataset::default()
        }
    };

    save_config(&config_path, &dataset)?;
    println!();
    println!("Dataset written to {}", config_path.display());
    if !use_demo {
        println!("Add criteria and candidates to it, then run `spk-rank rank`.");
    }

    Ok(Some(config_path))
}
