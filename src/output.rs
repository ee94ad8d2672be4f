//! CLI output formatting for the pipeline stages.
//!
//! Output is information-first: each recipe leads with its positional index
//! and title, with slug, counts and paths as indented context lines.
//!
//! # Output Format
//!
//! ## Load
//!
//! ```text
//! Recipes
//! 001 Tomato Soup
//!     Slug: soup
//!     3 ingredients, 2 steps, 2 tags
//!     A quick weeknight soup.
//! ```
//!
//! ## Generate
//!
//! ```text
//! Index → index.html
//! 001 Tomato Soup → recipes/soup.html
//!
//! Generated 1 recipe page
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::GenerateReport;
use crate::types::Recipe;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Path relative to the output root, with `/` separators for display.
fn display_relative(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ============================================================================
// Stage 1: Load output
// ============================================================================

pub fn format_load_output(recipes: &[Recipe]) -> Vec<String> {
    let mut lines = vec!["Recipes".to_string()];

    for (i, recipe) in recipes.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), recipe.title));
        lines.push(format!("    Slug: {}", recipe.slug));
        lines.push(format!(
            "    {}, {}, {}",
            plural(recipe.ingredients.len(), "ingredient"),
            plural(recipe.steps.len(), "step"),
            plural(recipe.tags.len(), "tag"),
        ));
        let desc = truncate_desc(recipe.description.trim(), 60);
        if !desc.is_empty() {
            lines.push(format!("    {}", desc));
        }
    }

    lines
}

pub fn print_load_output(recipes: &[Recipe]) {
    for line in format_load_output(recipes) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

pub fn format_generate_output(report: &GenerateReport, output_root: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "Index → {}",
        display_relative(&report.index, output_root)
    )];

    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            page.title,
            display_relative(&page.path, output_root)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}",
        plural(report.pages.len(), "recipe page")
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport, output_root: &Path) {
    for line in format_generate_output(report, output_root) {
        println!("{}", line);
    }
}
