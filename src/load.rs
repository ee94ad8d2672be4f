//! CSV loading.
//!
//! Stage 1 of the pipeline. Reads the recipe CSV and produces the ordered
//! list of [`Recipe`]s that the render stage consumes.
//!
//! ## Input Format
//!
//! A header row is required. Column names are a fixed contract:
//!
//! ```text
//! slug,title,description,servings,total_time_iso,ingredients_pipe_separated,steps_pipe_separated,tags_comma_separated
//! soup,Tomato Soup,,4,PT30M,tomato | salt | water,Boil water|Add tomato,"easy, vegan"
//! ```
//!
//! Only `slug` and `title` are required. Rows shorter than the header read
//! the missing trailing cells as absent; extra cells are ignored. A leading
//! UTF-8 BOM is skipped.
//!
//! Quoting is lenient: an unterminated quote runs to the end of the input
//! and becomes one cell. Invalid UTF-8 is a [`LoadError::Csv`].
//!
//! ## Validation
//!
//! Loading is fail-fast. The first offending row aborts the whole load, so
//! nothing downstream ever runs on a partial list:
//! - `slug` or `title` absent or blank
//! - Slug that would escape the output directory (see [`fields::check_slug`])
//! - Slug already used by an earlier row

use crate::fields;
use crate::types::{Recipe, RecipeRow};
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: missing required field `{field}`")]
    MissingField { field: &'static str, row: usize },
    #[error("row {row}: slug {slug:?} {reason}")]
    InvalidSlug {
        slug: String,
        row: usize,
        reason: &'static str,
    },
    #[error("row {row}: duplicate slug {slug:?} (first used on row {first_row})")]
    DuplicateSlug {
        slug: String,
        first_row: usize,
        row: usize,
    },
}

/// Load every recipe from the CSV file at `path`, in file order.
pub fn load(path: &Path) -> Result<Vec<Recipe>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loading recipes from {}", path.display());
    load_from_reader(file)
}

/// Load recipes from any CSV source. Row numbers in errors are 1-based and
/// count data rows only (the header is not row 1).
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Recipe>, LoadError> {
    let mut rows = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut recipes = Vec::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (idx, result) in rows.deserialize::<RecipeRow>().enumerate() {
        let row = idx + 1;
        let raw = result?;
        let recipe = Recipe::from_row(raw).map_err(|missing| LoadError::MissingField {
            field: missing.0,
            row,
        })?;

        fields::check_slug(&recipe.slug).map_err(|reason| LoadError::InvalidSlug {
            slug: recipe.slug.clone(),
            row,
            reason,
        })?;

        if let Some(&first_row) = first_seen.get(&recipe.slug) {
            return Err(LoadError::DuplicateSlug {
                slug: recipe.slug,
                first_row,
                row,
            });
        }
        first_seen.insert(recipe.slug.clone(), row);

        debug!(
            "row {row}: {} ({} ingredients, {} steps, {} tags)",
            recipe.slug,
            recipe.ingredients.len(),
            recipe.steps.len(),
            recipe.tags.len()
        );
        recipes.push(recipe);
    }

    Ok(recipes)
}
