//! The recipe record shared by every pipeline stage.
//!
//! A [`Recipe`] is built once by the loader from a raw CSV row and is only
//! borrowed afterwards. Optional columns are resolved here, at construction
//! time, so renderers never deal with missing values beyond the explicit
//! `Option`s for servings and total time.

use crate::fields::{self, LIST_SEPARATOR, TAG_SEPARATOR};
use serde::Deserialize;

/// One CSV row as read from disk, before any default resolution.
///
/// Column names are a fixed contract with the input file. Every column is
/// optional at this level: absent columns, short rows and empty cells all
/// deserialize as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeRow {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub servings: Option<String>,
    pub total_time_iso: Option<String>,
    pub ingredients_pipe_separated: Option<String>,
    pub steps_pipe_separated: Option<String>,
    pub tags_comma_separated: Option<String>,
}

/// A required column was absent or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(pub &'static str);

/// A recipe ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Output filename stem and index link target.
    pub slug: String,
    pub title: String,
    /// Empty when the row has no description.
    pub description: String,
    /// `None` renders as an em-dash placeholder.
    pub servings: Option<String>,
    /// ISO-8601 duration, not validated. `None` renders as an em-dash.
    pub total_time_iso: Option<String>,
    pub ingredients: Vec<String>,
    /// Cooking sequence; order is meaningful.
    pub steps: Vec<String>,
    pub tags: Vec<String>,
}

impl Recipe {
    /// Resolve a raw row into a record.
    ///
    /// `slug` and `title` are required; blank values count as missing.
    /// Multi-value columns are split with [`fields::split_list`].
    pub fn from_row(row: RecipeRow) -> Result<Self, MissingField> {
        let slug = fields::non_blank(row.slug).ok_or(MissingField("slug"))?;
        let title = fields::non_blank(row.title).ok_or(MissingField("title"))?;

        Ok(Self {
            slug,
            title,
            description: row.description.unwrap_or_default(),
            servings: fields::non_blank(row.servings),
            total_time_iso: fields::non_blank(row.total_time_iso),
            ingredients: split_column(row.ingredients_pipe_separated, LIST_SEPARATOR),
            steps: split_column(row.steps_pipe_separated, LIST_SEPARATOR),
            tags: split_column(row.tags_comma_separated, TAG_SEPARATOR),
        })
    }
}

fn split_column(raw: Option<String>, separator: char) -> Vec<String> {
    raw.as_deref()
        .map(|s| fields::split_list(s, separator))
        .unwrap_or_default()
}
