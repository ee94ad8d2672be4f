//! Site generation.
//!
//! Writes one page per recipe, then the index. Takes the already loaded
//! recipe list, so a bad CSV row can never leave a half-written site.
//!
//! ## Output Structure
//!
//! ```text
//! out/
//! ├── index.html                 # Links to every recipe, input order
//! └── recipes/
//!     ├── soup.html
//!     └── creme-brulee.html
//! ```
//!
//! Existing files in `out/` that are not generated pages are left alone;
//! generated pages are overwritten unconditionally.
//!
//! ## Failure Behavior
//!
//! Writes are neither atomic nor transactional. If a page write fails, the
//! pages written before it stay on disk and the index is not written (or an
//! older one remains). [`GenerateError::Write`] reports how many pages made
//! it to disk first.

use crate::layout::SiteLayout;
use crate::load::{self, LoadError};
use crate::render::{self, RenderError};
use crate::types::Recipe;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to render {slug}: {source}")]
    Render { slug: String, source: RenderError },
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {} after {written} recipe pages: {source}", .path.display())]
    Write {
        path: PathBuf,
        written: usize,
        source: std::io::Error,
    },
}

/// A recipe page that was written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub slug: String,
    pub title: String,
    pub path: PathBuf,
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    pub index: PathBuf,
}

/// Load the CSV at `csv_path` and generate the site into `output_dir`.
///
/// Nothing is written unless every row loads.
pub fn build(csv_path: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let recipes = load::load(csv_path)?;
    generate(&recipes, &SiteLayout::new(output_dir))
}

/// Write every recipe page in order, then the index.
pub fn generate(recipes: &[Recipe], layout: &SiteLayout) -> Result<GenerateReport, GenerateError> {
    let recipes_dir = layout.recipes_dir();
    fs::create_dir_all(&recipes_dir).map_err(|source| GenerateError::CreateDir {
        path: recipes_dir.clone(),
        source,
    })?;

    let mut pages = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        let html = render::recipe_document(recipe).map_err(|source| GenerateError::Render {
            slug: recipe.slug.clone(),
            source,
        })?;
        let path = layout.recipe_path(&recipe.slug);
        write_page(&path, &html, pages.len())?;
        info!("wrote {}", path.display());

        pages.push(GeneratedPage {
            slug: recipe.slug.clone(),
            title: recipe.title.clone(),
            path,
        });
    }

    // Only reached once every page above is on disk.
    let index = layout.index_path();
    write_page(&index, &render::index_document(recipes), pages.len())?;
    info!("wrote {} ({} links)", index.display(), recipes.len());

    Ok(GenerateReport { pages, index })
}

fn write_page(path: &Path, html: &str, written: usize) -> Result<(), GenerateError> {
    fs::write(path, html).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        written,
        source,
    })
}
