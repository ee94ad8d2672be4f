//! Output directory layout.
//!
//! ```text
//! <out>/
//! ├── index.html            # Links to every recipe page
//! └── recipes/
//!     ├── soup.html         # One page per CSV row, named by slug
//!     └── ...
//! ```
//!
//! Recipe pages live one level below the index, so every link between the
//! two is relative and the site works from any directory or file server.

use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";
pub const RECIPES_DIR: &str = "recipes";
pub const PAGE_EXTENSION: &str = "html";

/// Filesystem paths for one generated site.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn recipes_dir(&self) -> PathBuf {
        self.root.join(RECIPES_DIR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Page path for a slug. The extension is appended, never substituted,
    /// so dots inside the slug are kept.
    pub fn recipe_path(&self, slug: &str) -> PathBuf {
        self.recipes_dir().join(page_file_name(slug))
    }
}

fn page_file_name(slug: &str) -> String {
    format!("{slug}.{PAGE_EXTENSION}")
}

/// Link from the index to a recipe page.
pub fn recipe_href(slug: &str) -> String {
    format!("{RECIPES_DIR}/{}", page_file_name(slug))
}

/// Link from a recipe page back to the index.
pub fn index_href_from_recipe() -> String {
    format!("../{INDEX_FILE}")
}
