//! Shared test utilities for the recipe-site test suite.
//!
//! Provides recipe builders, fixture setup, and small extractors that pull
//! list items, index links and the JSON-LD block out of rendered HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = recipe_document(&soup()).unwrap();
//! assert_eq!(list_items(&html, "ol"), vec!["Boil water", "Add tomato"]);
//! assert_eq!(json_ld(&html)["name"], "Tomato Soup");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::Recipe;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

// =========================================================================
// Recipe builders
// =========================================================================

/// A recipe with only the required fields set.
pub fn recipe(slug: &str, title: &str) -> Recipe {
    Recipe {
        slug: slug.to_string(),
        title: title.to_string(),
        description: String::new(),
        servings: None,
        total_time_iso: None,
        ingredients: vec![],
        steps: vec![],
        tags: vec![],
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The tomato soup example row, fully split.
pub fn soup() -> Recipe {
    Recipe {
        servings: Some("4".to_string()),
        ingredients: strings(&["tomato", "salt", "water"]),
        steps: strings(&["Boil water", "Add tomato"]),
        tags: strings(&["easy", "vegan"]),
        ..recipe("soup", "Tomato Soup")
    }
}

/// Markup-looking text in every field.
pub fn hostile() -> Recipe {
    Recipe {
        description: "Cheese & <i>crackers</i>".to_string(),
        servings: Some("2 & more".to_string()),
        total_time_iso: Some("<PT5M>".to_string()),
        ingredients: strings(&["<b>bold</b> salt", "pepper"]),
        steps: strings(&["heat > 100 & stir", "serve"]),
        tags: strings(&["<script>", "a&b"]),
        ..recipe("tj", "Tom & Jerry <3")
    }
}

/// Find a recipe by slug. Panics if not found.
pub fn find_recipe<'a>(recipes: &'a [Recipe], slug: &str) -> &'a Recipe {
    recipes.iter().find(|r| r.slug == slug).unwrap_or_else(|| {
        panic!("recipe '{slug}' not found. Available: {:?}", slugs(recipes))
    })
}

/// All slugs in order.
pub fn slugs(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.slug.as_str()).collect()
}

// =========================================================================
// HTML extractors
// =========================================================================

/// Inner HTML between the first `open` and the following `close`.
fn between<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
    let start = html
        .find(open)
        .unwrap_or_else(|| panic!("'{open}' not found"))
        + open.len();
    let end = html[start..]
        .find(close)
        .unwrap_or_else(|| panic!("'{close}' not found after '{open}'"))
        + start;
    &html[start..end]
}

/// Everything inside `<body>`.
pub fn body_of(html: &str) -> &str {
    between(html, "<body>", "</body>")
}

/// `<li>` contents (still HTML-escaped) of the first `<ul>` or `<ol>`.
pub fn list_items<'a>(html: &'a str, list_tag: &str) -> Vec<&'a str> {
    let list = between(html, &format!("<{list_tag}>"), &format!("</{list_tag}>"));
    list.split("</li>")
        .filter_map(|part| part.strip_prefix("<li>"))
        .collect()
}

/// `(href, text)` for every link on the index page.
pub fn index_links(html: &str) -> Vec<(String, String)> {
    let list = between(html, "<ul>", "</ul>");
    list.split("</a>")
        .filter_map(|part| part.split_once("<a href=\""))
        .map(|(_, rest)| {
            let (href, text) = rest.split_once("\">").unwrap();
            (href.to_string(), text.to_string())
        })
        .collect()
}

/// Parse the JSON-LD block.
pub fn json_ld(html: &str) -> serde_json::Value {
    let raw = between(html, r#"<script type="application/ld+json">"#, "</script>");
    serde_json::from_str(raw).unwrap()
}

/// Step texts from parsed JSON-LD, in order.
pub fn json_ld_steps(data: &serde_json::Value) -> Vec<String> {
    data["recipeInstructions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["text"].as_str().unwrap().to_string())
        .collect()
}
