//! HTML rendering for recipe pages and the index.
//!
//! Stages 2 and 3 of the pipeline. Each document type has a view model and
//! a single template function:
//!
//! | Document | View model | Template |
//! |----------|------------|----------|
//! | `recipes/<slug>.html` | [`RecipePage`] | [`render_recipe_page`] |
//! | `index.html` | [`IndexPage`] | [`render_index`] |
//!
//! ## Escaping
//!
//! Templates use [maud](https://maud.lambda.xyz/), which HTML-escapes every
//! interpolated expression. The only pre-escaped content is the static CSS
//! and the JSON-LD block. The latter can only be produced by
//! [`structured_data_json`], which escapes `<`, `>` and `&` as JSON `\u`
//! sequences, because the view model field is private.
//!
//! ## Structured Data
//!
//! Every recipe page embeds a schema.org `Recipe` as JSON-LD so importers
//! can read it without scraping the markup. Values are not HTML-escaped.
//! Besides normal JSON string escaping, `<`, `>` and `&` become `\u003c`,
//! `\u003e` and `\u0026`, so no recipe text can close the `<script>` or open
//! a `<!--` inside it. Parsers read the original characters back. Non-ASCII
//! text is written literally.

use crate::layout;
use crate::types::Recipe;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("JSON-LD serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shown for servings or total time when the recipe has none.
pub const PLACEHOLDER: &str = "—";

const RECIPE_CSS: &str = include_str!("../static/recipe.css");
const INDEX_CSS: &str = include_str!("../static/index.css");

// ============================================================================
// Structured data
// ============================================================================

/// schema.org `Recipe` in the shape importers expect.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeJsonLd<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub description: &'a str,
    pub recipe_yield: &'a str,
    pub total_time: &'a str,
    pub recipe_ingredient: &'a [String],
    pub recipe_instructions: Vec<HowToStep<'a>>,
    /// Tags joined with `", "`; empty when there are none.
    pub keywords: String,
}

#[derive(Debug, Serialize)]
pub struct HowToStep<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: &'a str,
}

impl<'a> RecipeJsonLd<'a> {
    pub fn new(recipe: &'a Recipe) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Recipe",
            name: &recipe.title,
            description: &recipe.description,
            recipe_yield: recipe.servings.as_deref().unwrap_or_default(),
            total_time: recipe.total_time_iso.as_deref().unwrap_or_default(),
            recipe_ingredient: &recipe.ingredients,
            recipe_instructions: recipe
                .steps
                .iter()
                .map(|step| HowToStep {
                    kind: "HowToStep",
                    text: step.as_str(),
                })
                .collect(),
            keywords: recipe.tags.join(", "),
        }
    }
}

/// Pretty-printed JSON-LD, safe to place inside a `<script>` element.
///
/// `<`, `>` and `&` only occur inside JSON strings, where they are written
/// as `\u003c`, `\u003e` and `\u0026`. The HTML tokenizer then never sees
/// a tag, comment opener or character reference in the block.
pub fn structured_data_json(recipe: &Recipe) -> Result<String, RenderError> {
    let json = serde_json::to_string_pretty(&RecipeJsonLd::new(recipe))?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

// ============================================================================
// View models
// ============================================================================

/// Everything the recipe template shows, with placeholders resolved.
#[derive(Debug)]
pub struct RecipePage<'a> {
    title: &'a str,
    description: &'a str,
    servings: &'a str,
    total_time: &'a str,
    tags: &'a [String],
    ingredients: &'a [String],
    steps: &'a [String],
    structured_data: String,
    back_href: String,
}

impl<'a> RecipePage<'a> {
    pub fn new(recipe: &'a Recipe) -> Result<Self, RenderError> {
        Ok(Self {
            title: &recipe.title,
            description: &recipe.description,
            servings: recipe.servings.as_deref().unwrap_or(PLACEHOLDER),
            total_time: recipe.total_time_iso.as_deref().unwrap_or(PLACEHOLDER),
            tags: &recipe.tags,
            ingredients: &recipe.ingredients,
            steps: &recipe.steps,
            structured_data: structured_data_json(recipe)?,
            back_href: layout::index_href_from_recipe(),
        })
    }
}

#[derive(Debug)]
pub struct IndexEntry<'a> {
    pub href: String,
    pub title: &'a str,
}

/// One link per recipe, in input order.
#[derive(Debug)]
pub struct IndexPage<'a> {
    pub entries: Vec<IndexEntry<'a>>,
}

impl<'a> IndexPage<'a> {
    pub fn new(recipes: &'a [Recipe]) -> Self {
        Self {
            entries: recipes
                .iter()
                .map(|r| IndexEntry {
                    href: layout::recipe_href(&r.slug),
                    title: &r.title,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Templates
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, head_extra: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                (head_extra)
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders a single recipe page
pub fn render_recipe_page(page: &RecipePage) -> Markup {
    let head = html! {
        script type="application/ld+json" {
            "\n" (PreEscaped(&page.structured_data)) "\n"
        }
    };

    let content = html! {
        a href=(page.back_href) { "← All recipes" }
        h1 { (page.title) }
        p.desc { (page.description) }
        div.meta {
            "Servings: " (page.servings) " · Total time: " (page.total_time)
        }
        @if !page.tags.is_empty() {
            div.tags {
                @for tag in page.tags {
                    span.tag { (tag) }
                }
            }
        }

        h2.section-title { "Ingredients" }
        div.card {
            ul {
                @for ingredient in page.ingredients {
                    li { (ingredient) }
                }
            }
        }

        h2.section-title { "Steps" }
        div.card {
            ol {
                @for step in page.steps {
                    li { (step) }
                }
            }
        }
    };

    base_document(page.title, RECIPE_CSS, head, content)
}

/// Renders the index page listing every recipe
pub fn render_index(page: &IndexPage) -> Markup {
    let content = html! {
        h1 { "Recipes" }
        p { "Open each recipe and use your device's Share menu to import into Körbchen." }
        ul {
            @for entry in &page.entries {
                li {
                    a href=(entry.href) { (entry.title) }
                }
            }
        }
    };

    base_document("Recipe Index", INDEX_CSS, html! {}, content)
}

/// Full HTML text for one recipe page.
pub fn recipe_document(recipe: &Recipe) -> Result<String, RenderError> {
    let page = RecipePage::new(recipe)?;
    Ok(render_recipe_page(&page).into_string())
}

/// Full HTML text for the index page.
pub fn index_document(recipes: &[Recipe]) -> String {
    render_index(&IndexPage::new(recipes)).into_string()
}

// ============================================================================
// Tests
// ============================================================================
