//! # Recipe Site
//!
//! Turns a CSV list of recipes into a static mini-site: one HTML page per
//! recipe plus an index linking to all of them. Each page embeds a
//! schema.org `Recipe` as JSON-LD, so the site can be shared or opened on a
//! phone and bulk-imported into a recipe app.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Load      recipes.csv  →  Vec<Recipe>             (rows → records)
//! 2. Render    Recipe       →  out/recipes/<slug>.html (one per record)
//! 3. Index     [Recipe]     →  out/index.html          (after all pages)
//! ```
//!
//! The whole CSV is loaded and validated before anything is written, so a
//! bad row never produces partial output. Pages are written in input order
//! and the index last, so it never links to a page that failed to write.
//! Everything runs on one thread.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The [`types::Recipe`] record and raw CSV row |
//! | [`fields`] | Cell parsing: list splitting, blank detection, slug checks |
//! | [`load`] | Stage 1: reads the CSV into records, fail-fast |
//! | [`layout`] | Output paths and relative links |
//! | [`render`] | Stages 2 and 3: view models, Maud templates, JSON-LD |
//! | [`generate`] | Writes pages then the index; [`generate::build`] runs everything |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over String Templates
//!
//! HTML is produced with [Maud](https://maud.lambda.xyz/). Every interpolated
//! value is escaped, so recipe text containing `<`, `>` or `&` cannot inject
//! markup. The only raw insertions are the embedded stylesheet and the
//! JSON-LD block. Inside the block, `<`, `>` and `&` are written as the JSON
//! escapes `\u003c`, `\u003e` and `\u0026`, so recipe text cannot end the
//! `<script>` element or open a comment in it.
//!
//! ## Reject Instead of Overwrite
//!
//! Duplicate slugs and slugs that look like paths (`../x`, `a/b`) are load
//! errors. A later duplicate would otherwise silently replace an earlier
//! page, and a path-like slug would write outside `recipes/`.

pub mod fields;
pub mod generate;
pub mod layout;
pub mod load;
pub mod output;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
