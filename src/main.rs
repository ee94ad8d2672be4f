use clap::Parser;
use recipe_site::layout::SiteLayout;
use recipe_site::{generate, load, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "recipe-site")]
#[command(version)]
#[command(about = "Generate a static recipe mini-site from a CSV file")]
#[command(long_about = "\
Generate a static recipe mini-site from a CSV file

Every CSV row becomes one HTML page with embedded schema.org JSON-LD, so the
pages can be shared or bulk-imported into a recipe app. An index page links
to all of them.

CSV columns (header row required):

  slug                        # Required, page filename stem
  title                       # Required
  description
  servings
  total_time_iso              # ISO-8601 duration, e.g. PT30M
  ingredients_pipe_separated  # tomato | salt | water
  steps_pipe_separated        # Boil water | Add tomato
  tags_comma_separated        # easy, vegan

Output:

  <out>/index.html
  <out>/recipes/<slug>.html

Set RUST_LOG=debug for per-row diagnostics.")]
struct Cli {
    /// Path to the recipes CSV
    #[arg(long)]
    csv: PathBuf,

    /// Output site directory
    #[arg(long)]
    out: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    println!("==> Loading {}", cli.csv.display());
    let recipes = load::load(&cli.csv)?;
    output::print_load_output(&recipes);

    println!("==> Generating HTML → {}", cli.out.display());
    let layout = SiteLayout::new(&cli.out);
    let report = generate::generate(&recipes, &layout)?;
    output::print_generate_output(&report, layout.root());

    println!("==> Site complete: {}", cli.out.display());
    Ok(())
}
