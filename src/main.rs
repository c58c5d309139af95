use std::path::PathBuf;

use anyhow::Result;
use blog_categories::{export, lint::similar_categories};
use clap::{Args, Parser, Subcommand};

mod list;
mod site;
use site::Site;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    site: SiteArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show how many posts use each category.
    Analyze,

    /// Check categories referenced in the site configuration against the
    /// ones used in posts.
    Check,

    /// Suggest main categories, tags and category groups.
    Suggest,

    /// Print the full report and write category metadata to a JSON file.
    Generate {
        /// Output file path.
        #[arg(short, long, default_value = export::METADATA_FILE)]
        output: PathBuf,
    },

    /// List all categories used in posts.
    List {
        /// Show usage counts, most used first.
        #[arg(short = 'f', long, default_value_t = false)]
        histogram: bool,

        /// Print a CSV table of categories, counts and posts.
        #[arg(long, default_value_t = false)]
        csv: bool,
    },

    /// Look for suspiciously similar categories.
    Lint,
}

use Commands::*;

/// Where to find the blog content.
#[derive(Debug, Args, Clone)]
pub struct SiteArgs {
    /// Directory that contains the posts.
    #[arg(long, global = true, default_value = "posts")]
    posts_dir: PathBuf,

    /// Site configuration file that may reference categories with
    /// `#category=name` links.
    #[arg(long, global = true, default_value = "_quarto.yml")]
    config: PathBuf,

    /// File extension of post files.
    #[arg(long, global = true, default_value = "qmd")]
    extension: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let site = Site::try_from(cli.site)?;

    match cli.command {
        None => {
            print!("{}", site.full_report(None)?);
            Ok(())
        }
        Some(Generate { output }) => {
            print!("{}", site.full_report(Some(&output))?);
            Ok(())
        }
        Some(Analyze) => {
            print!("{}", site.frequency_report()?);
            Ok(())
        }
        Some(Check) => {
            print!("{}", site.config_report()?);
            Ok(())
        }
        Some(Suggest) => {
            print!("{}", site.suggestion_report()?);
            Ok(())
        }
        Some(List { histogram, csv }) => list::run(&site, histogram, csv),
        Some(Lint) => {
            let groups =
                similar_categories(site.table.keys().map(|k| k.as_str()));
            for group in &groups {
                println!("{}", group.join(" | "));
            }
            log::info!("Found {} groups of similar categories", groups.len());
            Ok(())
        }
    }
}
