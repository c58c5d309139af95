use std::{
    fmt::Write,
    path::{Path, PathBuf},
};

use anyhow::{bail, Result};
use blog_categories::{export, read_posts, report, CategoryTable, Post};

use crate::SiteArgs;

/// Posts of a blog site, read in once and shared by all the reports.
pub struct Site {
    pub posts: Vec<Post>,
    pub table: CategoryTable,
    config: PathBuf,
}

impl Site {
    /// Distinct categories referenced by the site configuration.
    pub fn config_references(&self) -> Vec<String> {
        report::config_references(&self.config)
    }

    pub fn config_name(&self) -> String {
        self.config.display().to_string()
    }

    pub fn frequency_report(&self) -> Result<String> {
        report::frequency(&self.table, self.posts.len())
    }

    pub fn config_report(&self) -> Result<String> {
        report::config_check(
            &self.table,
            &self.config_references(),
            &self.config_name(),
        )
    }

    pub fn suggestion_report(&self) -> Result<String> {
        report::suggestions(&self.table)
    }

    /// All the reports in one. If `metadata_output` is given, category
    /// metadata is also written there before the closing hints.
    pub fn full_report(
        &self,
        metadata_output: Option<&Path>,
    ) -> Result<String> {
        let rule = "=".repeat(50);
        let mut out =
            format!("\n{rule}\n    BLOG CATEGORY MANAGER\n{rule}\n");

        out.push_str(&self.frequency_report()?);
        out.push_str(&self.config_report()?);
        out.push_str(&self.suggestion_report()?);

        if let Some(path) = metadata_output {
            export::write_metadata(&self.table, path)?;
            writeln!(out, "\nCategory metadata saved to {}", path.display())?;
        }

        writeln!(out, "\n{rule}")?;
        writeln!(out, "\nTo add new topics/categories:")?;
        writeln!(out, "  1. Use them in the front matter of a post")?;
        writeln!(out, "  2. They show up in the filter UI automatically")?;
        writeln!(
            out,
            "  3. Add main topics to the navbar in {}",
            self.config_name()
        )?;

        Ok(out)
    }
}

impl TryFrom<SiteArgs> for Site {
    type Error = anyhow::Error;

    fn try_from(value: SiteArgs) -> Result<Self> {
        let extension = value.extension.trim_start_matches('.');
        if extension.is_empty() {
            bail!("Post extension can't be empty");
        }

        let posts = read_posts(&value.posts_dir, extension);
        let table = CategoryTable::build(&posts);

        Ok(Site {
            posts,
            table,
            config: value.config,
        })
    }
}
