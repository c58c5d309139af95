use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_yaml::Value;

use crate::parse;

/// A blog post and the categories it declares.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Post {
    /// Path of the post file as it was found.
    pub path: PathBuf,
    /// Categories listed in the front matter, in declared order. Always
    /// empty for drafts.
    pub categories: Vec<String>,
    pub draft: bool,
}

impl Post {
    pub fn new(path: impl Into<PathBuf>, categories: Vec<String>) -> Self {
        Post {
            path: path.into(),
            categories,
            draft: false,
        }
    }

    /// Read and parse a post file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {path:?}"))?;
        Post::parse(path, &text)
    }

    /// Build a post from its text contents.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Result<Self> {
        let path = path.into();
        let Some(header) = parse::front_matter(text) else {
            return Ok(Post::new(path, Vec::new()));
        };

        let front_matter = FrontMatter::parse(header)?;
        let draft = front_matter.is_draft();
        // Drafts are skipped before their categories are looked at, so a
        // draft with a malformed category list still loads.
        let categories = if draft {
            Vec::new()
        } else {
            front_matter.categories()?
        };

        Ok(Post {
            path,
            categories,
            draft,
        })
    }

    /// Short identifier for display, the file name without extension.
    pub fn name(&self) -> String {
        short_name(&self.path)
    }
}

pub fn short_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The front matter fields we care about.
#[derive(Clone, Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    categories: Value,
    #[serde(default)]
    draft: Value,
}

impl FrontMatter {
    fn parse(header: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(header)?;
        if !value.is_mapping() {
            bail!("front matter is not a mapping");
        }
        Ok(serde_yaml::from_value(value)?)
    }

    fn categories(self) -> Result<Vec<String>> {
        let field: Option<CategoryField> =
            serde_yaml::from_value(self.categories)?;
        Ok(field.map(Vec::from).unwrap_or_default())
    }

    fn is_draft(&self) -> bool {
        parse::is_truthy(&self.draft)
    }
}

/// A `categories` value as written, either a lone category or a list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    One(String),
    Many(Vec<String>),
}

impl From<CategoryField> for Vec<String> {
    fn from(field: CategoryField) -> Self {
        match field {
            CategoryField::One(category) => vec![category],
            CategoryField::Many(categories) => categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(text: &str) -> Vec<String> {
        Post::parse("posts/test.qmd", text).unwrap().categories
    }

    #[test]
    fn test_no_front_matter() {
        assert!(categories("Just some text").is_empty());
        assert!(categories("").is_empty());
        assert!(categories("---\ncategories: [A]\nnever closed").is_empty());
    }

    #[test]
    fn test_single_category() {
        assert_eq!(
            categories("---\ntitle: Post\ncategories: \"Solo\"\n---\nBody"),
            vec!["Solo"]
        );
        assert_eq!(categories("---\ncategories: Solo\n---\n"), vec!["Solo"]);
    }

    #[test]
    fn test_category_list() {
        assert_eq!(
            categories("---\ncategories: [\"A\", \"B\"]\n---\n"),
            vec!["A", "B"]
        );
        assert_eq!(
            categories("---\ncategories:\n  - Deep Learning\n  - AI\n---\n"),
            vec!["Deep Learning", "AI"]
        );
    }

    #[test]
    fn test_missing_categories() {
        assert!(categories("---\ntitle: Post\n---\n").is_empty());
        assert!(categories("---\ncategories:\n---\n").is_empty());
    }

    #[test]
    fn test_labels_kept_verbatim() {
        assert_eq!(
            categories("---\ncategories: [\" ai \", \"AI\", \"AI\"]\n---\n"),
            vec![" ai ", "AI", "AI"]
        );
    }

    #[test]
    fn test_drafts_have_no_categories() {
        let post = Post::parse(
            "posts/draft.qmd",
            "---\ncategories: [A, B]\ndraft: true\n---\n",
        )
        .unwrap();
        assert!(post.draft);
        assert!(post.categories.is_empty());

        let post = Post::parse(
            "posts/broken-draft.qmd",
            "---\ncategories: {a: b}\ndraft: true\n---\n",
        )
        .unwrap();
        assert!(post.draft);
        assert!(post.categories.is_empty());

        let post =
            Post::parse("posts/n.qmd", "---\ncategories: [A]\ndraft: n\n---\n")
                .unwrap();
        assert!(post.draft);
        assert!(post.categories.is_empty());

        let post = Post::parse(
            "posts/published.qmd",
            "---\ncategories: [A]\ndraft: false\n---\n",
        )
        .unwrap();
        assert!(!post.draft);
        assert_eq!(post.categories, vec!["A"]);
    }

    #[test]
    fn test_malformed_front_matter() {
        assert!(Post::parse("x.qmd", "---\ncategories: [A\n---\n").is_err());
        assert!(Post::parse("x.qmd", "---\n- a\n- b\n---\n").is_err());
        assert!(Post::parse("x.qmd", "------\n").is_err());
        assert!(Post::parse("x.qmd", "---\ncategories: {a: b}\n---\n").is_err());
    }

    #[test]
    fn test_name() {
        let post = Post::new("posts/2024/fourier-series.qmd", Vec::new());
        assert_eq!(post.name(), "fourier-series");
    }
}
