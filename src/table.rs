use std::{cmp::Reverse, path::PathBuf};

use derive_more::Deref;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{post::short_name, Post};

/// Usage record of a single category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRecord {
    pub count: usize,
    /// Posts listing the category, in the order they were read.
    pub posts: Vec<PathBuf>,
}

impl CategoryRecord {
    /// Record for a category that hasn't been seen yet.
    pub fn new() -> Self {
        CategoryRecord {
            count: 0,
            posts: Vec::new(),
        }
    }

    /// Short names of the contributing posts.
    pub fn post_names(&self) -> impl Iterator<Item = String> + '_ {
        self.posts.iter().map(|p| short_name(p))
    }
}

impl Default for CategoryRecord {
    fn default() -> Self {
        CategoryRecord::new()
    }
}

/// Category usage across a set of posts, in order of first appearance.
#[derive(Clone, Debug, Default, Deref)]
pub struct CategoryTable(IndexMap<String, CategoryRecord>);

impl CategoryTable {
    pub fn build<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Self {
        let mut table = CategoryTable::default();
        for post in posts {
            table.add(post);
        }
        table
    }

    /// Count a post toward every category it lists.
    ///
    /// Categories listed more than once in the same post are counted more
    /// than once.
    pub fn add(&mut self, post: &Post) {
        for category in &post.categories {
            let record = self
                .0
                .entry(category.clone())
                .or_insert_with(CategoryRecord::new);
            record.count += 1;
            record.posts.push(post.path.clone());
        }
    }

    pub fn count(&self, category: &str) -> usize {
        self.0.get(category).map_or(0, |r| r.count)
    }

    /// Total number of category assignments over all posts.
    pub fn total_assignments(&self) -> usize {
        self.0.values().map(|r| r.count).sum()
    }

    /// Entries from most to least used. Categories with equal counts stay
    /// in order of first appearance.
    pub fn sorted_by_count(&self) -> Vec<(&str, &CategoryRecord)> {
        let mut ret: Vec<_> =
            self.0.iter().map(|(k, v)| (k.as_str(), v)).collect();
        ret.sort_by_key(|(_, r)| Reverse(r.count));
        ret
    }

    pub fn most_used(&self) -> Option<(&str, &CategoryRecord)> {
        self.sorted_by_count().first().copied()
    }

    pub fn least_used(&self) -> Option<(&str, &CategoryRecord)> {
        self.sorted_by_count().last().copied()
    }

    /// Category metadata for export, with descriptions filled in from
    /// [`DESCRIPTIONS`].
    pub fn metadata(&self) -> IndexMap<String, CategoryInfo> {
        self.0
            .iter()
            .map(|(category, record)| {
                (
                    category.clone(),
                    CategoryInfo {
                        count: record.count,
                        posts: record
                            .posts
                            .iter()
                            .map(|p| p.display().to_string())
                            .collect(),
                        description: description(category).to_owned(),
                    },
                )
            })
            .collect()
    }
}

/// Exported summary of a category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub count: usize,
    pub posts: Vec<String>,
    pub description: String,
}

/// Human-written descriptions of well-known categories.
pub const DESCRIPTIONS: &[(&str, &str)] = &[
    ("Mathematics", "Pure and applied mathematical concepts"),
    ("AI", "Artificial Intelligence topics"),
    ("Machine Learning", "ML algorithms and applications"),
    ("Deep Learning", "Neural networks and deep architectures"),
    ("Philosophy", "Philosophical implications of technology"),
    ("History", "Historical perspectives on science and math"),
    ("Signal Processing", "Signals, systems, and transformations"),
];

/// Description of a category, empty if there is none.
pub fn description(category: &str) -> &'static str {
    DESCRIPTIONS
        .iter()
        .find(|(k, _)| *k == category)
        .map_or("", |(_, v)| *v)
}
