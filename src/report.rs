//! Text reports over a category table.

use std::{fmt::Write, fs, path::Path};

use anyhow::Result;
use itertools::Itertools;

use crate::{parse, CategoryTable};

/// Categories used in at least this many posts are main categories, the
/// rest are tags.
pub const MAIN_THRESHOLD: usize = 2;

/// Themed category groups, a category joins a group if it contains any of
/// the group's keywords.
pub const GROUPS: &[(&str, &[&str])] = &[
    ("Mathematics", &["Math", "Algebra", "Calculus"]),
    ("AI/ML", &["AI", "Learning", "Neural"]),
];

const RULE_WIDTH: usize = 50;

/// Section header with a rule under it.
pub fn header(title: &str) -> String {
    format!("\n{title}\n{}\n", "=".repeat(RULE_WIDTH))
}

/// Usage counts of all categories, most used first.
///
/// `post_count` is the number of posts read, including ones that had no
/// categories.
pub fn frequency(table: &CategoryTable, post_count: usize) -> Result<String> {
    let mut out = header("CATEGORY ANALYSIS");

    let (Some(most), Some(least)) = (table.most_used(), table.least_used())
    else {
        writeln!(out, "No categories found in posts!")?;
        return Ok(out);
    };

    writeln!(
        out,
        "\nFound {} unique categories across {} posts:\n",
        table.len(),
        post_count
    )?;

    writeln!(out, "{:<28} | Posts | Used In", "Category")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for (category, record) in table.sorted_by_count() {
        let mut used_in = record.post_names().take(2).join(", ");
        if record.posts.len() > 2 {
            write!(used_in, ", ... (+{} more)", record.posts.len() - 2)?;
        }
        writeln!(out, "{category:<28} | {:^5} | {used_in}", record.count)?;
    }

    writeln!(out, "\nSTATISTICS:")?;
    writeln!(out, "  - Total unique categories: {}", table.len())?;
    writeln!(
        out,
        "  - Average categories per post: {:.1}",
        table.total_assignments() as f64 / post_count.max(1) as f64
    )?;
    writeln!(
        out,
        "  - Most used category: {} ({} posts)",
        most.0, most.1.count
    )?;
    if table.len() > 1 {
        writeln!(
            out,
            "  - Least used category: {} ({} posts)",
            least.0, least.1.count
        )?;
    }

    Ok(out)
}

/// Read the distinct `#category=` references from a site configuration
/// file. A missing or unreadable file has no references.
pub fn config_references(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => parse::category_references(&text)
            .into_iter()
            .unique()
            .map(String::from)
            .collect(),
        Err(e) => {
            log::debug!("config_references: can't read {path:?}: {e}");
            Vec::new()
        }
    }
}

/// Whether each category referenced in the configuration is used by posts.
pub fn config_check(
    table: &CategoryTable,
    references: &[String],
    config_name: &str,
) -> Result<String> {
    let mut out = header("CONFIGURATION CHECK");

    if !references.is_empty() {
        writeln!(out, "\nCategories referenced in {config_name}:")?;
        for category in references {
            let status = if table.contains_key(category) {
                "used"
            } else {
                "NOT USED in any posts"
            };
            writeln!(out, "  - {category}: {status}")?;
        }
    }

    writeln!(out, "\nTIP: Categories are dynamically populated from posts.")?;
    writeln!(out, "     Only categories with actual posts appear in filters.")?;

    Ok(out)
}

/// Proposed split of categories into main categories, tags and themed
/// groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Suggestion<'a> {
    /// Frequently used categories with counts, alphabetical.
    pub main: Vec<(&'a str, usize)>,
    /// Rarely used categories with counts, alphabetical.
    pub tags: Vec<(&'a str, usize)>,
    /// Nonempty themed groups, members in table order.
    pub groups: Vec<(&'static str, Vec<&'a str>)>,
}

impl<'a> Suggestion<'a> {
    pub fn new(table: &'a CategoryTable) -> Self {
        let (main, tags): (Vec<_>, Vec<_>) = table
            .iter()
            .map(|(k, r)| (k.as_str(), r.count))
            .sorted()
            .partition(|(_, n)| *n >= MAIN_THRESHOLD);

        let groups = GROUPS
            .iter()
            .filter_map(|(name, keywords)| {
                let members: Vec<&str> = table
                    .keys()
                    .map(|k| k.as_str())
                    .filter(|k| keywords.iter().any(|w| k.contains(w)))
                    .collect();
                (!members.is_empty()).then_some((*name, members))
            })
            .collect();

        Suggestion { main, tags, groups }
    }
}

pub fn suggestions(table: &CategoryTable) -> Result<String> {
    let suggestion = Suggestion::new(table);
    let mut out = header("CATEGORY SUGGESTIONS");

    writeln!(out, "\nSuggested category organization:\n")?;
    writeln!(out, "MAIN CATEGORIES (used frequently):")?;
    for (category, n) in &suggestion.main {
        writeln!(out, "  - {category} ({n} posts)")?;
    }

    if !suggestion.tags.is_empty() {
        writeln!(out, "\nTAGS (used sparingly, consider consolidating):")?;
        for (category, n) in &suggestion.tags {
            writeln!(out, "  - {category} ({n} post)")?;
        }
    }

    writeln!(out, "\nSuggested category groups:")?;
    for (name, members) in &suggestion.groups {
        writeln!(out, "  {name} Group: {}", members.join(", "))?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Post;

    fn table(posts: &[(&str, &[&str])]) -> CategoryTable {
        let posts: Vec<Post> = posts
            .iter()
            .map(|(path, cats)| {
                Post::new(*path, cats.iter().map(|s| s.to_string()).collect())
            })
            .collect();
        CategoryTable::build(&posts)
    }

    #[test]
    fn test_frequency() {
        let t = table(&[
            ("posts/a.qmd", &["Math"]),
            ("posts/b.qmd", &["Math", "AI"]),
            ("posts/c.qmd", &["Math"]),
        ]);
        let report = frequency(&t, 4).unwrap();

        assert!(report.contains("Found 2 unique categories across 4 posts"));
        assert!(report.contains(&format!(
            "{:<28} |   3   | a, b, ... (+1 more)",
            "Math"
        )));
        assert!(report.contains(&format!("{:<28} |   1   | b\n", "AI")));
        assert!(report.contains("Average categories per post: 1.0"));
        assert!(report.contains("Most used category: Math (3 posts)"));
        assert!(report.contains("Least used category: AI (1 posts)"));
    }

    #[test]
    fn test_frequency_single_category() {
        let t = table(&[("posts/a.qmd", &["Solo"])]);
        let report = frequency(&t, 1).unwrap();
        assert!(report.contains("Most used category: Solo (1 posts)"));
        assert!(!report.contains("Least used"));
    }

    #[test]
    fn test_frequency_empty() {
        let report = frequency(&CategoryTable::default(), 3).unwrap();
        assert!(report.contains("No categories found in posts!"));
        assert!(!report.contains("STATISTICS"));
    }

    #[test]
    fn test_config_references() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_quarto.yml");
        fs::write(
            &path,
            "menu:\n  - href: \"index.qmd#category=AI\"\n  \
             - href: index.qmd#category=Poetry\n  \
             - href: index.qmd#category=AI\n",
        )
        .unwrap();

        assert_eq!(config_references(&path), vec!["AI", "Poetry"]);
        assert!(config_references(dir.path().join("missing.yml")).is_empty());
    }

    #[test]
    fn test_config_check() {
        let t = table(&[("posts/a.qmd", &["AI"])]);
        let references = vec!["AI".to_string(), "Poetry".to_string()];
        let report = config_check(&t, &references, "_quarto.yml").unwrap();
        assert!(report.contains("Categories referenced in _quarto.yml"));
        assert!(report.contains("  - AI: used\n"));
        assert!(report.contains("  - Poetry: NOT USED in any posts\n"));

        let report = config_check(&t, &[], "_quarto.yml").unwrap();
        assert!(!report.contains("referenced"));
        assert!(report.contains("TIP"));
    }

    #[test]
    fn test_suggestion_tiers() {
        let t = table(&[
            ("1.qmd", &["Z", "Y", "X"]),
            ("2.qmd", &["Z", "Y"]),
            ("3.qmd", &["Z"]),
        ]);
        let s = Suggestion::new(&t);
        assert_eq!(s.main, vec![("Y", 2), ("Z", 3)]);
        assert_eq!(s.tags, vec![("X", 1)]);
        assert!(s.groups.is_empty());
    }

    #[test]
    fn test_suggestion_groups() {
        let t = table(&[
            ("1.qmd", &["Linear Algebra", "Deep Learning", "History"]),
            ("2.qmd", &["Mathematics", "AI"]),
        ]);
        let s = Suggestion::new(&t);
        assert_eq!(
            s.groups,
            vec![
                ("Mathematics", vec!["Linear Algebra", "Mathematics"]),
                ("AI/ML", vec!["Deep Learning", "AI"]),
            ]
        );

        let report = suggestions(&t).unwrap();
        assert!(report
            .contains("  Mathematics Group: Linear Algebra, Mathematics\n"));
        assert!(report.contains("  AI/ML Group: Deep Learning, AI\n"));
        assert!(report.contains("  - History (1 post)\n"));
    }
}
