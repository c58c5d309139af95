use std::collections::{BTreeMap, BTreeSet};

/// Collect sets of suspiciously similar category names.
///
/// Names that only differ by case or surrounding whitespace always match,
/// longer names also match when they're within a small edit distance of
/// each other. Each returned group is sorted and the groups are ordered by
/// the length of their first member.
pub fn similar_categories<'a>(
    categories: impl IntoIterator<Item = &'a str>,
) -> Vec<Vec<String>> {
    let categories: BTreeSet<&str> = categories.into_iter().collect();
    let categories: Vec<&str> = categories.into_iter().collect();

    let mut typos: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (i, &a) in categories.iter().enumerate() {
        for &b in categories.iter().skip(i + 1) {
            if is_similar(a, b) {
                typos.entry(a).or_default().push(b);
                typos.entry(b).or_default().push(a);
            }
        }
    }

    // Deduplicate.
    let typos: BTreeSet<Vec<String>> = typos
        .into_iter()
        .map(|(k, mut v)| {
            v.push(k);
            v.sort();
            v.into_iter().map(String::from).collect()
        })
        .collect();

    let mut typos: Vec<Vec<String>> = typos.into_iter().collect();
    typos.sort_by_key(|v| v[0].len());
    typos
}

fn is_similar(a: &str, b: &str) -> bool {
    if a.trim().to_lowercase() == b.trim().to_lowercase() {
        return true;
    }

    // Edit distance is useless for very short names.
    if a.len() <= 4 || b.len() <= 4 {
        return false;
    }
    let distance = levenshtein::levenshtein(a, b);
    let threshold = match a.len() + b.len() {
        x if x < 16 => 1,
        _ => 2,
    };
    distance <= threshold && distance > 0
}
