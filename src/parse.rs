//! Parsing primitives

use lazy_regex::regex;
use serde_yaml::Value;

/// Delimiter that fences the front matter block at the start of a post.
pub const FENCE: &str = "---";

/// Return the raw front matter text of a post.
///
/// The text must open with the fence, the block runs up to the next fence
/// found after it. That fence doesn't need to be on a line of its own. Text
/// with no opening fence or with an unclosed block has no front matter.
pub fn front_matter(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(FENCE)?;
    let end = rest.find(FENCE)?;
    Some(&rest[..end])
}

/// Find all `#category=name` references in a chunk of text, in order of
/// appearance. Duplicates are kept.
pub fn category_references(text: &str) -> Vec<&str> {
    regex!(r#"#category=([^\s'"]+)"#)
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Strings that YAML 1.1 reads as boolean false.
const YAML_FALSE: &[&str] =
    &["false", "False", "FALSE", "no", "No", "NO", "off", "Off", "OFF"];

/// Whether a front matter value counts as set.
///
/// Strings spelling out a YAML 1.1 false value count as false so that
/// `draft: no` keeps working the way older YAML parsers read it. Only the
/// exact YAML 1.1 spellings match, `n` or `nO` are ordinary strings.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => {
            !(s.is_empty() || YAML_FALSE.contains(&s.as_str()))
        }
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}
