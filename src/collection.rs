use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::Post;

/// Path fragments that mark template and example content, which is never
/// counted as a post.
pub const SKIP_MARKERS: &[&str] = &["TEMPLATE", "EXAMPLE"];

/// Find post files with the given extension under `root`.
///
/// Files whose name starts with an underscore and files in or under
/// template and example directories are skipped. Results come in file name
/// order.
pub fn find_posts(root: impl AsRef<Path>, extension: &str) -> Vec<PathBuf> {
    let root = root.as_ref();
    if !root.is_dir() {
        log::debug!("find_posts: no post directory at {root:?}");
        return Vec::new();
    }

    let mut ret = Vec::new();
    for e in WalkDir::new(root).sort_by_file_name() {
        let e = match e {
            Ok(e) => e,
            Err(err) => {
                log::warn!("find_posts: skipping unreadable entry: {err}");
                continue;
            }
        };
        let path = e.path();
        if !path.is_file() {
            continue;
        }

        let file_name = e.file_name().to_string_lossy();
        let dir = path.parent().map(|p| p.to_string_lossy());

        if let Some(dir) = dir {
            if has_marker(&dir) {
                log::debug!("find_posts: skipping {path:?} in template dir");
                continue;
            }
        }

        if !file_name.ends_with(&format!(".{extension}")) {
            continue;
        }

        if file_name.starts_with('_') || has_marker(&file_name) {
            log::debug!("find_posts: skipping {path:?}");
            continue;
        }

        ret.push(path.to_path_buf());
    }

    ret
}

/// Load every post found under `root`.
///
/// Posts that fail to load are reported on stderr and kept in the list with
/// no categories so they still count toward the total number of posts.
pub fn read_posts(root: impl AsRef<Path>, extension: &str) -> Vec<Post> {
    let posts: Vec<Post> = find_posts(root, extension)
        .into_iter()
        .map(|path| match Post::load(&path) {
            Ok(post) => post,
            Err(e) => {
                eprintln!("Error reading {}: {e:#}", path.display());
                Post::new(path, Vec::new())
            }
        })
        .collect();

    log::info!(
        "Read {} posts, {} drafts",
        posts.len(),
        posts.iter().filter(|p| p.draft).count()
    );

    posts
}

fn has_marker(s: &str) -> bool {
    SKIP_MARKERS.iter().any(|m| s.contains(m))
}
