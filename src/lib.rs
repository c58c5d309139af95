mod collection;
pub use collection::{find_posts, read_posts, SKIP_MARKERS};

pub mod export;

pub mod lint;

pub mod parse;

mod post;
pub use post::{short_name, CategoryField, Post};

pub mod report;

mod table;
pub use table::{
    description, CategoryInfo, CategoryRecord, CategoryTable, DESCRIPTIONS,
};
