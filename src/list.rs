use std::fmt::Write;

use anyhow::Result;
use itertools::Itertools;

use crate::Site;

pub fn run(site: &Site, histogram: bool, as_csv: bool) -> Result<()> {
    if as_csv {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(["category", "count", "posts"])?;
        for (category, record) in site.table.sorted_by_count() {
            wtr.write_record([
                category.to_string(),
                record.count.to_string(),
                record.post_names().join(" "),
            ])?;
        }
        wtr.flush()?;
        return Ok(());
    }

    let mut out = String::new();
    if histogram {
        for (category, record) in site.table.sorted_by_count() {
            writeln!(out, "{category:32} {}", record.count)?;
        }
    } else {
        for category in site.table.keys().sorted() {
            writeln!(out, "{category}")?;
        }
    }
    print!("{out}");

    Ok(())
}
