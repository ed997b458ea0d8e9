use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use crate::store::Store;

pub fn run(dir: &Path) -> Result<(), String> {
    let (_, keywords) = Store::new(dir).catalog()?;

    if keywords.is_empty() {
        println!("  No keywords found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Keyword", "Variable", "Description"]);

    for (name, keyword) in keywords.iter() {
        let display = if keyword.variable {
            format!("{name}(X)")
        } else {
            name.clone()
        };
        table.add_row(vec![
            display,
            if keyword.variable { "yes" } else { "no" }.to_string(),
            keyword.desc.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} keywords", keywords.len());

    Ok(())
}
