use std::path::Path;

use pf_rules::resolve_sheet;

use crate::render;
use crate::store::Store;

pub fn run(dir: &Path, name: &str, json: bool) -> Result<(), String> {
    let store = Store::new(dir);
    let sheet = store.character(name)?;
    let (_, keywords) = store.catalog()?;

    let resolved = resolve_sheet(&sheet, &keywords);

    if json {
        let content = serde_json::to_string_pretty(&resolved)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{content}");
    } else {
        print!("{}", render::sheet(name, &resolved, &keywords));
    }

    Ok(())
}
