use std::path::Path;

use colored::Colorize;

use crate::store::Store;

pub fn run(dir: &Path, name: &str, field: &str, value: &str) -> Result<(), String> {
    let store = Store::new(dir);
    let mut characters = store.characters()?;
    let sheet = characters
        .get_mut(name)
        .ok_or_else(|| format!("character not found: \"{name}\""))?;

    match sheet.root.apply_edit(field, value) {
        Ok(field) => {
            println!("  {name}: {field} = {}", sheet.root.get(field));
            store.save_characters(&characters)
        }
        Err(e) => {
            tracing::warn!("stat edit rejected: {e}");
            println!("  {}", format!("{e}; {name} unchanged.").yellow());
            Ok(())
        }
    }
}
