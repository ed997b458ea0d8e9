use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use crate::store::Store;

pub fn run(dir: &Path) -> Result<(), String> {
    let characters = Store::new(dir).characters()?;

    if characters.is_empty() {
        println!("  No characters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Powers", "Total Rank", "Armor", "Weapons"]);

    for (name, sheet) in &characters {
        let powers = if sheet.powers.is_empty() {
            "—".to_string()
        } else {
            sheet
                .powers
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            name.clone(),
            powers,
            pf_core::power::total_rank(&sheet.powers).to_string(),
            sheet.armor.len().to_string(),
            sheet.weapons.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} characters", characters.len());

    Ok(())
}
