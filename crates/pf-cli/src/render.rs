//! Terminal rendering of resolved character sheets.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use pf_core::KeywordCatalog;
use pf_core::Tagged;
use pf_rules::ResolvedSheet;

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn signed(n: i32) -> String {
    if n > 0 { format!("+{n}") } else { n.to_string() }
}

fn tag_names<'a>(tags: impl IntoIterator<Item = &'a str>, keywords: &KeywordCatalog) -> String {
    let names: Vec<String> = tags.into_iter().map(|t| keywords.display_name(t)).collect();
    if names.is_empty() {
        "—".to_string()
    } else {
        names.join(", ")
    }
}

/// Render a resolved sheet as a set of tables.
pub fn sheet(name: &str, sheet: &ResolvedSheet, keywords: &KeywordCatalog) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {}\n\n", name.bold()));

    let mut attrs = table(vec!["Attribute", "Base", "Mod", "Effective"]);
    for ((attr, base), (_, effective)) in sheet.base.iter().zip(sheet.effective.iter()) {
        attrs.add_row(vec![
            attr.to_string(),
            base.to_string(),
            signed(sheet.modifiers.get(attr)),
            effective.to_string(),
        ]);
    }
    out.push_str(&format!("{attrs}\n\n"));

    let mut defenses = table(vec!["Dodge", "Parry", "Fortitude", "Toughness", "Will", "Speed"]);
    defenses.add_row(vec![
        sheet.dodge.to_string(),
        sheet.parry.to_string(),
        sheet.fortitude.to_string(),
        sheet.toughness.to_string(),
        sheet.will.to_string(),
        sheet.speed.to_string(),
    ]);
    out.push_str(&format!("{defenses}\n\n"));

    if !sheet.armor.is_empty() {
        let mut armor = table(vec!["Armor", "Bonus", "Tags"]);
        for a in &sheet.armor {
            armor.add_row(vec![a.name.clone(), a.bonus.to_string(), tag_names(a.tags(), keywords)]);
        }
        out.push_str(&format!("{armor}\n\n"));
    }

    if !sheet.weapons.is_empty() {
        let mut weapons = table(vec!["Weapon", "Damage", "Stat", "Tags", "Effective", "DC"]);
        for w in &sheet.weapons {
            weapons.add_row(vec![
                w.weapon.name.clone(),
                w.weapon.damage.to_string(),
                w.weapon
                    .stat
                    .map_or_else(|| "—".to_string(), |s| s.to_string()),
                tag_names(w.weapon.tag_list(), keywords),
                w.effective_damage.to_string(),
                w.dc.to_string(),
            ]);
        }
        out.push_str(&format!("{weapons}\n\n"));
    }

    if sheet.powers.is_empty() {
        out.push_str("  No powers.\n");
    } else {
        let mut powers = table(vec!["Power", "Rank", "Alpha"]);
        for p in &sheet.powers {
            powers.add_row(vec![
                p.name.clone(),
                p.rank.to_string(),
                if p.alpha { "yes".to_string() } else { String::new() },
            ]);
        }
        out.push_str(&format!("{powers}\n"));
    }

    out
}
