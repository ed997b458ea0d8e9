use std::collections::BTreeMap;
use std::path::Path;

use pf_core::{
    Armor, Attribute, AttributeBlock, Catalog, Keyword, KeywordCatalog, RootStats, Weapon,
};
use pf_rules::{CharacterRequest, GenerationParams, SelectionCriteria};

use crate::store::{self, Store};

pub fn run(dir: &Path) -> Result<(), String> {
    let store = Store::new(dir);

    for file in [
        store::ARMOR_FILE,
        store::WEAPONS_FILE,
        store::KEYWORDS_FILE,
        store::PRESETS_FILE,
    ] {
        if store.exists(file) {
            return Err(format!("{} already exists", store.path(file).display()));
        }
    }

    store.save_catalog(&starter_catalog())?;
    store.save_keywords(&starter_keywords())?;
    store.save_presets(&starter_presets())?;

    println!("Created starter data in {}/", dir.display());
    println!("  {}  — armor catalog", store::ARMOR_FILE);
    println!("  {} — weapon catalog", store::WEAPONS_FILE);
    println!("  {} — keyword descriptions", store::KEYWORDS_FILE);
    println!("  {} — generation presets", store::PRESETS_FILE);
    println!();
    println!("Get started:");
    println!("  pf generate Nova --preset brick   # Roll a character");
    println!("  pf show Nova                      # Show the resolved sheet");

    Ok(())
}

fn starter_catalog() -> Catalog {
    Catalog::new(
        vec![
            Armor::new("Leather Jacket", 1, &["light"]),
            Armor::new("Kevlar Vest", 2, &["light", "Padded(1)"]),
            Armor::new("Riot Gear", 3, &["medium"]),
            Armor::new("Ceramic Plate", 5, &["heavy"]),
            Armor::new("Battle Suit", 6, &["heavy", "power", "Servo(2)"]),
        ],
        vec![
            Weapon::new("Knife", 2, "finesse, light", Some(Attribute::Dex)),
            Weapon::new("Baton", 3, "light", Some(Attribute::Str)),
            Weapon::new("Sledgehammer", 6, "heavy, Strong(2)", Some(Attribute::Str)),
            Weapon::new("Pistol", 4, "ranged", None),
            Weapon::new("Monofilament Whip", 3, "finesse, Keen(1)", Some(Attribute::Dex)),
        ],
    )
}

fn starter_keywords() -> KeywordCatalog {
    let mut keywords = KeywordCatalog::new();
    keywords.insert("light", Keyword::new("Light gear; no encumbrance.", false));
    keywords.insert("medium", Keyword::new("Medium armor. Slightly hinders agility.", false));
    keywords.insert("heavy", Keyword::new("Heavy gear. Slows movement.", false));
    keywords.insert("power", Keyword::new("Powered; ignores encumbrance.", false));
    keywords.insert("finesse", Keyword::new("May use DEX for damage.", false));
    keywords.insert("ranged", Keyword::new("Attacks at range.", false));
    keywords.insert("Padded", Keyword::new("Padding {#}. {STA(+1)}", true));
    keywords.insert("Servo", Keyword::new("Servo assist {#}. {STR(+{#})}", true));
    keywords.insert("Strong", Keyword::new("{#} bonus {STR(+2)}", true));
    keywords.insert("Keen", Keyword::new("Keen edge {#}. {AGL(+1)}", true));
    keywords
}

fn starter_presets() -> BTreeMap<String, CharacterRequest> {
    let brick = CharacterRequest::default()
        .with_root(RootStats {
            attributes: AttributeBlock {
                strength: 4,
                agility: 1,
                fighting: 3,
                awareness: 1,
                stamina: 4,
                dexterity: 1,
                intellect: 0,
                presence: 1,
            },
            dodge: 2,
            parry: 2,
            fortitude: 2,
            will: 1,
            toughness: 2,
        })
        .with_generation(GenerationParams::default())
        .with_armor(SelectionCriteria::new(&["heavy"], 1))
        .with_weapons(SelectionCriteria::new(&["heavy"], 1));

    let acrobat = CharacterRequest::default()
        .with_root(RootStats {
            attributes: AttributeBlock {
                strength: 1,
                agility: 4,
                fighting: 2,
                awareness: 2,
                stamina: 2,
                dexterity: 4,
                intellect: 1,
                presence: 2,
            },
            dodge: 3,
            parry: 2,
            fortitude: 1,
            will: 2,
            toughness: 0,
        })
        .with_generation(GenerationParams {
            base_count: 2,
            extra_chance: 15.0,
            extra_rank_chance: 10.0,
        })
        .with_armor(SelectionCriteria::new(&["light"], 1))
        .with_weapons(SelectionCriteria::new(&["finesse"], 2));

    BTreeMap::from([
        ("brick".to_string(), brick),
        ("acrobat".to_string(), acrobat),
    ])
}
