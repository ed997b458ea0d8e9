//! Powers and the percentile power table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest roll that maps to a table entry; rolls above it bump ranks.
pub const TABLE_SIZE: u8 = 90;

/// Power names indexed by frequency - 1 (90 entries).
pub const POWER_TABLE: [&str; TABLE_SIZE as usize] = [
    "Super Strength",
    "Flight",
    "Invulnerability",
    "Super Speed",
    "Energy Blast",
    "Telepathy",
    "Telekinesis",
    "Regeneration",
    "Invisibility",
    "Shape Shifting",
    "Pyrokinesis",
    "Cryokinesis",
    "Electrokinesis",
    "Hydrokinesis",
    "Aerokinesis",
    "Geokinesis",
    "Magnetism",
    "Gravity Control",
    "Teleportation",
    "Phasing",
    "Precognition",
    "Postcognition",
    "Clairvoyance",
    "Astral Projection",
    "Mind Control",
    "Illusion Casting",
    "Force Field",
    "Density Control",
    "Size Alteration",
    "Elasticity",
    "Wall Crawling",
    "Enhanced Senses",
    "Night Vision",
    "X-Ray Vision",
    "Sonic Scream",
    "Power Mimicry",
    "Power Negation",
    "Healing Touch",
    "Animal Empathy",
    "Plant Control",
    "Weather Control",
    "Light Manipulation",
    "Shadow Manipulation",
    "Darkness Generation",
    "Duplication",
    "Time Slowing",
    "Time Travel",
    "Dimensional Travel",
    "Portal Creation",
    "Technopathy",
    "Machine Interface",
    "Cyber Enhancement",
    "Adaptive Physiology",
    "Underwater Breathing",
    "Poison Immunity",
    "Toxic Secretion",
    "Bone Spikes",
    "Retractable Claws",
    "Acid Generation",
    "Radiation Emission",
    "Radiation Absorption",
    "Kinetic Absorption",
    "Energy Absorption",
    "Luck Manipulation",
    "Probability Control",
    "Empathy",
    "Emotion Control",
    "Pheromone Control",
    "Hypnosis",
    "Memory Manipulation",
    "Dream Walking",
    "Fear Projection",
    "Danger Sense",
    "Tactical Genius",
    "Super Intellect",
    "Omnilingualism",
    "Eidetic Memory",
    "Accelerated Reflexes",
    "Enhanced Agility",
    "Enhanced Durability",
    "Enhanced Stamina",
    "Sonar",
    "Camouflage",
    "Crystal Generation",
    "Metal Skin",
    "Stone Skin",
    "Wings",
    "Tail",
    "Matter Transmutation",
    "Cosmic Awareness",
];

/// Look up the table name for a frequency in `1..=90`.
pub fn power_name(frequency: u8) -> Option<&'static str> {
    if frequency == 0 {
        return None;
    }
    POWER_TABLE.get(usize::from(frequency) - 1).copied()
}

/// A rolled power.
///
/// Two powers are the same power when their frequency and name match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Power {
    /// Table index in `1..=100` the power was rolled from.
    pub frequency: u8,
    /// Power name.
    pub name: String,
    /// Strength of the power, at least 1.
    pub rank: u32,
    /// Set when the power was boosted by a natural 100.
    #[serde(default)]
    pub alpha: bool,
}

impl Power {
    /// A fresh rank-1 power from the table, if the frequency has an entry.
    pub fn from_table(frequency: u8) -> Option<Self> {
        power_name(frequency).map(|name| Self {
            frequency,
            name: name.to_string(),
            rank: 1,
            alpha: false,
        })
    }

    /// Returns true if `other` is the same power (frequency and name match).
    pub fn same_power(&self, other: &Power) -> bool {
        self.frequency == other.frequency && self.name == other.name
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (rank {})", self.name, self.rank)?;
        if self.alpha {
            write!(f, " [alpha]")?;
        }
        Ok(())
    }
}

/// Returns true if no two powers in the list are the same power.
pub fn is_consolidated(powers: &[Power]) -> bool {
    powers
        .iter()
        .enumerate()
        .all(|(i, p)| powers[i + 1..].iter().all(|q| !p.same_power(q)))
}

/// Sum of ranks across a list.
pub fn total_rank(powers: &[Power]) -> u64 {
    powers.iter().map(|p| u64::from(p.rank)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_bounds() {
        assert_eq!(power_name(1), Some("Super Strength"));
        assert_eq!(power_name(90), Some("Cosmic Awareness"));
        assert_eq!(power_name(0), None);
        assert_eq!(power_name(91), None);
    }

    #[test]
    fn table_names_are_unique() {
        for (i, name) in POWER_TABLE.iter().enumerate() {
            assert!(
                !POWER_TABLE[i + 1..].contains(name),
                "duplicate table entry: {name}"
            );
        }
    }

    #[test]
    fn from_table() {
        let p = Power::from_table(5).unwrap();
        assert_eq!(p.name, "Energy Blast");
        assert_eq!(p.rank, 1);
        assert!(!p.alpha);
        assert!(Power::from_table(100).is_none());
    }

    #[test]
    fn same_power_ignores_rank_and_alpha() {
        let a = Power::from_table(3).unwrap();
        let mut b = a.clone();
        b.rank = 7;
        b.alpha = true;
        assert!(a.same_power(&b));
        assert!(!a.same_power(&Power::from_table(4).unwrap()));
    }

    #[test]
    fn consolidated_check() {
        let a = Power::from_table(1).unwrap();
        let b = Power::from_table(2).unwrap();
        assert!(is_consolidated(&[a.clone(), b.clone()]));
        assert!(!is_consolidated(&[a.clone(), b, a]));
        assert!(is_consolidated(&[]));
    }

    #[test]
    fn display() {
        let mut p = Power::from_table(2).unwrap();
        assert_eq!(p.to_string(), "Flight (rank 1)");
        p.alpha = true;
        p.rank = 6;
        assert_eq!(p.to_string(), "Flight (rank 6) [alpha]");
    }
}
