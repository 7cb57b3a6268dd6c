//! Wild West name and description generator
//!
//! Every function is an independent uniform draw from fixed word banks.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::Rarity;

pub const PREFIXES: &[&str] = &[
    "Quick", "Sharp", "Silent", "Deadly", "Golden", "Rusty", "Wild", "Lucky",
    "Brave", "Swift", "Grim", "Savage", "Noble", "Wicked", "Swift", "Fierce",
    "Ancient", "Forgotten", "Legendary", "Mythic", "Divine", "Eternal",
];

pub const SUFFIXES: &[&str] = &[
    "Strike", "Guard", "Shot", "Blade", "Luck", "Fate", "Vengeance", "Justice",
    "Valor", "Honor", "Shadow", "Storm", "Thunder", "Light", "Dawn", "Dusk",
    "Rage", "Wrath", "Grace", "Power", "Mastery", "Domination", "Ascension",
];

pub const VERBS: &[&str] = &[
    "unlocks", "grants", "enhances", "boosts", "increases", "improves", "empowers",
    "fortifies", "amplifies", "magnifies", "intensifies", "strengthens", "augments",
];

pub const NOUNS: &[&str] = &[
    "damage", "defense", "speed", "luck", "accuracy", "critical hits", "evasion",
    "health", "resources", "abilities", "skills", "attacks", "blocks", "counters",
];

const SKILL_VERBS: &[&str] = &["enhances", "boosts", "improves", "increases"];
const SKILL_EFFECTS: &[&str] = &["your", "your character's", "the"];
const SKILL_TARGETS: &[&str] = &[
    "combat abilities", "defensive capabilities", "luck", "strategy", "resources",
];

const ABILITY_VERBS: &[&str] = &["unlocks", "grants", "enhances", "boosts", "increases"];
const ABILITY_EFFECTS: &[&str] = &["powerful", "significant", "moderate", "minor"];

fn pick<'a>(words: &[&'a str], rng: &mut impl Rng) -> &'a str {
    words.choose(rng).copied().unwrap_or_default()
}

/// "{prefix} {suffix}"
pub fn skill_name(rng: &mut impl Rng) -> String {
    format!("{} {}", pick(PREFIXES, rng), pick(SUFFIXES, rng))
}

/// "{prefix} {verb} {noun}"
pub fn ability_name(rng: &mut impl Rng) -> String {
    format!("{} {} {}", pick(PREFIXES, rng), pick(VERBS, rng), pick(NOUNS, rng))
}

pub fn skill_description(rng: &mut impl Rng) -> String {
    format!(
        "This skill {} {} {} with Wild West power.",
        pick(SKILL_VERBS, rng),
        pick(SKILL_EFFECTS, rng),
        pick(SKILL_TARGETS, rng)
    )
}

/// Description whose numeric benefits scale with the rarity multiplier
pub fn ability_description(rarity: Rarity, rng: &mut impl Rng) -> String {
    let multiplier = rarity.multiplier();
    let benefit = match rng.gen_range(0..5) {
        0 => format!("{}% bonus", (10.0 * multiplier) as u32),
        1 => format!("{}x multiplier", (5.0 * multiplier) as u32),
        2 => "enhanced effects".to_string(),
        3 => "improved capabilities".to_string(),
        _ => "special bonuses".to_string(),
    };
    format!("{} {} {}.", pick(ABILITY_VERBS, rng), pick(ABILITY_EFFECTS, rng), benefit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_skill_name_uses_word_banks() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let name = skill_name(&mut rng);
            let (prefix, suffix) = name.split_once(' ').unwrap();
            assert!(PREFIXES.contains(&prefix), "{}", name);
            assert!(SUFFIXES.contains(&suffix), "{}", name);
        }
    }

    #[test]
    fn test_ability_name_shape() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let name = ability_name(&mut rng);
            let prefix = name.split(' ').next().unwrap();
            assert!(PREFIXES.contains(&prefix));
            assert!(VERBS.iter().any(|v| name.contains(v)), "{}", name);
            assert!(NOUNS.iter().any(|n| name.ends_with(n)), "{}", name);
        }
    }

    #[test]
    fn test_skill_description_template() {
        let mut rng = StdRng::seed_from_u64(3);
        let description = skill_description(&mut rng);
        assert!(description.starts_with("This skill "));
        assert!(description.ends_with(" with Wild West power."));
    }

    #[test]
    fn test_ability_description_scales_numbers_with_rarity() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut saw_number = false;
        for _ in 0..200 {
            let description = ability_description(Rarity::Mythic, &mut rng);
            assert!(description.ends_with('.'));
            if description.contains('%') {
                assert!(description.contains("120% bonus"), "{}", description);
                saw_number = true;
            }
            if description.contains("x multiplier") {
                assert!(description.contains("60x multiplier"), "{}", description);
            }
        }
        assert!(saw_number);
    }
}
