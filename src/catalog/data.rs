//! The compiled-in enchantment fixture: five immutable collections plus the
//! fixed category list. Built once at compile time, never mutated.

use super::types::Rarity::{Common, Rare, Uncommon, VeryRare};
use super::types::*;

// =============================================================================
// Tools & Weapons
// =============================================================================

pub static TOOLS_ENCHANTS: &[Enchantment] = &[
    Enchantment::new(
        "eff",
        "Efficiency",
        5,
        "Increases mining speed.",
        &["Pickaxe", "Shovel", "Axe", "Hoe", "Shears"],
    ),
    Enchantment::new(
        "silk",
        "Silk Touch",
        1,
        "Mined blocks drop themselves instead of items.",
        &["Pickaxe", "Shovel", "Axe", "Hoe"],
    )
    .conflicts(&["Fortune"]),
    Enchantment::new(
        "fort",
        "Fortune",
        3,
        "Increases block drops.",
        &["Pickaxe", "Shovel", "Axe", "Hoe"],
    )
    .conflicts(&["Silk Touch"]),
    Enchantment::new(
        "unb",
        "Unbreaking",
        3,
        "Increases item durability.",
        &["All Tools"],
    ),
    Enchantment::new(
        "mend",
        "Mending",
        1,
        "Repairs the item using XP orbs.",
        &["All Tools"],
    )
    .treasure(),
    Enchantment::new(
        "sharp",
        "Sharpness",
        5,
        "Increases melee damage.",
        &["Sword", "Axe"],
    )
    .conflicts(&["Smite", "Bane of Arthropods"]),
];

// =============================================================================
// Armor & Wearables
// =============================================================================

pub static ARMOR_ENCHANTS: &[Enchantment] = &[
    Enchantment::new(
        "prot",
        "Protection",
        4,
        "Reduces general damage.",
        &["Helmet", "Chestplate", "Leggings", "Boots"],
    )
    .conflicts(&["Blast Protection", "Fire Protection", "Projectile Protection"]),
    Enchantment::new(
        "feather",
        "Feather Falling",
        4,
        "Reduces fall damage.",
        &["Boots"],
    ),
    Enchantment::new(
        "resp",
        "Respiration",
        3,
        "Extends underwater breathing time.",
        &["Helmet"],
    ),
    Enchantment::new(
        "aqua",
        "Aqua Affinity",
        1,
        "Increases underwater mining speed.",
        &["Helmet"],
    ),
    Enchantment::new(
        "thorns",
        "Thorns",
        3,
        "Reflects damage to attackers.",
        &["Helmet", "Chestplate", "Leggings", "Boots"],
    ),
    Enchantment::new(
        "depth",
        "Depth Strider",
        3,
        "Increases underwater movement speed.",
        &["Boots"],
    )
    .conflicts(&["Frost Walker"]),
];

// =============================================================================
// Utility & Magic
// =============================================================================

pub static EXTRA_ENCHANTS: &[Enchantment] = &[
    Enchantment::new("loot", "Looting", 3, "Increases mob drops.", &["Sword"]),
    Enchantment::new(
        "inf",
        "Infinity",
        1,
        "Shooting bows does not consume arrows.",
        &["Bow"],
    )
    .conflicts(&["Mending"]),
    Enchantment::new("flame", "Flame", 1, "Arrows set targets on fire.", &["Bow"]),
    Enchantment::new(
        "loyalty",
        "Loyalty",
        3,
        "Trident returns after being thrown.",
        &["Trident"],
    )
    .conflicts(&["Riptide"]),
    Enchantment::new(
        "chan",
        "Channeling",
        1,
        "Summons lightning during thunderstorms.",
        &["Trident"],
    )
    .conflicts(&["Riptide"]),
    Enchantment::new(
        "rip",
        "Riptide",
        3,
        "Propels player when thrown in water/rain.",
        &["Trident"],
    )
    .conflicts(&["Loyalty", "Channeling"]),
    Enchantment::new(
        "binding_curse",
        "Curse of Binding",
        1,
        "Items cannot be removed from armor slots once equipped.",
        &["Armor", "Elytra", "Pumpkin"],
    )
    .curse(),
    Enchantment::new(
        "vanishing_curse",
        "Curse of Vanishing",
        1,
        "Item disappears completely upon death.",
        &["All Items"],
    )
    .curse(),
];

// =============================================================================
// Enchanting Table probabilities
// =============================================================================

pub static TABLE_ENCHANTS: &[TableEnchantment] = &[
    // Level 5 of Efficiency and Sharpness is anvil-only
    TableEnchantment::new("eff", "Efficiency", 4, 10, Common, &["Tools"]),
    TableEnchantment::new("prot", "Protection", 4, 10, Common, &["Armor"]),
    TableEnchantment::new("sharp", "Sharpness", 4, 10, Common, &["Sword", "Axe"]),
    TableEnchantment::new("power", "Power", 5, 10, Common, &["Bow"]),
    TableEnchantment::new("piercing", "Piercing", 4, 10, Common, &["Crossbow"]),
    TableEnchantment::new("unb", "Unbreaking", 3, 5, Uncommon, &["All"]),
    TableEnchantment::new("fireprot", "Fire Protection", 4, 5, Uncommon, &["Armor"]),
    TableEnchantment::new("projprot", "Projectile Protection", 4, 5, Uncommon, &["Armor"]),
    TableEnchantment::new("feather", "Feather Falling", 4, 5, Uncommon, &["Boots"]),
    TableEnchantment::new("kb", "Knockback", 2, 5, Uncommon, &["Sword"]),
    TableEnchantment::new("smite", "Smite", 5, 5, Uncommon, &["Sword"]),
    TableEnchantment::new("bane", "Bane of Arthropods", 5, 5, Uncommon, &["Sword"]),
    TableEnchantment::new("loyalty", "Loyalty", 3, 5, Uncommon, &["Trident"]),
    TableEnchantment::new("quick", "Quick Charge", 3, 5, Uncommon, &["Crossbow"]),
    TableEnchantment::new("fort", "Fortune", 3, 2, Rare, &["Tools"]),
    TableEnchantment::new("loot", "Looting", 3, 2, Rare, &["Sword"]),
    TableEnchantment::new("resp", "Respiration", 3, 2, Rare, &["Helmet"]),
    TableEnchantment::new("aqua", "Aqua Affinity", 1, 2, Rare, &["Helmet"]),
    TableEnchantment::new("depth", "Depth Strider", 3, 2, Rare, &["Boots"]),
    TableEnchantment::new("blast", "Blast Protection", 4, 2, Rare, &["Armor"]),
    TableEnchantment::new("fire", "Fire Aspect", 2, 2, Rare, &["Sword"]),
    TableEnchantment::new("sweep", "Sweeping Edge", 3, 2, Rare, &["Sword"]),
    TableEnchantment::new("punch", "Punch", 2, 2, Rare, &["Bow"]),
    TableEnchantment::new("flame", "Flame", 1, 2, Rare, &["Bow"]),
    TableEnchantment::new("luck", "Luck of the Sea", 3, 2, Rare, &["Rod"]),
    TableEnchantment::new("lure", "Lure", 3, 2, Rare, &["Rod"]),
    TableEnchantment::new("impaling", "Impaling", 5, 2, Rare, &["Trident"]),
    TableEnchantment::new("rip", "Riptide", 3, 2, Rare, &["Trident"]),
    TableEnchantment::new("multi", "Multishot", 1, 2, Rare, &["Crossbow"]),
    TableEnchantment::new("thorns", "Thorns", 3, 1, Rare, &["Armor"]),
    TableEnchantment::new("silk", "Silk Touch", 1, 1, VeryRare, &["Tools"]),
    TableEnchantment::new("inf", "Infinity", 1, 1, VeryRare, &["Bow"]),
    TableEnchantment::new("chan", "Channeling", 1, 1, VeryRare, &["Trident"]),
];

// =============================================================================
// Best Combos
// =============================================================================

pub static BEST_COMBOS: &[EnchantCombo] = &[
    EnchantCombo::new(
        "god_sword",
        "The God Slayer",
        "Netherite Sword",
        &["Sharpness V", "Looting III", "Unbreaking III", "Sweeping Edge III", "Mending", "Fire Aspect II"],
        "The ultimate melee weapon. Maximizes damage, drops, and durability. Perfect for general survival and mob farming.",
    ),
    EnchantCombo::new(
        "god_pick_fortune",
        "Fortune Miner",
        "Pickaxe",
        &["Efficiency V", "Fortune III", "Unbreaking III", "Mending"],
        "Multiply your diamonds and ore drops. Do not use on Stone or Glass.",
    ),
    EnchantCombo::new(
        "god_pick_silk",
        "Silk Touch Master",
        "Pickaxe",
        &["Efficiency V", "Silk Touch", "Unbreaking III", "Mending"],
        "Collect blocks exactly as they are (Glass, Ice, Ores). Essential for building.",
    ),
    EnchantCombo::new(
        "god_shovel",
        "The Terraformer",
        "Shovel",
        &["Efficiency V", "Silk Touch", "Unbreaking III", "Mending"],
        "Instantly mine dirt, grass, sand, and gravel. Silk Touch keeps Grass Blocks and Mycelium intact.",
    ),
    EnchantCombo::new(
        "god_axe",
        "Viking Axe",
        "Axe",
        &["Sharpness V", "Efficiency V", "Unbreaking III", "Mending", "Silk Touch"],
        "A dual-purpose tool. Devastating in combat (disables shields) and instantly chops wood. Silk Touch saves inventory space (leaves).",
    ),
    EnchantCombo::new(
        "god_hoe",
        "Nature's Touch",
        "Hoe",
        &["Efficiency V", "Silk Touch", "Unbreaking III", "Mending"],
        "The fastest way to gather Sculk blocks, Leaves, and Shroomlights. Essential for Deep Dark exploration.",
    ),
    EnchantCombo::new(
        "god_hoe_fortune",
        "Crop Master",
        "Hoe",
        &["Efficiency V", "Fortune III", "Unbreaking III", "Mending"],
        "Maximize crop yields (Carrots, Potatoes) and sapling drops. Also works on leaves for more apples.",
    ),
    EnchantCombo::new(
        "god_bow",
        "Sniper Bow",
        "Bow",
        &["Power V", "Punch II", "Flame", "Unbreaking III", "Infinity"],
        "Infinite arrows with massive damage and knockback. (Mending is mutually exclusive with Infinity).",
    ),
    EnchantCombo::new(
        "machine_gun_crossbow",
        "Crowd Control",
        "Crossbow",
        &["Multishot", "Quick Charge III", "Unbreaking III", "Mending"],
        "Fires 3 arrows for the price of 1. Combined with Fireworks, this is a weapon of mass destruction.",
    ),
    EnchantCombo::new(
        "sniper_crossbow",
        "Armor Piercer",
        "Crossbow",
        &["Piercing IV", "Quick Charge III", "Unbreaking III", "Mending"],
        "Arrows shoot through enemies and shields. You can pick the arrows back up after firing.",
    ),
    EnchantCombo::new(
        "trident_poseidon",
        "Poseidon's Wrath",
        "Trident",
        &["Impaling V", "Loyalty III", "Channeling", "Unbreaking III", "Mending"],
        "The ultimate ranged weapon for wet conditions. Summons lightning and returns to your hand automatically.",
    ),
    EnchantCombo::new(
        "trident_rocket",
        "Human Rocket",
        "Trident",
        &["Riptide III", "Impaling V", "Unbreaking III", "Mending"],
        "Launch yourself through the sky when it rains. Combine with Elytra for infinite flight speed.",
    ),
    EnchantCombo::new(
        "god_elytra",
        "Sky Ruler",
        "Elytra",
        &["Unbreaking III", "Mending"],
        "Essential for flight. Mending is mandatory as Elytra breaks quickly and Phantom Membranes are annoying to farm.",
    ),
    EnchantCombo::new(
        "god_helmet",
        "Deep Diver",
        "Helmet",
        &["Protection IV", "Respiration III", "Aqua Affinity", "Unbreaking III", "Mending"],
        "Breathe and mine underwater almost as effectively as on land.",
    ),
    EnchantCombo::new(
        "god_chest",
        "Tank Chestplate",
        "Chestplate",
        &["Protection IV", "Unbreaking III", "Mending", "Thorns III"],
        "Maximum defense. Note: Thorns degrades durability faster, but deals damage back.",
    ),
    EnchantCombo::new(
        "blast_chest",
        "Bomb Squad Vest",
        "Chestplate",
        &["Blast Protection IV", "Unbreaking III", "Mending", "Thorns III"],
        "Specialized defense against Creepers, TNT, and Wither skulls. Swap this in for explosive fights.",
    ),
    EnchantCombo::new(
        "god_legs",
        "Swift Shadow",
        "Leggings",
        &["Protection IV", "Unbreaking III", "Mending", "Swift Sneak III"],
        "Walk at full speed while sneaking. Essential for Ancient Cities and building bridges safely.",
    ),
    EnchantCombo::new(
        "fire_legs",
        "Nether Walker",
        "Leggings",
        &["Fire Protection IV", "Unbreaking III", "Mending", "Swift Sneak III"],
        "Drastically reduces burn damage. Essential for Nether fortress raiding and lava handling.",
    ),
    EnchantCombo::new(
        "god_boots",
        "Explorer Boots",
        "Boots",
        &["Protection IV", "Feather Falling IV", "Depth Strider III", "Unbreaking III", "Mending", "Soul Speed III"],
        "Survive massive falls, swim fast, and run on soul sand.",
    ),
    EnchantCombo::new(
        "god_rod",
        "Ultimate Fisher",
        "Fishing Rod",
        &["Luck of the Sea III", "Lure III", "Unbreaking III", "Mending"],
        "Catch treasure (enchanted books, saddles) faster and reduce junk catches.",
    ),
];

// =============================================================================
// Categories and accessors
// =============================================================================

pub static CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        category: Category::Tools,
        label: "Tools & Weapons",
        glyph: "⚒",
    },
    CategoryInfo {
        category: Category::Armor,
        label: "Armor & Wearables",
        glyph: "🛡",
    },
    CategoryInfo {
        category: Category::Extras,
        label: "Utility & Magic",
        glyph: "✦",
    },
    CategoryInfo {
        category: Category::Table,
        label: "Enchanting Table",
        glyph: "📖",
    },
    CategoryInfo {
        category: Category::Combos,
        label: "Best Combos",
        glyph: "▤",
    },
];

/// Item-type labels offered by the filter panel
pub static ITEM_TYPES: &[&str] = &[
    "Sword",
    "Pickaxe",
    "Axe",
    "Shovel",
    "Bow",
    "Crossbow",
    "Trident",
    "Helmet",
    "Chestplate",
    "Leggings",
    "Boots",
    "Elytra",
    "Fishing Rod",
];

/// Look up an enchantment by id across the three enchantment collections
pub fn enchantment_by_id(id: &str) -> Option<&'static Enchantment> {
    TOOLS_ENCHANTS
        .iter()
        .chain(ARMOR_ENCHANTS)
        .chain(EXTRA_ENCHANTS)
        .find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_enchantment_ids_unique() {
        let mut seen = HashSet::new();
        for e in TOOLS_ENCHANTS.iter().chain(ARMOR_ENCHANTS).chain(EXTRA_ENCHANTS) {
            assert!(seen.insert(e.id), "duplicate enchantment id: {}", e.id);
        }
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn test_items_never_empty() {
        for e in TOOLS_ENCHANTS.iter().chain(ARMOR_ENCHANTS).chain(EXTRA_ENCHANTS) {
            assert!(!e.items.is_empty(), "{} has no items", e.id);
        }
        for t in TABLE_ENCHANTS {
            assert!(!t.items.is_empty(), "{} has no items", t.id);
        }
    }

    #[test]
    fn test_table_weights_in_domain() {
        for t in TABLE_ENCHANTS {
            assert!(matches!(t.weight, 1 | 2 | 5 | 10), "{} weight {}", t.id, t.weight);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(enchantment_by_id("fort").map(|e| e.name), Some("Fortune"));
        assert_eq!(enchantment_by_id("thorns").map(|e| e.max_level), Some(3));
        assert!(enchantment_by_id("nope").is_none());
    }

    #[test]
    fn test_collection_sizes() {
        assert_eq!(TOOLS_ENCHANTS.len(), 6);
        assert_eq!(ARMOR_ENCHANTS.len(), 6);
        assert_eq!(EXTRA_ENCHANTS.len(), 8);
        assert_eq!(TABLE_ENCHANTS.len(), 33);
        assert_eq!(BEST_COMBOS.len(), 20);
        assert_eq!(CATEGORIES.len(), 5);
    }
}
