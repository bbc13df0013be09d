use clap::ValueEnum;

/// An enchantment as it exists in the game, independent of how it is obtained.
///
/// `incompatible_with` is informational only; no constraint is enforced
/// between records. Treasure enchantments cannot appear on the enchanting
/// table, curses are detrimental effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enchantment {
    pub id: &'static str,
    pub name: &'static str,
    pub max_level: u8,
    pub description: &'static str,
    pub items: &'static [&'static str],
    pub incompatible_with: &'static [&'static str],
    pub is_treasure: bool,
    pub is_curse: bool,
}

impl Enchantment {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        max_level: u8,
        description: &'static str,
        items: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            name,
            max_level,
            description,
            items,
            incompatible_with: &[],
            is_treasure: false,
            is_curse: false,
        }
    }

    /// Mark enchantments that cannot coexist with this one on a single item
    pub const fn conflicts(self, names: &'static [&'static str]) -> Self {
        Self {
            incompatible_with: names,
            ..self
        }
    }

    /// Obtainable only via loot, fishing, or trading
    pub const fn treasure(self) -> Self {
        Self {
            is_treasure: true,
            ..self
        }
    }

    pub const fn curse(self) -> Self {
        Self {
            is_curse: true,
            ..self
        }
    }
}

/// Rarity tier on the enchanting table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    VeryRare,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rarity::Common => write!(f, "Common"),
            Rarity::Uncommon => write!(f, "Uncommon"),
            Rarity::Rare => write!(f, "Rare"),
            Rarity::VeryRare => write!(f, "Very Rare"),
        }
    }
}

/// An enchantment as offered by the randomized enchanting table.
///
/// Stored separately from [`Enchantment`]: the same logical enchantment may
/// appear in both catalogs with different ids and caps (`max_table_level` is
/// often lower than the intrinsic `max_level`). The two views are kept
/// deliberately un-unified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEnchantment {
    pub id: &'static str,
    pub name: &'static str,
    /// Max level usually obtainable from the table
    pub max_table_level: u8,
    /// Rarity weight; 10 = most common, 1 = very rare
    pub weight: u8,
    pub rarity: Rarity,
    pub items: &'static [&'static str],
}

impl TableEnchantment {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        max_table_level: u8,
        weight: u8,
        rarity: Rarity,
        items: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            name,
            max_table_level,
            weight,
            rarity,
            items,
        }
    }
}

/// A curated "best build" recipe for one item.
///
/// `enchants` entries are display strings like "Sharpness V"; they do not
/// reference [`Enchantment`] records and no integrity is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnchantCombo {
    pub id: &'static str,
    pub name: &'static str,
    pub item: &'static str,
    pub enchants: &'static [&'static str],
    pub description: &'static str,
}

impl EnchantCombo {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        item: &'static str,
        enchants: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            item,
            enchants,
            description,
        }
    }
}

/// The fixed set of browsing categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Tools,
    Armor,
    Extras,
    Table,
    Combos,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Tools => write!(f, "Tools"),
            Category::Armor => write!(f, "Armor"),
            Category::Extras => write!(f, "Extras"),
            Category::Table => write!(f, "Enchanting Table"),
            Category::Combos => write!(f, "Combos"),
        }
    }
}

/// Category entry driving the UI tab bar
#[derive(Debug, Clone)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
    pub glyph: &'static str,
}

/// Discriminator attached to every query result so the presentation layer
/// can pick a rendering without inspecting the record shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Enchant,
    Combo,
    Table,
}

/// A fixture record tagged with its kind.
///
/// The variant is the discriminator; the payload borrows from the static
/// fixture, so results are cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Enchant(&'static Enchantment),
    Combo(&'static EnchantCombo),
    Table(&'static TableEnchantment),
}

impl Record {
    pub fn data_type(&self) -> DataType {
        match self {
            Record::Enchant(_) => DataType::Enchant,
            Record::Combo(_) => DataType::Combo,
            Record::Table(_) => DataType::Table,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Record::Enchant(e) => e.id,
            Record::Combo(c) => c.id,
            Record::Table(t) => t.id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Record::Enchant(e) => e.name,
            Record::Combo(c) => c.name,
            Record::Table(t) => t.name,
        }
    }
}
