use crate::catalog::{
    Category, Record, ARMOR_ENCHANTS, BEST_COMBOS, EXTRA_ENCHANTS, TABLE_ENCHANTS, TOOLS_ENCHANTS,
};

/// Attribute filters applied on top of category selection or text search.
///
/// `item_type: None` means no item-type restriction (the UI's "All").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub item_type: Option<String>,
    pub treasure_only: bool,
    pub no_curses: bool,
}

/// Evaluate the unified search/filter pipeline.
///
/// Non-empty `search` switches to global mode: all five collections are
/// candidates in fixed order and `selection` is ignored. Empty `search`
/// scopes the candidates to the single `selection` collection, with no text
/// matching at all. Attribute filters apply in both modes, each a pure
/// predicate over record fields; relative order is always preserved.
/// Pure function of its inputs and the static fixture; never fails.
pub fn evaluate(selection: Category, search: &str, filters: &FilterOptions) -> Vec<Record> {
    let needle = search.to_lowercase();
    let searching = !needle.is_empty();

    let mut results: Vec<Record> = if searching {
        global_candidates()
    } else {
        category_candidates(selection)
    };

    if searching {
        results.retain(|r| matches_text(r, &needle));
    }

    if let Some(item_type) = filters.item_type.as_deref() {
        results.retain(|r| matches_item_type(r, item_type));
    }

    if filters.treasure_only {
        results.retain(|r| matches!(r, Record::Enchant(e) if e.is_treasure));
    }

    if filters.no_curses {
        results.retain(|r| match r {
            Record::Enchant(e) => !e.is_curse,
            // Curses are an enchantment-only concept
            _ => true,
        });
    }

    results
}

/// All five collections concatenated in fixed order: tools, armor, extras,
/// combos, table
fn global_candidates() -> Vec<Record> {
    TOOLS_ENCHANTS
        .iter()
        .chain(ARMOR_ENCHANTS)
        .chain(EXTRA_ENCHANTS)
        .map(Record::Enchant)
        .chain(BEST_COMBOS.iter().map(Record::Combo))
        .chain(TABLE_ENCHANTS.iter().map(Record::Table))
        .collect()
}

fn category_candidates(selection: Category) -> Vec<Record> {
    match selection {
        Category::Tools => TOOLS_ENCHANTS.iter().map(Record::Enchant).collect(),
        Category::Armor => ARMOR_ENCHANTS.iter().map(Record::Enchant).collect(),
        Category::Extras => EXTRA_ENCHANTS.iter().map(Record::Enchant).collect(),
        Category::Combos => BEST_COMBOS.iter().map(Record::Combo).collect(),
        Category::Table => TABLE_ENCHANTS.iter().map(Record::Table).collect(),
    }
}

/// Case-insensitive substring match over name, item labels, and description.
/// A combo's `enchants` display strings are deliberately not searched.
/// `needle` must already be lowercased.
fn matches_text(record: &Record, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    match record {
        Record::Enchant(e) => {
            contains(e.name) || e.items.iter().any(|i| contains(i)) || contains(e.description)
        }
        Record::Combo(c) => contains(c.name) || contains(c.item) || contains(c.description),
        Record::Table(t) => contains(t.name) || t.items.iter().any(|i| contains(i)),
    }
}

/// Item-type label filter. Containment is case-sensitive here so that e.g.
/// "Pickaxe" matches a "Netherite Pickaxe" label without matching unrelated
/// text; the catch-all "All Tools" fixture entry only matches when the
/// filter label is exactly "All Tools". Records with no item shape never
/// match.
fn matches_item_type(record: &Record, item_type: &str) -> bool {
    let entry_matches =
        |i: &str| i.contains(item_type) || (item_type == "All Tools" && i == "All Tools");

    match record {
        Record::Enchant(e) => e.items.iter().any(|i| entry_matches(i)),
        Record::Table(t) => t.items.iter().any(|i| entry_matches(i)),
        Record::Combo(c) => c.item.contains(item_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DataType;

    fn ids(results: &[Record]) -> Vec<&'static str> {
        results.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_contextual_mode_returns_category_in_order() {
        let results = evaluate(Category::Tools, "", &FilterOptions::default());
        assert_eq!(ids(&results), ["eff", "silk", "fort", "unb", "mend", "sharp"]);
        assert!(results.iter().all(|r| r.data_type() == DataType::Enchant));
    }

    #[test]
    fn test_global_search_ignores_selection() {
        let a = evaluate(Category::Armor, "fortune", &FilterOptions::default());
        let b = evaluate(Category::Combos, "fortune", &FilterOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_global_search_spans_all_collections() {
        let results = evaluate(Category::Armor, "fortune", &FilterOptions::default());
        // The enchantment, the "Fortune Miner" combo, and the table entry
        assert!(results
            .iter()
            .any(|r| r.id() == "fort" && r.data_type() == DataType::Enchant));
        assert!(ids(&results).contains(&"god_pick_fortune"));
        assert!(results
            .iter()
            .any(|r| r.id() == "fort" && r.data_type() == DataType::Table));
    }

    #[test]
    fn test_search_does_not_scan_combo_enchant_lines() {
        // "Crop Master" lists Fortune III but has "fortune" in neither its
        // name, item, nor description
        let results = evaluate(Category::Tools, "fortune", &FilterOptions::default());
        assert!(!ids(&results).contains(&"god_hoe_fortune"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lower = evaluate(Category::Tools, "fortune", &FilterOptions::default());
        let upper = evaluate(Category::Tools, "FORTUNE", &FilterOptions::default());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_search_matches_description() {
        let results = evaluate(Category::Tools, "xp orbs", &FilterOptions::default());
        assert_eq!(ids(&results), ["mend"]);
    }

    #[test]
    fn test_contextual_filters_without_text_stage() {
        let filters = FilterOptions {
            no_curses: true,
            ..Default::default()
        };
        let results = evaluate(Category::Extras, "", &filters);
        assert_eq!(results.len(), EXTRA_ENCHANTS.len() - 2);
        assert!(!ids(&results).contains(&"binding_curse"));
        assert!(!ids(&results).contains(&"vanishing_curse"));
    }

    #[test]
    fn test_item_type_filter_on_table() {
        let filters = FilterOptions {
            item_type: Some("Bow".into()),
            ..Default::default()
        };
        let results = evaluate(Category::Table, "", &filters);
        assert_eq!(ids(&results), ["power", "punch", "flame"]);
    }

    #[test]
    fn test_item_type_all_tools_is_exact() {
        let filters = FilterOptions {
            item_type: Some("All Tools".into()),
            ..Default::default()
        };
        let results = evaluate(Category::Tools, "", &filters);
        assert_eq!(ids(&results), ["unb", "mend"]);
    }

    #[test]
    fn test_item_type_substring_matches_combo_item() {
        let filters = FilterOptions {
            item_type: Some("Sword".into()),
            ..Default::default()
        };
        let results = evaluate(Category::Combos, "", &filters);
        // "Netherite Sword" contains "Sword"
        assert_eq!(ids(&results), ["god_sword"]);
    }

    #[test]
    fn test_treasure_only_drops_non_enchants() {
        let filters = FilterOptions {
            treasure_only: true,
            ..Default::default()
        };
        let results = evaluate(Category::Tools, "mending", &filters);
        assert_eq!(ids(&results), ["mend"]);
        assert!(results
            .iter()
            .all(|r| !matches!(r.data_type(), DataType::Combo | DataType::Table)));
    }

    #[test]
    fn test_treasure_only_over_extras_is_empty() {
        let filters = FilterOptions {
            treasure_only: true,
            ..Default::default()
        };
        assert!(evaluate(Category::Extras, "", &filters).is_empty());
    }

    #[test]
    fn test_no_curses_keeps_other_kinds() {
        let filters = FilterOptions {
            no_curses: true,
            ..Default::default()
        };
        let results = evaluate(Category::Combos, "", &filters);
        assert_eq!(results.len(), BEST_COMBOS.len());
    }

    #[test]
    fn test_idempotent() {
        let filters = FilterOptions {
            item_type: Some("Sword".into()),
            no_curses: true,
            ..Default::default()
        };
        let a = evaluate(Category::Tools, "sharp", &filters);
        let b = evaluate(Category::Tools, "sharp", &filters);
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_match_yields_empty_not_error() {
        let results = evaluate(Category::Tools, "zzzzz", &FilterOptions::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_clearing_search_restores_contextual_results() {
        let _ = evaluate(Category::Tools, "fortune", &FilterOptions::default());
        let restored = evaluate(Category::Tools, "", &FilterOptions::default());
        assert_eq!(ids(&restored), ["eff", "silk", "fort", "unb", "mend", "sharp"]);
    }
}
