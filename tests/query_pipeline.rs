//! Integration tests for the search/filter pipeline, exercised through the
//! public crate API only.

use rstest::rstest;

use enchant_codex::catalog::{
    Record, ARMOR_ENCHANTS, BEST_COMBOS, EXTRA_ENCHANTS, TABLE_ENCHANTS, TOOLS_ENCHANTS,
};
use enchant_codex::{evaluate, Category, DataType, FilterOptions};

fn ids(results: &[Record]) -> Vec<&'static str> {
    results.iter().map(|r| r.id()).collect()
}

fn fixture_total() -> usize {
    TOOLS_ENCHANTS.len()
        + ARMOR_ENCHANTS.len()
        + EXTRA_ENCHANTS.len()
        + BEST_COMBOS.len()
        + TABLE_ENCHANTS.len()
}

/// The text-match rule, restated independently of the engine
fn text_matches(record: &Record, needle: &str) -> bool {
    let c = |s: &str| s.to_lowercase().contains(needle);
    match record {
        Record::Enchant(e) => c(e.name) || e.items.iter().any(|i| c(i)) || c(e.description),
        Record::Combo(x) => c(x.name) || c(x.item) || c(x.description),
        Record::Table(t) => c(t.name) || t.items.iter().any(|i| c(i)),
    }
}

// =============================================================================
// Mode selection
// =============================================================================

#[rstest]
#[case(Category::Tools, TOOLS_ENCHANTS.len())]
#[case(Category::Armor, ARMOR_ENCHANTS.len())]
#[case(Category::Extras, EXTRA_ENCHANTS.len())]
#[case(Category::Combos, BEST_COMBOS.len())]
#[case(Category::Table, TABLE_ENCHANTS.len())]
fn contextual_mode_returns_whole_collection(#[case] category: Category, #[case] expected: usize) {
    let results = evaluate(category, "", &FilterOptions::default());
    assert_eq!(results.len(), expected);
}

#[test]
fn contextual_tools_matches_fixture_order() {
    let results = evaluate(Category::Tools, "", &FilterOptions::default());
    assert_eq!(ids(&results), ["eff", "silk", "fort", "unb", "mend", "sharp"]);
    assert!(results.iter().all(|r| r.data_type() == DataType::Enchant));
}

#[test]
fn global_search_is_a_subset_satisfying_the_text_predicate() {
    for needle in ["bow", "water", "mending", "e"] {
        let results = evaluate(Category::Tools, needle, &FilterOptions::default());
        assert!(results.len() <= fixture_total());
        for record in &results {
            assert!(text_matches(record, needle), "{} kept wrongly", record.id());
        }
    }
}

#[test]
fn global_search_ignores_the_active_category() {
    let from_tools = evaluate(Category::Tools, "trident", &FilterOptions::default());
    let from_table = evaluate(Category::Table, "trident", &FilterOptions::default());
    assert_eq!(from_tools, from_table);
    assert!(!from_tools.is_empty());
}

#[test]
fn clearing_search_restores_contextual_results() {
    let before = evaluate(Category::Armor, "", &FilterOptions::default());
    let _global = evaluate(Category::Armor, "fortune", &FilterOptions::default());
    let after = evaluate(Category::Armor, "", &FilterOptions::default());
    assert_eq!(before, after);
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn searching_fortune_finds_enchant_and_combo_but_not_crop_master() {
    let results = evaluate(Category::Tools, "fortune", &FilterOptions::default());
    let ids = ids(&results);

    assert!(results
        .iter()
        .any(|r| r.id() == "fort" && r.data_type() == DataType::Enchant));
    assert!(ids.contains(&"god_pick_fortune")); // "Fortune Miner"

    // Lists Fortune III in its enchants but nowhere searchable
    assert!(!ids.contains(&"god_hoe_fortune"));
}

#[test]
fn table_filtered_to_bow_yields_power_punch_flame() {
    let filters = FilterOptions {
        item_type: Some("Bow".into()),
        ..Default::default()
    };
    let results = evaluate(Category::Table, "", &filters);
    assert_eq!(ids(&results), ["power", "punch", "flame"]);
}

#[test]
fn treasure_only_over_extras_is_empty() {
    let filters = FilterOptions {
        treasure_only: true,
        ..Default::default()
    };
    assert!(evaluate(Category::Extras, "", &filters).is_empty());
}

#[rstest]
#[case("Trident", Category::Extras, vec!["loyalty", "chan", "rip"])]
#[case("Helmet", Category::Armor, vec!["prot", "resp", "aqua", "thorns"])]
#[case("Crossbow", Category::Table, vec!["piercing", "quick", "multi"])]
fn item_type_filter_scopes_a_category(
    #[case] item: &str,
    #[case] category: Category,
    #[case] expected: Vec<&str>,
) {
    let filters = FilterOptions {
        item_type: Some(item.into()),
        ..Default::default()
    };
    assert_eq!(ids(&evaluate(category, "", &filters)), expected);
}

// =============================================================================
// Filter semantics
// =============================================================================

#[test]
fn treasure_only_never_yields_combos_or_tables() {
    let filters = FilterOptions {
        treasure_only: true,
        ..Default::default()
    };
    // Global mode gives the filter the widest candidate set
    let results = evaluate(Category::Tools, "e", &filters);
    assert!(!results.is_empty());
    for record in &results {
        assert_eq!(record.data_type(), DataType::Enchant);
        assert!(matches!(record, Record::Enchant(e) if e.is_treasure));
    }
}

#[test]
fn no_curses_removes_only_cursed_enchantments() {
    let filters = FilterOptions {
        no_curses: true,
        ..Default::default()
    };
    let results = evaluate(Category::Tools, "curse", &filters);
    for record in &results {
        if let Record::Enchant(e) = record {
            assert!(!e.is_curse);
        }
    }
    // Non-enchant records still pass: the table and combos carry no curse
    let combos = evaluate(Category::Combos, "", &filters);
    assert_eq!(combos.len(), BEST_COMBOS.len());
}

#[test]
fn filters_compose_order_independently() {
    // Each filter is a pure predicate, so the conjunction must equal the
    // pairwise intersection of the single-filter results, kept in the
    // order of any one of them.
    let item = FilterOptions {
        item_type: Some("All Tools".into()),
        ..Default::default()
    };
    let treasure = FilterOptions {
        treasure_only: true,
        ..Default::default()
    };
    let curses = FilterOptions {
        no_curses: true,
        ..Default::default()
    };
    let all = FilterOptions {
        item_type: Some("All Tools".into()),
        treasure_only: true,
        no_curses: true,
    };

    let query = "e";
    let by_item = evaluate(Category::Tools, query, &item);
    let by_treasure = evaluate(Category::Tools, query, &treasure);
    let by_curses = evaluate(Category::Tools, query, &curses);
    let combined = evaluate(Category::Tools, query, &all);

    let intersection: Vec<Record> = by_item
        .into_iter()
        .filter(|r| by_treasure.contains(r) && by_curses.contains(r))
        .collect();

    assert_eq!(combined, intersection);
    assert_eq!(ids(&combined), ["mend"]);
}

#[test]
fn item_type_filter_is_case_sensitive() {
    let filters = FilterOptions {
        item_type: Some("bow".into()),
        ..Default::default()
    };
    // Fixture labels are capitalized; a lowercase label matches nothing
    assert!(evaluate(Category::Table, "", &filters).is_empty());
}

#[test]
fn evaluate_is_idempotent() {
    let filters = FilterOptions {
        item_type: Some("Boots".into()),
        no_curses: true,
        ..Default::default()
    };
    for (category, query) in [
        (Category::Armor, ""),
        (Category::Armor, "falling"),
        (Category::Combos, "explorer"),
    ] {
        let a = evaluate(category, query, &filters);
        let b = evaluate(category, query, &filters);
        assert_eq!(a, b);
    }
}

#[test]
fn hopeless_inputs_yield_empty_not_errors() {
    let absurd = FilterOptions {
        item_type: Some("Banana".into()),
        treasure_only: true,
        no_curses: true,
    };
    assert!(evaluate(Category::Combos, "qqq", &absurd).is_empty());
    assert!(evaluate(Category::Combos, "", &absurd).is_empty());
}
