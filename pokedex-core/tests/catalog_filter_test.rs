//! Filter laws over a small multi-generation catalog

mod common;

use pokedex_core::catalog::filter::{
    apply_filters, filter_by_generation, filter_by_type, search, unique_generations, unique_types,
};
use pokedex_core::catalog::{Catalog, Creature, FilterCriteria};
use pretty_assertions::assert_eq;

use common::{small_catalog, starters};

fn ids(result: &[&Creature]) -> Vec<u32> {
    result.iter().map(|c| c.id()).collect()
}

fn all_ids(collection: &[Creature]) -> Vec<u32> {
    collection.iter().map(Creature::id).collect()
}

#[test]
fn test_no_criteria_is_identity() {
    let catalog = small_catalog();

    let result = apply_filters(&FilterCriteria::default(), &catalog);
    assert_eq!(ids(&result), all_ids(&catalog));

    let blank = FilterCriteria::new().with_search_term("   ").with_type("");
    assert_eq!(ids(&apply_filters(&blank, &catalog)), all_ids(&catalog));
}

#[test]
fn test_search_results_are_an_ordered_subset() {
    let catalog = small_catalog();

    for term in ["a", "e", "chu", "1", "5", "CHAR", "zzz"] {
        let result = search(term, &catalog);
        let needle = term.to_lowercase();

        for creature in &result {
            let hit = creature.names().any(|n| n.to_lowercase().contains(&needle))
                || creature.id().to_string().contains(&needle);
            assert!(hit, "'{}' should not match #{}", term, creature.id());
        }

        // Order preserved relative to the input
        let positions: Vec<usize> = result
            .iter()
            .map(|c| catalog.iter().position(|o| o.id() == c.id()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_search_matches_english_name_and_id() {
    let catalog = small_catalog();

    assert_eq!(ids(&search("mudkip", &catalog)), vec![258]);
    assert_eq!(ids(&search("15", &catalog)), vec![152, 155]);
    assert!(search("zzz", &catalog).is_empty());
}

#[test]
fn test_type_filter_is_case_insensitive_subset() {
    let catalog = small_catalog();

    let fire = filter_by_type("feu", &catalog);
    assert_eq!(ids(&fire), vec![4, 155]);
    assert!(fire.iter().all(|c| c.has_type("Feu")));

    assert_eq!(ids(&filter_by_type("POISON", &catalog)), vec![1]);
    assert!(filter_by_type("Dragon", &catalog).is_empty());
}

#[test]
fn test_records_without_types_never_match_a_type() {
    let mut catalog = small_catalog();
    catalog.push(Creature::new(132, "Métamorph").with_generation(1));

    assert!(!ids(&filter_by_type("Normal", &catalog)).contains(&132));
    assert_eq!(filter_by_type("", &catalog).len(), catalog.len());
}

#[test]
fn test_generation_filter() {
    let catalog = small_catalog();

    assert_eq!(ids(&filter_by_generation(Some(2), &catalog)), vec![152, 155]);
    assert_eq!(filter_by_generation(Some(0), &catalog).len(), catalog.len());
    assert_eq!(filter_by_generation(None, &catalog).len(), catalog.len());
    assert!(filter_by_generation(Some(9), &catalog).is_empty());
}

#[test]
fn test_combined_filters_equal_the_intersection() {
    let catalog = small_catalog();
    let criteria = FilterCriteria::new()
        .with_search_term("e")
        .with_type("Feu")
        .with_generation(2);

    let combined = ids(&apply_filters(&criteria, &catalog));

    let by_search = ids(&search("e", &catalog));
    let by_type = ids(&filter_by_type("Feu", &catalog));
    let by_generation = ids(&filter_by_generation(Some(2), &catalog));
    let intersection: Vec<u32> = all_ids(&catalog)
        .into_iter()
        .filter(|id| by_search.contains(id) && by_type.contains(id) && by_generation.contains(id))
        .collect();

    assert_eq!(combined, intersection);
    assert_eq!(combined, vec![155]);
}

#[test]
fn test_filters_compose_on_borrowed_results() {
    let catalog = small_catalog();

    let first_gen = filter_by_generation(Some(1), &catalog);
    let water = filter_by_type("Eau", first_gen);
    assert_eq!(ids(&water), vec![7]);
}

#[test]
fn test_unique_values_are_sorted_and_deduplicated() {
    let catalog = small_catalog();

    assert_eq!(
        unique_types(&catalog),
        vec!["Eau", "Feu", "Plante", "Poison", "Électrik"]
    );
    assert_eq!(unique_generations(&catalog), vec![1, 2, 3]);

    let empty: Vec<Creature> = Vec::new();
    assert!(unique_types(&empty).is_empty());
    assert!(unique_generations(&empty).is_empty());
}

#[test]
fn test_starter_scenario() {
    let catalog = Catalog::new(starters());

    assert_eq!(ids(&search("sala", &catalog)), vec![4]);
    assert_eq!(ids(&filter_by_type("Feu", &catalog)), vec![4]);
    assert_eq!(
        ids(&catalog.filter(&FilterCriteria::new().with_generation(1))),
        vec![1, 4, 7]
    );
}

#[test]
fn test_absent_catalog_filters_to_empty() {
    let catalog = Catalog::default();
    let criteria = FilterCriteria::new().with_search_term("pika").with_type("Électrik");

    assert!(catalog.filter(&criteria).is_empty());
    assert!(catalog.types().is_empty());
}
