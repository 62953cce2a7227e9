//! Exhaustive combination search.

use super::config::SearchRequest;
use super::types::{Assignment, Combination};
use crate::catalog::{Catalog, Item, Slot};
use crate::error::LoadoutResult;
use crate::filter::filter_items;
use crate::ranking::Ranker;
use crate::report::LoadoutReport;
use crate::scoring::score;
use tracing::{debug, warn};

/// Result of a search, before ranking.
#[derive(Debug, Clone, Default)]
pub struct SearchResult<'a> {
    /// Admissible combinations in enumeration order.
    pub combinations: Vec<Combination<'a>>,

    /// Number of full assignments whose weight was checked.
    pub evaluated: usize,

    /// Whether `max_evaluations` stopped the search early.
    pub truncated: bool,

    /// Weight ceiling the combinations were checked against.
    pub ceiling: f64,
}

/// Enumerates every admissible combination for a request.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search.
    ///
    /// Fails only when the request itself is invalid. Unknown slot names
    /// and empty candidate lists yield an empty result.
    pub fn run<'a>(
        catalog: &'a Catalog,
        request: &SearchRequest,
    ) -> LoadoutResult<SearchResult<'a>> {
        request.validate()?;

        let ceiling = request.ceiling();
        let mut result = SearchResult {
            ceiling,
            ..SearchResult::default()
        };

        let Some((slots, candidates)) = resolve_candidates(catalog, request) else {
            return Ok(result);
        };
        let radices: Vec<usize> = candidates.iter().map(Vec::len).collect();
        debug!(
            slots = slots.len(),
            assignments = radices.iter().product::<usize>(),
            ceiling,
            "starting search"
        );

        let mut indices = vec![0usize; slots.len()];
        loop {
            if request.max_evaluations > 0 && result.evaluated >= request.max_evaluations {
                warn!(limit = request.max_evaluations, "search stopped at evaluation limit");
                result.truncated = true;
                break;
            }
            result.evaluated += 1;

            let chosen = indices.iter().zip(&candidates).map(|(&i, c)| c[i]);
            let total_weight: f64 = chosen.clone().map(|item| item.weight).sum();
            let carried_total = total_weight + request.carried_load;

            if carried_total <= ceiling {
                let assignments: Vec<Assignment<'a>> = slots
                    .iter()
                    .zip(chosen)
                    .map(|(&slot, item)| Assignment { slot, item })
                    .collect();
                let scores = score(assignments.iter().map(|a| a.item), &request.dimensions);
                result.combinations.push(Combination {
                    assignments,
                    total_weight,
                    scores,
                    headroom: ceiling - carried_total,
                });
            }

            if !advance(&mut indices, &radices) {
                break;
            }
        }

        debug!(
            evaluated = result.evaluated,
            admissible = result.combinations.len(),
            "search finished"
        );
        Ok(result)
    }

    /// Runs the search and ranks the admissible combinations by the
    /// request's dimensions, then headroom.
    pub fn run_ranked<'a>(
        catalog: &'a Catalog,
        request: &SearchRequest,
    ) -> LoadoutResult<LoadoutReport<'a>> {
        let result = Self::run(catalog, request)?;
        let combinations = Ranker::for_dimensions(&request.dimensions).rank(result.combinations);
        Ok(LoadoutReport {
            combinations,
            dimensions: request.dimensions.clone(),
            ceiling: result.ceiling,
            evaluated: result.evaluated,
            truncated: result.truncated,
        })
    }
}

/// Filters each requested slot's catalog.
///
/// Returns `None` when some slot cannot be filled, since the cross product
/// is then empty.
fn resolve_candidates<'a>(
    catalog: &'a Catalog,
    request: &SearchRequest,
) -> Option<(Vec<Slot>, Vec<Vec<&'a Item>>)> {
    let max_item_weight = request.max_item_weight();
    let mut slots = Vec::with_capacity(request.slots.len());
    let mut candidates = Vec::with_capacity(request.slots.len());

    for name in &request.slots {
        let Some(slot) = Slot::from_name(name) else {
            warn!(slot = %name, "unrecognized slot name, no combinations possible");
            return None;
        };
        let items = filter_items(catalog.items(slot), max_item_weight, &request.availability);
        debug!(
            %slot,
            catalog = catalog.items(slot).len(),
            candidates = items.len(),
            "filtered slot"
        );
        if items.is_empty() {
            return None;
        }
        slots.push(slot);
        candidates.push(items);
    }

    Some((slots, candidates))
}

/// Steps `indices` to the next position in mixed radix, last digit
/// fastest. Returns `false` after the final position.
fn advance(indices: &mut [usize], radices: &[usize]) -> bool {
    for pos in (0..indices.len()).rev() {
        indices[pos] += 1;
        if indices[pos] < radices[pos] {
            return true;
        }
        indices[pos] = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Attribute;
    use crate::filter::AvailabilityFilter;
    use crate::scoring::Dimension;
    use crate::search::WeightClass;

    fn poise() -> Dimension {
        Dimension::Stat(Attribute::Poise)
    }

    fn small_catalog() -> Catalog {
        Catalog::new()
            .with_items(
                Slot::Head,
                vec![Item::new("Helm", 5.0).with_attribute(Attribute::Poise, 10.0)],
            )
            .with_items(
                Slot::Torso,
                vec![Item::new("Chest", 10.0).with_attribute(Attribute::Poise, 5.0)],
            )
    }

    fn wide_catalog() -> Catalog {
        let make = |prefix: &str, weights: &[f64]| -> Vec<Item> {
            weights
                .iter()
                .enumerate()
                .map(|(i, &w)| {
                    Item::new(format!("{prefix} {i}"), w)
                        .with_availability(if i % 2 == 0 { "Base Game" } else { "DLC" })
                        .with_attribute(Attribute::Poise, w * 2.0)
                })
                .collect()
        };
        Catalog::new()
            .with_items(Slot::Head, make("Helm", &[1.0, 3.0, 6.0]))
            .with_items(Slot::Torso, make("Chest", &[4.0, 8.0, 12.0, 20.0]))
            .with_items(Slot::Hands, make("Gloves", &[1.0, 2.0]))
            .with_items(Slot::Legs, make("Greaves", &[2.0, 5.0, 9.0]))
    }

    #[test]
    fn test_single_admissible_combination() {
        let catalog = small_catalog();
        let request = SearchRequest::default()
            .with_max_capacity(100.0)
            .with_slots(["head", "torso"])
            .with_weight_class(WeightClass::Medium)
            .with_dimensions([poise()]);

        let result = SearchRunner::run(&catalog, &request).unwrap();

        assert_eq!(result.combinations.len(), 1);
        let combo = &result.combinations[0];
        assert!((combo.total_weight - 15.0).abs() < 1e-10);
        assert!((combo.scores.value(&poise()) - 15.0).abs() < 1e-10);
        assert!((combo.headroom - 54.9).abs() < 1e-9);
        assert_eq!(combo.item(Slot::Head).unwrap().name, "Helm");
        assert_eq!(combo.item(Slot::Torso).unwrap().name, "Chest");
    }

    #[test]
    fn test_nothing_fits_light_class() {
        let catalog = small_catalog();
        let request = SearchRequest::default()
            .with_max_capacity(10.0)
            .with_slots(["head", "torso"])
            .with_weight_class(WeightClass::Light)
            .with_dimensions([poise()]);

        let result = SearchRunner::run(&catalog, &request).unwrap();
        assert!(result.combinations.is_empty());
        assert!(!result.truncated);
    }

    #[test]
    fn test_unknown_slot_yields_empty() {
        let catalog = small_catalog();
        let request = SearchRequest::default()
            .with_max_capacity(100.0)
            .with_slots(["head", "cape"]);

        let result = SearchRunner::run(&catalog, &request).unwrap();
        assert!(result.combinations.is_empty());
        assert_eq!(result.evaluated, 0);
    }

    #[test]
    fn test_slot_without_catalog_entries_yields_empty() {
        let catalog = small_catalog();
        let request = SearchRequest::default()
            .with_max_capacity(100.0)
            .with_slots([Slot::Head, Slot::Legs]);

        let result = SearchRunner::run(&catalog, &request).unwrap();
        assert!(result.combinations.is_empty());
    }

    #[test]
    fn test_exhaustive_count() {
        let catalog = wide_catalog();
        let request = SearchRequest::default()
            .with_max_capacity(1000.0)
            .with_weight_class(WeightClass::Heavy);

        let result = SearchRunner::run(&catalog, &request).unwrap();
        // every assignment fits under 999
        assert_eq!(result.evaluated, 3 * 4 * 2 * 3);
        assert_eq!(result.combinations.len(), 72);
    }

    #[test]
    fn test_admissible_only() {
        let catalog = wide_catalog();
        let request = SearchRequest::default()
            .with_max_capacity(50.0)
            .with_carried_load(6.0)
            .with_weight_class(WeightClass::Medium);

        let result = SearchRunner::run(&catalog, &request).unwrap();
        let ceiling = 50.0 * 0.699;

        assert!(!result.combinations.is_empty());
        for combo in &result.combinations {
            assert!(combo.total_weight + 6.0 <= ceiling + 1e-9);
            assert!(combo.headroom >= 0.0);
            assert_eq!(combo.len(), 4);
        }

        // brute-force count for comparison
        let mut expected = 0;
        for h in catalog.items(Slot::Head) {
            for t in catalog.items(Slot::Torso) {
                for g in catalog.items(Slot::Hands) {
                    for l in catalog.items(Slot::Legs) {
                        if h.weight + t.weight + g.weight + l.weight + 6.0 <= ceiling {
                            expected += 1;
                        }
                    }
                }
            }
        }
        assert_eq!(result.combinations.len(), expected);
    }

    #[test]
    fn test_enumeration_order_last_slot_fastest() {
        let catalog = wide_catalog();
        let request = SearchRequest::default()
            .with_max_capacity(1000.0)
            .with_slots(["torso", "head"]);

        let result = SearchRunner::run(&catalog, &request).unwrap();
        let names: Vec<(String, String)> = result
            .combinations
            .iter()
            .take(4)
            .map(|c| {
                (
                    c.assignments[0].item.name.clone(),
                    c.assignments[1].item.name.clone(),
                )
            })
            .collect();

        assert_eq!(names[0], ("Chest 0".to_string(), "Helm 0".to_string()));
        assert_eq!(names[1], ("Chest 0".to_string(), "Helm 1".to_string()));
        assert_eq!(names[2], ("Chest 0".to_string(), "Helm 2".to_string()));
        assert_eq!(names[3], ("Chest 1".to_string(), "Helm 0".to_string()));
        assert_eq!(result.combinations[0].assignments[0].slot, Slot::Torso);
    }

    #[test]
    fn test_availability_filter_applies() {
        let catalog = wide_catalog();
        let request = SearchRequest::default()
            .with_max_capacity(1000.0)
            .with_availability(AvailabilityFilter::new("dlc"));

        let result = SearchRunner::run(&catalog, &request).unwrap();
        // odd-indexed items only: 1 helm, 2 chests, 1 glove, 1 greave
        assert_eq!(result.combinations.len(), 2);
        for combo in &result.combinations {
            assert!(combo.items().all(|i| i.availability == "DLC"));
        }
    }

    #[test]
    fn test_evaluation_limit_truncates() {
        let catalog = wide_catalog();
        let request = SearchRequest::default()
            .with_max_capacity(1000.0)
            .with_max_evaluations(10);

        let result = SearchRunner::run(&catalog, &request).unwrap();
        assert!(result.truncated);
        assert_eq!(result.evaluated, 10);
        assert_eq!(result.combinations.len(), 10);
    }

    #[test]
    fn test_no_slots_is_the_empty_loadout() {
        let catalog = small_catalog();
        let request = SearchRequest::default()
            .with_max_capacity(100.0)
            .with_carried_load(20.0)
            .with_slots(Vec::<String>::new());

        let result = SearchRunner::run(&catalog, &request).unwrap();
        assert_eq!(result.combinations.len(), 1);
        assert!(result.combinations[0].is_empty());
        assert!((result.combinations[0].headroom - 49.9).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_request_rejected() {
        let catalog = small_catalog();
        let request = SearchRequest::default().with_max_capacity(f64::NAN);
        assert!(SearchRunner::run(&catalog, &request).is_err());
    }

    #[test]
    fn test_prefilter_uses_capacity_minus_load() {
        // A 40-weight chest passes the single-item bound (100 - 50) but the
        // heavy ceiling is then exceeded once the helm is added.
        let catalog = Catalog::new()
            .with_items(Slot::Head, vec![Item::new("Helm", 10.0)])
            .with_items(Slot::Torso, vec![Item::new("Chest", 40.0)]);
        let request = SearchRequest::default()
            .with_max_capacity(100.0)
            .with_carried_load(50.0)
            .with_slots(["head", "torso"])
            .with_weight_class(WeightClass::Heavy);

        let result = SearchRunner::run(&catalog, &request).unwrap();
        assert_eq!(result.evaluated, 1);
        assert!(result.combinations.is_empty());
    }

    #[test]
    fn test_run_ranked_orders_by_dimension() {
        let catalog = wide_catalog();
        let request = SearchRequest::default()
            .with_max_capacity(60.0)
            .with_weight_class(WeightClass::Medium)
            .with_dimensions([poise()]);

        let report = SearchRunner::run_ranked(&catalog, &request).unwrap();
        assert!(!report.is_empty());
        for pair in report.combinations.windows(2) {
            assert!(pair[0].scores.value(&poise()) >= pair[1].scores.value(&poise()));
        }
        assert_eq!(report.dimensions, vec![poise()]);
    }

    #[test]
    fn test_advance() {
        let mut idx = vec![0, 0];
        let radices = [2, 3];
        let mut seen = vec![idx.clone()];
        while advance(&mut idx, &radices) {
            seen.push(idx.clone());
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[1], vec![0, 1]);
        assert_eq!(seen[3], vec![1, 0]);
        assert!(!advance(&mut [], &[]));
    }
}
