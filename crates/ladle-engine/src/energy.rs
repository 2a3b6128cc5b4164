//! Thermal-energy scoring and most-energy flags

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use ladle_core::{find_match, LookupTable, Lookups, RecipeBook, Value};

/// Per-dish energy results: resolved temperatures and durations, the
/// derived energy score, and the global most-energy flags. All maps are
/// keyed by dish id in dish-table order.
#[derive(Debug, Clone, Default)]
pub struct EnergyReport {
    pub temperatures: IndexMap<String, Value>,
    pub durations: IndexMap<String, Value>,
    pub energies: IndexMap<String, Value>,
    pub most_energy: IndexMap<String, bool>,
}

/// Resolve a raw temperature key, tolerating sloppy spellings via the
/// substring matcher.
pub fn resolve_temperature(key: &str, table: &LookupTable) -> Value {
    match find_match(key, table) {
        Some(canonical) => {
            if canonical != key {
                debug!("Fuzzy matched temperature '{}' to '{}'", key, canonical);
            }
            Value::from(table.get(canonical))
        }
        None => {
            warn!(
                "Temperature key '{}' not found. Available: {:?}",
                key,
                table.keys().collect::<Vec<_>>()
            );
            Value::Undefined
        }
    }
}

/// Resolve a raw duration key by exact lookup only; durations get no
/// fuzzy matching.
pub fn resolve_duration(key: &str, table: &LookupTable) -> Value {
    match table.get(key) {
        Some(minutes) => Value::Number(minutes),
        None => {
            warn!("Duration key '{}' not found in duration lookup", key);
            Value::Undefined
        }
    }
}

/// Score every dish (energy = temperature × duration) and flag the global
/// maximum.
///
/// The maximum is taken over defined energies only, and every dish whose
/// energy equals it is flagged, so ties all carry the flag. When no dish
/// has a defined energy there is no maximum and nothing is flagged.
pub fn compute_energy(book: &RecipeBook, lookups: &Lookups) -> EnergyReport {
    let mut report = EnergyReport::default();

    for dish in &book.dishes {
        let temperature = resolve_temperature(&dish.temperature, &lookups.temperature);
        let duration = resolve_duration(&dish.duration, &lookups.duration);
        let energy = temperature * duration;

        report.temperatures.insert(dish.name.clone(), temperature);
        report.durations.insert(dish.name.clone(), duration);
        report.energies.insert(dish.name.clone(), energy);
    }

    let max_energy = report
        .energies
        .values()
        .filter_map(Value::as_number)
        .fold(None, |max: Option<f64>, energy| match max {
            Some(current) if current >= energy => Some(current),
            _ => Some(energy),
        });

    for (dish, energy) in &report.energies {
        let flagged =
            matches!((energy.as_number(), max_energy), (Some(e), Some(max)) if e == max);
        report.most_energy.insert(dish.clone(), flagged);
    }

    info!("Energies: {:?}", report.energies);
    info!("Most energy flags: {:?}", report.most_energy);

    report
}
