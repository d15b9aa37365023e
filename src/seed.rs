//! One-shot seed of the formation catalogue. Formations whose name already exists are skipped.

use crate::error::StoreError;
use crate::mapper::to_row;
use crate::model::FormationPayload;
use crate::store::FormationStore;
use std::collections::HashSet;

/// 2026 catalogue: (name, start date, end date).
const CATALOGUE: &[(&str, &str, &str)] = &[
    ("Software Craft", "2026-01-08", "2026-01-09"),
    ("Pragmatic API Design", "2026-01-12", "2026-01-13"),
    ("Pair/Mob Programming", "2026-01-15", "2026-01-16"),
    ("Test-Driven Development (TDD)", "2026-01-22", "2026-01-23"),
    ("Pragmatic Architecture", "2026-01-29", "2026-01-30"),
    ("GenAI Craft Experience", "2026-02-12", "2026-02-13"),
    ("Crafting Security", "2026-02-05", "2026-02-06"),
    (".Net Craft", "2026-02-16", "2026-02-17"),
    ("Metrics", "2026-02-19", "2026-02-20"),
    ("Software Craft Advanced", "2026-03-09", "2026-03-10"),
    ("Casual Functional Programming", "2026-03-12", "2026-03-13"),
    ("Domain-Driven-Design (DDD)", "2026-03-16", "2026-03-17"),
    ("Working on Legacy Code (WOLC)", "2026-03-19", "2026-03-20"),
    ("Python Craft", "2026-03-23", "2026-03-24"),
    ("Infrastructure as Code", "2026-03-26", "2026-03-27"),
    ("Crafting Front-end Code (CFEC)", "2026-03-30", "2026-03-31"),
    ("Living Documentation AI", "2026-04-02", "2026-04-03"),
    ("Context Engineering", "2026-04-09", "2026-04-10"),
    ("EventStorming for architects", "2026-04-13", "2026-04-14"),
    ("FinDev : Finance-Aware Engineering", "2026-04-16", "2026-04-17"),
    ("BDD - Behavior Driven Development", "2026-05-06", "2026-05-07"),
    ("GreenIT", "2026-05-21", "2026-05-22"),
    ("Tech Lead Craft", "2026-05-28", "2026-05-29"),
    ("Immersion Craft (sur 3 jours)", "2026-06-01", "2026-06-03"),
    ("Crafting Springboot Services", "2026-06-11", "2026-06-12"),
    ("Crafting Machine Learning Powered products", "2026-06-18", "2026-06-19"),
];

pub fn default_formations() -> Vec<FormationPayload> {
    CATALOGUE
        .iter()
        .map(|(name, start, end)| FormationPayload {
            name: name.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            ..Default::default()
        })
        .collect()
}

/// Formations whose name is not in `existing`, in input order.
pub fn missing_formations<'a>(
    formations: &'a [FormationPayload],
    existing: &HashSet<String>,
) -> Vec<&'a FormationPayload> {
    formations.iter().filter(|f| !existing.contains(&f.name)).collect()
}

/// Inserts the missing formations in one batch. Returns how many were added.
pub async fn seed_formations(
    store: &dyn FormationStore,
    formations: &[FormationPayload],
) -> Result<usize, StoreError> {
    let existing: HashSet<String> = store.list_names().await?.into_iter().collect();
    let creations = missing_formations(formations, &existing);
    if creations.is_empty() {
        tracing::info!("Toutes les formations existent déjà en base.");
        return Ok(0);
    }
    let rows: Vec<_> = creations.into_iter().map(to_row).collect();
    store.insert_many(&rows).await?;
    tracing::info!("Ajoutées {} formations.", rows.len());
    Ok(rows.len())
}
