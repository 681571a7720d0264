//! Nutrition lookup for recipe calculation
//!
//! The calculator resolves facts per ingredient in priority order: facts
//! attached to the ingredient itself, then the injected lookup, then zero.
//! Absence of data is never an error.

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::NutritionFacts;

/// Source of per-100g nutrition facts, keyed by ingredient display name
pub trait NutritionLookup {
    fn lookup(&self, name: &str) -> Option<NutritionFacts>;
}

/// Lookup that knows nothing; callers attach facts to ingredients directly
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNutrition;

impl NutritionLookup for NoNutrition {
    fn lookup(&self, _name: &str) -> Option<NutritionFacts> {
        None
    }
}

/// Per-100g facts for the house ingredient list, in tenths of a unit
/// (calories, protein, carbs, fat)
const BUILTIN_FACTS: &[(&str, i64, i64, i64, i64)] = &[
    ("Bread Flour", 3640, 120, 760, 15),
    ("Water", 0, 0, 0, 0),
    ("Starter", 3640, 120, 760, 15),
    ("Salt", 0, 0, 0, 0),
    ("Whole Wheat Flour", 3390, 130, 720, 25),
    ("Honey", 3040, 3, 820, 0),
    ("Cheddar Cheese", 4030, 250, 13, 330),
    ("Parmesan", 4310, 380, 41, 290),
    ("Olive Oil", 8840, 0, 0, 1000),
    ("Walnuts", 6540, 150, 140, 650),
    ("Rye Flour", 3380, 100, 750, 16),
    ("Butter", 7170, 9, 1, 810),
    ("Sugar", 3870, 0, 1000, 0),
    ("Brown Sugar", 3800, 0, 980, 0),
    ("Egg", 1550, 130, 11, 110),
    ("Milk", 420, 34, 50, 10),
    ("Cinnamon", 2470, 40, 810, 12),
    ("Chocolate Chips", 4780, 40, 650, 230),
    ("Yeast", 3250, 400, 410, 80),
];

/// In-memory nutrition table seeded with the house ingredient database
///
/// Matching is case-sensitive on the exact display name, the same names the
/// recipe editor offers as autocomplete entries.
#[derive(Debug, Clone)]
pub struct BuiltinNutritionTable {
    entries: HashMap<String, NutritionFacts>,
}

impl Default for BuiltinNutritionTable {
    fn default() -> Self {
        let mut entries = HashMap::with_capacity(BUILTIN_FACTS.len());
        for &(name, calories, protein, carbs, fat) in BUILTIN_FACTS {
            entries.insert(
                name.to_string(),
                NutritionFacts::new(tenths(calories), tenths(protein), tenths(carbs), tenths(fat)),
            );
        }
        Self { entries }
    }
}

impl BuiltinNutritionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry, e.g. for a seasonal ingredient
    pub fn insert(&mut self, name: impl Into<String>, facts: NutritionFacts) {
        self.entries.insert(name.into(), facts);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NutritionLookup for BuiltinNutritionTable {
    fn lookup(&self, name: &str) -> Option<NutritionFacts> {
        self.entries.get(name).cloned()
    }
}

fn tenths(value: i64) -> Decimal {
    Decimal::new(value, 1)
}
