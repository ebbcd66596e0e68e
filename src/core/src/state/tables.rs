use crate::shared::{CountryId, NamesLocaleId};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameKind {
    First,
    Last,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedName {
    pub name: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleNames {
    pub first_names: Vec<WeightedName>,
    pub last_names: Vec<WeightedName>,
}

/// Fictitious people names per names locale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeopleNameTable {
    locales: HashMap<NamesLocaleId, LocaleNames>,
}

impl PeopleNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, locale: NamesLocaleId, kind: NameKind, name: String, weight: u32) {
        let names = self.locales.entry(locale).or_default();
        let entry = WeightedName { name, weight };

        match kind {
            NameKind::First => names.first_names.push(entry),
            NameKind::Last => names.last_names.push(entry),
        }
    }

    pub fn locale(&self, locale: &NamesLocaleId) -> Option<&LocaleNames> {
        self.locales.get(locale)
    }

    pub fn pick<R: Rng + ?Sized>(
        &self,
        locale: &NamesLocaleId,
        kind: NameKind,
        rng: &mut R,
    ) -> Option<&str> {
        let names = self.locales.get(locale)?;

        let pool = match kind {
            NameKind::First => &names.first_names,
            NameKind::Last => &names.last_names,
        };

        let distribution = WeightedIndex::new(pool.iter().map(|n| n.weight)).ok()?;

        pool.get(distribution.sample(rng)).map(|n| n.name.as_str())
    }
}

/// Origin country → target country → probability that an academy player
/// revealed by a club of the origin country carries the target nationality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YouthRevealTable {
    entries: HashMap<CountryId, Vec<(CountryId, f64)>>,
}

impl YouthRevealTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, origin: CountryId, target: CountryId, probability: f64) {
        self.entries
            .entry(origin)
            .or_default()
            .push((target, probability.max(0.0)));
    }

    /// `None` when the roll lands outside every listed probability.
    pub fn draw<R: Rng + ?Sized>(&self, origin: &CountryId, rng: &mut R) -> Option<CountryId> {
        let targets = self.entries.get(origin)?;

        let roll: f64 = rng.gen_range(0.0..1.0);
        let mut cumulative = 0.0;

        for (target, probability) in targets {
            cumulative += probability;
            if roll < cumulative {
                return Some(target.clone());
            }
        }

        None
    }
}
