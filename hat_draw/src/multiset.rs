use std::collections::BTreeMap;
use crate::error::HatError;

/// Label -> count bag used for the expected balls of an experiment.
///
/// Zero counts are dropped on construction, so two bags holding the same
/// balls always compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Multiset {
    counts: BTreeMap<String, usize>,
}

pub(crate) fn validate_label(label: &str) -> Result<(), HatError> {
    if label.is_empty() {
        return Err(HatError::EmptyLabel);
    }
    Ok(())
}

impl Multiset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_counts<I, S>(counts: I) -> Result<Self, HatError>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        let mut multiset = Self::new();
        for (label, count) in counts {
            multiset.insert(label.as_ref(), count)?;
        }
        Ok(multiset)
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = BTreeMap::new();
        for label in labels {
            *counts.entry(label.as_ref().to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn insert(&mut self, label: &str, count: usize) -> Result<(), HatError> {
        validate_label(label)?;
        if count > 0 {
            *self.counts.entry(label.to_string()).or_insert(0) += count;
        }
        Ok(())
    }

    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Total number of balls, counting duplicates.
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, &count)| (label.as_str(), count))
    }

    /// Flat list with each label repeated `count` times.
    pub fn expand(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(label, count)| std::iter::repeat(label.to_string()).take(count))
            .collect()
    }

    pub fn is_subset_of(&self, other: &Multiset) -> bool {
        self.iter().all(|(label, count)| other.count(label) >= count)
    }

    /// True when every label appears in `drawn` at least as often as here.
    /// Counts only the wanted labels; `drawn` is never tallied.
    pub fn is_contained_in<S: AsRef<str>>(&self, drawn: &[S]) -> bool {
        if self.len() > drawn.len() {
            return false;
        }
        self.iter().all(|(label, count)| {
            drawn.iter().filter(|ball| ball.as_ref() == label).count() >= count
        })
    }
}
