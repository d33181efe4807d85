use num_traits::Zero;

use crate::collections::FxHashMap;


/// Estimated remaining cost per location.
/// Unlisted locations estimate to zero, so an empty table turns A* into uniform-cost search.
/// Admissibility is not checked.
#[derive(Clone, Debug)]
pub struct Heuristics<C> {
    estimates: FxHashMap<String, C>,
}

impl<C> Default for Heuristics<C> {
    fn default() -> Self {
        Self { estimates: FxHashMap::default() }
    }
}

impl<C: Zero + Copy> Heuristics<C> {

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the estimate for a location, replacing any earlier value
    pub fn set(&mut self, location: impl Into<String>, value: C) {
        self.estimates.insert(location.into(), value);
    }

    /// Stored estimate, or zero when the location is not listed
    pub fn get(&self, location: &str) -> C {
        self.estimates.get(location).copied().unwrap_or_else(C::zero)
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}

impl<C: Zero + Copy, S: Into<String>> FromIterator<(S, C)> for Heuristics<C> {
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (location, value) in iter {
            table.set(location, value);
        }
        table
    }
}
