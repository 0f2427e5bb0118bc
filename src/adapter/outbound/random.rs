//! Uniform random caregiver selection.

use rand::Rng;

use crate::domain::Username;
use crate::port::outbound::selector::SlotSelector;

/// Picks any open slot with equal probability.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformSelector;

impl SlotSelector for UniformSelector {
    fn select(&self, candidates: &[Username]) -> usize {
        rand::thread_rng().gen_range(0..candidates.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_within_bounds() {
        let candidates: Vec<Username> = (0..3).map(|i| Username::new(format!("c{i}"))).collect();
        for _ in 0..200 {
            assert!(UniformSelector.select(&candidates) < candidates.len());
        }
    }

    #[test]
    fn eventually_picks_every_candidate() {
        let candidates: Vec<Username> = (0..3).map(|i| Username::new(format!("c{i}"))).collect();
        let mut seen = [false; 3];
        for _ in 0..500 {
            seen[UniformSelector.select(&candidates)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
