//! Day apportionment by the largest-remainder (Hare-Niemeyer) method.
//!
//! Each share is floored, then the leftover units go one at a time to the
//! shares with the largest fractional remainder. Equal remainders keep input
//! order, so catalog order breaks ties. The integer counts always sum to
//! the requested total.

use crate::phase::{PHASES, PhaseDefinition};

/// Days granted to one catalog phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseAllocation {
    /// Position of the phase in the catalog.
    pub index: usize,
    pub days: u32,
}

impl PhaseAllocation {
    pub fn definition(&self) -> &'static PhaseDefinition {
        &PHASES[self.index]
    }
}

/// Split `total` into integer parts proportional to `ratios`.
///
/// The result has one entry per ratio. When the ratios sum to 1.0 the
/// entries sum to `total`.
pub fn largest_remainder(total: u32, ratios: &[f64]) -> Vec<u32> {
    let ideal: Vec<f64> = ratios.iter().map(|r| r * f64::from(total)).collect();
    let mut counts: Vec<u32> = ideal.iter().map(|v| v.floor() as u32).collect();
    let used: u32 = counts.iter().sum();
    let remaining = total.saturating_sub(used) as usize;

    // sort_by is stable: equal remainders stay in input order
    let mut order: Vec<(usize, f64)> = ideal
        .iter()
        .enumerate()
        .map(|(i, v)| (i, v - v.floor()))
        .collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    for &(index, _) in order.iter().take(remaining) {
        counts[index] += 1;
    }

    // Unreachable for ratios summing to 1.0; keeps the plan non-empty regardless.
    if total > 0 && counts.iter().all(|&c| c == 0) {
        let fallback = order.first().map(|&(i, _)| i).unwrap_or(0);
        if let Some(count) = counts.get_mut(fallback) {
            *count = total;
        }
    }

    counts
}

/// Apportion `days` across the catalog. Phases granted zero days are
/// omitted; the rest come back in catalog order.
pub fn distribute_phases(days: u32) -> Vec<PhaseAllocation> {
    let ratios: Vec<f64> = PHASES.iter().map(|p| p.ratio).collect();
    largest_remainder(days, &ratios)
        .into_iter()
        .enumerate()
        .filter(|&(_, days)| days > 0)
        .map(|(index, days)| PhaseAllocation { index, days })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::PhaseKey;

    fn counts(days: u32) -> [u32; 4] {
        let mut out = [0; 4];
        for a in distribute_phases(days) {
            out[a.index] = a.days;
        }
        out
    }

    #[test]
    fn test_ten_days_ties_go_to_catalog_order() {
        assert_eq!(counts(10), [3, 4, 2, 1]);
    }

    #[test]
    fn test_known_allocations() {
        assert_eq!(counts(1), [0, 1, 0, 0]);
        assert_eq!(counts(2), [1, 1, 0, 0]);
        assert_eq!(counts(3), [1, 1, 1, 0]);
        assert_eq!(counts(4), [1, 1, 1, 1]);
        assert_eq!(counts(7), [2, 2, 2, 1]);
        assert_eq!(counts(30), [8, 11, 7, 4]);
        assert_eq!(counts(100), [25, 35, 25, 15]);
        assert_eq!(counts(365), [91, 128, 91, 55]);
    }

    #[test]
    fn test_conserves_total_for_full_range() {
        for days in 1..=365 {
            let sum: u32 = distribute_phases(days).iter().map(|a| a.days).sum();
            assert_eq!(sum, days, "days={days}");
        }
    }

    #[test]
    fn test_zero_day_phases_omitted() {
        let allocs = distribute_phases(1);
        assert_eq!(allocs.len(), 1);
        assert_eq!(allocs[0].definition().key, PhaseKey::Practice);
    }

    #[test]
    fn test_allocations_in_catalog_order() {
        for days in [2, 5, 17, 200] {
            let idx: Vec<usize> = distribute_phases(days).iter().map(|a| a.index).collect();
            let mut sorted = idx.clone();
            sorted.sort_unstable();
            assert_eq!(idx, sorted, "days={days}");
        }
    }

    #[test]
    fn test_zero_total_is_empty() {
        assert!(distribute_phases(0).is_empty());
    }

    #[test]
    fn test_zero_ratios_still_place_leftovers() {
        let out = largest_remainder(1, &[0.0, 0.0]);
        assert_eq!(out, vec![1, 0]);
    }

    #[test]
    fn test_no_ratios_no_panic() {
        assert!(largest_remainder(3, &[]).is_empty());
    }

    #[test]
    fn test_generic_ratios() {
        assert_eq!(largest_remainder(7, &[0.5, 0.5]), vec![4, 3]);
        assert_eq!(largest_remainder(9, &[1.0 / 3.0; 3]), vec![3, 3, 3]);
    }
}
