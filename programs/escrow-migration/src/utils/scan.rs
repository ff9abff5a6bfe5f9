//! Maturity scan over a legacy schedule snapshot.

use crate::error::MigrationError;
use crate::state::LegacyEntry;

/// Outcome of splitting a legacy schedule at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaturitySplit {
    /// Sum of quantities matured at or before the scan time.
    pub total_vested: u64,
    /// Index of the first entry still in the future; equals the entry count
    /// when everything has matured.
    pub first_future_index: usize,
}

/// Scans `entries[next_unvested_index..]`, accumulating matured quantities
/// (`maturity_ts <= now_ts`) and stopping at the first future entry. The
/// schedule is sorted by ascending maturity, so no later entry can have
/// matured; the scan is O(matured entries), not O(entry count).
pub fn split_matured(
    entries: &[LegacyEntry],
    next_unvested_index: usize,
    now_ts: i64,
) -> Result<MaturitySplit, MigrationError> {
    let mut total_vested: u64 = 0;
    let mut first_future_index = entries.len();
    for (i, entry) in entries.iter().enumerate().skip(next_unvested_index) {
        if entry.maturity_ts > now_ts {
            first_future_index = i;
            break;
        }
        total_vested = total_vested
            .checked_add(entry.quantity)
            .ok_or(MigrationError::MathOverflow)?;
    }
    Ok(MaturitySplit {
        total_vested,
        first_future_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(maturity_ts: i64, quantity: u64) -> LegacyEntry {
        LegacyEntry {
            maturity_ts,
            quantity,
        }
    }

    #[test]
    fn splits_at_first_future_entry() {
        let entries = [entry(5, 10), entry(15, 20), entry(25, 30)];
        let split = split_matured(&entries, 0, 20).unwrap();
        assert_eq!(split.total_vested, 30);
        assert_eq!(split.first_future_index, 2);
    }

    #[test]
    fn boundary_maturity_counts_as_matured() {
        let entries = [entry(20, 10), entry(21, 20)];
        let split = split_matured(&entries, 0, 20).unwrap();
        assert_eq!(split.total_vested, 10);
        assert_eq!(split.first_future_index, 1);
    }

    #[test]
    fn fully_matured_schedule_leaves_nothing_future() {
        let entries = [entry(5, 10), entry(15, 20)];
        let split = split_matured(&entries, 0, 100).unwrap();
        assert_eq!(split.total_vested, 30);
        assert_eq!(split.first_future_index, entries.len());
    }

    #[test]
    fn empty_schedule_is_a_noop() {
        let split = split_matured(&[], 0, 100).unwrap();
        assert_eq!(split.total_vested, 0);
        assert_eq!(split.first_future_index, 0);
    }

    #[test]
    fn already_vested_prefix_is_skipped() {
        let entries = [entry(5, 10), entry(15, 20), entry(25, 30)];
        let split = split_matured(&entries, 1, 20).unwrap();
        // Entry 0 was vested on the legacy side already; only entry 1 counts.
        assert_eq!(split.total_vested, 20);
        assert_eq!(split.first_future_index, 2);
    }

    #[test]
    fn index_past_the_end_scans_nothing() {
        let entries = [entry(5, 10)];
        let split = split_matured(&entries, 5, 100).unwrap();
        assert_eq!(split.total_vested, 0);
        assert_eq!(split.first_future_index, entries.len());
    }

    #[test]
    fn overflow_in_accumulation_is_fatal() {
        let entries = [entry(1, u64::MAX), entry(2, 1)];
        assert!(matches!(
            split_matured(&entries, 0, 10),
            Err(MigrationError::MathOverflow)
        ));
    }

    #[test]
    fn all_future_schedule_vests_nothing() {
        let entries = [entry(50, 10), entry(60, 20)];
        let split = split_matured(&entries, 0, 20).unwrap();
        assert_eq!(split.total_vested, 0);
        assert_eq!(split.first_future_index, 0);
    }
}
