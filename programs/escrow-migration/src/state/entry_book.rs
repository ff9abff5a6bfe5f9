use anchor_lang::prelude::*;

use crate::constants::MAX_ENTRIES;
use crate::error::MigrationError;

/// A single time-locked grant, keyed by `(owner, id)`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct VestingEntry {
    /// Monotonically increasing id, starting at 1; 0 marks a placeholder.
    pub id: u64,
    pub owner: Pubkey,
    /// Unix timestamp at which the full amount matures.
    pub maturity_ts: i64,
    /// Vesting duration backing the maturity, in seconds.
    pub duration: i64,
    /// Last vest interaction; 0 = never vested.
    pub last_vested_ts: i64,
    /// Amount originally escrowed into the entry.
    pub escrow_amount: u64,
    /// Amount not yet released; never exceeds `escrow_amount`.
    pub remaining_amount: u64,
}

impl VestingEntry {
    pub const SIZE: usize = 8 + 32 + 8 + 8 + 8 + 8 + 8;
}

/// Entry store PDA: bounded list of outstanding vesting entries.
#[account]
pub struct EntryBook {
    /// Next id to assign; ids are never reused.
    pub next_entry_id: u64,
    pub entries: Vec<VestingEntry>,
}

impl EntryBook {
    /// Space for discriminator + id counter + bounded entries vec.
    pub const fn space() -> usize {
        8 + 8 + 4 + MAX_ENTRIES * VestingEntry::SIZE
    }

    /// Appends a fully escrowed entry (`remaining == escrow`) and returns its id.
    pub fn append(
        &mut self,
        owner: Pubkey,
        maturity_ts: i64,
        duration: i64,
        amount: u64,
    ) -> std::result::Result<u64, MigrationError> {
        if self.entries.len() >= MAX_ENTRIES {
            return Err(MigrationError::BookFull);
        }
        let id = self.next_entry_id;
        self.next_entry_id = self
            .next_entry_id
            .checked_add(1)
            .ok_or(MigrationError::MathOverflow)?;
        self.entries.push(VestingEntry {
            id,
            owner,
            maturity_ts,
            duration,
            last_vested_ts: 0,
            escrow_amount: amount,
            remaining_amount: amount,
        });
        Ok(id)
    }

    pub fn find(&self, owner: &Pubkey, id: u64) -> Option<&VestingEntry> {
        self.entries
            .iter()
            .find(|e| e.owner == *owner && e.id == id)
    }

    pub fn remove(&mut self, owner: &Pubkey, id: u64) -> Option<VestingEntry> {
        self.entries
            .iter()
            .position(|e| e.owner == *owner && e.id == id)
            .map(|pos| self.entries.remove(pos))
    }

    /// Sum of remaining amounts over one wallet's entries (u128: the sum of
    /// many u64 amounts can exceed u64 range before validation).
    pub fn remaining_of(&self, owner: &Pubkey) -> u128 {
        self.entries
            .iter()
            .filter(|e| e.owner == *owner)
            .map(|e| e.remaining_amount as u128)
            .sum()
    }

    pub fn count_of(&self, owner: &Pubkey) -> u32 {
        self.entries.iter().filter(|e| e.owner == *owner).count() as u32
    }

    /// Burns the listed entries for one wallet: a live entry with remaining
    /// value is captured and removed; a zero-remaining or unknown id yields
    /// an empty placeholder and is left untouched. Positional correspondence
    /// with `ids` is preserved in the returned entries.
    pub fn burn_entries(
        &mut self,
        owner: &Pubkey,
        ids: &[u64],
    ) -> std::result::Result<(u64, Vec<VestingEntry>), MigrationError> {
        let mut burned: u64 = 0;
        let mut captured: Vec<VestingEntry> = Vec::with_capacity(ids.len());
        for &id in ids {
            let live = self
                .find(owner, id)
                .copied()
                .filter(|e| e.remaining_amount > 0);
            match live {
                Some(entry) => {
                    burned = burned
                        .checked_add(entry.remaining_amount)
                        .ok_or(MigrationError::MathOverflow)?;
                    self.remove(owner, id);
                    captured.push(entry);
                }
                None => captured.push(VestingEntry::default()),
            }
        }
        Ok((burned, captured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn empty_book() -> EntryBook {
        EntryBook {
            next_entry_id: 1,
            entries: Vec::new(),
        }
    }

    #[test]
    fn append_assigns_monotone_ids_and_full_escrow() {
        let mut book = empty_book();
        let a = book.append(wallet(1), 100, 60, 10).unwrap();
        let b = book.append(wallet(1), 200, 60, 20).unwrap();
        assert_eq!((a, b), (1, 2));

        let entry = book.find(&wallet(1), a).unwrap();
        assert_eq!(entry.escrow_amount, 10);
        assert_eq!(entry.remaining_amount, 10);
        assert_eq!(entry.last_vested_ts, 0);
        assert_eq!(book.remaining_of(&wallet(1)), 30);
    }

    #[test]
    fn find_is_scoped_to_owner() {
        let mut book = empty_book();
        let id = book.append(wallet(1), 100, 60, 10).unwrap();
        assert!(book.find(&wallet(2), id).is_none());
        assert!(book.remove(&wallet(2), id).is_none());
        assert!(book.find(&wallet(1), id).is_some());
    }

    #[test]
    fn burn_aggregates_live_entries_and_keeps_placeholders() {
        let mut book = empty_book();
        let zero = book.append(wallet(1), 100, 60, 0).unwrap();
        let five = book.append(wallet(1), 200, 60, 5).unwrap();
        let seven = book.append(wallet(1), 300, 60, 7).unwrap();

        let (burned, captured) = book.burn_entries(&wallet(1), &[zero, five, seven]).unwrap();
        assert_eq!(burned, 12);
        assert_eq!(captured.len(), 3);
        assert_eq!(captured[0], VestingEntry::default());
        assert_eq!(captured[1].remaining_amount, 5);
        assert_eq!(captured[2].remaining_amount, 7);

        // Zero-remaining entry is left in place; the live ones are gone.
        assert!(book.find(&wallet(1), zero).is_some());
        assert!(book.find(&wallet(1), five).is_none());
        assert!(book.find(&wallet(1), seven).is_none());
    }

    #[test]
    fn burn_of_unknown_id_yields_placeholder() {
        let mut book = empty_book();
        let id = book.append(wallet(1), 100, 60, 5).unwrap();
        let (burned, captured) = book.burn_entries(&wallet(1), &[999, id]).unwrap();
        assert_eq!(burned, 5);
        assert_eq!(captured[0], VestingEntry::default());
        assert_eq!(captured[1].id, id);
    }

    #[test]
    fn capacity_is_bounded() {
        let mut book = empty_book();
        for i in 0..MAX_ENTRIES {
            book.append(wallet(1), i as i64, 60, 1).unwrap();
        }
        assert!(matches!(
            book.append(wallet(1), 0, 60, 1),
            Err(MigrationError::BookFull)
        ));
    }
}
