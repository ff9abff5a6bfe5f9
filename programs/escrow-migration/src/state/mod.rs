pub mod balance_book;
pub mod entry_book;
pub mod ledger_state;
pub mod legacy_schedule;

pub use balance_book::*;
pub use entry_book::*;
pub use ledger_state::*;
pub use legacy_schedule::*;

#[cfg(test)]
mod tests {
    //! End-to-end accounting over the two books, mirroring the on-chain
    //! call sequence without the runtime: seed, migrate, burn.

    use anchor_lang::prelude::Pubkey;

    use super::*;
    use crate::constants::MIGRATION_ENTRY_DURATION;
    use crate::utils::scan;

    fn wallet(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn books() -> (BalanceBook, EntryBook) {
        (
            BalanceBook {
                total_escrowed_balance: 0,
                records: Vec::new(),
            },
            EntryBook {
                next_entry_id: 1,
                entries: Vec::new(),
            },
        )
    }

    /// Replays the self-service migration flow over the books.
    fn migrate(
        balances: &mut BalanceBook,
        entries: &mut EntryBook,
        wallet: Pubkey,
        legacy: &[LegacyEntry],
        next_unvested_index: usize,
        now_ts: i64,
    ) -> Result<u64, crate::error::MigrationError> {
        use crate::error::MigrationError;

        if !balances.is_pending(&wallet) {
            return Err(MigrationError::NoPendingMigration);
        }
        if balances.escrowed_of(&wallet) == 0 {
            return Err(MigrationError::ZeroBalance);
        }
        balances.clear_pending(&wallet);

        let split = scan::split_matured(legacy, next_unvested_index, now_ts)?;
        if split.total_vested != 0 {
            balances.record_released(&wallet, split.total_vested)?;
        }
        for e in legacy.iter().skip(split.first_future_index) {
            entries.append(wallet, e.maturity_ts, MIGRATION_ENTRY_DURATION, e.quantity)?;
        }
        Ok(split.total_vested)
    }

    /// Replays the outbound burn flow over the books.
    fn burn(
        balances: &mut BalanceBook,
        entries: &mut EntryBook,
        wallet: Pubkey,
        ids: &[u64],
    ) -> Result<(u64, Vec<VestingEntry>), crate::error::MigrationError> {
        use crate::error::MigrationError;

        if balances.is_pending(&wallet) {
            return Err(MigrationError::MigrationPending);
        }
        let (burned, captured) = entries.burn_entries(&wallet, ids)?;
        if burned != 0 {
            balances.reduce_account_balance(&wallet, burned)?;
        }
        Ok((burned, captured))
    }

    #[test]
    fn maturity_split_transplants_only_future_entries() {
        let (mut balances, mut entries) = books();
        let w = wallet(1);
        // Escrow seeded for the not-yet-matured remainder.
        balances.seed_account(w, 30, 0).unwrap();

        let legacy = [
            LegacyEntry { maturity_ts: 5, quantity: 10 },
            LegacyEntry { maturity_ts: 15, quantity: 20 },
            LegacyEntry { maturity_ts: 25, quantity: 30 },
        ];
        let vested = migrate(&mut balances, &mut entries, w, &legacy, 0, 20).unwrap();
        assert_eq!(vested, 30);

        assert_eq!(entries.entries.len(), 1);
        let moved = &entries.entries[0];
        assert_eq!(moved.maturity_ts, 25);
        assert_eq!(moved.escrow_amount, 30);
        assert_eq!(moved.duration, MIGRATION_ENTRY_DURATION);

        // Per-account escrow equals the sum of remaining entry amounts.
        assert_eq!(
            balances.escrowed_of(&w) as u128,
            entries.remaining_of(&w)
        );
        assert_eq!(balances.vested_of(&w), 30);
    }

    #[test]
    fn second_migration_fails_without_side_effects() {
        let (mut balances, mut entries) = books();
        let w = wallet(1);
        balances.seed_account(w, 50, 0).unwrap();
        let legacy = [LegacyEntry { maturity_ts: 100, quantity: 50 }];

        migrate(&mut balances, &mut entries, w, &legacy, 0, 10).unwrap();
        let escrowed = balances.escrowed_of(&w);
        let entry_count = entries.entries.len();

        let err = migrate(&mut balances, &mut entries, w, &legacy, 0, 10).unwrap_err();
        assert!(matches!(
            err,
            crate::error::MigrationError::NoPendingMigration
        ));
        assert_eq!(balances.escrowed_of(&w), escrowed);
        assert_eq!(entries.entries.len(), entry_count);
    }

    #[test]
    fn empty_legacy_history_is_a_valid_noop() {
        let (mut balances, mut entries) = books();
        let w = wallet(1);
        balances.seed_account(w, 10, 0).unwrap();

        let vested = migrate(&mut balances, &mut entries, w, &[], 0, 1_000).unwrap();
        assert_eq!(vested, 0);
        assert!(entries.entries.is_empty());
        assert!(!balances.is_pending(&w));
    }

    #[test]
    fn zero_balance_account_is_rejected() {
        let (mut balances, mut entries) = books();
        let w = wallet(1);
        // Fully vested on the legacy side: seeded with no escrow left.
        balances.seed_account(w, 0, 120).unwrap();
        let err = migrate(&mut balances, &mut entries, w, &[], 0, 0).unwrap_err();
        assert!(matches!(err, crate::error::MigrationError::ZeroBalance));
    }

    #[test]
    fn burn_refuses_wallet_awaiting_inbound_migration() {
        let (mut balances, mut entries) = books();
        let w = wallet(1);
        // An entry imported during setup, before the wallet self-migrates.
        let id = entries
            .append(w, 500, MIGRATION_ENTRY_DURATION, 25)
            .unwrap();
        balances.seed_account(w, 25, 0).unwrap();

        let err = burn(&mut balances, &mut entries, w, &[id]).unwrap_err();
        assert!(matches!(err, crate::error::MigrationError::MigrationPending));
        // Nothing removed, nothing debited.
        assert!(entries.find(&w, id).is_some());
        assert_eq!(balances.escrowed_of(&w), 25);
        assert_eq!(balances.total_escrowed_balance, 25);

        // Once the inbound migration completes, the burn goes through.
        balances.clear_pending(&w);
        let (burned, captured) = burn(&mut balances, &mut entries, w, &[id]).unwrap();
        assert_eq!(burned, 25);
        assert_eq!(captured.len(), 1);
        assert_eq!(balances.escrowed_of(&w), 0);
    }

    #[test]
    fn burn_conserves_global_total_across_accounts() {
        let (mut balances, mut entries) = books();
        let a = wallet(1);
        let b = wallet(2);
        balances.seed_account(a, 40, 0).unwrap();
        balances.seed_account(b, 60, 0).unwrap();
        let legacy_a = [
            LegacyEntry { maturity_ts: 100, quantity: 15 },
            LegacyEntry { maturity_ts: 200, quantity: 25 },
        ];
        let legacy_b = [LegacyEntry { maturity_ts: 150, quantity: 60 }];
        migrate(&mut balances, &mut entries, a, &legacy_a, 0, 10).unwrap();
        migrate(&mut balances, &mut entries, b, &legacy_b, 0, 10).unwrap();

        let ids: Vec<u64> = entries
            .entries
            .iter()
            .filter(|e| e.owner == a)
            .map(|e| e.id)
            .collect();
        let (burned, captured) = entries.burn_entries(&a, &ids).unwrap();
        assert_eq!(burned, 40);
        assert_eq!(captured.len(), 2);
        balances.reduce_account_balance(&a, burned).unwrap();

        assert_eq!(balances.escrowed_of(&a), 0);
        assert_eq!(entries.remaining_of(&a), 0);
        // Global total still equals the sum over accounts.
        let sum: u64 = balances.records.iter().map(|r| r.total_escrowed).sum();
        assert_eq!(balances.total_escrowed_balance, sum);
        assert_eq!(balances.total_escrowed_balance, 60);
        assert_eq!(
            balances.escrowed_of(&b) as u128,
            entries.remaining_of(&b)
        );
    }
}
