use anchor_lang::prelude::*;

use crate::constants::MAX_ACCOUNTS;
use crate::error::MigrationError;

/// Per-account escrow aggregates.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AccountBalance {
    pub wallet: Pubkey,
    /// Outstanding escrowed principal. Equals the sum of remaining amounts
    /// over this wallet's entries in the entry book.
    pub total_escrowed: u64,
    /// Cumulative value already released to the wallet.
    pub total_vested: u64,
    /// One-shot inbound-migration gate: armed by operator seeding, spent by
    /// the self-service migration, refused by the outbound burn.
    pub migration_pending: bool,
}

impl AccountBalance {
    pub const SIZE: usize = 32 + 8 + 8 + 1;
}

/// Balance ledger PDA: global escrowed total plus bounded per-account records.
#[account]
pub struct BalanceBook {
    /// Sum of `total_escrowed` over all records; reconciled off-chain against
    /// the vault's token balance.
    pub total_escrowed_balance: u64,
    pub records: Vec<AccountBalance>,
}

impl BalanceBook {
    /// Space for discriminator + global total + bounded records vec.
    pub const fn space() -> usize {
        8 + 8 + 4 + MAX_ACCOUNTS * AccountBalance::SIZE
    }

    pub fn record_of(&self, wallet: &Pubkey) -> Option<&AccountBalance> {
        self.records.iter().find(|r| r.wallet == *wallet)
    }

    fn record_mut(&mut self, wallet: &Pubkey) -> Option<&mut AccountBalance> {
        self.records.iter_mut().find(|r| r.wallet == *wallet)
    }

    pub fn escrowed_of(&self, wallet: &Pubkey) -> u64 {
        self.record_of(wallet).map_or(0, |r| r.total_escrowed)
    }

    pub fn vested_of(&self, wallet: &Pubkey) -> u64 {
        self.record_of(wallet).map_or(0, |r| r.total_vested)
    }

    pub fn is_pending(&self, wallet: &Pubkey) -> bool {
        self.record_of(wallet).is_some_and(|r| r.migration_pending)
    }

    /// Credits the seeded aggregates and arms the pending flag.
    pub fn seed_account(
        &mut self,
        wallet: Pubkey,
        escrowed: u64,
        vested: u64,
    ) -> std::result::Result<(), MigrationError> {
        let idx = match self.records.iter().position(|r| r.wallet == wallet) {
            Some(i) => i,
            None => {
                if self.records.len() >= MAX_ACCOUNTS {
                    return Err(MigrationError::BookFull);
                }
                self.records.push(AccountBalance {
                    wallet,
                    ..AccountBalance::default()
                });
                self.records.len() - 1
            }
        };

        if self.records[idx].migration_pending {
            return Err(MigrationError::AlreadyPending);
        }

        let rec = &mut self.records[idx];
        rec.total_escrowed = rec
            .total_escrowed
            .checked_add(escrowed)
            .ok_or(MigrationError::MathOverflow)?;
        rec.total_vested = rec
            .total_vested
            .checked_add(vested)
            .ok_or(MigrationError::MathOverflow)?;
        rec.migration_pending = true;

        self.total_escrowed_balance = self
            .total_escrowed_balance
            .checked_add(escrowed)
            .ok_or(MigrationError::MathOverflow)?;
        Ok(())
    }

    /// Debits both the per-account and the global escrowed totals.
    pub fn reduce_account_balance(
        &mut self,
        wallet: &Pubkey,
        amount: u64,
    ) -> std::result::Result<(), MigrationError> {
        let rec = self
            .record_mut(wallet)
            .ok_or(MigrationError::InsufficientBalance)?;
        rec.total_escrowed = rec
            .total_escrowed
            .checked_sub(amount)
            .ok_or(MigrationError::InsufficientBalance)?;
        self.total_escrowed_balance = self
            .total_escrowed_balance
            .checked_sub(amount)
            .ok_or(MigrationError::InsufficientBalance)?;
        Ok(())
    }

    /// Spends the one-shot gate; returns whether it was armed.
    pub fn clear_pending(&mut self, wallet: &Pubkey) -> bool {
        match self.record_mut(wallet) {
            Some(rec) if rec.migration_pending => {
                rec.migration_pending = false;
                true
            }
            _ => false,
        }
    }

    /// Credits value released directly to the wallet during migration.
    /// Escrowed totals are untouched: released value never entered the new
    /// ledger's remaining-amount accounting.
    pub fn record_released(
        &mut self,
        wallet: &Pubkey,
        amount: u64,
    ) -> std::result::Result<(), MigrationError> {
        let rec = self
            .record_mut(wallet)
            .ok_or(MigrationError::InsufficientBalance)?;
        rec.total_vested = rec
            .total_vested
            .checked_add(amount)
            .ok_or(MigrationError::MathOverflow)?;
        Ok(())
    }
}
