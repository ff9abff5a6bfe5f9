use anchor_lang::prelude::*;

use crate::constants::MAX_LEGACY_ENTRIES;

/// One row of a legacy escrow schedule: when it matures and how much.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegacyEntry {
    pub maturity_ts: i64,
    pub quantity: u64,
}

impl LegacyEntry {
    pub const SIZE: usize = 8 + 8;
}

/// Snapshot of one wallet's legacy escrow schedule, registered by the
/// operator during the setup window and read-only afterwards. Entries are in
/// ascending maturity order (enforced at registration).
#[account]
pub struct LegacySchedule {
    pub wallet: Pubkey,
    /// Index of the first entry not yet vested on the legacy side.
    pub next_unvested_index: u32,
    pub entries: Vec<LegacyEntry>,
}

impl LegacySchedule {
    /// Space for discriminator + wallet + index + bounded entries vec.
    pub const fn space() -> usize {
        8 + 32 + 4 + 4 + MAX_LEGACY_ENTRIES * LegacyEntry::SIZE
    }

    pub fn entry_count(&self) -> u32 {
        self.entries.len() as u32
    }
}
