pub mod initialize;
pub mod deposit_tokens;
pub mod set_bridge;
pub mod register_legacy_schedule;
pub mod seed_account_balances;
pub mod import_vesting_entries;
pub mod migrate_vesting_schedule;
pub mod burn_for_migration;
pub mod pause;
pub mod unpause;
pub mod close_setup;
pub mod emit_escrow_quote;

pub use initialize::*;
pub use deposit_tokens::*;
pub use set_bridge::*;
pub use register_legacy_schedule::*;
pub use seed_account_balances::*;
pub use import_vesting_entries::*;
pub use migrate_vesting_schedule::*;
pub use burn_for_migration::*;
pub use pause::*;
pub use unpause::*;
pub use close_setup::*;
pub use emit_escrow_quote::*;
