use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod mintable_registry {
    use super::*;

    // === Lifecycle ===

    /// One-time setup: the program's upgrade authority becomes the owner and
    /// the authorized signer starts unset
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Bring a config account written by an older build up to the current layout
    pub fn migrate_registry(ctx: Context<MigrateRegistry>) -> Result<()> {
        instructions::migrate::handler(ctx)
    }

    // === Administration (owner only) ===

    /// Replace the identity allowed to register rewards
    pub fn change_authorized_signer(
        ctx: Context<AdministerRegistry>,
        new_signer: Pubkey,
    ) -> Result<()> {
        instructions::set_authority::change_authorized_signer(ctx, new_signer)
    }

    /// Allow an additional identity to register minting
    pub fn add_authorized_caller(ctx: Context<AdministerRegistry>, caller: Pubkey) -> Result<()> {
        instructions::authorized_callers::add_authorized_caller(ctx, caller)
    }

    /// Revoke a previously authorized caller
    pub fn remove_authorized_caller(ctx: Context<AdministerRegistry>, caller: Pubkey) -> Result<()> {
        instructions::authorized_callers::remove_authorized_caller(ctx, caller)
    }

    pub fn transfer_ownership(ctx: Context<AdministerRegistry>, new_owner: Pubkey) -> Result<()> {
        instructions::set_authority::transfer_ownership(ctx, new_owner)
    }

    // === Ledger ===

    /// Credit a reward to `account` (authorized signer only)
    pub fn register_reward(
        ctx: Context<RegisterReward>,
        account: Pubkey,
        amount: u128,
        task: String,
        task_id: u64,
        evidence_signer: Pubkey,
    ) -> Result<()> {
        instructions::register_reward::handler(ctx, account, amount, task, task_id, evidence_signer)
    }

    /// Consume earned value of `account` (signer or authorized caller)
    pub fn register_minting(
        ctx: Context<RegisterMinting>,
        account: Pubkey,
        amount: u128,
    ) -> Result<()> {
        instructions::register_minting::handler(ctx, account, amount)
    }

    // === Queries ===

    pub fn balance_of(ctx: Context<GetBalance>, account: Pubkey) -> Result<u128> {
        instructions::balances::balance_of(ctx, account)
    }

    pub fn balance_of_earned(ctx: Context<GetBalance>, account: Pubkey) -> Result<u128> {
        instructions::balances::balance_of_earned(ctx, account)
    }

    pub fn balance_of_minted(ctx: Context<GetBalance>, account: Pubkey) -> Result<u128> {
        instructions::balances::balance_of_minted(ctx, account)
    }
}
