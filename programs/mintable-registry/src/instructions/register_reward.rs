use anchor_lang::prelude::*;
use crate::constants::{LEDGER_SEED, REGISTRY_SEED};
use crate::state::{LedgerEntry, RegistryConfig, RewardRegistered};

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct RegisterReward<'info> {
    /// Must be the registry's authorized signer. Pays for new ledger entries.
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, RegistryConfig>,

    #[account(
        init_if_needed,
        payer = signer,
        space = LedgerEntry::SIZE,
        seeds = [LEDGER_SEED, account.as_ref()],
        bump,
    )]
    pub ledger: Account<'info, LedgerEntry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<RegisterReward>,
    account: Pubkey,
    amount: u128,
    task: String,
    task_id: u64,
    evidence_signer: Pubkey,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.bind(account, ctx.bumps.ledger);
    ctx.accounts
        .config
        .register_reward(&ctx.accounts.signer.key(), ledger, amount)?;

    msg!(
        "Registered reward of {} for {} (task {} '{}', earned: {})",
        amount,
        account,
        task_id,
        task,
        ledger.earned
    );

    emit!(RewardRegistered {
        account,
        amount,
        task,
        task_id,
        evidence_signer,
    });
    Ok(())
}
