use anchor_lang::prelude::*;
use crate::constants::{LEDGER_SEED, REGISTRY_SEED};
use crate::state::{LedgerEntry, MintingRegistered, RegistryConfig};

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct RegisterMinting<'info> {
    /// The authorized signer or one of the authorized callers
    #[account(mut)]
    pub minter: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, RegistryConfig>,

    // A missing entry has a zero balance; creating it lets the balance check
    // report InsufficientBalance instead of an account error.
    #[account(
        init_if_needed,
        payer = minter,
        space = LedgerEntry::SIZE,
        seeds = [LEDGER_SEED, account.as_ref()],
        bump,
    )]
    pub ledger: Account<'info, LedgerEntry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterMinting>, account: Pubkey, amount: u128) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.bind(account, ctx.bumps.ledger);
    ctx.accounts
        .config
        .register_minting(&ctx.accounts.minter.key(), ledger, amount)?;

    emit!(MintingRegistered { account, amount });

    msg!(
        "Registered minting of {} for {} (minted: {}, balance: {})",
        amount,
        account,
        ledger.minted,
        ledger.balance()
    );
    Ok(())
}
