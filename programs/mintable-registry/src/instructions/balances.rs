use anchor_lang::prelude::*;
use crate::constants::LEDGER_SEED;
use crate::state::LedgerEntry;

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct GetBalance<'info> {
    /// CHECK: may not exist yet; an empty account reads as a zero entry
    #[account(
        seeds = [LEDGER_SEED, account.as_ref()],
        bump,
    )]
    pub ledger: UncheckedAccount<'info>,
}

/// Earned minus minted
pub fn balance_of(ctx: Context<GetBalance>, account: Pubkey) -> Result<u128> {
    let balance = LedgerEntry::load_or_default(&ctx.accounts.ledger)?.balance();
    msg!("Balance of {}: {}", account, balance);
    Ok(balance)
}

pub fn balance_of_earned(ctx: Context<GetBalance>, account: Pubkey) -> Result<u128> {
    let earned = LedgerEntry::load_or_default(&ctx.accounts.ledger)?.earned_of();
    msg!("Earned by {}: {}", account, earned);
    Ok(earned)
}

pub fn balance_of_minted(ctx: Context<GetBalance>, account: Pubkey) -> Result<u128> {
    let minted = LedgerEntry::load_or_default(&ctx.accounts.ledger)?.minted_of();
    msg!("Minted for {}: {}", account, minted);
    Ok(minted)
}
