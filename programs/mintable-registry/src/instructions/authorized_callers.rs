use anchor_lang::prelude::*;
use crate::instructions::AdministerRegistry;
use crate::state::{AuthorizedCallerAdded, AuthorizedCallerRemoved};

pub fn add_authorized_caller(ctx: Context<AdministerRegistry>, caller: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let inserted = config.add_authorized_caller(&ctx.accounts.owner.key(), caller)?;

    emit!(AuthorizedCallerAdded { caller });

    if inserted {
        msg!("Authorized caller {} ({} total)", caller, config.authorized_callers.len());
    } else {
        msg!("{} was already an authorized caller", caller);
    }
    Ok(())
}

pub fn remove_authorized_caller(ctx: Context<AdministerRegistry>, caller: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let removed = config.remove_authorized_caller(&ctx.accounts.owner.key(), &caller)?;

    emit!(AuthorizedCallerRemoved { caller });

    if removed {
        msg!("Revoked authorized caller {}", caller);
    } else {
        msg!("{} was not an authorized caller", caller);
    }
    Ok(())
}
