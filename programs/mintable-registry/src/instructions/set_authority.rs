use anchor_lang::prelude::*;
use crate::constants::REGISTRY_SEED;
use crate::state::{AuthorizedSignerChanged, OwnershipTransferred, RegistryConfig};

/// Accounts for owner-only administration of the registry
#[derive(Accounts)]
pub struct AdministerRegistry<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, RegistryConfig>,
}

pub fn change_authorized_signer(ctx: Context<AdministerRegistry>, new_signer: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.set_signer(&ctx.accounts.owner.key(), new_signer)?;

    emit!(AuthorizedSignerChanged { signer: new_signer });

    msg!("Set authorized signer to {}", new_signer);
    Ok(())
}

pub fn transfer_ownership(ctx: Context<AdministerRegistry>, new_owner: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let previous_owner = config.transfer_ownership(&ctx.accounts.owner.key(), new_owner)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    msg!("Transferred registry ownership from {} to {}", previous_owner, new_owner);
    Ok(())
}
