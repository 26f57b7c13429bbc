use anchor_lang::prelude::*;
use crate::constants::REGISTRY_SEED;
use crate::errors::RegistryError;
use crate::program::MintableRegistry;
use crate::state::{AuthorizedSignerChanged, OwnershipTransferred, RegistryConfig};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the registry owner. Must be the program's upgrade authority.
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = RegistryConfig::SIZE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub config: Account<'info, RegistryConfig>,

    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, MintableRegistry>,

    #[account(
        constraint = program_data.upgrade_authority_address == Some(owner.key()) @ RegistryError::Unauthorized,
    )]
    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let config = &mut ctx.accounts.config;
    config.initialize(owner, ctx.bumps.config)?;

    emit!(OwnershipTransferred {
        previous_owner: Pubkey::default(),
        new_owner: owner,
    });
    emit!(AuthorizedSignerChanged {
        signer: config.authorized_signer,
    });

    msg!(
        "Initialized mintable registry (layout v{}) owned by {}",
        config.layout_version,
        owner
    );
    Ok(())
}
