use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::constants::{CURRENT_LAYOUT_VERSION, REGISTRY_SEED};
use crate::errors::RegistryError;
use crate::state::{RegistryConfig, RegistryHeader, RegistryMigrated};

// =============================================================================
// MIGRATE REGISTRY INSTRUCTION
// =============================================================================
//
// Run once by the owner after the program binary is upgraded to a build with
// a newer config layout. Grows the config account to the current size with a
// zeroed tail and stamps the new version. Existing fields are never moved, so
// owner, signer and every ledger entry carry over untouched.
// =============================================================================

#[derive(Accounts)]
pub struct MigrateRegistry<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: read through RegistryHeader; may be too short to load as the current RegistryConfig
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump,
        owner = crate::ID,
    )]
    pub config: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MigrateRegistry>) -> Result<()> {
    let config = ctx.accounts.config.to_account_info();

    let header = RegistryHeader::read(&config.try_borrow_data()?)?;
    require_keys_eq!(header.owner, ctx.accounts.owner.key(), RegistryError::Unauthorized);
    require!(
        header.layout_version < CURRENT_LAYOUT_VERSION,
        RegistryError::AlreadyInitialized
    );

    let required = Rent::get()?.minimum_balance(RegistryConfig::SIZE);
    let shortfall = required.saturating_sub(config.lamports());
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.owner.to_account_info(),
                    to: config.clone(),
                },
            ),
            shortfall,
        )?;
    }

    if config.data_len() < RegistryConfig::SIZE {
        config.realloc(RegistryConfig::SIZE, true)?;
    }
    let from_version = RegistryHeader::stamp_current(&mut config.try_borrow_mut_data()?)?;

    emit!(RegistryMigrated {
        from_version,
        to_version: CURRENT_LAYOUT_VERSION,
    });

    msg!(
        "Migrated registry layout v{} -> v{} (owner {}, signer {})",
        from_version,
        CURRENT_LAYOUT_VERSION,
        header.owner,
        header.authorized_signer
    );
    Ok(())
}
