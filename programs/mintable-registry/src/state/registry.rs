use anchor_lang::prelude::*;
use crate::constants::{CURRENT_LAYOUT_VERSION, MAX_AUTHORIZED_CALLERS};
use crate::errors::RegistryError;
use crate::state::LedgerEntry;

// =============================================================================
// REGISTRY CONFIG - Authorization state
// =============================================================================
//
// Singleton PDA [REGISTRY_SEED]. Three roles:
// - owner: decides who holds the other two roles
// - authorized signer: registers rewards and mints
// - authorized callers: mint only
//
// Every mutating instruction passes through the guard methods below before it
// touches a ledger entry.
//
// Layout is append-only. Fields up to `bump` form layout version 1 and must
// never move; `authorized_callers` was appended in version 2.
// =============================================================================

#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    // === Layout version 1 ===
    /// Layout version this account was last written with (0 = uninitialised)
    pub layout_version: u8,
    /// Administrative authority over the signer and caller set
    pub owner: Pubkey,
    /// The single identity allowed to register rewards
    pub authorized_signer: Pubkey,
    /// PDA bump seed
    pub bump: u8,

    // === Layout version 2 ===
    /// Identities allowed to mint besides the signer
    pub authorized_callers: Vec<Pubkey>,
}

impl RegistryConfig {
    /// Account size under layout version 1
    pub const SIZE_V1: usize = 8 +  // discriminator
        1 +                         // layout_version
        32 +                        // owner
        32 +                        // authorized_signer
        1;                          // bump

    pub const SIZE: usize = Self::SIZE_V1 +
        4 + 32 * MAX_AUTHORIZED_CALLERS;  // authorized_callers

    /// One-time setup of a freshly created config account.
    /// The signer starts unset (default key) until the owner assigns one.
    pub fn initialize(&mut self, owner: Pubkey, bump: u8) -> Result<()> {
        require!(self.layout_version == 0, RegistryError::AlreadyInitialized);

        self.layout_version = CURRENT_LAYOUT_VERSION;
        self.owner = owner;
        self.authorized_signer = Pubkey::default();
        self.bump = bump;
        self.authorized_callers = Vec::new();
        Ok(())
    }

    // === Guard ===

    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.owner == *caller
    }

    pub fn is_signer(&self, caller: &Pubkey) -> bool {
        self.authorized_signer == *caller
    }

    /// The signer counts as an authorized caller
    pub fn is_authorized_caller(&self, caller: &Pubkey) -> bool {
        self.is_signer(caller) || self.authorized_callers.contains(caller)
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        if !self.is_owner(caller) {
            msg!("{} is not the owner", caller);
            return err!(RegistryError::Unauthorized);
        }
        Ok(())
    }

    pub fn require_signer(&self, caller: &Pubkey) -> Result<()> {
        if !self.is_signer(caller) {
            msg!("{} is not authorized to register rewards", caller);
            return err!(RegistryError::Unauthorized);
        }
        Ok(())
    }

    pub fn require_authorized_caller(&self, caller: &Pubkey) -> Result<()> {
        if !self.is_authorized_caller(caller) {
            msg!("{} is not an authorized caller or signer", caller);
            return err!(RegistryError::Unauthorized);
        }
        Ok(())
    }

    // === Administration (owner only) ===

    pub fn set_signer(&mut self, caller: &Pubkey, new_signer: Pubkey) -> Result<()> {
        self.require_owner(caller)?;
        self.authorized_signer = new_signer;
        Ok(())
    }

    /// Returns false when `target` was already authorized.
    pub fn add_authorized_caller(&mut self, caller: &Pubkey, target: Pubkey) -> Result<bool> {
        self.require_owner(caller)?;
        if self.authorized_callers.contains(&target) {
            return Ok(false);
        }
        require!(
            self.authorized_callers.len() < MAX_AUTHORIZED_CALLERS,
            RegistryError::CallerSetFull
        );

        self.authorized_callers.push(target);
        Ok(true)
    }

    /// Returns false when `target` was not authorized.
    pub fn remove_authorized_caller(&mut self, caller: &Pubkey, target: &Pubkey) -> Result<bool> {
        self.require_owner(caller)?;
        let before = self.authorized_callers.len();
        self.authorized_callers.retain(|c| c != target);
        Ok(self.authorized_callers.len() != before)
    }

    /// Hands administrative authority to `new_owner`, returning the previous owner.
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.require_owner(caller)?;
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    // === Registry state machine ===

    /// (earned, minted) -> (earned + amount, minted). Signer only.
    pub fn register_reward(
        &self,
        caller: &Pubkey,
        entry: &mut LedgerEntry,
        amount: u128,
    ) -> Result<()> {
        self.require_signer(caller)?;
        entry.credit_earned(amount)
    }

    /// (earned, minted) -> (earned, minted + amount). Signer or authorized caller,
    /// and never past the available balance.
    pub fn register_minting(
        &self,
        caller: &Pubkey,
        entry: &mut LedgerEntry,
        amount: u128,
    ) -> Result<()> {
        self.require_authorized_caller(caller)?;
        entry.consume_minted(amount)
    }
}
