use anchor_lang::prelude::*;
use crate::errors::RegistryError;

// =============================================================================
// LEDGER ENTRY
// =============================================================================
//
// One PDA per tracked account: [LEDGER_SEED, account].
//
// `earned` only grows through reward registration, `minted` only grows through
// minting, and `minted <= earned` holds after every committed instruction.
// The spendable balance is derived, never stored.
//
// The layout has not changed since layout version 1. New fields may only be
// appended after `bump`.
// =============================================================================

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct LedgerEntry {
    /// The account whose rewards this entry tracks
    pub account: Pubkey,
    /// Cumulative value credited by reward registration
    pub earned: u128,
    /// Cumulative value consumed by minting
    pub minted: u128,
    /// PDA bump seed
    pub bump: u8,
}

impl LedgerEntry {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // account
        16 +                     // earned
        16 +                     // minted
        1;                       // bump

    /// Reads a ledger PDA that may not exist yet.
    /// An uninitialised account reads as an all-zero entry.
    pub fn load_or_default(info: &AccountInfo) -> Result<Self> {
        if info.data_is_empty() {
            return Ok(Self::default());
        }
        require_keys_eq!(
            *info.owner,
            crate::ID,
            anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
        );

        let data = info.try_borrow_data()?;
        Self::try_deserialize(&mut &data[..])
    }

    /// Records which account a freshly created entry belongs to.
    /// No-op for entries that are already bound.
    pub fn bind(&mut self, account: Pubkey, bump: u8) {
        if self.account == Pubkey::default() {
            self.account = account;
            self.bump = bump;
        }
    }

    /// Earned minus minted
    pub fn balance(&self) -> u128 {
        self.earned.saturating_sub(self.minted)
    }

    pub fn earned_of(&self) -> u128 {
        self.earned
    }

    pub fn minted_of(&self) -> u128 {
        self.minted
    }

    /// Credit a registered reward. Zero is a valid amount.
    pub fn credit_earned(&mut self, amount: u128) -> Result<()> {
        self.earned = self
            .earned
            .checked_add(amount)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Consume earned value. Leaves the entry untouched on failure.
    pub fn consume_minted(&mut self, amount: u128) -> Result<()> {
        require!(amount <= self.balance(), RegistryError::InsufficientBalance);

        self.minted = self
            .minted
            .checked_add(amount)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_code<T: std::fmt::Debug>(result: Result<T>) -> u32 {
        match result.unwrap_err() {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn absent_entry_reads_as_zero() {
        let entry = LedgerEntry::default();
        assert_eq!(entry.balance(), 0);
        assert_eq!(entry.earned_of(), 0);
        assert_eq!(entry.minted_of(), 0);
    }

    #[test]
    fn credits_are_additive() {
        let mut entry = LedgerEntry::default();
        entry.credit_earned(100).unwrap();
        entry.credit_earned(250).unwrap();
        assert_eq!(entry.earned_of(), 350);
        assert_eq!(entry.balance(), 350);
    }

    #[test]
    fn zero_credit_is_a_noop() {
        let mut entry = LedgerEntry::default();
        entry.credit_earned(0).unwrap();
        assert_eq!(entry, LedgerEntry::default());
    }

    #[test]
    fn credit_overflow_is_rejected() {
        let mut entry = LedgerEntry {
            earned: u128::MAX - 1,
            ..Default::default()
        };
        let code = error_code(entry.credit_earned(2));
        assert_eq!(code, u32::from(RegistryError::ArithmeticOverflow));
        assert_eq!(entry.earned_of(), u128::MAX - 1);
    }

    #[test]
    fn consuming_reduces_balance() {
        let mut entry = LedgerEntry::default();
        entry.credit_earned(100).unwrap();
        entry.consume_minted(50).unwrap();
        assert_eq!(entry.balance(), 50);
        assert_eq!(entry.minted_of(), 50);
        assert_eq!(entry.earned_of(), 100);

        entry.consume_minted(50).unwrap();
        assert_eq!(entry.balance(), 0);
    }

    #[test]
    fn overdraw_is_rejected_without_mutation() {
        let mut entry = LedgerEntry::default();
        entry.credit_earned(100).unwrap();
        let before = entry.clone();

        let code = error_code(entry.consume_minted(120));
        assert_eq!(code, u32::from(RegistryError::InsufficientBalance));
        assert_eq!(entry, before);
    }

    #[test]
    fn bind_only_sets_fresh_entries() {
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let mut entry = LedgerEntry::default();

        entry.bind(first, 254);
        entry.bind(second, 1);
        assert_eq!(entry.account, first);
        assert_eq!(entry.bump, 254);
    }

    #[test]
    fn load_or_default_handles_empty_and_stored_entries() {
        let key = Pubkey::new_unique();
        let system = Pubkey::default();
        let mut lamports = 0u64;
        let mut empty: Vec<u8> = Vec::new();
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut empty, &system, false, 0);
        assert_eq!(LedgerEntry::load_or_default(&info).unwrap(), LedgerEntry::default());

        let stored = LedgerEntry {
            account: Pubkey::new_unique(),
            earned: 100,
            minted: 40,
            bump: 255,
        };
        let mut data = Vec::with_capacity(LedgerEntry::SIZE);
        stored.try_serialize(&mut data).unwrap();
        let program = crate::ID;
        let mut lamports = 1u64;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &program, false, 0);

        let loaded = LedgerEntry::load_or_default(&info).unwrap();
        assert_eq!(loaded, stored);
        assert_eq!(loaded.balance(), 60);
    }
}
