use anchor_lang::prelude::*;

/// Seed of the singleton registry configuration PDA
#[constant]
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Seed prefix of per-account ledger PDAs: [LEDGER_SEED, account]
#[constant]
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Layout version written by this build of the program.
/// Version 1: owner, authorized signer, bump.
/// Version 2: appends the authorized caller set.
#[constant]
pub const CURRENT_LAYOUT_VERSION: u8 = 2;

/// Upper bound on the authorized caller set (fixes the config account size)
pub const MAX_AUTHORIZED_CALLERS: usize = 16;
