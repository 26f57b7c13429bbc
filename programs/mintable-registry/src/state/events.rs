use anchor_lang::prelude::*;

/// Emitted when the signer credits a reward to an account
#[event]
pub struct RewardRegistered {
    /// Account the reward was credited to
    pub account: Pubkey,

    /// Amount credited to `earned`
    pub amount: u128,

    /// Human-readable label of the rewarded task
    pub task: String,

    /// Off-chain identifier of the rewarded task (not deduplicated)
    pub task_id: u64,

    /// Who produced the reward claim off-chain. Audit metadata only,
    /// not verified against any signature.
    pub evidence_signer: Pubkey,
}

/// Emitted when earned value is consumed by minting
#[event]
pub struct MintingRegistered {
    pub account: Pubkey,
    pub amount: u128,
}

#[event]
pub struct AuthorizedSignerChanged {
    pub signer: Pubkey,
}

#[event]
pub struct AuthorizedCallerAdded {
    pub caller: Pubkey,
}

#[event]
pub struct AuthorizedCallerRemoved {
    pub caller: Pubkey,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

/// Emitted once per layout upgrade of the registry config account
#[event]
pub struct RegistryMigrated {
    pub from_version: u8,
    pub to_version: u8,
}
