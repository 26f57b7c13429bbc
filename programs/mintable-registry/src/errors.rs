use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Unauthorized: caller does not hold the role required for this instruction")]
    Unauthorized,

    #[msg("Not enough balance")]
    InsufficientBalance,

    #[msg("Arithmetic overflow: amount exceeds the ledger counter width")]
    ArithmeticOverflow,

    #[msg("Registry already initialized at the current layout version")]
    AlreadyInitialized,

    #[msg("Authorized caller set is full")]
    CallerSetFull,

    #[msg("Invalid layout: registry account is malformed or from an unknown version")]
    InvalidLayout,
}
