// =============================================================================
// MINTABLE REGISTRY STATE
// =============================================================================
//
// - RegistryConfig: owner, authorized signer and authorized callers
// - LedgerEntry: earned/minted counters of one account
// - RegistryHeader: version-independent view of the config bytes, used when
//   migrating an account written by an older build
// =============================================================================

pub mod events;
pub mod layout;
pub mod ledger;
pub mod registry;

pub use events::*;
pub use layout::*;
pub use ledger::*;
pub use registry::*;
