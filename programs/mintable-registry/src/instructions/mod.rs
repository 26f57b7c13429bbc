pub mod initialize;
pub mod migrate;
pub mod set_authority;
pub mod authorized_callers;
pub mod register_reward;
pub mod register_minting;
pub mod balances;

pub use initialize::*;
pub use migrate::*;
pub use set_authority::*;
pub use authorized_callers::*;
pub use register_reward::*;
pub use register_minting::*;
pub use balances::*;
