use anchor_lang::prelude::*;
use anchor_lang::Discriminator;
use crate::constants::CURRENT_LAYOUT_VERSION;
use crate::errors::RegistryError;
use crate::state::RegistryConfig;

/// Layout-version-1 prefix of `RegistryConfig`.
///
/// Every later layout only appends fields, so this prefix can be read from the
/// raw bytes of any version, including ones too short to deserialize as the
/// current `RegistryConfig`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegistryHeader {
    pub layout_version: u8,
    pub owner: Pubkey,
    pub authorized_signer: Pubkey,
    pub bump: u8,
}

impl RegistryHeader {
    pub fn read(data: &[u8]) -> Result<Self> {
        require!(data.len() >= RegistryConfig::SIZE_V1, RegistryError::InvalidLayout);
        require!(
            data[..8] == RegistryConfig::DISCRIMINATOR[..],
            RegistryError::InvalidLayout
        );

        let header = Self::deserialize(&mut &data[8..])
            .map_err(|_| error!(RegistryError::InvalidLayout))?;
        require!(
            (1..=CURRENT_LAYOUT_VERSION).contains(&header.layout_version),
            RegistryError::InvalidLayout
        );
        Ok(header)
    }

    /// Stamps a config account, already grown to `RegistryConfig::SIZE` with a
    /// zeroed tail, as the current layout version. Appended fields start from
    /// their all-zero encoding. Returns the version it migrated from.
    pub fn stamp_current(data: &mut [u8]) -> Result<u8> {
        let header = Self::read(data)?;
        require!(
            header.layout_version < CURRENT_LAYOUT_VERSION,
            RegistryError::AlreadyInitialized
        );
        require!(data.len() >= RegistryConfig::SIZE, RegistryError::InvalidLayout);

        data[8] = CURRENT_LAYOUT_VERSION;
        Ok(header.layout_version)
    }
}
