//! Client that derives PDAs and checks field limits before building

use {
    crate::{
        builder::{
            self, AuthorityAccounts, CreateAttributesAccounts, CreateMetadataAccounts,
            ReplaceAttributesAccounts, UpdateMetadataAccounts,
        },
        find_attributes_pda, find_metadata_pda,
        instruction::{CreateAttributes, CreateMetadata, ReplaceAttributes, UpdateMetadata},
        limits, system_program_id,
    },
    apl_token_sdk::{builder as token_builder, instruction::AuthorityType},
    solana_instruction::Instruction,
    solana_pubkey::Pubkey,
};

/// Builds metadata instructions for one deployment of the metadata program.
///
/// Only the mint is needed to address a token's metadata: both PDAs are
/// derived from it. The token program id is used by the mint-creating flows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TokenMetadataClient {
    pub program_id: Pubkey,
    pub token_program_id: Pubkey,
}

/// A mint account the caller has already allocated under the token program,
/// together with the settings to initialize it with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NewMint {
    /// Funds the metadata and attributes accounts
    pub payer: Pubkey,
    pub mint: Pubkey,
    /// Also becomes the update authority of the metadata
    pub mint_authority: Pubkey,
    pub freeze_authority: Option<Pubkey>,
    pub decimals: u8,
}

impl TokenMetadataClient {
    /// Client for `program_id`, minting through the default APL Token program.
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            token_program_id: apl_token_sdk::id(),
        }
    }

    pub fn with_token_program_id(self, token_program_id: Pubkey) -> Self {
        Self {
            token_program_id,
            ..self
        }
    }

    pub fn metadata_pda(&self, mint: &Pubkey) -> Pubkey {
        find_metadata_pda(&self.program_id, mint).0
    }

    pub fn attributes_pda(&self, mint: &Pubkey) -> Pubkey {
        find_attributes_pda(&self.program_id, mint).0
    }

    fn authority_accounts(&self, mint: &Pubkey, current_authority: &Pubkey) -> AuthorityAccounts {
        AuthorityAccounts {
            metadata: self.metadata_pda(mint),
            current_authority: *current_authority,
        }
    }

    /// `authority` is the mint authority, or the freeze authority when the
    /// mint authority has been cleared.
    pub fn create_metadata(
        &self,
        payer: &Pubkey,
        mint: &Pubkey,
        authority: &Pubkey,
        data: &CreateMetadata,
    ) -> anyhow::Result<Instruction> {
        limits::check_create_metadata(data)?;
        let accounts = CreateMetadataAccounts {
            payer: *payer,
            system_program: system_program_id(),
            mint: *mint,
            metadata: self.metadata_pda(mint),
            mint_authority: *authority,
        };
        Ok(builder::create_metadata(&self.program_id, &accounts, data))
    }

    pub fn update_metadata(
        &self,
        mint: &Pubkey,
        update_authority: &Pubkey,
        data: &UpdateMetadata,
    ) -> anyhow::Result<Instruction> {
        limits::check_update_metadata(data)?;
        let accounts = UpdateMetadataAccounts {
            metadata: self.metadata_pda(mint),
            update_authority: *update_authority,
        };
        Ok(builder::update_metadata(&self.program_id, &accounts, data))
    }

    pub fn create_attributes(
        &self,
        payer: &Pubkey,
        mint: &Pubkey,
        update_authority: &Pubkey,
        data: &CreateAttributes,
    ) -> anyhow::Result<Instruction> {
        limits::check_attributes(&data.data)?;
        let accounts = CreateAttributesAccounts {
            payer: *payer,
            system_program: system_program_id(),
            mint: *mint,
            attributes: self.attributes_pda(mint),
            update_authority: *update_authority,
            metadata: self.metadata_pda(mint),
        };
        Ok(builder::create_attributes(&self.program_id, &accounts, data))
    }

    pub fn replace_attributes(
        &self,
        mint: &Pubkey,
        update_authority: &Pubkey,
        data: &ReplaceAttributes,
    ) -> anyhow::Result<Instruction> {
        limits::check_attributes(&data.data)?;
        let accounts = ReplaceAttributesAccounts {
            attributes: self.attributes_pda(mint),
            update_authority: *update_authority,
            metadata: self.metadata_pda(mint),
        };
        Ok(builder::replace_attributes(&self.program_id, &accounts, data))
    }

    pub fn transfer_authority(
        &self,
        mint: &Pubkey,
        current_authority: &Pubkey,
        new_authority: &Pubkey,
    ) -> Instruction {
        builder::transfer_authority(
            &self.program_id,
            &self.authority_accounts(mint, current_authority),
            new_authority,
        )
    }

    pub fn make_immutable(&self, mint: &Pubkey, current_authority: &Pubkey) -> Instruction {
        builder::make_immutable(
            &self.program_id,
            &self.authority_accounts(mint, current_authority),
        )
    }

    fn initialize_mint(&self, new_mint: &NewMint) -> Instruction {
        token_builder::initialize_mint2(
            &self.token_program_id,
            &new_mint.mint,
            &new_mint.mint_authority,
            new_mint.freeze_authority.as_ref(),
            new_mint.decimals,
        )
    }

    /// `[InitializeMint2, CreateMetadata]`, metadata signed by the mint authority.
    pub fn create_token_with_metadata_tx(
        &self,
        new_mint: &NewMint,
        metadata: &CreateMetadata,
    ) -> anyhow::Result<Vec<Instruction>> {
        Ok(vec![
            self.initialize_mint(new_mint),
            self.create_metadata(
                &new_mint.payer,
                &new_mint.mint,
                &new_mint.mint_authority,
                metadata,
            )?,
        ])
    }

    /// [`Self::create_token_with_metadata_tx`] followed by `CreateAttributes`.
    pub fn create_token_with_metadata_and_attributes_tx(
        &self,
        new_mint: &NewMint,
        metadata: &CreateMetadata,
        attributes: &CreateAttributes,
    ) -> anyhow::Result<Vec<Instruction>> {
        let mut ixs = self.create_token_with_metadata_tx(new_mint, metadata)?;
        ixs.push(self.create_attributes(
            &new_mint.payer,
            &new_mint.mint,
            &new_mint.mint_authority,
            attributes,
        )?);
        Ok(ixs)
    }

    /// `[InitializeMint2, SetAuthority(MintTokens -> none), CreateMetadata]`.
    ///
    /// The mint authority is cleared before the metadata is created, so the
    /// freeze authority signs `CreateMetadata`. Fails when `new_mint` has no
    /// freeze authority.
    pub fn create_token_with_freeze_auth_metadata_tx(
        &self,
        new_mint: &NewMint,
        metadata: &CreateMetadata,
    ) -> anyhow::Result<Vec<Instruction>> {
        let Some(freeze_authority) = new_mint.freeze_authority else {
            anyhow::bail!("mint has no freeze authority");
        };
        let clear_mint_authority = token_builder::set_authority(
            &self.token_program_id,
            &new_mint.mint,
            None,
            AuthorityType::MintTokens,
            &new_mint.mint_authority,
            &[],
        );
        Ok(vec![
            self.initialize_mint(new_mint),
            clear_mint_authority,
            self.create_metadata(&new_mint.payer, &new_mint.mint, &freeze_authority, metadata)?,
        ])
    }

    /// `[TransferAuthority, UpdateMetadata]`; both authorities sign.
    pub fn transfer_authority_then_update_tx(
        &self,
        mint: &Pubkey,
        current_authority: &Pubkey,
        new_authority: &Pubkey,
        update: &UpdateMetadata,
    ) -> anyhow::Result<Vec<Instruction>> {
        Ok(vec![
            self.transfer_authority(mint, current_authority, new_authority),
            self.update_metadata(mint, new_authority, update)?,
        ])
    }
}
