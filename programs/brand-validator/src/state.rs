use anchor_lang::prelude::*;

use crate::{
    constants::{DISCRIMINATOR_SIZE, MAX_PRODUCT_ID_LENGTH},
    error::ProductError,
    log_error,
    pda::create_product_address,
};

// The product record a company registers; one per owner
#[account]
#[derive(InitSpace, Debug)]
pub struct ProductAccount {
    // Company-chosen identifier, fixed at creation
    #[max_len(MAX_PRODUCT_ID_LENGTH)]
    pub product_id: String,

    // Company that created the record (only it may delete)
    pub owner: Pubkey,

    // Flips to true on the first purchase and never back
    pub is_buyed: bool,

    // Canonical bump of ["product", owner]
    pub bump: u8,

    // When the product was registered
    pub created_at: i64,

    // When the record last changed
    pub updated_at: i64,
}

/// What `validate_product` hands back to the caller
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProductStatus {
    pub product_id: String,
    pub is_buyed: bool,
}

impl ProductAccount {
    // 8 bytes discriminator + record data at maximum id length
    pub const SPACE: usize = DISCRIMINATOR_SIZE + ProductAccount::INIT_SPACE;

    pub fn new(product_id: String, owner: Pubkey, bump: u8, now: i64) -> Result<Self> {
        Self::validate_product_id(&product_id)?;

        Ok(Self {
            product_id,
            owner,
            is_buyed: false,
            bump,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn validate_product_id(product_id: &str) -> Result<()> {
        if product_id.is_empty() {
            log_error!(ProductError::EmptyProductId, "validate_product_id");
            return err!(ProductError::EmptyProductId);
        }
        if product_id.len() > MAX_PRODUCT_ID_LENGTH {
            log_error!(ProductError::ProductIdTooLong, "validate_product_id");
            return err!(ProductError::ProductIdTooLong);
        }
        Ok(())
    }

    pub fn status(&self) -> ProductStatus {
        ProductStatus {
            product_id: self.product_id.clone(),
            is_buyed: self.is_buyed,
        }
    }

    /// The one legal transition: unbought -> bought.
    /// The id check comes first so a wrong id never reveals purchase state.
    pub fn purchase(&mut self, product_id: &str, now: i64) -> Result<()> {
        if self.product_id != product_id {
            log_error!(ProductError::ProductMismatch, "purchase");
            return err!(ProductError::ProductMismatch);
        }
        if self.is_buyed {
            log_error!(ProductError::AlreadyBought, "purchase");
            return err!(ProductError::AlreadyBought);
        }

        self.is_buyed = true;
        self.updated_at = now;
        Ok(())
    }

    /// Reads the record behind `info`.
    ///
    /// An account that is empty, owned by another program, carries a foreign
    /// discriminator, or whose stored `(owner, bump)` does not re-derive its own
    /// address is reported as `NotFound`.
    pub fn load(info: &AccountInfo, program_id: &Pubkey) -> Result<Self> {
        let record = if is_live(info, program_id) {
            let data = info.try_borrow_data()?;
            let mut slice: &[u8] = &data;
            let decoded = ProductAccount::try_deserialize(&mut slice).ok();
            decoded
        } else {
            None
        };

        let record = record.filter(|record| {
            create_product_address(program_id, &record.owner, record.bump)
                .map_or(false, |expected| expected == info.key())
        });

        match record {
            Some(record) => Ok(record),
            None => {
                log_error!(ProductError::NotFound, "load");
                err!(ProductError::NotFound)
            }
        }
    }

    /// Writes the record back, discriminator included
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut cursor: &mut [u8] = &mut data;
        self.try_serialize(&mut cursor)
    }
}

/// True while the address holds data owned by this program
pub fn is_live(info: &AccountInfo, program_id: &Pubkey) -> bool {
    info.owner == program_id && !info.data_is_empty()
}
