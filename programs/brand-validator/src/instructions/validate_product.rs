use anchor_lang::prelude::*;

use crate::state::{ProductAccount, ProductStatus};

// Read-only lookup; anyone may call it and nobody has to sign
#[derive(Accounts)]
pub struct ValidateProduct<'info> {
    /// CHECK: ownership, discriminator and derived address verified by `ProductAccount::load`
    pub product_account: UncheckedAccount<'info>,
}

impl<'info> ValidateProduct<'info> {
    pub fn validate_product(&self, program_id: &Pubkey) -> Result<ProductStatus> {
        let record = ProductAccount::load(&self.product_account, program_id)?;

        msg!("Product ID: {}", record.product_id);
        msg!("Bought: {}", record.is_buyed);

        Ok(record.status())
    }
}
