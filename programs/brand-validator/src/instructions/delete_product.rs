use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    error::ProductError,
    events::ProductDeleted,
    guard::{collect_signers, require_principal},
    log_error,
    state::ProductAccount,
};

/// Remove a product and hand its rent back to the owner.
///
/// After this instruction the address holds no lamports, belongs to the
/// system program and has no data, so the owner may register again.
#[derive(Accounts)]
pub struct DeleteProduct<'info> {
    /// CHECK: loaded and address-checked by `ProductAccount::load`
    #[account(mut)]
    pub product_account: UncheckedAccount<'info>,

    /// CHECK: must equal the recorded owner and sign; receives the rent
    #[account(mut)]
    pub owner: UncheckedAccount<'info>,
}

impl<'info> DeleteProduct<'info> {
    pub fn delete_product(&mut self, program_id: &Pubkey) -> Result<()> {
        let record = ProductAccount::load(&self.product_account, program_id)?;

        let owner_info = self.owner.to_account_info();
        let signers = collect_signers(&[&owner_info]);
        if let Err(error) = require_principal(&signers, &record.owner) {
            msg!(
                "invalid owner: expected {}, got {}",
                record.owner,
                self.owner.key()
            );
            return Err(error);
        }

        let refunded_lamports = self.close()?;

        emit!(ProductDeleted {
            product: self.product_account.key(),
            owner: record.owner,
            refunded_lamports,
            timestamp: Clock::get()?.unix_timestamp,
        });

        msg!("Product deleted successfully");
        msg!("Product ID: {}", record.product_id);
        msg!("Refunded {} lamports to {}", refunded_lamports, record.owner);

        Ok(())
    }

    // Mirrors Anchor's `close` constraint: drain, reassign, truncate
    fn close(&self) -> Result<u64> {
        let product = self.product_account.to_account_info();
        let owner = self.owner.to_account_info();

        let refunded = product.lamports();
        let credited = owner
            .lamports()
            .checked_add(refunded)
            .ok_or_else(|| {
                log_error!(ProductError::MathOverflow, "delete_product");
                error!(ProductError::MathOverflow)
            })?;

        **owner.try_borrow_mut_lamports()? = credited;
        **product.try_borrow_mut_lamports()? = 0;

        product.assign(&system_program::ID);
        product.realloc(0, false)?;

        Ok(refunded)
    }
}
