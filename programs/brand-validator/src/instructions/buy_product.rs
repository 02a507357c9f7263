use anchor_lang::prelude::*;

use crate::{
    events::ProductBought,
    guard::{collect_signers, require_any_signer},
    state::ProductAccount,
};

// Accounts needed for buying a product
#[derive(Accounts)]
pub struct BuyProduct<'info> {
    /// CHECK: loaded and address-checked by `ProductAccount::load`
    #[account(mut)]
    pub product_account: UncheckedAccount<'info>,

    /// CHECK: any key may buy; the guard only requires that it signed
    pub buyer: UncheckedAccount<'info>,
}

impl<'info> BuyProduct<'info> {
    pub fn buy_product(&mut self, product_id: String, program_id: &Pubkey) -> Result<()> {
        let buyer_info = self.buyer.to_account_info();
        let signers = collect_signers(&[&buyer_info]);
        require_any_signer(&signers)?;

        let mut record = ProductAccount::load(&self.product_account, program_id)?;

        // The runtime write-locks this account, so of two racing purchases
        // only the first can observe `is_buyed == false`
        let now = Clock::get()?.unix_timestamp;
        record.purchase(&product_id, now)?;
        record.store(&self.product_account)?;

        emit!(ProductBought {
            product: self.product_account.key(),
            buyer: self.buyer.key(),
            product_id: record.product_id.clone(),
            timestamp: now,
        });

        msg!("Product bought successfully");
        msg!("Product ID: {}", record.product_id);
        msg!("Buyer: {}", self.buyer.key());

        Ok(())
    }
}
