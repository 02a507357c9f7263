use anchor_lang::prelude::*;

use crate::{constants::PRODUCT_SEED, error::ProductError};

/// Derives the product account address for `owner`.
///
/// The address is a pure function of the program id and the owner key, so any
/// client can locate a company's product without reading chain state first.
/// Returns the address together with its canonical bump.
pub fn find_product_address(program_id: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PRODUCT_SEED, owner.as_ref()], program_id)
}

/// Rebuilds the product address from a stored bump without searching.
/// Fails with `NotFound` when the seeds do not land off the curve.
pub fn create_product_address(program_id: &Pubkey, owner: &Pubkey, bump: u8) -> Result<Pubkey> {
    Pubkey::create_program_address(&[PRODUCT_SEED, owner.as_ref(), &[bump]], program_id)
        .map_err(|_| error!(ProductError::NotFound))
}

/// Seeds the program signs with when it allocates the product account
pub fn product_signer_seeds<'a>(owner: &'a Pubkey, bump: &'a [u8; 1]) -> [&'a [u8]; 3] {
    [PRODUCT_SEED, owner.as_ref(), bump]
}
