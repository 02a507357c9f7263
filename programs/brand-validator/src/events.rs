use anchor_lang::prelude::*;

/// Emitted when a company registers a product
#[event]
pub struct ProductAdded {
    pub product: Pubkey,
    pub owner: Pubkey,
    pub product_id: String,
    pub timestamp: i64,
}

/// Emitted on the single successful purchase of a product
#[event]
pub struct ProductBought {
    pub product: Pubkey,
    pub buyer: Pubkey,
    pub product_id: String,
    pub timestamp: i64,
}

#[event]
pub struct ProductDeleted {
    pub product: Pubkey,
    pub owner: Pubkey,
    pub refunded_lamports: u64, // rent returned to the owner
    pub timestamp: i64,
}
