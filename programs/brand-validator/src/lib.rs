#![allow(unexpected_cfgs, deprecated)]

use anchor_lang::prelude::*;

// Import our modules
pub mod constants;
pub mod error;
pub mod events;
pub mod guard;
pub mod instructions;
pub mod pda;
pub mod state;

// Import instruction handlers
use instructions::*;
pub use state::ProductStatus;

declare_id!("B6UasArGY3jpGk9wXif5yvgmgB24NMrms9RCGDhn4v7r");

#[program]
pub mod brand_validator {
    use super::*;

    /// Register a product under the signing company's derived account
    pub fn add_product(ctx: Context<AddProduct>, product_id: String) -> Result<()> {
        ctx.accounts.add_product(product_id, &ctx.bumps)
    }

    /// Report a product's identifier and whether it has been bought
    pub fn validate_product(ctx: Context<ValidateProduct>) -> Result<ProductStatus> {
        ctx.accounts.validate_product(ctx.program_id)
    }

    /// Mark a product as bought; succeeds once per product
    pub fn buy_product(ctx: Context<BuyProduct>, product_id: String) -> Result<()> {
        ctx.accounts.buy_product(product_id, ctx.program_id)
    }

    /// Close the product account and refund its rent to the owner
    pub fn delete_product(ctx: Context<DeleteProduct>) -> Result<()> {
        ctx.accounts.delete_product(ctx.program_id)
    }
}
