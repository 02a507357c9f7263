// Export all instruction modules
//
// Handlers take `UncheckedAccount` instead of `Signer`/`Account<ProductAccount>`
// and allocate/close the product account themselves instead of using `init`
// and `close =`. Anchor's constraints fail with framework codes
// (AccountNotSigner, AccountNotInitialized, system "already in use"); every
// failure here must surface as a `ProductError`. Signatures go through
// `guard`, loading through `ProductAccount::load`.

pub mod add_product;
pub mod validate_product;
pub mod buy_product;
pub mod delete_product;

// Re-export the instruction structs for easy access
pub use add_product::*;
pub use validate_product::*;
pub use buy_product::*;
pub use delete_product::*;
