// PDA Seeds for deterministic address generation

// Seed for Product PDAs: ["product", owner.key()]
// The address depends only on the owner, so each company holds one product at a time
pub const PRODUCT_SEED: &[u8] = b"product";

// Maximum product identifier length in bytes
pub const MAX_PRODUCT_ID_LENGTH: usize = 500;

// Anchor discriminator size (8 bytes)
pub const DISCRIMINATOR_SIZE: usize = 8;
