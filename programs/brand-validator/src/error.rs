use anchor_lang::prelude::*;

/// Failure conditions of the product registry.
/// Every variant is raised before the handler writes anything.
#[error_code]
pub enum ProductError {
    // Authorization
    #[msg("Required principal did not sign the transaction")]
    Unauthorized,

    // Account lifecycle
    #[msg("A product account already exists for this owner")]
    AlreadyExists,

    #[msg("No product account exists at this address")]
    NotFound,

    // Purchase
    #[msg("Product has already been bought")]
    AlreadyBought,

    #[msg("Supplied product ID does not match the stored product")]
    ProductMismatch,

    // Input validation
    #[msg("Product ID exceeds maximum length of 500 bytes")]
    ProductIdTooLong,

    #[msg("Product ID cannot be empty")]
    EmptyProductId,

    // Math
    #[msg("Mathematical overflow in lamport accounting")]
    MathOverflow,
}

impl ProductError {
    /// Human-readable group used in log lines
    pub fn category(&self) -> &'static str {
        match self {
            ProductError::Unauthorized => "Authorization",
            ProductError::AlreadyExists | ProductError::NotFound => "Account Lifecycle",
            ProductError::AlreadyBought | ProductError::ProductMismatch => "Purchase",
            ProductError::ProductIdTooLong | ProductError::EmptyProductId => "Input Validation",
            ProductError::MathOverflow => "Mathematical Operations",
        }
    }
}

/// Logs an error with its category and the context it was raised in
#[macro_export]
macro_rules! log_error {
    ($error:expr, $context:expr) => {{
        let error: $crate::error::ProductError = $error;
        let category = error.category();
        msg!(
            "Error {}: {} in context: {}",
            u32::from(error),
            category,
            $context
        );
    }};
}
