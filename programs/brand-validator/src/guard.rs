use anchor_lang::prelude::*;

use crate::{error::ProductError, log_error};

/// Keys of the instruction accounts that carry a signature
pub fn collect_signers(accounts: &[&AccountInfo]) -> Vec<Pubkey> {
    accounts
        .iter()
        .filter(|info| info.is_signer)
        .map(|info| *info.key)
        .collect()
}

/// Passes only when `principal` is among the signers.
/// Used for creation (intended owner) and deletion (recorded owner).
pub fn require_principal(signers: &[Pubkey], principal: &Pubkey) -> Result<()> {
    if !signers.contains(principal) {
        log_error!(ProductError::Unauthorized, "require_principal");
        msg!("missing signature from {}", principal);
        return err!(ProductError::Unauthorized);
    }
    Ok(())
}

/// Passes when anyone signed; purchases need a buyer but not a particular one
pub fn require_any_signer(signers: &[Pubkey]) -> Result<()> {
    if signers.is_empty() {
        log_error!(ProductError::Unauthorized, "require_any_signer");
        return err!(ProductError::Unauthorized);
    }
    Ok(())
}
