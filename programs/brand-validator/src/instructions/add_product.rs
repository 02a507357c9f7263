use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::{
    constants::*,
    error::ProductError,
    events::ProductAdded,
    guard::{collect_signers, require_principal},
    log_error,
    pda::product_signer_seeds,
    state::{is_live, ProductAccount},
};

/// Register a product under the signing company.
///
/// The product account lives at ["product", owner], so a company holds at
/// most one live product. The account is allocated here rather than through
/// `init` so a taken address surfaces as `AlreadyExists` and a missing
/// signature as `Unauthorized`.
#[derive(Accounts)]
pub struct AddProduct<'info> {
    /// CHECK: intended owner; the guard requires its signature and it pays the rent
    #[account(mut)]
    pub owner: UncheckedAccount<'info>,

    /// CHECK: address pinned by the seeds below, vacancy checked in the handler
    #[account(
        mut,
        seeds = [PRODUCT_SEED, owner.key().as_ref()],
        bump
    )]
    pub product_account: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddProduct<'info> {
    pub fn add_product(&mut self, product_id: String, bumps: &AddProductBumps) -> Result<()> {
        let owner = self.owner.key();
        let owner_info = self.owner.to_account_info();
        let signers = collect_signers(&[&owner_info]);
        require_principal(&signers, &owner)?;

        let now = Clock::get()?.unix_timestamp;
        let record = ProductAccount::new(product_id, owner, bumps.product_account, now)?;

        if is_live(&self.product_account, &crate::ID) {
            log_error!(ProductError::AlreadyExists, "add_product");
            return err!(ProductError::AlreadyExists);
        }

        self.allocate(bumps.product_account)?;
        record.store(&self.product_account)?;

        emit!(ProductAdded {
            product: self.product_account.key(),
            owner,
            product_id: record.product_id.clone(),
            timestamp: now,
        });

        msg!("Product added successfully");
        msg!("Product ID: {}", record.product_id);
        msg!("Owner: {}", owner);
        msg!("Product account: {}", self.product_account.key());

        Ok(())
    }

    // Same steps Anchor's `init` takes: a plain create when the address holds
    // no lamports, otherwise top up to rent exemption, allocate and assign.
    fn allocate(&self, bump: u8) -> Result<()> {
        let owner = self.owner.key();
        let bump_bytes = [bump];
        let seeds = product_signer_seeds(&owner, &bump_bytes);
        let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

        let space = ProductAccount::SPACE;
        let rent_exempt = Rent::get()?.minimum_balance(space);
        let current = self.product_account.lamports();

        if current == 0 {
            let ctx = CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                CreateAccount {
                    from: self.owner.to_account_info(),
                    to: self.product_account.to_account_info(),
                },
                signer_seeds,
            );
            return system_program::create_account(ctx, rent_exempt, space as u64, &crate::ID);
        }

        let shortfall = rent_exempt.saturating_sub(current);
        if shortfall > 0 {
            let ctx = CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.owner.to_account_info(),
                    to: self.product_account.to_account_info(),
                },
            );
            system_program::transfer(ctx, shortfall)?;
        }

        let ctx = CpiContext::new_with_signer(
            self.system_program.to_account_info(),
            Allocate {
                account_to_allocate: self.product_account.to_account_info(),
            },
            signer_seeds,
        );
        system_program::allocate(ctx, space as u64)?;

        let ctx = CpiContext::new_with_signer(
            self.system_program.to_account_info(),
            Assign {
                account_to_assign: self.product_account.to_account_info(),
            },
            signer_seeds,
        );
        system_program::assign(ctx, &crate::ID)
    }
}
