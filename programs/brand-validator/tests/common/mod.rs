#![allow(dead_code, deprecated)]

use anchor_lang::solana_program::{account_info::AccountInfo, entrypoint::ProgramResult};
use anchor_lang::{AccountDeserialize, AnchorDeserialize, InstructionData, ToAccountMetas};
use solana_program_test::*;
use solana_sdk::{
    hash::Hash,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, system_program,
    transaction::{Transaction, TransactionError},
};

use brand_validator::{
    constants::MAX_PRODUCT_ID_LENGTH, error::ProductError, pda::find_product_address,
    state::ProductAccount, ProductStatus,
};

// Anchor's entry wants `&'info [AccountInfo<'info>]`; the test processor only
// lends the slice, so give it a leaked copy that lives long enough.
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    brand_validator::entry(program_id, accounts, data)
}

pub struct TestContext {
    pub banks_client: BanksClient,
    pub payer: Keypair,
    pub recent_blockhash: Hash,
    pub program_id: Pubkey,
}

impl TestContext {
    pub async fn new() -> Self {
        let program_id = brand_validator::ID;
        let mut program_test = ProgramTest::new(
            "brand_validator",
            program_id,
            processor!(process_instruction),
        );
        program_test.prefer_bpf(false);

        let (banks_client, payer, recent_blockhash) = program_test.start().await;

        Self {
            banks_client,
            payer,
            recent_blockhash,
            program_id,
        }
    }

    /// New keypair holding `lamports`, funded by the payer
    pub async fn funded_keypair(&mut self, lamports: u64) -> Keypair {
        let keypair = Keypair::new();
        self.fund(&keypair.pubkey(), lamports).await;
        keypair
    }

    /// Sends `lamports` from the payer to any address
    pub async fn fund(&mut self, to: &Pubkey, lamports: u64) {
        let transfer_ix = system_instruction::transfer(&self.payer.pubkey(), to, lamports);

        let mut tx = Transaction::new_with_payer(&[transfer_ix], Some(&self.payer.pubkey()));
        tx.sign(&[&self.payer], self.recent_blockhash);
        self.banks_client.process_transaction(tx).await.unwrap();
    }

    /// Rent-exempt balance of a product account
    pub async fn product_rent(&mut self) -> u64 {
        let rent = self.banks_client.get_rent().await.unwrap();
        rent.minimum_balance(ProductAccount::SPACE)
    }

    pub fn product_address(&self, owner: &Pubkey) -> Pubkey {
        find_product_address(&self.program_id, owner).0
    }

    pub fn add_product_ix(&self, owner: &Pubkey, product_id: &str, owner_signs: bool) -> Instruction {
        let mut accounts = brand_validator::accounts::AddProduct {
            owner: *owner,
            product_account: self.product_address(owner),
            system_program: system_program::ID,
        }
        .to_account_metas(None);
        mark_signer(&mut accounts, owner, owner_signs);

        Instruction {
            program_id: self.program_id,
            accounts,
            data: brand_validator::instruction::AddProduct {
                product_id: product_id.to_string(),
            }
            .data(),
        }
    }

    pub fn validate_product_ix(&self, product_account: &Pubkey) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: brand_validator::accounts::ValidateProduct {
                product_account: *product_account,
            }
            .to_account_metas(None),
            data: brand_validator::instruction::ValidateProduct {}.data(),
        }
    }

    pub fn buy_product_ix(
        &self,
        product_account: &Pubkey,
        buyer: &Pubkey,
        product_id: &str,
        buyer_signs: bool,
    ) -> Instruction {
        let mut accounts = brand_validator::accounts::BuyProduct {
            product_account: *product_account,
            buyer: *buyer,
        }
        .to_account_metas(None);
        mark_signer(&mut accounts, buyer, buyer_signs);

        Instruction {
            program_id: self.program_id,
            accounts,
            data: brand_validator::instruction::BuyProduct {
                product_id: product_id.to_string(),
            }
            .data(),
        }
    }

    pub fn delete_product_ix(&self, product_account: &Pubkey, owner: &Pubkey, owner_signs: bool) -> Instruction {
        let mut accounts = brand_validator::accounts::DeleteProduct {
            product_account: *product_account,
            owner: *owner,
        }
        .to_account_metas(None);
        mark_signer(&mut accounts, owner, owner_signs);

        Instruction {
            program_id: self.program_id,
            accounts,
            data: brand_validator::instruction::DeleteProduct {}.data(),
        }
    }

    /// Sends `ixs` paid for by the context payer, co-signed by `signers`
    pub async fn send(&mut self, ixs: &[Instruction], signers: &[&Keypair]) -> Result<(), BanksClientError> {
        let tx = self.signed_transaction(ixs, signers);
        self.banks_client.process_transaction(tx).await
    }

    /// Sends `ixs` paid for by `fee_payer`
    pub async fn send_paid_by(
        &mut self,
        ixs: &[Instruction],
        fee_payer: &Keypair,
    ) -> Result<(), BanksClientError> {
        let mut tx = Transaction::new_with_payer(ixs, Some(&fee_payer.pubkey()));
        tx.sign(&[fee_payer], self.recent_blockhash);
        self.banks_client.process_transaction(tx).await
    }

    pub fn signed_transaction(&self, ixs: &[Instruction], signers: &[&Keypair]) -> Transaction {
        let mut all_signers: Vec<&Keypair> = vec![&self.payer];
        all_signers.extend_from_slice(signers);

        let mut tx = Transaction::new_with_payer(ixs, Some(&self.payer.pubkey()));
        tx.sign(all_signers.as_slice(), self.recent_blockhash);
        tx
    }

    pub async fn add_product(&mut self, owner: &Keypair, product_id: &str) -> Result<(), BanksClientError> {
        let ix = self.add_product_ix(&owner.pubkey(), product_id, true);
        self.send(&[ix], &[owner]).await
    }

    pub async fn buy_product(
        &mut self,
        owner: &Pubkey,
        buyer: &Keypair,
        product_id: &str,
    ) -> Result<(), BanksClientError> {
        let ix = self.buy_product_ix(&self.product_address(owner), &buyer.pubkey(), product_id, true);
        self.send(&[ix], &[buyer]).await
    }

    pub async fn delete_product(&mut self, owner: &Keypair) -> Result<(), BanksClientError> {
        let ix = self.delete_product_ix(&self.product_address(&owner.pubkey()), &owner.pubkey(), true);
        self.send(&[ix], &[owner]).await
    }

    /// Runs `validate_product` in simulation, the way a client reads a view
    pub async fn validate_product(&mut self, owner: &Pubkey) -> Result<ProductStatus, u32> {
        let ix = self.validate_product_ix(&self.product_address(owner));
        let tx = self.signed_transaction(&[ix], &[]);

        let simulation = self.banks_client.simulate_transaction(tx).await.unwrap();
        match simulation.result.expect("simulation produced no result") {
            Ok(()) => {
                let return_data = simulation
                    .simulation_details
                    .and_then(|details| details.return_data)
                    .expect("validate_product returned no data");
                assert_eq!(return_data.program_id, self.program_id);
                Ok(decode_status(return_data.data))
            }
            Err(err) => Err(instruction_error_code(err).expect("expected a custom program error")),
        }
    }

    /// Program log lines of a simulated run of `ixs`, failed or not
    pub async fn simulated_logs(&mut self, ixs: &[Instruction], signers: &[&Keypair]) -> Vec<String> {
        let tx = self.signed_transaction(ixs, signers);
        let simulation = self.banks_client.simulate_transaction(tx).await.unwrap();
        simulation
            .simulation_details
            .map(|details| details.logs)
            .unwrap_or_default()
    }

    pub async fn fetch_product(&mut self, owner: &Pubkey) -> Option<ProductAccount> {
        let account = self
            .banks_client
            .get_account(self.product_address(owner))
            .await
            .unwrap()?;
        Some(ProductAccount::try_deserialize(&mut account.data.as_slice()).unwrap())
    }

    pub async fn balance(&mut self, key: &Pubkey) -> u64 {
        self.banks_client.get_balance(*key).await.unwrap()
    }
}

fn mark_signer(accounts: &mut [solana_sdk::instruction::AccountMeta], key: &Pubkey, signs: bool) {
    for meta in accounts.iter_mut().filter(|meta| meta.pubkey == *key) {
        meta.is_signer = signs;
    }
}

// The runtime trims trailing zero bytes from return data, so a `false` flag
// arrives missing; pad back out before decoding.
fn decode_status(mut data: Vec<u8>) -> ProductStatus {
    data.resize(4 + MAX_PRODUCT_ID_LENGTH + 1, 0);
    ProductStatus::deserialize(&mut data.as_slice()).unwrap()
}

fn instruction_error_code(err: TransactionError) -> Option<u32> {
    match err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(code),
        _ => None,
    }
}

/// Custom program error code carried by a failed transaction
pub fn error_code(err: BanksClientError) -> Option<u32> {
    match err {
        BanksClientError::TransactionError(err) => instruction_error_code(err),
        BanksClientError::SimulationError { err, .. } => instruction_error_code(err),
        _ => None,
    }
}

pub fn assert_product_error(result: Result<(), BanksClientError>, expected: ProductError) {
    let err = result.expect_err("transaction should have failed");
    assert_eq!(error_code(err), Some(u32::from(expected)));
}
