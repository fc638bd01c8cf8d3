//! OnSocial multi-token ledger. Any account can create a token class with a
//! fixed supply, the creator mints from that supply, and holders or their
//! operators move balances in atomic batches.

use near_sdk::json_types::U128;
use crate::constants::ONE_YOCTO;
use crate::guards::check_at_least_one_yocto;
use near_sdk::{env, near, AccountId, PanicOnDefault, Promise};

mod admin;
mod auth;
pub mod constants;
mod errors;
mod events;
mod guards;
mod issuance;
mod ledger;
mod operators;
mod query;
mod state;
mod storage;
mod transfer;
mod types;
mod views;

pub use errors::LedgerError;
pub use events::LedgerEvent;
pub use ledger::BalanceSheet;
pub use operators::OperatorBook;
pub use state::LedgerState;
pub use types::{
    BalanceRequest, BalanceResponse, Callback, OperatorParam, OperatorUpdate, TokenId,
    TokenMetadata, Transfer, TransferDestination,
};

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    state: LedgerState,
}

#[near]
impl Contract {
    #[init]
    pub fn new(manager: AccountId) -> Self {
        Self {
            state: LedgerState::new(manager),
        }
    }

    /// Needs at least 1 yoctoNEAR. New balance entries are paid from the
    /// deposit and the rest is refunded.
    #[payable]
    #[handle_result]
    pub fn transfer(&mut self, transfers: Vec<Transfer>) -> Result<(), LedgerError> {
        check_at_least_one_yocto()?;
        let caller = env::predecessor_account_id();
        let before = self.state.storage_usage_flushed();
        self.state.transfer(&caller, &transfers)?;
        self.state.charge_storage(&caller, before, ONE_YOCTO.as_yoctonear())
    }

    /// Sends the requested balances to `callback` in one call.
    #[handle_result]
    pub fn balance_of(
        &self,
        requests: Vec<BalanceRequest>,
        callback: Callback,
    ) -> Result<Promise, LedgerError> {
        let responses = self.state.batch_balances(requests)?;
        Ok(query::deliver_balances(callback, responses))
    }

    #[payable]
    #[handle_result]
    pub fn update_operators(&mut self, updates: Vec<OperatorUpdate>) -> Result<(), LedgerError> {
        check_at_least_one_yocto()?;
        let caller = env::predecessor_account_id();
        let before = self.state.storage_usage_flushed();
        self.state.update_operators(&caller, &updates)?;
        self.state.charge_storage(&caller, before, ONE_YOCTO.as_yoctonear())
    }

    /// Returns the id of the new token. The caller becomes its creator and
    /// pays for the token's storage.
    #[payable]
    #[handle_result]
    pub fn create_token(
        &mut self,
        name: String,
        decimals: u8,
        supply: U128,
    ) -> Result<TokenId, LedgerError> {
        let creator = env::predecessor_account_id();
        let before = self.state.storage_usage_flushed();
        let token_id = self.state.create_token(&creator, name, decimals, supply.0);
        self.state.charge_storage(&creator, before, 0)?;
        Ok(token_id)
    }

    #[payable]
    #[handle_result]
    pub fn mint_token(
        &mut self,
        token_id: TokenId,
        amount: U128,
        receiver_id: AccountId,
    ) -> Result<(), LedgerError> {
        check_at_least_one_yocto()?;
        let caller = env::predecessor_account_id();
        let before = self.state.storage_usage_flushed();
        self.state.mint_token(&caller, token_id, amount.0, &receiver_id)?;
        self.state.charge_storage(&caller, before, ONE_YOCTO.as_yoctonear())
    }
}
