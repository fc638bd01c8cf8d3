use crate::constants::GAS_FOR_BALANCE_CALLBACK_TGAS;
use crate::errors::LedgerError;
use crate::state::LedgerState;
use crate::types::{BalanceRequest, BalanceResponse, Callback};
use near_sdk::json_types::U128;
use near_sdk::serde_json::json;
use near_sdk::{Gas, NearToken, Promise};

impl LedgerState {
    /// Responses come back in request order. One unknown token fails the
    /// whole batch.
    pub fn batch_balances(
        &self,
        requests: Vec<BalanceRequest>,
    ) -> Result<Vec<BalanceResponse>, LedgerError> {
        requests
            .into_iter()
            .map(|request| {
                self.token_exists(request.token_id)?;
                let balance = self.balance_of(request.token_id, &request.owner);
                Ok(BalanceResponse {
                    request,
                    balance: U128(balance),
                })
            })
            .collect()
    }
}

/// Fire-and-forget call of `callback` with `{"responses": [...]}`.
pub(crate) fn deliver_balances(callback: Callback, responses: Vec<BalanceResponse>) -> Promise {
    let args = json!({ "responses": responses }).to_string().into_bytes();
    Promise::new(callback.receiver_id).function_call(
        callback.method_name,
        args,
        NearToken::from_yoctonear(0),
        Gas::from_tgas(GAS_FOR_BALANCE_CALLBACK_TGAS),
    )
}
