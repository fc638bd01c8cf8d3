use crate::errors::LedgerError;
use crate::state::LedgerState;
use crate::types::TokenId;
use near_sdk::AccountId;

impl LedgerState {
    /// Succeeds when `caller` may move `owner`'s holdings of `token_id`.
    ///
    /// An owner with no operator entry at all fails with `NotFound` rather
    /// than `NotOperator`.
    pub fn check_authorized(
        &self,
        caller: &AccountId,
        owner: &AccountId,
        token_id: TokenId,
    ) -> Result<(), LedgerError> {
        if caller == owner {
            return Ok(());
        }
        let operators = self
            .operators
            .get(&(token_id, owner.clone()))
            .ok_or_else(|| LedgerError::NotFound {
                token_id,
                owner_id: owner.clone(),
            })?;
        if operators.contains(caller) {
            Ok(())
        } else {
            Err(LedgerError::NotOperator {
                token_id,
                owner_id: owner.clone(),
            })
        }
    }

    /// Non-failing variant for views.
    pub fn is_operator(&self, owner: &AccountId, operator: &AccountId, token_id: TokenId) -> bool {
        owner == operator
            || self
                .operators
                .get(&(token_id, owner.clone()))
                .is_some_and(|operators| operators.contains(operator))
    }
}
