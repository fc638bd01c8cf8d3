use crate::errors::LedgerError;
use crate::events::LedgerEvent;
use crate::state::LedgerState;
use crate::types::{OperatorParam, OperatorUpdate, TokenId};
use near_sdk::store::LookupMap;
use near_sdk::AccountId;
use std::collections::BTreeMap;

pub type OperatorKey = (TokenId, AccountId);

/// Working copy of the operator registry, committed as a whole.
pub struct OperatorBook<'a> {
    registry: &'a LookupMap<OperatorKey, Vec<AccountId>>,
    pending: BTreeMap<OperatorKey, Vec<AccountId>>,
}

impl<'a> OperatorBook<'a> {
    pub fn new(registry: &'a LookupMap<OperatorKey, Vec<AccountId>>) -> Self {
        Self {
            registry,
            pending: BTreeMap::new(),
        }
    }

    pub fn operators(&self, token_id: TokenId, owner: &AccountId) -> Option<&Vec<AccountId>> {
        let key = (token_id, owner.clone());
        self.pending.get(&key).or_else(|| self.registry.get(&key))
    }

    fn entry(&mut self, key: OperatorKey) -> &mut Vec<AccountId> {
        let registry = self.registry;
        self.pending
            .entry(key)
            .or_insert_with_key(|key| registry.get(key).cloned().unwrap_or_default())
    }

    /// Puts `operator` at the front of the entry. Re-adding a present
    /// operator leaves the entry as is.
    pub fn add_operator(&mut self, token_id: TokenId, owner: &AccountId, operator: AccountId) {
        let operators = self.entry((token_id, owner.clone()));
        if !operators.contains(&operator) {
            operators.insert(0, operator);
        }
    }

    /// Drops every occurrence of `operator`. The entry itself is kept, even
    /// when it ends up empty.
    pub fn remove_operator(
        &mut self,
        token_id: TokenId,
        owner: &AccountId,
        operator: &AccountId,
    ) -> Result<(), LedgerError> {
        if self.operators(token_id, owner).is_none() {
            return Err(LedgerError::NotFound {
                token_id,
                owner_id: owner.clone(),
            });
        }
        self.entry((token_id, owner.clone()))
            .retain(|existing| existing != operator);
        Ok(())
    }

    pub fn into_changes(self) -> BTreeMap<OperatorKey, Vec<AccountId>> {
        self.pending
    }
}

fn check_owner(caller: &AccountId, param: &OperatorParam) -> Result<(), LedgerError> {
    if caller != &param.owner {
        return Err(LedgerError::NotOwner(param.token_id));
    }
    Ok(())
}

impl LedgerState {
    pub fn update_operators(
        &mut self,
        caller: &AccountId,
        updates: &[OperatorUpdate],
    ) -> Result<(), LedgerError> {
        let mut book = OperatorBook::new(&self.operators);
        for update in updates {
            match update {
                OperatorUpdate::AddOperator(param) => {
                    check_owner(caller, param)?;
                    book.add_operator(param.token_id, &param.owner, param.operator.clone());
                }
                OperatorUpdate::RemoveOperator(param) => {
                    check_owner(caller, param)?;
                    book.remove_operator(param.token_id, &param.owner, &param.operator)?;
                }
            }
        }
        for (key, operators) in book.into_changes() {
            self.operators.insert(key, operators);
        }

        for update in updates {
            match update {
                OperatorUpdate::AddOperator(param) => LedgerEvent::OperatorAdded {
                    token_id: param.token_id,
                    owner_id: param.owner.clone(),
                    operator_id: param.operator.clone(),
                }
                .emit(),
                OperatorUpdate::RemoveOperator(param) => LedgerEvent::OperatorRemoved {
                    token_id: param.token_id,
                    owner_id: param.owner.clone(),
                    operator_id: param.operator.clone(),
                }
                .emit(),
            }
        }
        Ok(())
    }
}
