use crate::errors::LedgerError;
use crate::state::LedgerState;
use crate::types::TokenId;
use near_sdk::store::LookupMap;
use near_sdk::AccountId;
use std::collections::BTreeMap;

pub type BalanceKey = (TokenId, AccountId);

impl LedgerState {
    pub fn balance_of(&self, token_id: TokenId, account_id: &AccountId) -> u128 {
        self.balances
            .get(&(token_id, account_id.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// Guard used before any reference to `token_id`.
    pub fn token_exists(&self, token_id: TokenId) -> Result<(), LedgerError> {
        if self.total_supply.contains_key(&token_id) {
            Ok(())
        } else {
            Err(LedgerError::UndefinedToken(token_id))
        }
    }

    pub(crate) fn commit_balances(&mut self, changes: BTreeMap<BalanceKey, u128>) {
        for (key, balance) in changes {
            if balance == 0 {
                self.balances.remove(&key);
            } else {
                self.balances.insert(key, balance);
            }
        }
    }
}

/// Working copy of the balance table. Nothing reaches storage until the
/// caller commits `into_changes()`.
pub struct BalanceSheet<'a> {
    balances: &'a LookupMap<BalanceKey, u128>,
    pending: BTreeMap<BalanceKey, u128>,
}

impl<'a> BalanceSheet<'a> {
    pub fn new(balances: &'a LookupMap<BalanceKey, u128>) -> Self {
        Self {
            balances,
            pending: BTreeMap::new(),
        }
    }

    pub fn balance_of(&self, token_id: TokenId, account_id: &AccountId) -> u128 {
        let key = (token_id, account_id.clone());
        match self.pending.get(&key) {
            Some(balance) => *balance,
            None => self.balances.get(&key).copied().unwrap_or(0),
        }
    }

    pub fn credit(&mut self, token_id: TokenId, amount: u128, account_id: &AccountId) {
        let balance = self.balance_of(token_id, account_id);
        self.pending
            .insert((token_id, account_id.clone()), balance + amount);
    }

    pub fn debit(
        &mut self,
        token_id: TokenId,
        amount: u128,
        account_id: &AccountId,
    ) -> Result<(), LedgerError> {
        let balance = self
            .balance_of(token_id, account_id)
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::InsufficientBalance {
                token_id,
                account_id: account_id.clone(),
            })?;
        self.pending.insert((token_id, account_id.clone()), balance);
        Ok(())
    }

    pub fn into_changes(self) -> BTreeMap<BalanceKey, u128> {
        self.pending
    }
}
