use crate::*;

#[near]
impl Contract {
    pub fn get_balance(&self, owner: AccountId, token_id: TokenId) -> U128 {
        U128(self.state.balance_of(token_id, &owner))
    }

    #[handle_result]
    pub fn balance_of_batch(
        &self,
        requests: Vec<BalanceRequest>,
    ) -> Result<Vec<BalanceResponse>, LedgerError> {
        self.state.batch_balances(requests)
    }

    pub fn token_metadata(&self, token_id: TokenId) -> Option<TokenMetadata> {
        self.state.token_metadata.get(&token_id).cloned()
    }

    pub fn total_supply(&self, token_id: TokenId) -> Option<U128> {
        self.state.total_supply.get(&token_id).copied().map(U128)
    }

    pub fn available_supply(&self, token_id: TokenId) -> Option<U128> {
        self.state.available_supply.get(&token_id).copied().map(U128)
    }

    pub fn token_count(&self) -> TokenId {
        self.state.token_count
    }

    pub fn get_operators(&self, owner: AccountId, token_id: TokenId) -> Option<Vec<AccountId>> {
        self.state.operators.get(&(token_id, owner)).cloned()
    }

    pub fn is_operator(&self, owner: AccountId, operator: AccountId, token_id: TokenId) -> bool {
        self.state.is_operator(&owner, &operator, token_id)
    }

    pub fn get_version(&self) -> String {
        self.state.version.clone()
    }

    pub fn get_manager(&self) -> AccountId {
        self.state.manager.clone()
    }
}
