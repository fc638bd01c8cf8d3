use crate::errors::LedgerError;
use crate::types::{TokenId, TokenMetadata};
use near_sdk::store::LookupMap;
use near_sdk::{near, AccountId, BorshStorageKey};

#[derive(BorshStorageKey)]
#[near]
enum StorageKey {
    Balances,
    Operators,
    TotalSupply,
    AvailableSupply,
    TokenMetadata,
}

#[near(serializers = [borsh])]
pub struct LedgerState {
    pub version: String,
    pub manager: AccountId,
    /// Sparse: a missing key is a zero balance.
    pub balances: LookupMap<(TokenId, AccountId), u128>,
    /// Operators per (token, owner), most recently added first.
    pub operators: LookupMap<(TokenId, AccountId), Vec<AccountId>>,
    pub total_supply: LookupMap<TokenId, u128>,
    pub available_supply: LookupMap<TokenId, u128>,
    pub token_metadata: LookupMap<TokenId, TokenMetadata>,
    /// Highest token id handed out so far.
    pub token_count: TokenId,
}

impl LedgerState {
    pub fn new(manager: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            manager,
            balances: LookupMap::new(StorageKey::Balances),
            operators: LookupMap::new(StorageKey::Operators),
            total_supply: LookupMap::new(StorageKey::TotalSupply),
            available_supply: LookupMap::new(StorageKey::AvailableSupply),
            token_metadata: LookupMap::new(StorageKey::TokenMetadata),
            token_count: 0,
        }
    }

    pub fn is_manager(&self, account_id: &AccountId) -> bool {
        &self.manager == account_id
    }

    pub fn set_manager(
        &mut self,
        caller: &AccountId,
        new_manager: AccountId,
    ) -> Result<(), LedgerError> {
        if !self.is_manager(caller) {
            return Err(LedgerError::Unauthorized);
        }
        self.manager = new_manager;
        Ok(())
    }
}
