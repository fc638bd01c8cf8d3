use crate::errors::LedgerError;
use crate::events::LedgerEvent;
use crate::ledger::BalanceSheet;
use crate::state::LedgerState;
use crate::types::{TokenId, TokenMetadata};
use near_sdk::json_types::U128;
use near_sdk::AccountId;

impl LedgerState {
    /// Registers a new token class owned by `creator`. Nothing is minted;
    /// the whole `supply` starts out available.
    pub fn create_token(
        &mut self,
        creator: &AccountId,
        name: String,
        decimals: u8,
        supply: u128,
    ) -> TokenId {
        let token_id = self.token_count + 1;
        self.token_metadata.insert(
            token_id,
            TokenMetadata {
                token_id,
                name: name.clone(),
                decimals,
                creator_id: creator.clone(),
            },
        );
        self.total_supply.insert(token_id, supply);
        self.available_supply.insert(token_id, supply);
        self.token_count = token_id;

        LedgerEvent::TokenCreated {
            token_id,
            name,
            decimals,
            supply: U128(supply),
            creator_id: creator.clone(),
        }
        .emit();
        token_id
    }

    pub fn mint_token(
        &mut self,
        caller: &AccountId,
        token_id: TokenId,
        amount: u128,
        receiver_id: &AccountId,
    ) -> Result<(), LedgerError> {
        let metadata = self
            .token_metadata
            .get(&token_id)
            .ok_or(LedgerError::UndefinedToken(token_id))?;
        if &metadata.creator_id != caller {
            return Err(LedgerError::NotOwner(token_id));
        }
        let available = self
            .available_supply
            .get(&token_id)
            .copied()
            .unwrap_or(0)
            .checked_sub(amount)
            .ok_or(LedgerError::SupplyExhausted(token_id))?;

        let mut sheet = BalanceSheet::new(&self.balances);
        sheet.credit(token_id, amount, receiver_id);
        let changes = sheet.into_changes();
        self.commit_balances(changes);
        self.available_supply.insert(token_id, available);

        LedgerEvent::TokenMinted {
            token_id,
            amount: U128(amount),
            receiver_id: receiver_id.clone(),
            available_supply: U128(available),
        }
        .emit();
        Ok(())
    }
}
