use crate::types::TokenId;
use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

#[near(event_json(standard = "nep297"))]
pub enum LedgerEvent {
    #[event_version("1.0.0")]
    TokenCreated {
        token_id: TokenId,
        name: String,
        decimals: u8,
        supply: U128,
        creator_id: AccountId,
    },
    #[event_version("1.0.0")]
    TokenMinted {
        token_id: TokenId,
        amount: U128,
        receiver_id: AccountId,
        available_supply: U128,
    },
    #[event_version("1.0.0")]
    MtTransfer {
        token_id: TokenId,
        sender_id: AccountId,
        receiver_id: AccountId,
        amount: U128,
        authorized_id: Option<AccountId>,
    },
    #[event_version("1.0.0")]
    OperatorAdded {
        token_id: TokenId,
        owner_id: AccountId,
        operator_id: AccountId,
    },
    #[event_version("1.0.0")]
    OperatorRemoved {
        token_id: TokenId,
        owner_id: AccountId,
        operator_id: AccountId,
    },
    #[event_version("1.0.0")]
    ManagerUpdated { new_manager: AccountId },
    #[event_version("1.0.0")]
    ContractUpgraded {
        old_version: String,
        new_version: String,
    },
}
