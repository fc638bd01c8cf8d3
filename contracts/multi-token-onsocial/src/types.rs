use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

pub type TokenId = u64;

#[near(serializers = [json, borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenMetadata {
    pub token_id: TokenId,
    pub name: String,
    pub decimals: u8,
    pub creator_id: AccountId,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct TransferDestination {
    pub to: AccountId,
    pub token_id: TokenId,
    pub amount: U128,
}

/// All legs of one transfer move funds out of `from`.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Transfer {
    pub from: AccountId,
    pub txs: Vec<TransferDestination>,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct OperatorParam {
    pub owner: AccountId,
    pub operator: AccountId,
    pub token_id: TokenId,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OperatorUpdate {
    AddOperator(OperatorParam),
    RemoveOperator(OperatorParam),
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceRequest {
    pub owner: AccountId,
    pub token_id: TokenId,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceResponse {
    pub request: BalanceRequest,
    pub balance: U128,
}

/// Contract and method that receive `balance_of` results.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Callback {
    pub receiver_id: AccountId,
    pub method_name: String,
}
