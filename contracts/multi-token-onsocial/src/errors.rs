use crate::types::TokenId;
use near_sdk::AccountId;
use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum LedgerError {
    UndefinedToken(TokenId),
    InsufficientBalance {
        token_id: TokenId,
        account_id: AccountId,
    },
    /// No operator entry recorded for the (token, owner) pair.
    NotFound {
        token_id: TokenId,
        owner_id: AccountId,
    },
    NotOperator {
        token_id: TokenId,
        owner_id: AccountId,
    },
    NotOwner(TokenId),
    SupplyExhausted(TokenId),
    InsufficientDeposit(String),
    Unauthorized,
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedToken(id) => write!(f, "Undefined token: {}", id),
            Self::InsufficientBalance {
                token_id,
                account_id,
            } => write!(
                f,
                "Insufficient balance: {} holds too little of token {}",
                account_id, token_id
            ),
            Self::NotFound { token_id, owner_id } => write!(
                f,
                "Not found: no operators recorded for {} on token {}",
                owner_id, token_id
            ),
            Self::NotOperator { token_id, owner_id } => write!(
                f,
                "Not operator: caller may not move token {} for {}",
                token_id, owner_id
            ),
            Self::NotOwner(id) => write!(f, "Not owner of token {}", id),
            Self::SupplyExhausted(id) => write!(f, "Supply exhausted for token {}", id),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized access"),
        }
    }
}
