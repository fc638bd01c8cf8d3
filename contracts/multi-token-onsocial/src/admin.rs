use crate::constants::GAS_MIGRATE_TGAS;
use crate::*;
use near_sdk::{Gas, NearToken};

#[near]
impl Contract {
    #[handle_result]
    pub fn set_manager(&mut self, new_manager: AccountId) -> Result<(), LedgerError> {
        let caller = env::predecessor_account_id();
        self.state.set_manager(&caller, new_manager.clone())?;
        LedgerEvent::ManagerUpdated { new_manager }.emit();
        Ok(())
    }

    /// Deploys the wasm passed as raw input, then runs `migrate`.
    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, LedgerError> {
        let caller = env::predecessor_account_id();
        if !self.state.is_manager(&caller) {
            return Err(LedgerError::Unauthorized);
        }
        let code = env::input().unwrap_or_else(|| env::panic_str("No input"));
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_yoctonear(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract: Self =
            env::state_read().unwrap_or_else(|| env::panic_str("State read failed"));
        let new_version = env!("CARGO_PKG_VERSION").to_string();
        let old_version = std::mem::replace(&mut contract.state.version, new_version.clone());
        if old_version == new_version {
            env::log_str("State is already at latest version");
        }

        LedgerEvent::ContractUpgraded {
            old_version,
            new_version,
        }
        .emit();
        contract
    }
}
