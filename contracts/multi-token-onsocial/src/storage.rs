use crate::errors::LedgerError;
use crate::state::LedgerState;
use near_sdk::{env, AccountId, NearToken, Promise};

pub(crate) fn storage_cost(bytes: u64) -> u128 {
    env::storage_byte_cost().as_yoctonear() * bytes as u128
}

pub(crate) fn refund_excess(payer: &AccountId, deposit: u128, price: u128) {
    let refund = deposit.saturating_sub(price);
    if refund > 0 {
        let _ = Promise::new(payer.clone()).transfer(NearToken::from_yoctonear(refund));
    }
}

impl LedgerState {
    // Writes are cached by the maps; flush before reading usage.
    pub(crate) fn flush_state(&mut self) {
        self.balances.flush();
        self.operators.flush();
        self.total_supply.flush();
        self.available_supply.flush();
        self.token_metadata.flush();
    }

    pub(crate) fn storage_usage_flushed(&mut self) -> u64 {
        self.flush_state();
        env::storage_usage()
    }

    /// Charges the bytes written since `before` to the attached deposit and
    /// sends the rest back to `payer`. At least `min_price` is kept. Freed
    /// bytes are not refunded.
    pub(crate) fn charge_storage(
        &mut self,
        payer: &AccountId,
        before: u64,
        min_price: u128,
    ) -> Result<(), LedgerError> {
        let bytes_used = self.storage_usage_flushed().saturating_sub(before);
        let price = storage_cost(bytes_used).max(min_price);
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit < price {
            return Err(LedgerError::InsufficientDeposit(format!(
                "{} bytes of storage need {} yoctoNEAR, attached {}",
                bytes_used, price, deposit
            )));
        }
        refund_excess(payer, deposit, price);
        Ok(())
    }
}
