use crate::errors::LedgerError;
use crate::events::LedgerEvent;
use crate::ledger::BalanceSheet;
use crate::state::LedgerState;
use crate::types::Transfer;
use near_sdk::AccountId;

impl LedgerState {
    /// Applies every leg of every transfer in order. Later legs see the
    /// balances left by earlier ones; any failure discards the whole batch.
    pub fn transfer(
        &mut self,
        caller: &AccountId,
        transfers: &[Transfer],
    ) -> Result<(), LedgerError> {
        let mut sheet = BalanceSheet::new(&self.balances);
        for transfer in transfers {
            for tx in &transfer.txs {
                self.token_exists(tx.token_id)?;
                self.check_authorized(caller, &transfer.from, tx.token_id)?;
                sheet.debit(tx.token_id, tx.amount.0, &transfer.from)?;
                sheet.credit(tx.token_id, tx.amount.0, &tx.to);
            }
        }
        let changes = sheet.into_changes();
        self.commit_balances(changes);

        for transfer in transfers {
            let authorized_id = (caller != &transfer.from).then(|| caller.clone());
            for tx in &transfer.txs {
                LedgerEvent::MtTransfer {
                    token_id: tx.token_id,
                    sender_id: transfer.from.clone(),
                    receiver_id: tx.to.clone(),
                    amount: tx.amount,
                    authorized_id: authorized_id.clone(),
                }
                .emit();
            }
        }
        Ok(())
    }
}
