use crate::constants::ONE_YOCTO;
use crate::errors::LedgerError;
use near_sdk::env;

pub(crate) fn check_at_least_one_yocto() -> Result<(), LedgerError> {
    if env::attached_deposit().as_yoctonear() < ONE_YOCTO.as_yoctonear() {
        return Err(LedgerError::InsufficientDeposit(
            "Requires attached deposit of at least 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}
