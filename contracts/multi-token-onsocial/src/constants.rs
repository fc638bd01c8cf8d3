use near_sdk::NearToken;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const GAS_FOR_BALANCE_CALLBACK_TGAS: u64 = 10;
pub const GAS_MIGRATE_TGAS: u64 = 200;
