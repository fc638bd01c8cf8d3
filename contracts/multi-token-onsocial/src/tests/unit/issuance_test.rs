use crate::tests::test_utils::*;
use crate::*;
use near_sdk::test_utils::get_logs;

// --- create_token ---

#[test]
fn new_contract_has_no_tokens() {
    let contract = new_contract();
    assert_eq!(contract.token_count(), 0);
    assert_eq!(contract.token_metadata(1), None);
    assert_eq!(contract.total_supply(1), None);
}

#[test]
fn create_token_records_metadata_and_supply() {
    let mut contract = new_contract();
    set_caller(&bob());
    let token_id = contract
        .create_token("Gold".to_string(), 8, U128(21_000_000))
        .unwrap();

    assert_eq!(token_id, 1);
    assert_eq!(contract.token_count(), 1);
    assert_eq!(
        contract.token_metadata(1),
        Some(TokenMetadata {
            token_id: 1,
            name: "Gold".to_string(),
            decimals: 8,
            creator_id: bob(),
        })
    );
    assert_eq!(contract.total_supply(1), Some(U128(21_000_000)));
    assert_eq!(contract.available_supply(1), Some(U128(21_000_000)));
    // Creation mints nothing.
    assert_eq!(balance(&contract, bob(), 1), 0);
}

#[test]
fn token_ids_are_sequential() {
    let mut contract = new_contract();
    set_caller(&alice());
    assert_eq!(contract.create_token("A".to_string(), 0, U128(1)), Ok(1));
    set_caller(&bob());
    assert_eq!(contract.create_token("B".to_string(), 0, U128(1)), Ok(2));
    assert_eq!(contract.create_token("".to_string(), 255, U128(0)), Ok(3));
    assert_eq!(contract.token_count(), 3);
    assert_eq!(contract.token_metadata(2).unwrap().creator_id, bob());
}

#[test]
fn create_token_logs_event() {
    let mut contract = new_contract();
    set_caller(&bob());
    contract.create_token("Gold".to_string(), 8, U128(100)).unwrap();

    let expected = format!(
        "EVENT_JSON:{{\"standard\":\"nep297\",\"version\":\"1.0.0\",\"event\":\"token_created\",\"data\":{{\"token_id\":1,\"name\":\"Gold\",\"decimals\":8,\"supply\":\"100\",\"creator_id\":\"{}\"}}}}",
        bob()
    );
    let logs = get_logs();
    assert!(
        logs.contains(&expected),
        "Expected token_created event, got: {:?}", logs
    );
}

// --- mint_token ---

#[test]
fn creator_mints_to_any_account() {
    let mut contract = new_contract();
    set_caller(&alice());
    let token_id = contract
        .create_token("Coin".to_string(), 0, U128(1000))
        .unwrap();
    contract.mint_token(token_id, U128(300), charlie()).unwrap();
    contract.mint_token(token_id, U128(200), charlie()).unwrap();
    contract.mint_token(token_id, U128(500), alice()).unwrap();

    assert_eq!(balance(&contract, charlie(), 1), 500);
    assert_eq!(balance(&contract, alice(), 1), 500);
    assert_eq!(contract.available_supply(1), Some(U128(0)));
    assert_eq!(contract.total_supply(1), Some(U128(1000)));
}

#[test]
fn mint_unknown_token_fails() {
    let mut contract = contract_with_coin();
    set_caller(&alice());
    assert_eq!(
        contract.mint_token(2, U128(1), bob()),
        Err(LedgerError::UndefinedToken(2))
    );
}

#[test]
fn mint_by_non_creator_fails() {
    let mut contract = contract_with_coin();
    set_caller(&bob());
    assert_eq!(
        contract.mint_token(1, U128(1), bob()),
        Err(LedgerError::NotOwner(1))
    );
    assert_eq!(contract.available_supply(1), Some(U128(600)));
}

#[test]
fn ownership_checked_before_supply() {
    let mut contract = contract_with_coin();
    set_caller(&bob());
    assert_eq!(
        contract.mint_token(1, U128(1_000_000), bob()),
        Err(LedgerError::NotOwner(1))
    );
}

#[test]
fn mint_beyond_available_fails_without_change() {
    let mut contract = contract_with_coin();
    set_caller(&alice());
    assert_eq!(
        contract.mint_token(1, U128(601), charlie()),
        Err(LedgerError::SupplyExhausted(1))
    );
    assert_eq!(contract.available_supply(1), Some(U128(600)));
    assert_eq!(balance(&contract, charlie(), 1), 0);
    assert!(get_logs().is_empty());
}

#[test]
fn available_supply_only_shrinks() {
    let mut contract = contract_with_coin();
    set_caller(&alice());
    let mut last = contract.available_supply(1).unwrap().0;
    for amount in [100, 0, 250, 250] {
        contract.mint_token(1, U128(amount), danny()).unwrap();
        let now = contract.available_supply(1).unwrap().0;
        assert!(now <= last);
        assert!(now <= contract.total_supply(1).unwrap().0);
        last = now;
    }
    assert_eq!(last, 0);
    assert!(matches!(
        contract.mint_token(1, U128(1), danny()),
        Err(LedgerError::SupplyExhausted(1))
    ));
}

#[test]
fn mint_logs_event() {
    let mut contract = contract_with_coin();
    set_caller(&alice());
    contract.mint_token(1, U128(50), charlie()).unwrap();

    let expected = format!(
        "EVENT_JSON:{{\"standard\":\"nep297\",\"version\":\"1.0.0\",\"event\":\"token_minted\",\"data\":{{\"token_id\":1,\"amount\":\"50\",\"receiver_id\":\"{}\",\"available_supply\":\"550\"}}}}",
        charlie()
    );
    let logs = get_logs();
    assert!(
        logs.contains(&expected),
        "Expected token_minted event, got: {:?}", logs
    );
}
