use pantry_inventory::error::InventoryError;
use pantry_inventory::usecase::transaction::{RecordWithdrawalInput, RecordWithdrawalUseCase};

use crate::helpers::{MockTransactionRepo, MockUserRepo, test_user};

fn record_input(user_id: &str, product_id: &str, amount: f64) -> RecordWithdrawalInput {
    RecordWithdrawalInput {
        user_id: Some(user_id.to_owned()),
        product_id: Some(product_id.to_owned()),
        quantity_taken: Some(amount),
    }
}

#[tokio::test]
async fn should_append_record_with_normalized_status() {
    let transactions = MockTransactionRepo::empty();
    let appended = transactions.appended_handle();
    let uc = RecordWithdrawalUseCase {
        users: MockUserRepo::new(vec![test_user("AS12345", "Graduate")]),
        transactions,
    };

    let transaction_id = uc
        .execute(record_input("AS12345", "beans", 2.0))
        .await
        .unwrap();

    assert_eq!(transaction_id, 1);
    let appended = appended.lock().unwrap();
    assert_eq!(appended.len(), 1);
    assert_eq!(appended[0].user_status, "graduate", "status must be stored lower-cased");
    assert_eq!(appended[0].product_id, "beans");
}

#[tokio::test]
async fn should_fail_user_not_found_and_write_nothing() {
    let transactions = MockTransactionRepo::empty();
    let appended = transactions.appended_handle();
    let uc = RecordWithdrawalUseCase {
        users: MockUserRepo::empty(),
        transactions,
    };

    let result = uc.execute(record_input("ghost", "beans", 2.0)).await;

    assert!(
        matches!(result, Err(InventoryError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
    assert!(appended.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_fail_when_user_status_missing() {
    let uc = RecordWithdrawalUseCase {
        users: MockUserRepo::new(vec![test_user("AS12345", "  ")]),
        transactions: MockTransactionRepo::empty(),
    };

    let result = uc.execute(record_input("AS12345", "beans", 2.0)).await;

    assert!(matches!(result, Err(InventoryError::MissingStatus)));
}

#[tokio::test]
async fn should_reject_missing_fields() {
    let uc = RecordWithdrawalUseCase {
        users: MockUserRepo::new(vec![test_user("AS12345", "graduate")]),
        transactions: MockTransactionRepo::empty(),
    };

    let result = uc
        .execute(RecordWithdrawalInput {
            user_id: Some("AS12345".to_owned()),
            product_id: None,
            quantity_taken: Some(1.0),
        })
        .await;

    assert!(matches!(result, Err(InventoryError::InvalidInput(_))));
}

#[tokio::test]
async fn should_reject_non_positive_amount() {
    let uc = RecordWithdrawalUseCase {
        users: MockUserRepo::new(vec![test_user("AS12345", "graduate")]),
        transactions: MockTransactionRepo::empty(),
    };

    let result = uc.execute(record_input("AS12345", "beans", 0.0)).await;

    assert!(matches!(result, Err(InventoryError::InvalidInput(_))));
}
