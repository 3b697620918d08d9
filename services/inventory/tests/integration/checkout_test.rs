use pantry_domain::stock::StockKind;
use pantry_inventory::error::InventoryError;
use pantry_inventory::usecase::checkout::{
    CheckoutInput, CheckoutLineInput, CheckoutUseCase,
};

use crate::helpers::MockCheckoutPort;

fn quantity_line(product_id: &str, quantity: i32) -> CheckoutLineInput {
    CheckoutLineInput {
        product_id: Some(product_id.to_owned()),
        quantity: Some(quantity),
        weight: None,
    }
}

#[tokio::test]
async fn should_pass_validated_lines_to_the_port() {
    let port = MockCheckoutPort::ok();
    let received = port.received_handle();
    let uc = CheckoutUseCase { port };

    let ids = uc
        .execute(CheckoutInput {
            user_id: Some("AS12345".to_owned()),
            lines: vec![
                quantity_line("beans", 2),
                CheckoutLineInput {
                    product_id: Some("rice".to_owned()),
                    quantity: None,
                    weight: Some(1.5),
                },
            ],
        })
        .await
        .unwrap();

    assert_eq!(ids, vec![1, 2]);
    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (user_id, lines) = &received[0];
    assert_eq!(user_id, "AS12345");
    assert_eq!(lines[0].amount, StockKind::Quantity(2));
    assert_eq!(lines[1].amount, StockKind::Weight(1.5));
}

#[tokio::test]
async fn should_reject_empty_cart() {
    let uc = CheckoutUseCase {
        port: MockCheckoutPort::ok(),
    };

    let result = uc
        .execute(CheckoutInput {
            user_id: Some("AS12345".to_owned()),
            lines: vec![],
        })
        .await;

    assert!(matches!(result, Err(InventoryError::InvalidInput(_))));
}

#[tokio::test]
async fn should_reject_missing_user_id() {
    let uc = CheckoutUseCase {
        port: MockCheckoutPort::ok(),
    };

    let result = uc
        .execute(CheckoutInput {
            user_id: None,
            lines: vec![quantity_line("beans", 2)],
        })
        .await;

    assert!(matches!(
        result,
        Err(InventoryError::MissingField("user_id"))
    ));
}

#[tokio::test]
async fn should_reject_line_with_both_amounts_before_reaching_the_port() {
    let port = MockCheckoutPort::ok();
    let received = port.received_handle();
    let uc = CheckoutUseCase { port };

    let result = uc
        .execute(CheckoutInput {
            user_id: Some("AS12345".to_owned()),
            lines: vec![CheckoutLineInput {
                product_id: Some("beans".to_owned()),
                quantity: Some(2),
                weight: Some(1.0),
            }],
        })
        .await;

    assert!(matches!(result, Err(InventoryError::InvalidInput(_))));
    assert!(
        received.lock().unwrap().is_empty(),
        "port must not be called for invalid input"
    );
}

#[tokio::test]
async fn should_propagate_port_failure() {
    let uc = CheckoutUseCase {
        port: MockCheckoutPort::failing(|| InventoryError::InsufficientStock),
    };

    let result = uc
        .execute(CheckoutInput {
            user_id: Some("AS12345".to_owned()),
            lines: vec![quantity_line("beans", 99)],
        })
        .await;

    assert!(matches!(result, Err(InventoryError::InsufficientStock)));
}
