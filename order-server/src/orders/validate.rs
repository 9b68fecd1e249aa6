//! Create-order request validation
//!
//! Pure checks over the request body, no I/O. Runs before any inventory
//! lookup so a malformed request never costs a network call.

use std::collections::HashSet;

use shared::AppError;
use shared::models::CreateOrderRequest;

/// Validate a create-order request
///
/// Checks run in a fixed order: owner, item list, per-item quantity and
/// product id, duplicate product ids (first repeat wins). The error
/// message names the offending field or product id.
pub fn validate_create_order(req: &CreateOrderRequest) -> Result<(), AppError> {
    if req.user_id.trim().is_empty() {
        return Err(AppError::validation("user_id is required"));
    }

    if req.items.is_empty() {
        return Err(AppError::validation("items cannot be empty"));
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(req.items.len());
    for item in &req.items {
        if item.quantity <= 0 {
            return Err(AppError::validation(format!(
                "quantity must be positive for product '{}'",
                item.product_id
            ))
            .with_detail("product_id", item.product_id.clone()));
        }
        if item.product_id.trim().is_empty() {
            return Err(AppError::validation("product_id is required"));
        }
        if !seen.insert(item.product_id.as_str()) {
            return Err(AppError::validation(format!(
                "duplicate product '{}'",
                item.product_id
            ))
            .with_detail("product_id", item.product_id.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;
    use shared::models::OrderItemInput;

    fn item(product_id: &str, quantity: i32) -> OrderItemInput {
        OrderItemInput {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    fn request(user_id: &str, items: Vec<OrderItemInput>) -> CreateOrderRequest {
        CreateOrderRequest {
            user_id: user_id.to_string(),
            items,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let req = request("user-1", vec![item("product:a", 2), item("product:b", 1)]);
        assert!(validate_create_order(&req).is_ok());
    }

    #[test]
    fn test_missing_user_id() {
        let req = request("", vec![item("product:a", 1)]);
        let err = validate_create_order(&req).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("user_id"));

        let req = request("   ", vec![item("product:a", 1)]);
        assert!(validate_create_order(&req).is_err());
    }

    #[test]
    fn test_empty_items() {
        let req = request("user-1", vec![]);
        let err = validate_create_order(&req).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("items"));
    }

    #[test]
    fn test_user_id_checked_before_items() {
        let req = request("", vec![]);
        let err = validate_create_order(&req).unwrap_err();
        assert!(err.message.contains("user_id"));
    }

    #[test]
    fn test_non_positive_quantity() {
        let req = request("user-1", vec![item("product:a", 0)]);
        let err = validate_create_order(&req).unwrap_err();
        assert!(err.message.contains("quantity"));
        assert!(err.message.contains("product:a"));

        let req = request("user-1", vec![item("product:a", -3)]);
        assert!(validate_create_order(&req).is_err());
    }

    #[test]
    fn test_empty_product_id() {
        let req = request("user-1", vec![item("", 1)]);
        let err = validate_create_order(&req).unwrap_err();
        assert!(err.message.contains("product_id"));
    }

    #[test]
    fn test_duplicate_product_id_names_first_repeat() {
        let req = request(
            "user-1",
            vec![
                item("product:a", 1),
                item("product:b", 2),
                item("product:a", 3),
            ],
        );
        let err = validate_create_order(&req).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("duplicate"));
        assert!(err.message.contains("product:a"));
    }

    #[test]
    fn test_later_item_error_still_reported() {
        // First item fine, second has a bad quantity
        let req = request("user-1", vec![item("product:a", 1), item("product:b", 0)]);
        let err = validate_create_order(&req).unwrap_err();
        assert!(err.message.contains("product:b"));
    }
}
