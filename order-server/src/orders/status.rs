//! Order status transitions
//!
//! Any of the four named states is reachable from any other, including
//! re-entering the current one. The machine only rejects a target outside
//! the set; on rejection the stored status stays untouched.

use shared::models::OrderStatus;
use shared::{AppError, ErrorCode};

/// Resolve a requested status change
///
/// `requested` is the raw wire string so an unknown value surfaces as
/// `InvalidStatusTarget` instead of a deserialization failure.
pub fn transition(current: OrderStatus, requested: &str) -> Result<OrderStatus, AppError> {
    match OrderStatus::parse(requested) {
        Some(next) => Ok(next),
        None => Err(AppError::with_message(
            ErrorCode::InvalidStatusTarget,
            format!("unknown order status '{}'", requested),
        )
        .with_detail("status", requested.to_string())
        .with_detail("current", current.as_str().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_is_allowed() {
        for current in OrderStatus::ALL {
            for target in OrderStatus::ALL {
                let next = transition(current, target.as_str()).unwrap();
                assert_eq!(next, target);
            }
        }
    }

    #[test]
    fn test_terminal_states_can_reopen() {
        // Monotonicity is deliberately not enforced
        let next = transition(OrderStatus::Completed, "pending").unwrap();
        assert_eq!(next, OrderStatus::Pending);

        let next = transition(OrderStatus::Cancelled, "completed").unwrap();
        assert_eq!(next, OrderStatus::Completed);
    }

    #[test]
    fn test_unknown_target_is_rejected() {
        for bad in ["shipped", "PENDING", "", "done", "pending "] {
            let err = transition(OrderStatus::Pending, bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidStatusTarget);
        }
    }

    #[test]
    fn test_rejection_names_the_target() {
        let err = transition(OrderStatus::Failed, "shipped").unwrap_err();
        assert!(err.message.contains("shipped"));
    }
}
