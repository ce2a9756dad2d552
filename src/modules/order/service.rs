use super::repository::{Order, OrderStatus};
use crate::{
    modules::{auth::middleware::Auth, product::repository::Product},
    utils::money,
};
use sqlx::types::BigDecimal;

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyOrderDetails,
    InvalidQuantity,
    InvalidSubtotal,
    InvalidAmount,
    TotalMismatch,
    ProductNotFound(String),
    ProductNotInRestaurant(String),
    ProductInactive(String),
}

pub struct DetailLine {
    pub product_id: String,
    pub quantity: i32,
    pub subtotal: BigDecimal,
}

pub fn sum_subtotals<'a>(subtotals: impl IntoIterator<Item = &'a BigDecimal>) -> BigDecimal {
    subtotals
        .into_iter()
        .fold(BigDecimal::from(0), |acc, subtotal| acc + subtotal)
}

/// Amounts are already known to fit the money columns, so no rounding happens here.
pub fn total_matches(total: &BigDecimal, subtotals: &BigDecimal) -> bool {
    total == subtotals
}

pub fn validate_details(lines: &[DetailLine], total: &BigDecimal) -> Result<(), Error> {
    if lines.is_empty() {
        return Err(Error::EmptyOrderDetails);
    }

    let zero = BigDecimal::from(0);
    if lines.iter().any(|line| line.quantity <= 0) {
        return Err(Error::InvalidQuantity);
    }
    if lines.iter().any(|line| line.subtotal < zero) {
        return Err(Error::InvalidSubtotal);
    }
    if !money::is_storable(total) || lines.iter().any(|line| !money::is_storable(&line.subtotal)) {
        return Err(Error::InvalidAmount);
    }

    if !total_matches(total, &sum_subtotals(lines.iter().map(|line| &line.subtotal))) {
        return Err(Error::TotalMismatch);
    }

    Ok(())
}

/// Every line must reference an active product of the ordered restaurant.
pub fn check_products(
    lines: &[DetailLine],
    products: &[Product],
    restaurant_id: &str,
) -> Result<(), Error> {
    for line in lines {
        let product = products
            .iter()
            .find(|product| product.id == line.product_id)
            .ok_or_else(|| Error::ProductNotFound(line.product_id.clone()))?;

        if product.restaurant_id != restaurant_id {
            return Err(Error::ProductNotInRestaurant(product.id.clone()));
        }
        if !product.is_active {
            return Err(Error::ProductInactive(product.id.clone()));
        }
    }

    Ok(())
}

pub fn can_transition(from: &OrderStatus, to: &OrderStatus) -> bool {
    matches!(
        (from, to),
        (OrderStatus::Pending, OrderStatus::Paid)
            | (OrderStatus::Pending, OrderStatus::Delivered)
            | (OrderStatus::Pending, OrderStatus::Cancelled)
            | (OrderStatus::Paid, OrderStatus::Delivered)
    )
}

pub fn can_cancel(order: &Order) -> bool {
    order.status == OrderStatus::Pending
}

pub fn is_client_of(order: &Order, auth: &Auth) -> bool {
    auth.is(&order.client_email)
}

pub fn is_restaurant_owner_of(order: &Order, auth: &Auth) -> bool {
    auth.is(&order.restaurant_owner_email)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modules::{
        product::service::test::product,
        user::repository::{test::user, Role},
    };
    use std::str::FromStr;
    use ulid::Ulid;

    fn decimal(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn line(product_id: &str, quantity: i32, subtotal: &str) -> DetailLine {
        DetailLine {
            product_id: product_id.to_string(),
            quantity,
            subtotal: decimal(subtotal),
        }
    }

    fn order(status: OrderStatus) -> Order {
        Order {
            id: Ulid::new().to_string(),
            client_id: Ulid::new().to_string(),
            client_email: "client@example.com".to_string(),
            restaurant_id: Ulid::new().to_string(),
            restaurant_name: "Trattoria".to_string(),
            restaurant_owner_email: "owner@example.com".to_string(),
            status,
            total: decimal("20.00"),
            comments: None,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn should_accept_matching_total() {
        let lines = vec![line("1", 2, "20.00")];
        assert_eq!(validate_details(&lines, &decimal("20.00")), Ok(()));
    }

    #[test]
    fn should_reject_mismatched_total() {
        let lines = vec![line("1", 2, "20.00")];
        assert_eq!(
            validate_details(&lines, &decimal("25.00")),
            Err(Error::TotalMismatch)
        );
    }

    #[test]
    fn should_compare_totals_exactly() {
        let lines = vec![line("1", 1, "10.1"), line("2", 1, "0.2")];
        assert_eq!(validate_details(&lines, &decimal("10.30")), Ok(()));
        assert_eq!(
            validate_details(&lines, &decimal("10.31")),
            Err(Error::TotalMismatch)
        );
    }

    #[test]
    fn should_reject_sub_cent_amounts() {
        let lines = vec![line("1", 1, "0.005"), line("2", 1, "0.005")];
        assert_eq!(
            validate_details(&lines, &decimal("0.01")),
            Err(Error::InvalidAmount)
        );
        assert_eq!(
            validate_details(&[line("1", 1, "0.01")], &decimal("0.010001")),
            Err(Error::InvalidAmount)
        );
    }

    #[test]
    fn should_reject_amounts_too_large_for_storage() {
        let lines = vec![line("1", 1, "100000000.00")];
        assert_eq!(
            validate_details(&lines, &decimal("100000000.00")),
            Err(Error::InvalidAmount)
        );
    }

    #[test]
    fn should_accept_free_items() {
        assert_eq!(validate_details(&[line("1", 1, "0")], &decimal("0.00")), Ok(()));
    }

    #[test]
    fn should_reject_empty_and_invalid_lines() {
        assert_eq!(
            validate_details(&[], &decimal("0")),
            Err(Error::EmptyOrderDetails)
        );
        assert_eq!(
            validate_details(&[line("1", 0, "1.00")], &decimal("1.00")),
            Err(Error::InvalidQuantity)
        );
        assert_eq!(
            validate_details(&[line("1", 1, "-1.00")], &decimal("-1.00")),
            Err(Error::InvalidSubtotal)
        );
    }

    #[test]
    fn should_check_products_belong_to_restaurant() {
        let pizza = product(("r1", "Trattoria"), "Mains", "Pizza", "10.00");
        let mut stale = product(("r1", "Trattoria"), "Mains", "Calzone", "12.00");
        stale.is_active = false;
        let foreign = product(("r2", "Diner"), "Mains", "Burger", "9.00");
        let products = vec![pizza.clone(), stale.clone(), foreign.clone()];

        assert_eq!(
            check_products(&[line(&pizza.id, 1, "10.00")], &products, "r1"),
            Ok(())
        );
        assert_eq!(
            check_products(&[line(&stale.id, 1, "12.00")], &products, "r1"),
            Err(Error::ProductInactive(stale.id.clone()))
        );
        assert_eq!(
            check_products(&[line(&foreign.id, 1, "9.00")], &products, "r1"),
            Err(Error::ProductNotInRestaurant(foreign.id.clone()))
        );
        assert_eq!(
            check_products(&[line("missing", 1, "9.00")], &products, "r1"),
            Err(Error::ProductNotFound("missing".to_string()))
        );
    }

    #[test]
    fn should_only_allow_forward_transitions() {
        assert!(can_transition(&OrderStatus::Pending, &OrderStatus::Paid));
        assert!(can_transition(&OrderStatus::Pending, &OrderStatus::Delivered));
        assert!(can_transition(&OrderStatus::Paid, &OrderStatus::Delivered));
        assert!(!can_transition(&OrderStatus::Paid, &OrderStatus::Pending));
        assert!(!can_transition(&OrderStatus::Delivered, &OrderStatus::Cancelled));
        assert!(!can_transition(&OrderStatus::Cancelled, &OrderStatus::Paid));
    }

    #[test]
    fn should_only_cancel_pending_orders() {
        assert!(can_cancel(&order(OrderStatus::Pending)));
        assert!(!can_cancel(&order(OrderStatus::Paid)));
        assert!(!can_cancel(&order(OrderStatus::Delivered)));
        assert!(!can_cancel(&order(OrderStatus::Cancelled)));
    }

    #[test]
    fn should_recognise_order_parties() {
        let order = order(OrderStatus::Pending);
        let client = Auth {
            user: user("Client@example.com", Role::Client),
        };
        let owner = Auth {
            user: user("owner@example.com", Role::Restaurant),
        };

        assert!(is_client_of(&order, &client));
        assert!(!is_restaurant_owner_of(&order, &client));
        assert!(is_restaurant_owner_of(&order, &owner));
        assert!(!is_client_of(&order, &owner));
    }
}
