use sqlx::types::BigDecimal;

/// Money columns are `NUMERIC(10, 2)`.
const MAX_EXCLUSIVE: i64 = 100_000_000;

/// Whether an amount is stored in a money column without Postgres rounding it.
pub fn is_storable(amount: &BigDecimal) -> bool {
    amount.round(2) == *amount && amount.abs() < BigDecimal::from(MAX_EXCLUSIVE)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn decimal(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn should_accept_amounts_with_at_most_two_decimals() {
        assert!(is_storable(&decimal("0")));
        assert!(is_storable(&decimal("12.5")));
        assert!(is_storable(&decimal("12.50")));
        assert!(is_storable(&decimal("12.500")));
        assert!(is_storable(&decimal("99999999.99")));
    }

    #[test]
    fn should_reject_sub_cent_amounts() {
        assert!(!is_storable(&decimal("0.005")));
        assert!(!is_storable(&decimal("10.001")));
    }

    #[test]
    fn should_reject_amounts_outside_the_column() {
        assert!(!is_storable(&decimal("100000000")));
        assert!(!is_storable(&decimal("-100000000.00")));
    }
}
