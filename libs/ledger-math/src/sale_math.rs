/// Payment base units in one whole payment unit, `10^decimals`
pub fn payment_unit(decimals: u32) -> Option<i128> {
    10i128.checked_pow(decimals)
}

/// Payment base units required for one token base unit
pub fn cost_per_token(token_price: i128, payment_unit: i128) -> Option<i128> {
    if token_price <= 0 || payment_unit <= 0 {
        return None;
    }
    token_price.checked_mul(payment_unit)
}

/// Number of tokens `payment` buys. Any remainder is forfeited.
pub fn tokens_for_payment(payment: i128, cost_per_token: i128) -> i128 {
    if payment <= 0 || cost_per_token <= 0 {
        return 0;
    }
    payment / cost_per_token
}

/// First timestamp at which the sale is closed
pub fn sale_end(sale_start: u64, duration: u64) -> u64 {
    sale_start.saturating_add(duration)
}

pub fn is_sale_open(now: u64, sale_end: u64) -> bool {
    now < sale_end
}

pub fn is_sale_closed(now: u64, sale_end: u64) -> bool {
    now >= sale_end
}

/// Tokens still available for sale
pub fn remaining_supply(initial_supply: i128, total_sold: i128) -> i128 {
    initial_supply.saturating_sub(total_sold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_types::SALE_DURATION;

    #[test]
    fn test_payment_unit() {
        assert_eq!(payment_unit(0), Some(1));
        assert_eq!(payment_unit(7), Some(10_000_000));
        assert_eq!(payment_unit(18), Some(1_000_000_000_000_000_000));
        assert_eq!(payment_unit(40), None);
    }

    #[test]
    fn test_cost_per_token() {
        assert_eq!(cost_per_token(2, 10_000_000), Some(20_000_000));
        assert_eq!(cost_per_token(0, 10_000_000), None);
        assert_eq!(cost_per_token(-1, 10_000_000), None);
        assert_eq!(cost_per_token(i128::MAX, 10), None);
    }

    #[test]
    fn test_tokens_for_exact_multiple() {
        let cost = cost_per_token(2, 10_000_000).unwrap();
        assert_eq!(tokens_for_payment(cost, cost), 1);
        assert_eq!(tokens_for_payment(5 * cost, cost), 5);
    }

    #[test]
    fn test_remainder_is_forfeited() {
        let cost = 20_000_000;
        assert_eq!(tokens_for_payment(cost - 1, cost), 0);
        assert_eq!(tokens_for_payment(cost * 3 + 7, cost), 3);
    }

    #[test]
    fn test_non_positive_payment_buys_nothing() {
        assert_eq!(tokens_for_payment(0, 2), 0);
        assert_eq!(tokens_for_payment(-10, 2), 0);
    }

    #[test]
    fn test_sale_window_boundaries() {
        let start = 1_000;
        let end = sale_end(start, SALE_DURATION);
        assert_eq!(end, 1_000 + 1_209_600);

        assert!(is_sale_open(start, end));
        assert!(is_sale_open(end - 1, end));
        assert!(!is_sale_open(end, end));
        assert!(is_sale_closed(end, end));
        assert!(!is_sale_closed(end - 1, end));
    }

    #[test]
    fn test_sale_end_saturates() {
        assert_eq!(sale_end(u64::MAX - 1, SALE_DURATION), u64::MAX);
    }

    #[test]
    fn test_remaining_supply() {
        assert_eq!(remaining_supply(4000, 0), 4000);
        assert_eq!(remaining_supply(4000, 2), 3998);
        assert_eq!(remaining_supply(4000, 4000), 0);
    }
}
