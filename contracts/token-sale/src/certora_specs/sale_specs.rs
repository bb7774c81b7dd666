// Rules over the sale arithmetic that `buy_token` and `withdraw` rely on:
// a purchase never charges more than was paid, the sale window is exactly
// open or closed, and a purchase that passes the supply check keeps total
// sold within the initial supply.

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: tokens bought are the floor of payment over cost.
#[cfg(feature = "certora")]
#[rule]
pub fn purchase_never_overpays(payment: i128, cost_per_token: i128) {
    cvlr_assume!(cost_per_token > 0);
    cvlr_assume!(payment >= 0);

    let tokens = ledger_math::tokens_for_payment(payment, cost_per_token);

    cvlr_assert!(tokens >= 0);
    cvlr_assert!(tokens <= payment / cost_per_token);
}

/// RULE: a payment below the cost of one token buys nothing.
#[cfg(feature = "certora")]
#[rule]
pub fn underpayment_buys_nothing(payment: i128, cost_per_token: i128) {
    cvlr_assume!(cost_per_token > 0);
    cvlr_assume!(payment < cost_per_token);

    cvlr_assert!(ledger_math::tokens_for_payment(payment, cost_per_token) == 0);
}

/// RULE: open and closed are complementary for every timestamp.
#[cfg(feature = "certora")]
#[rule]
pub fn sale_window_exclusive(now: u64, sale_start: u64) {
    let end = ledger_math::sale_end(sale_start, ledger_types::SALE_DURATION);
    cvlr_assert!(crate::invariants::window_states_exclusive(now, end));
}

/// RULE: the supply check admits only purchases that stay within supply.
#[cfg(feature = "certora")]
#[rule]
pub fn supply_check_keeps_sold_bounded(total_sold: i128, tokens: i128, initial_supply: i128) {
    cvlr_assume!(tokens >= 1);
    cvlr_assume!(crate::invariants::sold_within_supply(total_sold, initial_supply));

    if let Some(new_total) = crate::next_total_sold(total_sold, tokens, initial_supply) {
        cvlr_assert!(crate::invariants::sold_within_supply(new_total, initial_supply));
        cvlr_assert!(crate::invariants::sold_monotonic(total_sold, new_total));
    }
    cvlr_satisfy!(true);
}
