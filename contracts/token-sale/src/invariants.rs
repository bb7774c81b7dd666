// Sale invariants. Checked with debug assertions after every purchase and
// mirrored as rules in `certora_specs`.

use ledger_math::{is_sale_closed, is_sale_open, remaining_supply};

/// Invariant: total sold never exceeds the initial supply
///
/// Property:
///   0 <= total_sold <= initial_supply
pub fn sold_within_supply(total_sold: i128, initial_supply: i128) -> bool {
    total_sold >= 0 && total_sold <= initial_supply
}

/// Invariant: total sold is monotonically non-decreasing
pub fn sold_monotonic(old_total_sold: i128, new_total_sold: i128) -> bool {
    new_total_sold >= old_total_sold
}

/// Invariant: the sale is exactly one of open or closed at any instant
pub fn window_states_exclusive(now: u64, sale_end: u64) -> bool {
    is_sale_open(now, sale_end) != is_sale_closed(now, sale_end)
}

/// Invariant: sold plus still-for-sale equals the initial supply
pub fn inventory_conserved(initial_supply: i128, total_sold: i128) -> bool {
    remaining_supply(initial_supply, total_sold) + total_sold == initial_supply
}
