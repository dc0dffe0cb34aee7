//! Hygiene — source-level budgets for the markup crate.
//!
//! Library code must propagate construction errors rather than crash or drop
//! them. Each pattern has a budget; the budget never grows.

mod common;

#[test]
fn pattern_budgets() {
    common::assert_budgets(common::BUDGETS);
}
