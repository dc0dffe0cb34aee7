//! Hygiene — source-level budgets for the hx crate.
//!
//! Attribute helpers and the asset provider are infallible or return `HxError`;
//! none of them may crash. Each pattern has a budget; the budget never grows.

#[path = "../../markup/tests/common/mod.rs"]
mod common;

#[test]
fn pattern_budgets() {
    common::assert_budgets(common::BUDGETS);
}
