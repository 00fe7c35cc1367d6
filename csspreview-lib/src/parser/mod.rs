pub mod declarations;
pub mod rule_locator;
