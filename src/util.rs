/// Safe numeric conversion helpers.
///
/// Provides checked conversions between `i64`, `u32`, and `f64` used by the
/// parser and evaluator, so no conversion ever loses data silently.
pub mod num;
