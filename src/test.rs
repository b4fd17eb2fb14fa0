/// Check for equality between two fractional components, allowing for the
/// rounding differences between the f32 and f64 component widths.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1e-4 as Component)
    }};
}
