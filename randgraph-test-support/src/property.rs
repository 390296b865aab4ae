//! Property-test case counts with an environment override.
//!
//! Suites pass their local default; CI can raise or lower every suite at once
//! through `RANDGRAPH_PROPTEST_CASES`.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "RANDGRAPH_PROPTEST_CASES";

/// Resolves the number of cases each property should run.
///
/// Invalid overrides are logged and ignored.
///
/// # Examples
/// ```
/// use randgraph_test_support::property::proptest_cases;
///
/// assert!(proptest_cases(32) > 0);
/// ```
#[must_use]
pub fn proptest_cases(default_cases: u32) -> u32 {
    match env::var(PROPTEST_CASES_ENV_KEY) {
        Ok(raw) => parse_cases(&raw).unwrap_or_else(|reason| {
            tracing::warn!(
                env = PROPTEST_CASES_ENV_KEY,
                raw = %raw,
                reason,
                "invalid property-test case override; using default",
            );
            default_cases
        }),
        Err(_) => default_cases,
    }
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be greater than zero"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("cases must be a positive integer"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case(" 250 ", 250)]
    fn parse_cases_accepts_positive_integers(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_cases(raw), Ok(expected));
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("many")]
    fn parse_cases_rejects_other_values(#[case] raw: &str) {
        assert!(parse_cases(raw).is_err());
    }
}
