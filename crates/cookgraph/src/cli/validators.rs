//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use cookgraph_csv::MULTI_VALUE_DELIMITER;

/// Validate a node ID argument.
///
/// IDs are matched verbatim after trimming, so only emptiness is rejected.
pub fn validate_node_id(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Node ID cannot be empty".to_string());
    }
    Ok(s.to_string())
}

/// Validate a label argument.
///
/// A label can never contain the multi-value delimiter, since the loader
/// splits on it.
pub fn validate_label(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Label cannot be empty".to_string());
    }
    if s.contains(MULTI_VALUE_DELIMITER) {
        return Err(format!(
            "Label cannot contain '{MULTI_VALUE_DELIMITER}'; query one label at a time"
        ));
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("R1", Ok("R1"))]
    #[case("  I1 ", Ok("I1"))]
    #[case("", Err(()))]
    #[case("   ", Err(()))]
    fn node_id_cases(#[case] input: &str, #[case] expected: Result<&str, ()>) {
        assert_eq!(
            validate_node_id(input).as_deref().map_err(|_| ()),
            expected
        );
    }

    #[rstest]
    #[case("Recipe", Ok("Recipe"))]
    #[case(" 家常菜 ", Ok("家常菜"))]
    #[case("", Err(()))]
    #[case("Recipe,Category", Err(()))]
    fn label_cases(#[case] input: &str, #[case] expected: Result<&str, ()>) {
        assert_eq!(validate_label(input).as_deref().map_err(|_| ()), expected);
    }
}
