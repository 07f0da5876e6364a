//! Local two-number calculator. No network involved.

use tether_core::form::NumberPairForm;

/// Sum of the two fields, unparseable fields counting as 0.
pub fn add(form: &NumberPairForm) -> i64 {
    form.add_locally()
}

/// Text shown under the calculator: `Result: 7`.
pub fn result_text(form: &NumberPairForm) -> String {
    format!("Result: {}", add(form))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_render() {
        let form = NumberPairForm::new("3", "4");
        assert_eq!(add(&form), 7);
        assert_eq!(result_text(&form), "Result: 7");
    }

    #[test]
    fn test_non_numeric_operand_counts_as_zero() {
        let form = NumberPairForm::new("abc", "4");
        assert_eq!(add(&form), 4);
        assert_eq!(result_text(&NumberPairForm::default()), "Result: 0");
    }
}
