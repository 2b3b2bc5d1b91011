//! Property tests for thousands-separated byte counts.

use proptest::prelude::*;

use asset_audit::presentation::format_thousands;

proptest! {
    /// PROPERTY: Removing the separators gives back the plain number.
    #[test]
    fn property_separators_are_lossless(n in any::<u64>()) {
        let formatted = format_thousands(n);
        prop_assert_eq!(formatted.replace(',', ""), n.to_string());
    }

    /// PROPERTY: Every group after the first has exactly three digits.
    #[test]
    fn property_groups_have_three_digits(n in any::<u64>()) {
        let formatted = format_thousands(n);
        let groups: Vec<&str> = formatted.split(',').collect();

        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }
}
