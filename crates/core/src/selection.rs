//! Selection
//!
//! Membership and coupon pickers identify their options by stable code rather than by
//! position, so reordering the option list between renders never changes which modifier
//! is applied.

/// An option that can be picked from a list by its code.
pub trait Selectable {
    /// Stable code identifying this option.
    fn code(&self) -> &str;
}

/// Resolve the option whose code is `code`.
///
/// The blank code always resolves to `None`, clearing the selection. Unknown codes also
/// resolve to `None` rather than failing.
pub fn select_by_code<'o, T: Selectable>(options: &'o [T], code: &str) -> Option<&'o T> {
    if code.is_empty() {
        return None;
    }

    options.iter().find(|option| option.code() == code)
}

#[cfg(test)]
mod tests {
    use decimal_percentage::Percentage;

    use crate::memberships::Membership;

    use super::*;

    fn memberships() -> Vec<Membership> {
        vec![
            Membership::new("SILVER", "실버", Percentage::from(0.05)),
            Membership::new("GOLD", "골드", Percentage::from(0.1)),
        ]
    }

    #[test]
    fn select_by_code_finds_matching_option() {
        let options = memberships();

        let selected = select_by_code(&options, "GOLD").map(|membership| membership.name.as_str());

        assert_eq!(selected, Some("골드"));
    }

    #[test]
    fn blank_code_clears_selection() {
        assert!(select_by_code(&memberships(), "").is_none());
    }

    #[test]
    fn unknown_code_yields_none() {
        assert!(select_by_code(&memberships(), "PLATINUM").is_none());
    }

    #[test]
    fn selection_survives_reordering() {
        let mut options = memberships();
        options.reverse();

        let selected = select_by_code(&options, "GOLD").map(|membership| membership.name.as_str());

        assert_eq!(selected, Some("골드"));
    }
}
