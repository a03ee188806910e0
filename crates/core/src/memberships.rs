//! Memberships

use decimal_percentage::Percentage;

use crate::{display::format_percentage, selection::Selectable};

/// An account-level discount, applied as a flat percentage regardless of cart contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    /// Stable membership code
    pub code: String,

    /// Display name
    pub name: String,

    /// Discount applied to the order total
    pub discount: Percentage,
}

impl Membership {
    /// Create a new membership.
    pub fn new(code: impl Into<String>, name: impl Into<String>, discount: Percentage) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            discount,
        }
    }

    /// Label shown next to the membership name, e.g. `10%`.
    pub fn discount_label(&self) -> String {
        format_percentage(&self.discount)
    }
}

impl Selectable for Membership {
    fn code(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_label_renders_percentage() {
        let membership = Membership::new("VIP", "VIP 회원", Percentage::from(0.1));

        assert_eq!(membership.discount_label(), "10%");
    }
}
