//! Membership Fixtures

use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, products::parse_percentage},
    memberships::Membership,
};

/// Wrapper for memberships in YAML
#[derive(Debug, Deserialize)]
pub struct MembershipsFixture {
    /// Memberships, in display order
    pub memberships: Vec<MembershipFixture>,
}

/// Membership Fixture
#[derive(Debug, Deserialize)]
pub struct MembershipFixture {
    /// Stable membership code
    pub code: String,

    /// Display name
    pub name: String,

    /// Discount (e.g., "10%")
    pub discount: String,
}

impl TryFrom<MembershipFixture> for Membership {
    type Error = FixtureError;

    fn try_from(fixture: MembershipFixture) -> Result<Self, Self::Error> {
        Ok(Membership::new(
            fixture.code,
            fixture.name,
            parse_percentage(&fixture.discount)?,
        ))
    }
}
