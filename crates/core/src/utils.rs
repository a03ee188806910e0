//! Utils

use clap::Parser;

/// Arguments for the cart example
#[derive(Debug, Parser)]
pub struct ExampleCartArgs {
    /// Fixture set to use for products, memberships and coupons
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Product ids to add to the cart, one unit per occurrence
    #[clap(short, long = "add", value_delimiter = ',')]
    pub add: Vec<String>,

    /// Membership code to apply
    #[clap(short, long)]
    pub membership: Option<String>,

    /// Coupon code to apply
    #[clap(short, long)]
    pub coupon: Option<String>,

    /// Log filter directive, e.g. `trolley=debug`
    #[clap(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parses_repeated_and_delimited_products() -> Result<(), clap::Error> {
        let args = ExampleCartArgs::try_parse_from([
            "cart", "-a", "p1,p2", "--add", "p1", "-m", "GOLD",
        ])?;

        assert_eq!(args.fixture, "demo");
        assert_eq!(args.add, vec!["p1", "p2", "p1"]);
        assert_eq!(args.membership.as_deref(), Some("GOLD"));
        assert_eq!(args.coupon, None);

        Ok(())
    }
}
