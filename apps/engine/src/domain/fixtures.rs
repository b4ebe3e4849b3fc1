use super::cards_types::Card;

/// Parser for hardcoded card tokens in fixtures and test scenarios.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse canonical tokens such as `["HEARTS-10", "WILD-0"]`.
    ///
    /// Only for literals known to be valid; panics on a bad token.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }

    /// Single-card variant of [`CardFixtures::parse_hardcoded`].
    pub fn card(token: &str) -> Card {
        #[allow(clippy::expect_used)]
        token.parse::<Card>().expect("hardcoded valid card token")
    }
}
