//! Wire form for cards and inbound card references.
//!
//! A card travels as
//! `{"type": "NUMBERED"|"WILD"|"NULL", "suit": .., "value": .., "id": .., "display": ..}`
//! with the fields that do not apply to its kind set to `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, CardKind, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Suit>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

impl Serialize for CardKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            CardKind::Numbered => "NUMBERED",
            CardKind::Wild => "WILD",
            CardKind::Null => "NULL",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for CardKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "NUMBERED" => Ok(CardKind::Numbered),
            "WILD" => Ok(CardKind::Wild),
            "NULL" => Ok(CardKind::Null),
            _ => Err(serde::de::Error::custom(format!("Invalid card type: {s}"))),
        }
    }
}

/// Card reference as sent by an external actor.
///
/// `display` is informational and ignored on input. A Wild or Null reference
/// may omit `id`, in which case it names the first card of that kind in hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRef {
    #[serde(rename = "type")]
    pub kind: CardKind,
    #[serde(default)]
    pub suit: Option<Suit>,
    #[serde(default)]
    pub value: Option<u8>,
    #[serde(default)]
    pub id: Option<u8>,
    #[serde(default)]
    pub display: Option<String>,
}

impl From<Card> for CardRef {
    fn from(card: Card) -> Self {
        Self {
            kind: card.kind(),
            suit: card.suit(),
            value: card.rank().map(|r| r.value()),
            id: card.id(),
            display: Some(card.to_string()),
        }
    }
}

impl TryFrom<&CardRef> for Card {
    type Error = DomainError;

    /// Strict conversion: every field required by the kind must be present
    /// and the others must be absent.
    fn try_from(r: &CardRef) -> Result<Self, Self::Error> {
        let mismatch = || {
            DomainError::validation(
                ValidationKind::ParseCard,
                format!("Inconsistent card fields: {r:?}"),
            )
        };
        match r.kind {
            CardKind::Numbered => match (r.suit, r.value, r.id) {
                (Some(suit), Some(value), None) => Card::numbered(suit, value),
                _ => Err(mismatch()),
            },
            CardKind::Wild | CardKind::Null => match (r.suit, r.value, r.id) {
                (None, None, Some(id)) if r.kind == CardKind::Wild => Card::wild(id),
                (None, None, Some(id)) => Card::null(id),
                _ => Err(mismatch()),
            },
        }
    }
}

impl CardRef {
    /// Find the referenced card in `hand`.
    pub fn resolve(&self, hand: &[Card]) -> Result<Card, DomainError> {
        let found = match (self.kind, self.id) {
            (CardKind::Wild, None) => hand.iter().copied().find(Card::is_wild),
            (CardKind::Null, None) => hand.iter().copied().find(Card::is_null),
            _ => {
                let wanted = Card::try_from(self)?;
                hand.iter().copied().find(|&c| c == wanted)
            }
        };
        found.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("Card not in hand: {}", self.describe()),
            )
        })
    }

    fn describe(&self) -> String {
        match Card::try_from(self) {
            Ok(card) => card.to_string(),
            Err(_) => format!("{:?}", self.kind),
        }
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CardRef::from(*self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CardRef::deserialize(deserializer)?;
        Card::try_from(&wire).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
