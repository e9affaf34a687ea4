use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Identifier of a rendered card (UUID v7).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct CardId(pub Uuid);

impl CardId {
    #[must_use]
    /// Generate a fresh card identifier.
    pub fn new() -> Self {
        // Version 7 keeps ids of successively rendered cards ordered.
        Self(Uuid::now_v7())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CardId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Serialize for CardId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_id_uses_uuid_v7() {
        let id = CardId::new();
        assert_eq!(id.0.get_version_num(), 7);
    }

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(CardId::new(), CardId::new());
    }

    #[test]
    fn card_id_parses_its_display_form() {
        let id = CardId::new();
        let parsed: CardId = id
            .to_string()
            .parse()
            .unwrap_or_else(|err| panic!("must parse card id: {err}"));
        assert_eq!(parsed, id);
    }
}
