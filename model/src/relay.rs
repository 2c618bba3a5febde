//! Relay-style global object identifiers.
//!
//! A global ID identifies an object uniquely across every type in the schema. It is the base64
//! encoding of the object's GraphQL type name and its type-local ID, joined by a `:`. Clients treat
//! it as opaque.

use anyhow::Error;
use async_graphql::ID;
use base64::prelude::*;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// An object identifier which is unique across all types.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalId {
    /// The name of the GraphQL object type the ID refers to.
    pub type_name: String,
    /// The ID of the object, unique only among objects of `type_name`.
    pub id: String,
}

impl GlobalId {
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
        }
    }
}

impl Display for GlobalId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let raw = format!("{}:{}", self.type_name, self.id);
        write!(f, "{}", BASE64_STANDARD.encode(raw))
    }
}

impl FromStr for GlobalId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = BASE64_STANDARD
            .decode(s)
            .map_err(|err| Error::msg(format!("global ID {s} is not valid base64: {err}")))?;
        let raw = String::from_utf8(bytes)
            .map_err(|err| Error::msg(format!("global ID {s} is not UTF-8: {err}")))?;
        // Only the type name is guaranteed not to contain the separator.
        let (type_name, id) = raw
            .split_once(':')
            .ok_or_else(|| Error::msg(format!("global ID {s} ({raw}) has no type name")))?;
        Ok(Self::new(type_name, id))
    }
}

impl TryFrom<&ID> for GlobalId {
    type Error = Error;

    fn try_from(id: &ID) -> Result<Self, Self::Error> {
        id.as_str().parse()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(GlobalId::new("Model", "1").to_string(), "TW9kZWw6MQ==");
        assert_eq!(
            ID::from(GlobalId::new("Model", "1")),
            ID("TW9kZWw6MQ==".into())
        );
    }

    #[test]
    fn test_decode() {
        let id: GlobalId = "TW9kZWw6MQ==".parse().unwrap();
        assert_eq!(id, GlobalId::new("Model", "1"));

        // Separators after the first belong to the local ID.
        let id = GlobalId::new("Model", "resnet:v2");
        assert_eq!(id.to_string().parse::<GlobalId>().unwrap(), id);

        let id = GlobalId::try_from(&ID::from(GlobalId::new("Model", ""))).unwrap();
        assert_eq!(id.type_name, "Model");
        assert_eq!(id.id, "");
    }

    #[test]
    fn test_decode_malformed() {
        // Not base64.
        assert!("not base64!".parse::<GlobalId>().is_err());
        // Not UTF-8.
        assert!(BASE64_STANDARD
            .encode([0xff, 0xfe])
            .parse::<GlobalId>()
            .is_err());
        // Missing separator.
        assert!(BASE64_STANDARD
            .encode("Model")
            .parse::<GlobalId>()
            .is_err());
    }
}
