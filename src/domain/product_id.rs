use std::{fmt, str::FromStr};

use serde::Serialize;

/// Opaque product code used to build the detail page url, e.g. `B09DX1R4RQ`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InvalidProductId {
    #[error("product id is empty")]
    Empty,
    #[error("product id {0:?} contains non-alphanumeric characters")]
    NotAlphanumeric(String),
}

impl ProductId {
    pub fn parse(raw: &str) -> Result<Self, InvalidProductId> {
        let trimmed = raw.trim();
        match trimmed {
            "" => Err(InvalidProductId::Empty),
            t if !t.chars().all(|c| c.is_ascii_alphanumeric()) => {
                Err(InvalidProductId::NotAlphanumeric(t.to_string()))
            }
            t => Ok(ProductId(t.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitutes `{identifier}` in a url template.
    pub fn detail_url(&self, template: &str) -> String {
        template.replace("{identifier}", &self.0)
    }
}

impl FromStr for ProductId {
    type Err = InvalidProductId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductId::parse(s)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
