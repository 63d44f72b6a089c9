use crate::domain::document::Document;

/// One way of locating a field's content in a page.
///
/// Returns `None` when the anchor is missing or yields no non-empty text, so
/// the chain moves on to the next strategy.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, doc: &Document) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub strategy: Option<&'static str>,
}

/// Ordered strategies for one field. The first strategy that yields content
/// wins and later ones are never evaluated.
pub struct FallbackChain {
    field: &'static str,
    strategies: Vec<Box<dyn Strategy>>,
}

impl FallbackChain {
    pub fn new(field: &'static str, strategies: Vec<Box<dyn Strategy>>) -> Self {
        FallbackChain { field, strategies }
    }

    #[cfg(test)]
    pub fn field(&self) -> &'static str {
        self.field
    }

    #[cfg(test)]
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn resolve(&self, doc: &Document) -> Resolution {
        let resolution = self
            .strategies
            .iter()
            .find_map(|strategy| {
                strategy.extract(doc).map(|text| Resolution {
                    text,
                    strategy: Some(strategy.name()),
                })
            })
            .unwrap_or(Resolution {
                text: String::new(),
                strategy: None,
            });

        log::trace!("{} resolved by {:?}", self.field, resolution.strategy);
        resolution
    }
}
