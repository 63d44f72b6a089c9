mod chain;
mod strategies;

pub use chain::*;
pub use strategies::*;

use crate::domain::{document::Document, record::ProductFields, site_profile::SiteProfile};

/// Which strategy produced each field, `None` where every fallback came up
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionTrace {
    pub about_item: Resolution,
    pub manufacturer_description: Resolution,
    pub product_information: Resolution,
    pub product_description: Resolution,
}

impl From<ExtractionTrace> for ProductFields {
    fn from(trace: ExtractionTrace) -> Self {
        ProductFields {
            about_item: trace.about_item.text,
            manufacturer_description: trace.manufacturer_description.text,
            product_information: trace.product_information.text,
            product_description: trace.product_description.text,
        }
    }
}

pub struct Extractor {
    about_item: FallbackChain,
    manufacturer_description: FallbackChain,
    product_information: FallbackChain,
    product_description: FallbackChain,
}

impl Extractor {
    /// Compiles the profile's selectors into the four fallback chains.
    pub fn new(profile: &SiteProfile) -> anyhow::Result<Self> {
        let about_item = FallbackChain::new(
            "about_item",
            vec![
                Box::new(ListItems {
                    name: "feature_bullets",
                    anchor: compile(&profile.feature_bullets)?,
                    items: compile(&profile.feature_bullet_items)?,
                    prefix: profile.bullet_prefix.clone(),
                }),
                Box::new(ListItems {
                    name: "facts_expander",
                    anchor: compile(&profile.facts_expander)?,
                    items: compile(&profile.facts_expander_items)?,
                    prefix: profile.bullet_prefix.clone(),
                }),
            ],
        );

        let manufacturer_description = FallbackChain::new(
            "manufacturer_description",
            vec![Box::new(DedupedParts {
                name: "aplus",
                anchors: profile
                    .manufacturer_anchors
                    .iter()
                    .map(|css| compile(css))
                    .collect::<anyhow::Result<_>>()?,
                parts: compile(&profile.manufacturer_parts)?,
            })],
        );

        let product_information = FallbackChain::new(
            "product_information",
            vec![
                Box::new(LabeledRows::new(
                    "tech_spec_table",
                    compile(&profile.tech_spec_table)?,
                )?),
                Box::new(LabeledRows::new(
                    "detail_bullets_table",
                    compile(&profile.detail_bullets_table)?,
                )?),
                Box::new(DetailBullets {
                    name: "detail_bullets_list",
                    list: compile(&profile.detail_bullets_list)?,
                    items: compile(&profile.detail_bullet_items)?,
                    label: compile(&profile.detail_bullet_label)?,
                    value_tag: profile.detail_bullet_value_tag.clone(),
                    strip_chars: profile.label_strip_chars.chars().collect(),
                }),
                Box::new(LabeledRows::new(
                    "details_container",
                    compile(&profile.details_container)?,
                )?),
            ],
        );

        let product_description = FallbackChain::new(
            "product_description",
            vec![
                Box::new(Paragraphs {
                    name: "description_paragraphs",
                    anchor: compile(&profile.description)?,
                    paragraphs: compile(&profile.description_paragraphs)?,
                }),
                Box::new(HeaderStrippedText {
                    name: "description_text",
                    anchor: compile(&profile.description)?,
                    header: profile.description_header.clone(),
                }),
            ],
        );

        Ok(Extractor {
            about_item,
            manufacturer_description,
            product_information,
            product_description,
        })
    }

    #[cfg(test)]
    pub fn chains(&self) -> [&FallbackChain; 4] {
        [
            &self.about_item,
            &self.manufacturer_description,
            &self.product_information,
            &self.product_description,
        ]
    }

    pub fn resolve(&self, doc: &Document) -> ExtractionTrace {
        ExtractionTrace {
            about_item: self.about_item.resolve(doc),
            manufacturer_description: self.manufacturer_description.resolve(doc),
            product_information: self.product_information.resolve(doc),
            product_description: self.product_description.resolve(doc),
        }
    }

    pub fn extract(&self, doc: &Document) -> ProductFields {
        self.resolve(doc).into()
    }
}

#[cfg(test)]
mod tests;
