use serde::Deserialize;

/// Anchors and text conventions of one site's detail page templates.
///
/// Every selector is a CSS selector string. Missing keys in the configuration
/// fall back to the defaults for the Japanese Amazon storefront.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiteProfile {
    pub bullet_prefix: String,
    pub description_header: String,
    /// Characters stripped from the end of a detail-list label, e.g. the
    /// trailing colon and the RTL/LTR marks the storefront emits around it.
    pub label_strip_chars: String,

    pub feature_bullets: String,
    pub feature_bullet_items: String,
    pub facts_expander: String,
    pub facts_expander_items: String,

    pub manufacturer_anchors: Vec<String>,
    pub manufacturer_parts: String,

    pub tech_spec_table: String,
    pub detail_bullets_table: String,
    pub detail_bullets_list: String,
    pub detail_bullet_items: String,
    pub detail_bullet_label: String,
    pub detail_bullet_value_tag: String,
    pub details_container: String,

    pub description: String,
    pub description_paragraphs: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        SiteProfile {
            bullet_prefix: "・".to_string(),
            description_header: "商品の説明".to_string(),
            label_strip_chars: ":\u{200f}\u{200e} ".to_string(),

            feature_bullets: "div#feature-bullets".to_string(),
            feature_bullet_items: "span.a-list-item".to_string(),
            facts_expander: "div#productFactsDesktopExpander".to_string(),
            facts_expander_items: "li".to_string(),

            manufacturer_anchors: vec![
                "div#aplus".to_string(),
                "div#aplus_feature_div".to_string(),
            ],
            manufacturer_parts: "p, h1, h2, h3, h4, h5, span, td".to_string(),

            tech_spec_table: "table#productDetails_techSpec_section_1".to_string(),
            detail_bullets_table: "table#productDetails_detailBullets_sections1".to_string(),
            detail_bullets_list: "div#detailBullets_feature_div".to_string(),
            detail_bullet_items: "li".to_string(),
            detail_bullet_label: "span.a-text-bold".to_string(),
            detail_bullet_value_tag: "span".to_string(),
            details_container: "div#prodDetails".to_string(),

            description: "div#productDescription".to_string(),
            description_paragraphs: "p".to_string(),
        }
    }
}
