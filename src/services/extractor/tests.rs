use super::*;

fn extractor() -> Extractor {
    Extractor::new(&SiteProfile::default()).unwrap()
}

fn page(body: &str) -> Document {
    Document::parse(&format!(
        "<!DOCTYPE html><html><head><title>t</title></head><body>{}</body></html>",
        body
    ))
}

#[test]
fn about_item_uses_feature_bullets() {
    let doc = page(
        r#"<div id="feature-bullets"><ul>
            <li><span class="a-list-item"> 軽量設計 </span></li>
            <li><span class="a-list-item">   </span></li>
            <li><span class="a-list-item">防水仕様</span></li>
        </ul></div>
        <div id="productFactsDesktopExpander"><ul><li>保証1年</li></ul></div>"#,
    );

    let trace = extractor().resolve(&doc);

    assert_eq!(trace.about_item.text, "・軽量設計\n・防水仕様");
    assert_eq!(trace.about_item.strategy, Some("feature_bullets"));
}

#[test]
fn about_item_falls_back_to_the_facts_expander() {
    let doc = page(r#"<div id="productFactsDesktopExpander"><ul><li> 保証1年 </li></ul></div>"#);

    let trace = extractor().resolve(&doc);

    assert_eq!(trace.about_item.text, "・保証1年");
    assert_eq!(trace.about_item.strategy, Some("facts_expander"));
}

#[test]
fn about_item_falls_back_when_primary_anchor_is_empty() {
    let doc = page(
        r#"<div id="feature-bullets"><ul><li><span class="a-list-item"></span></li></ul></div>
        <div id="productFactsDesktopExpander"><ul><li>保証1年</li></ul></div>"#,
    );

    assert_eq!(extractor().extract(&doc).about_item, "・保証1年");
}

#[test]
fn about_item_is_empty_without_either_anchor() {
    let doc = page("<div id='centerCol'><p>no bullets here</p></div>");

    assert_eq!(extractor().extract(&doc).about_item, "");
}

#[test]
fn manufacturer_description_dedupes_in_first_seen_order() {
    let doc = page(
        r#"<div id="aplus"><div class="module">
            <h3>高耐久ボディ</h3>
            <p>雨の日でも安心。</p>
            <table><tr><td>高耐久ボディ</td><td>  </td></tr></table>
            <p>雨の日でも安心。</p>
            <h4>付属品</h4>
        </div></div>"#,
    );

    assert_eq!(
        extractor().extract(&doc).manufacturer_description,
        "高耐久ボディ\n雨の日でも安心。\n付属品"
    );
}

#[test]
fn manufacturer_description_uses_the_alternate_anchor() {
    let doc = page(r#"<div id="aplus_feature_div"><p>ブランドストーリー</p></div>"#);

    assert_eq!(
        extractor().extract(&doc).manufacturer_description,
        "ブランドストーリー"
    );
}

#[test]
fn manufacturer_description_does_not_skip_a_present_but_empty_primary() {
    let doc = page(
        r#"<div id="aplus"><div></div></div>
        <div id="aplus_feature_div"><p>ignored</p></div>"#,
    );

    assert_eq!(extractor().extract(&doc).manufacturer_description, "");
}

#[test]
fn product_information_prefers_the_tech_spec_table_without_merging() {
    let doc = page(
        r#"<table id="productDetails_techSpec_section_1">
            <tr><th>ブランド</th><td>ACME</td></tr>
            <tr><th>色</th><td>ブラック</td></tr>
        </table>
        <table id="productDetails_detailBullets_sections1">
            <tr><th>ASIN</th><td>B09DX1R4RQ</td></tr>
        </table>"#,
    );

    let trace = extractor().resolve(&doc);

    assert_eq!(trace.product_information.text, "ブランド: ACME\n色: ブラック");
    assert_eq!(trace.product_information.strategy, Some("tech_spec_table"));
}

#[test]
fn product_information_uses_the_second_table_when_first_is_absent() {
    let doc = page(
        r#"<table id="productDetails_detailBullets_sections1">
            <tr><th>ASIN</th><td>B09DX1R4RQ</td></tr>
        </table>"#,
    );

    assert_eq!(
        extractor().extract(&doc).product_information,
        "ASIN: B09DX1R4RQ"
    );
}

#[test]
fn product_information_reads_the_detail_bullet_list() {
    let doc = page(
        "<div id=\"detailBullets_feature_div\"><ul class=\"a-unordered-list\">
            <li><span class=\"a-list-item\">
                <span class=\"a-text-bold\">製品サイズ \u{200f} : \u{200e}</span>
                <span>10 x 5 x 2 cm</span>
            </span></li>
            <li><span class=\"a-list-item\">
                <span class=\"a-text-bold\">メーカー \u{200f} : \u{200e}</span>
                <span>ACME</span>
            </span></li>
        </ul></div>",
    );

    let trace = extractor().resolve(&doc);

    assert_eq!(
        trace.product_information.text,
        "製品サイズ: 10 x 5 x 2 cm\nメーカー: ACME"
    );
    assert_eq!(trace.product_information.strategy, Some("detail_bullets_list"));
}

#[test]
fn product_information_scans_all_tables_in_the_details_container() {
    let doc = page(
        r#"<div id="prodDetails">
            <table><tr><th>型番</th><td>X-1</td></tr></table>
            <div><table><tr><th>電池</th><td>不要</td></tr></table></div>
        </div>"#,
    );

    let trace = extractor().resolve(&doc);

    assert_eq!(trace.product_information.text, "型番: X-1\n電池: 不要");
    assert_eq!(trace.product_information.strategy, Some("details_container"));
}

#[test]
fn product_description_joins_paragraphs() {
    let doc = page(
        r#"<div id="productDescription"><h2>商品の説明</h2>
            <p>軽くて丈夫。</p><p> </p><p>日本製。</p>
        </div>"#,
    );

    assert_eq!(
        extractor().extract(&doc).product_description,
        "軽くて丈夫。\n日本製。"
    );
}

#[test]
fn product_description_strips_the_header_without_paragraphs() {
    let doc = page(
        r#"<div id="productDescription"><h2>商品の説明</h2>
            <span>シンプルなデザインのマグカップ</span>
        </div>"#,
    );

    let trace = extractor().resolve(&doc);

    assert_eq!(
        trace.product_description.text,
        "シンプルなデザインのマグカップ"
    );
    assert_eq!(trace.product_description.strategy, Some("description_text"));
}

#[test]
fn garbage_and_empty_documents_yield_four_empty_fields() {
    for markup in ["", "<<<>>>", "not html at all", "<div id='aplus'"] {
        let fields = extractor().extract(&Document::parse(markup));

        assert_eq!(fields, ProductFields::default(), "markup: {:?}", markup);
    }
}

#[test]
fn extraction_is_idempotent() {
    let doc = page(
        r#"<div id="feature-bullets"><span class="a-list-item">軽量設計</span></div>
        <div id="aplus"><p>a</p><p>a</p></div>
        <div id="productDescription"><p>説明</p></div>"#,
    );
    let extractor = extractor();

    assert_eq!(extractor.extract(&doc), extractor.extract(&doc));
}

#[test]
fn custom_profile_replaces_anchors() {
    let profile = SiteProfile {
        feature_bullets: "section.highlights".to_string(),
        feature_bullet_items: "li".to_string(),
        bullet_prefix: "* ".to_string(),
        ..Default::default()
    };
    let extractor = Extractor::new(&profile).unwrap();
    let doc = page("<section class='highlights'><ul><li>fast</li></ul></section>");

    assert_eq!(extractor.extract(&doc).about_item, "* fast");
}

#[test]
fn invalid_profile_selector_is_a_construction_error() {
    let profile = SiteProfile {
        description: "div[".to_string(),
        ..Default::default()
    };

    assert!(Extractor::new(&profile).is_err());
}

#[test]
fn chains_list_strategies_in_priority_order() {
    let extractor = extractor();
    let [about, manufacturer, information, description] = extractor.chains();

    assert_eq!(about.strategy_names(), vec!["feature_bullets", "facts_expander"]);
    assert_eq!(manufacturer.field(), "manufacturer_description");
    assert_eq!(
        information.strategy_names(),
        vec![
            "tech_spec_table",
            "detail_bullets_table",
            "detail_bullets_list",
            "details_container"
        ]
    );
    assert_eq!(
        description.strategy_names(),
        vec!["description_paragraphs", "description_text"]
    );
}
