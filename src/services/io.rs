use std::path::Path;

use anyhow::Context;

use crate::domain::product_id::ProductId;

use super::BatchReport;

/// The first line is the column header (e.g. `ASIN`) and is always skipped.
/// After it comes one identifier per line; blank lines and `#` comments are
/// ignored.
pub fn parse_product_ids(text: &str) -> Vec<ProductId> {
    let mut lines = text.lines();
    if let Some(header) = lines.next() {
        log::info!("Skipping header line {:?}", header.trim());
    }

    let mut ids = vec![];
    for line in lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
    {
        match ProductId::parse(line) {
            Ok(id) => ids.push(id),
            Err(e) => log::warn!("Skipping line {:?}: {}", line, e),
        }
    }
    ids
}

pub async fn read_product_ids(path: &Path) -> anyhow::Result<Vec<ProductId>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read product ids from {}", path.display()))?;

    Ok(parse_product_ids(&text))
}

/// Writes the whole report as one JSON object, via a temporary file renamed
/// into place so a failed write never leaves a truncated output behind.
pub async fn write_report(path: &Path, report: &BatchReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_vec_pretty(report).context("Failed to serialize results")?;

    let tmp_path = path.with_extension("tmp");
    tokio::fs::write(&tmp_path, json)
        .await
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .with_context(|| format!("Failed to move results into {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_header_comments_and_blank_lines() {
        let text = "ASIN-LIST\n\nB09DX1R4RQ\n# paused\n  B0C1234567  \nbad id\nB09DX1R4RQ\n";

        let ids: Vec<String> = parse_product_ids(text)
            .iter()
            .map(|id| id.to_string())
            .collect();

        assert_eq!(ids, vec!["B09DX1R4RQ", "B0C1234567", "B09DX1R4RQ"]);
    }

    #[test]
    fn asin_column_name_is_treated_as_a_header() {
        let ids = parse_product_ids("ASIN\nB09DX1R4RQ");

        assert_eq!(ids, vec![ProductId::parse("B09DX1R4RQ").unwrap()]);
    }

    #[test]
    fn first_line_is_skipped_whatever_its_content() {
        let ids = parse_product_ids("Product\nB0C1234567");
        assert_eq!(ids, vec![ProductId::parse("B0C1234567").unwrap()]);

        let ids = parse_product_ids("B09DX1R4RQ\nB0C1234567");
        assert_eq!(ids, vec![ProductId::parse("B0C1234567").unwrap()]);
    }

    #[test]
    fn header_only_input_yields_no_ids() {
        assert!(parse_product_ids("ASIN\n\n").is_empty());
        assert!(parse_product_ids("").is_empty());
    }

    #[tokio::test]
    async fn read_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();

        let err = read_product_ids(&dir.path().join("missing.txt"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("missing.txt"));
    }
}
