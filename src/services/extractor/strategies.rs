use anyhow::anyhow;
use scraper::Selector;

use crate::domain::document::{Document, Node};

use super::chain::Strategy;

pub fn compile(css: &str) -> anyhow::Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector {:?}: {}", css, e))
}

fn non_empty_texts(nodes: &[Node<'_>]) -> Vec<String> {
    nodes
        .iter()
        .map(Node::text)
        .filter(|text| !text.is_empty())
        .collect()
}

fn join_lines(lines: Vec<String>) -> Option<String> {
    match lines.is_empty() {
        true => None,
        false => Some(lines.join("\n")),
    }
}

/// Bulleted list items under an anchor, e.g. the "about this item" block.
pub struct ListItems {
    pub name: &'static str,
    pub anchor: Selector,
    pub items: Selector,
    pub prefix: String,
}

impl Strategy for ListItems {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extract(&self, doc: &Document) -> Option<String> {
        let anchor = doc.find_first(&self.anchor)?;
        let bullets = non_empty_texts(&anchor.find_all(&self.items))
            .into_iter()
            .map(|text| format!("{}{}", self.prefix, text))
            .collect();

        join_lines(bullets)
    }
}

/// Text of heading/paragraph/cell-like parts under the first anchor that is
/// present, exact repeats dropped.
///
/// Anchors are chosen by presence: if the first one exists but is empty the
/// later ones are not consulted.
pub struct DedupedParts {
    pub name: &'static str,
    pub anchors: Vec<Selector>,
    pub parts: Selector,
}

impl Strategy for DedupedParts {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extract(&self, doc: &Document) -> Option<String> {
        let anchor = self.anchors.iter().find_map(|a| doc.find_first(a))?;

        let mut texts: Vec<String> = vec![];
        for text in non_empty_texts(&anchor.find_all(&self.parts)) {
            if !texts.contains(&text) {
                texts.push(text);
            }
        }

        join_lines(texts)
    }
}

/// `label: value` rows from every `tr` under a container that has both a
/// `th` and a `td`.
pub struct LabeledRows {
    pub name: &'static str,
    pub container: Selector,
    row: Selector,
    label: Selector,
    value: Selector,
}

impl LabeledRows {
    pub fn new(name: &'static str, container: Selector) -> anyhow::Result<Self> {
        Ok(LabeledRows {
            name,
            container,
            row: compile("tr")?,
            label: compile("th")?,
            value: compile("td")?,
        })
    }
}

impl Strategy for LabeledRows {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extract(&self, doc: &Document) -> Option<String> {
        let container = doc.find_first(&self.container)?;
        let rows = container
            .find_all(&self.row)
            .into_iter()
            .filter_map(|tr| {
                let label = tr.find_first(&self.label)?;
                let value = tr.find_first(&self.value)?;
                Some(format!("{}: {}", label.text(), value.text()))
            })
            .collect();

        join_lines(rows)
    }
}

/// Detail-list items whose bold label span is followed by a value span.
pub struct DetailBullets {
    pub name: &'static str,
    pub list: Selector,
    pub items: Selector,
    pub label: Selector,
    pub value_tag: String,
    pub strip_chars: Vec<char>,
}

impl DetailBullets {
    fn clean_label(&self, raw: &str) -> String {
        raw.trim_end_matches(|c: char| self.strip_chars.contains(&c))
            .to_string()
    }
}

impl Strategy for DetailBullets {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extract(&self, doc: &Document) -> Option<String> {
        let list = doc.find_first(&self.list)?;

        let mut rows = vec![];
        for item in list.find_all(&self.items) {
            for label in item.find_all(&self.label) {
                if let Some(value) = label.next_sibling_named(&self.value_tag) {
                    rows.push(format!(
                        "{}: {}",
                        self.clean_label(&label.text()),
                        value.text()
                    ));
                }
            }
        }

        join_lines(rows)
    }
}

/// Non-empty paragraphs of the description block.
pub struct Paragraphs {
    pub name: &'static str,
    pub anchor: Selector,
    pub paragraphs: Selector,
}

impl Strategy for Paragraphs {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extract(&self, doc: &Document) -> Option<String> {
        let anchor = doc.find_first(&self.anchor)?;
        join_lines(non_empty_texts(&anchor.find_all(&self.paragraphs)))
    }
}

/// Whole text of a block with a leading header phrase removed.
pub struct HeaderStrippedText {
    pub name: &'static str,
    pub anchor: Selector,
    pub header: String,
}

impl Strategy for HeaderStrippedText {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extract(&self, doc: &Document) -> Option<String> {
        let text = doc.find_first(&self.anchor)?.text();
        let body = match self.header.is_empty() {
            true => text.as_str(),
            false => text
                .strip_prefix(self.header.as_str())
                .map(str::trim_start)
                .unwrap_or(text.as_str()),
        };

        match body.is_empty() {
            true => None,
            false => Some(body.to_string()),
        }
    }
}
