use scraper::{ElementRef, Html, Selector};

/// One parsed detail page. Dropped once its fields have been extracted.
pub struct Document {
    html: Html,
}

/// An element inside a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl Document {
    /// Parsing is lenient: garbage or empty markup still yields a document,
    /// just one without the anchors the extractor looks for.
    pub fn parse(markup: &str) -> Self {
        Document {
            html: Html::parse_document(markup),
        }
    }

    pub fn find_first(&self, selector: &Selector) -> Option<Node<'_>> {
        self.html.select(selector).next().map(Node::from)
    }

    pub fn find_all(&self, selector: &Selector) -> Vec<Node<'_>> {
        self.html.select(selector).map(Node::from).collect()
    }
}

impl<'a> From<ElementRef<'a>> for Node<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Node { element }
    }
}

impl<'a> Node<'a> {
    pub fn find_first(&self, selector: &Selector) -> Option<Node<'a>> {
        self.element.select(selector).next().map(Node::from)
    }

    pub fn find_all(&self, selector: &Selector) -> Vec<Node<'a>> {
        self.element.select(selector).map(Node::from).collect()
    }

    /// Every descendant text fragment, trimmed, empty ones dropped, joined
    /// without a separator.
    pub fn text(&self) -> String {
        self.element
            .text()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }

    /// The closest following sibling element with the given tag name.
    pub fn next_sibling_named(&self, tag: &str) -> Option<Node<'a>> {
        self.element
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| sibling.value().name() == tag)
            .map(Node::from)
    }
}
