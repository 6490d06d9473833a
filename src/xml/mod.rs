//! XML parsing and tag-name navigation
//!
//! SEPA files are walked by searching for elements by local name rather than by
//! fixed paths, since the same information appears at different depths in the
//! pain.001 and pain.008 variants.

use roxmltree::{Document, ParsingOptions};
use tracing::debug;

use crate::error::SepaError;

/// Read-only navigation needed by the classifier, structural checks and extractor.
///
/// Tag names are compared on their local part; namespace prefixes are ignored.
pub trait XmlNode: Sized + Copy {
    /// Local tag name (empty for non-element nodes)
    fn local_name(&self) -> &str;

    /// Namespace URI of the element, if any
    fn namespace(&self) -> Option<&str>;

    /// Concatenation of all text below this node
    fn text_content(&self) -> String;

    /// First child that is an element
    fn first_element_child(&self) -> Option<Self>;

    /// All descendant elements with the given local name, in document order.
    /// The node itself is never part of the result.
    fn descendants_by_tag(&self, name: &str) -> Vec<Self>;

    fn first_descendant(&self, name: &str) -> Option<Self> {
        self.descendants_by_tag(name).into_iter().next()
    }

    fn has_descendant(&self, name: &str) -> bool {
        self.first_descendant(name).is_some()
    }

    /// Text of the first descendant named `name`, `None` when there is none.
    fn descendant_text(&self, name: &str) -> Option<String> {
        self.first_descendant(name).map(|n| n.text_content())
    }

    /// Text of the first `child` below the first `parent`.
    /// A missing `parent` yields `None`.
    fn nested_text(&self, parent: &str, child: &str) -> Option<String> {
        self.first_descendant(parent)?.descendant_text(child)
    }
}

impl<'a, 'input: 'a> XmlNode for roxmltree::Node<'a, 'input> {
    fn local_name(&self) -> &str {
        self.tag_name().name()
    }

    fn namespace(&self) -> Option<&str> {
        self.tag_name().namespace()
    }

    fn text_content(&self) -> String {
        self.descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect()
    }

    fn first_element_child(&self) -> Option<Self> {
        roxmltree::Node::first_element_child(self)
    }

    fn descendants_by_tag(&self, name: &str) -> Vec<Self> {
        self.descendants()
            .skip(1)
            .filter(|n| n.is_element() && n.tag_name().name() == name)
            .collect()
    }

    fn first_descendant(&self, name: &str) -> Option<Self> {
        self.descendants()
            .skip(1)
            .find(|n| n.is_element() && n.tag_name().name() == name)
    }
}

/// Parse XML text into a tree.
///
/// DOCTYPE declarations are accepted; any other well-formedness problem is
/// reported as [`SepaError::Parse`] carrying the parser's diagnostic.
pub fn parse_document(text: &str) -> Result<Document<'_>, SepaError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };

    let doc = Document::parse_with_options(text, options)?;
    debug!(nodes = doc.descendants().count(), "parsed XML document");
    Ok(doc)
}
