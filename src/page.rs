//! In-memory document used by the raylib stage and by tests.

use std::collections::{BTreeMap, HashSet};

use crate::host::{ElementId, Host, HostVersion, Marker, Size, Style};

pub const PAGE_VERSION: HostVersion = HostVersion::new(1, 2);

/// Write performed on the page, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Style(ElementId, Style),
    Flush(ElementId),
    Marker(ElementId, Marker, bool),
}

#[derive(Debug, Default)]
struct Node {
    children: Vec<ElementId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    size: Size,
    style: Option<Style>,
    markers: HashSet<Marker>,
}

#[derive(Debug)]
pub struct Page {
    version: HostVersion,
    nodes: Vec<Node>,
    journal: Vec<Op>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self::with_version(PAGE_VERSION)
    }

    pub fn with_version(version: HostVersion) -> Self {
        Self {
            version,
            nodes: Vec::new(),
            journal: Vec::new(),
        }
    }

    /// Appends a new element under `parent` carrying the space separated `classes`.
    pub fn create(&mut self, parent: Option<ElementId>, classes: &str) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            classes: classes.split_whitespace().map(str::to_owned).collect(),
            ..Node::default()
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    pub fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.attributes.insert(name.to_owned(), value.to_owned());
        }
        self
    }

    pub fn set_size(&mut self, element: ElementId, size: Size) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.size = size;
        }
        self
    }

    pub fn style(&self, element: ElementId) -> Option<Style> {
        self.nodes.get(element.0).and_then(|node| node.style)
    }

    pub fn journal(&self) -> &[Op] {
        &self.journal
    }

    pub fn take_journal(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.journal)
    }

    fn matches(&self, element: ElementId, selector: &str) -> bool {
        let Some(node) = self.nodes.get(element.0) else {
            return false;
        };
        let selector = selector.trim();
        if selector == "*" {
            return true;
        }
        if let Some(id) = selector.strip_prefix('#') {
            return node.attributes.get("id").is_some_and(|value| value == id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return node.classes.iter().any(|c| c == class);
        }
        if let Some(inner) = selector.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return match inner.split_once('=') {
                Some((name, value)) => {
                    let value = value.trim_matches(|c| c == '"' || c == '\'');
                    node.attributes.get(name).is_some_and(|v| v == value)
                }
                None => node.attributes.contains_key(inner),
            };
        }
        false
    }
}

impl Host for Page {
    fn version(&self) -> HostVersion {
        self.version
    }

    fn select(&self, selector: &str) -> Vec<ElementId> {
        (0..self.nodes.len())
            .map(ElementId)
            .filter(|&id| self.matches(id, selector))
            .collect()
    }

    fn children(&self, parent: ElementId, selector: &str) -> Vec<ElementId> {
        self.nodes
            .get(parent.0)
            .map(|node| {
                node.children
                    .iter()
                    .copied()
                    .filter(|&id| self.matches(id, selector))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.nodes
            .get(element.0)
            .and_then(|node| node.attributes.get(name).cloned())
    }

    fn size(&self, element: ElementId) -> Size {
        self.nodes
            .get(element.0)
            .map(|node| node.size)
            .unwrap_or_default()
    }

    fn set_style(&mut self, element: ElementId, style: &Style) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.style = Some(*style);
            self.journal.push(Op::Style(element, *style));
        }
    }

    fn flush_layout(&mut self, element: ElementId) -> Size {
        self.journal.push(Op::Flush(element));
        self.size(element)
    }

    fn set_marker(&mut self, element: ElementId, marker: Marker, on: bool) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            if on {
                node.markers.insert(marker);
            } else {
                node.markers.remove(&marker);
            }
            self.journal.push(Op::Marker(element, marker, on));
        }
    }

    fn has_marker(&self, element: ElementId, marker: Marker) -> bool {
        self.nodes
            .get(element.0)
            .is_some_and(|node| node.markers.contains(&marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_by_class_id_and_attribute() {
        let mut page = Page::new();
        let root = page.create(None, "show");
        let a = page.create(Some(root), "slide first");
        let b = page.create(Some(root), "slide");
        let other = page.create(Some(root), "caption");
        page.set_attribute(b, "id", "second");
        page.set_attribute(other, "data-target", "#second");

        assert_eq!(page.children(root, ".slide"), vec![a, b]);
        assert_eq!(page.select("#second"), vec![b]);
        assert_eq!(page.select("[data-target]"), vec![other]);
        assert_eq!(page.select("[data-target='#second']"), vec![other]);
        assert_eq!(page.select(".first"), vec![a]);
        assert!(page.select("div").is_empty());
    }

    #[test]
    fn journal_records_writes_in_order() {
        let mut page = Page::new();
        let el = page.create(None, "slide");
        page.set_style(el, &Style::HIDDEN);
        page.flush_layout(el);
        page.set_marker(el, Marker::Current, true);

        assert_eq!(
            page.take_journal(),
            vec![
                Op::Style(el, Style::HIDDEN),
                Op::Flush(el),
                Op::Marker(el, Marker::Current, true),
            ]
        );
        assert!(page.has_marker(el, Marker::Current));
        assert!(page.journal().is_empty());
    }
}
