// src/core/xml.rs
//! Owned XML tree plus the typed attribute accessor.
//!
//! `roxmltree` borrows the input text, so responses are copied into
//! [`Element`] right after parsing. The tree is small (one search page or one
//! `thing` record) and the copy keeps the transport handle free of lifetimes.
//!
//! Catalog fields carry their payload in a `value` attribute:
//!
//! ```text
//! <item type="boardgame" id="13">
//!   <name type="primary" value="Catan"/>
//!   <yearpublished value="1995"/>
//! </item>
//! ```
//!
//! [`Accessor`] reads those without ever failing on a missing field.

use super::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    /// Parse a full document and return its root element.
    pub fn parse(text: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(text)?;
        Ok(Self::from_node(doc.root_element()))
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let attrs = node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect();

        let text = node
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let children = node
            .children()
            .filter(|c| c.is_element())
            .map(Self::from_node)
            .collect();

        Self {
            name: node.tag_name().name().to_string(),
            attrs,
            text,
            children,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct children with the given tag name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First element named `name` below this one, depth-first in document order.
    pub fn first_descendant(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.first_descendant(name) {
                return Some(found);
            }
        }
        None
    }

    pub fn accessor(&self) -> Accessor<'_> {
        Accessor::new(self)
    }
}

/// Borrowed view over one element that reads `<key value="..."/>` fields.
#[derive(Clone, Copy, Debug)]
pub struct Accessor<'a> {
    elem: &'a Element,
}

impl<'a> Accessor<'a> {
    pub fn new(elem: &'a Element) -> Self {
        Self { elem }
    }

    /// The `value` attribute of the first descendant named `key`, if both exist.
    pub fn value(&self, key: &str) -> Option<&'a str> {
        self.elem.first_descendant(key)?.attr("value")
    }

    /// Like [`Accessor::value`] but substitutes `default`. Never fails.
    pub fn get_value<'d>(&self, key: &str, default: &'d str) -> &'d str
    where
        'a: 'd,
    {
        self.value(key).unwrap_or(default)
    }

    /// Integer field, `None` if absent. Non-numeric text is an error.
    pub fn opt_int(&self, key: &str) -> Result<Option<i64>> {
        match self.value(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| Error::Field { key: key.to_string(), value: raw.to_string() }),
        }
    }

    /// Integer field with `default` when absent.
    pub fn get_int(&self, key: &str, default: i64) -> Result<i64> {
        Ok(self.opt_int(key)?.unwrap_or(default))
    }
}
