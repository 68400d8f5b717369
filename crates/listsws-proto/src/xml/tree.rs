//! Generic element tree shared by request builders and response extractors.

use super::namespace::{Namespace, QName};

/// One XML element with its attributes, child elements and text content.
///
/// Namespace declarations seen while parsing are resolved into [`QName`]s
/// and are not kept as attributes. Builders that need declarations on the
/// wire add them as ordinary `xmlns` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: QName,
    pub prefix: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
    text: String,
}

impl XmlElement {
    /// Creates an element without a namespace.
    #[must_use]
    pub fn new(local_name: impl Into<String>) -> Self {
        Self::with_name(QName::local(local_name.into()), None)
    }

    /// Creates an element in a namespace, written with the given prefix.
    #[must_use]
    pub fn namespaced(namespace: Namespace, prefix: Option<&str>, local_name: impl Into<String>) -> Self {
        Self::with_name(
            QName::new(namespace, local_name.into()),
            prefix.map(str::to_owned),
        )
    }

    pub(crate) fn with_name(name: QName, prefix: Option<String>) -> Self {
        Self {
            name,
            prefix,
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = XmlElement>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets an attribute, replacing an existing value with the same key.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.attributes.push((key, value));
        }
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Removes and returns the first direct child with the given local name.
    pub fn take_child(&mut self, local_name: &str) -> Option<XmlElement> {
        let index = self
            .children
            .iter()
            .position(|c| c.local_name() == local_name)?;
        Some(self.children.remove(index))
    }

    #[must_use]
    pub fn into_children(self) -> Vec<XmlElement> {
        self.children
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn clear_blank_text(&mut self) {
        if !self.children.is_empty() && self.text.trim().is_empty() {
            self.text.clear();
        }
    }

    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name.local_name()
    }

    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.name.namespace
    }

    /// Name as written on the wire, e.g. `z:row`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", self.local_name()),
            _ => self.local_name().to_owned(),
        }
    }

    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    #[must_use]
    pub fn first_child(&self) -> Option<&XmlElement> {
        self.children.first()
    }

    /// First direct child with the given local name.
    #[must_use]
    pub fn child(&self, local_name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.local_name() == local_name)
    }

    /// Direct children with the given local name, in document order.
    pub fn children_named<'a>(&'a self, local_name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children
            .iter()
            .filter(move |c| c.local_name() == local_name)
    }

    /// All elements below this one, in document order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// This element followed by its descendants.
    pub fn self_and_descendants(&self) -> impl Iterator<Item = &XmlElement> {
        std::iter::once(self).chain(self.descendants())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of the first direct child with the given local name.
    #[must_use]
    pub fn child_text(&self, local_name: &str) -> Option<&str> {
        self.child(local_name).map(XmlElement::text)
    }
}

/// Depth-first, document-order iterator over descendant elements.
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}
