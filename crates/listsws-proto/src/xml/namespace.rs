//! XML namespace and qualified name types.

use std::borrow::Cow;

use listsws_core::constants::{LISTS_NS, ROWSET_DATA_NS, ROWSET_ROW_NS, SOAP11_NS, SOAP12_NS};

/// An XML namespace. The empty URI stands for "no namespace".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(pub Cow<'static, str>);

impl Namespace {
    /// No namespace.
    pub const NONE: Self = Self(Cow::Borrowed(""));

    /// Lists web service namespace.
    pub const LISTS: Self = Self(Cow::Borrowed(LISTS_NS));

    /// Rowset row namespace (`z:`).
    pub const ROWSET_ROW: Self = Self(Cow::Borrowed(ROWSET_ROW_NS));

    /// Rowset data namespace (`rs:`).
    pub const ROWSET_DATA: Self = Self(Cow::Borrowed(ROWSET_DATA_NS));

    /// SOAP 1.1 envelope namespace.
    pub const SOAP11: Self = Self(Cow::Borrowed(SOAP11_NS));

    /// SOAP 1.2 envelope namespace.
    pub const SOAP12: Self = Self(Cow::Borrowed(SOAP12_NS));

    /// Creates a new namespace from a string.
    #[must_use]
    pub fn new(uri: impl Into<Cow<'static, str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the conventional prefix for this namespace.
    #[must_use]
    pub fn default_prefix(&self) -> Option<&'static str> {
        match self.0.as_ref() {
            ROWSET_ROW_NS => Some("z"),
            ROWSET_DATA_NS => Some("rs"),
            SOAP11_NS | SOAP12_NS => Some("soap"),
            _ => None,
        }
    }
}

impl From<&'static str> for Namespace {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for Namespace {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

/// A qualified XML name (namespace + local name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// The namespace URI.
    pub namespace: Namespace,
    /// The local name.
    pub local_name: Cow<'static, str>,
}

impl QName {
    /// Creates a new qualified name.
    #[must_use]
    pub fn new(namespace: impl Into<Namespace>, local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Creates a name without a namespace.
    #[must_use]
    pub fn local(local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Namespace::NONE,
            local_name: local_name.into(),
        }
    }

    /// Creates a Lists service qualified name.
    #[must_use]
    pub fn lists(local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Namespace::LISTS,
            local_name: local_name.into(),
        }
    }

    /// Returns the local name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn namespace_uri(&self) -> &str {
        self.namespace.as_str()
    }

    /// Returns whether this is a SOAP envelope element of either version.
    #[must_use]
    pub fn is_soap(&self) -> bool {
        self.namespace == Namespace::SOAP11 || self.namespace == Namespace::SOAP12
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.namespace.is_none() {
            f.write_str(&self.local_name)
        } else {
            write!(f, "{{{}}}{}", self.namespace.as_str(), self.local_name)
        }
    }
}
