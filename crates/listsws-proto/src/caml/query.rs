//! CAML `<Query>` filters.

use crate::xml::XmlElement;

/// Comparison operator of a filter leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Neq,
    Contains,
    IsNull,
}

impl Operator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "Eq",
            Self::Neq => "Neq",
            Self::Contains => "Contains",
            Self::IsNull => "IsNull",
        }
    }
}

/// A single field comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub field_name: String,
    pub operator: Operator,
    /// Ignored by `IsNull`.
    pub value: String,
    /// CAML value type, e.g. `Text`, `Counter`, `Integer`.
    pub value_type: String,
}

impl Comparison {
    fn to_element(&self) -> XmlElement {
        let op = XmlElement::new(self.operator.as_str())
            .with_child(XmlElement::new("FieldRef").with_attr("Name", self.field_name.as_str()));
        if self.operator == Operator::IsNull {
            return op;
        }
        op.with_child(
            XmlElement::new("Value")
                .with_attr("Type", self.value_type.as_str())
                .with_text(self.value.as_str()),
        )
    }
}

/// A `<Where>` filter tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFilter {
    Leaf(Comparison),
    And(Box<QueryFilter>, Box<QueryFilter>),
    Or(Box<QueryFilter>, Box<QueryFilter>),
}

impl QueryFilter {
    #[must_use]
    pub fn compare(
        field_name: impl Into<String>,
        operator: Operator,
        value: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self::Leaf(Comparison {
            field_name: field_name.into(),
            operator,
            value: value.into(),
            value_type: value_type.into(),
        })
    }

    #[must_use]
    pub fn and(self, other: QueryFilter) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    #[must_use]
    pub fn or(self, other: QueryFilter) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    #[must_use]
    pub fn to_element(&self) -> XmlElement {
        match self {
            Self::Leaf(comparison) => comparison.to_element(),
            Self::And(left, right) => XmlElement::new("And")
                .with_child(left.to_element())
                .with_child(right.to_element()),
            Self::Or(left, right) => XmlElement::new("Or")
                .with_child(left.to_element())
                .with_child(right.to_element()),
        }
    }
}

/// Equality filter on a text field. The field name is not validated; the
/// server under test is expected to do that.
#[must_use]
pub fn build_equality_filter(field_name: impl Into<String>, value: impl Into<String>) -> QueryFilter {
    QueryFilter::compare(field_name, Operator::Eq, value, "Text")
}

/// A complete `<Query>` element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CamlQuery {
    pub filter: Option<QueryFilter>,
    /// `(field, ascending)` pairs for `<OrderBy>`.
    pub order_by: Vec<(String, bool)>,
}

impl CamlQuery {
    #[must_use]
    pub fn filtered(filter: QueryFilter) -> Self {
        Self {
            filter: Some(filter),
            order_by: Vec::new(),
        }
    }

    #[must_use]
    pub fn order_by(mut self, field_name: impl Into<String>, ascending: bool) -> Self {
        self.order_by.push((field_name.into(), ascending));
        self
    }

    #[must_use]
    pub fn to_element(&self) -> XmlElement {
        let mut query = XmlElement::new("Query");
        if let Some(filter) = &self.filter {
            query.push_child(XmlElement::new("Where").with_child(filter.to_element()));
        }
        if !self.order_by.is_empty() {
            query.push_child(XmlElement::new("OrderBy").with_children(self.order_by.iter().map(
                |(name, ascending)| {
                    XmlElement::new("FieldRef")
                        .with_attr("Name", name.as_str())
                        .with_attr("Ascending", if *ascending { "TRUE" } else { "FALSE" })
                },
            )));
        }
        query
    }

    /// ## Errors
    /// Returns an error if XML writing fails.
    pub fn to_xml(&self) -> Result<String, quick_xml::Error> {
        self.to_element().to_xml()
    }
}
