//! `<ViewFields>`: which columns come back.

use crate::xml::XmlElement;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewFieldSpec {
    pub include_properties: bool,
    pub field_names: Vec<String>,
}

impl ViewFieldSpec {
    #[must_use]
    pub fn to_element(&self) -> XmlElement {
        let mut view_fields = XmlElement::new("ViewFields");
        if self.include_properties {
            view_fields.set_attr("Properties", "True");
        }
        view_fields.with_children(
            self.field_names
                .iter()
                .map(|name| XmlElement::new("FieldRef").with_attr("Name", name.as_str())),
        )
    }

    /// ## Errors
    /// Returns an error if XML writing fails.
    pub fn to_xml(&self) -> Result<String, quick_xml::Error> {
        self.to_element().to_xml()
    }
}

#[must_use]
pub fn build_view_fields<I, S>(include_properties: bool, field_names: I) -> ViewFieldSpec
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ViewFieldSpec {
        include_properties,
        field_names: field_names.into_iter().map(Into::into).collect(),
    }
}
