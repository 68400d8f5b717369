//! Content-type field definitions for `CreateContentType` and
//! `UpdateContentType`.

use uuid::Uuid;

use crate::xml::XmlElement;

/// A site column referenced by a content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReference {
    pub id: Option<Uuid>,
    pub name: String,
    pub display_name: Option<String>,
}

impl FieldReference {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    fn to_element(&self, local_name: &str) -> XmlElement {
        let mut field = XmlElement::new(local_name);
        if let Some(id) = self.id {
            field.set_attr("ID", braced(id));
        }
        field.set_attr("Name", self.name.as_str());
        if let Some(display_name) = &self.display_name {
            field.set_attr("DisplayName", display_name.as_str());
        }
        field
    }
}

/// Field list of a content-type request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentTypeFields {
    pub fields: Vec<FieldReference>,
}

impl ContentTypeFields {
    #[must_use]
    pub fn new(fields: Vec<FieldReference>) -> Self {
        Self { fields }
    }

    /// `<FieldRefs>` form used by `CreateContentType`.
    #[must_use]
    pub fn to_field_refs(&self) -> XmlElement {
        XmlElement::new("FieldRefs").with_children(
            self.fields
                .iter()
                .map(|field| field.to_element("FieldRef")),
        )
    }

    /// `<Fields><Method ID=".."><Field/></Method></Fields>` form used by the
    /// `newFields`, `updateFields` and `deleteFields` of `UpdateContentType`.
    /// Methods are numbered from 1.
    #[must_use]
    pub fn to_method_fields(&self) -> XmlElement {
        XmlElement::new("Fields").with_children(self.fields.iter().enumerate().map(
            |(index, field)| {
                XmlElement::new("Method")
                    .with_attr("ID", (index + 1).to_string())
                    .with_child(field.to_element("Field"))
            },
        ))
    }
}

/// Content-type fields referencing the given field names, in order.
#[must_use]
pub fn build_content_type_fields<I, S>(names: I) -> ContentTypeFields
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ContentTypeFields::new(names.into_iter().map(FieldReference::named).collect())
}

/// GUID in the braced form the service uses.
#[must_use]
pub fn braced(id: Uuid) -> String {
    format!("{{{id}}}")
}
