//! Batch request types.

use listsws_core::constants::ID_FIELD;

use crate::xml::XmlElement;

/// The `Cmd` of a batch method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    New,
    Update,
    Delete,
}

impl CommandKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the server does after a command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OnError {
    /// Stop at the first failing command.
    Return,
    /// Run every command regardless of earlier failures.
    #[default]
    Continue,
}

impl OnError {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Return => "Return",
            Self::Continue => "Continue",
        }
    }
}

/// One `<Field>` of a batch method.
///
/// Several values for the same field name inside one command, each with a
/// different `property`, update the sub-properties of a compound field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub name: String,
    pub value: String,
    pub property: Option<String>,
}

impl FieldValue {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            property: None,
        }
    }

    /// Sets the sub-property of a compound field this value targets.
    #[must_use]
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    fn to_element(&self) -> XmlElement {
        let mut field = XmlElement::new("Field").with_attr("Name", self.name.as_str());
        if let Some(property) = &self.property {
            field.set_attr("Property", property.as_str());
        }
        field.with_text(self.value.as_str())
    }
}

/// One `<Method>` of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCommand {
    pub kind: CommandKind,
    pub item_id: Option<String>,
    pub fields: Vec<FieldValue>,
}

impl BatchCommand {
    /// First value given for a field name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    fn to_element(&self, method_id: usize) -> XmlElement {
        let mut method = XmlElement::new("Method")
            .with_attr("ID", method_id.to_string())
            .with_attr("Cmd", self.kind.as_str());

        let id_value = match (self.kind, &self.item_id) {
            (_, Some(id)) => Some(id.as_str()),
            (CommandKind::New, None) => Some("New"),
            _ => None,
        };
        if let Some(id) = id_value {
            method.push_child(XmlElement::new("Field").with_attr("Name", ID_FIELD).with_text(id));
        }

        method.with_children(self.fields.iter().map(FieldValue::to_element))
    }
}

/// A complete `<Batch>` for `UpdateListItems`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBatch {
    pub commands: Vec<BatchCommand>,
    pub on_error: OnError,
    pub list_version: Option<u32>,
    pub view_name: Option<String>,
}

impl UpdateBatch {
    #[must_use]
    pub fn with_list_version(mut self, version: u32) -> Self {
        self.list_version = Some(version);
        self
    }

    #[must_use]
    pub fn with_view_name(mut self, view: impl Into<String>) -> Self {
        self.view_name = Some(view.into());
        self
    }

    /// Builds the `<Batch>` element. Methods are numbered from 1.
    #[must_use]
    pub fn to_element(&self) -> XmlElement {
        let mut batch = XmlElement::new("Batch").with_attr("OnError", self.on_error.as_str());
        if let Some(version) = self.list_version {
            batch.set_attr("ListVersion", version.to_string());
        }
        if let Some(view) = &self.view_name {
            batch.set_attr("ViewName", view.as_str());
        }

        batch.with_children(
            self.commands
                .iter()
                .enumerate()
                .map(|(index, command)| command.to_element(index + 1)),
        )
    }

    /// Serializes the batch as an XML fragment.
    ///
    /// ## Errors
    /// Returns an error if XML writing fails.
    pub fn to_xml(&self) -> Result<String, quick_xml::Error> {
        self.to_element().to_xml()
    }
}
