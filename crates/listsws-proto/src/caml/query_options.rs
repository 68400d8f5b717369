//! `<QueryOptions>` for `GetListItems` and `GetListItemChangesSinceToken`.

use crate::xml::XmlElement;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryOptions {
    pub include_mandatory_columns: bool,
    pub date_in_utc: bool,
    /// Return items from subfolders too.
    pub recursive_scope: bool,
    pub folder: Option<String>,
}

impl QueryOptions {
    #[must_use]
    pub fn to_element(&self) -> XmlElement {
        let flag = |name: &str, value: bool| {
            XmlElement::new(name).with_text(if value { "TRUE" } else { "FALSE" })
        };

        let mut options = XmlElement::new("QueryOptions")
            .with_child(flag("IncludeMandatoryColumns", self.include_mandatory_columns))
            .with_child(flag("DateInUtc", self.date_in_utc));
        if self.recursive_scope {
            options.push_child(XmlElement::new("ViewAttributes").with_attr("Scope", "Recursive"));
        }
        if let Some(folder) = &self.folder {
            options.push_child(XmlElement::new("Folder").with_text(folder.as_str()));
        }
        options
    }

    /// ## Errors
    /// Returns an error if writing fails.
    pub fn to_xml(&self) -> Result<String, quick_xml::Error> {
        self.to_element().to_xml()
    }
}
