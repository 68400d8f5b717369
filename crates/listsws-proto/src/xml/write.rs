//! [`XmlElement`] serialization.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::tree::XmlElement;

impl XmlElement {
    /// Serializes the element as an XML fragment.
    ///
    /// ## Errors
    /// Returns an error if XML writing fails.
    pub fn to_xml(&self) -> Result<String, quick_xml::Error> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        into_string(writer)
    }

    /// Serializes the element as a complete document with an XML declaration.
    ///
    /// ## Errors
    /// Returns an error if XML writing fails.
    pub fn to_document(&self) -> Result<String, quick_xml::Error> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        self.write_to(&mut writer)?;
        into_string(writer)
    }

    /// Writes the element and its subtree.
    ///
    /// ## Errors
    /// Returns an error if XML writing fails.
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<(), quick_xml::Error> {
        let name = self.qualified_name();
        let mut start = BytesStart::new(name.as_str());
        for (key, value) in self.attributes() {
            start.push_attribute((key, value));
        }

        if self.children().is_empty() && self.text().is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if !self.text().is_empty() {
            writer.write_event(Event::Text(BytesText::new(self.text())))?;
        }
        for child in self.children() {
            child.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;

        Ok(())
    }
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String, quick_xml::Error> {
    String::from_utf8(writer.into_inner()).map_err(|e| {
        tracing::error!("Generated invalid UTF-8 in XML output: {}", e);
        quick_xml::Error::Io(std::sync::Arc::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Invalid UTF-8 in XML output",
        )))
    })
}
