use crate::XmlElement;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

pub trait ToXml {
    /// Renders the element alone, without a declaration.
    fn to_xml(&self) -> String;

    /// Renders a complete document: declaration, newline, element.
    fn to_document(&self) -> String {
        format!("{}\n{}\n", XML_DECLARATION, self.to_xml())
    }
}

impl ToXml for XmlElement {
    fn to_xml(&self) -> String {
        let mut xml = String::new();
        write_element(self, &mut xml);
        xml
    }
}

fn write_element(element: &XmlElement, xml: &mut String) {
    // start tag
    xml.push('<');
    xml.push_str(&element.name);

    for (k, v) in element.attributes() {
        xml.push(' ');
        xml.push_str(k);
        xml.push_str("=\"");
        escape_attr(v, xml);
        xml.push('"');
    }

    if element.text.is_none() && !element.has_children() {
        xml.push_str("/>");
        return;
    }

    xml.push('>');
    if let Some(text) = &element.text {
        escape_text(text, xml);
    }
    for kid in element.children() {
        write_element(kid, xml);
    }

    // end tag
    xml.push_str("</");
    xml.push_str(&element.name);
    xml.push('>');
}

fn escape_text(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
