//! XML export of all listings.

use crate::server::model::animal::AnimalListing;

/// Content type of [`render_animals_xml`] output.
pub const XML_CONTENT_TYPE: &str = "application/xml; charset=UTF-8";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Escape the five XML reserved characters.
pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Append `    <tag>value</tag>` on its own line; `value` is escaped.
fn push_element(xml: &mut String, tag: &str, value: &str) {
    xml.push_str("    <");
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

/// Render listings as an `<animals>` document in the order given.
///
/// Each field is one element on its own line; a missing gender renders as an empty
/// element.
pub fn render_animals_xml(listings: &[AnimalListing]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<animals>\n");

    for listing in listings {
        let animal = &listing.animal;

        xml.push_str("  <animal>\n");
        push_element(&mut xml, "id", &animal.id.to_string());
        push_element(&mut xml, "name", &animal.name);
        push_element(&mut xml, "category", &listing.category.name);
        push_element(
            &mut xml,
            "gender",
            animal.gender.as_deref().unwrap_or_default(),
        );
        push_element(&mut xml, "age", &animal.age.to_string());
        push_element(&mut xml, "owner", &listing.owner.username);
        push_element(
            &mut xml,
            "timestamp",
            &animal.created_at.format(TIMESTAMP_FORMAT).to_string(),
        );
        xml.push_str("  </animal>\n");
    }

    xml.push_str("</animals>\n");

    xml
}
