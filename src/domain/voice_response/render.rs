//! XML rendering of voice response documents

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

use super::document::{Dial, DialNoun, Verb, VoiceResponse};
use crate::domain::shared::{DomainError, Result};

/// Render a response as `<?xml ...?><Response>...</Response>` without indentation
pub fn render(response: &VoiceResponse) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(&mut writer, Event::Start(BytesStart::new("Response")))?;

    for verb in response.verbs() {
        match verb {
            Verb::Say(say) => write_text_element(&mut writer, "Say", &say.text)?,
            Verb::Dial(dial) => write_dial(&mut writer, dial)?,
        }
    }

    write(&mut writer, Event::End(BytesEnd::new("Response")))?;

    let xml = writer.into_inner().into_inner();
    String::from_utf8(xml).map_err(|e| DomainError::Rendering(e.to_string()))
}

fn write_dial(writer: &mut Writer<Cursor<Vec<u8>>>, dial: &Dial) -> Result<()> {
    write(writer, Event::Start(BytesStart::new("Dial")))?;
    for noun in &dial.nouns {
        match noun {
            DialNoun::Client(name) => write_text_element(writer, "Client", name.as_str())?,
        }
    }
    write(writer, Event::End(BytesEnd::new("Dial")))
}

// Always emits an open/close pair, even for empty text.
fn write_text_element(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> Result<()> {
    if let Some(c) = text.chars().find(|&c| !is_xml_char(c)) {
        return Err(DomainError::Rendering(format!(
            "invalid XML character U+{:04X} in <{}>",
            c as u32, tag
        )));
    }

    write(writer, Event::Start(BytesStart::new(tag)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(tag)))
}

/// XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn write(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| DomainError::Rendering(e.to_string()))
}
