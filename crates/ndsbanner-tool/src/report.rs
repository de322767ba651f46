//! XML reports
//!
//! Two documents are produced:
//!
//! - the failure log of an edit run (`<ErrorLog>`), one `<File>` per failed ROM
//! - the extract listing (`<NDSRomList>`), one `<Game>` per ROM with a child
//!   element per language slot
//!
//! Both are UTF-8, pretty-printed with two-space indentation.

use crate::batch::FailureRecord;
use crate::error::ReportError;
use crate::extract::{ExtractStatus, ExtractedRom};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;
use tracing::info;

type Result<T> = std::result::Result<T, ReportError>;

fn xml_writer() -> Result<Writer<Vec<u8>>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    Ok(writer)
}

fn text_element<W: Write>(
    writer: &mut Writer<W>,
    start: BytesStart<'_>,
    text: &str,
) -> Result<()> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(&xml_text(text))))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}

/// Drop characters XML 1.0 does not allow, such as C0 controls
fn xml_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

const fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | ' '..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

fn finish(writer: Writer<Vec<u8>>) -> Vec<u8> {
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    bytes
}

/// Serialize the failure log of an edit run
pub fn error_log_xml(failures: &[&FailureRecord]) -> Result<Vec<u8>> {
    let mut writer = xml_writer()?;
    writer.write_event(Event::Start(BytesStart::new("ErrorLog")))?;

    for record in failures {
        let name = xml_text(&record.file_name);
        let file = BytesStart::new("File").with_attributes([("name", name.as_ref())]);
        writer.write_event(Event::Start(file))?;

        let reason = BytesStart::new("Reason").with_attributes([("code", record.reason_code)]);
        text_element(&mut writer, reason, &record.message)?;
        text_element(
            &mut writer,
            BytesStart::new("IntendedBanner"),
            &record.intended,
        )?;
        if let Some(original) = &record.original {
            text_element(&mut writer, BytesStart::new("OriginalBanner"), original)?;
        }

        writer.write_event(Event::End(BytesEnd::new("File")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("ErrorLog")))?;
    Ok(finish(writer))
}

/// Serialize the extract listing
pub fn banner_list_xml(roms: &[ExtractedRom]) -> Result<Vec<u8>> {
    let mut writer = xml_writer()?;
    writer.write_event(Event::Start(BytesStart::new("NDSRomList")))?;

    for rom in roms {
        let mut game = BytesStart::new("Game");
        game.push_attribute(("filename", xml_text(&rom.file_name).as_ref()));

        match &rom.status {
            ExtractStatus::Banner(banner) => {
                let version = banner.layout.version().to_string();
                let checksum = if banner.checksum_valid { "ok" } else { "mismatch" };
                game.push_attribute(("version", version.as_str()));
                game.push_attribute(("checksum", checksum));
                writer.write_event(Event::Start(game))?;
                for (language, title) in &banner.titles {
                    text_element(&mut writer, BytesStart::new(language.name()), title)?;
                }
            }
            ExtractStatus::NoBanner => {
                writer.write_event(Event::Start(game))?;
                text_element(&mut writer, BytesStart::new("Error"), "No Banner Data")?;
            }
            ExtractStatus::Failed(message) => {
                writer.write_event(Event::Start(game))?;
                text_element(&mut writer, BytesStart::new("Error"), message)?;
            }
        }

        writer.write_event(Event::End(BytesEnd::new("Game")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("NDSRomList")))?;
    Ok(finish(writer))
}

/// Write a serialized report to `path`
pub fn save(path: &Path, document: &[u8]) -> Result<()> {
    std::fs::write(path, document).map_err(|source| ReportError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote report {}", path.display());
    Ok(())
}
