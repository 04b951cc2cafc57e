//! Describe the framed messages stored in a file

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::io::Cursor;
use std::path::Path;
use yar_core::CodecConfig;
use yar_transport::{Codec, Header, MessageReader, codec_for};

/// Print a description of every message in `path` to stdout
pub fn run(path: &Path, validate: bool, config: &CodecConfig) -> Result<()> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    print!("{}", describe(&data, validate, config)?);
    Ok(())
}

/// Render every header/body pair found in `data`
pub fn describe(data: &[u8], validate: bool, config: &CodecConfig) -> Result<String> {
    let mut reader = MessageReader::with_config(Cursor::new(data), config);
    let mut report = String::new();
    let mut index = 0;

    while (reader.get_ref().position() as usize) < data.len() {
        let header = reader
            .read_header()
            .with_context(|| format!("Message {index}: truncated header"))?;
        if validate {
            header
                .validate()
                .with_context(|| format!("Message {index}: invalid header"))?;
        }
        let body = reader
            .read_body(&header)
            .with_context(|| format!("Message {index}: unreadable body"))?;

        describe_header(&mut report, index, &header);
        describe_body(&mut report, &header, &body)?;
        index += 1;
    }

    if index == 0 {
        anyhow::bail!("No messages found");
    }
    Ok(report)
}

fn describe_header(report: &mut String, index: usize, header: &Header) {
    // Writing into a String cannot fail
    let _ = writeln!(report, "message #{index}");
    let _ = writeln!(report, "  id:        {}", header.id);
    let _ = writeln!(report, "  version:   {}", header.version);
    let _ = writeln!(report, "  magic:     0x{:08X}", header.magic_num);
    let _ = writeln!(report, "  reserved:  {}", header.reserved);
    let _ = writeln!(report, "  provider:  {}", fixed_field(&header.provider));
    let _ = writeln!(report, "  token:     {}", fixed_field(&header.token));
    let _ = writeln!(
        report,
        "  body_len:  {} ({} body bytes)",
        header.body_len,
        header.payload_len()
    );
    let _ = writeln!(report, "  packager:  {}", header.pkg_name);
}

fn describe_body(report: &mut String, header: &Header, body: &[u8]) -> Result<()> {
    match codec_for(&header.pkg_name) {
        Ok(codec) => {
            let value: serde_json::Value = codec.decode(body)?;
            let pretty = serde_json::to_string_pretty(&value)?;
            let _ = writeln!(report, "  body:");
            for line in pretty.lines() {
                let _ = writeln!(report, "    {line}");
            }
        }
        Err(_) => {
            let _ = writeln!(report, "  body:      {} (hex, not decodable)", hex::encode(body));
        }
    }
    Ok(())
}

/// Printable text when the field is ASCII, hex otherwise
fn fixed_field(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    let text = &field[..end];
    if text.is_empty() {
        "(empty)".to_string()
    } else if text.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        String::from_utf8_lossy(text).into_owned()
    } else {
        format!("0x{}", hex::encode(field))
    }
}
