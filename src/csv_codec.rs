//! CSV import/export of inventory records.
//!
//! Writing goes through the `csv` crate with "quote only when necessary" rules.
//! Reading is a forgiving single-pass tokenizer: short rows are padded with empty
//! fields, blank lines are skipped, and quoted fields may span line breaks when the quote opens the field.

use crate::item::{InventoryItem, ItemField};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("writing CSV record")]
    Write(#[from] csv::Error),
    #[error("flushing CSV output")]
    Flush(#[source] std::io::Error),
    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Ordered set of columns used for both the header and each record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: Vec<ItemField>,
}

impl ColumnLayout {
    /// `Coordinate, Code, [Description,] Carton, Single, Date, Notes`
    pub fn new(include_description: bool) -> Self {
        let columns = [
            ItemField::Coordinate,
            ItemField::Code,
            ItemField::Description,
            ItemField::Carton,
            ItemField::Single,
            ItemField::Date,
            ItemField::Notes,
        ]
        .into_iter()
        .filter(|f| include_description || *f != ItemField::Description)
        .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[ItemField] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(|f| f.csv_header()).collect()
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Serialize `items` as a header line plus one line per item, joined by `\n`.
/// The output has no trailing newline.
pub fn encode(items: &[InventoryItem], layout: &ColumnLayout) -> Result<String, CodecError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(layout.header())?;
    for item in items {
        writer.write_record(layout.columns().iter().map(|f| item.field(*f)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CodecError::Flush(e.into_error()))?;
    let mut text = String::from_utf8(bytes)?;
    // The writer terminates every record; lines are joined instead.
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Parse CSV text into items. The first non-blank record is the header and is discarded.
/// An empty result means the text had no data rows.
pub fn decode(text: &str, layout: &ColumnLayout) -> Vec<InventoryItem> {
    split_records(text)
        .into_iter()
        .skip(1)
        .map(|record| {
            let mut fields = parse_line(record).into_iter();
            let mut item = InventoryItem::default();
            for column in layout.columns() {
                *item.field_mut(*column) = fields.next().unwrap_or_default();
            }
            item
        })
        .collect()
}

/// Split a single record into fields.
///
/// A quote toggles quoted mode, `""` inside quotes is a literal quote, and a comma
/// outside quotes ends the field. A record with N unquoted commas yields N+1 fields.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

/// Break text into non-blank records on `\n` / `\r\n`, keeping line breaks that sit
/// inside a quoted field. A quote only opens such a field when it is the first
/// character of the field; a stray quote elsewhere never spans past its own line.
fn split_records(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut records = Vec::new();
    let mut start = 0usize;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes {
            if b == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            }
            field_start = false;
        } else {
            match b {
                b'"' if field_start => {
                    in_quotes = true;
                    field_start = false;
                }
                b',' => field_start = true,
                b'\n' => {
                    push_record(&mut records, &text[start..i]);
                    start = i + 1;
                    field_start = true;
                }
                _ => field_start = false,
            }
        }
        i += 1;
    }
    push_record(&mut records, &text[start..]);

    records
}

fn push_record<'a>(records: &mut Vec<&'a str>, raw: &'a str) {
    let record = raw.strip_suffix('\r').unwrap_or(raw);
    if !record.trim().is_empty() {
        records.push(record);
    }
}
