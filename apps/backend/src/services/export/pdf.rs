//! Paginated PDF export renderer built on `lopdf`.
//!
//! One A4 page per `LINES_PER_PAGE` lines, Helvetica with WinAnsi encoding
//! so accented Portuguese text renders.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use vocab_core::types::Word;

use crate::error::{ApiError, Result};

use super::{word_lines, ExportOptions};

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN_LEFT: i64 = 50;
const TOP_BASELINE: i64 = 790;
const LEADING: i64 = 14;
const FONT_SIZE: i64 = 11;
const LINES_PER_PAGE: usize = 50;

/// Render the word list as a paginated PDF document.
pub fn render_pdf(words: &[Word], options: &ExportOptions) -> Result<Vec<u8>> {
    let mut lines = vec!["Vocabulary List".to_string(), String::new()];
    for word in words {
        lines.extend(word_lines(word, options));
        lines.push(String::new());
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for chunk in lines.chunks(LINES_PER_PAGE) {
        let content = page_content(chunk);
        let encoded = content
            .encode()
            .map_err(|e| ApiError::Export(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ApiError::Export(e.to_string()))?;
    Ok(buffer)
}

/// Text operations for one page of lines.
fn page_content(lines: &[String]) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new("Td", vec![MARGIN_LEFT.into(), TOP_BASELINE.into()]),
    ];

    for line in lines {
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_winansi(line), StringFormat::Literal)],
        ));
        operations.push(Operation::new("T*", vec![]));
    }

    operations.push(Operation::new("ET", vec![]));
    Content { operations }
}

/// Encode a line for the WinAnsi (latin-1 superset) font encoding.
///
/// Code points above U+00FF have no WinAnsi slot and degrade to '?'.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}
