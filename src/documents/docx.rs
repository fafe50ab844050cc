use crate::types::{AppError, AppResult};
use docx_rust::document::{BodyContent, Paragraph, ParagraphContent, Run, RunContent};
use docx_rust::DocxFile;
use std::io::Cursor;

/// Extract body paragraphs joined by `\n`.
///
/// Empty paragraphs become blank lines. Tables, headers, footers and images
/// are ignored.
pub fn extract_docx_text(data: &[u8]) -> AppResult<String> {
    let file = DocxFile::from_reader(Cursor::new(data))
        .map_err(|e| AppError::Extraction(format!("invalid DOCX archive: {}", e)))?;
    let docx = file
        .parse()
        .map_err(|e| AppError::Extraction(format!("invalid DOCX document: {}", e)))?;

    let paragraphs = docx.document.body.content.iter().filter_map(|content| match content {
        BodyContent::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
        _ => None,
    });

    Ok(join_paragraphs(paragraphs))
}

/// Text of one paragraph, including hyperlinks and content controls.
/// Tabs become `\t`, line breaks become `\n`.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for item in &paragraph.content {
        match item {
            ParagraphContent::Run(run) => push_run_text(&mut text, run),
            ParagraphContent::Link(link) => {
                if let Some(run) = &link.content {
                    push_run_text(&mut text, run);
                }
                if let Some(bidi) = &link.bidirectional_embedding {
                    for t in bidi.iter_text() {
                        text.push_str(t);
                    }
                }
            }
            ParagraphContent::SDT(sdt) => {
                for t in sdt.iter_text() {
                    text.push_str(t);
                }
            }
            _ => {}
        }
    }
    text
}

fn push_run_text(text: &mut String, run: &Run) {
    for content in &run.content {
        match content {
            RunContent::Text(t) => text.push_str(&t.text),
            RunContent::Tab(_) => text.push('\t'),
            RunContent::Break(_) | RunContent::CarriageReturn(_) => text.push('\n'),
            _ => {}
        }
    }
}

pub(crate) fn join_paragraphs<I>(paragraphs: I) -> String
where
    I: IntoIterator<Item = String>,
{
    paragraphs.into_iter().collect::<Vec<_>>().join("\n")
}
