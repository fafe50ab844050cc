use crate::types::{AppError, AppResult};
use lopdf::Document;
use tracing::warn;

/// Extract the text layer of every page, in page order.
///
/// Pages without text (scanned images) contribute nothing. A page whose
/// fonts cannot be decoded is logged and skipped. No separator is inserted
/// between pages.
pub fn extract_pdf_text(data: &[u8]) -> AppResult<String> {
    let doc = Document::load_mem(data)
        .map_err(|e| AppError::Extraction(format!("invalid PDF: {}", e)))?;

    // get_pages is keyed by page number, so iteration is already in page order.
    let mut pages = Vec::new();
    for page_num in doc.get_pages().keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(text) => pages.push(text),
            Err(e) => warn!(page = page_num, error = %e, "Skipping page whose text could not be decoded"),
        }
    }

    Ok(join_pages(pages))
}

pub(crate) fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    pages
        .into_iter()
        .filter(|page| !page.is_empty())
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    pub(crate) enum TestPage<'a> {
        Text(&'a str),
        Blank,
        /// Type0 font with Identity-H encoding and no ToUnicode map.
        Undecodable,
    }

    /// Build a PDF with one page per entry; `None` is a page with no text.
    pub(crate) fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let pages: Vec<_> = pages
            .iter()
            .map(|page| match page {
                Some(text) => TestPage::Text(text),
                None => TestPage::Blank,
            })
            .collect();
        build_pdf_pages(&pages)
    }

    pub(crate) fn build_pdf_pages(pages: &[TestPage<'_>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids = Vec::new();
        for page in pages {
            let operations = match page {
                TestPage::Text(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                TestPage::Blank | TestPage::Undecodable => vec![],
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            };
            if let TestPage::Undecodable = page {
                let cid_font_id = doc.add_object(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type0",
                    "BaseFont" => "NotoSansCJK",
                    "Encoding" => "Identity-H",
                });
                page_dict.set(
                    "Resources",
                    dictionary! {
                        "Font" => dictionary! {
                            "F1" => font_id,
                            "F2" => cid_font_id,
                        },
                    },
                );
            }
            let page_id = doc.add_object(page_dict);
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_join_pages_has_no_separator() {
        let pages = vec!["end.".to_string(), "Next".to_string()];
        assert_eq!(join_pages(pages), "end.Next");
    }

    #[test]
    fn test_join_pages_skips_empty_pages() {
        let pages = vec![
            "First".to_string(),
            String::new(),
            "Third".to_string(),
            String::new(),
        ];
        assert_eq!(join_pages(pages), "FirstThird");
        assert_eq!(join_pages(Vec::<String>::new()), "");
    }

    #[test]
    fn test_extracts_pages_in_order() {
        let pdf = build_pdf(&[Some("Alpha page"), Some("Omega page")]);
        let text = extract_pdf_text(&pdf).unwrap();

        let alpha = text.find("Alpha page").unwrap();
        let omega = text.find("Omega page").unwrap();
        assert!(alpha < omega);
    }

    #[test]
    fn test_textless_page_contributes_nothing() {
        let with_blank = build_pdf(&[Some("Alpha page"), None, Some("Omega page")]);
        let without_blank = build_pdf(&[Some("Alpha page"), Some("Omega page")]);

        assert_eq!(
            extract_pdf_text(&with_blank).unwrap(),
            extract_pdf_text(&without_blank).unwrap()
        );
    }

    #[test]
    fn test_pdf_without_text_is_empty() {
        let pdf = build_pdf(&[None, None]);
        assert_eq!(extract_pdf_text(&pdf).unwrap(), "");
    }

    #[test]
    fn test_exact_output_ends_each_page_with_newline() {
        let pdf = build_pdf(&[Some("end."), None, Some("Next")]);
        assert_eq!(extract_pdf_text(&pdf).unwrap(), "end.\nNext\n");
    }

    #[test]
    fn test_undecodable_page_is_skipped() {
        let pdf = build_pdf_pages(&[
            TestPage::Text("Alpha page"),
            TestPage::Undecodable,
            TestPage::Text("Omega page"),
        ]);

        assert_eq!(extract_pdf_text(&pdf).unwrap(), "Alpha page\nOmega page\n");
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = extract_pdf_text(b"%PDF-1.4 truncated").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
