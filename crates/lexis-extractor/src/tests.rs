//! Integration tests for the TextExtractor

#[cfg(test)]
mod tests {
    use crate::{ExtractionError, TextExtractor};
    use docx_rs::{BreakType, Docx, Hyperlink, HyperlinkType, Paragraph, Run};
    use lexis_domain::DocumentFormat;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            let paragraph = if text.is_empty() {
                Paragraph::new()
            } else {
                Paragraph::new().add_run(Run::new().add_text(*text))
            };
            docx = docx.add_paragraph(paragraph);
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).expect("pack docx");
        buffer.into_inner()
    }

    /// One page per entry; `None` produces a page with no text operators
    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = lopdf::Document::with_version("1.5");
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
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("encode content"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).expect("save pdf");
        buffer
    }

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_docx_paragraphs_each_followed_by_newline() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "essay.docx",
            &build_docx(&["First paragraph.", "", "Third paragraph."]),
        );

        let extracted = TextExtractor::new().extract(&path).unwrap();
        assert_eq!(extracted.text, "First paragraph.\n\nThird paragraph.\n");
        assert_eq!(extracted.units, 3);
        assert_eq!(extracted.document.format(), &DocumentFormat::Docx);
    }

    #[test]
    fn test_docx_multiple_runs_concatenate() {
        let mut docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Hello, "))
                .add_run(Run::new().add_text("world")),
        );
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text("Bye")));
        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).unwrap();

        let extracted = TextExtractor::new()
            .extract_bytes("memo.docx", &DocumentFormat::Docx, &buffer.into_inner())
            .unwrap();
        assert_eq!(extracted.text, "Hello, world\nBye\n");
    }

    #[test]
    fn test_docx_extension_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "LOUD.DOCX", &build_docx(&["Quiet text"]));

        let extracted = TextExtractor::new().extract(&path).unwrap();
        assert_eq!(extracted.text, "Quiet text\n");
    }

    #[test]
    fn test_pdf_skips_empty_pages() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "paper.pdf",
            &build_pdf(&[Some("First page"), None, Some("Third page")]),
        );

        let extracted = TextExtractor::new().extract(&path).unwrap();
        assert!(extracted.text.contains("First page"));
        assert!(extracted.text.contains("Third page"));
        assert!(!extracted.text.contains("\n\n"));
        assert!(extracted.text.ends_with('\n'));
        assert_eq!(extracted.text.lines().count(), 2);
        assert_eq!(extracted.units, 2);
    }

    #[test]
    fn test_pdf_without_text_is_empty() {
        let extracted = TextExtractor::new()
            .extract_bytes("blank.pdf", &DocumentFormat::Pdf, &build_pdf(&[None, None]))
            .unwrap();
        assert_eq!(extracted.text, "");
        assert_eq!(extracted.units, 0);
        assert!(extracted.is_blank());
    }

    #[test]
    fn test_missing_file_is_reported_first() {
        let result = TextExtractor::new().extract("/definitely/not/here/report.txt");
        match result {
            Err(ExtractionError::FileNotFound(path)) => {
                assert_eq!(path, Path::new("/definitely/not/here/report.txt"));
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_message_names_path() {
        let err = TextExtractor::new().extract("nowhere.pdf").unwrap_err();
        assert!(err.to_string().contains("nowhere.pdf"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "report.txt", b"plain text");

        let err = TextExtractor::new().extract(&path).unwrap_err();
        assert!(matches!(&err, ExtractionError::UnsupportedFormat(ext) if ext == ".txt"));
        assert!(err.to_string().contains(".txt"));
    }

    #[test]
    fn test_docx_tabs_breaks_and_hyperlinks() {
        let run = Run::new()
            .add_text("a")
            .add_tab()
            .add_text("b")
            .add_break(BreakType::TextWrapping)
            .add_text("c");
        let link = Hyperlink::new("https://example.com", HyperlinkType::External)
            .add_run(Run::new().add_text("link"));
        let docx = Docx::new().add_paragraph(Paragraph::new().add_run(run).add_hyperlink(link));

        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).unwrap();

        let extracted = TextExtractor::new()
            .extract_bytes("links.docx", &DocumentFormat::Docx, &buffer.into_inner())
            .unwrap();
        assert_eq!(extracted.text, "a\tb\nclink\n");
    }

    #[test]
    fn test_encrypted_pdf_is_extraction_failure() {
        let mut doc = lopdf::Document::load_mem(&build_pdf(&[Some("Secret")])).unwrap();
        let encrypt_id = doc.add_object(dictionary! {
            "Filter" => "Standard",
            "V" => 1,
            "R" => 2,
            "O" => Object::string_literal(vec![0u8; 32]),
            "U" => Object::string_literal(vec![0u8; 32]),
            "P" => -4,
        });
        doc.trailer.set("Encrypt", encrypt_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();

        let err = TextExtractor::new()
            .extract_bytes("locked.pdf", &DocumentFormat::Pdf, &bytes)
            .unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::ExtractionFailure { format: "PDF", .. }
        ));
    }

    #[test]
    fn test_corrupt_pdf_is_extraction_failure() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "broken.pdf", b"this is not a pdf");

        let err = TextExtractor::new().extract(&path).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::ExtractionFailure { format: "PDF", .. }
        ));
    }

    #[test]
    fn test_corrupt_docx_is_extraction_failure() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "broken.docx", b"not a zip archive");

        let err = TextExtractor::new().extract(&path).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::ExtractionFailure { format: "DOCX", .. }
        ));
        assert!(err.to_string().starts_with("Error reading DOCX"));
    }
}
