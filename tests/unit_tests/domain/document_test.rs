use docscreen::domain::{Document, DocumentFormat, ExtractedText};

#[test]
fn given_pdf_extension_when_detecting_format_then_returns_pdf() {
    assert_eq!(DocumentFormat::from_filename("report.pdf"), DocumentFormat::Pdf);
}

#[test]
fn given_uppercase_extension_when_detecting_format_then_matches_case_insensitively() {
    assert_eq!(DocumentFormat::from_filename("REPORT.PDF"), DocumentFormat::Pdf);
    assert_eq!(DocumentFormat::from_filename("Letter.DocX"), DocumentFormat::Docx);
}

#[test]
fn given_doc_or_docx_extension_when_detecting_format_then_returns_docx() {
    assert_eq!(DocumentFormat::from_filename("old.doc"), DocumentFormat::Docx);
    assert_eq!(DocumentFormat::from_filename("new.docx"), DocumentFormat::Docx);
}

#[test]
fn given_odt_extension_when_detecting_format_then_returns_odt() {
    assert_eq!(DocumentFormat::from_filename("essay.odt"), DocumentFormat::Odt);
}

#[test]
fn given_unknown_or_missing_extension_when_detecting_format_then_returns_unsupported() {
    assert_eq!(DocumentFormat::from_filename("notes.txt"), DocumentFormat::Unsupported);
    assert_eq!(DocumentFormat::from_filename("README"), DocumentFormat::Unsupported);
    assert!(!DocumentFormat::Unsupported.is_supported());
}

#[test]
fn given_office_mime_types_when_detecting_format_then_maps_each_family() {
    assert_eq!(DocumentFormat::from_mime("application/pdf"), DocumentFormat::Pdf);
    assert_eq!(
        DocumentFormat::from_mime(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ),
        DocumentFormat::Docx
    );
    assert_eq!(
        DocumentFormat::from_mime("application/vnd.oasis.opendocument.text"),
        DocumentFormat::Odt
    );
    assert_eq!(
        DocumentFormat::from_mime("application/octet-stream"),
        DocumentFormat::Unsupported
    );
}

#[test]
fn given_format_when_rendering_tag_then_uses_lowercase_name() {
    assert_eq!(DocumentFormat::Docx.as_str(), "docx");
    assert_eq!(DocumentFormat::Unsupported.to_string(), "unsupported");
}

#[test]
fn given_upload_when_building_document_then_infers_format_from_filename() {
    let document = Document::from_upload("thesis.odt".to_string(), b"bytes".to_vec());

    assert_eq!(document.format, DocumentFormat::Odt);
    assert_eq!(document.size_bytes(), 5);
}

#[test]
fn given_two_documents_when_created_then_ids_differ() {
    let a = Document::new("a.pdf".to_string(), DocumentFormat::Pdf, Vec::new());
    let b = Document::new("a.pdf".to_string(), DocumentFormat::Pdf, Vec::new());

    assert_ne!(a.id, b.id);
}

#[test]
fn given_blank_text_when_wrapping_extraction_then_success_flag_is_false() {
    assert!(!ExtractedText::new("  \n ".to_string()).success);
    assert!(ExtractedText::new("Some text.".to_string()).success);
}
