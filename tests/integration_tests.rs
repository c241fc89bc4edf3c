// Integration tests for splitPagesPDF.
//
// No fixture files are needed: source documents are generated in memory with
// lopdf, with a recognisable text marker on every page so tests can verify
// which pages ended up where.

use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lopdf::{content::Content, content::Operation, Dictionary, Document, Object, Stream};
use splitpagespdf::{
    base_name, merge_bytes, package_for_download, DownloadBundle, PageDocument, PdfSplitter,
    SplitArtifact, SplitError, SplitMode, SplitterConfig,
};

// ── Test document builder ─────────────────────────────────────────────────────

/// Build a PDF whose page `i` carries the text marker `"<label> <i>"`.
fn build_test_pdf(num_pages: u32, label: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::new();

    for i in 1..=num_pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new(
                    "Tf",
                    vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
                ),
                Operation::new("Td", vec![Object::Integer(100), Object::Integer(700)]),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        format!("{label} {i}").into_bytes(),
                        lopdf::StringFormat::Literal,
                    )],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]);
        page_ids.push(doc.add_object(page));
    }

    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(num_pages as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]);
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Reload a serialized PDF and return each page's content text, in page order.
fn page_markers(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let content = doc.get_page_content(page_id).unwrap();
            String::from_utf8_lossy(&content).into_owned()
        })
        .collect()
}

fn reload_page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes).unwrap().get_pages().len()
}

// ── SplitterConfig ────────────────────────────────────────────────────────────

#[test]
fn default_config_is_permissive() {
    let cfg = SplitterConfig::default();
    assert!(!cfg.strict_ranges);
    assert!(!cfg.save_to_disk);
    assert!(cfg.output_directory.is_none());
    assert!(cfg.cancel_flag.is_none());
    assert!(!cfg.is_cancelled());
}

#[test]
fn custom_config_round_trips() {
    let cfg = SplitterConfig {
        strict_ranges: true,
        save_to_disk: true,
        output_directory: Some("./out".into()),
        cancel_flag: Some(Arc::new(AtomicBool::new(false))),
    };
    assert!(cfg.strict_ranges);
    assert!(cfg.save_to_disk);
    assert_eq!(cfg.output_directory.as_deref(), Some("./out"));
    assert!(!cfg.is_cancelled());
}

// ── SplitError display ────────────────────────────────────────────────────────

#[test]
fn error_display_is_non_empty() {
    let errors: &[SplitError] = &[
        SplitError::SourceLoad("test".into()),
        SplitError::EmptyRange,
        SplitError::InvalidRange("test".into()),
        SplitError::PageCopy {
            page: 3,
            reason: "reason".into(),
        },
        SplitError::Archive("test".into()),
        SplitError::Cancelled,
        SplitError::Merge("test".into()),
    ];
    for e in errors {
        assert!(!e.to_string().is_empty(), "empty display for {e:?}");
    }
}

#[test]
fn page_copy_error_names_the_failing_page() {
    let e = SplitError::PageCopy {
        page: 7,
        reason: "boom".into(),
    };
    assert!(e.to_string().contains('7'));
}

// ── PdfSplitter with invalid input ────────────────────────────────────────────

#[test]
fn from_bytes_rejects_empty_slice() {
    assert!(matches!(
        PdfSplitter::from_bytes(&[]),
        Err(SplitError::SourceLoad(_))
    ));
}

#[test]
fn from_bytes_rejects_non_pdf() {
    assert!(matches!(
        PdfSplitter::from_bytes(b"not a pdf"),
        Err(SplitError::SourceLoad(_))
    ));
}

// ── Page selection ────────────────────────────────────────────────────────────

#[test]
fn select_pages_is_bounded_by_document_page_count() {
    let splitter = PdfSplitter::from_bytes(&build_test_pdf(3, "Page")).unwrap();
    let selection = splitter.select_pages("1-10").unwrap();
    assert_eq!(selection.zero_based(), &[0, 1, 2]);
}

#[test]
fn select_pages_empty_range_is_reported() {
    let splitter = PdfSplitter::from_bytes(&build_test_pdf(10, "Page")).unwrap();
    assert!(matches!(
        splitter.select_pages("0,11"),
        Err(SplitError::EmptyRange)
    ));
}

#[test]
fn strict_config_rejects_malformed_tokens() {
    let config = SplitterConfig {
        strict_ranges: true,
        ..Default::default()
    };
    let splitter =
        PdfSplitter::from_bytes_with_config(&build_test_pdf(10, "Page"), config).unwrap();
    assert!(matches!(
        splitter.select_pages("abc,2"),
        Err(SplitError::InvalidRange(_))
    ));
}

// ── Extraction ────────────────────────────────────────────────────────────────

#[test]
fn extract_keeps_only_selected_pages_in_order() {
    let splitter = PdfSplitter::from_bytes(&build_test_pdf(5, "Page")).unwrap();
    let selection = splitter.select_pages("2-3").unwrap();
    let output = splitter.extract_pages(&selection).unwrap();

    let markers = page_markers(&output);
    assert_eq!(markers.len(), 2);
    assert!(markers[0].contains("Page 2"));
    assert!(markers[1].contains("Page 3"));
}

#[test]
fn extract_order_is_ascending_regardless_of_caller_order() {
    use splitpagespdf::PageIndexSet;

    let splitter = PdfSplitter::from_bytes(&build_test_pdf(5, "Page")).unwrap();
    let shuffled = PageIndexSet::from_zero_based([2, 0, 1], 5).unwrap();
    let sorted = PageIndexSet::from_zero_based([0, 1, 2], 5).unwrap();

    assert_eq!(
        splitter.extract_pages(&shuffled).unwrap(),
        splitter.extract_pages(&sorted).unwrap()
    );
}

#[test]
fn extract_all_pages_round_trips() {
    let splitter = PdfSplitter::from_bytes(&build_test_pdf(4, "Page")).unwrap();
    let selection = splitter.select_pages("1-4").unwrap();
    let output = splitter.extract_pages(&selection).unwrap();
    assert_eq!(reload_page_count(&output), 4);
}

#[test]
fn extract_does_not_mutate_the_source() {
    let splitter = PdfSplitter::from_bytes(&build_test_pdf(5, "Page")).unwrap();
    let selection = splitter.select_pages("1").unwrap();
    splitter.extract_pages(&selection).unwrap();
    assert_eq!(splitter.page_count(), 5);
    assert_eq!(splitter.document().get_pages().len(), 5);
}

// ── Split-all ─────────────────────────────────────────────────────────────────

#[test]
fn split_all_produces_one_document_per_page() {
    let splitter = PdfSplitter::from_bytes(&build_test_pdf(5, "Page")).unwrap();
    let pages = splitter.split_all_pages("doc").unwrap();

    assert_eq!(pages.len(), 5);
    for (i, page) in pages.iter().enumerate() {
        let n = (i + 1) as u32;
        assert_eq!(page.page_number, n);
        assert_eq!(page.filename, format!("doc-page-{n}.pdf"));

        let markers = page_markers(&page.data);
        assert_eq!(markers.len(), 1, "page {n} is not single-page");
        assert!(markers[0].contains(&format!("Page {n}")));
    }
}

#[test]
fn split_all_respects_cancellation() {
    let flag = Arc::new(AtomicBool::new(false));
    flag.store(true, Ordering::Relaxed);

    let config = SplitterConfig {
        cancel_flag: Some(flag),
        ..Default::default()
    };
    let splitter =
        PdfSplitter::from_bytes_with_config(&build_test_pdf(5, "Page"), config).unwrap();
    assert!(matches!(
        splitter.split_all_pages("doc"),
        Err(SplitError::Cancelled)
    ));
}

// ── Packaging ─────────────────────────────────────────────────────────────────

#[test]
fn package_extract_passes_bytes_through() {
    let bundle =
        package_for_download(SplitArtifact::Extracted(vec![1, 2, 3]), "report").unwrap();
    assert_eq!(bundle.filename, "report-extracted.pdf");
    assert_eq!(bundle.data, vec![1, 2, 3]);
    assert!(!bundle.is_archive());
    assert_eq!(bundle.extension(), Some("pdf"));
}

#[test]
fn package_split_all_builds_a_readable_zip() {
    let splitter = PdfSplitter::from_bytes(&build_test_pdf(3, "Page")).unwrap();
    let pages = splitter.split_all_pages("doc").unwrap();
    let bundle = package_for_download(SplitArtifact::Pages(pages), "doc").unwrap();

    assert_eq!(bundle.filename, "doc-split.zip");
    assert!(bundle.is_archive());

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(&bundle.data)).unwrap();
    assert_eq!(archive.len(), 3);

    let mut entry = archive.by_name("doc-page-2.pdf").unwrap();
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).unwrap();
    assert_eq!(reload_page_count(&bytes), 1);
    assert!(page_markers(&bytes)[0].contains("Page 2"));
}

#[test]
fn artifact_accounting_matches_contents() {
    let pages = vec![
        PageDocument {
            page_number: 1,
            filename: "a-page-1.pdf".into(),
            data: vec![0; 10],
        },
        PageDocument {
            page_number: 2,
            filename: "a-page-2.pdf".into(),
            data: vec![0; 20],
        },
    ];
    let artifact = SplitArtifact::Pages(pages);
    assert_eq!(artifact.document_count(), 2);
    assert_eq!(artifact.total_bytes(), 30);

    let single = SplitArtifact::Extracted(vec![0; 7]);
    assert_eq!(single.document_count(), 1);
    assert_eq!(single.total_bytes(), 7);
}

// ── End-to-end driver ─────────────────────────────────────────────────────────

#[test]
fn run_extract_end_to_end() {
    let splitter = PdfSplitter::from_bytes(&build_test_pdf(10, "Page")).unwrap();
    let bundle = splitter.run(SplitMode::Extract, "1-3, 7", "report").unwrap();

    assert_eq!(bundle.filename, "report-extracted.pdf");
    assert_eq!(reload_page_count(&bundle.data), 4);
}

#[test]
fn run_split_all_end_to_end() {
    let splitter = PdfSplitter::from_bytes(&build_test_pdf(4, "Page")).unwrap();
    let bundle = splitter.run(SplitMode::SplitAll, "", "report").unwrap();

    assert_eq!(bundle.filename, "report-split.zip");
    let archive = zip::ZipArchive::new(std::io::Cursor::new(&bundle.data)).unwrap();
    assert_eq!(archive.len(), 4);
}

#[test]
fn run_writes_bundle_to_disk_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    let config = SplitterConfig {
        save_to_disk: true,
        output_directory: Some(dir.path().to_string_lossy().into_owned()),
        ..Default::default()
    };
    let splitter =
        PdfSplitter::from_bytes_with_config(&build_test_pdf(3, "Page"), config).unwrap();

    let bundle = splitter.run(SplitMode::Extract, "2", "report").unwrap();
    let written = std::fs::read(dir.path().join(&bundle.filename)).unwrap();
    assert_eq!(written, bundle.data);
}

// ── Output helpers ────────────────────────────────────────────────────────────

#[test]
fn bundle_save_to_disk_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = DownloadBundle {
        filename: "test.pdf".into(),
        data: b"hello world".to_vec(),
    };
    bundle.save_to_disk(dir.path()).unwrap();

    let written = std::fs::read(dir.path().join("test.pdf")).unwrap();
    assert_eq!(written, b"hello world");
}

#[test]
fn page_document_save_to_disk_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let page = PageDocument {
        page_number: 1,
        filename: "doc-page-1.pdf".into(),
        data: b"page".to_vec(),
    };
    page.save_to_disk(dir.path()).unwrap();
    assert!(dir.path().join("doc-page-1.pdf").exists());
}

#[test]
fn base_name_strips_path_and_extension() {
    assert_eq!(base_name("dir/report.pdf"), "report");
    assert_eq!(base_name("report"), "report");
}

// ── Merge ─────────────────────────────────────────────────────────────────────

#[test]
fn merge_combines_pages_in_input_order() {
    let first = build_test_pdf(3, "Alpha");
    let second = build_test_pdf(2, "Beta");

    let merged = merge_bytes(&[first, second]).unwrap();
    let markers = page_markers(&merged);

    assert_eq!(markers.len(), 5);
    assert!(markers[0].contains("Alpha 1"));
    assert!(markers[2].contains("Alpha 3"));
    assert!(markers[3].contains("Beta 1"));
    assert!(markers[4].contains("Beta 2"));
}

#[test]
fn merge_output_is_splittable_again() {
    let merged = merge_bytes(&[build_test_pdf(2, "Page"), build_test_pdf(2, "Page")]).unwrap();
    let splitter = PdfSplitter::from_bytes(&merged).unwrap();
    assert_eq!(splitter.page_count(), 4);

    let pages = splitter.split_all_pages("merged").unwrap();
    assert_eq!(pages.len(), 4);
}

#[test]
fn merge_rejects_fewer_than_two_inputs() {
    assert!(matches!(
        merge_bytes(&[build_test_pdf(2, "Page")]),
        Err(SplitError::Merge(_))
    ));
    assert!(matches!(merge_bytes(&[]), Err(SplitError::Merge(_))));
}

#[test]
fn merge_rejects_unloadable_input() {
    assert!(matches!(
        merge_bytes(&[build_test_pdf(2, "Page"), b"not a pdf".to_vec()]),
        Err(SplitError::SourceLoad(_))
    ));
}
