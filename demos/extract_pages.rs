//! Minimal CLI that extracts a page range from a PDF into a new file.
//!
//! Usage:
//!   cargo run --example extract_pages -- report.pdf "1-3, 7"
//!   cargo run --example extract_pages -- report.pdf "1-3, 7" ./output

use splitpagespdf::{base_name, PdfSplitter, SplitMode, SplitterConfig};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <pdf_file> <range> [output_dir]", args[0]);
        process::exit(1);
    }

    let pdf_path = &args[1];
    let range = &args[2];
    let output_dir = args.get(3).map(String::as_str).unwrap_or(".");

    let config = SplitterConfig {
        save_to_disk: true,
        output_directory: Some(output_dir.to_owned()),
        ..Default::default()
    };

    println!("Loading: {pdf_path}");

    let splitter = PdfSplitter::with_config(pdf_path, config).unwrap_or_else(|e| {
        eprintln!("Error loading PDF: {e}");
        process::exit(1);
    });

    println!("✓ {} page(s)", splitter.page_count());

    // Show what the range resolves to before extracting.
    match splitter.select_pages(range) {
        Ok(selection) => {
            let pages: Vec<u32> = selection.iter_one_based().collect();
            println!("✓ Range \"{range}\" selects pages {pages:?}");
        }
        Err(e) => {
            eprintln!("✗ {e}");
            process::exit(1);
        }
    }

    let bundle = splitter
        .run(SplitMode::Extract, range, base_name(pdf_path))
        .unwrap_or_else(|e| {
            eprintln!("Extraction error: {e}");
            process::exit(1);
        });

    println!("✓ Saved to {output_dir}/{}", bundle.filename);
    println!("  Size : {} bytes", bundle.data.len());
}
