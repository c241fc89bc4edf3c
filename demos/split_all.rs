//! Minimal CLI that bursts a PDF into single-page files and writes the
//! resulting ZIP archive.
//!
//! Usage:
//!   cargo run --example split_all -- report.pdf
//!   cargo run --example split_all -- report.pdf ./output

use splitpagespdf::{base_name, package_for_download, PdfSplitter, SplitArtifact};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pdf_file> [output_dir]", args[0]);
        process::exit(1);
    }

    let pdf_path = &args[1];
    let output_dir = args.get(2).map(String::as_str).unwrap_or(".");

    let splitter = PdfSplitter::from_path(pdf_path).unwrap_or_else(|e| {
        eprintln!("Error loading PDF: {e}");
        process::exit(1);
    });

    let base = base_name(pdf_path);
    println!("Splitting {} page(s) of {pdf_path}", splitter.page_count());

    let pages = splitter.split_all_pages(base).unwrap_or_else(|e| {
        eprintln!("Split error: {e}");
        process::exit(1);
    });

    for page in &pages {
        println!("  {} — {} bytes", page.filename, page.data.len());
    }

    let bundle = package_for_download(SplitArtifact::Pages(pages), base).unwrap_or_else(|e| {
        eprintln!("Archive error: {e}");
        process::exit(1);
    });

    match bundle.save_to_disk(output_dir) {
        Ok(_) => println!("✓ Saved to {output_dir}/{}", bundle.filename),
        Err(e) => {
            eprintln!("✗ Save failed: {e}");
            process::exit(1);
        }
    }
}
