//! CLI tool for splitting and merging PDF documents.
//!
//! This binary demonstrates the capabilities of the splitpagespdf crate and
//! provides a command-line interface for page extraction, page-by-page
//! splitting, and document merging.

use splitpagespdf::{
    base_name, merge_bytes, PdfSplitter, Result, SplitMode, SplitterConfig,
};
use std::{env, fs, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let outcome = match args[1].as_str() {
        "extract" if args.len() >= 4 => {
            run_split(&args[2], SplitMode::Extract, &args[3], args.get(4))
        }
        "split-all" if args.len() >= 3 => {
            run_split(&args[2], SplitMode::SplitAll, "", args.get(3))
        }
        "merge" if args.len() >= 5 => run_merge(&args[2], &args[3..]),
        command => {
            eprintln!("❌ Unknown or incomplete command: {}", command);
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    match outcome {
        Ok(()) => println!("\n✅ Done!"),
        Err(e) => {
            eprintln!("\n❌ Error: {}", e);
            process::exit(1);
        }
    }
}

fn print_usage(program_name: &str) {
    println!("✂️  splitPagesPDF - PDF Split & Merge Tool");
    println!();
    println!("USAGE:");
    println!("    {} extract <pdf_file> <range> [output_dir]", program_name);
    println!("    {} split-all <pdf_file> [output_dir]", program_name);
    println!("    {} merge <output.pdf> <input.pdf> <input.pdf> [...]", program_name);
    println!();
    println!("COMMANDS:");
    println!("    extract      Copy the pages in <range> into one new PDF");
    println!("    split-all    Write every page as its own PDF, bundled into a ZIP");
    println!("    merge        Combine two or more PDFs into one");
    println!();
    println!("ARGUMENTS:");
    println!("    <range>        1-based pages and ranges, e.g. \"1-5, 8, 11-13\"");
    println!("    [output_dir]   Directory for the result (default: current directory)");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help     Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    {} extract report.pdf \"1-3, 7\"", program_name);
    println!("    {} split-all report.pdf ./out", program_name);
    println!("    {} merge combined.pdf a.pdf b.pdf c.pdf", program_name);
}

fn run_split(
    pdf_path: &str,
    mode: SplitMode,
    range: &str,
    output_dir: Option<&String>,
) -> Result<()> {
    let output_dir = output_dir.map(String::as_str).unwrap_or(".");

    println!("🔍 Loading PDF: {}", pdf_path);
    println!("📁 Output directory: {}", output_dir);
    println!("{}", "─".repeat(60));

    let config = SplitterConfig {
        save_to_disk: true,
        output_directory: Some(output_dir.to_string()),
        ..Default::default()
    };
    let splitter = PdfSplitter::with_config(pdf_path, config)?;
    println!("📄 {} page(s)", splitter.page_count());

    match mode {
        SplitMode::Extract => {
            let selection = splitter.select_pages(range)?;
            println!(
                "✂️  Extracting {} page(s) from range \"{}\"",
                selection.len(),
                range
            );
        }
        SplitMode::SplitAll => {
            println!("✂️  Splitting all {} page(s)", splitter.page_count());
        }
    }

    let bundle = splitter.run(mode, range, base_name(pdf_path))?;

    println!("{}", "─".repeat(60));
    println!("📊 Summary:");
    println!("   • Output: {}/{}", output_dir, bundle.filename);
    println!("   • Size: {}", format_bytes(bundle.data.len()));

    Ok(())
}

fn run_merge(output_path: &str, input_paths: &[String]) -> Result<()> {
    println!("🔗 Merging {} PDF(s) into {}", input_paths.len(), output_path);
    println!("{}", "─".repeat(60));

    let mut inputs = Vec::with_capacity(input_paths.len());
    for path in input_paths {
        let bytes = fs::read(path)?;
        println!("   • {} ({})", path, format_bytes(bytes.len()));
        inputs.push(bytes);
    }

    let merged = merge_bytes(&inputs)?;
    fs::write(output_path, &merged)?;

    println!("{}", "─".repeat(60));
    println!("📊 Summary:");
    println!("   • Output: {}", output_path);
    println!("   • Size: {}", format_bytes(merged.len()));

    Ok(())
}

fn format_bytes(bytes: usize) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
