use dayguide_core::error::GuideError;
use dayguide_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), GuideError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let doc = dayguide_core::parse_pdf(&pdf_bytes, &extractor)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&doc)?;
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, json)?;
            eprintln!("Parsed {} day(s), written to {}", doc.len(), path.display());
        }
        None => match output_format {
            "json" => output::json::print(&doc)?,
            _ => output::table::print(&doc),
        },
    }

    Ok(())
}
