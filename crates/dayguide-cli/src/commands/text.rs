use dayguide_core::error::GuideError;
use dayguide_core::extraction::pdftotext::PdftotextExtractor;
use dayguide_core::extraction::PdfExtractor;
use std::path::PathBuf;

pub fn run(pdf_file: PathBuf) -> Result<(), GuideError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let pages = extractor.extract_pages(&pdf_bytes)?;
    let text = dayguide_core::concat_pages(&pages);
    print!("{text}");
    Ok(())
}
