pub mod pdftotext;

use crate::error::GuideError;

/// Text extracted from a single page of a PDF.
///
/// `text` may be empty for pages with no text layer; an empty page still
/// contributes a page break when pages are concatenated.
#[derive(Debug, Clone)]
pub struct PageText {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageText per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, GuideError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
