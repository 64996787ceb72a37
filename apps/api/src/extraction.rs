//! PDF text extraction for uploaded résumés.

use anyhow::{anyhow, Context, Result};
use bytes::Bytes;

/// Extracts text from raw PDF bytes. The library walks the document page by
/// page and concatenates what each page yields; pages without extractable
/// text contribute nothing rather than failing the whole document.
///
/// PDF parsing is CPU-bound, so it runs on the blocking pool.
pub async fn extract_pdf_text(bytes: Bytes) -> Result<String> {
    let text = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| anyhow!("Failed to extract text from PDF: {e}"))
    })
    .await
    .context("PDF extraction task panicked")??;

    Ok(text)
}

/// Prefix truncation by character count, used to keep prompts inside the
/// upstream token budget. Never cuts inside a UTF-8 sequence.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
