//! Shared formatting utilities for the UI layer.

/// Human-readable byte count, e.g. "12.3 KB".
pub fn format_file_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;
    const GB: usize = 1024 * MB;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Guess a MIME type from the file extension when the picker reports none.
pub fn mime_from_filename(name: &str) -> String {
    let lower = name.to_lowercase();
    let ext = lower.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match ext {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// Summary line for an uncommitted selection, e.g. "2 files (3.0 KB)".
pub fn selection_summary(count: usize, total_bytes: usize) -> String {
    let noun = if count == 1 { "file" } else { "files" };
    format!("{count} {noun} ({})", format_file_size(total_bytes))
}
