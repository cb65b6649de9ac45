use dioxus::prelude::*;
use shared_types::FileRef;

use crate::format_helpers::mime_from_filename;

/// Read every file picked in `evt` into memory.
///
/// A file that fails to read is skipped with a warning; the rest of the
/// selection still goes through.
pub async fn read_picked_files(evt: FormEvent) -> Vec<FileRef> {
    let mut picked = Vec::new();
    for file in evt.files() {
        let name = file.name();
        let content_type = file
            .content_type()
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| mime_from_filename(&name));
        match file.read_bytes().await {
            Ok(bytes) => picked.push(FileRef::new(name, Some(content_type), bytes.to_vec())),
            Err(err) => tracing::warn!(file = %name, error = ?err, "failed to read picked file"),
        }
    }
    picked
}
