use base64::Engine as _;
use shared_types::{Applicant, FileId, FileRef};
use std::collections::{HashMap, HashSet};

/// Download hrefs for attached files, keyed by file id.
///
/// A handle is acquired when a file first appears in a committed document
/// and released as soon as no document references the file. Handles are
/// plain `data:` strings with no platform object behind them, so dropping
/// the registry only frees those strings and logs how many were held.
#[derive(Debug, Default)]
pub struct DownloadHandles {
    hrefs: HashMap<FileId, String>,
}

impl DownloadHandles {
    pub fn acquire(&mut self, file: &FileRef) -> &str {
        self.hrefs.entry(file.id).or_insert_with(|| data_url(file))
    }

    pub fn href(&self, id: FileId) -> Option<&str> {
        self.hrefs.get(&id).map(String::as_str)
    }

    /// Drop every handle whose file is not in `live`. Returns how many were released.
    pub fn release_unreferenced(&mut self, live: &HashSet<FileId>) -> usize {
        let before = self.hrefs.len();
        self.hrefs.retain(|id, _| live.contains(id));
        before - self.hrefs.len()
    }

    /// Bring the registry in line with the roster: release handles for files
    /// that are gone, acquire handles for newly attached ones.
    pub fn sync(&mut self, applicants: &[Applicant]) {
        let live: HashSet<FileId> = applicants.iter().flat_map(Applicant::file_ids).collect();
        let released = self.release_unreferenced(&live);
        if released > 0 {
            tracing::debug!(released, "download handles released");
        }

        for file in applicants
            .iter()
            .flat_map(|a| a.documents.iter())
            .flat_map(|d| d.files.iter())
        {
            self.acquire(file);
        }
    }

    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }
}

impl Drop for DownloadHandles {
    fn drop(&mut self) {
        if !self.hrefs.is_empty() {
            tracing::debug!(released = self.hrefs.len(), "download handles dropped with registry");
        }
    }
}

/// Self-contained `data:` URL carrying the file content.
pub fn data_url(file: &FileRef) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(file.bytes());
    format!("data:{};base64,{}", file.mime_type(), encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Document;

    fn applicant_with(files: Vec<FileRef>) -> Applicant {
        let mut applicant = Applicant::new("Ada");
        applicant.documents.push(Document::new("ID", files));
        applicant
    }

    #[test]
    fn data_url_encodes_content_and_type() {
        let file = FileRef::new("hi.txt", Some("text/plain".into()), b"hi".to_vec());
        assert_eq!(data_url(&file), "data:text/plain;base64,aGk=");
    }

    #[test]
    fn acquire_reuses_existing_handle() {
        let file = FileRef::new("a.txt", None, b"abc".to_vec());
        let mut handles = DownloadHandles::default();
        let first = handles.acquire(&file).to_string();
        let second = handles.acquire(&file).to_string();
        assert_eq!(first, second);
        assert_eq!(handles.len(), 1);
        assert!(first.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn sync_acquires_attached_files() {
        let file = FileRef::new("a.txt", Some("text/plain".into()), b"a".to_vec());
        let id = file.id;
        let roster = vec![applicant_with(vec![file])];
        let mut handles = DownloadHandles::default();
        handles.sync(&roster);
        assert_eq!(handles.href(id), Some("data:text/plain;base64,YQ=="));
    }

    #[test]
    fn sync_releases_files_of_removed_applicants() {
        let kept = FileRef::new("kept.txt", None, b"k".to_vec());
        let gone = FileRef::new("gone.txt", None, b"g".to_vec());
        let (kept_id, gone_id) = (kept.id, gone.id);
        let mut roster = vec![applicant_with(vec![kept]), applicant_with(vec![gone])];

        let mut handles = DownloadHandles::default();
        handles.sync(&roster);
        assert_eq!(handles.len(), 2);

        roster.pop();
        handles.sync(&roster);
        assert_eq!(handles.len(), 1);
        assert!(handles.href(kept_id).is_some());
        assert!(handles.href(gone_id).is_none());
    }

    #[test]
    fn release_unreferenced_counts_releases() {
        let a = FileRef::new("a", None, vec![]);
        let b = FileRef::new("b", None, vec![]);
        let mut handles = DownloadHandles::default();
        handles.acquire(&a);
        handles.acquire(&b);
        let live = HashSet::from([a.id]);
        assert_eq!(handles.release_unreferenced(&live), 1);
        assert_eq!(handles.release_unreferenced(&live), 0);
    }

    #[test]
    fn empty_roster_releases_everything() {
        let mut handles = DownloadHandles::default();
        handles.sync(&[applicant_with(vec![FileRef::new("x", None, vec![1])])]);
        handles.sync(&[]);
        assert!(handles.is_empty());
    }

    #[test]
    fn dropping_registry_leaves_files_readable() {
        let file = FileRef::new("cv.pdf", None, b"cv".to_vec());
        let mut handles = DownloadHandles::default();
        let href = handles.acquire(&file).to_string();
        drop(handles);

        assert_eq!(file.bytes(), b"cv");
        let mut rebuilt = DownloadHandles::default();
        assert_eq!(rebuilt.acquire(&file), href);
    }
}
