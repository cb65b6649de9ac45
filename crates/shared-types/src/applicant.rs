use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

opaque_id!(
    /// Stable identity of an applicant, assigned when the applicant is added.
    ApplicantId
);
opaque_id!(
    /// Stable identity of an attached document.
    DocumentId
);
opaque_id!(
    /// Stable identity of a picked file; keys its download handle.
    FileId
);

// ---------------------------------------------------------------------------
// FileRef
// ---------------------------------------------------------------------------

/// A file chosen in the host's file picker.
///
/// Content is shared, so cloning a `FileRef` never copies the bytes.
#[derive(Clone)]
pub struct FileRef {
    pub id: FileId,
    pub name: String,
    pub content_type: Option<String>,
    bytes: Arc<[u8]>,
}

impl FileRef {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            id: FileId::new(),
            name: name.into(),
            content_type,
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// MIME type for download links; unknown types fall back to a byte stream.
    pub fn mime_type(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|ct| !ct.is_empty())
            .unwrap_or("application/octet-stream")
    }
}

impl PartialEq for FileRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileRef")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size", &self.size())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Document / Applicant
// ---------------------------------------------------------------------------

/// A named bundle of files attached to an applicant. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub document_name: String,
    pub files: Vec<FileRef>,
}

impl Document {
    pub fn new(document_name: impl Into<String>, files: Vec<FileRef>) -> Self {
        Self {
            id: DocumentId::new(),
            document_name: document_name.into(),
            files,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Applicant {
    pub id: ApplicantId,
    pub name: String,
    pub documents: Vec<Document>,
}

impl Applicant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ApplicantId::new(),
            name: name.into(),
            documents: Vec::new(),
        }
    }

    /// Ids of every file attached to this applicant's documents.
    pub fn file_ids(&self) -> impl Iterator<Item = FileId> + '_ {
        self.documents
            .iter()
            .flat_map(|doc| doc.files.iter().map(|f| f.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(ApplicantId::new(), ApplicantId::new());
        assert_ne!(FileId::new(), FileId::new());
    }

    #[test]
    fn cloned_file_shares_content() {
        let file = FileRef::new("resume.pdf", Some("application/pdf".into()), vec![1, 2, 3]);
        let copy = file.clone();
        assert_eq!(file, copy);
        assert!(std::ptr::eq(file.bytes().as_ptr(), copy.bytes().as_ptr()));
        assert_eq!(copy.size(), 3);
    }

    #[test]
    fn mime_type_falls_back_to_octet_stream() {
        let untyped = FileRef::new("blob", None, vec![]);
        assert_eq!(untyped.mime_type(), "application/octet-stream");
        let blank = FileRef::new("blob", Some(String::new()), vec![]);
        assert_eq!(blank.mime_type(), "application/octet-stream");
    }

    #[test]
    fn debug_omits_file_content() {
        let file = FileRef::new("id.png", Some("image/png".into()), vec![0xFF; 16]);
        let out = format!("{file:?}");
        assert!(out.contains("id.png"));
        assert!(out.contains("size: 16"));
        assert!(!out.contains("255"));
    }

    #[test]
    fn file_ids_cover_all_documents() {
        let mut applicant = Applicant::new("Ada");
        let a = FileRef::new("a.txt", None, vec![]);
        let b = FileRef::new("b.txt", None, vec![]);
        let c = FileRef::new("c.txt", None, vec![]);
        let expected = vec![a.id, b.id, c.id];
        applicant.documents.push(Document::new("ID", vec![a, b]));
        applicant.documents.push(Document::new("Payslip", vec![c]));
        assert_eq!(applicant.file_ids().collect::<Vec<_>>(), expected);
    }
}
