use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdTrash, LdUpload};
use dioxus_free_icons::Icon;
use shared_types::{Applicant, ApplicantId, DocumentId, RosterAction};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardAction, CardContent, CardFooter, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
};

use super::upload_panel::{UploadDraft, UploadPanel};
use crate::downloads::DownloadHandles;

/// One attached file as rendered: its label and download href.
#[derive(Debug, Clone, PartialEq)]
pub struct FileLink {
    pub name: String,
    pub href: Option<String>,
}

/// One row of an applicant's documents table.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRow {
    pub id: DocumentId,
    pub name: String,
    pub files: Vec<FileLink>,
}

impl DocumentRow {
    pub fn collect(applicant: &Applicant, downloads: &DownloadHandles) -> Vec<Self> {
        applicant
            .documents
            .iter()
            .map(|doc| DocumentRow {
                id: doc.id,
                name: doc.document_name.clone(),
                files: doc
                    .files
                    .iter()
                    .map(|file| FileLink {
                        name: file.name.clone(),
                        href: downloads.href(file.id).map(str::to_string),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[component]
pub fn ApplicantCard(
    id: ApplicantId,
    name: String,
    documents: Vec<DocumentRow>,
    #[props(default)] upload: Option<UploadDraft>,
    #[props(default)] dispatch: Callback<RosterAction>,
) -> Element {
    rsx! {
        Card { class: "applicant-card",
            CardHeader {
                CardTitle { "{name}" }
                CardAction {
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "applicant-delete",
                        title: "Delete applicant",
                        onclick: move |_| dispatch.call(RosterAction::DeleteApplicant(id)),
                        Icon::<LdTrash> { icon: LdTrash, width: 20, height: 20 }
                        "Delete"
                    }
                }
            }
            CardContent {
                if !documents.is_empty() {
                    DocumentTable { documents: documents.clone() }
                }
                if let Some(draft) = upload {
                    UploadPanel { draft, dispatch }
                }
            }
            CardFooter {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| dispatch.call(RosterAction::StartUpload(id)),
                    Icon::<LdUpload> { icon: LdUpload, width: 18, height: 18 }
                    "Upload Document"
                }
            }
        }
    }
}

#[component]
pub fn DocumentTable(documents: Vec<DocumentRow>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Document Name" }
                DataTableColumn { "File(s)" }
            }
            DataTableBody {
                for (index, doc) in documents.iter().enumerate() {
                    DataTableRow { key: "{doc.id}", index,
                        DataTableCell { class: "document-name", "{doc.name}" }
                        DataTableCell {
                            for link in doc.files.iter() {
                                if let Some(href) = &link.href {
                                    a {
                                        class: "file-link",
                                        href: "{href}",
                                        download: "{link.name}",
                                        "{link.name}"
                                    }
                                } else {
                                    span { class: "file-link", "{link.name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
