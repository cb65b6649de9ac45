use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use shared_types::{FileRef, RosterAction, RosterState, UploadTicket};
use shared_ui::components::{Button, ButtonVariant, FileInput, Input};

use crate::files::read_picked_files;
use crate::format_helpers::selection_summary;

/// A picked file not yet committed to a document.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFile {
    pub name: String,
    pub size: usize,
}

impl From<&FileRef> for PendingFile {
    fn from(file: &FileRef) -> Self {
        Self {
            name: file.name.clone(),
            size: file.size(),
        }
    }
}

/// Pick sequence, monotonic across panel mounts.
static NEXT_PICK: AtomicU64 = AtomicU64::new(1);

/// Snapshot of the upload form for the card that owns the open panel.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadDraft {
    pub ticket: UploadTicket,
    pub document_name: String,
    pub pending: Vec<PendingFile>,
}

impl UploadDraft {
    /// `None` when no upload panel is open.
    pub fn from_state(state: &RosterState) -> Option<Self> {
        Some(Self {
            ticket: state.upload_ticket()?,
            document_name: state.document_name_draft().to_string(),
            pending: state.pending_files().iter().map(PendingFile::from).collect(),
        })
    }

    pub fn total_bytes(&self) -> usize {
        self.pending.iter().map(|f| f.size).sum()
    }
}

#[component]
pub fn UploadPanel(draft: UploadDraft, dispatch: Callback<RosterAction>) -> Element {
    let ticket = draft.ticket;
    let summary = (!draft.pending.is_empty())
        .then(|| selection_summary(draft.pending.len(), draft.total_bytes()));

    rsx! {
        div { class: "upload-panel",
            Input {
                value: draft.document_name.clone(),
                placeholder: "Enter document name",
                on_input: move |evt: FormEvent| {
                    dispatch.call(RosterAction::EditDocumentName(evt.value().to_string()))
                },
            }
            FileInput {
                multiple: true,
                on_change: move |evt: FormEvent| {
                    let sequence = NEXT_PICK.fetch_add(1, Ordering::Relaxed);
                    spawn(async move {
                        let files = read_picked_files(evt).await;
                        dispatch.call(RosterAction::SelectFiles { ticket, sequence, files });
                    });
                },
            }
            if let Some(summary) = summary {
                p { class: "upload-selection", "{summary}" }
            }
            div { class: "upload-actions",
                Button {
                    variant: ButtonVariant::Success,
                    onclick: move |_| dispatch.call(RosterAction::ConfirmUpload),
                    "Save"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| dispatch.call(RosterAction::CancelUpload),
                    "Cancel"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ApplicantId;

    #[test]
    fn draft_mirrors_roster_state() {
        let mut state = RosterState::default();
        state.dispatch(RosterAction::EditApplicantName("Ada".into()));
        state.dispatch(RosterAction::ConfirmAdd);
        let id: ApplicantId = state.id_at(0).unwrap();
        state.dispatch(RosterAction::StartUpload(id));
        state.dispatch(RosterAction::EditDocumentName("Passport".into()));
        let ticket = state.upload_ticket().unwrap();
        state.dispatch(RosterAction::SelectFiles {
            ticket,
            sequence: 1,
            files: vec![
                FileRef::new("front.png", None, vec![0; 1024]),
                FileRef::new("back.png", None, vec![0; 512]),
            ],
        });

        let draft = UploadDraft::from_state(&state).unwrap();
        assert_eq!(draft.ticket, ticket);
        assert_eq!(draft.document_name, "Passport");
        assert_eq!(draft.pending.len(), 2);
        assert_eq!(draft.pending[0].name, "front.png");
        assert_eq!(draft.total_bytes(), 1536);
    }

    #[test]
    fn no_draft_without_open_panel() {
        let mut state = RosterState::default();
        state.dispatch(RosterAction::EditApplicantName("Ada".into()));
        state.dispatch(RosterAction::ConfirmAdd);
        assert_eq!(UploadDraft::from_state(&state), None);

        let id = state.id_at(0).unwrap();
        state.dispatch(RosterAction::StartUpload(id));
        let first = UploadDraft::from_state(&state).unwrap().ticket;
        state.dispatch(RosterAction::CancelUpload);
        state.dispatch(RosterAction::StartUpload(id));
        let reopened = UploadDraft::from_state(&state).unwrap().ticket;
        assert_ne!(first, reopened);
    }

    #[test]
    fn panel_shows_selection_summary() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                UploadPanel {
                    draft: UploadDraft {
                        ticket: UploadTicket { applicant: ApplicantId::new(), generation: 1 },
                        document_name: "Payslip".into(),
                        pending: vec![PendingFile { name: "may.pdf".into(), size: 2048 }],
                    },
                    dispatch: Callback::default(),
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Enter document name"));
        assert!(html.contains(r#"value="Payslip""#));
        assert!(html.contains("1 file (2.0 KB)"));
        assert!(html.contains("Save"));
        assert!(html.contains("Cancel"));
    }
}
