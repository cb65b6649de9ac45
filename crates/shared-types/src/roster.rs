use std::collections::HashSet;

use crate::applicant::{Applicant, ApplicantId, Document, FileId, FileRef};
use crate::config::{RosterConfig, DEFAULT_ITEMS_PER_PAGE};
use crate::error::RosterError;
use crate::pagination;

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Identifies one opening of the upload panel.
///
/// Captured when a file read starts; a read that finishes after the panel
/// was closed, reopened or moved to another applicant carries a stale
/// ticket and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    pub applicant: ApplicantId,
    pub generation: u64,
}

/// Every user input the roster reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction {
    /// The "Add Applicant" button: opens the dialog, or closes it if open.
    ToggleAddDialog,
    EditApplicantName(String),
    ConfirmAdd,
    CancelAdd,
    DeleteApplicant(ApplicantId),
    /// Open the upload panel on one applicant's card.
    StartUpload(ApplicantId),
    EditDocumentName(String),
    /// Replace the uncommitted file selection. An empty list clears it.
    /// `sequence` orders overlapping picks; only a newer pick replaces an
    /// applied one.
    SelectFiles {
        ticket: UploadTicket,
        sequence: u64,
        files: Vec<FileRef>,
    },
    ConfirmUpload,
    CancelUpload,
    NextPage,
    PrevPage,
}

impl RosterAction {
    pub fn name(&self) -> &'static str {
        match self {
            RosterAction::ToggleAddDialog => "toggle_add_dialog",
            RosterAction::EditApplicantName(_) => "edit_applicant_name",
            RosterAction::ConfirmAdd => "confirm_add",
            RosterAction::CancelAdd => "cancel_add",
            RosterAction::DeleteApplicant(_) => "delete_applicant",
            RosterAction::StartUpload(_) => "start_upload",
            RosterAction::EditDocumentName(_) => "edit_document_name",
            RosterAction::SelectFiles { .. } => "select_files",
            RosterAction::ConfirmUpload => "confirm_upload",
            RosterAction::CancelUpload => "cancel_upload",
            RosterAction::NextPage => "next_page",
            RosterAction::PrevPage => "prev_page",
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// All state owned by the applicant roster.
///
/// Invariants held after every transition:
/// - `selected_applicant`, when set, names an applicant in the roster.
/// - `1 <= current_page <= total_pages()`.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterState {
    applicants: Vec<Applicant>,
    add_dialog_open: bool,
    applicant_name_draft: String,
    selected_applicant: Option<ApplicantId>,
    document_name_draft: String,
    pending_files: Option<Vec<FileRef>>,
    upload_generation: u64,
    last_selection: Option<u64>,
    current_page: usize,
    items_per_page: usize,
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl RosterState {
    /// Empty roster. `items_per_page` below one is raised to one.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            applicants: Vec::new(),
            add_dialog_open: false,
            applicant_name_draft: String::new(),
            selected_applicant: None,
            document_name_draft: String::new(),
            pending_files: None,
            upload_generation: 0,
            last_selection: None,
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn from_config(config: &RosterConfig) -> Self {
        Self::new(config.items_per_page)
    }

    // -- queries -------------------------------------------------------------

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    pub fn applicant(&self, id: ApplicantId) -> Option<&Applicant> {
        self.applicants.iter().find(|a| a.id == id)
    }

    /// Id of the applicant currently at `index`, for callers that only know positions.
    pub fn id_at(&self, index: usize) -> Option<ApplicantId> {
        self.applicants.get(index).map(|a| a.id)
    }

    pub fn add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    pub fn applicant_name_draft(&self) -> &str {
        &self.applicant_name_draft
    }

    pub fn selected_applicant(&self) -> Option<ApplicantId> {
        self.selected_applicant
    }

    /// Whether the upload panel is open on this applicant's card.
    pub fn is_uploading(&self, id: ApplicantId) -> bool {
        self.selected_applicant == Some(id)
    }

    /// Ticket for the currently open upload panel, if any.
    pub fn upload_ticket(&self) -> Option<UploadTicket> {
        self.selected_applicant.map(|applicant| UploadTicket {
            applicant,
            generation: self.upload_generation,
        })
    }

    pub fn document_name_draft(&self) -> &str {
        &self.document_name_draft
    }

    pub fn pending_files(&self) -> &[FileRef] {
        self.pending_files.as_deref().unwrap_or(&[])
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.applicants.len(), self.items_per_page)
    }

    /// Applicants visible on the current page.
    pub fn page_window(&self) -> &[Applicant] {
        let range =
            pagination::page_range(self.current_page, self.items_per_page, self.applicants.len());
        &self.applicants[range]
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Every file id still referenced by some document.
    pub fn live_file_ids(&self) -> HashSet<FileId> {
        self.applicants.iter().flat_map(Applicant::file_ids).collect()
    }

    // -- transitions ---------------------------------------------------------

    /// Apply `action`, silently ignoring rejected input.
    pub fn dispatch(&mut self, action: RosterAction) {
        let name = action.name();
        if let Err(err) = self.try_dispatch(action) {
            tracing::debug!(action = name, error = %err, "roster action rejected");
        }
    }

    /// Apply `action`, reporting why it was rejected. A rejected action
    /// leaves the state unchanged.
    pub fn try_dispatch(&mut self, action: RosterAction) -> Result<(), RosterError> {
        match action {
            RosterAction::ToggleAddDialog => {
                self.add_dialog_open = !self.add_dialog_open;
                Ok(())
            }
            RosterAction::EditApplicantName(name) => {
                self.applicant_name_draft = name;
                Ok(())
            }
            RosterAction::ConfirmAdd => self.confirm_add(),
            RosterAction::CancelAdd => {
                self.add_dialog_open = false;
                self.applicant_name_draft.clear();
                Ok(())
            }
            RosterAction::DeleteApplicant(id) => self.delete_applicant(id),
            RosterAction::StartUpload(id) => self.start_upload(id),
            RosterAction::EditDocumentName(name) => {
                self.document_name_draft = name;
                Ok(())
            }
            RosterAction::SelectFiles {
                ticket,
                sequence,
                files,
            } => self.select_files(ticket, sequence, files),
            RosterAction::ConfirmUpload => self.confirm_upload(),
            RosterAction::CancelUpload => {
                self.close_upload_panel();
                Ok(())
            }
            RosterAction::NextPage => {
                if self.has_next() {
                    self.current_page += 1;
                }
                Ok(())
            }
            RosterAction::PrevPage => {
                if self.has_previous() {
                    self.current_page -= 1;
                }
                Ok(())
            }
        }
    }

    fn confirm_add(&mut self) -> Result<(), RosterError> {
        if self.applicant_name_draft.trim().is_empty() {
            return Err(RosterError::field(
                "applicant_name",
                "Applicant name is required",
            ));
        }

        let applicant = Applicant::new(std::mem::take(&mut self.applicant_name_draft));
        tracing::info!(applicant_id = %applicant.id, "applicant added");
        self.applicants.push(applicant);
        self.add_dialog_open = false;

        // Jump to the page holding the new entry when it lands past the current one.
        if self.applicants.len() > self.current_page * self.items_per_page {
            self.current_page = self.total_pages();
        }
        Ok(())
    }

    fn delete_applicant(&mut self, id: ApplicantId) -> Result<(), RosterError> {
        let index = self
            .applicants
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| RosterError::not_found(format!("applicant {id} not found")))?;

        let removed = self.applicants.remove(index);
        tracing::info!(
            applicant_id = %removed.id,
            documents = removed.documents.len(),
            "applicant deleted"
        );

        if self.selected_applicant == Some(id) {
            self.close_upload_panel();
        }

        self.current_page =
            pagination::clamp_page(self.current_page, self.applicants.len(), self.items_per_page);
        Ok(())
    }

    fn start_upload(&mut self, id: ApplicantId) -> Result<(), RosterError> {
        if self.applicant(id).is_none() {
            return Err(RosterError::not_found(format!("applicant {id} not found")));
        }
        self.close_upload_panel();
        self.selected_applicant = Some(id);
        Ok(())
    }

    fn select_files(
        &mut self,
        ticket: UploadTicket,
        sequence: u64,
        files: Vec<FileRef>,
    ) -> Result<(), RosterError> {
        if self.upload_ticket() != Some(ticket) {
            return Err(RosterError::invalid_state(format!(
                "file selection for applicant {} arrived after its upload panel closed",
                ticket.applicant
            )));
        }
        if self.last_selection.is_some_and(|last| sequence <= last) {
            return Err(RosterError::invalid_state(
                "a newer file selection was already applied",
            ));
        }
        self.pending_files = if files.is_empty() { None } else { Some(files) };
        self.last_selection = Some(sequence);
        Ok(())
    }

    fn confirm_upload(&mut self) -> Result<(), RosterError> {
        let target = self
            .selected_applicant
            .ok_or_else(|| RosterError::invalid_state("no upload panel is open"))?;

        if self.document_name_draft.trim().is_empty() {
            return Err(RosterError::field(
                "document_name",
                "Document name is required",
            ));
        }
        if self.pending_files().is_empty() {
            return Err(RosterError::field("files", "Select at least one file"));
        }

        let applicant = self
            .applicants
            .iter_mut()
            .find(|a| a.id == target)
            .ok_or_else(|| RosterError::not_found(format!("applicant {target} not found")))?;

        let files = self.pending_files.take().unwrap_or_default();
        let document = Document::new(std::mem::take(&mut self.document_name_draft), files);
        tracing::info!(
            applicant_id = %target,
            document_id = %document.id,
            files = document.files.len(),
            "document attached"
        );
        applicant.documents.push(document);
        self.close_upload_panel();
        Ok(())
    }

    /// Clear the panel and retire its ticket.
    fn close_upload_panel(&mut self) {
        self.document_name_draft.clear();
        self.pending_files = None;
        self.selected_applicant = None;
        self.last_selection = None;
        self.upload_generation += 1;
    }
}

/// Pure transition: consume a state and an action, return the next state.
pub fn reduce(mut state: RosterState, action: RosterAction) -> RosterState {
    state.dispatch(action);
    state
}
