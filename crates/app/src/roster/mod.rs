mod add_dialog;
mod applicant_card;
mod upload_panel;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUserPlus;
use dioxus_free_icons::Icon;
use shared_types::{RosterAction, RosterConfig, RosterState};
use shared_ui::components::{Button, ButtonVariant, PageHeader, Pagination};

use crate::downloads::DownloadHandles;
use add_dialog::AddApplicantDialog;
use applicant_card::{ApplicantCard, DocumentRow};
use upload_panel::UploadDraft;

/// The applicant roster: header, the current page of applicant cards,
/// pagination, and the add-applicant dialog.
///
/// All state lives in one `RosterState`; every input is turned into a
/// `RosterAction` and sent through `dispatch`, which also keeps the
/// download handles in step with the documents on the roster.
#[component]
pub fn ApplicantRoster(config: RosterConfig) -> Element {
    let initial = config.clone();
    let mut state = use_signal(move || RosterState::from_config(&initial));
    let mut downloads = use_signal(DownloadHandles::default);

    let dispatch = use_callback(move |action: RosterAction| {
        state.write().dispatch(action);
        downloads.write().sync(state.read().applicants());
    });

    let roster = state.read();
    let handles = downloads.read();
    let current_page = roster.current_page();
    let total_pages = roster.total_pages();

    rsx! {
        div { class: "roster",
            PageHeader { title: config.title.clone(),
                Button {
                    variant: ButtonVariant::Secondary,
                    class: "roster-add",
                    onclick: move |_| dispatch.call(RosterAction::ToggleAddDialog),
                    Icon::<LdUserPlus> { icon: LdUserPlus, width: 20, height: 20 }
                    "Add Applicant"
                }
            }
            hr { class: "roster-divider" }
            div { class: "roster-grid",
                for applicant in roster.page_window() {
                    ApplicantCard {
                        key: "{applicant.id}",
                        id: applicant.id,
                        name: applicant.name.clone(),
                        documents: DocumentRow::collect(applicant, &handles),
                        upload: if roster.is_uploading(applicant.id) {
                            UploadDraft::from_state(&roster)
                        } else {
                            None
                        },
                        dispatch,
                    }
                }
            }
            Pagination {
                current_page,
                total_pages,
                on_previous: move |_| dispatch.call(RosterAction::PrevPage),
                on_next: move |_| dispatch.call(RosterAction::NextPage),
            }
            AddApplicantDialog {
                open: roster.add_dialog_open(),
                draft: roster.applicant_name_draft().to_string(),
                dispatch,
            }
        }
    }
}
