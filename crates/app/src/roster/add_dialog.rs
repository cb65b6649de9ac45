use dioxus::prelude::*;
use shared_types::RosterAction;
use shared_ui::components::{
    Button, ButtonVariant, DialogContent, DialogFooter, DialogRoot, DialogTitle, Input,
};

/// Modal with a single name field. Dismissing the dialog counts as Cancel.
#[component]
pub fn AddApplicantDialog(open: bool, draft: String, dispatch: Callback<RosterAction>) -> Element {
    rsx! {
        DialogRoot {
            open,
            on_open_change: move |open: bool| {
                if !open {
                    dispatch.call(RosterAction::CancelAdd);
                }
            },
            DialogContent {
                DialogTitle { "Add New Applicant" }
                Input {
                    value: draft,
                    placeholder: "Enter applicant name",
                    on_input: move |evt: FormEvent| {
                        dispatch.call(RosterAction::EditApplicantName(evt.value().to_string()))
                    },
                }
                DialogFooter {
                    Button {
                        variant: ButtonVariant::Success,
                        onclick: move |_| dispatch.call(RosterAction::ConfirmAdd),
                        "Save"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| dispatch.call(RosterAction::CancelAdd),
                        "Cancel"
                    }
                }
            }
        }
    }
}
