//! UI Components
//!
//! Leptos components for the creation form and the four dialogs.

mod modal_frame;
mod map_picker;
mod issue_form;
mod take_modal;
mod complete_modal;
mod contribute_modal;
mod success_modal;

pub use modal_frame::ModalFrame;
pub use map_picker::MapPicker;
pub use issue_form::IssueForm;
pub use take_modal::TakeModal;
pub use complete_modal::CompleteModal;
pub use contribute_modal::ContributeModal;
pub use success_modal::SuccessModal;
