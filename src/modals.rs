//! Modal Visibility
//!
//! Independent show/hide flags for the four dialogs plus the success text.

use crate::flows::FlowOutcome;
use crate::models::ActionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Take,
    Complete,
    Contribute,
    Success,
}

impl ModalKind {
    pub const ALL: [ModalKind; 4] = [ModalKind::Take, ModalKind::Complete, ModalKind::Contribute, ModalKind::Success];

    /// DOM id of the dialog, kept stable for page stylesheets
    pub fn dom_id(self) -> &'static str {
        match self {
            ModalKind::Take => "takeModal",
            ModalKind::Complete => "completeModal",
            ModalKind::Contribute => "contributeModal",
            ModalKind::Success => "successModal",
        }
    }

    fn index(self) -> usize {
        match self {
            ModalKind::Take => 0,
            ModalKind::Complete => 1,
            ModalKind::Contribute => 2,
            ModalKind::Success => 3,
        }
    }
}

impl From<ActionKind> for ModalKind {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Take => ModalKind::Take,
            ActionKind::Complete => ModalKind::Complete,
            ActionKind::Contribute => ModalKind::Contribute,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessMessage {
    pub title: String,
    pub message: String,
}

impl SuccessMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSet {
    visible: [bool; 4],
    success: Option<SuccessMessage>,
}

impl ModalSet {
    pub fn is_visible(&self, kind: ModalKind) -> bool {
        self.visible[kind.index()]
    }

    pub fn open(&mut self, kind: ModalKind) {
        self.visible[kind.index()] = true;
    }

    pub fn close(&mut self, kind: ModalKind) {
        self.visible[kind.index()] = false;
    }

    /// Hide every dialog, whatever was open
    pub fn close_all(&mut self) {
        self.visible = [false; 4];
    }

    pub fn show_success(&mut self, message: SuccessMessage) {
        self.success = Some(message);
        self.open(ModalKind::Success);
    }

    pub fn success(&self) -> Option<&SuccessMessage> {
        self.success.as_ref()
    }

    /// Reflect a finished flow: on success close `origin` and show the
    /// overlay; otherwise leave everything as it is.
    ///
    /// Returns whether the flow succeeded.
    pub fn settle(&mut self, origin: Option<ModalKind>, outcome: &FlowOutcome) -> bool {
        match outcome {
            FlowOutcome::Succeeded(message) => {
                if let Some(kind) = origin {
                    self.close(kind);
                }
                self.show_success(message.clone());
                true
            }
            FlowOutcome::Rejected(_) | FlowOutcome::Failed(_) => false,
        }
    }
}
