//! Modal state and dismissal triggers.

use crate::features::history::state::HistoryView;
use crate::i18n::TranslationBundle;
use botwatch_api_models::UserRecord;
use std::rc::Rc;

/// Modal heading, resolved through the active locale at render time.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ModalTitle {
    /// No heading.
    #[default]
    Blank,
    /// Plain translation key.
    Key(&'static str),
    /// History browser heading for the named user.
    History {
        /// Display name substituted into the heading.
        name: String,
    },
}

impl ModalTitle {
    /// Heading in the active locale.
    #[must_use]
    pub fn resolve(&self, bundle: &TranslationBundle) -> String {
        match self {
            Self::Blank => String::new(),
            Self::Key(key) => bundle.text(key),
            Self::History { name } => bundle.format("modals.history_title", &[("name", name)]),
        }
    }
}

/// Body content of the modal.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ModalBody {
    /// Nothing to show.
    #[default]
    Empty,
    /// User details followed by media details.
    UserDetails(Rc<UserRecord>),
    /// Media details of a session.
    MediaDetails(Rc<UserRecord>),
    /// A user's download history browser; discarded when the modal closes.
    History(HistoryView),
}

/// Ways the user can dismiss the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    /// Explicit close button.
    CloseControl,
    /// Click on the backdrop outside the content panel.
    Backdrop,
    /// Cancellation key.
    CancelKey,
}

/// Whether a keyboard `key` value is the cancellation key.
#[must_use]
pub fn is_cancel_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Single shared modal.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
    open: bool,
    title: ModalTitle,
    body: ModalBody,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            open: false,
            title: ModalTitle::Blank,
            body: ModalBody::Empty,
        }
    }
}

impl ModalState {
    /// Show the overlay with new content, replacing whatever was open.
    pub fn open(&mut self, title: ModalTitle, body: ModalBody) {
        self.title = title;
        self.body = body;
        self.open = true;
    }

    /// Hide the overlay and drop its body. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
        self.body = ModalBody::Empty;
    }

    /// Handle a dismissal trigger.
    pub fn dismiss(&mut self, trigger: DismissTrigger) {
        match trigger {
            DismissTrigger::CloseControl | DismissTrigger::Backdrop | DismissTrigger::CancelKey => {
                self.close();
            }
        }
    }

    /// Whether the overlay is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Current heading.
    #[must_use]
    pub const fn title(&self) -> &ModalTitle {
        &self.title
    }

    /// Current body.
    #[must_use]
    pub const fn body(&self) -> &ModalBody {
        &self.body
    }

    /// The open history browser, if the modal shows one.
    pub fn history_mut(&mut self) -> Option<&mut HistoryView> {
        match &mut self.body {
            ModalBody::History(view) if self.open => Some(view),
            _ => None,
        }
    }
}
