use crate::domain::model::{ClearTarget, Listing};
use crate::utils::error::JobBoardError;

/// Menu actions that refuse to run against an empty store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedAction {
    Modify,
    Update,
    Delete,
}

impl GuardedAction {
    pub fn verb(&self) -> &'static str {
        match self {
            GuardedAction::Modify => "modify",
            GuardedAction::Update => "update",
            GuardedAction::Delete => "delete",
        }
    }
}

/// Everything a session step can report back to the user.
#[derive(Debug)]
pub enum Outcome<'a> {
    Added { title: &'a str },
    FieldCleared { title: &'a str, target: ClearTarget },
    Updated { title: &'a str },
    Deleted { title: &'a str },
    Listing(Listing<'a>),
    NothingToModify(GuardedAction),
    InvalidChoice,
    Exiting,
    Failed(&'a JobBoardError),
}

pub trait Presenter {
    fn render(&self, outcome: &Outcome<'_>) -> String;
}
