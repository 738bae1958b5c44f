pub mod presenter;
pub mod prompts;

use crate::core::store::JobStore;
use crate::domain::model::JobUpdate;
use crate::domain::ports::{GuardedAction, Outcome, Presenter};
use crate::utils::error::{JobBoardError, Result};
use prompts::{CandidateDraft, PromptStep, ADD_STEPS, UPDATE_STEPS};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    RemoveField,
    Update,
    Delete,
    List,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::RemoveField),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::List),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Line-oriented menu loop over any reader/writer pair.
///
/// The shell owns no jobs: the store is lent to [`Shell::run`] by the caller.
/// Prompts go to `output` unless a separate prompt writer is set, in which
/// case `output` carries rendered outcomes only.
pub struct Shell<R, W> {
    input: R,
    output: W,
    prompts: Option<Box<dyn Write>>,
    presenter: Box<dyn Presenter>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, presenter: Box<dyn Presenter>) -> Self {
        Self {
            input,
            output,
            prompts: None,
            presenter,
        }
    }

    pub fn with_prompt_writer(mut self, prompts: Box<dyn Write>) -> Self {
        self.prompts = Some(prompts);
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs menu rounds until the user exits or input ends.
    pub fn run(&mut self, store: &mut JobStore) -> Result<()> {
        loop {
            let Some(answer) = self.ask(&format!("{}\n", prompts::MENU))? else {
                tracing::debug!("input closed, leaving menu loop");
                break;
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(choice) => {
                    tracing::debug!(?choice, jobs = store.len(), "menu choice");
                    self.dispatch(choice, store)?
                }
                None => {
                    self.say(&Outcome::InvalidChoice)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice, store: &mut JobStore) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_job(store),
            MenuChoice::RemoveField => {
                if self.refuse_if_empty(store, GuardedAction::Modify)? {
                    return Ok(Flow::Continue);
                }
                self.remove_field(store)
            }
            MenuChoice::Update => {
                if self.refuse_if_empty(store, GuardedAction::Update)? {
                    return Ok(Flow::Continue);
                }
                self.update_job(store)
            }
            MenuChoice::Delete => {
                if self.refuse_if_empty(store, GuardedAction::Delete)? {
                    return Ok(Flow::Continue);
                }
                self.delete_job(store)
            }
            MenuChoice::List => {
                self.say(&Outcome::Listing(store.list()))?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => {
                self.say(&Outcome::Exiting)?;
                Ok(Flow::Exit)
            }
        }
    }

    fn refuse_if_empty(&mut self, store: &JobStore, action: GuardedAction) -> Result<bool> {
        if store.is_empty() {
            self.say(&Outcome::NothingToModify(action))?;
            return Ok(true);
        }
        Ok(false)
    }

    fn add_job(&mut self, store: &mut JobStore) -> Result<Flow> {
        let mut draft = CandidateDraft::default();
        for PromptStep { target, question } in ADD_STEPS {
            let Some(answer) = self.ask(question)? else {
                return Ok(Flow::Exit);
            };
            draft.record(target, answer);
        }

        let title = draft.title().to_string();
        match store.add(&draft.into_candidate()) {
            Ok(()) => {
                tracing::debug!(%title, "job added");
                self.say(&Outcome::Added { title: &title })?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_field(&mut self, store: &mut JobStore) -> Result<Flow> {
        let Some(title) = self.ask(prompts::REMOVE_TITLE)? else {
            return Ok(Flow::Exit);
        };
        if let Err(e) = store.find_by_title(&title) {
            self.report(e)?;
            return Ok(Flow::Continue);
        }

        let Some(field) = self.ask(&format!("{}\n", prompts::FIELD_CHOICE))? else {
            return Ok(Flow::Exit);
        };
        let company_field = if field == crate::domain::model::ClearTarget::COMPANY {
            let Some(sub) = self.ask(&format!("{}\n", prompts::COMPANY_FIELD_CHOICE))? else {
                return Ok(Flow::Exit);
            };
            Some(sub)
        } else {
            None
        };

        match store.clear_field(&title, &field, company_field.as_deref()) {
            Ok(target) => {
                tracing::debug!(%title, %target, "field cleared");
                self.say(&Outcome::FieldCleared {
                    title: &title,
                    target,
                })?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn update_job(&mut self, store: &mut JobStore) -> Result<Flow> {
        let Some(title) = self.ask(prompts::UPDATE_TITLE)? else {
            return Ok(Flow::Exit);
        };
        if let Err(e) = store.find_by_title(&title) {
            self.report(e)?;
            return Ok(Flow::Continue);
        }

        let mut update = JobUpdate::default();
        for PromptStep { target, question } in UPDATE_STEPS {
            let Some(answer) = self.ask(question)? else {
                return Ok(Flow::Exit);
            };
            prompts::record_update(&mut update, target, answer);
        }

        match store.update(&title, &update) {
            Ok(()) => {
                tracing::debug!(%title, unchanged = update.is_empty(), "job updated");
                self.say(&Outcome::Updated { title: &title })?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_job(&mut self, store: &mut JobStore) -> Result<Flow> {
        let Some(title) = self.ask(prompts::DELETE_TITLE)? else {
            return Ok(Flow::Exit);
        };

        match store.delete(&title) {
            Ok(_) => {
                tracing::debug!(%title, remaining = store.len(), "job deleted");
                self.say(&Outcome::Deleted { title: &title })?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    /// Writes `question` and reads one line. `None` means end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        match self.prompts.as_mut() {
            Some(prompts) => {
                write!(prompts, "{}", question)?;
                prompts.flush()?;
            }
            None => {
                write!(self.output, "{}", question)?;
                self.output.flush()?;
            }
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Renders recoverable errors and hands anything else back to the caller.
    fn report(&mut self, error: JobBoardError) -> Result<()> {
        if !error.is_recoverable() {
            return Err(error);
        }
        self.say(&Outcome::Failed(&error))
    }

    fn say(&mut self, outcome: &Outcome<'_>) -> Result<()> {
        if let Outcome::Failed(e) = outcome {
            tracing::debug!(error = %e, "operation rejected");
        }
        let rendered = self.presenter.render(outcome);
        writeln!(self.output, "{}", rendered)?;
        Ok(())
    }
}
