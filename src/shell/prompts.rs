use crate::domain::model::{CompanyField, JobField, JobUpdate};
use serde_json::{json, Map, Value};

pub const MENU: &str = "Select an option:\n1. Add Job\n2. Remove Job\n3. Update Job\n4. Delete Job\n5. List Jobs\n6. Exit";

pub const REMOVE_TITLE: &str = "Enter the title of the job you want to modify: ";
pub const UPDATE_TITLE: &str = "Enter the title of the job you want to update: ";
pub const DELETE_TITLE: &str = "Enter the title of the job you want to delete: ";
pub const FIELD_CHOICE: &str =
    "Which field do you want to remove? (title, type, description, location, salary, company)";
pub const COMPANY_FIELD_CHOICE: &str =
    "Which company field do you want to remove? (name, description, contactEmail, contactPhone)";

/// Where the answer to a prompt step lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTarget {
    Job(JobField),
    Company(CompanyField),
}

#[derive(Debug, Clone, Copy)]
pub struct PromptStep {
    pub target: StepTarget,
    pub question: &'static str,
}

const fn step(target: StepTarget, question: &'static str) -> PromptStep {
    PromptStep { target, question }
}

pub const ADD_STEPS: [PromptStep; 9] = [
    step(StepTarget::Job(JobField::Title), "Enter job title: "),
    step(StepTarget::Job(JobField::Type), "Enter job type (Full-Time/Part-Time): "),
    step(StepTarget::Job(JobField::Description), "Enter job description: "),
    step(StepTarget::Job(JobField::Location), "Enter job location: "),
    step(StepTarget::Job(JobField::Salary), "Enter job salary: "),
    step(StepTarget::Company(CompanyField::Name), "Enter company name: "),
    step(StepTarget::Company(CompanyField::Description), "Enter company description: "),
    step(StepTarget::Company(CompanyField::ContactEmail), "Enter company contact email: "),
    step(StepTarget::Company(CompanyField::ContactPhone), "Enter company contact phone: "),
];

pub const UPDATE_STEPS: [PromptStep; 9] = [
    step(StepTarget::Job(JobField::Title), "Enter new job title (or leave empty to skip): "),
    step(
        StepTarget::Job(JobField::Type),
        "Enter new job type (Full-Time/Part-Time) (or leave empty to skip): ",
    ),
    step(
        StepTarget::Job(JobField::Description),
        "Enter new job description (or leave empty to skip): ",
    ),
    step(StepTarget::Job(JobField::Location), "Enter new job location (or leave empty to skip): "),
    step(StepTarget::Job(JobField::Salary), "Enter new job salary (or leave empty to skip): "),
    step(
        StepTarget::Company(CompanyField::Name),
        "Enter new company name (or leave empty to skip): ",
    ),
    step(
        StepTarget::Company(CompanyField::Description),
        "Enter new company description (or leave empty to skip): ",
    ),
    step(
        StepTarget::Company(CompanyField::ContactEmail),
        "Enter new company contact email (or leave empty to skip): ",
    ),
    step(
        StepTarget::Company(CompanyField::ContactPhone),
        "Enter new company contact phone (or leave empty to skip): ",
    ),
];

/// Accumulates answers to `ADD_STEPS` into a candidate for `JobStore::add`.
#[derive(Debug, Clone, Default)]
pub struct CandidateDraft {
    job: Map<String, Value>,
    company: Map<String, Value>,
}

impl CandidateDraft {
    pub fn record(&mut self, target: StepTarget, answer: String) {
        match target {
            StepTarget::Job(field) => self.job.insert(field.as_str().to_string(), json!(answer)),
            StepTarget::Company(field) => {
                self.company.insert(field.as_str().to_string(), json!(answer))
            }
        };
    }

    pub fn title(&self) -> &str {
        self.job
            .get(JobField::Title.as_str())
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn into_candidate(self) -> Value {
        let mut job = self.job;
        job.insert("company".to_string(), Value::Object(self.company));
        Value::Object(job)
    }
}

/// Blank answers are skipped rather than recorded.
pub fn record_update(update: &mut JobUpdate, target: StepTarget, answer: String) {
    if answer.is_empty() {
        return;
    }
    match target {
        StepTarget::Job(field) => update.set(field, answer),
        StepTarget::Company(field) => update.company.set(field, answer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_steps_cover_every_required_key() {
        let mut draft = CandidateDraft::default();
        for step in ADD_STEPS {
            draft.record(step.target, String::new());
        }
        let candidate = draft.into_candidate();

        for key in crate::domain::model::Job::REQUIRED_FIELDS {
            assert!(candidate.get(key).is_some(), "missing {}", key);
        }
        for key in crate::domain::model::Company::REQUIRED_FIELDS {
            assert!(candidate["company"].get(key).is_some(), "missing company.{}", key);
        }
    }

    #[test]
    fn test_draft_title() {
        let mut draft = CandidateDraft::default();
        assert_eq!(draft.title(), "");
        draft.record(StepTarget::Job(JobField::Title), "Engineer".to_string());
        assert_eq!(draft.title(), "Engineer");
    }

    #[test]
    fn test_record_update_skips_blank() {
        let mut update = JobUpdate::default();
        record_update(&mut update, StepTarget::Job(JobField::Salary), String::new());
        record_update(
            &mut update,
            StepTarget::Company(CompanyField::Name),
            "Initech".to_string(),
        );
        assert!(update.salary.is_none());
        assert_eq!(update.company.name.as_deref(), Some("Initech"));
    }
}
