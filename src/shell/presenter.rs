use crate::config::DisplayFormat;
use crate::domain::model::{ClearTarget, Job, Listing};
use crate::domain::ports::{Outcome, Presenter};
use serde_json::json;

/// Human-readable rendering, one message per outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl TextPresenter {
    fn render_listing(listing: &Listing<'_>) -> String {
        let jobs = match listing {
            Listing::Empty => return "No jobs found.".to_string(),
            Listing::Jobs(jobs) => jobs,
        };

        let mut out = String::from("Listing all jobs:");
        for (index, job) in jobs.iter().enumerate() {
            out.push_str(&format!("\n\nJob {}:\n", index + 1));
            out.push_str(&Self::render_job(job));
        }
        out
    }

    fn render_job(job: &Job) -> String {
        [
            format!("Title: {}", job.title),
            format!("Type: {}", job.r#type),
            format!("Description: {}", job.description),
            format!("Location: {}", job.location),
            format!("Salary: {}", job.salary),
            "Company:".to_string(),
            format!("  - Company name: {}", job.company.name),
            format!("  - Company description: {}", job.company.description),
            format!("  - Company Email: {}", job.company.contact_email),
            format!("  - Company Phone: {}", job.company.contact_phone),
        ]
        .join("\n")
    }
}

impl Presenter for TextPresenter {
    fn render(&self, outcome: &Outcome<'_>) -> String {
        match outcome {
            Outcome::Added { title } => format!("Job '{}' added successfully!", title),
            Outcome::FieldCleared {
                title,
                target: ClearTarget::Job(field),
            } => format!("Field '{}' has been removed from job '{}'.", field, title),
            Outcome::FieldCleared {
                title,
                target: ClearTarget::Company(field),
            } => format!(
                "Company field '{}' has been removed from job '{}'.",
                field, title
            ),
            Outcome::Updated { title } => format!("Job '{}' updated successfully!", title),
            Outcome::Deleted { title } => format!("Job '{}' deleted successfully.", title),
            Outcome::Listing(listing) => Self::render_listing(listing),
            Outcome::NothingToModify(action) => {
                format!("No jobs available to {}.", action.verb())
            }
            Outcome::InvalidChoice => "Invalid choice. Please try again.".to_string(),
            Outcome::Exiting => "Exiting the program...".to_string(),
            Outcome::Failed(error) => error.user_friendly_message(),
        }
    }
}

/// One JSON document per outcome, for scripted sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&self, outcome: &Outcome<'_>) -> String {
        let value = match outcome {
            Outcome::Added { title } => json!({"status": "ok", "event": "added", "title": title}),
            Outcome::FieldCleared { title, target } => json!({
                "status": "ok",
                "event": "field_cleared",
                "title": title,
                "field": target.to_string(),
            }),
            Outcome::Updated { title } => {
                json!({"status": "ok", "event": "updated", "title": title})
            }
            Outcome::Deleted { title } => {
                json!({"status": "ok", "event": "deleted", "title": title})
            }
            Outcome::Listing(listing) => json!({
                "status": "ok",
                "event": "listing",
                "empty": matches!(listing, Listing::Empty),
                "jobs": listing.jobs(),
            }),
            Outcome::NothingToModify(action) => json!({
                "status": "error",
                "event": "empty_store",
                "action": action.verb(),
            }),
            Outcome::InvalidChoice => json!({"status": "error", "event": "invalid_choice"}),
            Outcome::Exiting => json!({"status": "ok", "event": "exit"}),
            Outcome::Failed(error) => json!({
                "status": "error",
                "event": "failed",
                "message": error.to_string(),
                "suggestion": error.recovery_suggestion(),
            }),
        };
        value.to_string()
    }
}

pub fn presenter_for(format: DisplayFormat) -> Box<dyn Presenter> {
    match format {
        DisplayFormat::Text => Box::new(TextPresenter),
        DisplayFormat::Json => Box::new(JsonPresenter),
    }
}
