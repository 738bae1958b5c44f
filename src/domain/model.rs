use crate::utils::error::{JobBoardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub description: String,
    pub contact_email: String,
    pub contact_phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    /// Usually "Full-Time" or "Part-Time", but any text is accepted.
    pub r#type: String,
    pub description: String,
    pub location: String,
    /// Free text, never parsed as a number.
    pub salary: String,
    pub company: Company,
}

impl Job {
    pub const REQUIRED_FIELDS: [&'static str; 6] =
        ["title", "type", "description", "location", "salary", "company"];

    fn field_mut(&mut self, field: JobField) -> &mut String {
        match field {
            JobField::Title => &mut self.title,
            JobField::Type => &mut self.r#type,
            JobField::Description => &mut self.description,
            JobField::Location => &mut self.location,
            JobField::Salary => &mut self.salary,
        }
    }

    /// Blanks the targeted field. The key stays present.
    pub fn clear(&mut self, target: ClearTarget) {
        match target {
            ClearTarget::Job(field) => self.field_mut(field).clear(),
            ClearTarget::Company(field) => self.company.field_mut(field).clear(),
        }
    }

    /// Overwrites every field the update carries a non-empty value for.
    pub fn apply(&mut self, update: &JobUpdate) {
        for field in JobField::ALL {
            if let Some(value) = non_blank(update.get(field)) {
                *self.field_mut(field) = value.to_string();
            }
        }
        for field in CompanyField::ALL {
            if let Some(value) = non_blank(update.company.get(field)) {
                *self.company.field_mut(field) = value.to_string();
            }
        }
    }
}

impl Company {
    pub const REQUIRED_FIELDS: [&'static str; 4] =
        ["name", "description", "contactEmail", "contactPhone"];

    fn field_mut(&mut self, field: CompanyField) -> &mut String {
        match field {
            CompanyField::Name => &mut self.name,
            CompanyField::Description => &mut self.description,
            CompanyField::ContactEmail => &mut self.contact_email,
            CompanyField::ContactPhone => &mut self.contact_phone,
        }
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Read-only view of the store contents, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a> {
    Empty,
    Jobs(&'a [Job]),
}

impl<'a> Listing<'a> {
    pub fn jobs(&self) -> &'a [Job] {
        match *self {
            Listing::Empty => &[],
            Listing::Jobs(jobs) => jobs,
        }
    }
}

/// Scalar job fields that can be cleared or updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Title,
    Type,
    Description,
    Location,
    Salary,
}

impl JobField {
    pub const ALL: [JobField; 5] = [
        JobField::Title,
        JobField::Type,
        JobField::Description,
        JobField::Location,
        JobField::Salary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Type => "type",
            JobField::Description => "description",
            JobField::Location => "location",
            JobField::Salary => "salary",
        }
    }
}

impl FromStr for JobField {
    type Err = JobBoardError;

    fn from_str(s: &str) -> Result<Self> {
        JobField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| JobBoardError::InvalidFieldError {
                field: s.to_string(),
            })
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    Name,
    Description,
    ContactEmail,
    ContactPhone,
}

impl CompanyField {
    pub const ALL: [CompanyField; 4] = [
        CompanyField::Name,
        CompanyField::Description,
        CompanyField::ContactEmail,
        CompanyField::ContactPhone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyField::Name => "name",
            CompanyField::Description => "description",
            CompanyField::ContactEmail => "contactEmail",
            CompanyField::ContactPhone => "contactPhone",
        }
    }
}

impl FromStr for CompanyField {
    type Err = JobBoardError;

    fn from_str(s: &str) -> Result<Self> {
        CompanyField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| JobBoardError::InvalidFieldError {
                field: format!("company.{}", s),
            })
    }
}

impl fmt::Display for CompanyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which field a removal blanks out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    Job(JobField),
    Company(CompanyField),
}

impl ClearTarget {
    /// The name that selects the second-level company choice.
    pub const COMPANY: &'static str = "company";

    pub fn parse(field: &str, company_field: Option<&str>) -> Result<Self> {
        if field == Self::COMPANY {
            let sub = company_field.ok_or_else(|| JobBoardError::InvalidFieldError {
                field: "company (no company field given)".to_string(),
            })?;
            return Ok(ClearTarget::Company(sub.parse()?));
        }
        Ok(ClearTarget::Job(field.parse()?))
    }
}

impl fmt::Display for ClearTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearTarget::Job(field) => write!(f, "{}", field),
            ClearTarget::Company(field) => write!(f, "company.{}", field),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl CompanyUpdate {
    pub fn get(&self, field: CompanyField) -> Option<&String> {
        match field {
            CompanyField::Name => self.name.as_ref(),
            CompanyField::Description => self.description.as_ref(),
            CompanyField::ContactEmail => self.contact_email.as_ref(),
            CompanyField::ContactPhone => self.contact_phone.as_ref(),
        }
    }

    pub fn set(&mut self, field: CompanyField, value: String) {
        let slot = match field {
            CompanyField::Name => &mut self.name,
            CompanyField::Description => &mut self.description,
            CompanyField::ContactEmail => &mut self.contact_email,
            CompanyField::ContactPhone => &mut self.contact_phone,
        };
        *slot = Some(value);
    }
}

/// Sparse set of new values. Absent and empty values leave the job untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub r#type: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub company: CompanyUpdate,
}

impl JobUpdate {
    pub fn get(&self, field: JobField) -> Option<&String> {
        match field {
            JobField::Title => self.title.as_ref(),
            JobField::Type => self.r#type.as_ref(),
            JobField::Description => self.description.as_ref(),
            JobField::Location => self.location.as_ref(),
            JobField::Salary => self.salary.as_ref(),
        }
    }

    pub fn set(&mut self, field: JobField, value: String) {
        let slot = match field {
            JobField::Title => &mut self.title,
            JobField::Type => &mut self.r#type,
            JobField::Description => &mut self.description,
            JobField::Location => &mut self.location,
            JobField::Salary => &mut self.salary,
        };
        *slot = Some(value);
    }

    /// True when applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        JobField::ALL
            .into_iter()
            .all(|field| non_blank(self.get(field)).is_none())
            && CompanyField::ALL
                .into_iter()
                .all(|field| non_blank(self.company.get(field)).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        Job {
            title: "Engineer".to_string(),
            r#type: "Full-Time".to_string(),
            description: "D".to_string(),
            location: "NYC".to_string(),
            salary: "100k".to_string(),
            company: Company {
                name: "Acme".to_string(),
                description: "C".to_string(),
                contact_email: "a@a.com".to_string(),
                contact_phone: "555".to_string(),
            },
        }
    }

    #[test]
    fn test_serializes_with_original_key_names() {
        let value = serde_json::to_value(sample_job()).unwrap();
        assert_eq!(value["type"], "Full-Time");
        assert_eq!(value["company"]["contactEmail"], "a@a.com");
        assert_eq!(value["company"]["contactPhone"], "555");
    }

    #[test]
    fn test_parse_clear_target() {
        assert_eq!(
            ClearTarget::parse("salary", None).unwrap(),
            ClearTarget::Job(JobField::Salary)
        );
        assert_eq!(
            ClearTarget::parse("company", Some("contactEmail")).unwrap(),
            ClearTarget::Company(CompanyField::ContactEmail)
        );
        assert!(ClearTarget::parse("company", None).is_err());
        assert!(ClearTarget::parse("company", Some("email")).is_err());
        assert!(ClearTarget::parse("Salary", None).is_err());
        assert!(ClearTarget::parse("bonus", None).is_err());
    }

    #[test]
    fn test_apply_skips_blank_values() {
        let mut job = sample_job();
        let update = JobUpdate {
            description: Some("X".to_string()),
            location: Some(String::new()),
            company: CompanyUpdate {
                contact_phone: Some("777".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        job.apply(&update);

        assert_eq!(job.description, "X");
        assert_eq!(job.location, "NYC");
        assert_eq!(job.company.contact_phone, "777");
        assert_eq!(job.company.name, "Acme");
    }

    #[test]
    fn test_update_is_empty() {
        let mut update = JobUpdate::default();
        assert!(update.is_empty());
        update.set(JobField::Salary, String::new());
        assert!(update.is_empty());
        update.company.set(CompanyField::Name, "Initech".to_string());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_partial_update_from_json() {
        let update: JobUpdate =
            serde_json::from_str(r#"{"type": "Part-Time", "company": {"contactEmail": "b@b.com"}}"#)
                .unwrap();
        assert_eq!(update.r#type.as_deref(), Some("Part-Time"));
        assert_eq!(update.company.contact_email.as_deref(), Some("b@b.com"));
        assert!(update.title.is_none());
    }
}
