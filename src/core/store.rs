use crate::domain::model::{ClearTarget, Company, CompanyField, Job, JobField, JobUpdate, Listing};
use crate::utils::error::{JobBoardError, Result};
use crate::utils::validation::{validate_required_keys, value_as_text};
use serde_json::Value;

/// In-memory, insertion-ordered collection of jobs.
///
/// Titles are not required to be unique; every lookup acts on the first job
/// whose title matches exactly.
#[derive(Debug, Clone, Default)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Validates key presence on `candidate` and appends it as a new job.
    pub fn add(&mut self, candidate: &Value) -> Result<()> {
        let job = Self::validate_candidate(candidate)?;
        self.jobs.push(job);
        Ok(())
    }

    fn validate_candidate(candidate: &Value) -> Result<Job> {
        let object = candidate
            .as_object()
            .ok_or_else(|| JobBoardError::ValidationError {
                field: "job".to_string(),
            })?;

        let scalar_keys = JobField::ALL.map(|field| field.as_str());
        validate_required_keys(object, &scalar_keys, "")?;

        let company = object
            .get("company")
            .and_then(Value::as_object)
            .ok_or_else(|| JobBoardError::ValidationError {
                field: "company".to_string(),
            })?;
        let company_keys = CompanyField::ALL.map(|field| field.as_str());
        validate_required_keys(company, &company_keys, "company.")?;

        let text = |map: &serde_json::Map<String, Value>, field: &str| {
            map.get(field).map(value_as_text).unwrap_or_default()
        };

        Ok(Job {
            title: text(object, JobField::Title.as_str()),
            r#type: text(object, JobField::Type.as_str()),
            description: text(object, JobField::Description.as_str()),
            location: text(object, JobField::Location.as_str()),
            salary: text(object, JobField::Salary.as_str()),
            company: Company {
                name: text(company, CompanyField::Name.as_str()),
                description: text(company, CompanyField::Description.as_str()),
                contact_email: text(company, CompanyField::ContactEmail.as_str()),
                contact_phone: text(company, CompanyField::ContactPhone.as_str()),
            },
        })
    }

    pub fn find_by_title(&self, title: &str) -> Result<&Job> {
        self.jobs
            .iter()
            .find(|job| job.title == title)
            .ok_or_else(|| not_found(title))
    }

    pub fn find_by_title_mut(&mut self, title: &str) -> Result<&mut Job> {
        self.jobs
            .iter_mut()
            .find(|job| job.title == title)
            .ok_or_else(|| not_found(title))
    }

    /// Sets one field of the first matching job to the empty string.
    ///
    /// `company_field` is only consulted when `field` is `"company"`.
    pub fn clear_field(&mut self, title: &str, field: &str, company_field: Option<&str>) -> Result<ClearTarget> {
        let job = self.find_by_title_mut(title)?;
        let target = ClearTarget::parse(field, company_field)?;
        job.clear(target);
        Ok(target)
    }

    /// Overwrites the fields `update` carries non-empty values for.
    pub fn update(&mut self, title: &str, update: &JobUpdate) -> Result<()> {
        self.find_by_title_mut(title)?.apply(update);
        Ok(())
    }

    pub fn delete(&mut self, title: &str) -> Result<Job> {
        let index = self
            .jobs
            .iter()
            .position(|job| job.title == title)
            .ok_or_else(|| not_found(title))?;
        Ok(self.jobs.remove(index))
    }

    pub fn list(&self) -> Listing<'_> {
        if self.jobs.is_empty() {
            Listing::Empty
        } else {
            Listing::Jobs(&self.jobs)
        }
    }

    /// Adds every candidate of a JSON array, stopping at the first invalid one.
    ///
    /// Jobs added before the failure stay in the store.
    pub fn load_seed(&mut self, candidates: &Value) -> Result<usize> {
        let items = candidates
            .as_array()
            .ok_or_else(|| JobBoardError::ConfigError {
                message: "seed data must be a JSON array of jobs".to_string(),
            })?;

        for (index, candidate) in items.iter().enumerate() {
            self.add(candidate).map_err(|e| match e {
                JobBoardError::ValidationError { field } => JobBoardError::ValidationError {
                    field: format!("[{}].{}", index, field),
                },
                other => other,
            })?;
        }

        Ok(items.len())
    }
}

fn not_found(title: &str) -> JobBoardError {
    JobBoardError::NotFoundError {
        title: title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(title: &str) -> Value {
        json!({
            "title": title,
            "type": "Full-Time",
            "description": "D",
            "location": "NYC",
            "salary": "100k",
            "company": {
                "name": "Acme",
                "description": "C",
                "contactEmail": "a@a.com",
                "contactPhone": "555"
            }
        })
    }

    fn store_with(titles: &[&str]) -> JobStore {
        let mut store = JobStore::new();
        for title in titles {
            store.add(&candidate(title)).unwrap();
        }
        store
    }

    #[test]
    fn test_add_appends_in_order() {
        let store = store_with(&["Engineer", "Designer"]);
        let titles: Vec<&str> = store.list().jobs().iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Engineer", "Designer"]);
    }

    #[test]
    fn test_add_accepts_empty_strings() {
        let mut store = JobStore::new();
        let mut blank = candidate("");
        blank["company"]["contactPhone"] = json!("");
        assert!(store.add(&blank).is_ok());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_rejects_each_missing_key() {
        for key in Job::REQUIRED_FIELDS {
            let mut store = JobStore::new();
            let mut c = candidate("Engineer");
            c.as_object_mut().unwrap().remove(key);
            assert!(
                matches!(store.add(&c), Err(JobBoardError::ValidationError { .. })),
                "missing {} should be rejected",
                key
            );
            assert!(store.is_empty());
        }

        for key in Company::REQUIRED_FIELDS {
            let mut store = JobStore::new();
            let mut c = candidate("Engineer");
            c["company"].as_object_mut().unwrap().remove(key);
            match store.add(&c) {
                Err(JobBoardError::ValidationError { field }) => {
                    assert_eq!(field, format!("company.{}", key))
                }
                other => panic!("expected validation error for {}, got {:?}", key, other),
            }
            assert!(store.is_empty());
        }
    }

    #[test]
    fn test_add_rejects_non_object_company() {
        let mut store = JobStore::new();
        let mut c = candidate("Engineer");
        c["company"] = json!("Acme");
        assert!(matches!(
            store.add(&c),
            Err(JobBoardError::ValidationError { field }) if field == "company"
        ));
    }

    #[test]
    fn test_add_turns_non_string_values_into_text() {
        let mut store = JobStore::new();
        let mut c = candidate("Engineer");
        c["salary"] = json!(100000);
        c["location"] = json!(null);
        c["company"]["contactPhone"] = json!(5550100);

        store.add(&c).unwrap();

        let job = store.find_by_title("Engineer").unwrap();
        assert_eq!(job.salary, "100000");
        assert_eq!(job.location, "");
        assert_eq!(job.company.contact_phone, "5550100");
    }

    #[test]
    fn test_duplicate_titles_act_on_first_match() {
        let mut store = store_with(&["Engineer", "Engineer"]);
        store.clear_field("Engineer", "salary", None).unwrap();

        let jobs = store.list().jobs();
        assert_eq!(jobs[0].salary, "");
        assert_eq!(jobs[1].salary, "100k");

        store.delete("Engineer").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_title("Engineer").unwrap().salary, "100k");
    }

    #[test]
    fn test_find_by_title_is_case_sensitive() {
        let store = store_with(&["Engineer"]);
        assert!(store.find_by_title("Engineer").is_ok());
        assert!(matches!(
            store.find_by_title("engineer"),
            Err(JobBoardError::NotFoundError { .. })
        ));
    }

    #[test]
    fn test_find_by_title_mut_is_live() {
        let mut store = store_with(&["Engineer"]);
        store.find_by_title_mut("Engineer").unwrap().location = "Remote".to_string();
        assert_eq!(store.find_by_title("Engineer").unwrap().location, "Remote");
    }

    #[test]
    fn test_clear_field_reports_target() {
        let mut store = store_with(&["Engineer"]);
        let target = store.clear_field("Engineer", "company", Some("name")).unwrap();
        assert_eq!(target, ClearTarget::Company(CompanyField::Name));

        let target = store.clear_field("Engineer", "type", None).unwrap();
        assert_eq!(target, ClearTarget::Job(JobField::Type));
    }

    #[test]
    fn test_clear_field_not_found_wins_over_invalid_field() {
        let mut store = store_with(&["Engineer"]);
        assert!(matches!(
            store.clear_field("Designer", "bonus", None),
            Err(JobBoardError::NotFoundError { .. })
        ));
    }

    #[test]
    fn test_clear_field_invalid_leaves_job_untouched() {
        let mut store = store_with(&["Engineer"]);
        let before = store.find_by_title("Engineer").unwrap().clone();

        assert!(matches!(
            store.clear_field("Engineer", "bonus", None),
            Err(JobBoardError::InvalidFieldError { .. })
        ));
        assert!(matches!(
            store.clear_field("Engineer", "company", Some("website")),
            Err(JobBoardError::InvalidFieldError { .. })
        ));

        assert_eq!(store.find_by_title("Engineer").unwrap(), &before);
    }

    #[test]
    fn test_update_can_rename() {
        let mut store = store_with(&["Engineer"]);
        let update = JobUpdate {
            title: Some("Senior Engineer".to_string()),
            ..Default::default()
        };
        store.update("Engineer", &update).unwrap();

        assert!(store.find_by_title("Engineer").is_err());
        assert!(store.find_by_title("Senior Engineer").is_ok());
    }

    #[test]
    fn test_delete_preserves_order_of_rest() {
        let mut store = store_with(&["A", "B", "C"]);
        let removed = store.delete("B").unwrap();
        assert_eq!(removed.title, "B");

        let titles: Vec<&str> = store.list().jobs().iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_load_seed_reports_index() {
        let mut store = JobStore::new();
        let mut bad = candidate("Broken");
        bad.as_object_mut().unwrap().remove("salary");
        let seed = json!([candidate("Engineer"), bad]);

        match store.load_seed(&seed) {
            Err(JobBoardError::ValidationError { field }) => assert_eq!(field, "[1].salary"),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_seed_requires_array() {
        let mut store = JobStore::new();
        assert!(matches!(
            store.load_seed(&candidate("Engineer")),
            Err(JobBoardError::ConfigError { .. })
        ));
    }
}
