//! Contact form validation
//!
//! Submissions are validated before they reach the store. Failures are
//! reported as a field-level error map, one message per invalid field, and
//! are never fatal.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::store::NewSubmission;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Per-field validation messages, keyed by the form's field names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub BTreeMap<&'static str, &'static str>);

/// Check a submission against the form's required-field and consent rules
pub fn validate(form: &NewSubmission) -> Result<(), ValidationErrors> {
    let mut errors = BTreeMap::new();

    if form.first_name.trim().is_empty() {
        errors.insert("firstName", "First name is required");
    }
    if form.last_name.trim().is_empty() {
        errors.insert("lastName", "Last name is required");
    }
    if !EMAIL_RE.is_match(form.email.trim()) {
        errors.insert("email", "Please enter a valid email address");
    }
    if form.project_type.trim().is_empty() {
        errors.insert("projectType", "Please select a project type");
    }
    if form.budget.trim().is_empty() {
        errors.insert("budget", "Please select a budget range");
    }
    if form.description.trim().is_empty() {
        errors.insert("description", "Project description is required");
    }
    if !form.agreed_to_terms {
        errors.insert("agreedToTerms", "You must agree to the terms and conditions");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
