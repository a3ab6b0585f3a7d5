//! Shared fixtures for unit tests.

use serde_json::{Value, json};

use crate::resource::Validatable;

/// Minimal record with caller-controlled validation failures.
#[derive(Debug, Clone)]
pub(crate) struct Article {
    title: String,
    errors: Vec<String>,
}

impl Article {
    pub(crate) fn valid(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn invalid(errors: &[&str]) -> Self {
        Self {
            title: String::new(),
            errors: errors.iter().map(|error| (*error).to_owned()).collect(),
        }
    }
}

impl Validatable for Article {
    fn error_messages(&self) -> Vec<String> {
        self.errors.clone()
    }

    fn attributes(&self) -> Value {
        json!({ "title": self.title })
    }
}
