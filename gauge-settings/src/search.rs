// Settings search criteria

use crate::{DEFAULT_PAGE_SIZE, Page, Pagination, Result, Setting, SettingsStore};
use gauge_validation::{FieldValue, NumberValidator, RuleSet, Subject, ValidationError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

static RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new().rule_for_fields(&["id", "status", "cat_id"], NumberValidator::integer())
});

/// Search criteria as received from a request.
///
/// Values are kept as raw strings until they pass validation; empty
/// parameters are treated as absent. `name` matches the setting key and
/// `label` matches its title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsSearch {
    pub id: Option<String>,
    pub status: Option<String>,
    pub cat_id: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,

    #[serde(skip)]
    errors: Vec<ValidationError>,
}

impl SettingsSearch {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let param = |key: &str| params.get(key).filter(|v| !v.is_empty()).cloned();

        Self {
            id: param("id"),
            status: param("status"),
            cat_id: param("cat_id"),
            name: param("name"),
            label: param("label"),
            errors: Vec::new(),
        }
    }

    /// Validate the criteria, replacing any earlier errors.
    pub fn validate(&mut self) -> Result<bool> {
        self.errors.clear();
        Ok(RULES.validate(self)?)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether a setting satisfies every criterion that is set.
    pub fn matches(&self, setting: &Setting) -> bool {
        equals(&self.id, setting.id)
            && equals(&self.status, setting.status)
            && equals(&self.cat_id, setting.cat_id)
            && contains(&self.name, &setting.name)
            && contains(&self.label, &setting.title)
    }

    /// Search the store, ordered by id.
    ///
    /// Criteria that fail validation do not filter: the unfiltered result
    /// set is returned and the errors are left on `self`.
    pub fn search<S>(&mut self, store: &S, pagination: Pagination) -> Result<Page<Setting>>
    where
        S: SettingsStore + ?Sized,
    {
        let mut settings = store.all()?;
        settings.sort_by_key(|setting| setting.id);

        if self.validate()? {
            settings.retain(|setting| self.matches(setting));
        } else {
            debug!(errors = self.errors.len(), "invalid search criteria, returning all settings");
        }

        Ok(Page::new(settings, pagination))
    }
}

fn equals(criterion: &Option<String>, actual: i64) -> bool {
    match criterion {
        Some(wanted) => wanted.trim().parse::<i64>().ok() == Some(actual),
        None => true,
    }
}

fn contains(criterion: &Option<String>, actual: &str) -> bool {
    match criterion {
        Some(needle) => actual.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

impl Subject for SettingsSearch {
    fn value(&self, field: &str) -> FieldValue {
        let value = match field {
            "id" => &self.id,
            "status" => &self.status,
            "cat_id" => &self.cat_id,
            "name" => &self.name,
            "label" => &self.label,
            _ => return FieldValue::Null,
        };
        value.clone().into()
    }

    fn label(&self, field: &str) -> String {
        match field {
            "id" => "ID".to_string(),
            "cat_id" => "Category".to_string(),
            other => gauge_validation::messages::humanize(other),
        }
    }

    fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}

/// Search `store` with request parameters, returning the given page of
/// [`DEFAULT_PAGE_SIZE`] settings.
pub fn search<S>(store: &S, params: &HashMap<String, String>, page: usize) -> Result<Page<Setting>>
where
    S: SettingsStore + ?Sized,
{
    SettingsSearch::from_params(params).search(store, Pagination::new(page, DEFAULT_PAGE_SIZE))
}
