// Setting records

use serde::{Deserialize, Serialize};

/// A stored application setting.
///
/// `name` is the lookup key, `title` the human readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub id: i64,
    pub cat_id: i64,
    pub status: i64,
    pub name: String,
    pub title: String,
    pub value: String,
}

impl Setting {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            cat_id: 0,
            status: 1,
            name: name.into(),
            title: String::new(),
            value: String::new(),
        }
    }

    pub fn category(mut self, cat_id: i64) -> Self {
        self.cat_id = cat_id;
        self
    }

    pub fn status(mut self, status: i64) -> Self {
        self.status = status;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}
