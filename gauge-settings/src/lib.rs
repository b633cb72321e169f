//! Settings search for Gauge
//!
//! Filters stored settings by request parameters. Numeric criteria are
//! checked with integer [`NumberValidator`](gauge_validation::NumberValidator)
//! rules before they are applied; when any criterion is invalid the search
//! falls back to the unfiltered list.
//!
//! ```
//! use gauge_settings::{MemoryStore, Setting, search};
//! use std::collections::HashMap;
//!
//! let store: MemoryStore = vec![
//!     Setting::new(1, "site_name").title("Site name"),
//!     Setting::new(2, "mail_from").title("Sender address").category(3),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut params = HashMap::new();
//! params.insert("cat_id".to_string(), "3".to_string());
//!
//! let page = search(&store, &params, 1).unwrap();
//! assert_eq!(page.data.len(), 1);
//! assert_eq!(page.data[0].name, "mail_from");
//! ```

pub mod error;
mod model;
pub mod pagination;
mod search;
mod store;

pub use error::{Result, SettingsError};
pub use model::Setting;
pub use pagination::{DEFAULT_PAGE_SIZE, Page, Pagination, PaginationMeta};
pub use search::{SettingsSearch, search};
pub use store::{MemoryStore, SettingsStore};
