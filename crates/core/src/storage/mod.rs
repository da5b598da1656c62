mod error;
mod http_mapping;
pub mod keys;
mod repository;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use repository::{drain, EntityRepository, PageStream, DEFAULT_PAGE_SIZE};
pub use traits::TableStore;
pub use types::{key_item, Item, KeyQuery, Page, PARTITION_KEY_ATTR, SORT_KEY_ATTR};
