//! Loading of externally maintained configuration data.

mod error;
mod filter_list;

pub use error::RepositoryError;
pub use filter_list::{FilterListRepository, FilterListRepositoryTrait, FilterListService};
