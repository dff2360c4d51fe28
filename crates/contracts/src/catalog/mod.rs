pub mod filter;
pub mod pagination;
pub mod query;
pub mod state;
pub mod view;

pub use filter::{FilterGroup, FilterState};
pub use pagination::Pagination;
pub use query::CatalogQuery;
pub use state::CatalogState;
pub use view::{CatalogView, GridView, PageButton, ProductCard};
