pub mod checks_table;
pub mod filter_bar;
pub mod pagination_controls;

pub use checks_table::ChecksTable;
pub use filter_bar::FilterBar;
pub use pagination_controls::PaginationControls;
