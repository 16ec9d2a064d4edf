pub mod reviews_page;
pub mod reviews_table;
