pub mod list;
pub mod store;
pub mod view;
