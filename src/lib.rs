pub mod app;
pub mod barcode;
pub mod config;
pub mod dates;
pub mod error;
pub mod foods;
pub mod goals;
pub mod meals;
pub mod nutrition;
pub mod recipes;
pub mod state;
pub mod storage;
pub mod store;
pub mod summary;
