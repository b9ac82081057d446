pub mod api;
pub mod cli;
pub mod db;
mod serde_utils;
