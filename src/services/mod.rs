pub mod application_service;

pub use application_service::*;
