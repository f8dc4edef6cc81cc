pub mod error;
pub mod layout;
pub mod measure;
pub mod model;
pub mod report;
pub mod store;
pub mod typography;
