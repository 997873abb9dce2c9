pub mod planning;
pub mod profile;
pub mod report;
