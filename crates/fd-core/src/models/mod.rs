pub mod capability;
pub mod diagnostic;
pub mod fibrosis_stage;
pub mod identity;
pub mod patient;
pub mod role;
pub mod session;
pub mod statistics;
pub mod timestamp;
pub mod view;
