mod fibrosis_stage;
mod identity;
mod patient;
mod role;
mod session;
mod view;
