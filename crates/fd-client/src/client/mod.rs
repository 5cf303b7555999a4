pub(crate) mod client;
pub(crate) mod diagnostics;
pub(crate) mod error;
pub(crate) mod image_upload;
pub(crate) mod login_response;
pub(crate) mod patients;
pub(crate) mod stats;

pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
pub use image_upload::ImageUpload;
pub use login_response::LoginResponse;
