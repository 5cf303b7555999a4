pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;

pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileCredentialStore;
pub use memory_store::MemoryCredentialStore;

/// Key holding the bearer credential
pub const TOKEN_KEY: &str = "token";
/// Key holding the serialized identity snapshot written at login
pub const USER_KEY: &str = "user";

/// Durable key-value storage that outlives the process.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
