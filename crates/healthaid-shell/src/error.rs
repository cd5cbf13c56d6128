use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// A composition site read identity through a scope that was never given the store.
    #[error("identity store not initialized: `{site}` was mounted outside the store's scope")]
    StoreNotInitialized { site: &'static str },
}
