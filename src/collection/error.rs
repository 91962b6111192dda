use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("Movie '{0}' already exists in the collection.")]
    DuplicateTitle(String),
    #[error("Movie '{0}' was not found in the collection.")]
    NotFound(String),
}
