use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Duplicate block id within page: {0}")]
    DuplicateBlockId(String),
}
