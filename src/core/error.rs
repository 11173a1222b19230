use super::id::{CollectionId, ItemId};

pub type Result<T> = std::result::Result<T, InteractionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// `update`/`end` arrived for a pointer that was never begun.
    NotTracking,
    /// Bad setup parameters; the only error surfaced to callers.
    InvalidConfiguration(String),
    /// The dragged item is no longer present in its source collection.
    StaleDragTarget {
        item: ItemId,
        collection: CollectionId,
    },
    /// A second pointer went down while a session was already active.
    ConcurrentGestureIgnored,
}

impl std::fmt::Display for InteractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionError::NotTracking => write!(f, "Pointer is not being tracked"),
            InteractionError::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            InteractionError::StaleDragTarget { item, collection } => {
                write!(f, "Stale drag target: {} is no longer in {}", item, collection)
            }
            InteractionError::ConcurrentGestureIgnored => {
                write!(f, "Concurrent gesture ignored")
            }
        }
    }
}

impl std::error::Error for InteractionError {}

impl InteractionError {
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        InteractionError::InvalidConfiguration(msg.into())
    }
}
