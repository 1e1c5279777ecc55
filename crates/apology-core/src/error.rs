use crate::scene::{ObjectId, ObjectKind};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    #[error("no scene object with id {0}")]
    UnknownObject(ObjectId),
    #[error("scene object {id} ({kind:?}) does not react to clicks")]
    NotInteractive { id: ObjectId, kind: ObjectKind },
}
