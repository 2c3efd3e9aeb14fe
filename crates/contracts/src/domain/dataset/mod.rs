//! Research dataset domain: the staged file set, the document shapes
//! served by the content store, and the chat transcript model.

pub mod documents;
pub mod staging;
pub mod transcript;
