pub mod document_source;
pub mod subject_sink;

pub use document_source::{DocumentSource, FolderSource, InMemorySource};
pub use subject_sink::{CollectingSink, JsonFolderSink, SubjectSink};
