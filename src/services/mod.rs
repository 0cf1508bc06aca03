pub mod answer_resolver;
pub mod document_assembler;
pub mod line_classifier;
pub mod options_normalizer;
pub mod segmenter;
pub mod text_cleaner;

pub use answer_resolver::{resolve_answer, strip_option_prefix};
pub use document_assembler::{assemble_subject, AcceptedQuestion};
pub use line_classifier::{classify_line, LineKind};
pub use options_normalizer::{normalize_options, normalize_question, normalize_subject};
pub use segmenter::segment;
pub use text_cleaner::clean_text;
