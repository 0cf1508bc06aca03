pub mod category;
pub mod question;
pub mod record;

pub use category::Category;
pub use question::{Difficulty, DraftQuestion, ParsedQuestion, QuestionBlock, RawDocument};
pub use record::{ConversionSummary, LessonRecord, SubjectRecord};
