//! Interactive assessment module
//!
//! Provides a line-editor based questionnaire and result browser.

mod command;
mod repl;

pub use command::{QuestionCommand, ResultCommand, resolve_model};
pub use repl::AssessmentRepl;
