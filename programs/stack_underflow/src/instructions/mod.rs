pub mod create_question;
pub mod post_answer;

pub use create_question::*;
pub use post_answer::*;
