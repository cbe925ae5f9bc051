use anchor_lang::prelude::*;

use crate::constants::{MAX_ANSWER_LENGTH, MAX_BODY_LENGTH, MAX_TOPIC_LENGTH};
use crate::errors::StackError;

/// Limits on a new question. The handler runs this before it derives or
/// allocates anything.
pub fn validate_question(topic: &str, body: &str) -> Result<()> {
    require!(!topic.is_empty(), StackError::QuestionTopicEmpty);
    require!(topic.len() <= MAX_TOPIC_LENGTH, StackError::QuestionTopicTooLong);
    require!(!body.is_empty(), StackError::QuestionBodyEmpty);
    require!(body.len() <= MAX_BODY_LENGTH, StackError::QuestionBodyTooLong);
    Ok(())
}

pub fn validate_answer(body: &str) -> Result<()> {
    require!(!body.is_empty(), StackError::AnswerEmpty);
    require!(body.len() <= MAX_ANSWER_LENGTH, StackError::AnswerTooLong);
    Ok(())
}
