use anchor_lang::prelude::*;

#[error_code]
pub enum StackError {
    #[msg("Question topic must not be empty")]
    QuestionTopicEmpty,
    #[msg("Question topic is too long")]
    QuestionTopicTooLong,
    #[msg("Question body must not be empty")]
    QuestionBodyEmpty,
    #[msg("Question body is too long")]
    QuestionBodyTooLong,
    #[msg("Answer must not be empty")]
    AnswerEmpty,
    #[msg("Answer is too long")]
    AnswerTooLong,
    #[msg("Account already in use")]
    AccountAlreadyInUse,
    #[msg("Answer index does not match the question's answer count")]
    IndexMismatch,
    #[msg("Question not found")]
    QuestionNotFound,
    #[msg("Answer not found")]
    AnswerNotFound,
    #[msg("No valid bump found for the derived address")]
    AddressSpaceExhausted,
    #[msg("Answer count overflow")]
    AnswerCountOverflow,
}
