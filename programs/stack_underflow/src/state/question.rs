use anchor_lang::prelude::*;

use crate::constants::{DISCRIMINATOR_SIZE, MAX_BODY_LENGTH, MAX_TOPIC_LENGTH, STRING_PREFIX_SIZE};
use crate::errors::StackError;

/// A question posted under a topic.
/// One per (creator, topic); the address is derived from both.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Question {
    /// The wallet that posted the question
    pub question_creator: Pubkey,
    /// Short text that, with the creator, keys the question
    pub question_topic: String,
    /// Question text
    pub question_body: String,
    /// Number of answers posted; also the index of the next answer
    pub answer_count: u32,
    /// PDA bump seed
    pub bump: u8,
}

impl Question {
    pub const SIZE: usize = DISCRIMINATOR_SIZE +
        32 +                                    // question_creator
        STRING_PREFIX_SIZE + MAX_TOPIC_LENGTH + // question_topic
        STRING_PREFIX_SIZE + MAX_BODY_LENGTH +  // question_body
        4 +                                     // answer_count
        1;                                      // bump
    // Total: 393 bytes

    pub fn initialize(&mut self, creator: Pubkey, topic: String, body: String, bump: u8) {
        self.question_creator = creator;
        self.question_topic = topic;
        self.question_body = body;
        self.answer_count = 0;
        self.bump = bump;
    }

    /// Read a question from its account. Anything other than a program-owned,
    /// allocated account is `QuestionNotFound`.
    pub fn load(account: &AccountInfo) -> Result<Self> {
        require!(
            account.owner == &crate::ID && !account.data_is_empty(),
            StackError::QuestionNotFound
        );
        let data = account.try_borrow_data()?;
        Self::try_deserialize(&mut &data[..])
    }

    /// Claim the next answer slot.
    ///
    /// Returns the index the answer must be stored under. A caller holding a
    /// stale count gets `IndexMismatch` and the counter is left untouched.
    pub fn record_answer(&mut self, expected_index: u32) -> Result<u32> {
        require_eq!(self.answer_count, expected_index, StackError::IndexMismatch);
        self.answer_count = self
            .answer_count
            .checked_add(1)
            .ok_or(StackError::AnswerCountOverflow)?;
        Ok(expected_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn question() -> Question {
        let mut question = Question::default();
        question.initialize(
            Pubkey::new_unique(),
            "What is a PDA?".to_string(),
            "I came across something called PDAs".to_string(),
            254,
        );
        question
    }

    #[test]
    fn test_initialize_starts_with_no_answers() {
        let question = question();
        assert_eq!(question.answer_count, 0);
        assert_eq!(question.question_topic, "What is a PDA?");
        assert_eq!(question.bump, 254);
    }

    #[test]
    fn test_record_answer_increments_by_one() {
        let mut question = question();
        assert_eq!(question.record_answer(0).unwrap(), 0);
        assert_eq!(question.record_answer(1).unwrap(), 1);
        assert_eq!(question.answer_count, 2);
    }

    #[test]
    fn test_record_answer_rejects_stale_index() {
        let mut question = question();
        question.record_answer(0).unwrap();

        assert_eq!(
            question.record_answer(0).unwrap_err(),
            Error::from(StackError::IndexMismatch)
        );
        assert_eq!(
            question.record_answer(5).unwrap_err(),
            Error::from(StackError::IndexMismatch)
        );
        assert_eq!(question.answer_count, 1);
    }

    #[test]
    fn test_record_answer_overflow() {
        let mut question = question();
        question.answer_count = u32::MAX;
        assert_eq!(
            question.record_answer(u32::MAX).unwrap_err(),
            Error::from(StackError::AnswerCountOverflow)
        );
        assert_eq!(question.answer_count, u32::MAX);
    }

    #[test]
    fn test_size_fits_largest_question() {
        let mut question = Question::default();
        question.initialize(
            Pubkey::new_unique(),
            "t".repeat(MAX_TOPIC_LENGTH),
            "b".repeat(MAX_BODY_LENGTH),
            255,
        );
        let mut data = Vec::new();
        question.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), Question::SIZE);
    }

    #[test]
    fn test_load_from_program_account() {
        let question = question();
        let mut data = Vec::new();
        question.try_serialize(&mut data).unwrap();
        data.resize(Question::SIZE, 0);

        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let owner = crate::ID;
        let account = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);
        assert_eq!(Question::load(&account).unwrap(), question);
    }

    #[test]
    fn test_load_missing_account() {
        let key = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let owner = anchor_lang::system_program::ID;
        let account = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);
        assert_eq!(
            Question::load(&account).unwrap_err(),
            Error::from(StackError::QuestionNotFound)
        );
    }

    #[test]
    fn test_load_foreign_account() {
        // Right size, wrong owner
        let mut data = vec![1u8; Question::SIZE];
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let owner = Pubkey::new_unique();
        let account = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);
        assert_eq!(
            Question::load(&account).unwrap_err(),
            Error::from(StackError::QuestionNotFound)
        );
    }
}
