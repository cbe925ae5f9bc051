use anchor_lang::prelude::*;

use crate::constants::{DISCRIMINATOR_SIZE, MAX_ANSWER_LENGTH, STRING_PREFIX_SIZE};

/// An answer to a question. Never modified after it is posted.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Answer {
    /// The wallet that posted the answer
    pub author: Pubkey,
    /// Address of the question being answered
    pub question: Pubkey,
    /// Position among the question's answers, starting at 0
    pub index: u32,
    /// Answer text
    pub body: String,
    /// PDA bump seed
    pub bump: u8,
}

impl Answer {
    pub const SIZE: usize = DISCRIMINATOR_SIZE +
        32 +                                    // author
        32 +                                    // question
        4 +                                     // index
        STRING_PREFIX_SIZE + MAX_ANSWER_LENGTH + // body
        1;                                      // bump
    // Total: 381 bytes

    pub fn initialize(&mut self, author: Pubkey, question: Pubkey, index: u32, body: String, bump: u8) {
        self.author = author;
        self.question = question;
        self.index = index;
        self.body = body;
        self.bump = bump;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_fits_largest_answer() {
        let mut answer = Answer::default();
        answer.initialize(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            u32::MAX,
            "a".repeat(MAX_ANSWER_LENGTH),
            255,
        );
        let mut data = Vec::new();
        answer.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), Answer::SIZE);
    }

    #[test]
    fn test_serialized_answer_reads_back() {
        let mut answer = Answer::default();
        answer.initialize(Pubkey::new_unique(), Pubkey::new_unique(), 3, "Seeds".to_string(), 250);

        let mut data = Vec::new();
        answer.try_serialize(&mut data).unwrap();
        data.resize(Answer::SIZE, 0);

        let decoded = Answer::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded, answer);
    }
}
