use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::errors::StackError;
use crate::state::{answer_address, Answer, Question};

/// Raw account lookup by address, backed by whatever transport the caller
/// owns (an RPC client, a bank snapshot, ...).
pub trait AccountReader {
    /// Returns the account data, or `None` if no account lives at `address`.
    fn account_data(&self, address: &Pubkey) -> Option<Vec<u8>>;
}

/// Fetch and decode the question at `address`.
pub fn get_question<R: AccountReader + ?Sized>(reader: &R, address: &Pubkey) -> Result<Question> {
    let data = reader
        .account_data(address)
        .ok_or_else(|| Error::from(StackError::QuestionNotFound))?;
    Question::try_deserialize(&mut data.as_slice())
}

pub fn get_answer<R: AccountReader + ?Sized>(reader: &R, address: &Pubkey) -> Result<Answer> {
    let data = reader
        .account_data(address)
        .ok_or_else(|| Error::from(StackError::AnswerNotFound))?;
    Answer::try_deserialize(&mut data.as_slice())
}

/// All answers to a question, in index order.
pub fn get_answers<R: AccountReader + ?Sized>(
    reader: &R,
    program_id: &Pubkey,
    question: &Pubkey,
) -> Result<Vec<Answer>> {
    let answer_count = get_question(reader, question)?.answer_count;
    (0..answer_count)
        .map(|index| {
            let (address, _) = answer_address(program_id, question, index)?;
            get_answer(reader, &address)
        })
        .collect()
}
