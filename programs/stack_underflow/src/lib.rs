use anchor_lang::prelude::*;

pub mod client;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;
pub mod validation;

use instructions::*;

declare_id!("GSKUuDySaKJbVUiHqBa2yLpbVXLL2yZCvcp3oks9jLCL");

#[program]
pub mod stack_underflow {
    use super::*;

    /// Post a question under a topic. One question per (author, topic).
    pub fn create_question(ctx: Context<CreateQuestion>, topic: String, body: String) -> Result<()> {
        instructions::create_question::handler(ctx, topic, body)
    }

    /// Post the next answer to a question.
    ///
    /// `expected_index` must equal the question's current answer count; a stale
    /// value is rejected so the caller can re-read the question and retry.
    pub fn post_answer(
        ctx: Context<PostAnswer>,
        answer_body: String,
        expected_index: u32,
    ) -> Result<()> {
        instructions::post_answer::handler(ctx, answer_body, expected_index)
    }
}
