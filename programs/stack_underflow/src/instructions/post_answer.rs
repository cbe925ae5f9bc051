use anchor_lang::error::{Error, ErrorCode};
use anchor_lang::prelude::*;

use crate::constants::{ANSWER_SEED, QUESTION_SEED};
use crate::state::{answer_address, topic_seeds, Answer, Question};
use crate::utils::{allocate_pda, write_record};
use crate::validation::validate_answer;

#[derive(Accounts)]
pub struct PostAnswer<'info> {
    #[account(mut)]
    pub answer_author: Signer<'info>,

    /// CHECK: loaded by the handler so a missing question reports
    /// `QuestionNotFound`; its address is re-derived from the stored seeds.
    #[account(mut)]
    pub question: UncheckedAccount<'info>,

    /// CHECK: must be the ["ANSWER", question, expected_index] PDA; allocated
    /// by the handler once the index has been checked.
    #[account(mut)]
    pub answer: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PostAnswer>, answer_body: String, expected_index: u32) -> Result<()> {
    validate_answer(&answer_body)?;

    let question_key = ctx.accounts.question.key();
    let mut question = Question::load(&ctx.accounts.question)?;
    let [head, tail] = topic_seeds(&question.question_topic);
    let derived = Pubkey::create_program_address(
        &[
            QUESTION_SEED,
            head,
            tail,
            question.question_creator.as_ref(),
            &[question.bump],
        ],
        ctx.program_id,
    )
    .map_err(|_| Error::from(ErrorCode::ConstraintSeeds))?;
    require_keys_eq!(question_key, derived, ErrorCode::ConstraintSeeds);

    // Checked before anything is allocated, so a stale index never touches
    // the slot another answer already holds.
    let index = question.record_answer(expected_index)?;

    let (address, bump) = answer_address(ctx.program_id, &question_key, index)?;
    require_keys_eq!(ctx.accounts.answer.key(), address, ErrorCode::ConstraintSeeds);

    allocate_pda(
        &ctx.accounts.answer_author,
        &ctx.accounts.answer,
        &ctx.accounts.system_program,
        Answer::SIZE,
        &[ANSWER_SEED, question_key.as_ref(), &index.to_le_bytes(), &[bump]],
    )?;

    let author = ctx.accounts.answer_author.key();
    let mut answer = Answer::default();
    answer.initialize(author, question_key, index, answer_body, bump);
    write_record(&ctx.accounts.answer, &answer)?;
    write_record(&ctx.accounts.question, &question)?;

    msg!(
        "STACK_UNDERFLOW: Answer #{} to {} posted by {}, {} answers total",
        index,
        question_key,
        author,
        question.answer_count
    );

    Ok(())
}
