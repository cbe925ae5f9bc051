use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

use crate::constants::QUESTION_SEED;
use crate::state::{question_address, topic_seeds, Question};
use crate::utils::{allocate_pda, write_record};
use crate::validation::validate_question;

#[derive(Accounts)]
pub struct CreateQuestion<'info> {
    #[account(mut)]
    pub question_authority: Signer<'info>,

    /// CHECK: must be the ["QUESTION", topic, question_authority] PDA; the
    /// handler checks the address and allocates it after validating the input.
    #[account(mut)]
    pub question: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateQuestion>, topic: String, body: String) -> Result<()> {
    validate_question(&topic, &body)?;

    let creator = ctx.accounts.question_authority.key();
    let (address, bump) = question_address(ctx.program_id, &topic, &creator)?;
    require_keys_eq!(ctx.accounts.question.key(), address, ErrorCode::ConstraintSeeds);

    let [head, tail] = topic_seeds(&topic);
    allocate_pda(
        &ctx.accounts.question_authority,
        &ctx.accounts.question,
        &ctx.accounts.system_program,
        Question::SIZE,
        &[QUESTION_SEED, head, tail, creator.as_ref(), &[bump]],
    )?;

    let mut question = Question::default();
    question.initialize(creator, topic, body, bump);
    write_record(&ctx.accounts.question, &question)?;

    msg!(
        "STACK_UNDERFLOW: Question {} created by {} under \"{}\"",
        address,
        creator,
        question.question_topic
    );

    Ok(())
}
