use anchor_lang::prelude::*;
use solana_program::pubkey::MAX_SEED_LEN;

use crate::constants::{ANSWER_SEED, QUESTION_SEED};
use crate::errors::StackError;

/// Split a topic into the two seeds used for a question address.
///
/// The runtime caps each seed at 32 bytes, but the address hash runs over the
/// concatenation of all seeds, so `[head, tail]` derives the same address as
/// the raw topic bytes would. The tail is empty for topics of 32 bytes or less.
///
/// Bytes past the second seed are dropped so derivation never fails on an
/// oversized topic; such topics are rejected by validation.
pub fn topic_seeds(topic: &str) -> [&[u8]; 2] {
    let bytes = topic.as_bytes();
    let (head, rest) = bytes.split_at(bytes.len().min(MAX_SEED_LEN));
    [head, &rest[..rest.len().min(MAX_SEED_LEN)]]
}

/// Find the canonical address and bump for a set of seeds.
///
/// The bump is searched from 255 downwards until the address falls off the
/// ed25519 curve. Seeds the runtime refuses, or a search that runs out of
/// bumps, yield `AddressSpaceExhausted`.
pub fn derive_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| StackError::AddressSpaceExhausted.into())
}

/// Address of the question `creator` posted under `topic`.
/// Seeds: ["QUESTION", topic, creator]
pub fn question_address(program_id: &Pubkey, topic: &str, creator: &Pubkey) -> Result<(Pubkey, u8)> {
    let [head, tail] = topic_seeds(topic);
    derive_address(&[QUESTION_SEED, head, tail, creator.as_ref()], program_id)
}

/// Address of the answer at `index` under `question`.
/// Seeds: ["ANSWER", question, index (u32 LE)]
pub fn answer_address(program_id: &Pubkey, question: &Pubkey, index: u32) -> Result<(Pubkey, u8)> {
    derive_address(
        &[ANSWER_SEED, question.as_ref(), &index.to_le_bytes()],
        program_id,
    )
}
