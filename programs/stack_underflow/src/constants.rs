// PDA seeds
pub const QUESTION_SEED: &[u8] = b"QUESTION";
pub const ANSWER_SEED: &[u8] = b"ANSWER";

// Text limits, in bytes of UTF-8
pub const MAX_TOPIC_LENGTH: usize = 40;
pub const MAX_BODY_LENGTH: usize = 300;
pub const MAX_ANSWER_LENGTH: usize = 300;

// Anchor account discriminator
pub const DISCRIMINATOR_SIZE: usize = 8;

// Borsh length prefix of a String
pub const STRING_PREFIX_SIZE: usize = 4;
