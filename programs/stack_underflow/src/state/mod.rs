pub mod answer;
pub mod pda;
pub mod question;

pub use answer::*;
pub use pda::*;
pub use question::*;
