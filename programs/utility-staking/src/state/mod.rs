pub mod comment;
pub mod keyword_vault;
pub mod stake_record;
pub mod utility_token;

pub use comment::*;
pub use keyword_vault::*;
pub use stake_record::*;
pub use utility_token::*;
