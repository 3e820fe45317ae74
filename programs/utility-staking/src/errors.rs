use anchor_lang::prelude::*;

/// Utility Staking Error Codes
///
/// Every rejected instruction surfaces one of these. Clients branch on the
/// variant name / code, never on the message text.
#[error_code]
pub enum ErrorCode {
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Record already exists")]
    AlreadyExists,

    #[msg("Token already launched")]
    AlreadyLaunched,

    #[msg("Token not launched yet")]
    NotLaunched,

    #[msg("Launch threshold not met")]
    ThresholdNotMet,

    #[msg("Insufficient cost provided")]
    InsufficientCost,

    #[msg("Insufficient stake amount")]
    InsufficientStake,

    #[msg("Keyword is locked or eliminated")]
    KeywordLockedOrEliminated,

    #[msg("Keyword already eliminated")]
    KeywordEliminated,

    #[msg("Rewards not ready yet")]
    RewardNotReady,

    #[msg("No stakes to distribute rewards")]
    NoStakes,

    #[msg("Reward pool too small for a non-zero payout")]
    RewardPoolEmpty,

    #[msg("Unauthorized")]
    UnauthorizedAccess,

    #[msg("Invalid parameter")]
    InvalidParameter,

    #[msg("Symbol must be 1-10 bytes")]
    InvalidSymbol,

    #[msg("Keyword must be 1-32 bytes")]
    InvalidKeyword,

    #[msg("Comment exceeds 200 bytes")]
    CommentTooLong,

    #[msg("Mint mismatch between accounts")]
    MintMismatch,

    #[msg("Stake record does not belong to this vault or recipient")]
    StakeRecordMismatch,
}
