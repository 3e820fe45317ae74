use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::helpers::math::decayed_boost;

/// Paid comment attached to a utility token
///
/// `boost` is stored already decayed as of `last_boost_time`; readers call
/// `current_boost` to see today's value. Text is immutable after posting.
/// Funding moves through transfer_to_vault_for_comment, not through this record.
///
/// PDA Seeds: ["comment", utility_token, index (u64 LE)]
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct Comment {
    /// Referenced utility token (not owned)
    pub utility_token: Pubkey,

    pub author: Pubkey,

    /// Position in the utility token's comment sequence
    pub index: u64,

    /// Comment body (max 200 bytes)
    pub text: String,

    /// Boost score as of last_boost_time
    pub boost: u64,

    /// Boosts applied after posting
    pub boost_count: u64,

    pub created_at: i64,

    pub last_boost_time: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl Comment {
    /// Account size calculation:
    /// - 2 Pubkeys: 32 * 2 = 64 bytes (utility_token, author)
    /// - text: 4 + MAX_COMMENT_LEN = 204 bytes
    /// - 5 u64/i64: 8 * 5 = 40 bytes (index, boost, boost_count, created_at, last_boost_time)
    /// - bump: 1 byte
    /// Total: 309 bytes
    pub const LEN: usize = 32 * 2 + (4 + MAX_COMMENT_LEN) + 8 * 5 + 1;

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        utility_token: Pubkey,
        author: Pubkey,
        index: u64,
        text: String,
        cost: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(cost >= MIN_STAKE, ErrorCode::InsufficientCost);
        require!(text.len() <= MAX_COMMENT_LEN, ErrorCode::CommentTooLong);

        self.utility_token = utility_token;
        self.author = author;
        self.index = index;
        self.text = text;
        self.boost = cost;
        self.boost_count = 0;
        self.created_at = now;
        self.last_boost_time = now;
        self.bump = bump;
        Ok(())
    }

    /// Boost as it reads at `now`
    pub fn current_boost(&self, now: i64) -> u64 {
        decayed_boost(self.boost, now.saturating_sub(self.last_boost_time))
    }

    /// Decay the stored boost up to `now`, then add `amount`.
    /// Returns the decayed value the amount was added to.
    pub fn apply_boost(&mut self, amount: u64, now: i64) -> Result<u64> {
        require!(amount >= MIN_STAKE, ErrorCode::InsufficientCost);

        let decayed = self.current_boost(now);
        let boost = decayed.checked_add(amount).ok_or(ErrorCode::MathOverflow)?;
        let boost_count = self.boost_count.checked_add(1).ok_or(ErrorCode::MathOverflow)?;

        self.boost = boost;
        self.boost_count = boost_count;
        self.last_boost_time = now;
        Ok(decayed)
    }
}
