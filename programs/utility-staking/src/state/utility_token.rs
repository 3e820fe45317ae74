use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::helpers::math::calculate_launch_split;

/// Crowdfunded utility token backed by a real token mint
///
/// Collects contributions into the launch vault until the admin launches it,
/// then gates reward distributions for every keyword vault underneath it.
/// Only one UtilityToken exists per underlying mint.
///
/// PDA Seeds: ["utility", real_token_mint]
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct UtilityToken {
    /// Creator, holds every privileged operation
    pub admin: Pubkey,

    /// Underlying token mint contributions are paid in
    pub real_token_mint: Pubkey,

    /// Display symbol (max 10 bytes)
    pub symbol: String,

    /// Funds required before launch is allowed
    pub launch_threshold: u64,

    /// Sum of all pre-launch contributions
    pub funds_collected: u64,

    /// Set once by launch_token, never cleared
    pub launched: bool,

    pub created_at: i64,

    /// Zero until launched
    pub launched_at: i64,

    /// Timestamp of the last successful reward distribution
    /// (creation time before the first one)
    pub last_reward_time: i64,

    /// Lifetime rewards paid out of the reward vault
    pub total_rewards_distributed: u64,

    /// Number of keyword vaults created under this token
    pub vault_count: u64,

    /// Number of comments posted; next comment index
    pub comment_count: u64,

    /// PDA bump for this account
    pub bump: u8,

    /// PDA bump for the vault authority
    pub authority_bump: u8,
}

impl UtilityToken {
    /// Account size calculation:
    /// - 2 Pubkeys: 32 * 2 = 64 bytes (admin, real_token_mint)
    /// - symbol: 4 + MAX_SYMBOL_LEN = 14 bytes
    /// - 8 u64/i64: 8 * 8 = 64 bytes (launch_threshold, funds_collected, created_at,
    ///   launched_at, last_reward_time, total_rewards_distributed, vault_count, comment_count)
    /// - 3 u8/bool: 3 bytes (launched, bump, authority_bump)
    /// Total: 64 + 14 + 64 + 3 = 145 bytes
    pub const LEN: usize = 32 * 2 + (4 + MAX_SYMBOL_LEN) + 8 * 8 + 3;

    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        admin: Pubkey,
        real_token_mint: Pubkey,
        symbol: String,
        launch_threshold: u64,
        now: i64,
        bump: u8,
        authority_bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), ErrorCode::AlreadyExists);
        require!(
            !symbol.is_empty() && symbol.len() <= MAX_SYMBOL_LEN,
            ErrorCode::InvalidSymbol
        );
        require!(launch_threshold > 0, ErrorCode::InvalidParameter);

        self.admin = admin;
        self.real_token_mint = real_token_mint;
        self.symbol = symbol;
        self.launch_threshold = launch_threshold;
        self.funds_collected = 0;
        self.launched = false;
        self.created_at = now;
        self.launched_at = 0;
        self.last_reward_time = now;
        self.total_rewards_distributed = 0;
        self.vault_count = 0;
        self.comment_count = 0;
        self.bump = bump;
        self.authority_bump = authority_bump;
        Ok(())
    }

    /// Add a pre-launch contribution. Returns the new funds_collected.
    pub fn record_contribution(&mut self, amount: u64) -> Result<u64> {
        require!(amount >= MIN_STAKE, ErrorCode::InsufficientCost);
        require!(!self.launched, ErrorCode::AlreadyLaunched);

        let funds_collected = self
            .funds_collected
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.funds_collected = funds_collected;
        Ok(funds_collected)
    }

    /// Flip to launched and return the (tax, liquidity) split of collected funds
    pub fn launch(&mut self, now: i64) -> Result<(u64, u64)> {
        require!(!self.launched, ErrorCode::AlreadyLaunched);
        require!(
            self.funds_collected >= self.launch_threshold,
            ErrorCode::ThresholdNotMet
        );

        let split = calculate_launch_split(self.funds_collected)?;
        self.launched = true;
        self.launched_at = now;
        Ok(split)
    }

    /// Fails unless launched and a full reward interval has passed
    pub fn check_reward_ready(&self, now: i64) -> Result<()> {
        require!(self.launched, ErrorCode::NotLaunched);
        require!(
            now.saturating_sub(self.last_reward_time) >= REWARD_INTERVAL,
            ErrorCode::RewardNotReady
        );
        Ok(())
    }

    /// Consume the token-wide reward interval for a payout made at `now`
    pub fn record_distribution(&mut self, amount: u64, now: i64) -> Result<()> {
        self.check_reward_ready(now)?;
        let total = self
            .total_rewards_distributed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.total_rewards_distributed = total;
        self.last_reward_time = now;
        Ok(())
    }

    pub fn register_vault(&mut self) -> Result<()> {
        self.vault_count = self.vault_count.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Reserve the next comment index
    pub fn next_comment_index(&mut self) -> Result<u64> {
        let index = self.comment_count;
        self.comment_count = index.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        Ok(index)
    }
}
