use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use crate::constants::*;
use crate::errors::ErrorCode;

/// Staking pool for one keyword under a utility token
///
/// Holds aggregate stake and the control flags. Staked tokens sit in a
/// dedicated token account owned by the vault authority PDA.
/// Elimination is a tombstone: the record is never closed.
///
/// PDA Seeds: ["keyword", utility_token, keyword_seed(keyword)]
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct KeywordVault {
    /// Parent utility token
    pub utility_token: Pubkey,

    /// Keyword (max 32 bytes)
    pub keyword: String,

    /// Sum of live stakes; forced to 0 on elimination
    pub total_staked: u64,

    /// Distinct stakers (one per StakeRecord)
    pub staker_count: u64,

    /// Blocks new stakes
    pub locked: bool,

    /// Irreversible closure, stakes were burned
    pub eliminated: bool,

    /// Tokens burned at elimination
    pub total_burned: u64,

    pub created_at: i64,

    /// PDA bump for this account
    pub bump: u8,

    /// PDA bump for the vault's token account
    pub token_account_bump: u8,
}

impl KeywordVault {
    /// Account size calculation:
    /// - utility_token: 32 bytes
    /// - keyword: 4 + MAX_KEYWORD_LEN = 36 bytes
    /// - 4 u64/i64: 8 * 4 = 32 bytes (total_staked, staker_count, total_burned, created_at)
    /// - 4 u8/bool: 4 bytes (locked, eliminated, bump, token_account_bump)
    /// Total: 104 bytes
    pub const LEN: usize = 32 + (4 + MAX_KEYWORD_LEN) + 8 * 4 + 4;

    pub fn is_initialized(&self) -> bool {
        self.utility_token != Pubkey::default()
    }

    pub fn initialize(
        &mut self,
        utility_token: Pubkey,
        keyword: String,
        now: i64,
        bump: u8,
        token_account_bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), ErrorCode::AlreadyExists);
        validate_keyword(&keyword)?;

        self.utility_token = utility_token;
        self.keyword = keyword;
        self.total_staked = 0;
        self.staker_count = 0;
        self.locked = false;
        self.eliminated = false;
        self.total_burned = 0;
        self.created_at = now;
        self.bump = bump;
        self.token_account_bump = token_account_bump;
        Ok(())
    }

    /// Accepting stakes: neither locked nor eliminated
    pub fn is_open(&self) -> bool {
        !self.locked && !self.eliminated
    }

    pub fn ensure_open(&self) -> Result<()> {
        require!(self.is_open(), ErrorCode::KeywordLockedOrEliminated);
        Ok(())
    }

    /// Locking an already locked vault is a no-op success
    pub fn lock(&mut self) -> Result<()> {
        require!(!self.eliminated, ErrorCode::KeywordEliminated);
        self.locked = true;
        Ok(())
    }

    /// Tombstone the vault. `vault_balance` is the token account's full balance,
    /// which can exceed total_staked (comment funding). Returns the amount to burn.
    pub fn eliminate(&mut self, vault_balance: u64) -> Result<u64> {
        require!(!self.eliminated, ErrorCode::KeywordEliminated);
        let total_burned = self
            .total_burned
            .checked_add(vault_balance)
            .ok_or(ErrorCode::MathOverflow)?;

        self.total_burned = total_burned;
        self.total_staked = 0;
        self.eliminated = true;
        Ok(vault_balance)
    }

    /// Aggregate a stake. `new_staker` is true only for the first stake of a staker.
    pub fn record_stake(&mut self, amount: u64, new_staker: bool) -> Result<()> {
        require!(amount >= MIN_STAKE, ErrorCode::InsufficientStake);
        self.ensure_open()?;

        let total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let staker_count = if new_staker {
            self.staker_count.checked_add(1).ok_or(ErrorCode::MathOverflow)?
        } else {
            self.staker_count
        };

        self.total_staked = total_staked;
        self.staker_count = staker_count;
        Ok(())
    }
}

/// Fixed-width address seed for a keyword: sha256 of its bytes.
/// Any input length derives an address, so length is checked by the handler.
pub fn keyword_seed(keyword: &str) -> [u8; 32] {
    hash(keyword.as_bytes()).to_bytes()
}

/// Keyword must be 1..=MAX_KEYWORD_LEN bytes
pub fn validate_keyword(keyword: &str) -> Result<()> {
    require!(
        !keyword.is_empty() && keyword.len() <= MAX_KEYWORD_LEN,
        ErrorCode::InvalidKeyword
    );
    Ok(())
}
