use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// LAUNCH EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a utility token is created for an underlying mint
#[event]
pub struct UtilityTokenCreated {
    pub utility_token: Pubkey,
    pub real_token_mint: Pubkey,
    pub admin: Pubkey,
    pub symbol: String,
    pub launch_threshold: u64,
    pub timestamp: i64,
}

/// Emitted for every pre-launch contribution
#[event]
pub struct TokensPurchased {
    pub utility_token: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
    pub funds_collected: u64,
    pub timestamp: i64,
}

/// Emitted when collected funds are split into tax and liquidity
#[event]
pub struct TokenLaunched {
    pub utility_token: Pubkey,
    pub funds_collected: u64,
    pub tax: u64,
    pub liquidity: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// KEYWORD VAULT EVENTS
// ══════════════════════════════════════════════════════════════════════════════

#[event]
pub struct KeywordVaultCreated {
    pub utility_token: Pubkey,
    pub keyword_vault: Pubkey,
    pub keyword: String,
    pub timestamp: i64,
}

#[event]
pub struct KeywordLocked {
    pub keyword_vault: Pubkey,
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Emitted when a vault is closed and its balance burned
#[event]
pub struct KeywordEliminated {
    pub keyword_vault: Pubkey,
    pub tokens_burned: u64,
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Emitted for every stake, new or repeated
#[event]
pub struct StakePlaced {
    pub keyword_vault: Pubkey,
    pub staker: Pubkey,
    pub amount: u64,
    pub staker_total: u64,
    pub vault_total: u64,
    pub staker_count: u64,
    pub new_staker: bool,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// REWARD EVENTS
// ══════════════════════════════════════════════════════════════════════════════

#[event]
pub struct RewardsDistributed {
    pub utility_token: Pubkey,
    pub keyword_vault: Pubkey,
    pub staker: Pubkey,
    pub amount: u64,
    pub pool_balance_before: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardPoolFunded {
    pub utility_token: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// COMMENT EVENTS
// ══════════════════════════════════════════════════════════════════════════════

#[event]
pub struct CommentPosted {
    pub comment: Pubkey,
    pub utility_token: Pubkey,
    pub author: Pubkey,
    pub index: u64,
    pub boost: u64,
    pub timestamp: i64,
}

#[event]
pub struct CommentBoosted {
    pub comment: Pubkey,
    pub booster: Pubkey,
    pub amount: u64,
    pub decayed_from: u64,
    pub boost: u64,
    pub timestamp: i64,
}

/// Funding leg for comment posts and boosts
#[event]
pub struct CommentFundsTransferred {
    pub source: Pubkey,
    pub destination: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
