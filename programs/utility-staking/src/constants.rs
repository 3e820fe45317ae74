// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// UtilityToken PDA seed: ["utility", real_token_mint]
pub const UTILITY_TOKEN_SEED: &[u8] = b"utility";

/// Vault authority PDA seed: ["vault_authority", utility_token]
/// Owns every program-held token account of one utility token.
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

/// Launch vault token account seed: ["launch_vault", utility_token]
pub const LAUNCH_VAULT_SEED: &[u8] = b"launch_vault";

/// Reward vault token account seed: ["reward_vault", utility_token]
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// KeywordVault PDA seed: ["keyword", utility_token, sha256(keyword)]
pub const KEYWORD_VAULT_SEED: &[u8] = b"keyword";

/// Keyword vault token account seed: ["vault_tokens", keyword_vault]
pub const VAULT_TOKENS_SEED: &[u8] = b"vault_tokens";

/// StakeRecord PDA seed: ["stake", keyword_vault, staker]
pub const STAKE_RECORD_SEED: &[u8] = b"stake";

/// Comment PDA seed: ["comment", utility_token, index (u64 LE)]
pub const COMMENT_SEED: &[u8] = b"comment";

// ══════════════════════════════════════════════════════════════════════════════
// LAUNCH ECONOMICS
// ══════════════════════════════════════════════════════════════════════════════

/// Share of collected launch funds routed to the admin tax account (5%)
pub const TAX_PERCENT: u64 = 5;

/// Minimum amount for contributions, stakes and comment payments
pub const MIN_STAKE: u64 = 1;

// ══════════════════════════════════════════════════════════════════════════════
// REWARDS
// ══════════════════════════════════════════════════════════════════════════════

/// Minimum seconds between two reward distributions of one utility token.
/// 1 day in production, 5 seconds in testing builds.
pub const REWARD_INTERVAL: i64 = if TESTING_MODE { 5 } else { 86_400 };

/// Share of the reward pool released per distribution (1000 bps = 10%)
pub const REWARD_POOL_SLICE_BPS: u64 = 1_000;

/// Basis point denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

// ══════════════════════════════════════════════════════════════════════════════
// COMMENT BOOST DECAY
// ══════════════════════════════════════════════════════════════════════════════

/// Boost halves once per full period elapsed (7 days).
/// The first period doubles as the grace period: no decay before it ends.
pub const BOOST_DECAY_PERIOD: i64 = 7 * 86_400;

// ══════════════════════════════════════════════════════════════════════════════
// RECORD SIZE LIMITS
// ══════════════════════════════════════════════════════════════════════════════

/// Max symbol length in bytes
pub const MAX_SYMBOL_LEN: usize = 10;

/// Max keyword length in bytes
pub const MAX_KEYWORD_LEN: usize = 32;

/// Max comment text length in bytes
pub const MAX_COMMENT_LEN: usize = 200;

// ══════════════════════════════════════════════════════════════════════════════
// TESTING MODE CONFIGURATION
// ══════════════════════════════════════════════════════════════════════════════
// Build with: anchor build -- --features testing (localnet/devnet)
// Build with: anchor build (mainnet - testing disabled by default)
//
// When true (TESTING):
//   - Reward interval shrinks to 5 seconds
// When false (PRODUCTION):
//   - Enforces a full day between reward distributions
#[cfg(feature = "testing")]
pub const TESTING_MODE: bool = true;
#[cfg(not(feature = "testing"))]
pub const TESTING_MODE: bool = false;
