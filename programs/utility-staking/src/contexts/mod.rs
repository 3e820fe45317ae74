use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::*;

// ACCOUNTS - Instruction account validation structs
//
// Privileged contexts check the admin signer against UtilityToken.admin in the
// account constraints, before the handler reads any state.

// ══════════════════════════════════════════════════════════════════════════════
// UTILITY TOKEN
// ══════════════════════════════════════════════════════════════════════════════

/// CreateUtilityToken - one per underlying mint
///
/// init_if_needed so that a repeated creation reaches the handler and fails
/// with AlreadyExists instead of a system program error.
#[derive(Accounts)]
pub struct CreateUtilityToken<'info> {
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UtilityToken::LEN,
        seeds = [UTILITY_TOKEN_SEED, real_token_mint.key().as_ref()],
        bump
    )]
    pub utility_token: Account<'info, UtilityToken>,
    /// CHECK: PDA signing for all program-held token accounts, holds no data
    #[account(seeds = [VAULT_AUTHORITY_SEED, utility_token.key().as_ref()], bump)]
    pub vault_authority: AccountInfo<'info>,
    /// Collects pre-launch contributions
    #[account(
        init_if_needed,
        payer = user,
        seeds = [LAUNCH_VAULT_SEED, utility_token.key().as_ref()],
        bump,
        token::mint = real_token_mint,
        token::authority = vault_authority,
        token::token_program = token_program
    )]
    pub launch_vault: InterfaceAccount<'info, TokenAccount>,
    /// Source of staker rewards
    #[account(
        init_if_needed,
        payer = user,
        seeds = [REWARD_VAULT_SEED, utility_token.key().as_ref()],
        bump,
        token::mint = real_token_mint,
        token::authority = vault_authority,
        token::token_program = token_program
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,
    pub real_token_mint: InterfaceAccount<'info, Mint>,
    /// Becomes the admin of the new utility token
    #[account(mut)]
    pub user: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct BuyToken<'info> {
    #[account(
        mut,
        seeds = [UTILITY_TOKEN_SEED, utility_token.real_token_mint.as_ref()],
        bump = utility_token.bump
    )]
    pub utility_token: Account<'info, UtilityToken>,
    #[account(
        mut,
        seeds = [LAUNCH_VAULT_SEED, utility_token.key().as_ref()],
        bump
    )]
    pub launch_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        constraint = buyer_token_account.mint == utility_token.real_token_mint @ ErrorCode::MintMismatch
    )]
    pub buyer_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(address = utility_token.real_token_mint @ ErrorCode::MintMismatch)]
    pub real_token_mint: InterfaceAccount<'info, Mint>,
    pub buyer: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

/// LaunchToken - admin only, splits the launch vault into tax + liquidity
#[derive(Accounts)]
pub struct LaunchToken<'info> {
    #[account(
        mut,
        seeds = [UTILITY_TOKEN_SEED, utility_token.real_token_mint.as_ref()],
        bump = utility_token.bump,
        constraint = admin.key() == utility_token.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub utility_token: Account<'info, UtilityToken>,
    /// CHECK: vault authority PDA, signs the outbound transfers
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, utility_token.key().as_ref()],
        bump = utility_token.authority_bump
    )]
    pub vault_authority: AccountInfo<'info>,
    #[account(
        mut,
        seeds = [LAUNCH_VAULT_SEED, utility_token.key().as_ref()],
        bump
    )]
    pub launch_vault: InterfaceAccount<'info, TokenAccount>,
    /// Receives the liquidity share
    #[account(
        mut,
        constraint = liquidity_pool.mint == utility_token.real_token_mint @ ErrorCode::MintMismatch
    )]
    pub liquidity_pool: InterfaceAccount<'info, TokenAccount>,
    /// Receives the 5% tax, must belong to the admin
    #[account(
        mut,
        constraint = admin_tax_account.mint == utility_token.real_token_mint @ ErrorCode::MintMismatch,
        constraint = admin_tax_account.owner == utility_token.admin @ ErrorCode::InvalidParameter
    )]
    pub admin_tax_account: InterfaceAccount<'info, TokenAccount>,
    #[account(address = utility_token.real_token_mint @ ErrorCode::MintMismatch)]
    pub real_token_mint: InterfaceAccount<'info, Mint>,
    pub admin: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

// ══════════════════════════════════════════════════════════════════════════════
// KEYWORD VAULTS
// ══════════════════════════════════════════════════════════════════════════════

/// CreateKeywordVault - admin only, one vault per (utility token, keyword)
#[derive(Accounts)]
#[instruction(keyword: String)]
pub struct CreateKeywordVault<'info> {
    #[account(
        mut,
        seeds = [UTILITY_TOKEN_SEED, utility_token.real_token_mint.as_ref()],
        bump = utility_token.bump,
        constraint = admin.key() == utility_token.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub utility_token: Account<'info, UtilityToken>,
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + KeywordVault::LEN,
        seeds = [KEYWORD_VAULT_SEED, utility_token.key().as_ref(), &keyword_seed(&keyword)],
        bump
    )]
    pub keyword_vault: Account<'info, KeywordVault>,
    /// CHECK: vault authority PDA, owner of the new token account
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, utility_token.key().as_ref()],
        bump = utility_token.authority_bump
    )]
    pub vault_authority: AccountInfo<'info>,
    /// Holds this keyword's staked tokens
    #[account(
        init_if_needed,
        payer = admin,
        seeds = [VAULT_TOKENS_SEED, keyword_vault.key().as_ref()],
        bump,
        token::mint = real_token_mint,
        token::authority = vault_authority,
        token::token_program = token_program
    )]
    pub vault_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(address = utility_token.real_token_mint @ ErrorCode::MintMismatch)]
    pub real_token_mint: InterfaceAccount<'info, Mint>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct LockKeyword<'info> {
    #[account(
        seeds = [UTILITY_TOKEN_SEED, utility_token.real_token_mint.as_ref()],
        bump = utility_token.bump,
        constraint = admin.key() == utility_token.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub utility_token: Account<'info, UtilityToken>,
    #[account(
        mut,
        seeds = [KEYWORD_VAULT_SEED, utility_token.key().as_ref(), &keyword_seed(&keyword_vault.keyword)],
        bump = keyword_vault.bump
    )]
    pub keyword_vault: Account<'info, KeywordVault>,
    pub admin: Signer<'info>,
}

/// EliminateKeyword - admin only, burns the vault's whole token balance
#[derive(Accounts)]
pub struct EliminateKeyword<'info> {
    #[account(
        seeds = [UTILITY_TOKEN_SEED, utility_token.real_token_mint.as_ref()],
        bump = utility_token.bump,
        constraint = admin.key() == utility_token.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub utility_token: Account<'info, UtilityToken>,
    #[account(
        mut,
        seeds = [KEYWORD_VAULT_SEED, utility_token.key().as_ref(), &keyword_seed(&keyword_vault.keyword)],
        bump = keyword_vault.bump
    )]
    pub keyword_vault: Account<'info, KeywordVault>,
    /// CHECK: vault authority PDA, signs the burn
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, utility_token.key().as_ref()],
        bump = utility_token.authority_bump
    )]
    pub vault_authority: AccountInfo<'info>,
    #[account(
        mut,
        seeds = [VAULT_TOKENS_SEED, keyword_vault.key().as_ref()],
        bump = keyword_vault.token_account_bump
    )]
    pub vault_token_account: InterfaceAccount<'info, TokenAccount>,
    /// Mutable: burning lowers the supply
    #[account(
        mut,
        address = utility_token.real_token_mint @ ErrorCode::MintMismatch
    )]
    pub real_token_mint: InterfaceAccount<'info, Mint>,
    pub admin: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

/// StakeOnKeyword - first stake creates the StakeRecord, later ones top it up
#[derive(Accounts)]
pub struct StakeOnKeyword<'info> {
    #[account(
        seeds = [UTILITY_TOKEN_SEED, utility_token.real_token_mint.as_ref()],
        bump = utility_token.bump
    )]
    pub utility_token: Account<'info, UtilityToken>,
    #[account(
        mut,
        seeds = [KEYWORD_VAULT_SEED, utility_token.key().as_ref(), &keyword_seed(&keyword_vault.keyword)],
        bump = keyword_vault.bump
    )]
    pub keyword_vault: Account<'info, KeywordVault>,
    #[account(
        mut,
        seeds = [VAULT_TOKENS_SEED, keyword_vault.key().as_ref()],
        bump = keyword_vault.token_account_bump
    )]
    pub vault_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(
        init_if_needed,
        payer = staker,
        space = 8 + StakeRecord::LEN,
        seeds = [STAKE_RECORD_SEED, keyword_vault.key().as_ref(), staker.key().as_ref()],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,
    #[account(
        mut,
        constraint = staker_token_account.mint == utility_token.real_token_mint @ ErrorCode::MintMismatch
    )]
    pub staker_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(address = utility_token.real_token_mint @ ErrorCode::MintMismatch)]
    pub real_token_mint: InterfaceAccount<'info, Mint>,
    #[account(mut)]
    pub staker: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

// ══════════════════════════════════════════════════════════════════════════════
// REWARDS
// ══════════════════════════════════════════════════════════════════════════════

/// DistributeRewards - admin only, pays one staker of one vault from the reward vault
#[derive(Accounts)]
pub struct DistributeRewards<'info> {
    #[account(
        mut,
        seeds = [UTILITY_TOKEN_SEED, utility_token.real_token_mint.as_ref()],
        bump = utility_token.bump,
        constraint = admin.key() == utility_token.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub utility_token: Account<'info, UtilityToken>,
    #[account(
        seeds = [KEYWORD_VAULT_SEED, utility_token.key().as_ref(), &keyword_seed(&keyword_vault.keyword)],
        bump = keyword_vault.bump
    )]
    pub keyword_vault: Account<'info, KeywordVault>,
    #[account(
        mut,
        seeds = [STAKE_RECORD_SEED, keyword_vault.key().as_ref(), stake_record.staker.as_ref()],
        bump = stake_record.bump
    )]
    pub stake_record: Account<'info, StakeRecord>,
    /// CHECK: vault authority PDA, signs the payout
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, utility_token.key().as_ref()],
        bump = utility_token.authority_bump
    )]
    pub vault_authority: AccountInfo<'info>,
    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, utility_token.key().as_ref()],
        bump
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,
    /// Must belong to the staker of stake_record
    #[account(
        mut,
        constraint = staker_token_account.mint == utility_token.real_token_mint @ ErrorCode::MintMismatch,
        constraint = staker_token_account.owner == stake_record.staker @ ErrorCode::StakeRecordMismatch
    )]
    pub staker_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(address = utility_token.real_token_mint @ ErrorCode::MintMismatch)]
    pub real_token_mint: InterfaceAccount<'info, Mint>,
    pub admin: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

/// FundRewardPool - anyone may top up the reward vault
#[derive(Accounts)]
pub struct FundRewardPool<'info> {
    #[account(
        seeds = [UTILITY_TOKEN_SEED, utility_token.real_token_mint.as_ref()],
        bump = utility_token.bump
    )]
    pub utility_token: Account<'info, UtilityToken>,
    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, utility_token.key().as_ref()],
        bump
    )]
    pub reward_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        constraint = funder_token_account.mint == utility_token.real_token_mint @ ErrorCode::MintMismatch
    )]
    pub funder_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(address = utility_token.real_token_mint @ ErrorCode::MintMismatch)]
    pub real_token_mint: InterfaceAccount<'info, Mint>,
    pub funder: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}

// ══════════════════════════════════════════════════════════════════════════════
// COMMENTS
// ══════════════════════════════════════════════════════════════════════════════

/// PostComment - address derived from the utility token's comment counter
#[derive(Accounts)]
pub struct PostComment<'info> {
    #[account(
        mut,
        seeds = [UTILITY_TOKEN_SEED, utility_token.real_token_mint.as_ref()],
        bump = utility_token.bump
    )]
    pub utility_token: Account<'info, UtilityToken>,
    #[account(
        init,
        payer = author,
        space = 8 + Comment::LEN,
        seeds = [COMMENT_SEED, utility_token.key().as_ref(), &utility_token.comment_count.to_le_bytes()],
        bump
    )]
    pub comment: Account<'info, Comment>,
    #[account(mut)]
    pub author: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct BoostComment<'info> {
    #[account(
        mut,
        seeds = [COMMENT_SEED, comment.utility_token.as_ref(), &comment.index.to_le_bytes()],
        bump = comment.bump
    )]
    pub comment: Account<'info, Comment>,
    pub booster: Signer<'info>,
}

/// TransferToVaultForComment - funding leg of a post or boost.
/// Destination is any token account of the same mint.
#[derive(Accounts)]
pub struct TransferToVaultForComment<'info> {
    #[account(mut)]
    pub source_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        constraint = vault_token_account.mint == source_token_account.mint @ ErrorCode::MintMismatch
    )]
    pub vault_token_account: InterfaceAccount<'info, TokenAccount>,
    #[account(address = source_token_account.mint @ ErrorCode::MintMismatch)]
    pub mint: InterfaceAccount<'info, Mint>,
    pub authority: Signer<'info>,
    pub token_program: Interface<'info, TokenInterface>,
}
