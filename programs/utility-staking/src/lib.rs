use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

mod formal_verification;

use crate::contexts::*;
use crate::events::*;
use crate::helpers::*;

pub use crate::constants::*;
pub use crate::errors::ErrorCode;
pub use crate::state::*;

declare_id!("GmMTWPSwxFaM2Vsjpti6yCdx5akC2KCsiJ9jdEyAejLJ");

#[program]
pub mod utility_staking {
    use super::*;

    // ══════════════════════════════════════════════════════════════════════════
    // LAUNCH
    // ══════════════════════════════════════════════════════════════════════════

    pub fn create_utility_token(
        ctx: Context<CreateUtilityToken>,
        symbol: String,
        launch_threshold: u64,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let utility_token = &mut ctx.accounts.utility_token;

        utility_token.initialize(
            ctx.accounts.user.key(),
            ctx.accounts.real_token_mint.key(),
            symbol,
            launch_threshold,
            clock.unix_timestamp,
            ctx.bumps.utility_token,
            ctx.bumps.vault_authority,
        )?;

        emit!(UtilityTokenCreated {
            utility_token: utility_token.key(),
            real_token_mint: utility_token.real_token_mint,
            admin: utility_token.admin,
            symbol: utility_token.symbol.clone(),
            launch_threshold,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn buy_token(ctx: Context<BuyToken>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        let funds_collected = ctx.accounts.utility_token.record_contribution(amount)?;

        transfer_from_user(
            &ctx.accounts.token_program,
            &ctx.accounts.buyer_token_account,
            &ctx.accounts.launch_vault,
            &ctx.accounts.real_token_mint,
            &ctx.accounts.buyer,
            amount,
        )?;

        #[cfg(feature = "verbose")]
        msg!("Contribution: {} (collected {}/{})",
             amount, funds_collected, ctx.accounts.utility_token.launch_threshold);

        emit!(TokensPurchased {
            utility_token: ctx.accounts.utility_token.key(),
            buyer: ctx.accounts.buyer.key(),
            amount,
            funds_collected,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn launch_token(ctx: Context<LaunchToken>) -> Result<()> {
        let clock = Clock::get()?;
        let utility_token_key = ctx.accounts.utility_token.key();
        let authority_bump = ctx.accounts.utility_token.authority_bump;

        let (tax, liquidity) = ctx.accounts.utility_token.launch(clock.unix_timestamp)?;
        let funds_collected = ctx.accounts.utility_token.funds_collected;

        let seeds: &[&[u8]] = &[VAULT_AUTHORITY_SEED, utility_token_key.as_ref(), &[authority_bump]];

        if tax > 0 {
            transfer_from_vault(
                &ctx.accounts.token_program,
                &ctx.accounts.launch_vault,
                &ctx.accounts.admin_tax_account,
                &ctx.accounts.real_token_mint,
                &ctx.accounts.vault_authority,
                seeds,
                tax,
            )?;
        }

        if liquidity > 0 {
            transfer_from_vault(
                &ctx.accounts.token_program,
                &ctx.accounts.launch_vault,
                &ctx.accounts.liquidity_pool,
                &ctx.accounts.real_token_mint,
                &ctx.accounts.vault_authority,
                seeds,
                liquidity,
            )?;
        }

        msg!("Launched: {} collected, {} tax, {} liquidity", funds_collected, tax, liquidity);

        emit!(TokenLaunched {
            utility_token: utility_token_key,
            funds_collected,
            tax,
            liquidity,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // KEYWORD VAULTS
    // ══════════════════════════════════════════════════════════════════════════

    pub fn create_keyword_vault(ctx: Context<CreateKeywordVault>, keyword: String) -> Result<()> {
        let clock = Clock::get()?;
        let utility_token_key = ctx.accounts.utility_token.key();

        ctx.accounts.keyword_vault.initialize(
            utility_token_key,
            keyword,
            clock.unix_timestamp,
            ctx.bumps.keyword_vault,
            ctx.bumps.vault_token_account,
        )?;
        ctx.accounts.utility_token.register_vault()?;

        emit!(KeywordVaultCreated {
            utility_token: utility_token_key,
            keyword_vault: ctx.accounts.keyword_vault.key(),
            keyword: ctx.accounts.keyword_vault.keyword.clone(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn lock_keyword(ctx: Context<LockKeyword>) -> Result<()> {
        ctx.accounts.keyword_vault.lock()?;

        emit!(KeywordLocked {
            keyword_vault: ctx.accounts.keyword_vault.key(),
            admin: ctx.accounts.admin.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn eliminate_keyword(ctx: Context<EliminateKeyword>) -> Result<()> {
        let clock = Clock::get()?;
        let utility_token_key = ctx.accounts.utility_token.key();
        let authority_bump = ctx.accounts.utility_token.authority_bump;

        // Whole balance, including comment funding sent here
        let tokens_to_burn = ctx
            .accounts
            .keyword_vault
            .eliminate(ctx.accounts.vault_token_account.amount)?;

        if tokens_to_burn > 0 {
            let seeds: &[&[u8]] = &[VAULT_AUTHORITY_SEED, utility_token_key.as_ref(), &[authority_bump]];
            burn_from_vault(
                &ctx.accounts.token_program,
                &ctx.accounts.vault_token_account,
                &ctx.accounts.real_token_mint,
                &ctx.accounts.vault_authority,
                seeds,
                tokens_to_burn,
            )?;
        }

        msg!("Keyword '{}' eliminated: {} tokens burned",
             ctx.accounts.keyword_vault.keyword, tokens_to_burn);

        emit!(KeywordEliminated {
            keyword_vault: ctx.accounts.keyword_vault.key(),
            tokens_burned: tokens_to_burn,
            admin: ctx.accounts.admin.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn stake_on_keyword(ctx: Context<StakeOnKeyword>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        let keyword_vault_key = ctx.accounts.keyword_vault.key();
        let staker_key = ctx.accounts.staker.key();

        let new_staker = ctx.accounts.stake_record.is_new();
        ctx.accounts.keyword_vault.record_stake(amount, new_staker)?;
        ctx.accounts.stake_record.add_stake(
            keyword_vault_key,
            staker_key,
            amount,
            clock.unix_timestamp,
            ctx.bumps.stake_record,
        )?;

        transfer_from_user(
            &ctx.accounts.token_program,
            &ctx.accounts.staker_token_account,
            &ctx.accounts.vault_token_account,
            &ctx.accounts.real_token_mint,
            &ctx.accounts.staker,
            amount,
        )?;

        #[cfg(feature = "verbose")]
        msg!("Stake: {} on '{}' (vault total {}, stakers {})",
             amount, ctx.accounts.keyword_vault.keyword,
             ctx.accounts.keyword_vault.total_staked, ctx.accounts.keyword_vault.staker_count);

        emit!(StakePlaced {
            keyword_vault: keyword_vault_key,
            staker: staker_key,
            amount,
            staker_total: ctx.accounts.stake_record.amount,
            vault_total: ctx.accounts.keyword_vault.total_staked,
            staker_count: ctx.accounts.keyword_vault.staker_count,
            new_staker,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // REWARDS
    // ══════════════════════════════════════════════════════════════════════════

    /// Pays one staker of one keyword vault from the reward vault.
    ///
    /// The reward interval is shared by the whole utility token, not tracked per
    /// staker or per vault: each successful call consumes it, so paying N stakers
    /// once takes N intervals.
    pub fn distribute_rewards(ctx: Context<DistributeRewards>) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;
        let utility_token_key = ctx.accounts.utility_token.key();
        let authority_bump = ctx.accounts.utility_token.authority_bump;

        ctx.accounts.utility_token.check_reward_ready(now)?;

        let pool_balance = ctx.accounts.reward_vault.amount;
        let payout = calculate_reward(
            pool_balance,
            ctx.accounts.stake_record.amount,
            ctx.accounts.keyword_vault.total_staked,
        )?;
        require!(payout > 0, ErrorCode::RewardPoolEmpty);

        ctx.accounts.utility_token.record_distribution(payout, now)?;
        ctx.accounts.stake_record.record_reward(payout)?;

        let seeds: &[&[u8]] = &[VAULT_AUTHORITY_SEED, utility_token_key.as_ref(), &[authority_bump]];
        transfer_from_vault(
            &ctx.accounts.token_program,
            &ctx.accounts.reward_vault,
            &ctx.accounts.staker_token_account,
            &ctx.accounts.real_token_mint,
            &ctx.accounts.vault_authority,
            seeds,
            payout,
        )?;

        msg!("Rewards: {} paid to {} (pool {})",
             payout, ctx.accounts.stake_record.staker, pool_balance);

        emit!(RewardsDistributed {
            utility_token: utility_token_key,
            keyword_vault: ctx.accounts.keyword_vault.key(),
            staker: ctx.accounts.stake_record.staker,
            amount: payout,
            pool_balance_before: pool_balance,
            timestamp: now,
        });

        Ok(())
    }

    pub fn fund_reward_pool(ctx: Context<FundRewardPool>, amount: u64) -> Result<()> {
        require!(amount >= MIN_STAKE, ErrorCode::InsufficientCost);

        transfer_from_user(
            &ctx.accounts.token_program,
            &ctx.accounts.funder_token_account,
            &ctx.accounts.reward_vault,
            &ctx.accounts.real_token_mint,
            &ctx.accounts.funder,
            amount,
        )?;

        emit!(RewardPoolFunded {
            utility_token: ctx.accounts.utility_token.key(),
            funder: ctx.accounts.funder.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // COMMENTS
    // ══════════════════════════════════════════════════════════════════════════

    /// Creates the record only. Funding is a separate transfer_to_vault_for_comment.
    pub fn post_comment(ctx: Context<PostComment>, text: String, cost: u64) -> Result<()> {
        let clock = Clock::get()?;
        let utility_token_key = ctx.accounts.utility_token.key();
        let index = ctx.accounts.utility_token.comment_count;

        ctx.accounts.comment.initialize(
            utility_token_key,
            ctx.accounts.author.key(),
            index,
            text,
            cost,
            clock.unix_timestamp,
            ctx.bumps.comment,
        )?;
        ctx.accounts.utility_token.next_comment_index()?;

        emit!(CommentPosted {
            comment: ctx.accounts.comment.key(),
            utility_token: utility_token_key,
            author: ctx.accounts.author.key(),
            index,
            boost: cost,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn boost_comment(ctx: Context<BoostComment>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        let comment = &mut ctx.accounts.comment;

        let decayed_from = comment.apply_boost(amount, clock.unix_timestamp)?;

        #[cfg(feature = "verbose")]
        msg!("Boost: +{} on decayed {} -> {}", amount, decayed_from, comment.boost);

        emit!(CommentBoosted {
            comment: comment.key(),
            booster: ctx.accounts.booster.key(),
            amount,
            decayed_from,
            boost: comment.boost,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn transfer_to_vault_for_comment(
        ctx: Context<TransferToVaultForComment>,
        amount: u64,
    ) -> Result<()> {
        require!(amount >= MIN_STAKE, ErrorCode::InsufficientCost);

        transfer_from_user(
            &ctx.accounts.token_program,
            &ctx.accounts.source_token_account,
            &ctx.accounts.vault_token_account,
            &ctx.accounts.mint,
            &ctx.accounts.authority,
            amount,
        )?;

        emit!(CommentFundsTransferred {
            source: ctx.accounts.source_token_account.key(),
            destination: ctx.accounts.vault_token_account.key(),
            authority: ctx.accounts.authority.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
