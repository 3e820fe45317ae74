use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;

/// Split collected launch funds into (tax, liquidity)
/// Formula: tax = funds * TAX_PERCENT / 100 (truncating), liquidity = funds - tax
pub fn calculate_launch_split(funds_collected: u64) -> Result<(u64, u64)> {
    let tax = (funds_collected as u128)
        .checked_mul(TAX_PERCENT as u128)
        .and_then(|x| x.checked_div(100))
        .ok_or(ErrorCode::MathOverflow)?;
    let tax = u64::try_from(tax).map_err(|_| ErrorCode::MathOverflow)?;
    let liquidity = funds_collected.checked_sub(tax).ok_or(ErrorCode::MathOverflow)?;

    #[cfg(feature = "verbose")]
    msg!("Launch split: funds={}, tax={}, liquidity={}", funds_collected, tax, liquidity);

    Ok((tax, liquidity))
}

/// Reward owed to one staker for a single distribution.
///
/// A fixed slice of the pool (`REWARD_POOL_SLICE_BPS`) is released per call and
/// shared pro-rata by stake: `payout = pool * slice_bps / 10000 * stake / total_staked`.
/// A nonzero stake on a nonempty pool earns at least 1 unit.
/// The payout never exceeds the pool balance.
pub fn calculate_reward(pool_balance: u64, stake_amount: u64, total_staked: u64) -> Result<u64> {
    require!(total_staked > 0, ErrorCode::NoStakes);
    require!(stake_amount <= total_staked, ErrorCode::InvalidParameter);

    let slice = (pool_balance as u128)
        .checked_mul(REWARD_POOL_SLICE_BPS as u128)
        .ok_or(ErrorCode::MathOverflow)?
        / BPS_DENOMINATOR as u128;

    let mut payout = slice
        .checked_mul(stake_amount as u128)
        .ok_or(ErrorCode::MathOverflow)?
        / total_staked as u128;

    // Floor of 1 unit for dust shares
    if stake_amount > 0 && pool_balance > 0 {
        payout = payout.max(1).min(pool_balance as u128);
    }

    #[cfg(feature = "verbose")]
    msg!("Reward calc: pool={}, slice={}, stake={}/{}, payout={}",
         pool_balance, slice, stake_amount, total_staked, payout);

    u64::try_from(payout).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Boost value after `elapsed` seconds without activity.
///
/// Unchanged inside the first decay period (grace), then halved once per full
/// period. Reaches zero after 64 periods. Negative elapsed counts as zero.
pub fn decayed_boost(boost: u64, elapsed: i64) -> u64 {
    if elapsed < BOOST_DECAY_PERIOD {
        return boost;
    }
    let halvings = elapsed / BOOST_DECAY_PERIOD;
    if halvings >= u64::BITS as i64 {
        return 0;
    }
    boost >> halvings
}
