use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Cumulative stake of one staker in one keyword vault
///
/// Created on the first stake, topped up on later ones. After the vault is
/// eliminated the amount stays as history only; the vault aggregate is zero.
///
/// PDA Seeds: ["stake", keyword_vault, staker]
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct StakeRecord {
    /// Parent keyword vault
    pub keyword_vault: Pubkey,

    pub staker: Pubkey,

    /// Total staked by this staker in this vault
    pub amount: u64,

    /// Lifetime rewards paid to this staker for this vault
    pub rewards_received: u64,

    pub first_staked_at: i64,

    pub last_staked_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl StakeRecord {
    /// Account size calculation:
    /// - 2 Pubkeys: 32 * 2 = 64 bytes (keyword_vault, staker)
    /// - 4 u64/i64: 8 * 4 = 32 bytes
    /// - bump: 1 byte
    /// Total: 97 bytes
    pub const LEN: usize = 32 * 2 + 8 * 4 + 1;

    /// No stake written yet (freshly allocated account)
    pub fn is_new(&self) -> bool {
        self.staker == Pubkey::default()
    }

    /// Credit `amount` to this record. Returns true if the record was just created.
    pub fn add_stake(
        &mut self,
        keyword_vault: Pubkey,
        staker: Pubkey,
        amount: u64,
        now: i64,
        bump: u8,
    ) -> Result<bool> {
        let new_record = self.is_new();
        if !new_record {
            require!(
                self.keyword_vault == keyword_vault && self.staker == staker,
                ErrorCode::StakeRecordMismatch
            );
        }
        let total = self.amount.checked_add(amount).ok_or(ErrorCode::MathOverflow)?;

        if new_record {
            self.keyword_vault = keyword_vault;
            self.staker = staker;
            self.first_staked_at = now;
            self.rewards_received = 0;
            self.bump = bump;
        }
        self.amount = total;
        self.last_staked_at = now;
        Ok(new_record)
    }

    pub fn record_reward(&mut self, amount: u64) -> Result<()> {
        self.rewards_received = self
            .rewards_received
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}
