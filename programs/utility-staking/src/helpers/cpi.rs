use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self as token_interface, Mint, TokenAccount, TokenInterface};

// Token balance gateway: every balance movement of the program goes through
// these three calls. No business logic here, the token program enforces
// balances and fails the whole instruction on shortfall.

/// Transfer tokens out of an account owned by the signing user
#[inline(never)]
pub fn transfer_from_user<'info>(
    token_program: &Interface<'info, TokenInterface>,
    from: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new(
            token_program.to_account_info(),
            token_interface::TransferChecked {
                from: from.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: authority.to_account_info(),
            },
        ),
        amount,
        mint.decimals,
    )
}

/// Transfer tokens out of a program-held vault, signed by the vault authority PDA
#[inline(never)]
pub fn transfer_from_vault<'info>(
    token_program: &Interface<'info, TokenInterface>,
    from: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    vault_authority: &AccountInfo<'info>,
    seeds: &[&[u8]],
    amount: u64,
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            token_interface::TransferChecked {
                from: from.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: vault_authority.clone(),
            },
            &[seeds],
        ),
        amount,
        mint.decimals,
    )
}

/// Burn tokens held by a program vault, signed by the vault authority PDA
#[inline(never)]
pub fn burn_from_vault<'info>(
    token_program: &Interface<'info, TokenInterface>,
    from: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    vault_authority: &AccountInfo<'info>,
    seeds: &[&[u8]],
    amount: u64,
) -> Result<()> {
    token_interface::burn(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            token_interface::Burn {
                mint: mint.to_account_info(),
                from: from.to_account_info(),
                authority: vault_authority.clone(),
            },
            &[seeds],
        ),
        amount,
    )
}
