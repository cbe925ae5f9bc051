use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::errors::StackError;

/// True while nothing has been allocated at `account`.
pub fn is_unallocated(account: &AccountInfo) -> bool {
    account.owner == &system_program::ID && account.data_is_empty()
}

/// Create a program-owned account of `space` bytes at a PDA, paid for by `payer`.
///
/// `signer_seeds` must include the bump. An address that already holds an
/// account fails with `AccountAlreadyInUse`. Lamports sent to the address
/// ahead of time are kept and topped up to the rent-exempt minimum.
pub fn allocate_pda<'info>(
    payer: &Signer<'info>,
    target: &AccountInfo<'info>,
    system: &Program<'info, System>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    require!(is_unallocated(target), StackError::AccountAlreadyInUse);

    let rent = Rent::get()?.minimum_balance(space);
    let signer = &[signer_seeds];
    let program = system.to_account_info();

    if target.lamports() == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                program,
                CreateAccount {
                    from: payer.to_account_info(),
                    to: target.clone(),
                },
                signer,
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    let shortfall = rent.saturating_sub(target.lamports());
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                program.clone(),
                Transfer {
                    from: payer.to_account_info(),
                    to: target.clone(),
                },
            ),
            shortfall,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            program,
            Assign {
                account_to_assign: target.clone(),
            },
            signer,
        ),
        &crate::ID,
    )
}

/// Write `record` (discriminator + fields) to the start of the account data.
pub fn write_record<T: AccountSerialize>(account: &AccountInfo, record: &T) -> Result<()> {
    let mut data = account.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}
