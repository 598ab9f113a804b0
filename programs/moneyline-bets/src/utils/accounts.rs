use crate::{constants::*, error::MoneylineError, state::Wager};
use anchor_lang::prelude::*;
use anchor_lang::AccountDeserialize;

/// Loads the wager account expected at one slot of a settlement page. The
/// account must be program-owned and sit at the wager PDA of the bucket
/// participant for that slot, which ties the caller-supplied accounts to the
/// market's own ordering.
pub fn load_page_wager(
    acc_info: &AccountInfo,
    program_id: &Pubkey,
    market_key: &Pubkey,
    participant: &Pubkey,
) -> Result<Wager> {
    require_keys_eq!(
        *acc_info.owner,
        *program_id,
        MoneylineError::InvalidWagerAccount
    );

    let expected_pda = Pubkey::find_program_address(
        &[
            WAGER_SEED.as_bytes(),
            market_key.as_ref(),
            participant.as_ref(),
        ],
        program_id,
    )
    .0;
    require_keys_eq!(
        *acc_info.key,
        expected_pda,
        MoneylineError::InvalidWagerAccount
    );

    let data = acc_info.try_borrow_data()?;
    Wager::try_deserialize(&mut &data[..])
        .map_err(|_| MoneylineError::InvalidWagerAccountData.into())
}

/// Writes a wager back into its account, leaving the discriminator intact.
pub fn store_page_wager(acc_info: &AccountInfo, wager: &Wager) -> Result<()> {
    let serialized = wager
        .try_to_vec()
        .map_err(|_| MoneylineError::SerializeError)?;

    let mut data = acc_info.try_borrow_mut_data()?;
    if serialized.len() > data[DISCRIMINATOR_SIZE..].len() {
        return Err(MoneylineError::AccountDataTooSmall.into());
    }
    data[DISCRIMINATOR_SIZE..DISCRIMINATOR_SIZE + serialized.len()].copy_from_slice(&serialized);

    Ok(())
}
