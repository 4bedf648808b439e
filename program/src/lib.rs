mod game;
mod initialize;
mod pass;
mod set_dealer;
mod utils;
mod treasury;

use game::*;
use initialize::*;
use pass::*;
use set_dealer::*;
use treasury::*;

use evenodd_api::instruction::*;
use steel::*;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let (ix, data) = parse_instruction(&evenodd_api::ID, program_id, data)?;

    match ix {
        // Dealer
        EvenOddInstruction::Initialize => process_initialize(accounts, data)?,
        EvenOddInstruction::Fund => process_fund(accounts, data)?,
        EvenOddInstruction::Withdraw => process_withdraw(accounts, data)?,
        EvenOddInstruction::Roll => process_roll(accounts, data)?,
        EvenOddInstruction::SetDealer => process_set_dealer(accounts, data)?,

        // Player
        EvenOddInstruction::PlaceBet => process_place_bet(accounts, data)?,

        // Pass registry
        EvenOddInstruction::IssuePass => process_issue_pass(accounts, data)?,
        EvenOddInstruction::ExtendPass => process_extend_pass(accounts, data)?,
    }

    Ok(())
}

entrypoint!(process_instruction);
