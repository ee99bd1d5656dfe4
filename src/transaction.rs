use solana_program::{instruction::Instruction, pubkey::Pubkey};
use solana_sdk::{message::Message, transaction::Transaction};

use crate::error::BuildError;

/// Fee payer plus an ordered, non-empty list of instructions.
///
/// Instructions run atomically in the order given. Nothing is signed here;
/// a recent blockhash and signatures are the submitter's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuyTransaction {
    fee_payer: Pubkey,
    instructions: Vec<Instruction>,
}

impl BuyTransaction {
    pub fn assemble(fee_payer: Pubkey, instructions: Vec<Instruction>) -> Result<Self, BuildError> {
        if instructions.is_empty() {
            return Err(BuildError::EmptyTransaction);
        }
        Ok(Self {
            fee_payer,
            instructions,
        })
    }

    pub fn fee_payer(&self) -> &Pubkey {
        &self.fee_payer
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Compiled legacy message with the fee payer first.
    pub fn message(&self) -> Message {
        Message::new(&self.instructions, Some(&self.fee_payer))
    }

    /// Unsigned transaction, ready for a blockhash and signatures.
    pub fn to_unsigned(&self) -> Transaction {
        Transaction::new_unsigned(self.message())
    }
}
