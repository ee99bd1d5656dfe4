use solana_program::instruction::{AccountMeta, Instruction};

use crate::{tests::key, BuildError, BuyTransaction};

fn instruction(program: u8) -> Instruction {
    Instruction::new_with_bytes(
        key(program),
        &[program],
        vec![AccountMeta::new(key(0x01), true), AccountMeta::new(key(program + 0x40), false)],
    )
}

#[test]
fn empty_is_rejected() {
    assert_eq!(
        BuyTransaction::assemble(key(0x01), vec![]),
        Err(BuildError::EmptyTransaction)
    );
}

#[test]
fn preserves_instruction_order() {
    let payer = key(0x01);

    for n in 1..=5u8 {
        let instructions: Vec<_> = (0..n).map(|i| instruction(0x10 + i)).collect();
        let tx = BuyTransaction::assemble(payer, instructions.clone()).unwrap();

        assert_eq!(*tx.fee_payer(), payer);
        assert_eq!(tx.instructions(), instructions.as_slice());

        let message = tx.message();
        assert_eq!(message.account_keys[0], payer);
        assert_eq!(message.instructions.len(), usize::from(n));
        for (i, compiled) in message.instructions.iter().enumerate() {
            let program = message.account_keys[usize::from(compiled.program_id_index)];
            assert_eq!(program, key(0x10 + i as u8));
            assert_eq!(compiled.data, vec![0x10 + i as u8]);
        }

        assert_eq!(tx.into_instructions(), instructions);
    }
}

#[test]
fn unsigned_transaction() {
    let payer = key(0x01);
    let tx = BuyTransaction::assemble(payer, vec![instruction(0x10)]).unwrap();

    let unsigned = tx.to_unsigned();
    assert_eq!(unsigned.message, tx.message());
    assert_eq!(unsigned.message.header.num_required_signatures, 1);
    assert_eq!(unsigned.signatures.len(), 1);
}
