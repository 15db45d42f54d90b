#![no_main]

use libfuzzer_sys::fuzz_target;

use castellan_nullables::MemoryAssetLedger;
use castellan_types::{Address, CustodyParams, Timestamp};
use castellan_vault::Vault;

const VAULT: Address = Address::new([0xA0; 20]);
const OWNER: Address = Address::new([0x01; 20]);
const TOKEN: Address = Address::new([0x10; 20]);
const BALANCE: u128 = 1_000_000;

// Dispatch arbitrary frames against an ungranted vault: must never panic
// and must never move a single token.
fuzz_target!(|data: &[u8]| {
    let mut ledger = MemoryAssetLedger::new();
    ledger.mint(TOKEN, VAULT, BALANCE);
    let mut vault = Vault::new(
        VAULT,
        OWNER,
        CustodyParams::default(),
        Box::new(ledger),
        Timestamp::new(1_000),
    );
    vault.grant(OWNER, &[]).expect("first grant");

    let caller = Address::new([0x02; 20]);
    let _ = vault.dispatch(caller, Timestamp::new(2_000_000), data);

    assert_eq!(vault.assets().balance_of(TOKEN, VAULT), BALANCE);
});
