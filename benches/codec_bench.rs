//! Benchmark for address codec and transaction encoding performance

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soroban_executor::codec::{
    decode_contract_address, encode_contract_address, i128_from_parts,
};
use soroban_executor::signing::transaction_hash;
use soroban_executor::tx_builder::{build_invocation_tx, into_envelope, MIN_BASE_FEE};
use soroban_executor::{network, wire, Int128Parts, Keypair, ScVal, SourceAccount};
use stellar_xdr::curr::{ContractId, Hash, ScAddress};

const CONTRACT: &str = "CCFNZO33IO6GDTPLWWRJ5F34UBXEBOSYGSQJJGVLAJNNULU26CRZR6TM";

fn bench_decode_contract_address(c: &mut Criterion) {
    c.bench_function("decode_contract_address", |b| {
        b.iter(|| decode_contract_address(black_box(CONTRACT)));
    });
}

fn bench_encode_contract_address(c: &mut Criterion) {
    let contract_id = ContractId(Hash([42u8; 32]));

    c.bench_function("encode_contract_address", |b| {
        b.iter(|| encode_contract_address(black_box(&contract_id)));
    });
}

fn bench_i128_from_parts(c: &mut Criterion) {
    let parts = Int128Parts {
        hi: 54,
        lo: 7_000_000_123,
    };

    c.bench_function("i128_from_parts", |b| {
        b.iter(|| i128_from_parts(black_box(&parts)));
    });
}

fn bench_envelope_encode(c: &mut Criterion) {
    // One representative single-operation invocation, built once.
    let contract = ScAddress::Contract(ContractId(Hash([42u8; 32])));
    let source = SourceAccount::from_keypair(&Keypair::from_seed_bytes(&[9u8; 32]), 1000);
    let tx = build_invocation_tx(
        &contract,
        &source,
        vec![ScVal::U32(1), ScVal::I64(2)],
        "transfer",
        MIN_BASE_FEE,
    )
    .unwrap();
    let envelope = into_envelope(tx);

    c.bench_function("envelope_to_base64", |b| {
        b.iter(|| wire::to_base64(black_box(&envelope)));
    });
}

fn bench_transaction_hash(c: &mut Criterion) {
    let contract = ScAddress::Contract(ContractId(Hash([42u8; 32])));
    let source = SourceAccount::from_keypair(&Keypair::from_seed_bytes(&[9u8; 32]), 1000);
    let tx = build_invocation_tx(&contract, &source, vec![], "counter", MIN_BASE_FEE).unwrap();

    c.bench_function("transaction_hash", |b| {
        b.iter(|| transaction_hash(black_box(&tx), black_box(network::TESTNET_NETWORK_PASSPHRASE)));
    });
}

criterion_group!(
    benches,
    bench_decode_contract_address,
    bench_encode_contract_address,
    bench_i128_from_parts,
    bench_envelope_encode,
    bench_transaction_hash
);
criterion_main!(benches);
