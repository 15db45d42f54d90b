use criterion::{black_box, criterion_group, criterion_main, Criterion};

use castellan_types::{Address, Selector};

fn blake2b_256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("blake2b_256_256B", |b| {
        b.iter(|| castellan_crypto::blake2b_256(black_box(&data)))
    });
}

fn blake2b_256_1kb_bench(c: &mut Criterion) {
    let data = vec![0xCDu8; 1024];

    c.bench_function("blake2b_256_1KB", |b| {
        b.iter(|| castellan_crypto::blake2b_256(black_box(&data)))
    });
}

fn blake2b_multi_bench(c: &mut Criterion) {
    let parts: Vec<&[u8]> = vec![&[1u8; 32], &[2u8; 64], &[3u8; 128]];

    c.bench_function("blake2b_256_multi_3parts", |b| {
        b.iter(|| castellan_crypto::blake2b_256_multi(black_box(&parts)))
    });
}

fn permission_digest_bench(c: &mut Criterion) {
    let sel = Selector::new([0xd9, 0xca, 0xed, 0x12]);
    let caller = Address::new([0x11; 20]);
    let target = Address::new([0x22; 20]);

    c.bench_function("permission_digest", |b| {
        b.iter(|| castellan_crypto::permission_digest(black_box(sel), caller, target))
    });
}

criterion_group!(
    benches,
    blake2b_256_bench,
    blake2b_256_1kb_bench,
    blake2b_multi_bench,
    permission_digest_bench,
);
criterion_main!(benches);
