use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use saes_core::{decrypt_block, encrypt_block, expand_key, SaesKey, State};

fn bench_key_schedule(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let key = SaesKey::from(rng.gen::<u16>());

    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(&key));
    });
    group.finish();
}

fn bench_cipher(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let key = SaesKey::from(rng.gen::<u16>());
    let round_keys = expand_key(&key);
    let block = State::from_word(rng.gen());
    let ciphertext = encrypt_block(&block, &round_keys);

    let mut group = c.benchmark_group("cipher");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(&block, &round_keys));
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(&ciphertext, &round_keys));
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_cipher);
criterion_main!(benches);
