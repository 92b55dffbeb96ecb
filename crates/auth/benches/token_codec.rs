use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::{Duration, Utc};
use gatehouse_auth::{SecretKey, SigningAlgorithm, TokenCodec};

fn codec() -> TokenCodec {
    TokenCodec::new(&SecretKey::new("bench-secret").unwrap(), SigningAlgorithm::Hs256)
}

fn bench_encode(c: &mut Criterion) {
    let codec = codec();
    let now = Utc::now();
    c.bench_function("token_encode_hs256", |b| {
        b.iter(|| codec.encode(black_box("johndoe"), Duration::minutes(30), now).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let codec = codec();
    let now = Utc::now();
    let token = codec.encode("johndoe", Duration::minutes(30), now).unwrap();
    c.bench_function("token_decode_hs256", |b| {
        b.iter(|| codec.decode(black_box(&token), now).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
