//! # Review Verification Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | Canonical serialization + personal hash | < 10µs |
//! | Signature recovery (canonical match) | < 1ms |
//! | Newline fallback (two recoveries) | < 2ms |
//! | Batch of 100 reviews (rayon) | scales with cores |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_02_signature_verification::{
    recover_address, verify_claim, ReviewVerificationApi, ReviewVerificationService,
    VerificationRequest,
};
use shared_crypto::{personal_message_hash, PersonalSignature, Secp256k1KeyPair};
use shared_types::{ReviewMessage, WalletAddress};
use std::time::Duration;

struct Fixture {
    canonical: Vec<u8>,
    signature: PersonalSignature,
    padded_signature: PersonalSignature,
    address: String,
}

fn fixture(keypair: &Secp256k1KeyPair, comment: &str) -> Fixture {
    let message = ReviewMessage::new("user-1", "hotel-1", 5, comment).unwrap();
    let canonical = message.to_canonical_bytes().unwrap();

    let mut padded = canonical.clone();
    padded.push(b'\n');

    Fixture {
        signature: keypair.sign_personal(&canonical).unwrap(),
        padded_signature: keypair.sign_personal(&padded).unwrap(),
        address: WalletAddress::from_bytes(keypair.address()).to_hex(),
        canonical,
    }
}

fn bench_canonical_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical-message");

    group.bench_function("serialize_and_hash", |b| {
        b.iter(|| {
            let message =
                ReviewMessage::new("user-1", "hotel-1", 5, black_box("Great stay")).unwrap();
            let bytes = message.to_canonical_bytes().unwrap();
            black_box(personal_message_hash(&bytes))
        })
    });

    group.finish();
}

fn bench_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature-recovery");
    group.measurement_time(Duration::from_secs(10));

    let keypair = Secp256k1KeyPair::generate();
    let f = fixture(&keypair, "Great stay");
    let signature_hex = f.signature.to_hex();
    let padded_hex = f.padded_signature.to_hex();

    group.bench_function("recover_address", |b| {
        b.iter(|| black_box(recover_address(black_box(&f.canonical), &f.signature)))
    });

    group.bench_function("verify_claim_canonical", |b| {
        b.iter(|| black_box(verify_claim(&f.canonical, &signature_hex, &f.address)))
    });

    group.bench_function("verify_claim_newline_fallback", |b| {
        b.iter(|| black_box(verify_claim(&f.canonical, &padded_hex, &f.address)))
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch-verification");
    let service = ReviewVerificationService::new();
    let keypair = Secp256k1KeyPair::generate();

    for size in [10usize, 100] {
        let requests: Vec<_> = (0..size)
            .map(|i| {
                let comment = format!("Stay number {i}");
                let f = fixture(&keypair, &comment);
                VerificationRequest {
                    message: ReviewMessage::new("user-1", "hotel-1", 5, comment).unwrap(),
                    signature: f.signature.to_hex(),
                    wallet_address: f.address,
                }
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("batch_verify", size), &requests, |b, reqs| {
            b.iter(|| black_box(service.batch_verify(reqs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_canonical_message, bench_recovery, bench_batch);
criterion_main!(benches);
