//! # Channels Auth Benchmarks
//!
//! Per-call cost of every signed artefact. All operations are synchronous and
//! CPU-bound, so these numbers are the whole cost of an auth endpoint minus
//! transport.
//!
//! | Group | Operation |
//! |-------|-----------|
//! | signature | HMAC sign / constant-time verify |
//! | authorization | private, presence, encrypted channel auth |
//! | encryption | seal / open at several payload sizes |
//! | webhook | verify + decrypt, by event count |
//! | rest | signed URL construction |

use ch_tests::benchmarks::fixtures::{client, encrypted_webhook_body, webhook_headers, MASTER_KEY};
use channels_runtime::{MemberData, SessionRequest, SignRequest};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_crypto::{decrypt, encrypt, sign, verify, MasterKey};

// ============================================================================
// SIGNATURE ENGINE
// ============================================================================

fn bench_signatures(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature");
    let message = b"1234.1234:private-foobar";
    let signature = sign(message, b"7ad3773142a6692b25b8");

    group.bench_function("sign", |b| {
        b.iter(|| sign(black_box(message), black_box(b"7ad3773142a6692b25b8")))
    });
    group.bench_function("verify", |b| {
        b.iter(|| verify(black_box(&signature), b"7ad3773142a6692b25b8", black_box(message)))
    });
    group.finish();
}

// ============================================================================
// CHANNEL AUTHORIZATION
// ============================================================================

fn bench_authorization(c: &mut Criterion) {
    let client = client();
    let member = MemberData::new("10").with_info("name", "Mr. Pusher");
    let mut group = c.benchmark_group("authorization");

    group.bench_function("private", |b| {
        b.iter(|| {
            client.authorize_channel(
                black_box(b"channel_name=private-foobar&socket_id=1234.1234"),
                None,
            )
        })
    });
    group.bench_function("presence", |b| {
        b.iter(|| {
            client.authorize_channel(
                black_box(b"channel_name=presence-foobar&socket_id=1234.1234"),
                Some(&member),
            )
        })
    });
    group.bench_function("encrypted", |b| {
        b.iter(|| {
            client.authorize_channel(
                black_box(b"channel_name=private-encrypted-foobar&socket_id=1234.1234"),
                None,
            )
        })
    });
    group.bench_function("session_token", |b| {
        let request = SessionRequest::anonymous(["private-foo", "private-bar", "presence-foobar"])
            .for_user("callum");
        b.iter(|| client.authenticate_session(black_box(&request)))
    });
    group.finish();
}

// ============================================================================
// ENCRYPTION ENGINE
// ============================================================================

fn bench_encryption(c: &mut Criterion) {
    let key = MasterKey::from_bytes(MASTER_KEY.as_bytes()).expect("fixture key is 32 bytes");
    let channel = "private-encrypted-bench";
    let mut group = c.benchmark_group("encryption");

    for size in [64usize, 1024, 7 * 1024] {
        let plaintext = vec![b'x'; size];
        let sealed = encrypt(channel, &plaintext, &key).expect("encryption succeeds");

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("seal", size), &plaintext, |b, pt| {
            b.iter(|| encrypt(channel, black_box(pt), &key))
        });
        group.bench_with_input(BenchmarkId::new("open", size), &sealed, |b, env| {
            b.iter(|| decrypt(channel, black_box(env), &key))
        });
    }
    group.finish();
}

// ============================================================================
// WEBHOOKS
// ============================================================================

fn bench_webhooks(c: &mut Criterion) {
    let client = client();
    let mut group = c.benchmark_group("webhook");

    for events in [1usize, 10, 50] {
        let body = encrypted_webhook_body(&client, "private-encrypted-bench", events);
        let headers = webhook_headers(body.as_bytes());

        group.throughput(Throughput::Elements(events as u64));
        group.bench_with_input(BenchmarkId::new("verify_decrypt", events), &body, |b, body| {
            b.iter(|| client.webhook(&headers, black_box(body.as_bytes())))
        });
    }
    group.finish();
}

// ============================================================================
// REST SIGNING
// ============================================================================

fn bench_rest(c: &mut Criterion) {
    let client = client();
    let request = SignRequest::new("POST", client.app_path("events"))
        .with_param("info", "user_count,subscription_count")
        .with_body(r#"{"name":"foo","channels":["project-3"],"data":"{\"some\":\"data\"}"}"#);

    c.bench_function("rest/signed_url", |b| {
        b.iter(|| client.signed_url(black_box(&request)))
    });
}

criterion_group!(
    benches,
    bench_signatures,
    bench_authorization,
    bench_encryption,
    bench_webhooks,
    bench_rest
);
criterion_main!(benches);
