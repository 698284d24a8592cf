//! Benchmark: encode/decode throughput for the color xyY codec and the
//! remote value process path (routing check + decode + cache update).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use groupbus::{
    Dpt, DptColorXyy, GroupAddress, RemoteValueColorXyy, Telegram, TelegramPayload, TelegramQueue,
    XyyColor,
};

fn bench_encode(c: &mut Criterion) {
    let value = XyyColor::new(Some((0.3127, 0.329)), Some(204));
    c.bench_function("encode_color_xyy", |b| {
        b.iter(|| DptColorXyy::encode(black_box(&value)).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let raw = DptColorXyy::encode(&XyyColor::new(Some((0.3127, 0.329)), Some(204))).unwrap();
    c.bench_function("decode_color_xyy", |b| {
        b.iter(|| DptColorXyy::decode(black_box(&raw)).unwrap())
    });
}

fn bench_process(c: &mut Criterion) {
    let queue = TelegramQueue::new();
    let destination: GroupAddress = "1/2/3".parse().unwrap();
    let mut remote = RemoteValueColorXyy::new(destination, queue.sender());
    let raw = DptColorXyy::encode(&XyyColor::new(Some((0.3127, 0.329)), Some(204))).unwrap();
    let telegram = Telegram::write(destination, TelegramPayload::Array(raw));
    c.bench_function("process_color_xyy", |b| {
        b.iter(|| remote.process(black_box(&telegram)))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_process);
criterion_main!(benches);
