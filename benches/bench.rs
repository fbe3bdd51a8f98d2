use criterion::{black_box, criterion_group, criterion_main, Criterion};

use morton_dilate::{DilationPlan, Interleaver, U256};

fn encode_benches(c: &mut Criterion) {
    let enc_2x32 = Interleaver::<u64>::new(2, 32).unwrap();
    c.bench_function("encode_2x32_u64", |b| {
        b.iter(|| enc_2x32.encode(black_box(&[0xDEAD_BEEFu32, 0xCAFE_F00D])))
    });

    let enc_3x16 = Interleaver::<u64>::new(3, 16).unwrap();
    c.bench_function("encode_3x16_u64", |b| {
        b.iter(|| enc_3x16.encode(black_box(&[0x1234u16, 0x5678, 0x9ABC])))
    });

    let enc_4x16 = Interleaver::<u64>::new(4, 16).unwrap();
    c.bench_function("encode_4x16_u64", |b| {
        b.iter(|| enc_4x16.encode(black_box(&[0x1234u16, 0x5678, 0x9ABC, 0xDEF0])))
    });

    let enc_4x64 = Interleaver::<U256>::new(4, 64).unwrap();
    c.bench_function("encode_4x64_u256", |b| {
        b.iter(|| {
            enc_4x64.encode(black_box(&[
                0xAAAA_AAAA_AAAA_AAAAu64,
                0x0000_0000_FFFF_FFFF,
                0xFFFF_FFFF_0000_0000,
                0x0000_FFFF_FFFF_0000,
            ]))
        })
    });
}

fn decode_benches(c: &mut Criterion) {
    let enc_3x16 = Interleaver::<u64>::new(3, 16).unwrap();
    let key = enc_3x16.encode(&[0x1234u16, 0x5678, 0x9ABC]).unwrap();
    c.bench_function("decode_3x16_u64", |b| {
        b.iter(|| {
            let mut out = [0u16; 3];
            enc_3x16.decode_into(black_box(key), &mut out).unwrap();
            out
        })
    });
}

fn plan_benches(c: &mut Criterion) {
    c.bench_function("generate_plan_16_gap2", |b| {
        b.iter(|| DilationPlan::<u64>::generate(black_box(16), black_box(2)))
    });
}

criterion_group!(benches, encode_benches, decode_benches, plan_benches);
criterion_main!(benches);
