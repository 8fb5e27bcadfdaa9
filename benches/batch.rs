//! benches/batch.rs
//! Parallel vs sequential decryption of many vault texts
use ansible_vault_rs::{decrypt_batch, Decryptor};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const ORIGINAL_SECRET_VAULT_TEXT: &str = "$ANSIBLE_VAULT;1.1;AES256
33376630363236353839326136323337616663396463656632623265363339343537653937616139
6430356636313138366364643337653765383231656234630a613732363764383865613361656331
30323763636135383930323538356537326133613736633737343361373035626239653738393562
3062313433373737330a363931323135336163656337393630353536396530383366663030613738
3833
";

fn bench_batch(c: &mut Criterion) {
    let decryptor = Decryptor::new("the-secret-vault-key");

    let mut group = c.benchmark_group("batch-ops");
    group.sample_size(20);

    for n_texts in [1, 2, 4, 8, 16] {
        let texts = vec![ORIGINAL_SECRET_VAULT_TEXT; n_texts];

        group.bench_with_input(BenchmarkId::new("parallel", n_texts), &texts, |b, texts| {
            b.iter(|| black_box(decrypt_batch(&decryptor, black_box(texts))));
        });

        group.bench_with_input(BenchmarkId::new("sequential", n_texts), &texts, |b, texts| {
            b.iter(|| {
                for text in texts {
                    black_box(decryptor.decrypt(black_box(text)).unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
