//! Criterion benchmarks for carematch.
//!
//! Covers the per-request hot paths:
//! - Address normalization
//! - Department resolution (direct and synonym stages)
//! - Full recommendation over a synthetic hospital table

use std::hint::black_box;
use std::sync::Arc;

use carematch::address::normalize;
use carematch::analysis::tokenizer::LTokenizer;
use carematch::dataset::{DiseaseRecord, HospitalRecord, Repository};
use carematch::recommend::{RecommendRequest, Recommender};
use carematch::synonym::SynonymEntry;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

const CITIES: [&str; 4] = ["대전광역시", "서울특별시", "부산광역시", "세종시"];
const DISTRICTS: [&str; 5] = ["서구", "중구", "동구", "유성구", "대덕구"];
const DEPARTMENTS: [&str; 6] = ["내과", "신경과", "외과", "소아청소년과", "이비인후과", "치과"];

/// Generate a synthetic hospital table.
fn generate_hospitals(count: usize) -> Vec<HospitalRecord> {
    (0..count)
        .map(|i| {
            let city = CITIES[i % CITIES.len()];
            let district = DISTRICTS[(i / CITIES.len()) % DISTRICTS.len()];
            let departments = format!(
                "{},{}",
                DEPARTMENTS[i % DEPARTMENTS.len()],
                DEPARTMENTS[(i + 2) % DEPARTMENTS.len()]
            );
            let name = if i % 50 == 0 {
                format!("제{i}대학교병원")
            } else {
                format!("제{i}의원")
            };
            HospitalRecord::from_raw(
                &name,
                "의원",
                &departments,
                &format!("{city} {district} 관저동 {i}"),
            )
        })
        .collect()
}

fn build_recommender(hospitals: usize) -> Recommender {
    let repository = Repository::new(
        vec![
            DiseaseRecord::from_raw("두통, 어지러움, 구토", "신경과, 내과"),
            DiseaseRecord::from_raw("기침, 가래, 인후통", "이비인후과, 내과"),
            DiseaseRecord::from_raw("치통, 잇몸 출혈", "치과"),
        ],
        generate_hospitals(hospitals),
        &[
            SynonymEntry::new("두통", "머리아픔, 골치"),
            SynonymEntry::new("기침", "콜록, 쿨럭"),
        ],
    );
    let tokenizer = LTokenizer::from_vocabulary(["머리아픔", "콜록"]);
    Recommender::new(Arc::new(repository), Arc::new(tokenizer))
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Elements(1));

    group.bench_function("road_address", |b| {
        b.iter(|| normalize(black_box("대전광역시 서구 관저동로 123-45 (관저동, 한빛빌딩 3층)")))
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let recommender = build_recommender(10);
    let mut group = c.benchmark_group("resolve");

    group.bench_function("direct", |b| {
        b.iter(|| recommender.resolve_departments(black_box("두통")).unwrap())
    });
    group.bench_function("synonym", |b| {
        b.iter(|| {
            recommender
                .resolve_departments(black_box("콜록이 계속 나요"))
                .unwrap()
        })
    });

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [1_000, 10_000] {
        let recommender = build_recommender(size);
        let request = RecommendRequest::new("머리아픔이 심해요", "대전 서구");
        let fallback = RecommendRequest::new("발목 삠", "대전 서구");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("match_{size}"), |b| {
            b.iter(|| recommender.recommend(black_box(&request)))
        });
        group.bench_function(format!("fallback_{size}"), |b| {
            b.iter(|| recommender.recommend(black_box(&fallback)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_resolve, bench_recommend);
criterion_main!(benches);
