// crates/directory_core/benches/filter_bench.rs
use criterion::{criterion_group, criterion_main, Criterion};
use directory_core::{filter_all, normalize_dataset, FilterState};
use serde_json::{json, Map, Value};

fn mk_dataset(n: usize) -> Value {
    let fields = ["AI", "Robotics", "Quantum", "Biotech", "Climate"];
    let cities = ["Toronto", "Montreal", "Vancouver", "Berlin", "San Francisco Bay Area"];
    let mut companies = Map::new();
    for i in 0..n {
        let mut loc = Map::new();
        loc.insert(
            cities[i % cities.len()].to_string(),
            json!([40.0 + (i % 10) as f64, -70.0 - (i % 7) as f64]),
        );
        companies.insert(
            format!("Company {i}"),
            json!({
                "locations": [Value::Object(loc)],
                "links": { "website": format!("https://c{i}.example"), "linkedin": "" },
                "workFields": [fields[i % fields.len()], fields[(i + 2) % fields.len()]]
            }),
        );
    }
    json!({ "companies": companies })
}

fn bench_filter(c: &mut Criterion) {
    let companies = normalize_dataset(&mk_dataset(2_000)).unwrap();
    let st = FilterState::new()
        .with_location("to")
        .with_search_term("ai");
    c.bench_function("filter_all_2k", |b| {
        b.iter(|| {
            let _ = filter_all(&companies, &st);
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
