#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use dnac_core::{CallPath, CallQuery, DnacClient, map_values_to_query_items};
use serde::Serialize;
use serde_json::json;
use std::hint::black_box;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeviceFilter {
    hostname: Vec<String>,
    management_ip_address: Vec<String>,
    family: Vec<String>,
    offset: Option<i64>,
    limit: Option<i64>,
}

fn benchmark_path_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_resolution");
    let client = DnacClient::builder()
        .build()
        .expect("default client should build");

    let test_cases = [
        ("/api/v1/network-device/{id}", vec![("id", "abc-123")]),
        (
            "/api/v1/discovery/{id}/network-device/{startIndex}/{recordsToReturn}",
            vec![("id", "42"), ("startIndex", "1"), ("recordsToReturn", "500")],
        ),
        (
            "/api/v1/file/namespace/{nameSpace}",
            vec![("nameSpace", "hello world & special chars @#$%")],
        ),
    ];

    for (i, (template, args)) in test_cases.iter().enumerate() {
        group.bench_function(format!("resolve_{i}"), |b| {
            b.iter(|| {
                let path = args
                    .iter()
                    .fold(CallPath::from(*template), |path, (name, value)| {
                        path.add_param(*name, value)
                    });
                let call = client.get(black_box(path));
                black_box(call).expect("path should resolve");
            });
        });
    }

    group.finish();
}

fn benchmark_query_flattening(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_flattening");

    let filter = DeviceFilter {
        hostname: (0..20).map(|i| format!("edge-{i}")).collect(),
        management_ip_address: (0..20).map(|i| format!("10.10.20.{i}")).collect(),
        family: vec!["Switches and Hubs".to_string(), "Routers".to_string()],
        offset: Some(1),
        limit: None,
    };

    group.bench_function("from_struct", |b| {
        b.iter(|| {
            let query = CallQuery::from_serializable(black_box(&filter)).expect("serializable");
            black_box(query.to_query_string().expect("encodable"));
        });
    });

    group.bench_function("map_values", |b| {
        b.iter(|| {
            let items = map_values_to_query_items(black_box([
                ("hostname", json!(["edge-1", "edge-2", "edge-3"])),
                ("limit", json!(null)),
                ("offset", json!(5)),
            ]));
            black_box(items);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_path_resolution, benchmark_query_flattening);
criterion_main!(benches);
