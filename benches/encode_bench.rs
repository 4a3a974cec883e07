// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use anyconn::http::{encode_form, encode_multipart};
use anyconn::{ContentType, DataType, PreparedRequest, RequestOptions, ResponseData};
use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn prepare_benchmark(c: &mut Criterion) {
    let fields = json!({
        "query": "rust http client",
        "page": 2,
        "exact": true,
        "tag": "a&b c"
    })
    .as_object()
    .cloned()
    .unwrap();

    c.bench_function("prepare_get_query", |b| {
        let options = RequestOptions::get("https://example.com/search").data(fields.clone());
        b.iter(|| PreparedRequest::from_options(black_box(&options)))
    });

    c.bench_function("prepare_post_formdata", |b| {
        let options = RequestOptions::post("https://example.com/upload")
            .data_type(DataType::FormData)
            .data(fields.clone());
        b.iter(|| PreparedRequest::from_options(black_box(&options)))
    });

    c.bench_function("encode_form", |b| b.iter(|| encode_form(black_box(&fields))));

    c.bench_function("encode_multipart", |b| {
        b.iter(|| encode_multipart(black_box(&fields), "AnyConnBench"))
    });
}

fn decode_benchmark(c: &mut Criterion) {
    let body = Bytes::from(
        serde_json::to_vec(&json!({
            "items": (0..100).map(|i| json!({"id": i, "name": format!("item-{}", i)})).collect::<Vec<_>>()
        }))
        .unwrap(),
    );

    c.bench_function("content_type_parse", |b| {
        b.iter(|| ContentType::parse(black_box("Application/JSON; boundary=x; charset=UTF-8")))
    });

    c.bench_function("decode_json_body", |b| {
        let content_type = ContentType::parse("application/json; charset=utf-8");
        b.iter(|| ResponseData::decode(&content_type, black_box(body.clone())))
    });
}

criterion_group!(benches, prepare_benchmark, decode_benchmark);
criterion_main!(benches);
