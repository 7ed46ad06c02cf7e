//! Benchmarks for document building.
//!
//! Run with: cargo bench -p vize_folio

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vize_folio::{
    build_document, CommonMark, ComponentDefinition, DocumentationOverlay, PlainText,
};

// =============================================================================
// Test Data
// =============================================================================

/// Name list only.
const SIMPLE_COMPONENT: &str = r#"{
  "name": "x-tag",
  "props": ["label", "color", "closable"]
}"#;

/// Annotated props with one mixin.
const MEDIUM_COMPONENT: &str = r#"{
  "name": "x-checkbox",
  "mixins": [
    {
      "props": {
        "checked": { "type": "Boolean", "default": false },
        "value": { "type": ["String", "Number"], "required": true }
      }
    }
  ],
  "props": {
    "label": { "type": "String", "default": "", "note": "text next to the box" },
    "name": { "type": "String" },
    "indeterminate": { "type": "Boolean", "default": false }
  }
}"#;

/// Many props, nested mixins, structured defaults.
const COMPLEX_COMPONENT: &str = r#"{
  "name": "x-data-table",
  "mixins": [
    {
      "mixins": [
        { "props": { "loading": "Boolean", "error": ["String", "Object"] } }
      ],
      "props": {
        "page": { "type": "Number", "default": 1 },
        "pageSize": { "type": "Number", "default": 25 }
      }
    },
    {
      "props": {
        "sortBy": { "type": "String" },
        "sortDesc": { "type": "Boolean", "default": false }
      }
    }
  ],
  "props": {
    "items": { "type": "Array", "required": true, "note": "rows to display" },
    "columns": {
      "type": "Array",
      "default": [{ "key": "id", "label": "ID" }, { "key": "name", "label": "Name" }]
    },
    "rowKey": { "type": ["String", "Function"], "default": "id" },
    "dense": { "type": "Boolean", "default": false },
    "height": { "type": ["Number", "String"] },
    "selectable": { "type": "Boolean", "default": false },
    "selected": { "type": "Array", "default": [] },
    "filters": { "type": "Object", "default": { "query": "", "fields": [] } },
    "emptyText": { "type": "String", "default": "No data" },
    "stickyHeader": { "type": "Boolean", "default": true }
  }
}"#;

const OVERLAY: &str = r#"{
  "introduction": "A sortable, pageable table.",
  "description": "Renders **rows** from `items`.\n\n| column | meaning |\n|---|---|\n| key | field |\n",
  "props": {
    "items": { "note": "rows to display, one object per row" },
    "virtual": { "type": "Boolean", "default": false }
  }
}"#;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_document");

    let cases = [
        ("simple", SIMPLE_COMPONENT),
        ("medium", MEDIUM_COMPONENT),
        ("complex", COMPLEX_COMPONENT),
    ];

    for (name, source) in cases {
        let component = ComponentDefinition::from_json(source).unwrap();
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| build_document(black_box(&component), None, false, &PlainText))
        });
    }

    group.finish();
}

fn bench_overlay(c: &mut Criterion) {
    let component = ComponentDefinition::from_json(COMPLEX_COMPONENT).unwrap();
    let overlay = DocumentationOverlay::from_json(OVERLAY).unwrap();
    let renderer = CommonMark::default();

    c.bench_function("build_document/overlay_commonmark", |b| {
        b.iter(|| {
            build_document(
                black_box(&component),
                Some(black_box(&overlay)),
                false,
                &renderer,
            )
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse/complex_component", |b| {
        b.iter(|| ComponentDefinition::from_json(black_box(COMPLEX_COMPONENT)).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_overlay, bench_parse);
criterion_main!(benches);
