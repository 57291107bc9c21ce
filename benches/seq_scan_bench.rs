use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use seqscan::metadata::MemoryCatalog;
use seqscan::query::Constant;
use seqscan::record::{Schema, Tuple};
use seqscan::storage::MemoryTableFile;
use seqscan::tx::TransactionId;
use seqscan::{Scan, SeqScan};

const ROWS: i32 = 10_000;

fn bench_seq_scan(c: &mut Criterion) {
    let mut schema = Schema::new();
    schema.add_int_field("id");
    schema.add_string_field("name");
    let tuples = (0..ROWS)
        .map(|i| Tuple::new(vec![Constant::int(i), Constant::string(format!("name{}", i))]))
        .collect();

    let catalog = Arc::new(MemoryCatalog::new());
    let table_id = catalog
        .add_table("bench", schema, Arc::new(MemoryTableFile::with_tuples(tuples)))
        .expect("add table");

    c.bench_function("seq_scan_full", |b| {
        b.iter(|| {
            let mut scan = SeqScan::new(catalog.clone(), TransactionId::new(), table_id, Some("b"));
            scan.open().expect("open");
            let mut count = 0;
            while scan.has_next().expect("has_next") {
                black_box(scan.next().expect("next"));
                count += 1;
            }
            assert_eq!(count, ROWS);
        })
    });

    c.bench_function("seq_scan_schema", |b| {
        let scan = SeqScan::new(catalog.clone(), TransactionId::new(), table_id, None);
        b.iter(|| black_box(scan.schema().expect("schema")))
    });
}

criterion_group!(benches, bench_seq_scan);
criterion_main!(benches);
