//! Performance benchmarks for address book search.
//!
//! These benchmarks measure search over books of different sizes:
//! - Name queries
//! - Phone substring queries
//! - The empty query, which matches every record

use address_book::error::StorageResult;
use address_book::{AddressBook, Record, RecordMap, SnapshotStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Store that never touches disk, so only search is measured.
struct NullStore;

impl SnapshotStore for NullStore {
    fn load(&self) -> StorageResult<RecordMap> {
        Ok(RecordMap::new())
    }

    fn save(&self, _records: &RecordMap) -> StorageResult<()> {
        Ok(())
    }
}

fn build_book(size: usize) -> AddressBook<NullStore> {
    let mut book = AddressBook::with_store(NullStore).unwrap();
    for i in 0..size {
        let mut record = Record::new(format!("Contact {:05}", i), Some("1990-05-20")).unwrap();
        record.add_phone(&format!("067{:07}", i)).unwrap();
        record.add_phone(&format!("050{:07}", i * 7 % 10_000_000)).unwrap();
        book.add_record(record).unwrap();
    }
    book
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100usize, 1_000, 10_000] {
        let book = build_book(size);

        group.bench_with_input(BenchmarkId::new("name", size), &book, |b, book| {
            b.iter(|| book.search(black_box("contact 0042")))
        });
        group.bench_with_input(BenchmarkId::new("phone", size), &book, |b, book| {
            b.iter(|| book.search(black_box("0000042")))
        });
        group.bench_with_input(BenchmarkId::new("empty", size), &book, |b, book| {
            b.iter(|| book.search(black_box("")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
