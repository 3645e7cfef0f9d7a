//! Placement validator micro-benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use molle::inventory::{check_placement, GridCell, Rotation};
use molle::items::{ItemCatalog, ItemCategory, ItemDefinition, ItemInstance};

fn populated_vest() -> (ItemCatalog, Vec<ItemInstance>, ItemInstance) {
    let mut catalog = ItemCatalog::new();

    let mut small = ItemDefinition::new("small", "Small Item", ItemCategory::Other);
    small.grid_width = 1;
    small.grid_height = 1;
    catalog.insert(small);

    let mut long = ItemDefinition::new("long", "Long Item", ItemCategory::Weapon);
    long.grid_width = 3;
    long.grid_height = 1;
    catalog.insert(long);

    // Two full rows of 1x1 items in an 8x6 grid
    let mut existing = Vec::new();
    for y in 0..2 {
        for x in 0..8 {
            existing.push(ItemInstance::new("small").placed_at(x, y));
        }
    }

    let candidate = ItemInstance::new("long");
    (catalog, existing, candidate)
}

fn bench_check_placement(c: &mut Criterion) {
    let (catalog, existing, candidate) = populated_vest();

    c.bench_function("check_placement free cell", |b| {
        b.iter(|| {
            check_placement(
                black_box(&catalog),
                black_box(&existing),
                black_box(&candidate),
                GridCell::new(2, 4),
                Rotation::Deg0,
                8,
                6,
                None,
            )
        })
    });

    c.bench_function("check_placement colliding row", |b| {
        b.iter(|| {
            check_placement(
                black_box(&catalog),
                black_box(&existing),
                black_box(&candidate),
                GridCell::new(2, 0),
                Rotation::Deg0,
                8,
                6,
                None,
            )
        })
    });
}

criterion_group!(benches, bench_check_placement);
criterion_main!(benches);
