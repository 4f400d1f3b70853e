use super::*;

#[test]
fn hash_input_sets_only_name_and_digest() {
    let id = Identity::hash_input(b"alice");
    assert_eq!(id.name, "alice");
    assert_eq!(id.digest, digest(b"alice"));
    assert_eq!(id.color, Rgb8::default());
    assert!(id.grid.is_empty());
    assert!(id.cells.is_empty());
    assert!(id.regions.is_empty());
}

#[test]
fn empty_name_is_accepted() {
    let id = Identity::derive("");
    assert_eq!(id.name, "");
    assert_eq!(id.digest.to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(id.color, Rgb8::new(0xd4, 0x1d, 0x8c));
    assert_eq!(id.grid.len(), 25);
}

#[test]
fn derive_equals_explicit_stage_calls() {
    let seeded = Identity::hash_input(b"bob");
    let by_hand = build_regions(filter_odd_cells(build_grid(colour(seeded.clone()))));
    assert_eq!(pipe(seeded, &STAGES), by_hand);
    assert_eq!(Identity::derive("bob"), by_hand);
}

#[test]
fn each_stage_touches_one_field() {
    let seeded = Identity::hash_input(b"carol");

    let coloured = colour(seeded.clone());
    assert_eq!(coloured.digest, seeded.digest);
    assert!(coloured.grid.is_empty());

    let gridded = build_grid(coloured.clone());
    assert_eq!(gridded.color, coloured.color);
    assert!(gridded.cells.is_empty());

    let filtered = filter_odd_cells(gridded.clone());
    assert_eq!(filtered.grid, gridded.grid);
    assert!(filtered.regions.is_empty());

    let laid_out = build_regions(filtered.clone());
    assert_eq!(laid_out.cells, filtered.cells);
    assert_eq!(laid_out.regions.len(), laid_out.cells.len());
}

#[test]
fn empty_stage_list_is_identity() {
    let seeded = Identity::hash_input(b"dave");
    assert_eq!(pipe(seeded.clone(), &[]), seeded);
}

#[test]
fn derive_is_deterministic() {
    for name in ["", "a", "zhansultan", "ünïcödé", "with space"] {
        assert_eq!(Identity::derive(name), Identity::derive(name));
    }
}
