//! Integration tests for board generation.
//!
//! Generation is random per call, so these tests check distributional
//! invariants: pool counts, geometry, and port placement must hold for
//! every generated board even though the tile assignment differs run to run.

use hextally_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

fn terrain_histogram(board: &Board) -> HashMap<Terrain, usize> {
    let mut histogram = HashMap::new();
    for tile in board.land_tiles() {
        *histogram.entry(tile.terrain).or_insert(0) += 1;
    }
    histogram
}

fn number_histogram(board: &Board) -> HashMap<u8, usize> {
    let mut histogram = HashMap::new();
    for tile in board.land_tiles() {
        if let Some(n) = tile.number {
            *histogram.entry(n).or_insert(0) += 1;
        }
    }
    histogram
}

#[test]
fn standard_board_matches_the_classic_distribution() {
    let board = Board::generate(BoardSize::Small);

    assert_eq!(board.land_tiles().count(), 19);

    let terrains = terrain_histogram(&board);
    assert_eq!(terrains[&Terrain::Forest], 4);
    assert_eq!(terrains[&Terrain::Pasture], 4);
    assert_eq!(terrains[&Terrain::Grain], 4);
    assert_eq!(terrains[&Terrain::Hills], 3);
    assert_eq!(terrains[&Terrain::Mountains], 3);
    assert_eq!(terrains[&Terrain::Desert], 1);

    // The classic token set: one 2 and one 12, two each of the rest
    let numbers = number_histogram(&board);
    let total: usize = numbers.values().sum();
    assert_eq!(total, 18);
    assert_eq!(numbers[&2], 1);
    assert_eq!(numbers[&12], 1);
    for n in [3, 4, 5, 6, 8, 9, 10, 11] {
        assert_eq!(numbers[&n], 2, "expected two {} tokens", n);
    }
    assert!(!numbers.contains_key(&7));

    assert_eq!(board.sea_tiles().count(), 18);
    assert_eq!(board.ports().count(), 9);
}

#[test]
fn large_board_fills_radius_three() {
    let board = Board::generate(BoardSize::Large);

    assert_eq!(board.land_tiles().count(), 37);
    assert_eq!(board.sea_tiles().count(), 24);

    let terrains = terrain_histogram(&board);
    assert_eq!(terrains[&Terrain::Desert], 2);
    for terrain in Terrain::PRODUCING {
        assert_eq!(terrains[&terrain], 7);
    }

    let total: usize = number_histogram(&board).values().sum();
    assert_eq!(total, 35);

    assert_eq!(board.ports().count(), 12);
}

#[test]
fn coordinates_are_unique() {
    for size in [BoardSize::Small, BoardSize::Large] {
        let board = Board::generate(size);
        let coords: HashSet<HexCoord> = board.tiles().iter().map(|t| t.coord).collect();
        assert_eq!(coords.len(), board.len());
    }
}

#[test]
fn land_and_ring_geometry() {
    for size in [BoardSize::Small, BoardSize::Large] {
        let board = Board::generate(size);
        let land_radius = size.land_radius() as u32;

        for tile in board.land_tiles() {
            assert!(tile.coord.distance_from_origin() <= land_radius);
        }
        for tile in board.sea_tiles() {
            assert_eq!(tile.coord.distance_from_origin(), land_radius + 1);
            assert!(tile.number.is_none());
        }
    }
}

#[test]
fn ports_only_on_sea_tiles() {
    let board = Board::generate(BoardSize::Large);
    for tile in board.tiles() {
        if tile.port.is_some() {
            assert_eq!(tile.terrain, Terrain::Sea);
        }
    }
}

#[test]
fn port_pool_is_fixed_per_size() {
    let board = Board::generate(BoardSize::Small);
    let generic = board
        .ports()
        .filter(|p| p.kind == PortKind::Generic)
        .count();
    assert_eq!(generic, 4);

    // One 2:1 port per resource
    for kind in [
        PortKind::Forest,
        PortKind::Pasture,
        PortKind::Grain,
        PortKind::Hills,
        PortKind::Mountains,
    ] {
        assert_eq!(board.ports().filter(|p| p.kind == kind).count(), 1);
    }
}

#[test]
fn reruns_share_distributions_but_not_assignments() {
    let first = Board::generate(BoardSize::Small);

    // Identical histograms every run
    for _ in 0..5 {
        let other = Board::generate(BoardSize::Small);
        assert_eq!(terrain_histogram(&first), terrain_histogram(&other));
        assert_eq!(number_histogram(&first), number_histogram(&other));
    }

    // ...but the tile-to-terrain assignment differs with overwhelming
    // probability; allow a few retries to keep the test honest
    let assignment = |b: &Board| -> Vec<(HexCoord, Terrain, Option<u8>)> {
        b.land_tiles()
            .map(|t| (t.coord, t.terrain, t.number))
            .collect()
    };
    let mut found_different = false;
    for _ in 0..10 {
        if assignment(&Board::generate(BoardSize::Small)) != assignment(&first) {
            found_different = true;
            break;
        }
    }
    assert!(found_different, "generation should be randomized");
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = Board::generate_with_rng(BoardSize::Small, &mut StdRng::seed_from_u64(7));
    let b = Board::generate_with_rng(BoardSize::Small, &mut StdRng::seed_from_u64(7));

    let tiles_a: Vec<_> = a.tiles().iter().map(|t| (t.coord, t.terrain, t.number)).collect();
    let tiles_b: Vec<_> = b.tiles().iter().map(|t| (t.coord, t.terrain, t.number)).collect();
    assert_eq!(tiles_a, tiles_b);
}

#[test]
fn invalid_size_selector_is_rejected() {
    let err = BoardSize::try_from(4).unwrap_err();
    assert_eq!(err, BoardError::InvalidSize(4));
    assert!(err.to_string().contains("unsupported board size"));
}
