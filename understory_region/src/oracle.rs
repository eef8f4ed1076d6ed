// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brute-force reference model for differential testing.
//!
//! A [`Model`] is an unnormalized list of boxes. Intersection is the list of
//! pairwise box intersections, and coverage is compared by sampling one point per
//! cell of the grid spanned by every box edge involved. None of this shares code
//! with the band sweep, so the two cannot agree on a shared mistake.

use alloc::vec;
use alloc::vec::Vec;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Rect, Region, TestFlags};

/// `[x0, y0, x1, y1]`, half-open, non-empty.
type Box2 = [i32; 4];

#[derive(Clone, Debug, Default)]
struct Model {
    boxes: Vec<Box2>,
}

impl Model {
    fn add(&mut self, r: Rect) {
        if r.left < r.right && r.top < r.bottom {
            self.boxes.push([r.left, r.top, r.right, r.bottom]);
        }
    }

    fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    fn intersection(&self, other: &Self) -> Self {
        let mut boxes = Vec::new();
        for a in &self.boxes {
            for b in &other.boxes {
                let c = [a[0].max(b[0]), a[1].max(b[1]), a[2].min(b[2]), a[3].min(b[3])];
                if c[0] < c[2] && c[1] < c[3] {
                    boxes.push(c);
                }
            }
        }
        Self { boxes }
    }
}

/// Coverage of several models sampled on a common grid.
struct Grid {
    xs: Vec<i32>,
    ys: Vec<i32>,
}

impl Grid {
    fn spanning<'a>(boxes: impl IntoIterator<Item = &'a Box2>) -> Self {
        let (mut xs, mut ys) = (Vec::new(), Vec::new());
        for b in boxes {
            xs.extend([b[0], b[2]]);
            ys.extend([b[1], b[3]]);
        }
        xs.sort_unstable();
        xs.dedup();
        ys.sort_unstable();
        ys.dedup();
        Self { xs, ys }
    }

    /// One flag per grid cell, set when the cell is covered by any box.
    ///
    /// Every box edge must be a grid line.
    fn raster<'a>(&self, boxes: impl IntoIterator<Item = &'a Box2>) -> Vec<bool> {
        let w = self.xs.len().saturating_sub(1);
        let h = self.ys.len().saturating_sub(1);
        let mut cells = vec![false; w * h];
        for b in boxes {
            let line = |lines: &[i32], v: i32| {
                lines
                    .binary_search(&v)
                    .unwrap_or_else(|_| panic!("{v} is not a grid line"))
            };
            let (x0, x1) = (line(&self.xs, b[0]), line(&self.xs, b[2]));
            let (y0, y1) = (line(&self.ys, b[1]), line(&self.ys, b[3]));
            for y in y0..y1 {
                cells[y * w + x0..y * w + x1].fill(true);
            }
        }
        cells
    }
}

fn region_boxes(region: &Region) -> Vec<Box2> {
    region
        .rects()
        .map(|r| [r.left, r.top, r.right, r.bottom])
        .collect()
}

/// The overlap facts by definition: build the intersection, then compare it
/// against both sides.
fn oracle_test(a: &Model, b: &Model, wanted: TestFlags) -> TestFlags {
    let i = a.intersection(b);
    let grid = Grid::spanning(a.boxes.iter().chain(&b.boxes));
    let (ca, cb, ci) = (
        grid.raster(&a.boxes),
        grid.raster(&b.boxes),
        grid.raster(&i.boxes),
    );
    let mut out = TestFlags::empty();
    if wanted.contains(TestFlags::SHARED) && !i.is_empty() {
        out |= TestFlags::SHARED;
    }
    if wanted.contains(TestFlags::LEFT_EXCLUSIVE) && ci != ca {
        out |= TestFlags::LEFT_EXCLUSIVE;
    }
    if wanted.contains(TestFlags::RIGHT_EXCLUSIVE) && ci != cb {
        out |= TestFlags::RIGHT_EXCLUSIVE;
    }
    out
}

/// Every non-empty flag subset, in the order the original harness queried them.
const QUERIES: [TestFlags; 7] = [
    TestFlags::LEFT_EXCLUSIVE,
    TestFlags::RIGHT_EXCLUSIVE,
    TestFlags::SHARED,
    TestFlags::LEFT_EXCLUSIVE.union(TestFlags::RIGHT_EXCLUSIVE),
    TestFlags::LEFT_EXCLUSIVE.union(TestFlags::SHARED),
    TestFlags::RIGHT_EXCLUSIVE.union(TestFlags::SHARED),
    TestFlags::all(),
];

/// Up to 19 rectangles with origin and size each in `0..100`.
fn random_pair(rng: &mut StdRng) -> (Region, Model) {
    let mut region = Region::new();
    let mut model = Model::default();
    for _ in 0..rng.gen_range(0..20) {
        let (x, y) = (rng.gen_range(0..100), rng.gen_range(0..100));
        let (w, h) = (rng.gen_range(0..100), rng.gen_range(0..100));
        let r = Rect::new(x, y, x + w, y + h);
        region.add(r);
        model.add(r);
    }
    (region, model)
}

fn check_test_against_oracle(seed: u64, pairs: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    for pair in 0..pairs {
        let (r1, m1) = random_pair(&mut rng);
        let (r2, m2) = random_pair(&mut rng);
        for wanted in QUERIES {
            let got = r1.test(&r2, wanted);
            let expected = oracle_test(&m1, &m2, wanted);
            assert_eq!(
                got, expected,
                "seed {seed}, pair {pair}, query {wanted:?}\nr1:\n{r1}r2:\n{r2}"
            );
        }
    }
}

/// Check that `region` covers exactly the cells `expected` covers on `grid`.
#[track_caller]
fn assert_covers(region: &Region, grid: &Grid, expected: &[bool], what: &str) {
    assert!(region.is_valid(), "{what}: {:?}", region.validate());
    assert_eq!(
        grid.raster(&region_boxes(region)),
        expected,
        "{what} covers the wrong points:\n{region}"
    );
}

#[test]
fn test_matches_oracle() {
    check_test_against_oracle(0x5eed_0001, 400);
}

#[test]
fn test_matches_oracle_other_seed() {
    check_test_against_oracle(0x5eed_0002, 400);
}

#[test]
#[ignore = "full 10^6-pair sweep; run with --ignored in release mode"]
fn test_matches_oracle_million_pairs() {
    check_test_against_oracle(0x5eed_0003, 1_000_000);
}

#[test]
fn boolean_ops_match_oracle() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0004);
    for _ in 0..300 {
        let (r1, m1) = random_pair(&mut rng);
        let (r2, m2) = random_pair(&mut rng);
        let grid = Grid::spanning(m1.boxes.iter().chain(&m2.boxes));
        let (c1, c2) = (grid.raster(&m1.boxes), grid.raster(&m2.boxes));
        let combine = |f: fn(bool, bool) -> bool| -> Vec<bool> {
            c1.iter().zip(&c2).map(|(&a, &b)| f(a, b)).collect()
        };

        assert_covers(&r1, &grid, &c1, "added rects");

        let mut i = r1.clone();
        i.intersect(&r2);
        assert_covers(&i, &grid, &grid.raster(&m1.intersection(&m2).boxes), "intersect");

        let mut u = r1.clone();
        u.union(&r2);
        assert_covers(&u, &grid, &combine(|a, b| a || b), "union");

        let mut s = r1.clone();
        s.subtract(&r2);
        assert_covers(&s, &grid, &combine(|a, b| a && !b), "subtract");

        let mut x = r1.clone();
        x.xor(&r2);
        assert_covers(&x, &grid, &combine(|a, b| a != b), "xor");
    }
}

#[test]
fn predicates_match_oracle() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0005);
    for _ in 0..300 {
        let (r1, m1) = random_pair(&mut rng);
        let (r2, m2) = random_pair(&mut rng);
        let facts = oracle_test(&m1, &m2, TestFlags::all());
        assert_eq!(r1.intersects(&r2), facts.contains(TestFlags::SHARED));
        assert_eq!(
            r1.contains(&r2),
            !facts.contains(TestFlags::RIGHT_EXCLUSIVE)
        );
        assert_eq!(
            r1.is_equal(&r2),
            !facts.intersects(TestFlags::LEFT_EXCLUSIVE | TestFlags::RIGHT_EXCLUSIVE)
        );
    }
}
