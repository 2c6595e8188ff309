use std::collections::HashSet;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use ranwire::sliv::*;
use ranwire::SlivError;

/// Brute force check of every (start, length) pair for one grid size.
fn check_bijection(n: u32) {
    let grid = ResourceGrid::new(n).unwrap();
    let mut seen = HashSet::new();

    for s in 0..n {
        for l in 1..=(n - s) {
            let sliv = sliv_from_s_and_l(n, s, l).unwrap();
            assert!(
                u64::from(sliv) < grid.sliv_upper_bound(),
                "n={n} s={s} l={l} sliv={sliv}"
            );
            assert_eq!(
                sliv_to_s_and_l(n, sliv),
                Ok((s, l)),
                "n={n} s={s} l={l} sliv={sliv}"
            );
            assert!(seen.insert(sliv), "duplicate sliv {sliv} for n={n}");
        }
    }
    assert_eq!(seen.len() as u32, n * (n + 1) / 2);
}

#[test]
fn sliv_brute_force_48() {
    check_bijection(48);
}

#[test]
fn sliv_bijection_all_grid_sizes() {
    for n in 1..=275 {
        check_bijection(n);
    }
}

#[test]
fn sliv_decode_then_encode() {
    // Exactly the encoder's image survives decode followed by encode.
    for n in [1, 2, 3, 11, 48, 52, 100] {
        let grid = ResourceGrid::new(n).unwrap();
        let mut fixed = 0;
        for sliv in 0..(n * n) {
            if grid.encode(grid.decode(sliv)) == Ok(sliv) {
                fixed += 1;
            }
        }
        assert_eq!(fixed, grid.allocations().count());
        assert_eq!(fixed as u32, n * (n + 1) / 2);
    }
}

#[test]
fn sliv_short_allocations_near_zero() {
    let grid = ResourceGrid::new(275).unwrap();
    for alloc in grid.allocations().filter(|a| a.length == 1) {
        assert_eq!(grid.encode(alloc), Ok(alloc.start));
    }
    for alloc in grid.allocations().filter(|a| a.length == 2) {
        assert_eq!(grid.encode(alloc), Ok(275 + alloc.start));
    }
}

#[test]
fn sliv_grid_size_zero() {
    assert_eq!(ResourceGrid::new(0), Err(SlivError::EmptyGrid));
    assert_eq!(sliv_from_s_and_l(0, 0, 0), Err(SlivError::EmptyGrid));
    assert_eq!(sliv_to_s_and_l(0, 17), Err(SlivError::EmptyGrid));
}

#[quickcheck]
fn sliv_round_trip(n: u16, s: u16, l: u16) -> TestResult {
    let (n, s, l) = (u32::from(n), u32::from(s), u32::from(l));
    if n == 0 || s >= n || l == 0 || l > n - s {
        return TestResult::discard();
    }

    let sliv = match sliv_from_s_and_l(n, s, l) {
        Ok(sliv) => sliv,
        Err(_) => return TestResult::failed(),
    };
    TestResult::from_bool(
        u64::from(sliv) < u64::from(n) * u64::from(n)
            && sliv_to_s_and_l(n, sliv) == Ok((s, l)),
    )
}

#[quickcheck]
fn sliv_rejects_outside_grid(n: u8, s: u8, l: u8) -> TestResult {
    let (n, s, l) = (u32::from(n), u32::from(s), u32::from(l));
    if n == 0 {
        return TestResult::discard();
    }

    let inside = s < n && l >= 1 && l <= n - s;
    match sliv_from_s_and_l(n, s, l) {
        Ok(_) => TestResult::from_bool(inside),
        Err(err) => TestResult::from_bool(
            !inside
                && err
                    == SlivError::InvalidAllocation {
                        grid_size: n,
                        start: s,
                        length: l,
                    },
        ),
    }
}

#[quickcheck]
fn sliv_decode_never_panics(n: u16, sliv: u32) -> TestResult {
    match ResourceGrid::new(u32::from(n)) {
        Ok(grid) => {
            let _ = grid.decode(sliv);
            TestResult::passed()
        }
        Err(_) => TestResult::discard(),
    }
}
