use crate::grid::Grid;

/// Exponents of 2, 3 and 5 in `n`, i.e. `n = remainder * 2^e2 * 3^e3 * 5^e5`
/// with the remainder free of those factors.
#[inline]
fn factor_exponents(mut n: u64) -> (u32, u32, u32) {
    debug_assert!(n > 0);
    let mut exps = [0u32; 3];
    for (slot, p) in exps.iter_mut().zip([2u64, 3, 5]) {
        while n % p == 0 {
            n /= p;
            *slot += 1;
        }
    }
    (exps[0], exps[1], exps[2])
}

/// Weighted value of a single tile:
/// `value * 3^e3 * 5^e5 * 15^min(e3, e5)`.
///
/// Factors of 3 and 5 are rewarded super-linearly, with a compounding bonus
/// for tiles rich in both. Reference points: `tile_score(9) == 81`,
/// `tile_score(45) == 30375`.
#[inline]
pub fn tile_score(value: u64) -> u64 {
    if value == 0 {
        return 0;
    }
    let (_e2, e3, e5) = factor_exponents(value);
    value * 3u64.pow(e3) * 5u64.pow(e5) * 15u64.pow(e3.min(e5))
}

/// Total score of a grid: the sum of `tile_score` over all occupied cells.
///
/// Always a full-grid pass. A merge changes which tiles exist, so every
/// tile's contribution is re-derived after each successful move rather than
/// accumulated merge-by-merge.
#[inline]
pub fn total_score(grid: &Grid) -> u64 {
    grid.values().map(tile_score).sum()
}
