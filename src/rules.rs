use serde::{Deserialize, Serialize};

/// Number of ratio rules. Rule `k` (1-based) permits merging two tiles whose
/// gcd-reduced values differ by an exact factor of `k`; rule 1 is the classic
/// "equal tiles merge".
pub const RULE_COUNT: usize = 5;

/// Toggle set for the ratio rules, indexed by ratio rather than named flags
/// so the rule count stays open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet {
    enabled: [bool; RULE_COUNT],
}

impl Default for RuleSet {
    fn default() -> Self {
        // New games start with every ratio rule enabled.
        Self::all_enabled()
    }
}

impl RuleSet {
    #[inline]
    pub const fn all_enabled() -> Self {
        Self {
            enabled: [true; RULE_COUNT],
        }
    }

    #[inline]
    pub const fn none() -> Self {
        Self {
            enabled: [false; RULE_COUNT],
        }
    }

    /// A set with a single ratio enabled.
    #[inline]
    pub fn only(ratio: u64) -> Self {
        let mut r = Self::none();
        let _ = r.set(ratio, true);
        r
    }

    /// True iff `ratio` is within 1..=RULE_COUNT and currently enabled.
    #[inline]
    pub fn is_enabled(&self, ratio: u64) -> bool {
        match ratio_index(ratio) {
            Some(i) => self.enabled[i],
            None => false,
        }
    }

    /// Toggle a single ratio rule. Returns false (and changes nothing) when
    /// `ratio` is outside 1..=RULE_COUNT.
    #[inline]
    pub fn set(&mut self, ratio: u64, on: bool) -> bool {
        match ratio_index(ratio) {
            Some(i) => {
                self.enabled[i] = on;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn any_enabled(&self) -> bool {
        self.enabled.iter().any(|&b| b)
    }

    /// Merge-eligibility predicate: reduce the pair by its gcd and test the
    /// integer ratio of the reduced values against the enabled set.
    ///
    /// Zeros never reach this comparison in the move pipeline (they are
    /// compacted away first); the explicit guard keeps the invariant local.
    /// A reduced pair that does not divide evenly has no integer ratio and
    /// never merges, as does any ratio above `RULE_COUNT`.
    #[inline]
    pub fn allows_merge(&self, a: u64, b: u64) -> bool {
        if a == 0 || b == 0 {
            // Zeros are stripped by compaction; an empty cell never merges.
            return false;
        }
        let g = gcd(a, b);
        let na = a / g;
        let nb = b / g;
        let (hi, lo) = if na >= nb { (na, nb) } else { (nb, na) };
        if hi % lo != 0 {
            return false;
        }
        self.is_enabled(hi / lo)
    }
}

#[inline]
fn ratio_index(ratio: u64) -> Option<usize> {
    if (1..=RULE_COUNT as u64).contains(&ratio) {
        Some((ratio - 1) as usize)
    } else {
        None
    }
}

#[inline]
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
