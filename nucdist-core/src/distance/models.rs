//! Pairwise nucleotide distance estimators.
//!
//! Each estimator takes two rows of an alignment and returns either a
//! distance or an [`Undefined`] reason. Range checks run before every
//! logarithm, so no estimator produces NaN or infinity.

use crate::error::{DistanceResult, Undefined};

use super::freq::{combined_frequencies, nucleotide_frequencies};
use super::pairs::valid_pairs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnaDistanceModel {
    PDistance,
    JukesCantor,
    TajimaNei,
    Tamura,
}

impl DnaDistanceModel {
    pub const ALL: [DnaDistanceModel; 4] = [
        DnaDistanceModel::PDistance,
        DnaDistanceModel::JukesCantor,
        DnaDistanceModel::TajimaNei,
        DnaDistanceModel::Tamura,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DnaDistanceModel::PDistance => "PDistance",
            DnaDistanceModel::JukesCantor => "JukesCantor",
            DnaDistanceModel::TajimaNei => "TajimaNei",
            DnaDistanceModel::Tamura => "Tamura",
        }
    }

    pub fn estimate(self, a: &[u8], b: &[u8]) -> DistanceResult {
        let result = match self {
            DnaDistanceModel::PDistance => p_distance(a, b),
            DnaDistanceModel::JukesCantor => jukes_cantor(a, b),
            DnaDistanceModel::TajimaNei => tajima_nei(a, b),
            DnaDistanceModel::Tamura => tamura(a, b),
        };
        result.inspect_err(|reason| {
            tracing::trace!(model = self.name(), %reason, "distance undefined");
        })
    }
}

#[inline]
fn finite(model: &'static str, d: f64) -> DistanceResult {
    if d.is_finite() {
        Ok(d)
    } else {
        Err(Undefined::NonFinite { model })
    }
}

/// Uncorrected proportion of differing sites among ungapped columns.
pub fn p_distance(a: &[u8], b: &[u8]) -> DistanceResult {
    let pairs = valid_pairs(a, b);
    if pairs.is_empty() {
        return Err(Undefined::NoValidSites);
    }
    Ok(pairs.mismatches() as f64 / pairs.len() as f64)
}

/// Jukes-Cantor (1969): `d = -3/4 ln(1 - 4p/3)`.
///
/// `p` is taken over ungapped columns where both symbols are A/C/G/T. When
/// nothing differs, including when no such column exists, the distance is
/// exactly zero.
pub fn jukes_cantor(a: &[u8], b: &[u8]) -> DistanceResult {
    const MODEL: &str = "JukesCantor";

    let (compared, differing) = valid_pairs(a, b).strict_comparisons();
    if differing == 0 {
        return Ok(0.0);
    }
    let p = differing as f64 / compared as f64;
    let arg = 1.0 - 4.0 * p / 3.0;
    if arg <= 0.0 {
        return Err(Undefined::Saturated { model: MODEL, arg });
    }
    finite(MODEL, -0.75 * arg.ln())
}

/// Tajima-Nei (1984): `d = -b ln(1 - p/b)` with
///
/// ```text
/// b = 1/2 [1 - sum_i G_i^2 + p^2 / h]
/// h = sum_{i<j} X_ij^2 / (2 G_i G_j)
/// ```
///
/// `G` are base frequencies over both sequences, `X_ij` the frequency of
/// the unordered base pair `{i, j}` among ungapped columns. A base absent
/// from both sequences makes `h` singular and the distance undefined.
pub fn tajima_nei(a: &[u8], b: &[u8]) -> DistanceResult {
    const MODEL: &str = "TajimaNei";

    let pairs = valid_pairs(a, b);
    if pairs.is_empty() {
        return Err(Undefined::NoValidSites);
    }
    let g = combined_frequencies(a, b)?;
    let n = pairs.len() as f64;
    let p = pairs.mismatches() as f64 / n;

    let counts = pairs.base_pair_counts();
    let mut h = 0.0;
    // AC, AG, AT, CG, CT, GT
    for i in 0..3 {
        for j in (i + 1)..4 {
            let gigj = g.get(i) * g.get(j);
            if gigj == 0.0 {
                return Err(Undefined::ZeroDenominator {
                    model: MODEL,
                    term: "G_i*G_j",
                });
            }
            let x = (counts[i][j] + counts[j][i]) as f64 / n;
            h += 0.5 * x * x / gigj;
        }
    }

    if p == 0.0 {
        return Ok(0.0);
    }
    if h == 0.0 {
        return Err(Undefined::ZeroDenominator {
            model: MODEL,
            term: "h",
        });
    }

    let b = 0.5 * (1.0 - g.sum_of_squares() + p * p / h);
    if b <= 0.0 {
        return Err(Undefined::ZeroDenominator {
            model: MODEL,
            term: "b",
        });
    }
    let arg = 1.0 - p / b;
    if arg <= 0.0 {
        return Err(Undefined::Saturated { model: MODEL, arg });
    }
    finite(MODEL, -b * arg.ln())
}

/// Tamura (1992): `d = -C ln(1 - P/C - Q) - 1/2 (1 - C) ln(1 - 2Q)`.
///
/// `P` and `Q` are the transition and transversion proportions among
/// ungapped columns; `C = GC1 + GC2 - 2 GC1 GC2` from each sequence's own
/// GC content.
pub fn tamura(a: &[u8], b: &[u8]) -> DistanceResult {
    const MODEL: &str = "Tamura";

    let pairs = valid_pairs(a, b);
    if pairs.is_empty() {
        return Err(Undefined::NoValidSites);
    }
    let n = pairs.len() as f64;
    let subs = pairs.substitutions();

    let gc1 = nucleotide_frequencies(a)?.gc_content();
    let gc2 = nucleotide_frequencies(b)?.gc_content();
    let c = gc1 + gc2 - 2.0 * gc1 * gc2;
    if c == 0.0 {
        return Err(Undefined::ZeroDenominator {
            model: MODEL,
            term: "C",
        });
    }

    if subs.transitions == 0 && subs.transversions == 0 {
        return Ok(0.0);
    }

    let p = subs.transitions as f64 / n;
    let q = subs.transversions as f64 / n;
    let ts_arg = 1.0 - p / c - q;
    if ts_arg <= 0.0 {
        return Err(Undefined::Saturated {
            model: MODEL,
            arg: ts_arg,
        });
    }
    let tv_arg = 1.0 - 2.0 * q;
    if tv_arg <= 0.0 {
        return Err(Undefined::Saturated {
            model: MODEL,
            arg: tv_arg,
        });
    }
    finite(MODEL, -c * ts_arg.ln() - 0.5 * (1.0 - c) * tv_arg.ln())
}
