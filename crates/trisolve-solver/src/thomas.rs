//! Scalar Thomas kernel for a single tridiagonal system.
//!
//! Both solver strategies reduce to this recurrence; they differ only in
//! how the work is dispatched across systems. Keeping the arithmetic in one
//! place is what makes the strategies bitwise-equivalent.

/// Solve one tridiagonal system in place.
///
/// `sub`, `diag`, `sup` and `rhs` are one system's coefficient rows;
/// `c_prime` and `y_prime` are caller-provided scratch of the same length;
/// the solution lands in `out`. All slices must have equal, nonzero length.
///
/// A zero pivot at any level is handled by the decoupling policy: both
/// intermediates for that level are replaced by zero, which severs the
/// recurrence there and zeroes that level's contribution downstream. No
/// division by zero is ever performed. Returns true if any pivot
/// degenerated.
pub fn solve_system_scalar(
    sub: &[f64],
    diag: &[f64],
    sup: &[f64],
    rhs: &[f64],
    c_prime: &mut [f64],
    y_prime: &mut [f64],
    out: &mut [f64],
) -> bool {
    let nk = out.len();
    debug_assert!(nk > 0);
    debug_assert_eq!(sub.len(), nk);
    debug_assert_eq!(diag.len(), nk);
    debug_assert_eq!(sup.len(), nk);
    debug_assert_eq!(rhs.len(), nk);
    debug_assert_eq!(c_prime.len(), nk);
    debug_assert_eq!(y_prime.len(), nk);

    let mut degenerate = false;

    // Forward elimination.
    if diag[0] != 0.0 {
        let rec = 1.0 / diag[0];
        c_prime[0] = sup[0] * rec;
        y_prime[0] = rhs[0] * rec;
    } else {
        c_prime[0] = 0.0;
        y_prime[0] = 0.0;
        degenerate = true;
    }

    for k in 1..nk {
        let pivot = diag[k] - sub[k] * c_prime[k - 1];
        if pivot != 0.0 {
            let rec = 1.0 / pivot;
            c_prime[k] = sup[k] * rec;
            y_prime[k] = (rhs[k] - sub[k] * y_prime[k - 1]) * rec;
        } else {
            c_prime[k] = 0.0;
            y_prime[k] = 0.0;
            degenerate = true;
        }
    }

    // Backward substitution.
    out[nk - 1] = y_prime[nk - 1];
    for k in (0..nk - 1).rev() {
        out[k] = y_prime[k] - c_prime[k] * out[k + 1];
    }

    degenerate
}
