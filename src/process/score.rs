// src/process/score.rs

/// Ordinal claim priority derived from the dollar amount. Total over all
/// reals, negatives and zero included.
pub fn claim_score(amount: f64) -> i64 {
    if amount > 500.0 {
        10
    } else if amount >= 100.0 {
        7
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(claim_score(500.0), 7);
        assert_eq!(claim_score(500.01), 10);
        assert_eq!(claim_score(100.0), 7);
        assert_eq!(claim_score(99.99), 3);
    }

    #[test]
    fn extremes() {
        assert_eq!(claim_score(0.0), 3);
        assert_eq!(claim_score(-50.0), 3);
        assert_eq!(claim_score(1_000_000.0), 10);
    }
}
