//! Milestone payment-plan arithmetic.
//!
//! A contract's value can be split into N evenly sized milestone shares.
//! Amounts and percentages are rounded to 2 decimal places, with any
//! rounding remainder folded into the final share so the amounts sum
//! exactly to the contract value and the percentages sum exactly to 100.

use rust_decimal::Decimal;

/// One milestone's share of a contract value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub amount: Decimal,
    pub percentage: Decimal,
}

/// Split `total` into `count` even shares.
///
/// Returns an empty vec when `count` is 0; callers are expected to reject
/// that as a validation error before persisting anything.
pub fn even_split(total: Decimal, count: u32) -> Vec<Share> {
    if count == 0 {
        return Vec::new();
    }

    let count_dec = Decimal::from(count);
    let per_amount = (total / count_dec).round_dp(2);
    let per_percentage = (Decimal::ONE_HUNDRED / count_dec).round_dp(2);

    let mut shares = Vec::with_capacity(count as usize);
    for _ in 0..count - 1 {
        shares.push(Share {
            amount: per_amount,
            percentage: per_percentage,
        });
    }

    // Final share absorbs the rounding remainder.
    let allocated = per_amount * Decimal::from(count - 1);
    let allocated_pct = per_percentage * Decimal::from(count - 1);
    shares.push(Share {
        amount: total - allocated,
        percentage: Decimal::ONE_HUNDRED - allocated_pct,
    });

    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sums(shares: &[Share]) -> (Decimal, Decimal) {
        shares.iter().fold((Decimal::ZERO, Decimal::ZERO), |acc, s| {
            (acc.0 + s.amount, acc.1 + s.percentage)
        })
    }

    #[test]
    fn three_way_split_sums_exactly() {
        let shares = even_split(dec!(100.00), 3);
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].amount, dec!(33.33));
        assert_eq!(shares[2].amount, dec!(33.34));

        let (amount, pct) = sums(&shares);
        assert_eq!(amount, dec!(100.00));
        assert_eq!(pct, dec!(100.00));
    }

    #[test]
    fn percentages_sum_to_100_for_awkward_counts() {
        for count in [1u32, 2, 3, 6, 7, 11] {
            let shares = even_split(dec!(2500000000.00), count);
            let (amount, pct) = sums(&shares);
            assert_eq!(amount, dec!(2500000000.00), "count={count}");
            assert_eq!(pct, dec!(100.00), "count={count}");
        }
    }

    #[test]
    fn single_share_takes_everything() {
        let shares = even_split(dec!(75000.50), 1);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].amount, dec!(75000.50));
        assert_eq!(shares[0].percentage, dec!(100));
    }

    #[test]
    fn zero_count_yields_empty_plan() {
        assert!(even_split(dec!(100), 0).is_empty());
    }
}
