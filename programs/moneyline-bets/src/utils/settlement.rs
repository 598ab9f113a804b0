/// Uniform prize per winning ticket: floor of pool over winning tickets.
/// The division remainder is never paid out; the finalize sweep moves it to
/// the treasury. Zero winning tickets yield a zero prize.
pub fn prize_per_ticket(pool: u64, winning_tickets: u64) -> u64 {
    if winning_tickets == 0 {
        return 0;
    }
    pool / winning_tickets
}

/// Clamps a caller-supplied `[offset, offset + limit)` range to a bucket of
/// `len` entries. Out-of-range pages resolve to an empty slice rather than
/// an error, so a conservative over-wide last page is harmless.
pub fn page_bounds(len: usize, offset: u64, limit: u64) -> (usize, usize) {
    let start = (offset as usize).min(len);
    let end = start.saturating_add(limit as usize).min(len);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prize_per_ticket_floors() {
        assert_eq!(prize_per_ticket(20, 15), 1);
        assert_eq!(prize_per_ticket(18, 15), 1);
        assert_eq!(prize_per_ticket(180, 15), 12);
        assert_eq!(prize_per_ticket(14, 15), 0);
    }

    #[test]
    fn test_prize_per_ticket_no_winners() {
        assert_eq!(prize_per_ticket(0, 0), 0);
        assert_eq!(prize_per_ticket(200, 0), 0);
    }

    #[test]
    fn test_prize_remainder_stays_below_winner_count() {
        for pool in [0u64, 1, 17, 18, 19, 1_000_000_007] {
            for winners in [1u64, 2, 15, 100] {
                let prize = prize_per_ticket(pool, winners);
                assert!(pool - prize * winners < winners);
            }
        }
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(10, 0, 4), (0, 4));
        assert_eq!(page_bounds(10, 4, 4), (4, 8));
        assert_eq!(page_bounds(10, 8, 4), (8, 10));
        assert_eq!(page_bounds(10, 0, 100), (0, 10));
    }

    #[test]
    fn test_page_bounds_out_of_range() {
        assert_eq!(page_bounds(10, 10, 4), (10, 10));
        assert_eq!(page_bounds(10, 50, 4), (10, 10));
        assert_eq!(page_bounds(0, 0, 4), (0, 0));
        assert_eq!(page_bounds(3, 0, u64::MAX), (0, 3));
        assert_eq!(page_bounds(3, u64::MAX, u64::MAX), (3, 3));
    }
}
