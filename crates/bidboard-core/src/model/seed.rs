//! Built-in seed set used when no bid source file is given.

use super::{Bid, BidStatus};

/// Returns the fixed seed collection: ten bids, alternating active/completed.
pub fn seed_bids() -> Vec<Bid> {
    use BidStatus::{Active, Completed};

    vec![
        Bid::new(1, "Project Alpha", "2025-01-05", "$500", Active),
        Bid::new(2, "Project Beta", "2025-01-06", "$750", Completed),
        Bid::new(3, "Project Gamma", "2025-01-07", "$600", Active),
        Bid::new(4, "Project Delta", "2025-01-08", "$900", Completed),
        Bid::new(5, "Project Epsilon", "2025-01-09", "$450", Active),
        Bid::new(6, "Project Zeta", "2025-01-10", "$800", Completed),
        Bid::new(7, "Project Eta", "2025-01-11", "$700", Active),
        Bid::new(8, "Project Theta", "2025-01-12", "$650", Completed),
        Bid::new(9, "Project Iota", "2025-01-13", "$550", Active),
        Bid::new(10, "Project Kappa", "2025-01-14", "$950", Completed),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_unique_ids_and_even_split() {
        let bids = seed_bids();
        assert_eq!(bids.len(), 10);

        let ids: HashSet<u32> = bids.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 10);

        let active = bids.iter().filter(|b| b.status == BidStatus::Active).count();
        assert_eq!(active, 5);
    }

    #[test]
    fn seed_fields_parse() {
        for bid in seed_bids() {
            assert!(bid.amount_value().is_some(), "amount of bid {}", bid.id);
            assert!(bid.parsed_date().is_some(), "date of bid {}", bid.id);
        }
    }
}
