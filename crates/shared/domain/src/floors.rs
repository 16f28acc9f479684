//! Floor availability for a venue date.
//!
//! A venue can be booked by several expos on the same date as long as each
//! books a distinct floor count. The universe of floor counts is
//! `1..=max_floors` and comes from configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_VENUE_MAX_FLOORS;
use crate::error::{DomainError, DomainResult};

/// Available and occupied floor counts for a date.
///
/// The two lists are sorted, disjoint, and together cover the universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FloorAvailability {
    pub available: Vec<i32>,
    pub occupied: Vec<i32>,
}

/// The configured set of bookable floor counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorUniverse {
    max_floors: u8,
}

impl Default for FloorUniverse {
    fn default() -> Self {
        Self {
            max_floors: DEFAULT_VENUE_MAX_FLOORS,
        }
    }
}

impl FloorUniverse {
    /// Create a universe of floor counts `1..=max_floors`.
    ///
    /// # Errors
    /// Returns validation error if `max_floors` is zero.
    pub fn new(max_floors: u8) -> DomainResult<Self> {
        if max_floors == 0 {
            return Err(DomainError::validation("Venue must have at least one floor"));
        }
        Ok(Self { max_floors })
    }

    pub fn max_floors(&self) -> i32 {
        i32::from(self.max_floors)
    }

    pub fn contains(&self, floors: i32) -> bool {
        (1..=self.max_floors()).contains(&floors)
    }

    /// Reject floor counts the venue cannot host
    pub fn validate_floor_count(&self, floors: i32) -> DomainResult<()> {
        if self.contains(floors) {
            Ok(())
        } else {
            Err(DomainError::validation(format!(
                "Floors must be between 1 and {}",
                self.max_floors
            )))
        }
    }

    /// Split the universe into available and occupied floor counts.
    ///
    /// `claimed` holds the floor counts of expos already on the date. Values
    /// outside the universe (e.g. after the venue size was reduced) are ignored.
    pub fn availability<I>(&self, claimed: I) -> FloorAvailability
    where
        I: IntoIterator<Item = i32>,
    {
        let occupied: BTreeSet<i32> = claimed
            .into_iter()
            .filter(|floors| self.contains(*floors))
            .collect();

        let available = (1..=self.max_floors())
            .filter(|floors| !occupied.contains(floors))
            .collect();

        FloorAvailability {
            available,
            occupied: occupied.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_date_has_every_floor_available() {
        let universe = FloorUniverse::default();
        let result = universe.availability(Vec::new());

        assert_eq!(result.available, vec![1, 2, 3, 4]);
        assert!(result.occupied.is_empty());
    }

    #[test]
    fn test_claimed_counts_are_occupied() {
        let universe = FloorUniverse::default();
        let result = universe.availability(vec![2, 4, 2]);

        assert_eq!(result.available, vec![1, 3]);
        assert_eq!(result.occupied, vec![2, 4]);
    }

    #[test]
    fn test_partition_covers_universe_exactly() {
        let universe = FloorUniverse::new(6).unwrap();
        let claims: [&[i32]; 4] = [&[], &[1], &[3, 5, 6], &[1, 2, 3, 4, 5, 6]];

        for claimed in claims {
            let result = universe.availability(claimed.iter().copied());
            let mut union: Vec<i32> = result
                .available
                .iter()
                .chain(result.occupied.iter())
                .copied()
                .collect();
            union.sort_unstable();

            assert_eq!(union, (1..=6).collect::<Vec<_>>());
            assert!(result.available.iter().all(|f| !result.occupied.contains(f)));
        }
    }

    #[test]
    fn test_out_of_universe_claims_ignored() {
        let universe = FloorUniverse::new(2).unwrap();
        let result = universe.availability(vec![0, 2, 7]);

        assert_eq!(result.available, vec![1]);
        assert_eq!(result.occupied, vec![2]);
    }

    #[test]
    fn test_floor_count_validation() {
        let universe = FloorUniverse::default();
        assert!(universe.validate_floor_count(1).is_ok());
        assert!(universe.validate_floor_count(4).is_ok());
        assert!(universe.validate_floor_count(0).is_err());
        assert!(universe.validate_floor_count(5).is_err());
    }

    #[test]
    fn test_zero_floor_venue_rejected() {
        assert!(FloorUniverse::new(0).is_err());
    }
}
