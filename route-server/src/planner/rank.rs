//! Path ranking for search results.

use std::cmp::Ordering;

use crate::domain::FlightPath;

use super::config::TieBreak;

/// Rank paths by total duration, shortest first.
///
/// The sort is stable: paths with equal durations keep their incoming
/// order unless a tie break is requested.
pub fn rank_paths(mut paths: Vec<FlightPath>, tie_break: TieBreak) -> Vec<FlightPath> {
    paths.sort_by(|a, b| {
        let by_duration = a
            .total_duration_hours()
            .total_cmp(&b.total_duration_hours());
        if by_duration != Ordering::Equal {
            return by_duration;
        }

        match tie_break {
            TieBreak::None => Ordering::Equal,
            TieBreak::Price => a.total_price().cmp(&b.total_price()),
        }
    });

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AirportCode, RouteEdge};

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn direct(from: &str, to: &str, duration: f64, price: u32) -> FlightPath {
        FlightPath::direct(&RouteEdge::new(code(from), code(to), duration, price))
    }

    fn prices(paths: &[FlightPath]) -> Vec<u64> {
        paths.iter().map(|p| p.total_price()).collect()
    }

    #[test]
    fn rank_by_duration() {
        let paths = vec![
            direct("DEL", "BOM", 3.0, 1),
            direct("DEL", "BOM", 1.0, 2),
            direct("DEL", "BOM", 2.0, 3),
        ];

        let ranked = rank_paths(paths, TieBreak::None);
        assert_eq!(prices(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn ties_keep_incoming_order() {
        let paths = vec![
            direct("DEL", "BOM", 2.0, 900),
            direct("DEL", "BOM", 2.0, 100),
            direct("DEL", "BOM", 1.0, 500),
        ];

        let ranked = rank_paths(paths, TieBreak::None);
        assert_eq!(prices(&ranked), vec![500, 900, 100]);
    }

    #[test]
    fn ties_broken_by_price_when_requested() {
        let paths = vec![
            direct("DEL", "BOM", 2.0, 900),
            direct("DEL", "BOM", 2.0, 100),
            direct("DEL", "BOM", 1.0, 500),
        ];

        let ranked = rank_paths(paths, TieBreak::Price);
        assert_eq!(prices(&ranked), vec![500, 100, 900]);
    }

    #[test]
    fn empty_input() {
        assert!(rank_paths(Vec::new(), TieBreak::Price).is_empty());
    }
}
