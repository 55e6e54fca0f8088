//! Textual instance and solution formats.
//!
//! The instance format is a point count `n` on the first line followed
//! by `n` lines of two real-valued coordinates. The solution format is
//! the tour length to two decimal places and a 0/1 optimality flag on
//! one line, then the visiting order as space-separated indices.

use crate::models::Point;
use crate::solver::SolveResult;

/// Parses a textual instance into a point list.
///
/// # Errors
///
/// Returns a message if the count line is missing or malformed, a
/// coordinate fails to parse, or fewer than `n` coordinate lines are
/// present. Lines beyond the declared count are ignored.
///
/// # Examples
///
/// ```
/// use tsp_kopt::io::parse_instance;
///
/// let points = parse_instance("3\n0 0\n0 1\n1 0\n").unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[1].y(), 1.0);
/// ```
pub fn parse_instance(input: &str) -> Result<Vec<Point>, String> {
    let mut lines = input.lines();

    let count: usize = lines
        .next()
        .ok_or_else(|| "missing point count line".to_string())?
        .trim()
        .parse()
        .map_err(|e| format!("invalid point count: {e}"))?;

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let line = lines
            .next()
            .ok_or_else(|| format!("expected {count} coordinate lines, got {i}"))?;
        let mut fields = line.split_whitespace();
        let x = parse_coordinate(fields.next(), i, "x")?;
        let y = parse_coordinate(fields.next(), i, "y")?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

fn parse_coordinate(field: Option<&str>, line: usize, axis: &str) -> Result<f64, String> {
    let raw = field.ok_or_else(|| format!("point {line}: missing {axis} coordinate"))?;
    raw.parse()
        .map_err(|e| format!("point {line}: invalid {axis} coordinate {raw:?}: {e}"))
}

/// Formats a solve result in the output contract: length to two decimal
/// places and the optimality flag, then the visiting order.
///
/// # Examples
///
/// ```
/// use tsp_kopt::io::{format_solution, parse_instance};
/// use tsp_kopt::solver::{solve_two_opt, SolverConfig};
///
/// let points = parse_instance("4\n0 0\n0 1\n1 1\n1 0\n").unwrap();
/// let result = solve_two_opt(&points, None, &SolverConfig::default());
/// assert_eq!(format_solution(&result), "4.00 0\n0 1 2 3");
/// ```
pub fn format_solution(result: &SolveResult) -> String {
    let order = result
        .tour
        .as_slice()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let flag = if result.proven_optimal { 1 } else { 0 };
    format!("{:.2} {}\n{}", result.length, flag, order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tour;

    #[test]
    fn test_parse_basic() {
        let points = parse_instance("2\n1.5 -2.5\n3 4\n").expect("valid");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x(), 1.5);
        assert_eq!(points[0].y(), -2.5);
        assert_eq!(points[1].x(), 3.0);
    }

    #[test]
    fn test_parse_zero_points() {
        let points = parse_instance("0\n").expect("valid");
        assert!(points.is_empty());
    }

    #[test]
    fn test_parse_ignores_trailing_lines() {
        let points = parse_instance("1\n0 0\n5 5\n").expect("valid");
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_parse_missing_count() {
        assert!(parse_instance("").is_err());
    }

    #[test]
    fn test_parse_bad_count() {
        assert!(parse_instance("three\n0 0\n").is_err());
    }

    #[test]
    fn test_parse_too_few_lines() {
        assert!(parse_instance("2\n0 0\n").is_err());
    }

    #[test]
    fn test_parse_bad_coordinate() {
        assert!(parse_instance("1\n0 north\n").is_err());
        assert!(parse_instance("1\n0\n").is_err());
    }

    #[test]
    fn test_format_two_decimals_and_flag() {
        let result = SolveResult {
            tour: Tour::new(vec![0, 2, 1]),
            length: 12.3456,
            proven_optimal: false,
            iterations: 7,
        };
        assert_eq!(format_solution(&result), "12.35 0\n0 2 1");
    }

    #[test]
    fn test_format_single_point() {
        let result = SolveResult {
            tour: Tour::new(vec![0]),
            length: 0.0,
            proven_optimal: false,
            iterations: 1,
        };
        assert_eq!(format_solution(&result), "0.00 0\n0");
    }
}
