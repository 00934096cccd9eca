//! Instance input and tour output.
//!
//! The wire format is a whitespace/newline-separated token stream: an
//! integer city count followed by that many `x y` coordinate pairs.
//! Malformed input is rejected here, at the boundary, so the search loop
//! only ever sees well-formed instances.

use std::io::BufRead;

use thiserror::Error;

use super::types::{City, TspInstance};

/// Failure to read a TSP instance.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected a city count, got {0:?}")]
    Count(String),

    #[error("city count must be positive, got {0}")]
    NonPositiveCount(i64),

    #[error("expected {expected} coordinate pairs, found {found}")]
    TooFewCoordinates { expected: usize, found: usize },

    #[error("expected a coordinate, got {0:?}")]
    Coordinate(String),

    #[error("coordinate is not finite: {0}")]
    NonFiniteCoordinate(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads an instance from a token stream: a city count, then that many
/// coordinate pairs. Tokens past the declared count are ignored.
pub fn read_instance<R: BufRead>(mut reader: R) -> Result<TspInstance, ParseError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    let mut tokens = input.split_whitespace();

    let count_token = tokens.next().unwrap_or("");
    let count: i64 = count_token
        .parse()
        .map_err(|_| ParseError::Count(count_token.to_string()))?;
    if count <= 0 {
        return Err(ParseError::NonPositiveCount(count));
    }
    let count = count as usize;

    let mut cities = Vec::with_capacity(count);
    while cities.len() < count {
        let x = parse_coordinate(tokens.next(), count, cities.len())?;
        let y = parse_coordinate(tokens.next(), count, cities.len())?;
        cities.push(City { x, y });
    }

    Ok(TspInstance::new(cities))
}

fn parse_coordinate(
    token: Option<&str>,
    expected: usize,
    found: usize,
) -> Result<f64, ParseError> {
    let token = token.ok_or(ParseError::TooFewCoordinates { expected, found })?;
    let value: f64 = token
        .parse()
        .map_err(|_| ParseError::Coordinate(token.to_string()))?;
    if !value.is_finite() {
        return Err(ParseError::NonFiniteCoordinate(value));
    }
    Ok(value)
}

/// Formats a tour as space-separated 1-based city indices in visiting
/// order, matching the indices a user numbered their cities with.
pub fn format_tour(tour: &[usize]) -> String {
    tour.iter()
        .map(|&i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
