//! Two-column comma-separated input: one header row, then `x,y` rows.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmentError};
use crate::point::{Headers, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub headers: Headers,
    pub points: Vec<Point>,
}

/// Parses the pasted text into headers and points.
///
/// Line numbers in errors are 1-based and count from the header row of the
/// trimmed input.
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < 2 {
        return Err(SegmentError::malformed_input(
            None,
            "Data must contain a header row and at least one data row.",
        ));
    }

    let header: Vec<&str> = lines[0].split(',').map(str::trim).collect();
    if header.len() != 2 {
        return Err(SegmentError::malformed_input(
            Some(1),
            "Header row must contain exactly two comma-separated values.",
        ));
    }
    let headers = Headers::new(header[0], header[1]);

    let points = lines[1..]
        .iter()
        .enumerate()
        .map(|(index, line)| parse_row(line, index + 2))
        .collect::<Result<Vec<_>>>()?;

    log::debug!("parsed {} points under headers {:?}", points.len(), headers);
    Ok(Dataset { headers, points })
}

fn parse_row(line: &str, line_number: usize) -> Result<Point> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 2 {
        return Err(SegmentError::malformed_input(
            Some(line_number),
            format!("Invalid data format on line {}.", line_number),
        ));
    }
    match (parse_value(parts[0]), parse_value(parts[1])) {
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
        _ => Err(SegmentError::malformed_input(
            Some(line_number),
            format!("Non-numeric data found on line {}.", line_number),
        )),
    }
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
