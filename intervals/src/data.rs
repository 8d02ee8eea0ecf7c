//! Loading intervals from `low,high` text records.
//!
//! Records that fail to parse, or whose low bound exceeds their high bound,
//! are logged and skipped.  Only I/O errors abort a load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use failure::{format_err, Error};
use log::{debug, warn};
use nom::{
    character::complete::{char, digit1, one_of, space0},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, pair, separated_pair},
    IResult,
};

use crate::Interval;

fn parse_integer(i: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<i64>()
    })(i)
}

fn parse_record(i: &str) -> IResult<&str, Interval> {
    let (i, (low, high)) = separated_pair(
        delimited(space0, parse_integer, space0),
        char(','),
        delimited(space0, parse_integer, space0),
    )(i)?;

    Ok((i, Interval::new(low, high)))
}

/// Parse a single `low,high` record.
pub fn parse_interval(line: &str) -> Result<Interval, Error> {
    let (_, interval) =
        all_consuming(parse_record)(line.trim()).map_err(|e| format_err!("parse error: {}", e))?;

    if interval.low > interval.high {
        return Err(format_err!(
            "low ({}) can not be greater than high ({})",
            interval.low,
            interval.high
        ));
    }

    Ok(interval)
}

/// Read every valid record from `reader`.
pub fn read_intervals<R: BufRead>(reader: R) -> Result<Vec<Interval>, Error> {
    let mut intervals = Vec::new();
    let mut discarded = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_interval(&line) {
            Ok(interval) => intervals.push(interval),
            Err(e) => {
                warn!("discarding bad data point {:?}: {}", line, e);
                discarded += 1;
            }
        }
    }
    debug!(
        "read {} intervals, discarded {} bad data points",
        intervals.len(),
        discarded
    );

    Ok(intervals)
}

/// Read every valid record from the file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Interval>, Error> {
    let path = path.as_ref();
    let f = File::open(path)
        .map_err(|e| format_err!("could not read {}: {}", path.display(), e))?;
    read_intervals(BufReader::new(f))
}
