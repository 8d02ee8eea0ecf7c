//! A collection of intervals over a bounded domain.
//!
//! Intervals are kept in insertion order until a query needs them sorted.
//! Every derived view (gaps, overlaps, rendering) is recomputed on each call
//! by walking the whole list, which is fine for the handful of intervals this
//! is used with.

use std::cmp::{max, min};
use std::io::Write;

use failure::Error;
use serde::{Deserialize, Serialize};

use crate::interval::{in_between_inclusive, Interval};
use crate::render;

const DEFAULT_MIN_LOW: i64 = 0;
const DEFAULT_MAX_HIGH: i64 = i64::MAX;

/// Whether `Intervals::items` is currently ordered by low bound.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Order {
    Sorted,
    Dirty,
}

#[derive(Clone, Debug)]
pub struct Intervals {
    items: Vec<Interval>,
    min_low: i64,
    max_high: i64,
    order: Order,
}

/// A snapshot of a collection and its derived views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub min_low: i64,
    pub max_high: i64,
    pub intervals: Vec<Interval>,
    pub gaps: Vec<Interval>,
    pub overlapped: Vec<Interval>,
}

impl Summary {
    /// Write the summary as pretty printed JSON.
    pub fn write_json<W: Write>(&self, w: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(w, self)?;
        Ok(())
    }
}

impl Default for Intervals {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LOW, DEFAULT_MAX_HIGH)
    }
}

impl Intervals {
    /// Generate a new empty collection over the domain [`min_low`, `max_high`].
    pub fn new(min_low: i64, max_high: i64) -> Self {
        Self {
            items: Vec::new(),
            min_low,
            max_high,
            order: Order::Dirty,
        }
    }

    pub fn min_low(&self) -> i64 {
        self.min_low
    }

    pub fn max_high(&self) -> i64 {
        self.max_high
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.order == Order::Sorted
    }

    /// The intervals in their current order, which is insertion order unless
    /// a query has sorted them since the last add.
    pub fn intervals(&self) -> &[Interval] {
        &self.items
    }

    /// Sort (if necessary) and return the intervals ordered by low bound.
    pub fn sorted_intervals(&mut self) -> &[Interval] {
        self.sort();
        &self.items
    }

    /// Append an interval.  No validation is done on it.
    pub fn add(&mut self, interval: Interval) {
        self.items.push(interval);
        self.order = Order::Dirty;
    }

    /// Sort the intervals by low bound (ascending).
    ///
    /// The sort is stable: intervals sharing a low bound keep the order they
    /// were added in.
    pub fn sort(&mut self) {
        if self.order == Order::Dirty {
            self.items.sort_by(Interval::by_low);
        }
        self.order = Order::Sorted;
    }

    /// Sort (if necessary) and return the parts of the domain that no interval
    /// covers.
    ///
    /// The cursor is reset to just past each interval's high bound rather than
    /// to the furthest high bound seen so far.  An interval nested inside an
    /// earlier one therefore pulls the cursor back and can report a gap that
    /// the earlier interval actually covers.
    pub fn gaps(&mut self) -> Vec<Interval> {
        self.sort();
        let mut gaps = Vec::new();
        let mut last_high = self.min_low;
        for interval in &self.items {
            if interval.low > last_high {
                gaps.push(Interval::new(last_high, interval.low.saturating_sub(1)));
            }
            last_high = interval.high.saturating_add(1);
        }
        if last_high < self.max_high {
            gaps.push(Interval::new(last_high, self.max_high));
        }
        gaps
    }

    /// Sort (if necessary) and return the overlapped regions.
    ///
    /// Each interval after the first is tested against the envelope spanning
    /// every interval before it, not against each earlier interval on its
    /// own.  The emitted regions are neither merged nor deduplicated.
    pub fn overlapped(&mut self) -> Vec<Interval> {
        self.sort();
        let mut list = Vec::new();
        let mut env_low = i64::MAX;
        let mut env_high = i64::MIN;
        for (i, interval) in self.items.iter().enumerate() {
            if i > 0 {
                let low_in_between = in_between_inclusive(env_low, interval.low, interval.high)
                    || in_between_inclusive(interval.low, env_low, env_high);
                let high_in_between = in_between_inclusive(env_high, interval.low, interval.high)
                    || in_between_inclusive(interval.high, env_low, env_high);
                if low_in_between || high_in_between {
                    list.push(Interval::new(
                        max(interval.low, env_low),
                        min(interval.high, env_high),
                    ));
                }
            }
            env_low = min(env_low, interval.low);
            env_high = max(env_high, interval.high);
        }
        list
    }

    /// Return every interval containing `value`, in the current order.
    ///
    /// This does not sort.
    pub fn find_intervals_for_value(&self, value: i64) -> Vec<Interval> {
        self.items
            .iter()
            .filter(|interval| interval.contains(value))
            .copied()
            .collect()
    }

    /// Sort (if necessary) and render the collection as text.
    pub fn print(&mut self) -> String {
        self.sort();
        let overlapped = self.overlapped();
        let gaps = self.gaps();
        render::render(self.min_low, self.max_high, &self.items, &gaps, &overlapped)
    }

    /// Sort (if necessary) and snapshot the collection with its gaps and
    /// overlaps.
    pub fn summary(&mut self) -> Summary {
        let gaps = self.gaps();
        let overlapped = self.overlapped();
        Summary {
            min_low: self.min_low,
            max_high: self.max_high,
            intervals: self.items.clone(),
            gaps,
            overlapped,
        }
    }
}

impl Extend<Interval> for Intervals {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        for interval in iter {
            self.add(interval);
        }
    }
}
