//! Text rendering of a collection against its domain axis.
//!
//! The graph has one symbol per domain unit, with a separator after every
//! block of ten units.  The axis line above it is padded by the number of
//! separators drawn so both labels line up with the frame of the graph.

use crate::interval::Interval;

// Other candidates: ◯ ◍ ◉ □ ■ ░ ▒ ▓ █
const EMPTY_SYMBOL: &str = "◌";
const FULL_SYMBOL: &str = "◎";
const OVERLAP_SYMBOL: &str = "●";
const SEPARATOR: &str = "║";
const BLOCK_SIZE: i64 = 10;

struct Graph {
    text: String,
    index: i64,
    separators: i64,
    // Set once the unit at `i64::MAX` has been drawn.
    done: bool,
}

impl Graph {
    fn new(start: i64) -> Self {
        Self {
            text: String::new(),
            index: start,
            separators: 0,
            done: false,
        }
    }

    /// Draw the unit at `index` and move on to the next one.
    fn push(&mut self, symbol: &str) {
        self.text.push_str(symbol);
        match self.index.checked_add(1) {
            Some(index) => self.index = index,
            None => {
                self.done = true;
                return;
            }
        }
        if self.index % BLOCK_SIZE == 0 {
            self.text.push_str(SEPARATOR);
            self.separators += 1;
        }
    }
}

fn join(intervals: &[Interval]) -> String {
    intervals
        .iter()
        .map(|interval| interval.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_an_overlap(value: i64, overlapped: &[Interval]) -> bool {
    overlapped.iter().any(|overlap| overlap.contains(value))
}

fn graph(min_low: i64, max_high: i64, sorted: &[Interval], overlapped: &[Interval]) -> Graph {
    let mut graph = Graph::new(min_low);
    for interval in sorted {
        if graph.done {
            break;
        }
        for _ in graph.index..interval.low {
            graph.push(EMPTY_SYMBOL);
        }
        for _ in graph.index..=interval.high {
            let symbol = if is_an_overlap(graph.index, overlapped) {
                OVERLAP_SYMBOL
            } else {
                FULL_SYMBOL
            };
            graph.push(symbol);
        }
    }

    // Padding after the last interval is drawn without separators.
    for _ in graph.index..max_high {
        graph.text.push_str(EMPTY_SYMBOL);
    }
    graph
}

fn axis(min_low: i64, max_high: i64, separators: i64) -> String {
    let width = max_high.saturating_add(separators).saturating_sub(2);
    let mut axis = format!(" {}", min_low);
    for _ in min_low..width {
        axis.push(' ');
    }
    axis.push_str(&max_high.to_string());
    axis
}

/// Render `sorted` intervals together with their gaps and overlaps.
///
/// `sorted` must already be ordered by low bound.
pub(crate) fn render(
    min_low: i64,
    max_high: i64,
    sorted: &[Interval],
    gaps: &[Interval],
    overlapped: &[Interval],
) -> String {
    let graph = graph(min_low, max_high, sorted, overlapped);

    let mut out = String::from("\n");
    out.push_str(&format!(
        "\n==================================\n SUMMARY (minLow={}, maxHigh={})\n==================================",
        min_low, max_high
    ));
    out.push_str(&format!(
        "\n • Legend: {} (empty), {} (full), {} (overlap)",
        EMPTY_SYMBOL, FULL_SYMBOL, OVERLAP_SYMBOL
    ));
    out.push_str(&format!("\n • Intervals: {}", join(sorted)));
    out.push_str(&format!("\n • Gaps: {}", join(gaps)));
    out.push_str(&format!("\n • Overlapped: {}", join(overlapped)));
    out.push_str(&format!(
        "\n\n{}\n╠{}╣\n",
        axis(min_low, max_high, graph.separators),
        graph.text
    ));
    out
}
