//! Wall-clock measurement of preprocessing and query phases.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::data::sample_range;
use crate::rmq::RangeMinimum;

/// Time spent in each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timing {
    /// Time spent in `preprocess`.
    pub preprocess: Duration,
    /// Time spent answering all queries.
    pub query: Duration,
}

/// Preprocess `rmq` and run `queries` random queries over `0..n`.
///
/// Range sampling happens inside the timed loop, as in any driver that
/// generates queries on the fly; the cost is the same for every strategy.
pub fn measure(rmq: &mut dyn RangeMinimum, n: usize, queries: usize, seed: u64) -> Timing {
    let start = Instant::now();
    rmq.preprocess();
    let preprocess = start.elapsed();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut sink = 0usize;
    let start = Instant::now();
    for _ in 0..queries {
        let (i, j) = sample_range(&mut rng, n);
        sink = sink.wrapping_add(rmq.query(i, j));
    }
    let query = start.elapsed();
    std::hint::black_box(sink);

    Timing { preprocess, query }
}

/// Render a duration with a unit that keeps the number short:
/// `" 42 ms"`, `" 1.3 s"`, `" 2 min  5 s"`, `" 3 h 12 min"`, `"2 d  4 h"`.
/// Sub-millisecond parts are truncated; larger units round up.
pub fn format_duration(duration: Duration) -> String {
    const DECI_SEC: u128 = 100;
    const SECOND: u128 = 10 * DECI_SEC;
    const MINUTE: u128 = 60 * SECOND;
    const HOUR: u128 = 60 * MINUTE;
    const DAY: u128 = 24 * HOUR;

    let ms = duration.as_millis();
    if ms < SECOND {
        format!("{:>3} ms", ms)
    } else if ms <= MINUTE {
        let deci = ms.div_ceil(DECI_SEC);
        format!("{:>2}.{} s", deci / 10, deci % 10)
    } else if ms <= HOUR {
        let secs = ms.div_ceil(SECOND);
        format!("{:>2} min {:>2} s", secs / 60, secs % 60)
    } else if ms <= DAY {
        let mins = ms.div_ceil(MINUTE);
        format!("{:>2} h {:>2} min", mins / 60, mins % 60)
    } else {
        let hours = ms.div_ceil(HOUR);
        format!("{} d {:>2} h", hours / 24, hours % 24)
    }
}
