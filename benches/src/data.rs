//! Element types and key generators for benchmarks.

use retryq_queues::QueueElement;

/// Minimal element keyed by an `i64`.
#[derive(Debug, Clone)]
pub struct BenchElement {
    pub id: String,
    pub value: i64,
}

impl QueueElement for BenchElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn ordering_value(&self) -> i64 {
        self.value
    }

    fn debug_string(&self) -> String {
        format!("{}={}", self.id, self.value)
    }
}

/// Shape of the key sequence fed to a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    /// Mostly increasing, like trigger timestamps arriving in real time.
    NearlySorted,
    /// Uniformly scattered keys.
    Random,
}

impl KeyPattern {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NearlySorted => "nearly_sorted",
            Self::Random => "random",
        }
    }
}

/// Deterministic xorshift generator so runs are comparable.
#[derive(Debug, Clone)]
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

/// Generates `count` elements with keys following `pattern`.
pub fn elements(count: usize, pattern: KeyPattern) -> Vec<BenchElement> {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    (0..count)
        .map(|i| {
            let base = i as i64;
            let value = match pattern {
                KeyPattern::NearlySorted => base + (rng.next() % 8) as i64,
                KeyPattern::Random => (rng.next() % 1_000_000) as i64,
            };
            BenchElement {
                id: format!("e{i}"),
                value,
            }
        })
        .collect()
}
