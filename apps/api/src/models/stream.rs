use serde::{Deserialize, Serialize};

/// One of the three academic tracks the aptitude quiz scores against.
///
/// Declaration order is the tie-break order: when several streams share the
/// top score, the earliest one here is recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    Science,
    Commerce,
    Arts,
}

impl Stream {
    pub const ALL: [Stream; 3] = [Stream::Science, Stream::Commerce, Stream::Arts];

    pub fn as_str(self) -> &'static str {
        match self {
            Stream::Science => "science",
            Stream::Commerce => "commerce",
            Stream::Arts => "arts",
        }
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-stream score accumulators. Serialized as `{ "science": n, "commerce": n, "arts": n }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMap {
    pub science: u32,
    pub commerce: u32,
    pub arts: u32,
}

impl ScoreMap {
    pub fn get(&self, stream: Stream) -> u32 {
        match stream {
            Stream::Science => self.science,
            Stream::Commerce => self.commerce,
            Stream::Arts => self.arts,
        }
    }

    pub fn add(&mut self, stream: Stream, weight: u32) {
        let slot = match stream {
            Stream::Science => &mut self.science,
            Stream::Commerce => &mut self.commerce,
            Stream::Arts => &mut self.arts,
        };
        *slot = slot.saturating_add(weight);
    }

    /// Scores in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (Stream, u32)> + '_ {
        Stream::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn max(&self) -> u32 {
        self.iter().map(|(_, v)| v).max().unwrap_or(0)
    }
}
