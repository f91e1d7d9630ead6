use std::collections::BTreeMap;

pub const DEFAULT_LEVEL: &str = "debug";

/// Ordered severity table. Higher rank means more severe. User entries
/// can add new level names or re-rank the built-in ones.
#[derive(Debug, Clone)]
pub struct LevelTable {
    ranks: BTreeMap<String, i32>,
}

fn default_ranks() -> BTreeMap<String, i32> {
    let mut ranks = BTreeMap::new();
    ranks.insert("debug".to_string(), 0);
    ranks.insert("info".to_string(), 1);
    ranks.insert("timer".to_string(), 2);
    ranks.insert("warn".to_string(), 3);
    ranks.insert("error".to_string(), 4);
    ranks
}

impl LevelTable {
    pub fn new(custom: &BTreeMap<String, i32>) -> Self {
        let mut ranks = default_ranks();
        for (name, rank) in custom {
            ranks.insert(name.clone(), *rank);
        }
        Self { ranks }
    }

    /// Resolve a candidate level name, falling back to "debug" for
    /// anything the table doesn't know about.
    pub fn validate<'a>(&self, candidate: Option<&'a str>) -> &'a str {
        match candidate {
            Some(level) if self.ranks.contains_key(level) => level,
            _ => DEFAULT_LEVEL,
        }
    }

    pub fn rank(&self, level: &str) -> i32 {
        self.ranks.get(level).copied().unwrap_or(0)
    }

    /// A message of `type_level` severity is emitted iff it ranks at or
    /// above the instance-wide active level.
    pub fn should_emit(&self, type_level: &str, active_level: &str) -> bool {
        self.rank(type_level) >= self.rank(active_level)
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            ranks: default_ranks(),
        }
    }
}
