use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// How the grid engine packs tiles to remove gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompactionMode {
    #[default]
    Vertical,
    Horizontal,
    None,
}

impl CompactionMode {
    pub const ALL: [CompactionMode; 3] = [Self::Vertical, Self::Horizontal, Self::None];

    /// Successor in the cycle `Vertical -> None -> Horizontal -> Vertical`.
    pub const fn next(self) -> Self {
        match self {
            Self::Vertical => Self::None,
            Self::None => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// The engine's compact type; `None` disables compaction.
    pub const fn compact_type(self) -> Option<&'static str> {
        match self {
            Self::Vertical => Some("vertical"),
            Self::Horizontal => Some("horizontal"),
            Self::None => Option::None,
        }
    }

    /// Tiles may not overlap once compaction is off.
    pub const fn prevents_collision(self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vertical => "Vertical",
            Self::Horizontal => "Horizontal",
            Self::None => "No Compaction",
        }
    }
}

impl Serialize for CompactionMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.compact_type().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CompactionMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            Some("vertical") => Ok(Self::Vertical),
            Some("horizontal") => Ok(Self::Horizontal),
            Option::None => Ok(Self::None),
            Some(other) => Err(de::Error::unknown_variant(
                other,
                &["vertical", "horizontal"],
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_returns_to_start_after_three_steps() {
        let start = CompactionMode::Vertical;
        let first = start.next();
        let second = first.next();
        let third = second.next();
        assert_eq!(first, CompactionMode::None);
        assert_eq!(second, CompactionMode::Horizontal);
        assert_eq!(third, start);
    }

    #[test]
    fn cycle_visits_every_mode_exactly_once() {
        for start in CompactionMode::ALL {
            let mut seen = vec![start];
            let mut mode = start.next();
            while mode != start {
                assert!(!seen.contains(&mode));
                seen.push(mode);
                mode = mode.next();
            }
            assert_eq!(seen.len(), 3);
        }
    }

    #[test]
    fn only_disabled_compaction_prevents_collision() {
        assert!(CompactionMode::None.prevents_collision());
        assert!(!CompactionMode::Vertical.prevents_collision());
        assert!(!CompactionMode::Horizontal.prevents_collision());
    }

    #[test]
    fn serializes_as_engine_compact_type() {
        assert_eq!(
            serde_json::to_string(&CompactionMode::Vertical).unwrap(),
            "\"vertical\""
        );
        assert_eq!(serde_json::to_string(&CompactionMode::None).unwrap(), "null");
        let parsed: CompactionMode = serde_json::from_str("\"horizontal\"").unwrap();
        assert_eq!(parsed, CompactionMode::Horizontal);
        assert!(serde_json::from_str::<CompactionMode>("\"diagonal\"").is_err());
    }
}
