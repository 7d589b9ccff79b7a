/// One selectable industry: a stable tag sent over the wire and the label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub tag: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

pub static INDUSTRIES: [Industry; 8] = [
    Industry {
        tag: "sustainable-fashion",
        label: "Sustainable Fashion Brand",
        emoji: "👕",
    },
    Industry {
        tag: "coffee",
        label: "Coffee Brand",
        emoji: "☕",
    },
    Industry {
        tag: "music-label",
        label: "Music Label",
        emoji: "🎧",
    },
    Industry {
        tag: "skincare",
        label: "Skincare Brand",
        emoji: "🧴",
    },
    Industry {
        tag: "architecture",
        label: "Architecture Studio",
        emoji: "🏛️",
    },
    Industry {
        tag: "streetwear",
        label: "Streetwear Brand",
        emoji: "🔥",
    },
    Industry {
        tag: "creative-studio",
        label: "Creative Studio",
        emoji: "🎨",
    },
    Industry {
        tag: "perfume",
        label: "Perfume House",
        emoji: "💫",
    },
];

/// Looks up an industry by its 1-based position in the catalog, as typed in the studio menu.
pub fn by_position(position: usize) -> Option<&'static Industry> {
    position.checked_sub(1).and_then(|index| INDUSTRIES.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_unique() {
        for (i, a) in INDUSTRIES.iter().enumerate() {
            for b in &INDUSTRIES[i + 1..] {
                assert_ne!(a.tag, b.tag);
            }
        }
    }

    #[test]
    fn finds_by_position() {
        assert_eq!(by_position(1).map(|i| i.tag), Some("sustainable-fashion"));
        assert_eq!(by_position(8).map(|i| i.tag), Some("perfume"));
        assert!(by_position(0).is_none());
        assert!(by_position(9).is_none());
    }
}
