use crate::geometry::{Axis, Edge};
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// The container edge a drawer is pinned to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    #[strum(to_string = "bottom", serialize = "b", serialize = "down")]
    Bottom,
    #[strum(to_string = "leading", serialize = "l", serialize = "left")]
    Leading,
    #[strum(to_string = "top", serialize = "t", serialize = "up")]
    Top,
    #[strum(to_string = "trailing", serialize = "r", serialize = "right")]
    Trailing,
}

/// Which end of the motion axis the drawer is anchored to.
///
/// Start-anchored drawers (top, leading) grow along the positive axis, so a
/// positive translation opens them. End-anchored drawers grow against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Start,
    End,
}

impl Anchor {
    /// Sign applied to a normalized translation before it is subtracted from
    /// the settled ratio.
    pub fn drag_sign(self) -> f64 {
        match self {
            Anchor::Start => -1.0,
            Anchor::End => 1.0,
        }
    }
}

impl Position {
    pub fn axis(self) -> Axis {
        match self {
            Position::Bottom | Position::Top => Axis::Vertical,
            Position::Leading | Position::Trailing => Axis::Horizontal,
        }
    }

    pub fn anchor(self) -> Anchor {
        match self {
            Position::Top | Position::Leading => Anchor::Start,
            Position::Bottom | Position::Trailing => Anchor::End,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Position::Bottom => Position::Top,
            Position::Top => Position::Bottom,
            Position::Leading => Position::Trailing,
            Position::Trailing => Position::Leading,
        }
    }

    /// Content hugs the edge facing into the container.
    pub fn content_alignment(self) -> Edge {
        self.opposite().edge()
    }

    pub fn edge(self) -> Edge {
        match self {
            Position::Bottom => Edge::Bottom,
            Position::Leading => Edge::Leading,
            Position::Top => Edge::Top,
            Position::Trailing => Edge::Trailing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_position_deserialization() {
        let cases = vec![
            ("\"bottom\"", Position::Bottom),
            ("\"Bottom\"", Position::Bottom),
            ("\"TOP\"", Position::Top),
            ("\"up\"", Position::Top),
            ("\"left\"", Position::Leading),
            ("\"Leading\"", Position::Leading),
            ("\"R\"", Position::Trailing),
            ("\"right\"", Position::Trailing),
        ];

        for (json, expected) in cases {
            let deserialized: Position = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_unknown_position_is_rejected() {
        assert!("sideways".parse::<Position>().is_err());
        assert!(serde_json::from_str::<Position>("\"middle\"").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for position in Position::iter() {
            assert_eq!(position.to_string().parse::<Position>().unwrap(), position);
        }
    }

    #[test]
    fn test_axis_and_anchor() {
        assert_eq!(Position::Bottom.axis(), Axis::Vertical);
        assert_eq!(Position::Top.axis(), Axis::Vertical);
        assert_eq!(Position::Leading.axis(), Axis::Horizontal);
        assert_eq!(Position::Trailing.axis(), Axis::Horizontal);

        assert_eq!(Position::Top.anchor(), Anchor::Start);
        assert_eq!(Position::Leading.anchor(), Anchor::Start);
        assert_eq!(Position::Bottom.anchor(), Anchor::End);
        assert_eq!(Position::Trailing.anchor(), Anchor::End);
    }

    #[test]
    fn test_content_hugs_opposite_edge() {
        assert_eq!(Position::Bottom.content_alignment(), Edge::Top);
        assert_eq!(Position::Top.content_alignment(), Edge::Bottom);
        assert_eq!(Position::Leading.content_alignment(), Edge::Trailing);
        assert_eq!(Position::Trailing.content_alignment(), Edge::Leading);
    }
}
