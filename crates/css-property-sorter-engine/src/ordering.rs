//! Ordering policy and the block comparator built from it.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::parsing::{PropertyBlock, UnterminatedPolicy};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Follow `custom_order`; unlisted properties go to `unknown_placement`.
    #[default]
    Custom,
    /// Case-insensitive comparison of property names, lower case first on ties.
    Alphabetical,
}

/// Where properties missing from the custom order land.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPlacement {
    Top,
    #[default]
    Bottom,
}

/// Immutable sorting configuration for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderingPolicy {
    pub custom_order: Vec<String>,
    pub sort_mode: SortMode,
    pub unknown_placement: UnknownPlacement,
    pub unterminated: UnterminatedPolicy,
}

impl OrderingPolicy {
    pub fn custom<I, S>(order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            custom_order: order.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn alphabetical() -> Self {
        Self {
            sort_mode: SortMode::Alphabetical,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_unknown_placement(mut self, placement: UnknownPlacement) -> Self {
        self.unknown_placement = placement;
        self
    }

    #[must_use]
    pub fn with_unterminated(mut self, unterminated: UnterminatedPolicy) -> Self {
        self.unterminated = unterminated;
        self
    }

    pub fn comparator(&self) -> BlockComparator<'_> {
        BlockComparator::new(self)
    }
}

/// Locale-style collation: letters compare without case, then a lower-case
/// name sorts before its upper-case twin.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Total order over property blocks for a given policy.
///
/// Blocks of equal rank fall back to `original_index`, so the result never
/// depends on the stability of the sort algorithm.
pub struct BlockComparator<'a> {
    policy: &'a OrderingPolicy,
    /// Position of each name's first occurrence in `custom_order`.
    ranks: HashMap<&'a str, usize>,
}

impl<'a> BlockComparator<'a> {
    pub fn new(policy: &'a OrderingPolicy) -> Self {
        let mut ranks = HashMap::with_capacity(policy.custom_order.len());
        for (idx, name) in policy.custom_order.iter().enumerate() {
            ranks.entry(name.as_str()).or_insert(idx);
        }
        Self { policy, ranks }
    }

    pub fn compare(&self, a: &PropertyBlock, b: &PropertyBlock) -> Ordering {
        self.rank_order(&a.name, &b.name)
            .then_with(|| a.original_index().cmp(&b.original_index()))
    }

    fn rank_order(&self, a: &str, b: &str) -> Ordering {
        match self.policy.sort_mode {
            SortMode::Alphabetical => collate(a, b),
            SortMode::Custom => match (self.ranks.get(a), self.ranks.get(b)) {
                (Some(x), Some(y)) => x.cmp(y),
                (None, None) => Ordering::Equal,
                (Some(_), None) => self.known_before_unknown(),
                (None, Some(_)) => self.known_before_unknown().reverse(),
            },
        }
    }

    /// Ordering of a known property relative to an unknown one.
    fn known_before_unknown(&self) -> Ordering {
        match self.policy.unknown_placement {
            UnknownPlacement::Bottom => Ordering::Less,
            UnknownPlacement::Top => Ordering::Greater,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::LineRange;
    use rstest::rstest;

    fn block(name: &str, line: usize) -> PropertyBlock {
        PropertyBlock {
            name: name.to_string(),
            leading_comments: vec![],
            body: vec![format!("{name}: x;")],
            trailing_comments: vec![],
            range: LineRange::single(line),
        }
    }

    fn sorted(policy: &OrderingPolicy, names: &[&str]) -> Vec<String> {
        let mut blocks: Vec<_> = names.iter().enumerate().map(|(i, n)| block(n, i)).collect();
        let cmp = policy.comparator();
        blocks.sort_by(|a, b| cmp.compare(a, b));
        blocks.into_iter().map(|b| b.name).collect()
    }

    #[rstest]
    #[case(&["color", "width"], &["width", "color"], &["width", "color"])]
    #[case(&["color", "zoom", "width"], &["width", "color"], &["width", "color", "zoom"])]
    #[case(&["b", "zoom", "a", "top"], &[], &["b", "zoom", "a", "top"])]
    #[case(&["color", "color", "width"], &["width", "color"], &["width", "color", "color"])]
    fn custom_order_unknown_bottom(
        #[case] input: &[&str],
        #[case] order: &[&str],
        #[case] expected: &[&str],
    ) {
        let policy = OrderingPolicy::custom(order.iter().copied());
        assert_eq!(sorted(&policy, input), expected);
    }

    #[test]
    fn unknown_top_puts_unlisted_first_in_original_order() {
        let policy = OrderingPolicy::custom(["width", "color"])
            .with_unknown_placement(UnknownPlacement::Top);
        assert_eq!(
            sorted(&policy, &["color", "zoom", "width", "appearance"]),
            vec!["zoom", "appearance", "width", "color"]
        );
    }

    #[test]
    fn alphabetical_ignores_custom_order() {
        let mut policy = OrderingPolicy::custom(["z-index", "color"]);
        policy.sort_mode = SortMode::Alphabetical;
        assert_eq!(
            sorted(&policy, &["z-index", "color", "align-items"]),
            vec!["align-items", "color", "z-index"]
        );
    }

    #[rstest]
    #[case(&["b", "B", "a", "A"], &["a", "A", "b", "B"])]
    #[case(&["z-index", "Color", "align"], &["align", "Color", "z-index"])]
    #[case(&["Box", "box", "-webkit-box"], &["-webkit-box", "box", "Box"])]
    #[case(&["margin-top", "margin", "MARGIN"], &["margin", "MARGIN", "margin-top"])]
    fn alphabetical_folds_case(#[case] input: &[&str], #[case] expected: &[&str]) {
        assert_eq!(sorted(&OrderingPolicy::alphabetical(), input), expected);
    }

    #[test]
    fn duplicate_names_keep_original_order() {
        let policy = OrderingPolicy::alphabetical();
        let first = block("color", 0);
        let second = block("color", 5);
        let cmp = policy.comparator();
        assert_eq!(cmp.compare(&first, &second), Ordering::Less);
        assert_eq!(cmp.compare(&second, &first), Ordering::Greater);
    }

    #[test]
    fn first_occurrence_in_custom_order_wins() {
        let policy = OrderingPolicy::custom(["color", "width", "color"]);
        assert_eq!(sorted(&policy, &["width", "color"]), vec!["color", "width"]);
    }
}
