use crate::model::{Attribute, AttributeValue, Item, ParseAttributeError};
use crate::selection::Selection;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TargetError {
    #[error("unknown target attribute `{0}` (expected dot, color or size)")]
    UnknownAttribute(String),
    #[error("invalid value for target attribute {attribute}: {source}")]
    UnknownValue {
        attribute: &'static str,
        #[source]
        source: ParseAttributeError,
    },
    #[error("target value `{value}` does not belong to attribute {attribute}")]
    ValueMismatch {
        attribute: &'static str,
        value: AttributeValue,
    },
    #[error("target ratio {0} must be a number between 0 and 1")]
    RatioOutOfRange(f64),
}

/// Which items count as matching, and the proportion of them the selection should hold.
#[derive(Debug, Clone, Copy)]
pub struct TargetSpec {
    attribute: Attribute,
    value: AttributeValue,
    ratio: f64,
    accessor: fn(&Item) -> AttributeValue,
}

impl TargetSpec {
    pub fn new(attribute: Attribute, value: AttributeValue, ratio: f64) -> Result<Self, TargetError> {
        if value.attribute() != attribute {
            return Err(TargetError::ValueMismatch {
                attribute: attribute.as_str(),
                value,
            });
        }
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(TargetError::RatioOutOfRange(ratio));
        }
        Ok(Self {
            attribute,
            value,
            ratio,
            accessor: attribute.accessor(),
        })
    }

    /// Builds a target from the textual form used on the command line and in config files.
    pub fn parse(attribute: &str, value: &str, ratio: f64) -> Result<Self, TargetError> {
        let attribute: Attribute = attribute
            .parse()
            .map_err(|_| TargetError::UnknownAttribute(attribute.to_string()))?;
        let value = attribute
            .parse_value(value)
            .map_err(|source| TargetError::UnknownValue {
                attribute: attribute.as_str(),
                source,
            })?;
        Self::new(attribute, value, ratio)
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn value(&self) -> AttributeValue {
        self.value
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn matches(&self, item: &Item) -> bool {
        (self.accessor)(item) == self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub actual_ratio: f64,
    pub difference: f64,
    pub selected_count: usize,
    pub matching_count: usize,
}

/// Compares the selected items against `target`.
///
/// An empty selection reports an actual ratio of 0 and a difference equal to the
/// target ratio. Selected ids without a corresponding item are ignored.
pub fn compute_stats(items: &[Item], selection: &Selection, target: &TargetSpec) -> Stats {
    let empty = Stats {
        actual_ratio: 0.0,
        difference: target.ratio(),
        selected_count: 0,
        matching_count: 0,
    };
    if selection.is_empty() {
        return empty;
    }

    let (selected_count, matching_count) = items
        .iter()
        .filter(|item| selection.contains(item.id))
        .fold((0usize, 0usize), |(selected, matching), item| {
            (selected + 1, matching + usize::from(target.matches(item)))
        });

    if selected_count == 0 {
        return empty;
    }

    let actual_ratio = matching_count as f64 / selected_count as f64;
    Stats {
        actual_ratio,
        difference: (actual_ratio - target.ratio()).abs(),
        selected_count,
        matching_count,
    }
}

/// Rounds a ratio to a whole percent.
///
/// Rounding is half away from zero on the decimal value: `ratio * 100` is first
/// snapped to six decimal places so that binary error in inputs like `0.605`
/// does not push a tie below the midpoint.
pub fn percent(ratio: f64) -> i64 {
    let scaled = (ratio * 100.0 * 1e6).round() / 1e6;
    scaled.round() as i64
}

pub fn to_percent(ratio: f64) -> String {
    format!("{}%", percent(ratio))
}

/// Memoizes [`compute_stats`] on selection snapshot identity.
///
/// A cache is bound to one item collection and target; callers pass the same
/// ones on every call.
#[derive(Debug, Default)]
pub struct StatsCache {
    entry: Option<(Selection, Stats)>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, items: &[Item], selection: &Selection, target: &TargetSpec) -> Stats {
        if let Some((key, stats)) = &self.entry {
            if key.same_snapshot(selection) {
                return *stats;
            }
        }

        let stats = compute_stats(items, selection, target);
        tracing::debug!(
            selected = stats.selected_count,
            matching = stats.matching_count,
            actual = stats.actual_ratio,
            difference = stats.difference,
            "recomputed selection stats"
        );
        self.entry = Some((selection.clone(), stats));
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{generate, Color, DotState, Size};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sized_items() -> Vec<Item> {
        (0..10)
            .map(|id| Item {
                id,
                dot: DotState::Dot,
                color: Color::Blue,
                size: if id <= 5 { Size::Small } else { Size::Large },
            })
            .collect()
    }

    fn small_target() -> TargetSpec {
        TargetSpec::parse("size", "small", 0.6).expect("size target should be valid")
    }

    #[test]
    fn matching_ratio_hits_the_target_exactly() {
        let selection: Selection = [0, 1, 2, 6, 7].into_iter().collect();
        let stats = compute_stats(&sized_items(), &selection, &small_target());
        assert_eq!(stats.selected_count, 5);
        assert_eq!(stats.matching_count, 3);
        assert_eq!(stats.actual_ratio, 0.6);
        assert_eq!(stats.difference, 0.0);
    }

    #[test]
    fn no_matching_items_gives_full_target_difference() {
        let selection: Selection = [6, 7, 8, 9].into_iter().collect();
        let stats = compute_stats(&sized_items(), &selection, &small_target());
        assert_eq!(stats.actual_ratio, 0.0);
        assert_eq!(stats.difference, 0.6);
    }

    #[test]
    fn empty_selection_reports_target_ratio_as_difference() {
        let items = generate(21, &mut StdRng::seed_from_u64(11));
        for ratio in [0.0, 0.25, 0.6, 1.0] {
            let target = TargetSpec::parse("dot", "no-dot", ratio).expect("target should be valid");
            let stats = compute_stats(&items, &Selection::new(), &target);
            assert_eq!(stats.actual_ratio, 0.0);
            assert_eq!(stats.difference, ratio);
            assert_eq!(stats.selected_count, 0);
        }
    }

    #[test]
    fn unknown_ids_do_not_affect_stats() {
        let selection: Selection = [0, 42, 99].into_iter().collect();
        let stats = compute_stats(&sized_items(), &selection, &small_target());
        assert_eq!(stats.selected_count, 1);
        assert_eq!(stats.actual_ratio, 1.0);

        let only_unknown: Selection = [42].into_iter().collect();
        let stats = compute_stats(&sized_items(), &only_unknown, &small_target());
        assert_eq!(stats.selected_count, 0);
        assert_eq!(stats.difference, 0.6);
    }

    #[test]
    fn difference_is_absolute_and_bounded() {
        let items = generate(40, &mut StdRng::seed_from_u64(5));
        let target = TargetSpec::parse("color", "green", 0.3).expect("target should be valid");
        let mut selection = Selection::new();
        for id in (0..40).step_by(3) {
            selection = selection.toggled(id);
            let stats = compute_stats(&items, &selection, &target);
            assert!((0.0..=1.0).contains(&stats.actual_ratio));
            assert!((0.0..=1.0).contains(&stats.difference));
            assert_eq!(stats.difference, (stats.actual_ratio - 0.3).abs());
        }
    }

    #[test]
    fn target_construction_rejects_bad_input() {
        assert!(matches!(
            TargetSpec::parse("shape", "round", 0.5),
            Err(TargetError::UnknownAttribute(name)) if name == "shape"
        ));
        assert!(matches!(
            TargetSpec::parse("color", "purple", 0.5),
            Err(TargetError::UnknownValue { attribute: "color", .. })
        ));
        assert!(matches!(
            TargetSpec::new(Attribute::Size, AttributeValue::Color(Color::Blue), 0.5),
            Err(TargetError::ValueMismatch { attribute: "size", .. })
        ));
        assert!(matches!(
            TargetSpec::parse("dot", "dot", 1.5),
            Err(TargetError::RatioOutOfRange(_))
        ));
        assert!(matches!(
            TargetSpec::parse("dot", "dot", f64::NAN),
            Err(TargetError::RatioOutOfRange(_))
        ));
    }

    #[test]
    fn percent_rounds_half_away_from_zero() {
        assert_eq!(to_percent(0.605), "61%");
        assert_eq!(to_percent(0.595), "60%");
        assert_eq!(to_percent(0.125), "13%");
        assert_eq!(to_percent(0.6), "60%");
        assert_eq!(to_percent(0.0), "0%");
        assert_eq!(to_percent(1.0), "100%");
        assert_eq!(to_percent(1.0 / 3.0), "33%");
        assert_eq!(to_percent(2.0 / 3.0), "67%");
    }

    #[test]
    fn cache_matches_fresh_computation() {
        let items = generate(21, &mut StdRng::seed_from_u64(9));
        let target = TargetSpec::parse("dot", "no-dot", 0.6).expect("target should be valid");
        let mut cache = StatsCache::new();

        let mut selection = Selection::new();
        assert_eq!(
            cache.get(&items, &selection, &target),
            compute_stats(&items, &selection, &target)
        );
        for id in [3, 8, 3, 12, 20] {
            selection = selection.toggled(id);
            let cached = cache.get(&items, &selection, &target);
            assert_eq!(cached, compute_stats(&items, &selection, &target));
            assert_eq!(cache.get(&items, &selection.clone(), &target), cached);
        }
    }
}
