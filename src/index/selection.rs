use std::fmt::Display;

use hashbrown::HashSet;

/// Reserved position meaning "select a missing value"
///
/// Shares its bit pattern with the runtime's integer `NA`, so a position
/// vector can be handed to consumers that already understand `NA` indices.
///
pub const NA_INDEX: i32 = i32::MIN;

/// Resolved selection along one dimension
///
/// Positions are one-based. The effective order of an `ExclusionMask` is
/// ascending; `Indices` keep the order they were given in.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSelection {
    /// The whole dimension, untouched
    KeepAll(u32),

    /// Explicit positions, possibly containing `NA_INDEX`
    ///
    /// `na_values` holds offsets into `positions` whose position is valid but
    /// whose element value is missing, as produced by `NA` logical indices.
    ///
    Indices {
        positions: Vec<i32>,
        na_values: Vec<usize>,
    },

    /// Every position of the dimension except the excluded ones
    ExclusionMask { dim_size: u32, excluded: HashSet<i32> },
}

impl ResolvedSelection {
    pub fn indices(positions: Vec<i32>) -> Self {
        ResolvedSelection::Indices {
            positions,
            na_values: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        ResolvedSelection::indices(Vec::new())
    }

    /// Number of selected positions
    pub fn len(&self) -> usize {
        match self {
            ResolvedSelection::KeepAll(n) => *n as usize,
            ResolvedSelection::Indices { positions, .. } => positions.len(),
            ResolvedSelection::ExclusionMask { dim_size, excluded } => {
                (*dim_size as usize).saturating_sub(excluded.len())
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over selected one-based positions
    ///
    /// Yields `None` wherever the selected element is missing, either because
    /// the position itself is `NA_INDEX` or because it came from an `NA`
    /// logical index.
    ///
    pub fn iter(&self) -> Box<dyn Iterator<Item = Option<u32>> + '_> {
        match self {
            ResolvedSelection::KeepAll(n) => Box::new((1..=*n).map(Some)),
            ResolvedSelection::Indices {
                positions,
                na_values,
            } => {
                let mut na_values = na_values.iter().peekable();
                Box::new(positions.iter().enumerate().map(move |(i, &p)| {
                    if na_values.next_if_eq(&&i).is_some() || p == NA_INDEX || p <= 0 {
                        None
                    } else {
                        Some(p as u32)
                    }
                }))
            }
            ResolvedSelection::ExclusionMask { dim_size, excluded } => Box::new(
                (1..=*dim_size)
                    .filter(move |&i| !excluded.contains(&(i as i32)))
                    .map(Some),
            ),
        }
    }
}

impl Display for ResolvedSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedSelection::KeepAll(n) => write!(f, "all of {n}"),
            ResolvedSelection::Indices { positions, .. } if positions.is_empty() => {
                write!(f, "none")
            }
            ResolvedSelection::Indices { .. } => {
                let positions: Vec<String> = self
                    .iter()
                    .map(|i| i.map_or("NA".to_string(), |i| i.to_string()))
                    .collect();
                write!(f, "{}", positions.join(" "))
            }
            ResolvedSelection::ExclusionMask { dim_size, excluded } => {
                let mut excluded: Vec<_> = excluded.iter().copied().collect();
                excluded.sort_unstable();
                let excluded: Vec<String> = excluded.iter().map(|i| format!("-{i}")).collect();
                write!(f, "{} of {dim_size}", excluded.join(" "))
            }
        }
    }
}

/// Statistics gathered while resolving one dimension, or a whole access
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionProfile {
    pub selected_count: u32,
    pub max_out_of_bounds_index: i32,
    pub contains_na: bool,
}

impl SelectionProfile {
    pub fn selecting(selected_count: u32) -> Self {
        SelectionProfile {
            selected_count,
            ..Default::default()
        }
    }
}

impl Display for SelectionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "count: {}  na: {}  max oob: {}",
            self.selected_count, self.contains_na, self.max_out_of_bounds_index
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn iter_keep_all() {
        let x = ResolvedSelection::KeepAll(3);
        assert_eq!(x.iter().collect::<Vec<_>>(), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(x.len(), 3);
    }

    #[test]
    fn iter_indices_with_na() {
        let x = ResolvedSelection::indices(vec![4, NA_INDEX, 1]);
        assert_eq!(x.iter().collect::<Vec<_>>(), vec![Some(4), None, Some(1)]);
    }

    #[test]
    fn iter_indices_with_na_values() {
        let x = ResolvedSelection::Indices {
            positions: vec![1, 2, 3],
            na_values: vec![1],
        };
        assert_eq!(x.iter().collect::<Vec<_>>(), vec![Some(1), None, Some(3)]);
    }

    #[test]
    fn iter_exclusion_is_ascending() {
        let x = ResolvedSelection::ExclusionMask {
            dim_size: 5,
            excluded: [4, 2].into_iter().collect(),
        };
        assert_eq!(x.iter().collect::<Vec<_>>(), vec![Some(1), Some(3), Some(5)]);
        assert_eq!(x.len(), 3);
    }

    #[test]
    fn display() {
        let x = ResolvedSelection::ExclusionMask {
            dim_size: 5,
            excluded: [4, 2].into_iter().collect(),
        };
        assert_eq!(x.to_string(), "-2 -4 of 5");
        assert_eq!(ResolvedSelection::empty().to_string(), "none");
        assert_eq!(
            ResolvedSelection::indices(vec![3, NA_INDEX]).to_string(),
            "3 NA"
        );
    }
}
