use bst_mountain::{ClimbConfig, GrowableMatrix, Hiker, Mountain, RationPolicy, RestStop, Supplies};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn labels(paths: &GrowableMatrix<&RestStop>) -> Vec<Vec<String>> {
    paths
        .iter_rows()
        .map(|row| row.iter().map(|stop| stop.label().to_owned()).collect())
        .collect()
}

fn stop(label: &str, food: i32) -> RestStop {
    RestStop::new(label, food, 0, 0)
}

#[test]
fn empty_mountain_has_no_paths() {
    let mountain = Mountain::new();
    let paths = mountain.find_paths().unwrap();
    assert_eq!(paths.columns(), 0);
    assert_eq!(paths.rows(), 0);
}

#[test]
fn single_stop_is_a_complete_path() {
    let mountain = Mountain::from_stops([stop("summit", 0)]);
    assert_eq!(labels(&mountain.find_paths().unwrap()), [["summit"]]);

    let starving = Mountain::from_stops([stop("summit", -1)]);
    assert!(starving.find_paths().unwrap().is_empty());
}

#[test]
fn only_the_surviving_branch_is_reported() {
    let mountain = Mountain::from_stops([stop("M", 1), stop("F", -2), stop("T", 0)]);
    let paths = mountain.find_paths().unwrap();
    assert_eq!(paths.columns(), 2);
    assert_eq!(labels(&paths), [["M", "T"]]);
}

#[test]
fn short_branches_are_not_reported() {
    //        M
    //      /   \
    //     F     T
    //            \
    //             W
    let mountain = Mountain::from_stops([stop("M", 5), stop("F", 5), stop("T", 0), stop("W", 0)]);
    let paths = mountain.find_paths().unwrap();
    assert_eq!(paths.columns(), 3);
    assert_eq!(labels(&paths), [["M", "T", "W"]]);
}

#[test]
fn rows_come_out_left_to_right() {
    let mountain = Mountain::from_stops([stop("D", 0), stop("B", 0), stop("F", 0), stop("A", 0), stop("C", 0), stop("E", 0), stop("G", 0)]);
    assert_eq!(
        labels(&mountain.find_paths().unwrap()),
        [["D", "B", "A"], ["D", "B", "C"], ["D", "F", "E"], ["D", "F", "G"]]
    );
}

#[test]
fn a_deficit_can_be_covered_further_up() {
    // The leaf costs two rations; only the branch through C brings enough.
    let mountain = Mountain::from_stops([stop("B", 0), stop("A", 1), stop("C", 2), stop("AA", -2), stop("D", -2)]);
    assert_eq!(labels(&mountain.find_paths().unwrap()), [["B", "C", "D"]]);
}

#[test]
fn rafts_and_axes_must_cover_obstacles() {
    let mountain = Mountain::from_stops([
        RestStop::new("M", 0, 1, 0),
        RestStop::with_obstacles("F", 0, 0, 0, 1, 1),
        RestStop::with_obstacles("T", 0, 0, 0, 1, 0),
    ]);
    // F has a fallen tree and no axe was ever found; T's river is crossed on M's raft.
    assert_eq!(labels(&mountain.find_paths().unwrap()), [["M", "T"]]);
}

#[test]
fn sibling_branches_do_not_share_supplies() {
    // Each child would leave the hiker at zero on its own; both paths survive.
    let mountain = Mountain::from_stops([stop("M", 2), stop("F", -2), stop("T", -2)]);
    assert_eq!(labels(&mountain.find_paths().unwrap()), [["M", "F"], ["M", "T"]]);
}

#[test]
fn eating_per_stop_needs_more_food() {
    let mountain = Mountain::from_stops([stop("M", 1), stop("F", 1), stop("T", 0)]);
    assert_eq!(labels(&mountain.find_paths().unwrap()), [["M", "F"], ["M", "T"]]);

    let hungry = ClimbConfig {
        rations: RationPolicy::ConsumePerStop,
        ..ClimbConfig::default()
    };
    assert_eq!(labels(&mountain.find_paths_with(&hungry).unwrap()), [["M", "F"]]);
}

#[test]
fn starting_supplies_carry_the_hiker() {
    let mountain = Mountain::from_stops([stop("M", -1), stop("F", -1), stop("T", 0)]);
    assert!(mountain.find_paths().unwrap().is_empty());

    let provisioned = ClimbConfig {
        starting_supplies: Supplies::new(2, 0, 0),
        ..ClimbConfig::default()
    };
    assert_eq!(labels(&mountain.find_paths_with(&provisioned).unwrap()), [["M", "F"], ["M", "T"]]);
}

#[test]
fn stops_are_keyed_by_label() {
    let mut mountain = Mountain::new();
    assert!(mountain.insert(stop("ridge", 3)));
    assert!(!mountain.insert(stop("ridge", -3)));

    let tree = mountain.tree();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.lookup("ridge").map(RestStop::supplies), Some(Supplies::new(3, 0, 0)));
    assert!(tree.contains("ridge"));
    assert_eq!(tree.to_string(), "[ridge]");
}

#[test]
fn extreme_supplies_do_not_overflow() {
    let mountain = Mountain::from_stops([
        RestStop::new("M", i32::MAX, 0, 0),
        RestStop::new("F", i32::MIN, 0, 0),
        RestStop::new("T", 1, 0, 0),
    ]);
    assert_eq!(labels(&mountain.find_paths().unwrap()), [["M", "T"]]);

    let rich = ClimbConfig {
        starting_supplies: Supplies::new(i32::MAX, i32::MAX, i32::MAX),
        rations: RationPolicy::ConsumePerStop,
    };
    assert_eq!(labels(&mountain.find_paths_with(&rich).unwrap()), [["M", "F"], ["M", "T"]]);
}

#[test]
fn hiker_copies_are_independent() {
    let start = Hiker::new(Supplies::new(1, 0, 0));
    let mut left = start;
    left.visit(&stop("F", -2), RationPolicy::Netted);

    assert!(!left.is_alive());
    assert!(start.is_alive());
    assert_eq!(start.supplies(), Supplies::new(1, 0, 0));
}

/// A stand-alone search tree over labels and supplies, used to list the
/// expected paths independently of the crate.
struct ReferenceTree {
    nodes: Vec<(String, [i64; 3], Option<usize>, Option<usize>)>,
}

impl ReferenceTree {
    fn build(stops: &[(String, i32, i32, i32)]) -> Self {
        let mut tree = ReferenceTree { nodes: Vec::new() };
        for (label, food, rafts, axes) in stops {
            let node = (label.clone(), [i64::from(*food), i64::from(*rafts), i64::from(*axes)], None, None);
            if tree.nodes.is_empty() {
                tree.nodes.push(node);
                continue;
            }
            let index = tree.nodes.len();
            let mut current = 0;
            loop {
                let next = match label.cmp(&tree.nodes[current].0) {
                    std::cmp::Ordering::Equal => break,
                    std::cmp::Ordering::Less => &mut tree.nodes[current].2,
                    std::cmp::Ordering::Greater => &mut tree.nodes[current].3,
                };
                match *next {
                    Some(child) => current = child,
                    None => {
                        *next = Some(index);
                        tree.nodes.push(node);
                        break;
                    }
                }
            }
        }
        tree
    }

    /// Every root-to-leaf path, left to right.
    fn leaf_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        if self.nodes.is_empty() {
            return paths;
        }
        let mut pending = vec![vec![0]];
        while let Some(path) = pending.pop() {
            let (_, _, left, right) = &self.nodes[*path.last().unwrap()];
            if left.is_none() && right.is_none() {
                paths.push(path);
                continue;
            }
            for child in [right, left].into_iter().flatten() {
                let mut longer = path.clone();
                longer.push(*child);
                pending.push(longer);
            }
        }
        paths
    }

    /// Full-height leaf paths whose running totals never go negative.
    fn surviving_paths(&self) -> Vec<Vec<String>> {
        let paths = self.leaf_paths();
        let height = paths.iter().map(Vec::len).max().unwrap_or(0);
        paths
            .into_iter()
            .filter(|path| path.len() == height)
            .filter(|path| {
                let mut totals = [0i64; 3];
                path.iter().all(|&node| {
                    for (total, count) in totals.iter_mut().zip(self.nodes[node].1) {
                        *total += count;
                    }
                    totals.iter().all(|&total| total >= 0)
                })
            })
            .map(|path| path.into_iter().map(|node| self.nodes[node].0.clone()).collect())
            .collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every reported row is a full-height root-to-leaf path the hiker survives,
    /// and every such path is reported.
    #[test]
    fn reports_exactly_the_surviving_paths(
        stops in prop::collection::vec((0u16..200, -2i32..4, -1i32..2, -1i32..2), 0..40),
    ) {
        let stops: Vec<(String, i32, i32, i32)> = stops
            .into_iter()
            .map(|(label, food, rafts, axes)| (format!("{label:03}"), food, rafts, axes))
            .collect();
        let mountain: Mountain = stops
            .iter()
            .map(|(label, food, rafts, axes)| RestStop::new(label.as_str(), *food, *rafts, *axes))
            .collect();
        let paths = mountain.find_paths().unwrap();

        prop_assert_eq!(paths.columns(), mountain.tree().height());
        prop_assert_eq!(labels(&paths), ReferenceTree::build(&stops).surviving_paths());

        for row in paths.iter_rows() {
            let mut hiker = Hiker::default();
            for stop in row {
                hiker.visit(stop, RationPolicy::Netted);
                prop_assert!(hiker.is_alive(), "hiker died at {} on a reported path", stop);
            }
        }
    }
}
