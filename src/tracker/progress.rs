//! Completion progress for minis, squads, armies, and whole collections.

use crate::model::{
    dashboard::{ArmyNode, DashboardTree, SquadNode},
    mini::MiniDto,
    stage::Stage,
};

/// Completion ratio of a single mini: completed stages divided by [`Stage::COUNT`].
///
/// Always one of `0.0, 0.2, 0.4, 0.6, 0.8, 1.0`.
pub fn mini_progress(mini: &MiniDto) -> f64 {
    let completed = Stage::ALL
        .into_iter()
        .filter(|stage| mini.stage(*stage))
        .count();

    completed as f64 / Stage::COUNT as f64
}

/// Converts a ratio into a whole percentage, rounding half away from zero.
pub fn percent(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Number of minis with every stage complete.
pub fn done_count<'a>(minis: impl IntoIterator<Item = &'a MiniDto>) -> usize {
    minis
        .into_iter()
        .filter(|mini| mini_progress(mini) == 1.0)
        .count()
}

/// Mean completion ratio of a collection of minis, `0.0` when the collection is empty.
pub fn aggregate_progress<'a>(minis: impl IntoIterator<Item = &'a MiniDto>) -> f64 {
    let (total, sum) = minis
        .into_iter()
        .fold((0usize, 0.0), |(total, sum), mini| {
            (total + 1, sum + mini_progress(mini))
        });

    if total == 0 {
        0.0
    } else {
        sum / total as f64
    }
}

/// Summary shown for a squad, an army, or the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressSummary {
    /// Number of minis in the collection
    pub total: usize,
    /// Number of minis with every stage complete
    pub done: usize,
    /// Mean completion ratio in `[0, 1]`
    pub progress: f64,
}

impl ProgressSummary {
    pub fn of<'a>(minis: impl IntoIterator<Item = &'a MiniDto>) -> Self {
        let minis: Vec<&MiniDto> = minis.into_iter().collect();

        Self {
            total: minis.len(),
            done: done_count(minis.iter().copied()),
            progress: aggregate_progress(minis.iter().copied()),
        }
    }

    pub fn of_squad(squad: &SquadNode) -> Self {
        Self::of(squad.minis.iter())
    }

    pub fn of_army(army: &ArmyNode) -> Self {
        Self::of(army.minis())
    }

    pub fn of_tree(tree: &DashboardTree) -> Self {
        Self::of(tree.minis())
    }

    pub fn percent(&self) -> u8 {
        percent(self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::test_support::{mini_with_stages, tree_with_minis};

    #[test]
    fn mini_progress_counts_completed_stages() {
        let expected = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

        for (completed, ratio) in expected.into_iter().enumerate() {
            let mini = mini_with_stages(&Stage::ALL[..completed]);
            assert_eq!(mini_progress(&mini), ratio);
        }
    }

    #[test]
    fn mini_progress_is_order_independent() {
        let mini = mini_with_stages(&[Stage::Photographed, Stage::Primed]);
        assert_eq!(mini_progress(&mini), 0.4);
    }

    #[test]
    fn percent_rounds_half_away_from_zero() {
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(0.6), 60);
        assert_eq!(percent(0.125), 13);
        assert_eq!(percent(0.124), 12);
        assert_eq!(percent(1.0), 100);
    }

    #[test]
    fn done_count_only_counts_fully_complete_minis() {
        let minis = vec![
            mini_with_stages(&Stage::ALL),
            mini_with_stages(&Stage::ALL[..4]),
            mini_with_stages(&[]),
            mini_with_stages(&Stage::ALL),
        ];

        assert_eq!(done_count(&minis), 2);
    }

    #[test]
    fn aggregate_progress_of_empty_collection_is_zero() {
        let minis: Vec<MiniDto> = Vec::new();
        assert_eq!(aggregate_progress(&minis), 0.0);
    }

    #[test]
    fn aggregate_progress_is_mean_of_minis() {
        let minis = vec![mini_with_stages(&Stage::ALL), mini_with_stages(&[])];
        assert_eq!(aggregate_progress(&minis), 0.5);
    }

    #[test]
    fn summarizes_squads_armies_and_tree() {
        let tree = tree_with_minis(vec![
            vec![mini_with_stages(&Stage::ALL), mini_with_stages(&[])],
            vec![mini_with_stages(&Stage::ALL[..3])],
        ]);

        let army = &tree.armies[0];
        let first_squad = ProgressSummary::of_squad(&army.squads[0]);
        assert_eq!(first_squad.total, 2);
        assert_eq!(first_squad.done, 1);
        assert_eq!(first_squad.percent(), 50);

        let army_summary = ProgressSummary::of_army(army);
        assert_eq!(army_summary.total, 3);
        assert_eq!(army_summary.done, 1);
        assert_eq!(army_summary.percent(), 53);

        assert_eq!(ProgressSummary::of_tree(&tree), army_summary);
        assert_eq!(
            ProgressSummary::of_tree(&DashboardTree::default()),
            ProgressSummary::default()
        );
    }
}
