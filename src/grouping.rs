// src/grouping.rs
use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::records::TeamRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameGroup {
    pub game_count: usize,
    /// Score descending, then team name ascending.
    pub teams: Vec<TeamRecord>,
}

/// Buckets ordered by game count, most games first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupedResults {
    groups: Vec<GameGroup>,
}

impl GroupedResults {
    pub fn iter(&self) -> std::slice::Iter<'_, GameGroup> { self.groups.iter() }

    pub fn get(&self, game_count: usize) -> Option<&GameGroup> {
        self.groups.iter().find(|g| g.game_count == game_count)
    }

    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    pub fn group_count(&self) -> usize { self.groups.len() }

    pub fn team_count(&self) -> usize {
        self.groups.iter().map(|g| g.teams.len()).sum()
    }

    /// All records, in display order.
    pub fn records(&self) -> impl Iterator<Item = &TeamRecord> {
        self.groups.iter().flat_map(|g| g.teams.iter())
    }
}

impl<'a> IntoIterator for &'a GroupedResults {
    type Item = &'a GameGroup;
    type IntoIter = std::slice::Iter<'a, GameGroup>;
    fn into_iter(self) -> Self::IntoIter { self.groups.iter() }
}

/// Group by game count (descending); within a group sort by quality score
/// descending with team name as the tie-break.
pub fn group_and_sort(records: Vec<TeamRecord>) -> GroupedResults {
    let mut buckets: BTreeMap<Reverse<usize>, Vec<TeamRecord>> = BTreeMap::new();
    for r in records {
        buckets.entry(Reverse(r.game_count)).or_default().push(r);
    }

    let groups = buckets
        .into_iter()
        .map(|(Reverse(game_count), mut teams)| {
            teams.sort_by(|a, b| {
                b.quality_score
                    .cmp(&a.quality_score)
                    .then_with(|| a.team.cmp(&b.team))
            });
            GameGroup { game_count, teams }
        })
        .collect();

    GroupedResults { groups }
}
