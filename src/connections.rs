use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use eframe::egui::{Vec2, vec2};

use crate::catalog::{Game, GameId};
use crate::positions::PositionMap;

/// Perpendicular distance between two connectors that join the same pair.
pub const LINE_OFFSET: f32 = 6.0;

/// Centre of a node card relative to its stored position.
pub const NODE_ANCHOR: Vec2 = Vec2::new(48.0, 48.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relation {
    Designer,
    Studio,
}

impl Relation {
    pub const ALL: [Self; 2] = [Self::Designer, Self::Studio];

    pub fn key(self) -> &'static str {
        match self {
            Self::Designer => "designer",
            Self::Studio => "studio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Designer => "Developer",
            Self::Studio => "Studio",
        }
    }

    /// Side of a shared pair this relation is pushed to.
    pub fn offset_sign(self) -> i8 {
        match self {
            Self::Designer => -1,
            Self::Studio => 1,
        }
    }

    /// Grouping value, with empty strings treated as absent.
    pub fn value_of(self, game: &Game) -> Option<&str> {
        let value = match self {
            Self::Designer => game.designer.as_deref(),
            Self::Studio => game.studio.as_deref(),
        };
        value.filter(|value| !value.is_empty())
    }
}

/// Two games joined because they share a relation value.
#[derive(Clone, Copy, Debug)]
pub struct ConnectionPair<'a> {
    pub group_key: &'a str,
    pub from: &'a Game,
    pub to: &'a Game,
}

impl ConnectionPair<'_> {
    /// Direction-independent identity of the joined pair.
    pub fn pair_key(&self) -> (GameId, GameId) {
        pair_key(self.from.id, self.to.id)
    }
}

fn pair_key(a: GameId, b: GameId) -> (GameId, GameId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Released games first, then ascending id.
pub fn release_order(a: &Game, b: &Game) -> Ordering {
    b.is_released()
        .cmp(&a.is_released())
        .then_with(|| a.id.cmp(&b.id))
}

/// Partitions `games` by relation value. Groups come out in order of first
/// appearance and members are sorted with [`release_order`].
pub fn group_by_relation(games: &[Game], relation: Relation) -> Vec<(&str, Vec<&Game>)> {
    let mut groups: Vec<(&str, Vec<&Game>)> = Vec::new();
    let mut index_by_key: HashMap<&str, usize> = HashMap::new();

    for game in games {
        let Some(key) = relation.value_of(game) else {
            continue;
        };

        let index = *index_by_key.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[index].1.push(game);
    }

    for (_, members) in &mut groups {
        members.sort_by(|a, b| release_order(a, b));
    }

    groups
}

/// Path edges through each sorted group: a group of n members yields n - 1
/// pairs, singletons yield none.
pub fn make_connections(games: &[Game], relation: Relation) -> Vec<ConnectionPair<'_>> {
    group_by_relation(games, relation)
        .into_iter()
        .flat_map(|(group_key, members)| {
            members
                .windows(2)
                .map(|window| ConnectionPair {
                    group_key,
                    from: window[0],
                    to: window[1],
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// A connector ready to draw, in plane coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorLine {
    pub relation: Relation,
    pub group_key: String,
    pub from_id: GameId,
    pub to_id: GameId,
    pub start: Vec2,
    pub end: Vec2,
    /// -1, 0 or 1: which side of a shared pair this line sits on.
    pub offset_sign: i8,
}

impl ConnectorLine {
    pub fn touches(&self, id: GameId) -> bool {
        self.from_id == id || self.to_id == id
    }
}

/// Lays out connectors for every requested relation, in the order given.
///
/// A pair joined by more than one relation in the catalog gets each line
/// shifted [`LINE_OFFSET`] units along the pair's normal, on the side given by
/// [`Relation::offset_sign`]. Sharing is judged over every relation, so hiding
/// one relation leaves the other's lines where they were. Inputs are never
/// mutated; calling again with the same arguments yields the same lines.
pub fn layout_connectors(
    games: &[Game],
    positions: &PositionMap,
    relations: &[Relation],
) -> Vec<ConnectorLine> {
    let mut requested = relations.to_vec();
    requested.dedup();

    let pairs_by_relation = Relation::ALL
        .into_iter()
        .map(|relation| (relation, make_connections(games, relation)))
        .collect::<Vec<_>>();

    let keys_by_relation = pairs_by_relation
        .iter()
        .map(|(relation, pairs)| {
            (
                *relation,
                pairs
                    .iter()
                    .map(ConnectionPair::pair_key)
                    .collect::<HashSet<_>>(),
            )
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::new();
    for relation in &requested {
        let Some((_, pairs)) = pairs_by_relation
            .iter()
            .find(|(candidate, _)| candidate == relation)
        else {
            continue;
        };
        for pair in pairs {
            let key = pair.pair_key();
            let shared = keys_by_relation
                .iter()
                .any(|(other, keys)| other != relation && keys.contains(&key));
            let offset_sign = if shared { relation.offset_sign() } else { 0 };

            let from = positions.resolve(pair.from) + NODE_ANCHOR;
            let to = positions.resolve(pair.to) + NODE_ANCHOR;
            let shift = if offset_sign == 0 {
                Vec2::ZERO
            } else {
                pair_normal(pair.from.id, pair.to.id, from, to)
                    * (LINE_OFFSET * f32::from(offset_sign))
            };

            lines.push(ConnectorLine {
                relation: *relation,
                group_key: pair.group_key.to_owned(),
                from_id: pair.from.id,
                to_id: pair.to.id,
                start: from + shift,
                end: to + shift,
                offset_sign,
            });
        }
    }

    lines
}

/// Unit normal of the segment oriented from the lower id to the higher id, so
/// both lines of a shared pair agree on which side is which.
fn pair_normal(from_id: GameId, to_id: GameId, from: Vec2, to: Vec2) -> Vec2 {
    let direction = if from_id <= to_id { to - from } else { from - to };
    let length = direction.length();
    if length <= f32::EPSILON {
        return vec2(0.0, 1.0);
    }
    vec2(-direction.y, direction.x) / length
}
