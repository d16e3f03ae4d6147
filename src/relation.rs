// SPDX-License-Identifier: PMPL-1.0-or-later

//! Many-to-many relations between two code tables.
//!
//! The owning table stores the relation as a list of keys into the target
//! table (a currency lists the countries that use it). [`RelationIndex`]
//! resolves those keys once and keeps both directions, so "countries using
//! CHF" and "currencies used in CH" are both map lookups.

use crate::error::{CodeError, Result};
use crate::record::CodeRecord;
use crate::registry::CodeRegistry;
use std::collections::HashMap;

pub struct RelationIndex<A: CodeRecord, B: CodeRecord> {
    owners: &'static [A],
    targets: &'static [B],
    owner_positions: HashMap<&'static str, usize>,
    /// owner position -> target positions, in the owner's stored order
    forward: Vec<Vec<usize>>,
    /// target key -> owner positions, in owner declaration order
    reverse: HashMap<&'static str, Vec<usize>>,
}

impl<A: CodeRecord, B: CodeRecord> RelationIndex<A, B> {
    /// Resolve `related(owner)` for every owner against `target`.
    ///
    /// Fails if an owner names a key the target table does not hold.
    pub fn build(
        owner: &CodeRegistry<A>,
        target: &CodeRegistry<B>,
        related: fn(&A) -> &'static [&'static str],
    ) -> Result<Self> {
        let owners = owner.all();
        let targets = target.all();
        let target_positions: HashMap<&'static str, usize> = targets
            .iter()
            .enumerate()
            .map(|(position, record)| (record.key(), position))
            .collect();

        let mut owner_positions = HashMap::with_capacity(owners.len());
        let mut forward = Vec::with_capacity(owners.len());
        let mut reverse: HashMap<&'static str, Vec<usize>> = HashMap::new();

        for (position, record) in owners.iter().enumerate() {
            owner_positions.insert(record.key(), position);

            let mut resolved = Vec::new();
            for &key in related(record) {
                let target_position = match target_positions.get(key) {
                    Some(&target_position) => target_position,
                    None => {
                        return Err(CodeError::DanglingReference {
                            domain: A::DOMAIN,
                            key: record.key().to_string(),
                            target: B::DOMAIN,
                            related: key.to_string(),
                        })
                    }
                };
                resolved.push(target_position);
                let owners_of_key = reverse.entry(key).or_default();
                if owners_of_key.last() != Some(&position) {
                    owners_of_key.push(position);
                }
            }
            forward.push(resolved);
        }

        Ok(Self {
            owners,
            targets,
            owner_positions,
            forward,
            reverse,
        })
    }

    /// Owning records related to the target record with key `target_key`.
    ///
    /// An absent, unknown or unrelated key yields an empty `Vec`.
    pub fn related_to(&self, target_key: Option<&str>) -> Vec<&'static A> {
        let owners = self.owners;
        target_key
            .and_then(|key| self.reverse.get(key))
            .map(|positions| positions.iter().map(|&p| &owners[p]).collect())
            .unwrap_or_default()
    }

    /// Target records `owner` refers to, in the order it lists them.
    pub fn targets_of(&self, owner: &A) -> Vec<&'static B> {
        let targets = self.targets;
        self.owner_positions
            .get(owner.key())
            .map(|&position| {
                self.forward[position]
                    .iter()
                    .map(|&p| &targets[p])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of distinct target keys that have at least one owner.
    pub fn target_count(&self) -> usize {
        self.reverse.len()
    }
}

impl<A: CodeRecord, B: CodeRecord> std::fmt::Debug for RelationIndex<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelationIndex")
            .field("owner", &A::DOMAIN)
            .field("target", &B::DOMAIN)
            .field("related_targets", &self.reverse.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{CaseConvention, Normalizer};

    struct Team {
        code: &'static str,
        members: &'static [&'static str],
    }

    struct Person {
        code: &'static str,
    }

    impl CodeRecord for Team {
        const DOMAIN: &'static str = "team";
        const KEY_RULES: Normalizer = Normalizer::new(CaseConvention::Upper, &[]);

        fn key(&self) -> &'static str {
            self.code
        }
        fn name(&self) -> &'static str {
            self.code
        }
    }

    impl CodeRecord for Person {
        const DOMAIN: &'static str = "person";
        const KEY_RULES: Normalizer = Normalizer::new(CaseConvention::Upper, &[]);

        fn key(&self) -> &'static str {
            self.code
        }
        fn name(&self) -> &'static str {
            self.code
        }
    }

    static TEAMS: &[Team] = &[
        Team {
            code: "RED",
            members: &["ANN", "BOB"],
        },
        Team {
            code: "BLUE",
            members: &["BOB"],
        },
        Team {
            code: "IDLE",
            members: &[],
        },
    ];

    static BROKEN: &[Team] = &[Team {
        code: "GHOST",
        members: &["NOBODY"],
    }];

    static PEOPLE: &[Person] = &[
        Person { code: "ANN" },
        Person { code: "BOB" },
        Person { code: "CAT" },
    ];

    fn members(team: &Team) -> &'static [&'static str] {
        team.members
    }

    #[test]
    fn test_both_directions() {
        let teams = CodeRegistry::build(TEAMS).unwrap();
        let people = CodeRegistry::build(PEOPLE).unwrap();
        let index = RelationIndex::build(&teams, &people, members).unwrap();

        let bob: Vec<_> = index.related_to(Some("BOB")).iter().map(|t| t.code).collect();
        assert_eq!(bob, ["RED", "BLUE"]);

        let red = teams.get("RED").unwrap();
        let red_members: Vec<_> = index.targets_of(red).iter().map(|p| p.code).collect();
        assert_eq!(red_members, ["ANN", "BOB"]);
        assert_eq!(index.target_count(), 2);
    }

    #[test]
    fn test_absent_and_unrelated_keys_are_empty() {
        let teams = CodeRegistry::build(TEAMS).unwrap();
        let people = CodeRegistry::build(PEOPLE).unwrap();
        let index = RelationIndex::build(&teams, &people, members).unwrap();

        assert!(index.related_to(None).is_empty());
        assert!(index.related_to(Some("CAT")).is_empty());
        assert!(index.related_to(Some("ZED")).is_empty());
        assert!(index.targets_of(teams.get("IDLE").unwrap()).is_empty());
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let teams = CodeRegistry::build(BROKEN).unwrap();
        let people = CodeRegistry::build(PEOPLE).unwrap();
        let err = RelationIndex::build(&teams, &people, members).unwrap_err();
        assert!(matches!(err, CodeError::DanglingReference { .. }));
    }
}
