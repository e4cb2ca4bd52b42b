//! Leaderboards built from character sheets.

use crate::catalog::OrganizationKind;
use crate::character::Character;

/// A character's place on a leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry<'a> {
    /// 1-based.
    pub position: usize,
    pub character: &'a Character,
    pub score: u64,
}

fn rank_by<'a, I, F>(characters: I, score: F) -> Vec<RankEntry<'a>>
where
    I: IntoIterator<Item = &'a Character>,
    F: Fn(&Character) -> u64,
{
    let mut scored: Vec<(&Character, u64)> =
        characters.into_iter().map(|c| (c, score(c))).collect();
    // Stable, so ties keep their input order
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (character, score))| RankEntry {
            position: i + 1,
            character,
            score,
        })
        .collect()
}

/// Pirates ordered by bounty, highest first.
pub fn most_wanted(characters: &[Character]) -> Vec<RankEntry<'_>> {
    rank_by(characters.iter().filter(|c| c.is_pirate()), |c| c.bounty)
}

/// Everyone ordered by the sum of their energy maxima.
pub fn strongest(characters: &[Character]) -> Vec<RankEntry<'_>> {
    rank_by(characters, Character::total_power)
}

/// The `n` highest bounties across all characters.
pub fn top_bounties(characters: &[Character], n: usize) -> Vec<RankEntry<'_>> {
    let mut ranking = rank_by(characters, |c| c.bounty);
    ranking.truncate(n);
    ranking
}

pub fn members_of(characters: &[Character], kind: OrganizationKind) -> Vec<&Character> {
    characters
        .iter()
        .filter(|c| c.organization_kind() == Some(kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Organization;

    fn character(
        name: &str,
        bounty: u64,
        stamina: u32,
        kind: Option<OrganizationKind>,
    ) -> Character {
        let mut c = Character::new(name.to_string(), name.to_string(), String::new());
        c.bounty = bounty;
        c.skill_levels.stamina = stamina;
        c.organization = kind.map(|kind| Organization {
            name: kind.label().to_string(),
            kind,
            position: String::new(),
        });
        c
    }

    #[test]
    fn test_most_wanted_only_pirates() {
        let chars = vec![
            character("marine", 0, 4, Some(OrganizationKind::MarineRank)),
            character("low", 100, 0, None),
            character("crew", 0, 0, Some(OrganizationKind::PirateCrew)),
            character("high", 900, 0, Some(OrganizationKind::PirateCrew)),
        ];
        let ranking = most_wanted(&chars);
        let names: Vec<&str> = ranking.iter().map(|r| r.character.name.as_str()).collect();
        assert_eq!(names, vec!["high", "low", "crew"]);
        assert_eq!(ranking[0].position, 1);
        assert_eq!(ranking[2].score, 0);
    }

    #[test]
    fn test_strongest_ties_keep_order() {
        let chars = vec![
            character("a", 0, 1, None),
            character("b", 0, 3, None),
            character("c", 0, 1, None),
        ];
        let ranking = strongest(&chars);
        let names: Vec<&str> = ranking.iter().map(|r| r.character.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        // 3 * 50,000 stamina + 10,000 base resistance
        assert_eq!(ranking[0].score, 160_000);
    }

    #[test]
    fn test_top_bounties_truncates() {
        let chars = vec![
            character("a", 1, 0, None),
            character("b", 3, 0, None),
            character("c", 2, 0, None),
            character("d", 4, 0, None),
        ];
        let top = top_bounties(&chars, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].character.name, "d");
        assert_eq!(top[2].character.name, "c");
        assert!(top_bounties(&[], 3).is_empty());
    }

    #[test]
    fn test_members_of() {
        let chars = vec![
            character("a", 0, 0, Some(OrganizationKind::JournalistAgency)),
            character("b", 0, 0, Some(OrganizationKind::MarineRank)),
        ];
        let members = members_of(&chars, OrganizationKind::MarineRank);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "b");
    }
}
