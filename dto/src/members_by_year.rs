use crate::cohort_year::CohortYear;
use crate::member::Member;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Every member of the club, grouped by the collection they were read from.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct MembersByYear {
    year4: Vec<Member>,
    year3: Vec<Member>,
    year2: Vec<Member>,
    year1: Vec<Member>,
}

impl MembersByYear {
    pub fn get(&self, year: CohortYear) -> &[Member] {
        match year {
            CohortYear::Fourth => &self.year4,
            CohortYear::Third => &self.year3,
            CohortYear::Second => &self.year2,
            CohortYear::First => &self.year1,
        }
    }

    pub fn set(&mut self, year: CohortYear, members: Vec<Member>) {
        match year {
            CohortYear::Fourth => self.year4 = members,
            CohortYear::Third => self.year3 = members,
            CohortYear::Second => self.year2 = members,
            CohortYear::First => self.year1 = members,
        }
    }

    pub fn total(&self) -> usize {
        CohortYear::ALL.iter().map(|year| self.get(*year).len()).sum()
    }

    /// All members, seniors first.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        CohortYear::ALL.into_iter().flat_map(|year| self.get(year))
    }
}

/// Head count of each year, as displayed on the admin dashboard.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct MembersCount {
    year4: usize,
    year3: usize,
    year2: usize,
    year1: usize,
    total: usize,
}

impl From<&MembersByYear> for MembersCount {
    fn from(members: &MembersByYear) -> Self {
        Self {
            year4: members.year4.len(),
            year3: members.year3.len(),
            year2: members.year2.len(),
            year1: members.year1.len(),
            total: members.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::tests::get_expected_member;

    fn member_in(year: CohortYear, id: &str) -> Member {
        let member = get_expected_member();
        Member::new(
            id.to_owned(),
            year,
            member.name().clone(),
            member.post().clone(),
            None,
            None,
            None,
            None,
            vec![],
        )
    }

    #[test]
    fn should_iterate_seniors_first() {
        let mut members = MembersByYear::default();
        members.set(CohortYear::First, vec![member_in(CohortYear::First, "a")]);
        members.set(CohortYear::Fourth, vec![member_in(CohortYear::Fourth, "b")]);
        members.set(CohortYear::Second, vec![member_in(CohortYear::Second, "c")]);

        let ids: Vec<&str> = members.iter().map(|member| member.id().as_str()).collect();
        assert_eq!(vec!["b", "c", "a"], ids);
    }

    #[test]
    fn should_count_members() {
        let mut members = MembersByYear::default();
        members.set(
            CohortYear::Third,
            vec![
                member_in(CohortYear::Third, "a"),
                member_in(CohortYear::Third, "b"),
            ],
        );
        members.set(CohortYear::First, vec![member_in(CohortYear::First, "c")]);

        let count = MembersCount::from(&members);
        assert_eq!(0, *count.year4());
        assert_eq!(2, *count.year3());
        assert_eq!(0, *count.year2());
        assert_eq!(1, *count.year1());
        assert_eq!(3, *count.total());
    }

    #[test]
    fn should_serialize_one_key_per_year() {
        let json = serde_json::to_value(MembersByYear::default()).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(4, keys.len());
        for key in ["year4", "year3", "year2", "year1"] {
            assert!(json[key].as_array().unwrap().is_empty());
        }
    }
}
