use crate::cohort_year::CohortYear;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A club member as loaded from its year collection.
/// `cohort_year` is not stored with the member: it is the year of the collection it was read from.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    id: String,
    cohort_year: CohortYear,
    name: String,
    post: String,
    profile_picture_url: Option<String>,
    linkedin_url: Option<String>,
    github_url: Option<String>,
    instagram_url: Option<String>,
    tech_stack: Vec<String>,
}

impl Member {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        cohort_year: CohortYear,
        name: String,
        post: String,
        profile_picture_url: Option<String>,
        linkedin_url: Option<String>,
        github_url: Option<String>,
        instagram_url: Option<String>,
        tech_stack: Vec<String>,
    ) -> Self {
        Self {
            id,
            cohort_year,
            name,
            post,
            profile_picture_url,
            linkedin_url,
            github_url,
            instagram_url,
            tech_stack,
        }
    }

    pub fn location(&self) -> MemberLocation {
        MemberLocation::new(self.cohort_year, self.id.clone())
    }
}

/// Where a member currently lives: its year collection and its id within it.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MemberLocation {
    cohort_year: CohortYear,
    id: String,
}

impl MemberLocation {
    pub fn new(cohort_year: CohortYear, id: String) -> Self {
        Self { cohort_year, id }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const MEMBER_ID: &str = "68a0f1c2003e5b7d9a41";
    pub const MEMBER_NAME: &str = "Aarav Mehta";
    pub const MEMBER_POST: &str = "Electronics Lead";

    pub fn get_expected_member() -> Member {
        Member::new(
            MEMBER_ID.to_owned(),
            CohortYear::Third,
            MEMBER_NAME.to_owned(),
            MEMBER_POST.to_owned(),
            Some("https://cdn.example.org/aarav.png".to_owned()),
            Some("https://linkedin.com/in/aarav".to_owned()),
            None,
            Some("https://instagram.com/aarav".to_owned()),
            vec!["ROS".to_owned(), "C++".to_owned()],
        )
    }

    #[test]
    fn should_serialize_member_in_camel_case() {
        let json = serde_json::to_value(get_expected_member()).unwrap();
        assert_eq!(3, json["cohortYear"]);
        assert_eq!("https://instagram.com/aarav", json["instagramUrl"]);
        assert!(json["githubUrl"].is_null());
    }

    #[test]
    fn should_locate_member() {
        let location = get_expected_member().location();
        assert_eq!(&CohortYear::Third, location.cohort_year());
        assert_eq!(MEMBER_ID, location.id());
    }
}
