use crate::cohort_year::CohortYear;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Values submitted by the admin panel when adding or editing a member.
/// Nothing here is trusted yet: fields are trimmed and validated before reaching the store.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MemberForm {
    name: String,
    post: String,
    #[serde(default)]
    profile_picture_url: Option<String>,
    #[serde(default)]
    linkedin_url: Option<String>,
    #[serde(default)]
    github_url: Option<String>,
    #[serde(default)]
    instagram_url: Option<String>,
    #[serde(default)]
    tech_stack: TechStackInput,
    cohort_year: CohortYear,
}

impl MemberForm {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        post: String,
        profile_picture_url: Option<String>,
        linkedin_url: Option<String>,
        github_url: Option<String>,
        instagram_url: Option<String>,
        tech_stack: TechStackInput,
        cohort_year: CohortYear,
    ) -> Self {
        Self {
            name,
            post,
            profile_picture_url,
            linkedin_url,
            github_url,
            instagram_url,
            tech_stack,
            cohort_year,
        }
    }
}

/// The tech stack may be typed as a single comma-separated field
/// or built entry by entry.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum TechStackInput {
    Delimited(String),
    Entries(Vec<String>),
}

impl Default for TechStackInput {
    fn default() -> Self {
        TechStackInput::Entries(vec![])
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl MemberForm {
        pub fn new_test(name: &str, post: &str, cohort_year: CohortYear) -> Self {
            MemberForm::new(
                name.to_owned(),
                post.to_owned(),
                None,
                None,
                None,
                None,
                TechStackInput::default(),
                cohort_year,
            )
        }

        pub fn with_tech_stack(mut self, tech_stack: TechStackInput) -> Self {
            self.tech_stack = tech_stack;
            self
        }

        pub fn with_linkedin_url(mut self, linkedin_url: &str) -> Self {
            self.linkedin_url = Some(linkedin_url.to_owned());
            self
        }

        pub fn with_instagram_url(mut self, instagram_url: &str) -> Self {
            self.instagram_url = Some(instagram_url.to_owned());
            self
        }
    }

    #[test]
    fn should_deserialize_delimited_tech_stack() {
        let form: MemberForm = serde_json::from_str(
            r#"{"name": "A", "post": "Lead", "techStack": "ROS, Python", "cohortYear": 2}"#,
        )
        .unwrap();
        assert_eq!(
            &TechStackInput::Delimited("ROS, Python".to_owned()),
            form.tech_stack()
        );
        assert_eq!(&CohortYear::Second, form.cohort_year());
    }

    #[test]
    fn should_deserialize_tech_stack_entries() {
        let form: MemberForm = serde_json::from_str(
            r#"{"name": "A", "post": "Lead", "techStack": ["ROS", "Python"], "cohortYear": 4}"#,
        )
        .unwrap();
        assert_eq!(
            &TechStackInput::Entries(vec!["ROS".to_owned(), "Python".to_owned()]),
            form.tech_stack()
        );
    }

    #[test]
    fn should_deserialize_form_without_optional_fields() {
        let form: MemberForm =
            serde_json::from_str(r#"{"name": "A", "post": "Lead", "cohortYear": 1}"#).unwrap();
        assert_eq!(MemberForm::new_test("A", "Lead", CohortYear::First), form);
    }
}
