use crate::member::error::ValidationError;
use crate::member::store::Fields;
use crate::member::tech_stack::TechStack;
use dto::cohort_year::CohortYear;
use dto::member::Member;
use dto::member_form::MemberForm;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const NAME_ATTRIBUTE: &str = "name";
const POST_ATTRIBUTE: &str = "post";
const PROFILE_PICTURE_ATTRIBUTE: &str = "profilepic";
const LINKEDIN_ATTRIBUTE: &str = "linkedin";
const GITHUB_ATTRIBUTE: &str = "github";
const INSTAGRAM_ATTRIBUTE: &str = "insta";
/// Older documents name the Instagram link after the network itself.
const LEGACY_INSTAGRAM_ATTRIBUTE: &str = "instagram";
const TECH_STACK_ATTRIBUTE: &str = "techstack";

/// A member as stored in a year collection.
/// Attribute names are those of the collections' schema.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct MemberDocument {
    name: String,
    post: String,
    #[serde(rename = "profilepic", default)]
    profile_picture_url: Option<String>,
    #[serde(rename = "linkedin", default)]
    linkedin_url: Option<String>,
    #[serde(rename = "github", default)]
    github_url: Option<String>,
    #[serde(rename = "insta", default)]
    instagram_url: Option<String>,
    #[serde(rename = "techstack", default, deserialize_with = "null_as_empty")]
    tech_stack: Vec<String>,
}

impl MemberDocument {
    /// Validate and clean up what the admin submitted.
    /// Name and post are required; blank optional links are dropped.
    pub fn from_form(form: &MemberForm) -> Result<Self, ValidationError> {
        let name = form.name().trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let post = form.post().trim();
        if post.is_empty() {
            return Err(ValidationError::MissingPost);
        }

        Ok(Self {
            name: name.to_owned(),
            post: post.to_owned(),
            profile_picture_url: non_blank(form.profile_picture_url()),
            linkedin_url: non_blank(form.linkedin_url()),
            github_url: non_blank(form.github_url()),
            instagram_url: non_blank(form.instagram_url()),
            tech_stack: TechStack::from(form.tech_stack()).into_entries(),
        })
    }

    pub fn from_fields(mut fields: Fields) -> serde_json::Result<Self> {
        if let Some(legacy_value) = fields.remove(LEGACY_INSTAGRAM_ATTRIBUTE) {
            if matches!(fields.get(INSTAGRAM_ATTRIBUTE), None | Some(Value::Null)) {
                fields.insert(INSTAGRAM_ATTRIBUTE.to_owned(), legacy_value);
            }
        }
        serde_json::from_value(Value::Object(fields))
    }

    /// Attributes to insert: absent values are left out of the document.
    pub fn sparse_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(NAME_ATTRIBUTE.to_owned(), Value::from(self.name.as_str()));
        fields.insert(POST_ATTRIBUTE.to_owned(), Value::from(self.post.as_str()));
        for (attribute, value) in self.optional_attributes() {
            if let Some(value) = value {
                fields.insert(attribute.to_owned(), Value::from(value.as_str()));
            }
        }
        if !self.tech_stack.is_empty() {
            fields.insert(
                TECH_STACK_ATTRIBUTE.to_owned(),
                Value::from(self.tech_stack.clone()),
            );
        }
        fields
    }

    /// Attributes to overwrite an existing document with.
    /// Absent values are explicitly cleared, otherwise the stored ones would survive the update.
    pub fn full_fields(&self) -> Fields {
        let mut fields = self.sparse_fields();
        for (attribute, value) in self.optional_attributes() {
            if value.is_none() {
                fields.insert(attribute.to_owned(), Value::Null);
            }
        }
        fields
            .entry(TECH_STACK_ATTRIBUTE)
            .or_insert_with(|| Value::Array(vec![]));
        fields
    }

    pub fn into_member(self, id: String, cohort_year: CohortYear) -> Member {
        Member::new(
            id,
            cohort_year,
            self.name,
            self.post,
            self.profile_picture_url,
            self.linkedin_url,
            self.github_url,
            self.instagram_url,
            self.tech_stack,
        )
    }

    fn optional_attributes(&self) -> [(&'static str, &Option<String>); 4] {
        [
            (PROFILE_PICTURE_ATTRIBUTE, &self.profile_picture_url),
            (LINKEDIN_ATTRIBUTE, &self.linkedin_url),
            (GITHUB_ATTRIBUTE, &self.github_url),
            (INSTAGRAM_ATTRIBUTE, &self.instagram_url),
        ]
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Unset array attributes come back as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
