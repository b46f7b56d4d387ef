pub mod cohort_year;
pub mod member;
pub mod member_form;
pub mod members_by_year;
