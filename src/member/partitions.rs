use crate::tools::env_args::retrieve_arg_value;
use derive_getters::Getters;
use dto::cohort_year::CohortYear;

const DEFAULT_YEAR4_COLLECTION: &str = "689cefca0001449d5204";
const DEFAULT_YEAR3_COLLECTION: &str = "689cef0d003da89eebea";
const DEFAULT_YEAR2_COLLECTION: &str = "689cef3200167375be28";
const DEFAULT_YEAR1_COLLECTION: &str = "689cef460005804b0484";

/// The collection holding the members of one year.
#[derive(Debug, Getters, Clone, PartialEq)]
pub struct Partition {
    cohort_year: CohortYear,
    collection_id: String,
}

impl Partition {
    pub fn new(cohort_year: CohortYear, collection_id: String) -> Self {
        Self {
            cohort_year,
            collection_id,
        }
    }
}

/// One partition per year, seniors first.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitions {
    partitions: [Partition; 4],
}

impl Partitions {
    pub fn new(
        year4_collection: String,
        year3_collection: String,
        year2_collection: String,
        year1_collection: String,
    ) -> Self {
        Self {
            partitions: [
                Partition::new(CohortYear::Fourth, year4_collection),
                Partition::new(CohortYear::Third, year3_collection),
                Partition::new(CohortYear::Second, year2_collection),
                Partition::new(CohortYear::First, year1_collection),
            ],
        }
    }

    /// Each collection id may be overridden with a `--yearN-collection` arg.
    pub fn from_args() -> Self {
        let [year4, year3, year2, year1] = CohortYear::ALL.map(|year| {
            retrieve_arg_value(&format!("--year{}-collection", year.number()))
                .unwrap_or_else(|| default_collection_id(year).to_owned())
        });
        Self::new(year4, year3, year2, year1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter()
    }

    pub fn collection_id(&self, cohort_year: CohortYear) -> &str {
        let index = usize::from(4 - cohort_year.number());
        &self.partitions[index].collection_id
    }
}

impl Default for Partitions {
    fn default() -> Self {
        let [year4, year3, year2, year1] =
            CohortYear::ALL.map(|year| default_collection_id(year).to_owned());
        Self::new(year4, year3, year2, year1)
    }
}

fn default_collection_id(cohort_year: CohortYear) -> &'static str {
    match cohort_year {
        CohortYear::Fourth => DEFAULT_YEAR4_COLLECTION,
        CohortYear::Third => DEFAULT_YEAR3_COLLECTION,
        CohortYear::Second => DEFAULT_YEAR2_COLLECTION,
        CohortYear::First => DEFAULT_YEAR1_COLLECTION,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tools::env_args::with_env_args;

    pub const YEAR4_COLLECTION: &str = "year4";
    pub const YEAR3_COLLECTION: &str = "year3";
    pub const YEAR2_COLLECTION: &str = "year2";
    pub const YEAR1_COLLECTION: &str = "year1";

    pub fn get_test_partitions() -> Partitions {
        Partitions::new(
            YEAR4_COLLECTION.to_owned(),
            YEAR3_COLLECTION.to_owned(),
            YEAR2_COLLECTION.to_owned(),
            YEAR1_COLLECTION.to_owned(),
        )
    }

    #[test]
    fn should_find_collection_of_each_year() {
        let partitions = get_test_partitions();
        assert_eq!(YEAR4_COLLECTION, partitions.collection_id(CohortYear::Fourth));
        assert_eq!(YEAR3_COLLECTION, partitions.collection_id(CohortYear::Third));
        assert_eq!(YEAR2_COLLECTION, partitions.collection_id(CohortYear::Second));
        assert_eq!(YEAR1_COLLECTION, partitions.collection_id(CohortYear::First));
    }

    #[test]
    fn should_file_unknown_year_into_first_year_collection() {
        let partitions = get_test_partitions();
        assert_eq!(
            YEAR1_COLLECTION,
            partitions.collection_id(CohortYear::from(7_i64))
        );
    }

    #[test]
    fn should_iterate_seniors_first() {
        let years: Vec<CohortYear> = get_test_partitions()
            .iter()
            .map(|partition| *partition.cohort_year())
            .collect();
        assert_eq!(CohortYear::ALL.to_vec(), years);
    }

    #[test]
    fn should_override_collections_from_args() {
        let args = vec!["--year2-collection=custom".to_owned()];
        let partitions = with_env_args(args, Partitions::from_args);

        assert_eq!("custom", partitions.collection_id(CohortYear::Second));
        assert_eq!(
            DEFAULT_YEAR4_COLLECTION,
            partitions.collection_id(CohortYear::Fourth)
        );
    }

    #[test]
    fn should_use_default_collections_without_args() {
        let partitions = with_env_args(vec![], Partitions::from_args);
        assert_eq!(Partitions::default(), partitions);
    }
}
