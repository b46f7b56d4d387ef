use crate::member::Result;
use crate::member::document::MemberDocument;
use crate::member::error::RegistryError;
use crate::member::partitions::{Partition, Partitions};
use crate::member::store::{Document, DocumentStore, StoreError};
use dto::cohort_year::CohortYear;
use dto::member::{Member, MemberLocation};
use dto::member_form::MemberForm;
use dto::members_by_year::MembersByYear;
use log::{debug, warn};
use rocket::futures::future::try_join_all;
use uuid::Uuid;

/// Entry point to the club members, whatever their year.
///
/// Members of each year live in their own collection of the document store.
/// The registry hides that split from callers, and keeps a member in exactly one collection,
/// moving it when its year changes.
///
/// Nothing is cached nor locked: every call hits the store,
/// and concurrent writes onto the same member are settled by the store (last write wins).
pub struct MemberRegistry<S: DocumentStore> {
    store: S,
    partitions: Partitions,
}

impl<S: DocumentStore> MemberRegistry<S> {
    pub fn new(store: S, partitions: Partitions) -> Self {
        Self { store, partitions }
    }

    /// Load the members of every year.
    /// Years are loaded concurrently; if any of them fails, nothing is returned.
    pub async fn load_all(&self) -> Result<MembersByYear> {
        let loads = self
            .partitions
            .iter()
            .map(|partition| self.load_partition(partition));
        let loaded = try_join_all(loads).await?;

        let mut members = MembersByYear::default();
        for (cohort_year, partition_members) in loaded {
            members.set(cohort_year, partition_members);
        }
        debug!("Members loaded [count: {}]", members.total());

        Ok(members)
    }

    async fn load_partition(
        &self,
        partition: &Partition,
    ) -> Result<(CohortYear, Vec<Member>), StoreError> {
        let cohort_year = *partition.cohort_year();
        let collection_id = partition.collection_id();
        let members = self
            .store
            .list(collection_id)
            .await?
            .into_iter()
            .filter_map(|document| match to_member(document, cohort_year) {
                Ok(member) => Some(member),
                Err(error) => {
                    warn!("Skipping unreadable member [collection: {collection_id}, {error:?}]");
                    None
                }
            })
            .collect();

        Ok((cohort_year, members))
    }

    /// Add a member into the collection of its year.
    pub async fn create(&self, form: &MemberForm) -> Result<Member> {
        let document = MemberDocument::from_form(form)?;
        let member = self.insert(*form.cohort_year(), &document).await?;
        Ok(member)
    }

    /// Apply the edited values to a member.
    ///
    /// If its year is unchanged, the member is updated in place and keeps its id.
    /// Otherwise, it is moved: inserted into its new year's collection (with a new id),
    /// then deleted from its former one.
    /// Should the deletion fail, the member exists in both collections
    /// and [RegistryError::IncompleteMove] is returned.
    pub async fn update(&self, origin: &MemberLocation, form: &MemberForm) -> Result<Member> {
        let document = MemberDocument::from_form(form)?;
        let origin_collection_id = self.partitions.collection_id(*origin.cohort_year());
        let destination_year = *form.cohort_year();
        let destination_collection_id = self.partitions.collection_id(destination_year);

        if origin_collection_id == destination_collection_id {
            debug!(
                "Updating member in place [collection: {origin_collection_id}, id: {}]",
                origin.id()
            );
            let updated = self
                .store
                .update(origin_collection_id, origin.id(), document.full_fields())
                .await?;
            Ok(to_member(updated, destination_year)?)
        } else {
            self.move_member(origin, destination_year, &document).await
        }
    }

    async fn move_member(
        &self,
        origin: &MemberLocation,
        destination_year: CohortYear,
        document: &MemberDocument,
    ) -> Result<Member> {
        debug!(
            "Moving member from {} to {destination_year} [id: {}]",
            origin.cohort_year(),
            origin.id()
        );
        let moved = self.insert(destination_year, document).await?;

        let origin_collection_id = self.partitions.collection_id(*origin.cohort_year());
        match self.store.delete(origin_collection_id, origin.id()).await {
            Ok(()) => Ok(moved),
            Err(cause) => {
                warn!(
                    "Member copied into {destination_year} but not removed from {} [new id: {}, origin id: {}]\n{cause:#?}",
                    origin.cohort_year(),
                    moved.id(),
                    origin.id()
                );
                Err(RegistryError::IncompleteMove {
                    moved,
                    origin: origin.clone(),
                    cause,
                })
            }
        }
    }

    pub async fn remove(&self, location: &MemberLocation) -> Result<()> {
        let collection_id = self.partitions.collection_id(*location.cohort_year());
        debug!(
            "Removing member [collection: {collection_id}, id: {}]",
            location.id()
        );
        self.store.delete(collection_id, location.id()).await?;
        Ok(())
    }

    /// Once the store has accepted the document, the insertion counts as done:
    /// should its answer be unreadable, the member is rebuilt from what was sent.
    async fn insert(
        &self,
        cohort_year: CohortYear,
        document: &MemberDocument,
    ) -> Result<Member, StoreError> {
        let collection_id = self.partitions.collection_id(cohort_year);
        let document_id = generate_document_id();
        debug!("Inserting member [collection: {collection_id}, id: {document_id}]");
        let created = self
            .store
            .create(collection_id, &document_id, document.sparse_fields())
            .await?;
        Ok(to_member(created, cohort_year)
            .unwrap_or_else(|_| document.clone().into_member(document_id, cohort_year)))
    }
}

/// Documents ids are chosen by the client. A v4 UUID without hyphens fits the store's constraints.
fn generate_document_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn to_member(document: Document, cohort_year: CohortYear) -> Result<Member, StoreError> {
    let (id, fields) = document.into_parts();
    match MemberDocument::from_fields(fields) {
        Ok(member_document) => Ok(member_document.into_member(id, cohort_year)),
        Err(error) => {
            warn!("Stored member can't be read [id: {id}]\n{error:#?}");
            Err(StoreError::MalformedDocument(id))
        }
    }
}
