use super::ListingService;
use crate::crud::Filters;
use crate::error::{StoreError, StoreResult};
use crate::models::{Record, Testimonial, TestimonialDraft, TestimonialPatch};
use crate::remote::{ImageUpload, TestimonialUpload};

impl ListingService {
    pub async fn get_testimonials(&self, filters: &Filters) -> Vec<Testimonial> {
        self.crud.list(filters).await
    }

    pub async fn get_approved_testimonials(&self) -> Vec<Testimonial> {
        self.crud.list(&Filters::new().equals("approved", true)).await
    }

    pub async fn get_testimonial(&self, id: &str) -> StoreResult<Testimonial> {
        self.crud.get_by_id(id).await
    }

    pub async fn create_testimonial(&self, draft: TestimonialDraft) -> StoreResult<Testimonial> {
        self.crud.create(draft).await
    }

    pub async fn update_testimonial(
        &self,
        id: &str,
        patch: TestimonialPatch,
    ) -> StoreResult<Testimonial> {
        self.crud.update(id, patch).await
    }

    pub async fn delete_testimonial(&self, id: &str) -> StoreResult<()> {
        self.crud.delete::<Testimonial>(id).await
    }

    /// Testimonials published on the backend. Failures are returned as-is;
    /// there is no local fallback.
    pub async fn fetch_remote_testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        let backend = self.backend.as_ref().ok_or(StoreError::RemoteUnavailable)?;
        let token = self.session_token();
        let remote = backend.list_testimonials(token.as_deref()).await?;
        Ok(remote.into_iter().map(Testimonial::from).collect())
    }

    /// Post a testimonial to the backend without storing it locally
    pub async fn submit_remote_testimonial(
        &self,
        draft: TestimonialDraft,
        image: Option<ImageUpload>,
    ) -> StoreResult<Testimonial> {
        Testimonial::validate(&draft)?;
        let backend = self.backend.as_ref().ok_or(StoreError::RemoteUnavailable)?;
        let token = self.session_token();

        let upload = TestimonialUpload {
            name: draft.name,
            email: draft.email,
            comments: draft.comments,
            designation: draft.designation,
            image,
        };
        let remote = backend.create_testimonial(token.as_deref(), &upload).await?;
        Ok(Testimonial::from(remote))
    }
}
