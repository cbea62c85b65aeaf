use super::{ApiResponse, ListingService};
use crate::crud::Filters;
use crate::error::{StoreError, StoreResult};
use crate::models::{Blog, BlogDraft, BlogPatch};
use crate::remote::{BlogUpload, ImageUpload};
use tracing::{debug, warn};

impl ListingService {
    /// List blogs, preferring the remote backend.
    ///
    /// Without a session token (or backend) the local collection is used
    /// directly. A remote auth failure is returned as `Unauthorized`; any other
    /// remote failure falls back to the local collection. Remote results are
    /// not written back locally.
    pub async fn get_blogs(&self, filters: &Filters) -> StoreResult<ApiResponse<Vec<Blog>>> {
        if let Some((backend, token)) = self.remote_session() {
            match backend.list_blogs(&token).await {
                Ok(remote) => {
                    let blogs: Vec<Blog> = remote.into_iter().map(Blog::from).collect();
                    debug!(count = blogs.len(), "Blogs loaded from backend");
                    return Ok(ApiResponse::ok(filters.apply(blogs)));
                }
                Err(e) if e.is_auth_failure() => {
                    warn!(error = %e, "Backend rejected session while listing blogs");
                    return Err(StoreError::Unauthorized(e.to_string()));
                }
                Err(e) => {
                    warn!(error = %e, "Backend unavailable, listing local blogs");
                }
            }
        }

        let blogs: Vec<Blog> = self
            .crud
            .list::<Blog>(&Filters::new())
            .await
            .into_iter()
            .map(Blog::normalized)
            .collect();
        Ok(ApiResponse::ok(filters.apply(blogs)))
    }

    /// Create a blog, preferring the remote backend, with the same fallback
    /// policy as [`ListingService::get_blogs`]. The image is only uploaded
    /// remotely; the local record keeps `draft.image_url`.
    pub async fn create_blog(
        &self,
        draft: BlogDraft,
        image: Option<ImageUpload>,
    ) -> StoreResult<ApiResponse<Blog>> {
        if let Some((backend, token)) = self.remote_session() {
            let upload = BlogUpload {
                title: draft.title.clone(),
                content: draft.content.clone(),
                category: draft.category.clone(),
                tags: draft.tags.clone(),
                image,
            };
            match backend.create_blog(&token, &upload).await {
                Ok(remote) => {
                    return Ok(ApiResponse::ok(Blog::from(remote)).with_message("Blog created"));
                }
                Err(e) if e.is_auth_failure() => {
                    warn!(error = %e, "Backend rejected session while creating blog");
                    return Err(StoreError::Unauthorized(e.to_string()));
                }
                Err(e) => {
                    warn!(error = %e, "Backend unavailable, creating blog locally");
                }
            }
        }

        let blog: Blog = self.crud.create(draft).await?;
        Ok(ApiResponse::ok(blog.normalized()).with_message("Blog created"))
    }

    pub async fn get_blog(&self, id: &str) -> StoreResult<Blog> {
        self.crud.get_by_id::<Blog>(id).await.map(Blog::normalized)
    }

    pub async fn update_blog(&self, id: &str, patch: BlogPatch) -> StoreResult<Blog> {
        self.crud.update::<Blog>(id, patch).await.map(Blog::normalized)
    }

    pub async fn delete_blog(&self, id: &str) -> StoreResult<()> {
        self.crud.delete::<Blog>(id).await
    }

    pub async fn get_blogs_by_category(&self, category: &str) -> StoreResult<Vec<Blog>> {
        let response = self
            .get_blogs(&Filters::new().equals("category", category))
            .await?;
        Ok(response.data)
    }
}
