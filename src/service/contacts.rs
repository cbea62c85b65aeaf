use super::ListingService;
use crate::crud::Filters;
use crate::error::StoreResult;
use crate::models::{ContactDraft, ContactPatch, ContactStatus, ContactSubmission};
use tracing::info;

impl ListingService {
    /// Store an enquiry from the public contact form
    pub async fn submit_contact(&self, draft: ContactDraft) -> StoreResult<ContactSubmission> {
        let submission: ContactSubmission = self.crud.create(draft).await?;
        info!(
            id = %submission.meta.id,
            property_id = submission.property_id.as_deref().unwrap_or(""),
            "Contact submission received"
        );
        Ok(submission)
    }

    pub async fn get_contact_submissions(&self, filters: &Filters) -> Vec<ContactSubmission> {
        self.crud.list(filters).await
    }

    pub async fn get_contact_submission(&self, id: &str) -> StoreResult<ContactSubmission> {
        self.crud.get_by_id(id).await
    }

    pub async fn update_contact_status(
        &self,
        id: &str,
        status: ContactStatus,
    ) -> StoreResult<ContactSubmission> {
        self.crud
            .update(
                id,
                ContactPatch {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .await
    }

    pub async fn delete_contact_submission(&self, id: &str) -> StoreResult<()> {
        self.crud.delete::<ContactSubmission>(id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::crud::Filters;
    use crate::error::StoreError;
    use crate::models::{ContactDraft, ContactStatus};
    use crate::service::test_support::*;

    fn enquiry() -> ContactDraft {
        ContactDraft {
            name: "Lina".to_string(),
            email: "lina@example.com".to_string(),
            message: "Is the penthouse still available?".to_string(),
            property_id: Some("prop-1".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submission_starts_new_and_can_be_marked() {
        let service = empty_service();
        let submission = service.submit_contact(enquiry()).await.unwrap();
        assert_eq!(submission.status, ContactStatus::New);
        assert_eq!(service.dashboard_stats().unread_contact_submissions, 1);

        let read = service
            .update_contact_status(&submission.meta.id, ContactStatus::Responded)
            .await
            .unwrap();
        assert_eq!(read.status, ContactStatus::Responded);
        assert_eq!(read.message, submission.message);
        assert_eq!(service.dashboard_stats().unread_contact_submissions, 0);

        let responded = service
            .get_contact_submissions(&Filters::new().equals("status", "responded"))
            .await;
        assert_eq!(responded.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected() {
        let service = empty_service();
        let err = service
            .submit_contact(ContactDraft {
                email: "not-an-email".to_string(),
                ..enquiry()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "email", .. }));
        assert!(service.get_contact_submissions(&Filters::new()).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_submission() {
        let service = empty_service();
        let submission = service.submit_contact(enquiry()).await.unwrap();
        service.delete_contact_submission(&submission.meta.id).await.unwrap();
        assert!(service
            .get_contact_submission(&submission.meta.id)
            .await
            .unwrap_err()
            .is_not_found());
    }
}
