use super::ListingService;
use crate::crud::Filters;
use crate::error::StoreResult;
use crate::models::{Project, ProjectDraft, ProjectPatch, ProjectStatus};

impl ListingService {
    pub async fn get_projects(&self, filters: &Filters) -> Vec<Project> {
        self.crud.list(filters).await
    }

    pub async fn get_project(&self, id: &str) -> StoreResult<Project> {
        self.crud.get_by_id(id).await
    }

    pub async fn create_project(&self, draft: ProjectDraft) -> StoreResult<Project> {
        self.crud.create(draft).await
    }

    pub async fn update_project(&self, id: &str, patch: ProjectPatch) -> StoreResult<Project> {
        self.crud.update(id, patch).await
    }

    pub async fn delete_project(&self, id: &str) -> StoreResult<()> {
        self.crud.delete::<Project>(id).await
    }

    /// Case-insensitive match on name, location or developer
    pub async fn search_projects(&self, term: &str) -> Vec<Project> {
        let filters = Filters::new().search(Project::SEARCH_FIELDS, term.trim());
        self.crud.list(&filters).await
    }

    pub async fn get_projects_by_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.crud
            .list(&Filters::new().equals("status", status.as_str()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{ProjectDraft, ProjectPatch, ProjectStatus};
    use crate::service::test_support::*;
    use crate::service::ServiceOptions;

    #[tokio::test]
    async fn test_status_filter_and_search() {
        let service = service_with(ServiceOptions::default());

        let ongoing = service.get_projects_by_status(ProjectStatus::Ongoing).await;
        assert!(!ongoing.is_empty());
        assert!(ongoing.iter().all(|p| p.status == ProjectStatus::Ongoing));

        let nakheel = service.search_projects("NAKHEEL").await;
        assert_eq!(nakheel.len(), 1);
        assert_eq!(nakheel[0].developer, "Nakheel");
    }

    #[tokio::test]
    async fn test_project_lifecycle() {
        let service = empty_service();
        let created = service
            .create_project(ProjectDraft {
                name: "Harbour Point".to_string(),
                location: "Dubai Creek Harbour".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.status, ProjectStatus::Upcoming);

        let updated = service
            .update_project(
                &created.meta.id,
                ProjectPatch {
                    status: Some(ProjectStatus::Completed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, ProjectStatus::Completed);
        assert_eq!(updated.name, "Harbour Point");
        assert_eq!(service.get_projects_by_status(ProjectStatus::Completed).await.len(), 1);

        service.delete_project(&created.meta.id).await.unwrap();
        assert!(service.get_project(&created.meta.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_nameless_project_is_rejected() {
        let service = empty_service();
        let err = service.create_project(ProjectDraft::default()).await.unwrap_err();
        assert!(matches!(err, crate::error::StoreError::Validation { field: "name", .. }));
    }

    #[tokio::test]
    async fn test_blanking_name_on_update_is_rejected() {
        let service = empty_service();
        let created = service
            .create_project(ProjectDraft {
                name: "Harbour Point".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let err = service
            .update_project(
                &created.meta.id,
                ProjectPatch {
                    name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::StoreError::Validation { field: "name", .. }));
        assert_eq!(service.get_project(&created.meta.id).await.unwrap().name, "Harbour Point");
    }
}
