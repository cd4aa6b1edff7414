use async_trait::async_trait;
use mockall::mock;
use slotdesk_core::models::slot::ServerSlot;

use crate::api::{FileApi, FilePart, SlotApi};

// Mock collaborators for testing
mock! {
    pub SlotService {}

    #[async_trait]
    impl SlotApi for SlotService {
        async fn fetch_working_slots(&self) -> eyre::Result<Vec<ServerSlot>>;

        async fn set_active_slots(&self, ids: &[String]) -> eyre::Result<()>;
    }
}

mock! {
    pub FileService {}

    #[async_trait]
    impl FileApi for FileService {
        async fn upload_files(&self, parts: Vec<FilePart>) -> eyre::Result<Vec<String>>;
    }
}
