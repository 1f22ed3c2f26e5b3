use std::{
    fmt::Display,
    sync::{Arc, Mutex},
};

use crate::{
    ServiceError, ServiceResult,
    category::{ArcCategoryRepository, CategoryId},
};

pub type EventId = i64;

/// An event as submitted by the admin form, before the store assigns an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub promoted: bool,
    pub date: String,
    pub price: String,
    pub location: String,
    pub organizer: String,
    pub category_id: CategoryId,
}

pub fn missing_category(id: impl Display) -> ServiceError {
    ServiceError::InvalidReference(format!("Category with ID {} does not exist.", id))
}

pub type ArcEventRepository = Arc<Box<dyn EventRepository + Send + Sync + 'static>>;

#[async_trait::async_trait]
pub trait EventRepository {
    async fn insert_event(&self, event: &NewEvent) -> ServiceResult<EventId>;
}

pub type ArcEventService = Arc<Box<dyn EventService + Send + Sync + 'static>>;

#[async_trait::async_trait]
pub trait EventService {
    async fn create_event(&self, event: &NewEvent) -> ServiceResult<EventId>;
}

pub struct EventServiceImpl {
    event_repository: ArcEventRepository,
    category_repository: ArcCategoryRepository,
}

impl EventServiceImpl {
    pub fn new(
        event_repository: ArcEventRepository,
        category_repository: ArcCategoryRepository,
    ) -> Self {
        Self {
            event_repository,
            category_repository,
        }
    }
}

#[async_trait::async_trait]
impl EventService for EventServiceImpl {
    // The existence check and the insert run as two separate statements.
    async fn create_event(&self, event: &NewEvent) -> ServiceResult<EventId> {
        let exists = self
            .category_repository
            .category_exists(event.category_id)
            .await
            .inspect_err(|e| log::error!("Error checking category {}: {}", event.category_id, e))?;
        if !exists {
            log::info!(
                "Rejected event '{}': unknown category {}",
                event.name,
                event.category_id
            );
            return Err(missing_category(event.category_id));
        }

        match self.event_repository.insert_event(event).await {
            Ok(id) => {
                log::info!("Created event {} '{}'", id, event.name);
                Ok(id)
            }
            Err(e) => {
                log::error!("Error creating event: {}", e);
                Err(e)
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct MockEventRepository {
    pub inserted: Arc<Mutex<Vec<(EventId, NewEvent)>>>,
    pub offline: bool,
}

#[allow(unused)]
impl MockEventRepository {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub fn get_inserted(&self) -> Vec<(EventId, NewEvent)> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EventRepository for MockEventRepository {
    async fn insert_event(&self, event: &NewEvent) -> ServiceResult<EventId> {
        if self.offline {
            return ServiceError::persistence("connection refused");
        }
        let mut inserted = self.inserted.lock().unwrap();
        let id = inserted.len() as EventId + 1;
        inserted.push((id, event.clone()));
        Ok(id)
    }
}
