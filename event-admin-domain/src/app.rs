use std::sync::Arc;

use crate::{
    category::{ArcCategoryRepository, ArcCategoryService, CategoryServiceImpl},
    event::{ArcEventRepository, ArcEventService, EventServiceImpl},
};

#[derive(Clone)]
pub struct AppState {
    pub event_service: ArcEventService,
    pub category_service: ArcCategoryService,
}

pub fn construct_app(
    event_repository: ArcEventRepository,
    category_repository: ArcCategoryRepository,
) -> AppState {
    let event_service: ArcEventService = Arc::new(Box::new(EventServiceImpl::new(
        event_repository,
        category_repository.clone(),
    )));

    let category_service: ArcCategoryService =
        Arc::new(Box::new(CategoryServiceImpl::new(category_repository)));

    AppState {
        event_service,
        category_service,
    }
}
