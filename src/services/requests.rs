//! Equipment requests service

use crate::{
    error::AppResult,
    models::request::{CreateRequest, Request, UpdateRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Request>> {
        self.repository.requests.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Request> {
        self.repository.requests.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateRequest) -> AppResult<Request> {
        self.repository.requests.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateRequest) -> AppResult<Request> {
        self.repository.requests.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.requests.delete(id).await
    }
}
