//! `racing.Racing` gRPC service

use std::sync::Arc;

use tonic::{Request, Response, Status};

use super::model::RaceFilter;
use super::repo::RacesRepository;
use crate::proto::racing::racing_server::Racing;
use crate::proto::racing::{ListRacesRequest, ListRacesResponse};

/// gRPC adapter over a [`RacesRepository`]
#[derive(Debug)]
pub struct RacingService<R> {
    repo: Arc<R>,
}

impl<R> RacingService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[tonic::async_trait]
impl<R> Racing for RacingService<R>
where
    R: RacesRepository + 'static,
{
    async fn list_races(
        &self,
        request: Request<ListRacesRequest>,
    ) -> Result<Response<ListRacesResponse>, Status> {
        let req = request.into_inner();
        let filter = req.filter.map(RaceFilter::from).unwrap_or_default();

        tracing::debug!(?filter, order_by = %req.order_by, "ListRaces");

        let races = self.repo.list(&filter, &req.order_by).await?;

        Ok(Response::new(ListRacesResponse {
            races: races.into_iter().map(Into::into).collect(),
        }))
    }
}
