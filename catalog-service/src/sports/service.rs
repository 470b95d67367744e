//! `sports.Sports` gRPC service

use std::sync::Arc;

use tonic::{Request, Response, Status};

use super::model::EventFilter;
use super::repo::SportsRepository;
use crate::proto::sports::sports_server::Sports;
use crate::proto::sports::{
    GetEventRequest, GetEventResponse, ListEventsRequest, ListEventsResponse,
};

/// gRPC adapter over a [`SportsRepository`]
#[derive(Debug)]
pub struct SportsService<R> {
    repo: Arc<R>,
}

impl<R> SportsService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[tonic::async_trait]
impl<R> Sports for SportsService<R>
where
    R: SportsRepository + 'static,
{
    async fn list_events(
        &self,
        request: Request<ListEventsRequest>,
    ) -> Result<Response<ListEventsResponse>, Status> {
        let req = request.into_inner();
        let filter = req.filter.map(EventFilter::from).unwrap_or_default();

        tracing::debug!(?filter, order_by = %req.order_by, "ListEvents");

        let events = self.repo.list(&filter, &req.order_by).await?;

        Ok(Response::new(ListEventsResponse {
            events: events.into_iter().map(Into::into).collect(),
        }))
    }

    async fn get_event(
        &self,
        request: Request<GetEventRequest>,
    ) -> Result<Response<GetEventResponse>, Status> {
        let id = request.into_inner().id;

        tracing::debug!(id, "GetEvent");

        let event = self.repo.get_by_id(id).await?;

        Ok(Response::new(GetEventResponse {
            event: Some(event.into()),
        }))
    }
}
