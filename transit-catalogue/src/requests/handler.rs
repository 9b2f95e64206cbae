//! Stat request handling.
//!
//! The handler is a thin facade: it forwards each request to the catalogue
//! or the router and shapes the answer into a response DTO.

use tracing::{debug, info};

use crate::cache::{CacheConfig, CachedRouter};
use crate::catalogue::Catalogue;
use crate::ingest::{DocumentError, TransitDocument, load_catalogue};
use crate::router::{RouteProvider, TransportRouter};

use super::dto::{BusResponse, RouteResponse, StatRequest, StatResponse, StopResponse};

/// Answers stat requests against a catalogue and an optional router.
pub struct RequestHandler<'a, R: RouteProvider> {
    catalogue: &'a Catalogue,
    router: Option<&'a R>,
}

impl<'a, R: RouteProvider> RequestHandler<'a, R> {
    /// Create a handler. Without a router every route request is "not found".
    pub fn new(catalogue: &'a Catalogue, router: Option<&'a R>) -> Self {
        Self { catalogue, router }
    }

    /// Answer a single request.
    pub fn handle(&self, request: &StatRequest) -> StatResponse {
        let id = request.id();
        match request {
            StatRequest::Stop { name, .. } => match self.catalogue.buses_for_stop(name) {
                Some(buses) => StatResponse::Stop(StopResponse {
                    buses: buses.into_iter().map(str::to_string).collect(),
                    request_id: id,
                }),
                None => StatResponse::not_found(id),
            },
            StatRequest::Bus { name, .. } => match self.catalogue.bus_info(name) {
                Some(stats) => StatResponse::Bus(BusResponse::new(id, &stats)),
                None => StatResponse::not_found(id),
            },
            StatRequest::Route { from, to, .. } => {
                let Some(router) = self.router else {
                    debug!(request_id = id, "route request without a router");
                    return StatResponse::not_found(id);
                };
                match router.find_route(from, to) {
                    Ok(itinerary) => StatResponse::Route(RouteResponse::new(id, &itinerary)),
                    Err(e) => {
                        debug!(request_id = id, error = %e, "route not found");
                        StatResponse::not_found(id)
                    }
                }
            }
            StatRequest::Unsupported { kind, .. } => {
                debug!(request_id = id, kind = %kind, "unsupported request type");
                StatResponse::not_found(id)
            }
        }
    }

    /// Answer every request, preserving order.
    pub fn handle_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests.iter().map(|request| self.handle(request)).collect()
    }
}

/// Build the catalogue and router described by `document` and answer its
/// stat requests.
///
/// Route answers are memoized for the duration of the call, so repeated
/// queries in one document are computed once.
pub fn process_document(
    document: &TransitDocument,
    cache_config: &CacheConfig,
) -> Result<Vec<StatResponse>, DocumentError> {
    let catalogue = load_catalogue(&document.base_requests)?;
    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        requests = document.stat_requests.len(),
        "catalogue loaded"
    );

    let responses = match &document.routing_settings {
        Some(settings) => {
            let router = TransportRouter::new(&catalogue, settings.clone())?;
            let cached = CachedRouter::new(router, cache_config);
            RequestHandler::new(&catalogue, Some(&cached)).handle_all(&document.stat_requests)
        }
        None if document.has_route_requests() => {
            return Err(DocumentError::MissingRoutingSettings);
        }
        None => RequestHandler::<TransportRouter>::new(&catalogue, None)
            .handle_all(&document.stat_requests),
    };

    Ok(responses)
}
