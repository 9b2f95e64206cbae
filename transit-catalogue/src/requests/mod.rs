//! Stat requests: the query surface exposed to callers.

mod dto;
mod handler;

pub use dto::{
    BusResponse, NOT_FOUND, NotFoundResponse, RouteItem, RouteResponse, StatRequest, StatResponse,
    StopResponse,
};
pub use handler::{RequestHandler, process_document};
