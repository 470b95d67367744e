pub mod events;
pub mod races;

pub use events::{Event, EventFilter, GetEventResponse, ListEventsRequest, ListEventsResponse};
pub use races::{ListRacesRequest, ListRacesResponse, Race, RaceFilter};
