pub mod clock;
pub mod events;
pub mod filter;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use events::EventQueryService;
pub use filter::{EventFilter, LocationMatch, SearchParams};
pub use store::{EventStore, PgEventStore};
