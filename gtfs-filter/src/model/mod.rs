mod agency;
pub mod date_codec;
mod feed_collections;
mod feed_entity;
mod feed_info;
mod location_type;
mod route;
mod scoped_id;
mod service_calendar;
mod service_calendar_date;
mod stop;
mod stop_time;
mod transfer;
mod trip;

pub use agency::{Agency, AgencyRecord};
pub use feed_collections::FeedCollections;
pub use feed_entity::{EntityKind, FeedEntity};
pub use feed_info::{FeedInfo, FeedInfoRecord};
pub use location_type::LocationType;
pub use route::{Route, RouteRecord};
pub use scoped_id::ScopedId;
pub use service_calendar::{ServiceCalendar, ServiceCalendarRecord};
pub use service_calendar_date::{ServiceCalendarDate, ServiceCalendarDateRecord};
pub use stop::{Stop, StopRecord};
pub use stop_time::{StopTime, StopTimeRecord};
pub use transfer::{Transfer, TransferRecord};
pub use trip::{Trip, TripRecord};
