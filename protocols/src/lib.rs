//! Text formats involved in DNS route discovery: query names, TXT record
//! values, the section grammar of a routing record and the route lists
//! inside its sections.

pub mod dns;
pub mod record;
pub mod routes;
pub mod txt;
