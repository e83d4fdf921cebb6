/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what the HTTP surface drives; outbound ports are what
/// the relay and the dashboard state need from the outside world.
pub mod inbound;
pub mod outbound;
