//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports ([`PixelsQuery`], [`PixelsCommand`]) are what inbound
//! adapters call. Driven ports ([`PixelRepository`], [`SoulRegistry`]) are
//! what the domain calls; each exposes a strongly typed error so adapters map
//! their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod pixel_repository;
mod pixels_command;
mod pixels_query;
mod soul_registry;

#[cfg(test)]
pub use pixel_repository::MockPixelRepository;
pub use pixel_repository::{PixelRepository, PixelRepositoryError};
#[cfg(test)]
pub use pixels_command::MockPixelsCommand;
pub use pixels_command::PixelsCommand;
#[cfg(test)]
pub use pixels_query::MockPixelsQuery;
pub use pixels_query::PixelsQuery;
#[cfg(test)]
pub use soul_registry::MockSoulRegistry;
pub use soul_registry::{SoulRegistry, SoulRegistryError};
