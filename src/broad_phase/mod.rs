//! Broad-phase collision detection between circles.
//!
//! The [`CircleBroadPhase`] owns the circles ([`Proxy`]) in a [`ProxyStore`] and keeps an
//! [`AabbTree`](crate::partitioning::AabbTree) of their bounds up-to-date. Each frame, the
//! caller moves the proxies, calls [`CircleBroadPhase::update`], then enumerates the potential
//! pairs and confirms them with [`CircleBroadPhase::are_circles_colliding`].

pub use self::circle_broad_phase::CircleBroadPhase;
pub use self::debug_render::DebugRenderBackend;
pub use self::proxy::Proxy;
pub use self::proxy_store::ProxyStore;

mod circle_broad_phase;
mod debug_render;
mod proxy;
mod proxy_store;
mod update;
