//! # Portal Repository
//!
//! > **Typed, versioned access to the game-server portal's repository API.**
//!
//! Every portal resource (players, game servers, admin actions, reports, tags, maps, …) is
//! reached through one facade, [`RepositoryApiClient`], and one generic contract,
//! [`ResourceApi`](resource_framework::ResourceApi). Behind the contract sits either the live HTTP
//! backend or an in-memory fake that behaves the same way, so application code can be tested
//! without a network or database.
//!
//! ## 🏗️ Design
//!
//! ### One contract, many resources
//! Resources are zero-sized markers ([`resources::Players`], [`resources::Maps`], …) that name
//! their DTOs, filter and sort types. `get`, `list`, `create`, `update` and `delete` are written
//! once in `resource_framework` and instantiated per marker.
//!
//! ### Versions
//! Each resource has a selector with one accessor per API version it supports:
//! `client.players().v1()` and `client.players().v1_1()` share DTOs and storage, while v1.1 accepts
//! a richer filter. Map files are replaced as a whole through `client.map_files().v1()`
//! (`PUT /v1/maps/{id}/map-files`).
//!
//! ### Two backends
//! - **Live**: [`RepositoryApiClient::live`] builds a `reqwest` client from
//!   [`ClientSettings`](resource_framework::ClientSettings).
//! - **Fake**: [`FakeRepositoryApi`](lifecycle::FakeRepositoryApi) wires every resource to a shared
//!   [`FakeDataStore`](lifecycle::FakeDataStore) and adds `add_*`/`reset` mutators for tests.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: wire DTOs, filters and sort orders.
//! - [`entities`]: storage shapes used by the fake.
//! - [`resources`]: resource markers and their entity ↔ DTO mappings.
//! - [`clients`]: the facade, versioned selectors and backend binding.
//! - [`lifecycle`]: fake wiring and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use portal_repository::lifecycle::FakeRepositoryApi;
//! use portal_repository::model::{CreateGameServerDto, GameServersFilter, GameType};
//! use portal_repository::resources::GameServers;
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), resource_framework::ApiError> {
//! let fake = FakeRepositoryApi::new();
//! fake.add_game_server(CreateGameServerDto::new("CoD4 #1", GameType::CallOfDuty4, "cod4.example", 28960));
//! fake.add_game_server(CreateGameServerDto::new("CoD5 #1", GameType::CallOfDuty5, "cod5.example", 28960));
//!
//! let client = fake.client();
//! let query = client
//!     .page::<GameServers>()
//!     .with_filter(GameServersFilter::game_types([GameType::CallOfDuty4]));
//! let servers = client.game_servers().v1().list(query, &CancellationToken::new()).await?;
//! assert_eq!(servers.items.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod entities;
pub mod lifecycle;
pub mod model;
pub mod resources;

pub use clients::RepositoryApiClient;
