//! Walkthrough against the in-memory backend: seed, list, read expanded, update, delete.
//!
//! Run with `RUST_LOG=info cargo run` (or `debug` for payloads).

use portal_repository::lifecycle::tracing::setup_tracing;
use portal_repository::lifecycle::FakeRepositoryApi;
use portal_repository::model::{
    AdminActionType, CreateAdminActionDto, CreateGameServerDto, CreatePlayerDto, EditPlayerDto,
    GameServersFilter, GameType, PlayersFilter, PlayersOrder,
};
use portal_repository::resources::{GameServers, Players};
use resource_framework::{ApiError, Patch};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    setup_tracing();

    info!("Starting portal repository walkthrough");

    let fake = FakeRepositoryApi::new();
    let client = fake.client();
    let cancel = CancellationToken::new();

    let span = tracing::info_span!("seeding");
    let (alice, _bob) = async {
        fake.add_game_server(CreateGameServerDto::new(
            "CoD4 Public",
            GameType::CallOfDuty4,
            "cod4.example.net",
            28960,
        ));
        fake.add_game_server(CreateGameServerDto::new(
            "CoD5 Public",
            GameType::CallOfDuty5,
            "cod5.example.net",
            28961,
        ));
        let players = client.players().v1();
        let alice = players
            .create(
                CreatePlayerDto::new(GameType::CallOfDuty4, "Alice", "guid-alice"),
                &cancel,
            )
            .await?;
        let bob = players
            .create(
                CreatePlayerDto::new(GameType::CallOfDuty5, "Bob", "guid-bob"),
                &cancel,
            )
            .await?;
        client
            .admin_actions()
            .v1()
            .create(
                CreateAdminActionDto::new(
                    alice.player_id,
                    GameType::CallOfDuty4,
                    AdminActionType::Warning,
                    "Spawn camping",
                ),
                &cancel,
            )
            .await?;
        Ok::<_, ApiError>((alice, bob))
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("listing");
    async {
        let servers = client
            .game_servers()
            .v1()
            .list(
                client
                    .page::<GameServers>()
                    .with_filter(GameServersFilter::game_types([GameType::CallOfDuty4])),
                &cancel,
            )
            .await?;
        info!(
            total = servers.total_records,
            filtered = servers.filtered_records,
            "CoD4 servers"
        );

        let players = client
            .players()
            .v1()
            .list(
                client
                    .page::<Players>()
                    .with_filter(PlayersFilter::default())
                    .with_order(PlayersOrder::UsernameAsc),
                &cancel,
            )
            .await?;
        for player in &players.items {
            info!(username = %player.username, game_type = %player.game_type, "Player");
        }
        Ok::<_, ApiError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("player_details");
    let result = async {
        let player = client.players().v1().get(alice.player_id, &cancel).await?;
        info!(
            username = %player.username,
            admin_actions = player.admin_actions.len(),
            "Expanded read"
        );

        let edit = EditPlayerDto {
            username: Patch::Set("Alice-Renamed".to_string()),
            ..EditPlayerDto::new(player.player_id)
        };
        let updated = client.players().v1_1().update(edit, &cancel).await?;
        info!(username = %updated.username, "Renamed through v1.1");

        client.players().v1().delete(player.player_id, &cancel).await?;
        client.players().v1().get(player.player_id, &cancel).await
    }
    .instrument(span)
    .await;

    match result {
        Err(e) if e.is_not_found() => info!("Deleted player is gone"),
        Err(e) => error!(error = %e, "Walkthrough failed"),
        Ok(player) => error!(player_id = %player.player_id, "Deleted player still present"),
    }

    fake.reset();
    info!("Walkthrough completed successfully");
    Ok(())
}
