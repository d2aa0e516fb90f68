use chrono::Utc;
use portal_repository::clients::{FakeBackend, PlayersSelector};
use portal_repository::lifecycle::{FakeDataStore, FakeRepositoryApi};
use portal_repository::model::{CreateTagDto, GameType, PlayerDto};
use portal_repository::resources::{Players, PlayersV1_1, Tags};
use portal_repository::RepositoryApiClient;
use resource_framework::mock::MockResourceApi;
use resource_framework::{ApiError, ClientSettings, ConfigError, ListQuery};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

#[test]
fn test_live_client_rejects_bad_settings() {
    let relative = RepositoryApiClient::live(&ClientSettings::new("portal/api"));
    assert!(matches!(relative, Err(ConfigError::InvalidBaseUrl(_))));

    let ftp = RepositoryApiClient::live(&ClientSettings::new("ftp://portal.example"));
    assert!(matches!(ftp, Err(ConfigError::InvalidBaseUrl(_))));

    let zero_page = RepositoryApiClient::live(
        &ClientSettings::new("https://portal.example/api").with_page_size(0),
    );
    assert!(matches!(
        zero_page,
        Err(ConfigError::InvalidSetting {
            name: "default_page_size",
            ..
        })
    ));
}

#[test]
fn test_page_uses_the_configured_size() {
    let settings = ClientSettings::new("https://portal.example/api").with_page_size(50);
    let client = RepositoryApiClient::live(&settings).unwrap();
    assert_eq!(client.default_page_size(), 50);

    let query = client.page::<Tags>();
    assert_eq!(query.take, 50);
    assert_eq!(query.skip, 0);
    assert!(query.order.is_none());

    let fake = FakeRepositoryApi::with_page_size(5).unwrap();
    assert_eq!(fake.client().page::<Players>().take, 5);
}

#[test]
fn test_in_memory_clients_reject_non_positive_page_sizes() {
    for size in [0, -5] {
        assert!(matches!(
            FakeRepositoryApi::with_page_size(size),
            Err(ConfigError::InvalidSetting {
                name: "default_page_size",
                ..
            })
        ));

        let backend = FakeBackend::new(Arc::new(FakeDataStore::new()));
        assert!(matches!(
            RepositoryApiClient::from_backend(&backend, size),
            Err(ConfigError::InvalidSetting {
                name: "default_page_size",
                ..
            })
        ));
    }
}

#[tokio::test]
async fn test_clients_built_over_one_store_share_data() {
    let store = Arc::new(FakeDataStore::new());
    let first = RepositoryApiClient::from_backend(&FakeBackend::new(store.clone()), 10).unwrap();
    let second = RepositoryApiClient::from_backend(&FakeBackend::new(store.clone()), 10).unwrap();
    let cancel = CancellationToken::new();

    let tag = first
        .tags()
        .v1()
        .create(CreateTagDto::new("veteran"), &cancel)
        .await
        .unwrap();
    let seen = second.tags().v1().get(tag.tag_id, &cancel).await.unwrap();
    assert_eq!(seen.name, "veteran");

    let cloned = second.clone();
    cloned.tags().v1().delete(tag.tag_id, &cancel).await.unwrap();
    assert!(store.tags.is_empty());
}

#[tokio::test]
async fn test_selector_accepts_scripted_implementations() {
    let v1 = MockResourceApi::<Players>::new();
    let v1_1 = MockResourceApi::<PlayersV1_1>::new();
    let id = Uuid::new_v4();

    v1.expect_get(id).return_err(ApiError::Unauthorized {
        status: Some(401),
        message: "token expired".into(),
    });
    v1.expect_list().return_err(ApiError::Transport {
        method: "GET".into(),
        path: "v1/players".into(),
        status: None,
        message: "connection reset".into(),
    });
    v1_1.expect_get(id).return_ok(PlayerDto {
        player_id: id,
        game_type: GameType::Rust,
        username: "Alice".into(),
        guid: "guid-1".into(),
        first_seen: Utc::now(),
        last_seen: Utc::now(),
        ip_address: None,
        admin_actions: Vec::new(),
        reports: Vec::new(),
        protected_names: Vec::new(),
    });

    let players = PlayersSelector::new(Arc::new(v1.clone()), Arc::new(v1_1.clone()));
    let cancel = CancellationToken::new();

    let denied = players.v1().get(id, &cancel).await.unwrap_err();
    assert_eq!(denied.status_code(), Some(401));

    let offline = players.v1().list(ListQuery::first(10), &cancel).await;
    assert!(matches!(offline, Err(ApiError::Transport { status: None, .. })));

    let player = players.v1_1().get(id, &cancel).await.unwrap();
    assert_eq!(player.username, "Alice");

    v1.verify();
    v1_1.verify();
}
