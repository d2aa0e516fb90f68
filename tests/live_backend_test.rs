use chrono::{Duration, Utc};
use httpmock::prelude::*;
use httpmock::Method::HEAD;
use portal_repository::model::*;
use portal_repository::lifecycle::FakeRepositoryApi;
use portal_repository::resources::{GameServers, PlayersV1_1, Tags};
use portal_repository::RepositoryApiClient;
use resource_framework::{ApiError, ClientSettings, ListQuery, Patch};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn live(server: &MockServer) -> RepositoryApiClient {
    RepositoryApiClient::live(&ClientSettings::new(server.base_url())).unwrap()
}

fn player_json(id: Uuid, username: &str) -> Value {
    json!({
        "playerId": id,
        "gameType": "CallOfDuty4",
        "username": username,
        "guid": "guid-1",
        "firstSeen": "2024-01-01T00:00:00Z",
        "lastSeen": "2024-06-01T00:00:00Z",
        "ipAddress": null
    })
}

fn page(items: Vec<Value>, total: usize) -> Value {
    json!({
        "items": items,
        "totalRecords": total,
        "filteredRecords": total
    })
}

#[tokio::test]
async fn test_list_sends_paging_order_and_scope() {
    let server = MockServer::start();
    let id = Uuid::new_v4();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/game-servers")
            .query_param("skipEntries", "0")
            .query_param("takeEntries", "20")
            .query_param("order", "GameType")
            .query_param("gameTypes", "CallOfDuty4,CallOfDuty5");
        then.status(200).json_body(page(
            vec![json!({
                "gameServerId": id,
                "title": "CoD4 Public",
                "gameType": "CallOfDuty4",
                "hostname": "cod4.example.net",
                "queryPort": 28960,
                "liveTrackingEnabled": true,
                "bannerServerListEnabled": false,
                "bannerServerListPosition": 1,
                "portalServerListEnabled": true,
                "created": "2024-01-01T00:00:00Z"
            })],
            1,
        ));
    });

    let client = live(&server);
    let query = client
        .page::<GameServers>()
        .with_filter(GameServersFilter::game_types([
            GameType::CallOfDuty4,
            GameType::CallOfDuty5,
        ]))
        .with_order(GameServersOrder::GameType);
    let result = client
        .game_servers()
        .v1()
        .list(query, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(mock.calls(), 1);
    assert_eq!(result.total_records, 1);
    assert_eq!(result.items[0].game_server_id, id);
    assert!(result.items[0].ban_file_monitors.is_empty());
}

#[tokio::test]
async fn test_filter_string_and_kind_are_forwarded() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/players")
            .query_param("skipEntries", "10")
            .query_param("takeEntries", "5")
            .query_param("filterString", "10.0.0.7")
            .query_param("filter", "IpAddress");
        then.status(200).json_body(page(Vec::new(), 3));
    });

    let result = live(&server)
        .players()
        .v1()
        .list(
            ListQuery::new(10, 5)
                .with_filter(PlayersFilter {
                    game_types: Vec::new(),
                    filter: Some(PlayersFilterKind::IpAddress),
                })
                .with_filter_string("  10.0.0.7 "),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(mock.calls(), 1);
    assert!(result.items.is_empty());
    assert_eq!(result.total_records, 3);
}

#[tokio::test]
async fn test_v1_1_players_use_their_own_path() {
    let server = MockServer::start();
    let id = Uuid::new_v4();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1.1/players")
            .query_param_exists("lastSeenAfter");
        then.status(200)
            .json_body(page(vec![player_json(id, "Recent")], 1));
    });

    let client = live(&server);
    let result = client
        .players()
        .v1_1()
        .list(
            client.page::<PlayersV1_1>().with_filter(PlayersV1_1Filter {
                players: PlayersFilter::default(),
                last_seen_after: Some(Utc::now() - Duration::days(30)),
            }),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(mock.calls(), 1);
    assert_eq!(result.items[0].player_id, id);
}

#[tokio::test]
async fn test_missing_items_are_not_found_for_every_operation() {
    let server = MockServer::start();
    let id = Uuid::new_v4();
    let path = format!("/v1/players/{id}");
    for method in [GET, HEAD, PATCH, DELETE] {
        server.mock(|when, then| {
            when.method(method).path(path.as_str());
            then.status(404);
        });
    }

    let client = live(&server);
    let players = client.players().v1();
    let cancel = CancellationToken::new();

    assert!(players.get(id, &cancel).await.unwrap_err().is_not_found());
    assert!(players.head(id, &cancel).await.unwrap_err().is_not_found());
    assert!(!players.exists(id, &cancel).await.unwrap());
    assert!(players
        .update(EditPlayerDto::new(id), &cancel)
        .await
        .unwrap_err()
        .is_not_found());
    assert!(players.delete(id, &cancel).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_create_posts_camel_case_json() {
    let server = MockServer::start();
    let id = Uuid::new_v4();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/players")
            .header("content-type", "application/json")
            .body_includes(r#""gameType":"CallOfDuty4""#)
            .body_includes(r#""username":"Alice""#)
            .body_includes(r#""ipAddress":"10.0.0.7""#);
        then.status(201).json_body(player_json(id, "Alice"));
    });

    let created = live(&server)
        .players()
        .v1()
        .create(
            CreatePlayerDto {
                ip_address: Some("10.0.0.7".into()),
                ..CreatePlayerDto::new(GameType::CallOfDuty4, "Alice", "guid-1")
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(mock.calls(), 1);
    assert_eq!(created.player_id, id);
    assert_eq!(created.username, "Alice");
}

#[tokio::test]
async fn test_update_sends_only_touched_fields() {
    let server = MockServer::start();
    let id = Uuid::new_v4();
    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path(format!("/v1/players/{id}"))
            .body_includes(r#""username":"Alicia""#)
            .body_includes(r#""ipAddress":null"#);
        then.status(200).json_body(player_json(id, "Alicia"));
    });

    let updated = live(&server)
        .players()
        .v1()
        .update(
            EditPlayerDto {
                username: Patch::Set("Alicia".into()),
                ip_address: Patch::Set(None),
                ..EditPlayerDto::new(id)
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(mock.calls(), 1);
    assert_eq!(updated.username, "Alicia");
}

#[tokio::test]
async fn test_error_statuses_map_to_the_taxonomy() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/tags");
        then.status(400).body("name is invalid");
    });
    server.mock(|when, then| {
        when.method(GET).path("/v1/tags").query_param("takeEntries", "1");
        then.status(401);
    });
    server.mock(|when, then| {
        when.method(GET).path("/v1/tags").query_param("takeEntries", "2");
        then.status(403).body("forbidden");
    });
    server.mock(|when, then| {
        when.method(GET).path("/v1/tags").query_param("takeEntries", "3");
        then.status(500).body("database offline");
    });

    let client = live(&server);
    let tags = client.tags().v1();
    let cancel = CancellationToken::new();

    let invalid = tags.create(CreateTagDto::new("x"), &cancel).await;
    assert_eq!(invalid, Err(ApiError::Validation("name is invalid".into())));

    let unauthorized = tags.list(ListQuery::first(1), &cancel).await.unwrap_err();
    assert_eq!(unauthorized.status_code(), Some(401));
    assert!(matches!(unauthorized, ApiError::Unauthorized { .. }));

    let forbidden = tags.list(ListQuery::first(2), &cancel).await.unwrap_err();
    assert!(matches!(
        forbidden,
        ApiError::Unauthorized { status: Some(403), .. }
    ));

    let failed = tags.list(ListQuery::first(3), &cancel).await.unwrap_err();
    assert!(matches!(
        failed,
        ApiError::Transport { status: Some(500), .. }
    ));
}

#[tokio::test]
async fn test_invalid_input_never_reaches_the_server() {
    let server = MockServer::start();
    let any = server.mock(|_when, then| {
        then.status(200).body("{}");
    });

    let client = live(&server);
    let cancel = CancellationToken::new();

    let bad_page = client
        .tags()
        .v1()
        .list(ListQuery::new(0, 0), &cancel)
        .await;
    assert!(matches!(bad_page, Err(ApiError::Validation(_))));

    let blank = client
        .tags()
        .v1()
        .create(CreateTagDto::new("  "), &cancel)
        .await;
    assert!(matches!(blank, Err(ApiError::Validation(_))));

    let empty_batch = client.tags().v1().create_many(Vec::new(), &cancel).await;
    assert!(matches!(empty_batch, Err(ApiError::Validation(_))));

    assert_eq!(any.calls(), 0);
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let server = MockServer::start();
    let id = Uuid::new_v4();
    let mock = server.mock(|when, then| {
        when.method(HEAD)
            .path(format!("/v1/tags/{id}"))
            .header("authorization", "Bearer portal-token");
        then.status(200);
    });

    let settings = ClientSettings::new(server.base_url()).with_token("portal-token");
    let client = RepositoryApiClient::live(&settings).unwrap();
    let exists = client
        .tags()
        .v1()
        .exists(id, &CancellationToken::new())
        .await
        .unwrap();

    assert!(exists);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_cached_listing_is_evicted_by_a_write() {
    let server = MockServer::start();
    let listing = server.mock(|when, then| {
        when.method(GET).path("/v1/tags");
        then.status(200).json_body(page(Vec::new(), 0));
    });
    let creation = server.mock(|when, then| {
        when.method(POST).path("/v1/tags");
        then.status(201).json_body(json!({
            "tagId": Uuid::new_v4(),
            "name": "veteran",
            "description": null,
            "userDefined": true,
            "tagHtml": null
        }));
    });

    let settings =
        ClientSettings::new(server.base_url()).with_cache(std::time::Duration::from_secs(60));
    let client = RepositoryApiClient::live(&settings).unwrap();
    let tags = client.tags().v1();
    let cancel = CancellationToken::new();

    tags.list(client.page::<Tags>(), &cancel).await.unwrap();
    tags.list(client.page::<Tags>(), &cancel).await.unwrap();
    assert_eq!(listing.calls(), 1);

    tags.create(CreateTagDto::new("veteran"), &cancel)
        .await
        .unwrap();
    assert_eq!(creation.calls(), 1);

    tags.list(client.page::<Tags>(), &cancel).await.unwrap();
    assert_eq!(listing.calls(), 2);
}

#[tokio::test]
async fn test_undecodable_body_is_logged_as_transport() {
    let server = MockServer::start();
    let id = Uuid::new_v4();
    server.mock(|when, then| {
        when.method(GET).path(format!("/v1/players/{id}"));
        then.status(200).body("not json");
    });

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer({
            let logs = logs.clone();
            move || logs.clone()
        })
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let err = live(&server)
        .players()
        .v1()
        .get(id, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { status: Some(200), .. }));
    let output = logs.text();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("Response body could not be decoded"), "{output}");
    assert!(output.contains(&format!("v1/players/{id}")), "{output}");
}

#[tokio::test]
async fn test_not_found_is_identical_on_both_backends() {
    let server = MockServer::start();
    let id = Uuid::new_v4();
    server.mock(|when, then| {
        when.method(GET).path(format!("/v1/players/{id}"));
        then.status(404);
    });
    let cancel = CancellationToken::new();

    let live_err = live(&server)
        .players()
        .v1()
        .get(id, &cancel)
        .await
        .unwrap_err();
    let fake = FakeRepositoryApi::new();
    let fake_err = fake.client().players().v1().get(id, &cancel).await.unwrap_err();

    assert_eq!(live_err, fake_err);
    assert_eq!(live_err, ApiError::NotFound(format!("players/{id}")));
}

#[tokio::test]
async fn test_map_files_are_replaced_with_put() {
    let server = MockServer::start();
    let id = Uuid::new_v4();
    let replace = server.mock(|when, then| {
        when.method(PUT)
            .path(format!("/v1/maps/{id}/map-files"))
            .header("content-type", "application/json")
            .body_includes(r#""fileName":"mp_crash.iwd""#)
            .body_includes(r#""url":"https://maps/mp_crash.iwd""#);
        then.status(200);
    });
    let missing = Uuid::new_v4();
    server.mock(|when, then| {
        when.method(PUT).path(format!("/v1/maps/{missing}/map-files"));
        then.status(404);
    });

    let client = live(&server);
    let cancel = CancellationToken::new();
    client
        .map_files()
        .v1()
        .replace(
            id,
            vec![MapFileDto::new("mp_crash.iwd", "https://maps/mp_crash.iwd")],
            &cancel,
        )
        .await
        .unwrap();
    assert_eq!(replace.calls(), 1);

    let err = client
        .map_files()
        .v1()
        .replace(missing, Vec::new(), &cancel)
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::not_found("maps", missing));

    let blank = client
        .map_files()
        .v1()
        .replace(id, vec![MapFileDto::new("", "https://maps/x.iwd")], &cancel)
        .await;
    assert!(matches!(blank, Err(ApiError::Validation(_))));
    assert_eq!(replace.calls(), 1);
}

#[tokio::test]
async fn test_writes_to_embedded_resources_evict_expanded_reads() {
    let server = MockServer::start();
    let player_id = Uuid::new_v4();
    let action_id = Uuid::new_v4();
    let read = server.mock(|when, then| {
        when.method(GET).path(format!("/v1/players/{player_id}"));
        then.status(200).json_body(player_json(player_id, "Alice"));
    });
    let listing = server.mock(|when, then| {
        when.method(GET).path("/v1/tags");
        then.status(200).json_body(page(Vec::new(), 0));
    });
    server.mock(|when, then| {
        when.method(DELETE)
            .path(format!("/v1/admin-actions/{action_id}"));
        then.status(200);
    });

    let settings =
        ClientSettings::new(server.base_url()).with_cache(std::time::Duration::from_secs(60));
    let client = RepositoryApiClient::live(&settings).unwrap();
    let cancel = CancellationToken::new();

    client.players().v1().get(player_id, &cancel).await.unwrap();
    client.players().v1().get(player_id, &cancel).await.unwrap();
    client.tags().v1().list(client.page::<Tags>(), &cancel).await.unwrap();
    assert_eq!(read.calls(), 1);

    client
        .admin_actions()
        .v1()
        .delete(action_id, &cancel)
        .await
        .unwrap();

    client.players().v1().get(player_id, &cancel).await.unwrap();
    client.tags().v1().list(client.page::<Tags>(), &cancel).await.unwrap();
    assert_eq!(read.calls(), 2);
    assert_eq!(listing.calls(), 1);
}
