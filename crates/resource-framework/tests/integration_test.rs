use chrono::{DateTime, Utc};
use resource_framework::mock::MockResourceApi;
use resource_framework::{
    ApiError, CollectionResult, EntityMapping, Expand, InMemoryResource, InMemoryResourceApi,
    InMemoryStore, ListQuery, Patch, Resource, ResourceApi, ResourceFilter, SortOrder,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

// --- Test Resource ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct NoteDto {
    id: Uuid,
    title: String,
    category: String,
    pinned: bool,
    created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
struct NoteCreate {
    title: String,
    category: String,
    pinned: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
struct NoteEdit {
    id: Uuid,
    title: Patch<String>,
    pinned: Patch<bool>,
}

#[derive(Debug, Clone, Default)]
struct NoteFilter {
    category: Option<String>,
    pinned_only: bool,
}

impl ResourceFilter<NoteDto> for NoteFilter {
    fn in_scope(&self, dto: &NoteDto) -> bool {
        self.category.as_ref().map_or(true, |c| &dto.category == c)
    }

    fn matches(&self, dto: &NoteDto) -> bool {
        !self.pinned_only || dto.pinned
    }
}

#[derive(Debug, Clone, Copy)]
enum NoteOrder {
    TitleAsc,
    TitleDesc,
}

impl SortOrder<NoteDto> for NoteOrder {
    fn compare(&self, a: &NoteDto, b: &NoteDto) -> Ordering {
        match self {
            NoteOrder::TitleAsc => a.title.cmp(&b.title),
            NoteOrder::TitleDesc => b.title.cmp(&a.title),
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            NoteOrder::TitleAsc => "TitleAsc",
            NoteOrder::TitleDesc => "TitleDesc",
        }
    }
}

struct Notes;

impl Resource for Notes {
    const NAME: &'static str = "Note";
    const PATH: &'static str = "notes";
    type Dto = NoteDto;
    type Create = NoteCreate;
    type Edit = NoteEdit;
    type Filter = NoteFilter;
    type Order = NoteOrder;

    fn edit_target(edit: &NoteEdit) -> Uuid {
        edit.id
    }

    fn validate_create(input: &NoteCreate) -> Result<(), ApiError> {
        if input.title.trim().is_empty() {
            return Err(ApiError::validation("title is required"));
        }
        Ok(())
    }

    fn matches_text(_filter: &NoteFilter, dto: &NoteDto, text: &str) -> bool {
        dto.title.to_lowercase().contains(&text.to_lowercase())
    }
}

impl EntityMapping for Notes {
    type Entity = NoteDto;

    fn to_dto(entity: &NoteDto, _expand: Expand) -> NoteDto {
        entity.clone()
    }

    fn to_entity(input: NoteCreate) -> NoteDto {
        NoteDto {
            id: Uuid::nil(),
            title: input.title,
            category: input.category,
            pinned: input.pinned,
            created: DateTime::<Utc>::MIN_UTC,
        }
    }

    fn apply_to(edit: &NoteEdit, entity: &mut NoteDto) {
        edit.title.apply_cloned(&mut entity.title);
        edit.pinned.apply_cloned(&mut entity.pinned);
    }
}

impl InMemoryResource for Notes {
    type Context = InMemoryStore<NoteDto>;

    fn store(ctx: &Self::Context) -> &InMemoryStore<NoteDto> {
        ctx
    }

    fn entity_id(entity: &NoteDto) -> Uuid {
        entity.id
    }

    fn assign_identity(entity: &mut NoteDto, id: Uuid, now: DateTime<Utc>) {
        entity.id = id;
        entity.created = now;
    }
}

fn new_api() -> InMemoryResourceApi<Notes> {
    InMemoryResourceApi::new(Arc::new(InMemoryStore::new()))
}

fn note(title: &str, category: &str, pinned: bool) -> NoteCreate {
    NoteCreate {
        title: title.to_string(),
        category: category.to_string(),
        pinned,
    }
}

async fn seed(api: &InMemoryResourceApi<Notes>) {
    let cancel = CancellationToken::new();
    for (title, category, pinned) in [
        ("delta", "work", false),
        ("alpha", "work", true),
        ("charlie", "home", true),
        ("bravo", "work", false),
        ("echo", "home", false),
    ] {
        api.create(note(title, category, pinned), &cancel).await.unwrap();
    }
}

fn titles(page: &CollectionResult<NoteDto>) -> Vec<&str> {
    page.items.iter().map(|n| n.title.as_str()).collect()
}

// --- Tests ---

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let api = new_api();
    let cancel = CancellationToken::new();

    let created = api.create(note("alpha", "work", true), &cancel).await.unwrap();
    assert_ne!(created.id, Uuid::nil());
    assert_ne!(created.created, DateTime::<Utc>::MIN_UTC);

    let fetched = api.get(created.id, &cancel).await.unwrap();
    assert_eq!(fetched, created);
    assert!(api.exists(created.id, &cancel).await.unwrap());
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let api = new_api();
    let cancel = CancellationToken::new();
    let id = Uuid::new_v4();

    assert!(api.get(id, &cancel).await.unwrap_err().is_not_found());
    assert!(api.head(id, &cancel).await.unwrap_err().is_not_found());
    assert!(api.delete(id, &cancel).await.unwrap_err().is_not_found());
    let edit = NoteEdit {
        id,
        ..Default::default()
    };
    assert!(api.update(edit, &cancel).await.unwrap_err().is_not_found());
    assert!(!api.exists(id, &cancel).await.unwrap());
}

#[tokio::test]
async fn test_unordered_list_keeps_insertion_order() {
    let api = new_api();
    seed(&api).await;
    let cancel = CancellationToken::new();

    let first = api.list(ListQuery::first(10), &cancel).await.unwrap();
    let second = api.list(ListQuery::first(10), &cancel).await.unwrap();
    assert_eq!(titles(&first), ["delta", "alpha", "charlie", "bravo", "echo"]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_scope_and_narrowing_counts() {
    let api = new_api();
    seed(&api).await;
    let cancel = CancellationToken::new();

    let filter = NoteFilter {
        category: Some("work".into()),
        pinned_only: true,
    };
    let page = api
        .list(ListQuery::first(10).with_filter(filter), &cancel)
        .await
        .unwrap();
    assert_eq!(page.total_records, 3);
    assert_eq!(page.filtered_records, 1);
    assert_eq!(titles(&page), ["alpha"]);
}

#[tokio::test]
async fn test_zero_match_filter_keeps_total() {
    let api = new_api();
    seed(&api).await;
    let cancel = CancellationToken::new();

    let page = api
        .list(ListQuery::first(10).with_filter_string("zulu"), &cancel)
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.filtered_records, 0);
    assert_eq!(page.total_records, 5);
}

#[tokio::test]
async fn test_order_and_pagination() {
    let api = new_api();
    seed(&api).await;
    let cancel = CancellationToken::new();

    let asc = api
        .list(ListQuery::new(1, 2).with_order(NoteOrder::TitleAsc), &cancel)
        .await
        .unwrap();
    assert_eq!(titles(&asc), ["bravo", "charlie"]);

    let desc = api
        .list(ListQuery::new(3, 10).with_order(NoteOrder::TitleDesc), &cancel)
        .await
        .unwrap();
    assert_eq!(titles(&desc), ["bravo", "alpha"]);

    for (skip, take) in [(0, 1), (2, 2), (4, 3), (5, 1), (9, 4)] {
        let page = api.list(ListQuery::new(skip, take), &cancel).await.unwrap();
        let expected = take.min(5 - skip).max(0) as usize;
        assert_eq!(page.items.len(), expected, "skip={skip} take={take}");
    }
}

#[tokio::test]
async fn test_invalid_paging_is_rejected() {
    let api = new_api();
    let cancel = CancellationToken::new();

    for (skip, take) in [(0, 0), (0, -5), (-1, 10)] {
        let err = api.list(ListQuery::new(skip, take), &cancel).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)), "skip={skip} take={take}");
    }
}

#[tokio::test]
async fn test_patch_semantics() {
    let api = new_api();
    let cancel = CancellationToken::new();
    let created = api.create(note("alpha", "work", false), &cancel).await.unwrap();

    let untouched = api
        .update(
            NoteEdit {
                id: created.id,
                ..Default::default()
            },
            &cancel,
        )
        .await
        .unwrap();
    assert_eq!(untouched, created);

    let pinned = api
        .update(
            NoteEdit {
                id: created.id,
                pinned: Patch::Set(true),
                ..Default::default()
            },
            &cancel,
        )
        .await
        .unwrap();
    assert!(pinned.pinned);
    assert_eq!(pinned.title, "alpha");
}

#[tokio::test]
async fn test_create_validation_runs_first() {
    let api = new_api();
    let cancel = CancellationToken::new();

    let err = api.create(note("  ", "work", false), &cancel).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = api
        .create_many(vec![note("ok", "work", false), note("", "work", false)], &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    let page = api.list(ListQuery::first(10), &cancel).await.unwrap();
    assert_eq!(page.total_records, 0, "batch must be all-or-nothing");

    let err = api.create_many(Vec::new(), &cancel).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_cancelled_token_is_honoured() {
    let api = new_api();
    let cancel = CancellationToken::new();
    cancel.cancel();

    assert_eq!(
        api.create(note("alpha", "work", false), &cancel).await.unwrap_err(),
        ApiError::Cancelled
    );
    assert_eq!(
        api.list(ListQuery::first(1), &cancel).await.unwrap_err(),
        ApiError::Cancelled
    );
}

#[tokio::test]
async fn test_concurrent_creates_all_land() {
    let api = Arc::new(new_api());
    let mut handles = Vec::new();
    for n in 0..50 {
        let api = api.clone();
        handles.push(tokio::spawn(async move {
            let cancel = CancellationToken::new();
            api.create(note(&format!("note-{n}"), "bulk", false), &cancel)
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let page = api
        .list(ListQuery::first(100), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(page.total_records, 50);
}

#[tokio::test]
async fn test_mock_injects_transport_failures() {
    let mock = MockResourceApi::<Notes>::new();
    let id = Uuid::new_v4();
    mock.expect_get(id).return_err(ApiError::Transport {
        method: "GET".into(),
        path: format!("v1/notes/{id}"),
        status: Some(503),
        message: "unavailable".into(),
    });
    mock.expect_delete(id).return_ok(());

    let api: Arc<dyn ResourceApi<Notes>> = Arc::new(mock.clone());
    let cancel = CancellationToken::new();

    let err = api.get(id, &cancel).await.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    api.delete(id, &cancel).await.unwrap();
    mock.verify();
}

#[tokio::test]
#[should_panic(expected = "Not all expectations were met")]
async fn test_mock_verify_reports_leftovers() {
    let mock = MockResourceApi::<Notes>::new();
    mock.expect_list().return_ok(CollectionResult::empty(0));
    mock.verify();
}
