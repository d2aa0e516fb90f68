//! # Scripted Mock
//!
//! `MockResourceApi<R>` implements [`ResourceApi`] by replaying a queue of expected calls and
//! their scripted outcomes. It complements the in-memory backend:
//!
//! | | `InMemoryResourceApi` | `MockResourceApi` |
//! |---|---|---|
//! | **State** | Real store, real filtering | None, answers are scripted |
//! | **Errors** | `NotFound`, `Validation`, `Cancelled` | Any `ApiError`, including `Transport` and `Unauthorized` |
//! | **Use case** | Behavioural tests of application code | Fault injection around a single call |
//!
//! Expectations are consumed in order. A call that does not match the next expectation panics,
//! and [`MockResourceApi::verify`] panics if any expectation is left over.
//!
//! ```ignore
//! let mock = MockResourceApi::<Players>::new();
//! mock.expect_get(id).return_err(ApiError::Unauthorized { status: Some(401), message: "expired".into() });
//!
//! let api: Arc<dyn ResourceApi<Players>> = Arc::new(mock.clone());
//! assert!(matches!(api.get(id, &cancel).await, Err(ApiError::Unauthorized { .. })));
//! mock.verify();
//! ```

use crate::api::{ensure_active, ResourceApi};
use crate::error::ApiError;
use crate::query::{CollectionResult, Query};
use crate::resource::Resource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

enum Expectation<R: Resource> {
    Get {
        id: Uuid,
        response: Result<R::Dto, ApiError>,
    },
    Head {
        id: Uuid,
        response: Result<(), ApiError>,
    },
    List {
        response: Result<CollectionResult<R::Dto>, ApiError>,
    },
    Create {
        response: Result<R::Dto, ApiError>,
    },
    CreateMany {
        response: Result<(), ApiError>,
    },
    Update {
        id: Uuid,
        response: Result<R::Dto, ApiError>,
    },
    Delete {
        id: Uuid,
        response: Result<(), ApiError>,
    },
}

impl<R: Resource> Expectation<R> {
    fn describe(&self) -> String {
        match self {
            Self::Get { id, .. } => format!("get({id})"),
            Self::Head { id, .. } => format!("head({id})"),
            Self::List { .. } => "list".to_string(),
            Self::Create { .. } => "create".to_string(),
            Self::CreateMany { .. } => "create_many".to_string(),
            Self::Update { id, .. } => format!("update({id})"),
            Self::Delete { id, .. } => format!("delete({id})"),
        }
    }
}

type Queue<R> = Arc<Mutex<VecDeque<Expectation<R>>>>;

/// A [`ResourceApi`] that answers from a queue of expectations.
pub struct MockResourceApi<R: Resource> {
    expectations: Queue<R>,
}

impl<R: Resource> Clone for MockResourceApi<R> {
    fn clone(&self) -> Self {
        Self {
            expectations: self.expectations.clone(),
        }
    }
}

impl<R: Resource> Default for MockResourceApi<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<R: Resource>(queue: &Queue<R>) -> MutexGuard<'_, VecDeque<Expectation<R>>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<R: Resource> MockResourceApi<R> {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    fn builder<T>(
        &self,
        wrap: impl FnOnce(Result<T, ApiError>) -> Expectation<R> + Send + 'static,
    ) -> ExpectationBuilder<R, T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    pub fn expect_get(&self, id: Uuid) -> ExpectationBuilder<R, R::Dto> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_head(&self, id: Uuid) -> ExpectationBuilder<R, ()> {
        self.builder(move |response| Expectation::Head { id, response })
    }

    pub fn expect_list(&self) -> ExpectationBuilder<R, CollectionResult<R::Dto>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_create(&self) -> ExpectationBuilder<R, R::Dto> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_create_many(&self) -> ExpectationBuilder<R, ()> {
        self.builder(|response| Expectation::CreateMany { response })
    }

    pub fn expect_update(&self, id: Uuid) -> ExpectationBuilder<R, R::Dto> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&self, id: Uuid) -> ExpectationBuilder<R, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.expectations).len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn next(&self, call: &str) -> Expectation<R> {
        match lock(&self.expectations).pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected call {call}: no expectations left"),
        }
    }
}

fn mismatch<R: Resource>(call: String, expected: &Expectation<R>) -> ! {
    panic!(
        "Unexpected call {call}, expected {}",
        expected.describe()
    )
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<R: Resource, T> {
    expectations: Queue<R>,
    wrap: Box<dyn FnOnce(Result<T, ApiError>) -> Expectation<R> + Send>,
}

impl<R: Resource, T> ExpectationBuilder<R, T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, ApiError>) {
        let expectation = (self.wrap)(response);
        lock(&self.expectations).push_back(expectation);
    }
}

#[async_trait]
impl<R: Resource> ResourceApi<R> for MockResourceApi<R> {
    async fn get(&self, id: Uuid, cancel: &CancellationToken) -> Result<R::Dto, ApiError> {
        ensure_active(cancel)?;
        match self.next("get") {
            Expectation::Get { id: expected, response } if expected == id => response,
            other => mismatch(format!("get({id})"), &other),
        }
    }

    async fn head(&self, id: Uuid, cancel: &CancellationToken) -> Result<(), ApiError> {
        ensure_active(cancel)?;
        match self.next("head") {
            Expectation::Head { id: expected, response } if expected == id => response,
            other => mismatch(format!("head({id})"), &other),
        }
    }

    async fn list(
        &self,
        _query: Query<R>,
        cancel: &CancellationToken,
    ) -> Result<CollectionResult<R::Dto>, ApiError> {
        ensure_active(cancel)?;
        match self.next("list") {
            Expectation::List { response } => response,
            other => mismatch("list".to_string(), &other),
        }
    }

    async fn create(&self, _input: R::Create, cancel: &CancellationToken) -> Result<R::Dto, ApiError> {
        ensure_active(cancel)?;
        match self.next("create") {
            Expectation::Create { response } => response,
            other => mismatch("create".to_string(), &other),
        }
    }

    async fn create_many(
        &self,
        _inputs: Vec<R::Create>,
        cancel: &CancellationToken,
    ) -> Result<(), ApiError> {
        ensure_active(cancel)?;
        match self.next("create_many") {
            Expectation::CreateMany { response } => response,
            other => mismatch("create_many".to_string(), &other),
        }
    }

    async fn update(&self, edit: R::Edit, cancel: &CancellationToken) -> Result<R::Dto, ApiError> {
        ensure_active(cancel)?;
        let id = R::edit_target(&edit);
        match self.next("update") {
            Expectation::Update { id: expected, response } if expected == id => response,
            other => mismatch(format!("update({id})"), &other),
        }
    }

    async fn delete(&self, id: Uuid, cancel: &CancellationToken) -> Result<(), ApiError> {
        ensure_active(cancel)?;
        match self.next("delete") {
            Expectation::Delete { id: expected, response } if expected == id => response,
            other => mismatch(format!("delete({id})"), &other),
        }
    }
}
