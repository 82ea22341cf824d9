//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are
//! answered from a queue of expectations instead of a running actor. It lets
//! you unit-test client logic (e.g. the star/unstar orchestration in
//! `CollectionClient`) deterministically, and inject store failures that are
//! hard to reproduce with real actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Example
//!
//! ```ignore
//! let mut mock = MockClient::<ResourceSet>::new();
//! mock.expect_find_or_create().return_ok(ResourceSetId(1));
//! mock.expect_action(ResourceSetId(1)).return_ok(ResourceSetActionResult::Prepended(1));
//!
//! let collections = CollectionClient::new(mock.client());
//! collections.star(UserId(7), ResourceId(3)).await?;
//! mock.verify();
//! ```
//!
//! Expectations are consumed in order. A request that does not match the
//! next expectation panics the mock task, which surfaces in the test as
//! `FrameworkError::ActorDropped`.

use super::core::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response the mock will send back.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Delete {
        response: Result<(), FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
    Find {
        response: Result<Vec<T>, FrameworkError>,
    },
    FindOrCreate {
        response: Result<T::Id, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<(Option<<T as ActorEntity>::Id>, Expectation<T>)>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn respond<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn check_id<I: PartialEq + std::fmt::Debug>(expected: Option<I>, actual: &I) {
    if let Some(expected) = expected {
        assert_eq!(&expected, actual, "Mock received a request for an unexpected id");
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, next) {
                    (ResourceRequest::Get { id, respond_to }, Some((expected, Expectation::Get { response }))) => {
                        check_id(expected, &id);
                        respond(respond_to, response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some((_, Expectation::Create { response }))) => {
                        respond(respond_to, response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some((expected, Expectation::Delete { response }))) => {
                        check_id(expected, &id);
                        respond(respond_to, response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some((expected, Expectation::Action { response })),
                    ) => {
                        check_id(expected, &id);
                        respond(respond_to, response);
                    }
                    (ResourceRequest::Find { respond_to, .. }, Some((_, Expectation::Find { response }))) => {
                        respond(respond_to, response);
                    }
                    (
                        ResourceRequest::FindOrCreate { respond_to, .. },
                        Some((_, Expectation::FindOrCreate { response })),
                    ) => {
                        respond(respond_to, response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {}", request_kind(&request));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), |response| Expectation::Get { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(None, |response| Expectation::Create { response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Some(id), |response| Expectation::Delete { response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Some(id), |response| Expectation::Action { response })
    }

    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, |response| Expectation::Find { response })
    }

    pub fn expect_find_or_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(None, |response| Expectation::FindOrCreate { response })
    }

    fn builder<R>(
        &mut self,
        id: Option<T::Id>,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock expectations poisoned").len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
        ResourceRequest::Find { .. } => "Find",
        ResourceRequest::FindOrCreate { .. } => "FindOrCreate",
    }
}

/// Builder that records what a single expected request returns.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    id: Option<T::Id>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back((self.id, (self.wrap)(response)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when a test needs to inspect the request payload itself (for
/// example the `ResourceSetQuery` a client built) before answering.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request
pub async fn expect_find<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
