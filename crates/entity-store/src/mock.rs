//! # Mock Store & Testing Guide
//!
//! Repository and service code talks to the store through a [`StoreClient`]. The helpers in
//! this module hand out a real `StoreClient` whose requests land somewhere the test controls,
//! so the code under test runs unchanged while the test decides every answer.
//!
//! ## When to use Mocks vs a Real Store
//!
//! | Feature | MockStore / raw receiver | Real `StoreActor` |
//! |---------|--------------------------|-------------------|
//! | **State** | None (scripted answers) | Real record map |
//! | **Error Injection** | Easy (`return_err`) | Only `NotFound` is reachable |
//! | **Call counting** | Exact request sequence | Not observable |
//! | **Use Case** | Unit tests of repository/service logic | Behavioural and end-to-end tests |
//!
//! ## Pattern 0: Scripted answers ([`MockStore`])
//!
//! ```rust
//! use entity_store::mock::MockStore;
//! use entity_store::{StoreError, StoredEntity};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note { id: Option<u32> }
//!
//! impl StoredEntity for Note {
//!     type Id = u32;
//!     fn id(&self) -> Option<&u32> { self.id.as_ref() }
//!     fn assign_id(&mut self, id: u32) { self.id = Some(id); }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Note>::new();
//!     mock.expect_exists(1).return_ok(true);
//!     mock.expect_delete(1).return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.exists_by_id(1).await.unwrap());
//!     assert_eq!(client.delete_by_id(1).await, Err(StoreError::ActorClosed));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Pattern 1: Exact request sequence (raw receiver)
//!
//! [`create_mock_client`] returns the client together with the receiving end of its
//! channel. Pull each request with [`expect_exists`], [`expect_save`] or
//! [`expect_delete`], answer it through the returned responder, and finish with
//! `receiver.try_recv().is_err()` to prove nothing else was sent.

use crate::client::StoreClient;
use crate::entity::StoredEntity;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and the answer to give it.
enum Expectation<T: StoredEntity> {
    Exists {
        id: T::Id,
        response: Result<bool, StoreError>,
    },
    Find {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Save {
        response: Option<Result<T, StoreError>>,
    },
    Delete {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    Count {
        response: Result<usize, StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A store double that answers requests from a FIFO queue of expectations.
///
/// A request that does not match the next expectation (wrong kind or wrong identifier)
/// panics the mock task; the caller then sees `StoreError::ActorDropped`.
pub struct MockStore<T: StoredEntity> {
    client: StoreClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoredEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> MockStore<T> {
    /// Creates a new mock store with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::ExistsById { id, respond_to },
                        Some(Expectation::Exists {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "ExistsById for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindById { id, respond_to },
                        Some(Expectation::Find {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "FindById for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Save { entity, respond_to }, Some(Expectation::Save { response })) => {
                        // No scripted answer: echo the entity back, as the real store would
                        let _ = respond_to.send(response.unwrap_or(Ok(entity)));
                    }
                    (
                        StoreRequest::DeleteById { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "DeleteById for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Count { respond_to }, Some(Expectation::Count { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected store request: {request:?}");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects an `exists_by_id` call for `id`.
    pub fn expect_exists(&mut self, id: T::Id) -> ExpectationBuilder<T, bool> {
        self.builder(move |response| Expectation::Exists { id, response })
    }

    /// Expects a `find_by_id` call for `id`.
    pub fn expect_find(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Find { id, response })
    }

    /// Expects a `save` call. `return_ok` scripts the stored entity.
    pub fn expect_save(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Save {
            response: Some(response),
        })
    }

    /// Expects a `save` call that echoes the saved entity back unchanged.
    pub fn expect_save_echo(&mut self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Save { response: None });
    }

    /// Expects a `delete_by_id` call for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects a `count` call.
    pub fn expect_count(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(|response| Expectation::Count { response })
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder returned by the `expect_*` methods of [`MockStore`].
pub struct ExpectationBuilder<T: StoredEntity, R> {
    make: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
    expectations: Expectations<T>,
}

impl<T: StoredEntity, R> ExpectationBuilder<T, R> {
    /// Answers the expected request successfully.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Answers the expected request with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when the test must assert the exact sequence of requests, including that
/// none were sent at all.
pub fn create_mock_client<T: StoredEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an `ExistsById`.
pub async fn expect_exists<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Response<bool>)> {
    match receiver.recv().await {
        Some(StoreRequest::ExistsById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a `Save`.
pub async fn expect_save<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a `DeleteById`.
pub async fn expect_delete<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::DeleteById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
