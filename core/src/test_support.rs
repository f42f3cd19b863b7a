//! Fakes shared by unit tests across modules.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::dispatch::{ApiRequest, ApiResponse, Dispatcher, Transport};
use crate::error::StorageError;
use crate::session::{AuthScheme, PROFILE_KEY, Profile, SessionStore};
use crate::storage::{KeyValueStorage, MemoryStorage};

type Hook = Box<dyn Fn()>;

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<ApiResponse, String>>,
    requests: Vec<ApiRequest>,
    during_send: Option<Hook>,
}

/// Transport that replays queued responses and records every request.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: &str) -> &Self {
        self.script
            .borrow_mut()
            .responses
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub(crate) fn fail(&self, error: &str) -> &Self {
        self.script.borrow_mut().responses.push_back(Err(error.to_owned()));
        self
    }

    /// Run `hook` while the next requests are "in flight".
    pub(crate) fn during_send(&self, hook: impl Fn() + 'static) {
        self.script.borrow_mut().during_send = Some(Box::new(hook));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.script.borrow().requests.clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.script.borrow().requests.len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, String> {
        let mut script = self.script.borrow_mut();
        script.requests.push(request.clone());
        if let Some(hook) = &script.during_send {
            hook();
        }
        script
            .responses
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response".to_owned()))
    }
}

/// Storage that counts profile removals, i.e. `SessionStore::clear` calls.
#[derive(Clone, Default)]
pub(crate) struct CountingStorage {
    pub(crate) inner: MemoryStorage,
    removals: Rc<Cell<usize>>,
}

impl CountingStorage {
    pub(crate) fn clears(&self) -> usize {
        self.removals.get()
    }
}

impl KeyValueStorage for CountingStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        if key == PROFILE_KEY {
            self.removals.set(self.removals.get() + 1);
        }
        self.inner.remove_item(key);
    }
}

/// Records every unauthorized redirect target.
#[derive(Clone, Default)]
pub(crate) struct Redirects {
    targets: Rc<RefCell<Vec<String>>>,
}

impl Redirects {
    pub(crate) fn handler(&self) -> impl Fn(&str) + 'static {
        let targets = self.targets.clone();
        move |path: &str| targets.borrow_mut().push(path.to_owned())
    }

    pub(crate) fn targets(&self) -> Vec<String> {
        self.targets.borrow().clone()
    }
}

pub(crate) fn sample_profile() -> Profile {
    Profile {
        id: 1,
        email: "ada@example.com".to_owned(),
        role: "USER".to_owned(),
    }
}

/// A dispatcher wired to fakes, plus handles to inspect them.
pub(crate) struct Harness {
    pub(crate) dispatcher: Dispatcher,
    pub(crate) transport: ScriptedTransport,
    pub(crate) storage: CountingStorage,
    pub(crate) redirects: Redirects,
}

impl Harness {
    pub(crate) fn new(scheme: AuthScheme) -> Self {
        let storage = CountingStorage::default();
        let transport = ScriptedTransport::new();
        let redirects = Redirects::default();
        let session = SessionStore::new(scheme, storage.clone());
        let dispatcher = Dispatcher::new(session, transport.clone(), redirects.handler());
        Self {
            dispatcher,
            transport,
            storage,
            redirects,
        }
    }

    pub(crate) fn logged_in(scheme: AuthScheme, artifact: &str) -> Self {
        let harness = Self::new(scheme);
        harness
            .dispatcher
            .session()
            .save(artifact, &sample_profile())
            .expect("save session");
        harness
    }

    pub(crate) fn session(&self) -> &SessionStore {
        self.dispatcher.session()
    }
}
