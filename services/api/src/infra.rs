use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use career_mentor::advisor::assessment::{ProfileStore, StoreError};
use career_mentor::config::StorageConfig;
use career_mentor::identity::{AuthSession, IdentityError, IdentityGateway};
use metrics_exporter_prometheus::PrometheusHandle;

/// Shared handles the operational endpoints read.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Volatile key-value store mirroring the browser's local storage.
///
/// Every value lives in process memory, so a restart drops all submitted
/// profiles. Development and tests use this store.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryProfileStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().expect("profile store mutex poisoned");
        Ok(values.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut values = self.values.lock().expect("profile store mutex poisoned");
        values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Key-value store persisted as a JSON object on disk.
///
/// The whole map is rewritten on every `put`, which is fine for the single
/// profile document this service stores.
#[derive(Debug)]
pub(crate) struct JsonFileProfileStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl JsonFileProfileStore {
    /// Loads the store from `path`, starting empty when the file is absent.
    pub(crate) fn open(path: PathBuf) -> Result<Self, StoreError> {
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
                StoreError::Unavailable(format!("corrupt store file {}: {err}", path.display()))
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                return Err(StoreError::Unavailable(format!(
                    "cannot read store file {}: {err}",
                    path.display()
                )))
            }
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    fn flush(&self, values: &HashMap<String, String>) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(values)
            .map_err(|err| StoreError::Unavailable(format!("cannot encode store: {err}")))?;
        fs::write(&self.path, payload).map_err(|err| {
            StoreError::Unavailable(format!(
                "cannot write store file {}: {err}",
                self.path.display()
            ))
        })
    }
}

impl ProfileStore for JsonFileProfileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().expect("profile store mutex poisoned");
        Ok(values.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut values = self.values.lock().expect("profile store mutex poisoned");
        values.insert(key.to_string(), value);
        self.flush(&values)
    }
}

/// Store picked at startup from [`StorageConfig`].
#[derive(Debug)]
pub(crate) enum ConfiguredProfileStore {
    InMemory(InMemoryProfileStore),
    File(JsonFileProfileStore),
}

impl ProfileStore for ConfiguredProfileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::InMemory(store) => store.get(key),
            Self::File(store) => store.get(key),
        }
    }

    fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        match self {
            Self::InMemory(store) => store.put(key, value),
            Self::File(store) => store.put(key, value),
        }
    }
}

/// Builds the profile store the configuration asks for: file-backed when a
/// path is set, in-memory otherwise.
pub(crate) fn profile_store_from(
    config: &StorageConfig,
) -> Result<ConfiguredProfileStore, StoreError> {
    match &config.profile_store {
        Some(path) => JsonFileProfileStore::open(path.clone()).map(ConfiguredProfileStore::File),
        None => Ok(ConfiguredProfileStore::InMemory(
            InMemoryProfileStore::default(),
        )),
    }
}

struct AccountRecord {
    password: String,
    user_id: String,
}

/// Identity provider holding accounts and at most one active session in
/// process memory. Registration never opens a session, so freshly signed-up
/// users still go through the login flow.
#[derive(Default)]
pub(crate) struct InMemoryIdentityGateway {
    accounts: Mutex<HashMap<String, AccountRecord>>,
    session: Mutex<Option<AuthSession>>,
}

static ACCOUNT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_user_id() -> String {
    let id = ACCOUNT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("user-{id:06}")
}

impl IdentityGateway for InMemoryIdentityGateway {
    fn register(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError> {
        if password.chars().count() < 6 {
            return Err(IdentityError::WeakPassword);
        }

        let mut accounts = self.accounts.lock().expect("accounts mutex poisoned");
        if accounts.contains_key(email) {
            return Err(IdentityError::EmailTaken);
        }

        let user_id = next_user_id();
        accounts.insert(
            email.to_string(),
            AccountRecord {
                password: password.to_string(),
                user_id: user_id.clone(),
            },
        );

        Ok(AuthSession {
            user_id,
            email: email.to_string(),
        })
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError> {
        let accounts = self.accounts.lock().expect("accounts mutex poisoned");
        let account = accounts
            .get(email)
            .ok_or(IdentityError::InvalidCredentials)?;
        if account.password != password {
            return Err(IdentityError::InvalidCredentials);
        }

        let session = AuthSession {
            user_id: account.user_id.clone(),
            email: email.to_string(),
        };
        *self.session.lock().expect("session mutex poisoned") = Some(session.clone());

        Ok(session)
    }

    fn current_session(&self) -> Result<Option<AuthSession>, IdentityError> {
        Ok(self.session.lock().expect("session mutex poisoned").clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_mentor::advisor::assessment::PROFILE_STORAGE_KEY;

    fn temp_store_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("career-mentor-{tag}-{}.json", std::process::id()))
    }

    #[test]
    fn in_memory_store_round_trips_values() {
        let store = InMemoryProfileStore::default();
        assert_eq!(store.get(PROFILE_STORAGE_KEY).expect("readable"), None);

        store
            .put(PROFILE_STORAGE_KEY, "{\"name\":\"Ada\"}".to_string())
            .expect("writable");

        assert_eq!(
            store.get(PROFILE_STORAGE_KEY).expect("readable"),
            Some("{\"name\":\"Ada\"}".to_string())
        );
    }

    #[test]
    fn file_store_survives_a_reopen() {
        let path = temp_store_path("reopen");
        let _ = fs::remove_file(&path);

        {
            let store = JsonFileProfileStore::open(path.clone()).expect("store opens");
            store
                .put(PROFILE_STORAGE_KEY, "{\"name\":\"Ada\"}".to_string())
                .expect("writable");
        }

        let reopened = JsonFileProfileStore::open(path.clone()).expect("store reopens");
        assert_eq!(
            reopened.get(PROFILE_STORAGE_KEY).expect("readable"),
            Some("{\"name\":\"Ada\"}".to_string())
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_store_file_refuses_to_open() {
        let path = temp_store_path("corrupt");
        fs::write(&path, "{not json").expect("fixture written");

        match JsonFileProfileStore::open(path.clone()) {
            Err(StoreError::Unavailable(reason)) => {
                assert!(reason.contains("corrupt store file"));
            }
            other => panic!("expected unavailable error, got {other:?}"),
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_opens_an_empty_store() {
        let path = temp_store_path("missing");
        let _ = fs::remove_file(&path);

        let store = JsonFileProfileStore::open(path).expect("store opens");
        assert_eq!(store.get(PROFILE_STORAGE_KEY).expect("readable"), None);
    }

    #[test]
    fn configured_store_defaults_to_memory() {
        let store = profile_store_from(&StorageConfig::default()).expect("store builds");
        match store {
            ConfiguredProfileStore::InMemory(_) => {}
            other => panic!("expected in-memory store, got {other:?}"),
        }
    }

    #[test]
    fn registration_enforces_the_password_floor() {
        let gateway = InMemoryIdentityGateway::default();
        match gateway.register("ada@example.com", "short") {
            Err(IdentityError::WeakPassword) => {}
            other => panic!("expected weak password error, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let gateway = InMemoryIdentityGateway::default();
        gateway
            .register("ada@example.com", "engine1843")
            .expect("first registration succeeds");

        match gateway.register("ada@example.com", "another-pass") {
            Err(IdentityError::EmailTaken) => {}
            other => panic!("expected email taken error, got {other:?}"),
        }
    }

    #[test]
    fn registration_does_not_open_a_session() {
        let gateway = InMemoryIdentityGateway::default();
        gateway
            .register("ada@example.com", "engine1843")
            .expect("registration succeeds");

        assert_eq!(gateway.current_session().expect("readable"), None);
    }

    #[test]
    fn sign_in_checks_credentials_and_opens_a_session() {
        let gateway = InMemoryIdentityGateway::default();
        let account = gateway
            .register("ada@example.com", "engine1843")
            .expect("registration succeeds");

        match gateway.sign_in("ada@example.com", "wrong-password") {
            Err(IdentityError::InvalidCredentials) => {}
            other => panic!("expected invalid credentials, got {other:?}"),
        }
        match gateway.sign_in("unknown@example.com", "engine1843") {
            Err(IdentityError::InvalidCredentials) => {}
            other => panic!("expected invalid credentials, got {other:?}"),
        }

        let session = gateway
            .sign_in("ada@example.com", "engine1843")
            .expect("sign-in succeeds");
        assert_eq!(session.user_id, account.user_id);
        assert_eq!(gateway.current_session().expect("readable"), Some(session));
    }
}
