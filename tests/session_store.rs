//! Session store integration: config-resolved storage path, hydration
//! across restarts, and explicit teardown.

use anyhow::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use workbook_session::config::ClientConfig;
use workbook_session::session::storage::FileSessionStorage;
use workbook_session::session::{Session, SessionStore};

fn login(store: &SessionStore) -> Result<()> {
    store.set_session(Some(Session {
        identity: "ada@example.com".to_string(),
        token: Some("jwt-token".to_string()),
        display_name: "Ada".to_string(),
    }))?;
    Ok(())
}

#[test]
fn session_survives_restart_via_configured_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("workbook.toml");
    let session_path = dir.path().join("state").join("session.json");
    std::fs::write(
        &config_path,
        format!("session_file = \"{}\"\n", session_path.display()),
    )?;

    let config = ClientConfig::load(Some(&config_path))?;

    {
        let store = SessionStore::init(Box::new(FileSessionStorage::from_config(&config)?))?;
        assert!(store.session().is_none());
        login(&store)?;
    }

    // "Reload": a fresh store over the same configured file.
    let store = SessionStore::init(Box::new(FileSessionStorage::from_config(&config)?))?;
    let session = store.session().expect("session hydrated after restart");
    assert_eq!(session.identity, "ada@example.com");
    assert_eq!(session.token.as_deref(), Some("jwt-token"));
    Ok(())
}

#[test]
fn logout_tears_down_memory_and_storage() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let session_path = dir.path().join("session.json");
    let store = SessionStore::init(Box::new(FileSessionStorage::new(session_path.clone())))?;

    let notified = Arc::new(AtomicUsize::new(0));
    let counter = notified.clone();
    store.subscribe(Box::new(move |session| {
        if session.is_none() {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }));

    login(&store)?;
    assert!(session_path.exists());

    store.logout()?;
    assert!(store.session().is_none());
    assert!(!session_path.exists());
    assert_eq!(notified.load(Ordering::SeqCst), 1);

    let store = SessionStore::init(Box::new(FileSessionStorage::new(session_path)))?;
    assert!(store.session().is_none());
    Ok(())
}
