use std::sync::Arc;

use common::storage::KeyValueStore;
use common::storage::filesystem::FilesystemKvStore;
use common::{ContentType, Role};
use portal::AppState;
use portal::store::{CONTENT_KEY, PLAYLISTS_KEY, USERS_KEY};

use crate::support::{ADMIN_PASSWORD, TestApp, draft, test_config};

mod first_run {
    use super::*;

    #[test]
    fn fresh_store_holds_one_admin_and_the_sample_feed() {
        let app = TestApp::spawn();
        let registry = &app.state.registry;

        let admins: Vec<_> = registry.users().iter().filter(|u| u.is_admin()).collect();
        assert_eq!(registry.users().len(), 1);
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].nickname, "Admin");
        assert_eq!(admins[0].email, "Admin");

        let titles: Vec<_> = registry.content().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Cultur Platform Launch",
                "Live Concert: The Rockers",
                "Chill Beats Mix",
                "Synthwave Dreams",
            ]
        );
        assert!(registry.content().iter().all(|c| c.author_id == "admin_001"));
        assert!(registry.playlists().is_empty());
    }

    #[test]
    fn seeding_happens_only_once() {
        let mut app = TestApp::spawn();
        let admin_hash = app.state.registry.users()[0].password_hash.clone();

        app.reload();

        assert_eq!(app.state.registry.users().len(), 1);
        assert_eq!(app.state.registry.users()[0].password_hash, admin_hash);
        assert_eq!(app.state.registry.content().len(), 4);
    }

    #[test]
    fn admin_is_reseeded_when_every_admin_is_gone() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");
        app.state.registry.delete_user("admin_001").unwrap();

        app.reload();

        let ids: Vec<_> = app.state.registry.users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, [alice.id.as_str(), "admin_001"]);
        app.state.session.logout().unwrap();
        assert_eq!(app.login("Admin", ADMIN_PASSWORD).role, Role::Admin);
    }
}

mod write_through {
    use super::*;

    #[test]
    fn reload_yields_the_last_in_memory_state() {
        let mut app = TestApp::spawn();
        app.register("Alice", "alice@example.com", "securepass");
        let admin = app.login_as_admin();
        let content = app
            .state
            .registry
            .add_content(draft(ContentType::Music, "Night Drive"), &admin.id)
            .unwrap();
        let playlist = app.state.registry.add_playlist("Favourites", &admin.id).unwrap();
        app.state
            .registry
            .add_content_to_playlist(&playlist.id, &content)
            .unwrap();

        let users = app.state.registry.users().to_vec();
        let feed = app.state.registry.content().to_vec();
        let playlists = app.state.registry.playlists().to_vec();

        app.reload();

        assert_eq!(app.state.registry.users(), users.as_slice());
        assert_eq!(app.state.registry.content(), feed.as_slice());
        assert_eq!(app.state.registry.playlists(), playlists.as_slice());
    }

    #[test]
    fn emptied_playlist_collection_stays_empty_after_reload() {
        let mut app = TestApp::spawn();
        let playlist = app.state.registry.add_playlist("Temporary", "admin_001").unwrap();
        app.state.registry.delete_playlist(&playlist.id).unwrap();

        app.reload();

        assert!(app.state.registry.playlists().is_empty());
        assert_eq!(app.kv.get(PLAYLISTS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn emptied_content_collection_is_reseeded_on_load() {
        let mut app = TestApp::spawn();
        let ids: Vec<_> = app
            .state
            .registry
            .content()
            .iter()
            .map(|c| c.id.clone())
            .collect();
        for id in &ids {
            app.state.registry.delete_content(id).unwrap();
        }
        assert_eq!(app.kv.get(CONTENT_KEY).unwrap().as_deref(), Some("[]"));

        app.reload();

        assert_eq!(app.state.registry.content().len(), 4);
    }

    #[test]
    fn role_change_is_persisted() {
        let mut app = TestApp::spawn();
        let editor = app.editor("ed@example.com");

        app.reload();

        assert_eq!(
            app.state.registry.find_user(&editor.id).map(|u| u.role),
            Some(Role::Editor)
        );
    }
}

mod malformed_storage {
    use super::*;

    #[test]
    fn malformed_collections_degrade_to_an_empty_seeded_state() {
        let mut app = TestApp::spawn();
        app.kv.set(USERS_KEY, "definitely not json").unwrap();
        app.kv.set(CONTENT_KEY, "[{\"broken\":").unwrap();
        app.kv.set(PLAYLISTS_KEY, "42").unwrap();

        app.reload();

        assert_eq!(app.state.registry.users().len(), 1);
        assert!(app.state.registry.users()[0].is_admin());
        assert_eq!(app.state.registry.content().len(), 4);
        assert!(app.state.registry.playlists().is_empty());
    }

    #[test]
    fn records_written_by_the_web_portal_are_read() {
        let mut app = TestApp::spawn();
        app.kv
            .set(
                PLAYLISTS_KEY,
                r##"[{"id":"playlist_1","name":"Old","userId":"user_1","items":[
                    {"contentId":"music_001","title":"Chill Beats Mix","imageUrl":"img","url":"#"}
                ]}]"##,
            )
            .unwrap();

        app.reload();

        let playlist = app.state.registry.find_playlist("playlist_1").unwrap();
        assert_eq!(playlist.user_id, "user_1");
        assert!(playlist.contains("music_001"));
    }
}

mod filesystem {
    use super::*;

    #[test]
    fn state_survives_reopening_the_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config();
        config.storage.data_dir = dir.path().join("data");

        let alice_id = {
            let mut state = AppState::open(&config).unwrap();
            let AppState {
                registry, session, ..
            } = &mut state;
            session
                .register(registry, "Alice", "alice@example.com", "securepass")
                .unwrap()
                .id
                .clone()
        };

        let state = AppState::open(&config).unwrap();
        assert!(state.registry.find_user(&alice_id).is_some());
        assert_eq!(state.session.current().map(|u| u.id.as_str()), Some(alice_id.as_str()));

        let kv = FilesystemKvStore::new(config.storage.data_dir.clone(), 1024 * 1024).unwrap();
        assert!(kv.contains(USERS_KEY).unwrap());
        assert!(dir.path().join("data/cultur_users.json").exists());
    }

    #[test]
    fn values_over_the_size_limit_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let kv = Arc::new(FilesystemKvStore::new(dir.path().to_path_buf(), 64).unwrap());

        let result = AppState::with_store(kv, &test_config());
        assert!(matches!(result, Err(portal::PortalError::Storage(_))));
    }
}
