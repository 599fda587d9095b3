use common::{ContentType, Role};
use portal::AppError;
use portal::views::dashboard::{
    Dashboard, FeedFilter, add_to_playlist, create_playlist, delete_playlist, remove_from_playlist,
};
use portal::views::admin;

use crate::support::TestApp;

mod lifecycle {
    use super::*;

    #[test]
    fn user_creates_fills_and_deletes_a_playlist() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");
        let registry = &mut app.state.registry;

        let playlist = create_playlist(registry, &alice, "  Road Trip  ")
            .unwrap()
            .unwrap();
        assert_eq!(playlist.name, "Road Trip");
        assert_eq!(playlist.user_id, alice.id);
        assert!(playlist.items.is_empty());

        assert!(add_to_playlist(registry, &alice, &playlist.id, "music_001").unwrap());
        assert!(add_to_playlist(registry, &alice, &playlist.id, "video_001").unwrap());
        let items: Vec<_> = registry
            .find_playlist(&playlist.id)
            .unwrap()
            .items
            .iter()
            .map(|i| i.content_id.as_str())
            .collect();
        assert_eq!(items, ["music_001", "video_001"]);

        remove_from_playlist(registry, &alice, &playlist.id, "music_001").unwrap();
        assert!(!registry.find_playlist(&playlist.id).unwrap().contains("music_001"));

        delete_playlist(registry, &alice, &playlist.id).unwrap();
        assert!(registry.find_playlist(&playlist.id).is_none());
    }

    #[test]
    fn blank_names_create_nothing() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");

        let created = create_playlist(&mut app.state.registry, &alice, "   ").unwrap();
        assert!(created.is_none());
        assert!(app.state.registry.playlists().is_empty());
    }

    #[test]
    fn adding_the_same_item_twice_keeps_one_entry() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");
        let registry = &mut app.state.registry;
        let playlist = create_playlist(registry, &alice, "Mix").unwrap().unwrap();

        assert!(add_to_playlist(registry, &alice, &playlist.id, "music_002").unwrap());
        assert!(!add_to_playlist(registry, &alice, &playlist.id, "music_002").unwrap());

        assert_eq!(registry.find_playlist(&playlist.id).unwrap().items.len(), 1);
    }

    #[test]
    fn news_cannot_be_added() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");
        let registry = &mut app.state.registry;
        let playlist = create_playlist(registry, &alice, "Mix").unwrap().unwrap();

        let result = add_to_playlist(registry, &alice, &playlist.id, "news_001");
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(registry.find_playlist(&playlist.id).unwrap().items.is_empty());
    }

    #[test]
    fn unknown_content_is_reported() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");
        let registry = &mut app.state.registry;
        let playlist = create_playlist(registry, &alice, "Mix").unwrap().unwrap();

        let result = add_to_playlist(registry, &alice, &playlist.id, "missing");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}

mod snapshots {
    use super::*;

    #[test]
    fn deleting_content_keeps_the_playlist_snapshot() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");
        let playlist = create_playlist(&mut app.state.registry, &alice, "Mix")
            .unwrap()
            .unwrap();
        add_to_playlist(&mut app.state.registry, &alice, &playlist.id, "music_001").unwrap();

        let admin = app.login_as_admin();
        admin::delete_content(&mut app.state.registry, &admin, "music_001").unwrap();
        app.reload();

        let registry = &app.state.registry;
        assert!(registry.find_content("music_001").is_none());
        let stored = registry.find_playlist(&playlist.id).unwrap();
        assert_eq!(stored.items.len(), 1);
        assert_eq!(stored.items[0].title, "Chill Beats Mix");
    }

    #[test]
    fn editing_content_does_not_touch_existing_snapshots() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");
        let playlist = create_playlist(&mut app.state.registry, &alice, "Mix")
            .unwrap()
            .unwrap();
        add_to_playlist(&mut app.state.registry, &alice, &playlist.id, "video_001").unwrap();

        let admin = app.login_as_admin();
        let mut draft = common::ContentDraft::from(app.state.registry.find_content("video_001").unwrap());
        draft.title = "Renamed Concert".into();
        admin::edit_content(&mut app.state.registry, &admin, "video_001", draft).unwrap();

        let item = &app.state.registry.find_playlist(&playlist.id).unwrap().items[0];
        assert_eq!(item.title, "Live Concert: The Rockers");
    }

    #[test]
    fn snapshot_of_deleted_content_can_still_be_removed() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");
        let playlist = create_playlist(&mut app.state.registry, &alice, "Mix")
            .unwrap()
            .unwrap();
        add_to_playlist(&mut app.state.registry, &alice, &playlist.id, "music_002").unwrap();
        app.state.registry.delete_content("music_002").unwrap();

        remove_from_playlist(&mut app.state.registry, &alice, &playlist.id, "music_002").unwrap();
        assert!(app.state.registry.find_playlist(&playlist.id).unwrap().items.is_empty());
    }
}

mod ownership {
    use super::*;

    #[test]
    fn other_users_cannot_change_a_playlist() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");
        let playlist = create_playlist(&mut app.state.registry, &alice, "Mine")
            .unwrap()
            .unwrap();
        app.state.session.logout().unwrap();
        let bob = app.register("Bob", "bob@example.com", "bobpass");

        let registry = &mut app.state.registry;
        assert!(matches!(
            add_to_playlist(registry, &bob, &playlist.id, "music_001"),
            Err(AppError::PermissionDenied)
        ));
        assert!(matches!(
            delete_playlist(registry, &bob, &playlist.id),
            Err(AppError::PermissionDenied)
        ));
        assert!(registry.find_playlist(&playlist.id).is_some());
    }

    #[test]
    fn admins_cannot_change_playlists_they_do_not_own() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");
        let playlist = create_playlist(&mut app.state.registry, &alice, "Mine")
            .unwrap()
            .unwrap();
        let admin = app.login_as_admin();
        assert_eq!(admin.role, Role::Admin);

        let result = remove_from_playlist(&mut app.state.registry, &admin, &playlist.id, "x");
        assert!(matches!(result, Err(AppError::PermissionDenied)));
    }

    #[test]
    fn dashboard_lists_only_the_viewers_playlists() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");
        create_playlist(&mut app.state.registry, &alice, "Alice's").unwrap();
        app.state.session.logout().unwrap();
        let bob = app.register("Bob", "bob@example.com", "bobpass");
        create_playlist(&mut app.state.registry, &bob, "Bob's").unwrap();

        let dashboard = Dashboard::build(&app.state.registry, &bob, FeedFilter::All);
        let names: Vec<_> = dashboard.playlists.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bob's"]);
    }
}

mod feed {
    use super::*;

    #[test]
    fn filter_narrows_the_feed_and_keeps_order() {
        let mut app = TestApp::spawn();
        let alice = app.register("Alice", "alice@example.com", "securepass");

        let music = Dashboard::build(
            &app.state.registry,
            &alice,
            FeedFilter::Only(ContentType::Music),
        );
        let ids: Vec<_> = music.feed.iter().map(|c| c.content.id.as_str()).collect();
        assert_eq!(ids, ["music_001", "music_002"]);

        let all = Dashboard::build(&app.state.registry, &alice, FeedFilter::All);
        assert_eq!(all.feed.len(), 4);
        let addable: Vec<_> = all
            .feed
            .iter()
            .map(|c| c.can_add_to_playlist)
            .collect();
        assert_eq!(addable, [false, true, true, true]);
    }

    #[test]
    fn filters_parse_from_user_input() {
        assert_eq!("all".parse::<FeedFilter>().unwrap(), FeedFilter::All);
        assert_eq!(
            "video".parse::<FeedFilter>().unwrap(),
            FeedFilter::Only(ContentType::Video)
        );
        assert!("podcast".parse::<FeedFilter>().is_err());
    }
}
