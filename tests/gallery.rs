use cardgallery::host::{Host, Page};
use cardgallery::{init, Config, Event, GalleryError, Preset, Record};

fn spells() -> Vec<Record> {
    vec![
        Record::from_pairs([("title", "Fireball"), ("subtitle", "Spell")]),
        Record::from_pairs([("title", "Sword"), ("subtitle", "Weapon")]),
    ]
}

fn config_with(data: Option<Vec<Record>>) -> Config {
    Config {
        data,
        ..Config::default()
    }
}

fn visible_titles(gallery: &cardgallery::Gallery) -> Vec<String> {
    gallery
        .state()
        .visible_records()
        .iter()
        .map(|r| r.text("title"))
        .collect()
}

#[test]
fn search_filters_and_reports_counts() {
    let mut page = Page::new("Spells").with_mount("g");
    let mut gallery = init(&mut page, "g", config_with(Some(spells()))).unwrap();

    gallery.search(&mut page, "sp");
    assert_eq!(visible_titles(&gallery), ["Fireball"]);
    assert!(page.mount_content("g").unwrap().contains("1 of 2 items"));

    gallery.search(&mut page, "");
    assert_eq!(visible_titles(&gallery), ["Fireball", "Sword"]);
    assert!(page.mount_content("g").unwrap().contains(">2 items<"));

    gallery.search(&mut page, "xyz");
    assert_eq!(gallery.visible_count(), 0);
    let html = page.mount_content("g").unwrap();
    assert!(html.contains("0 of 2 items"));
    assert!(html.contains("<div id=\"g-gallery-empty\" class=\"cg-no-results\">"));
}

#[test]
fn search_is_case_insensitive_and_trimmed() {
    let mut page = Page::new("Spells").with_mount("g");
    let mut gallery = init(&mut page, "g", config_with(Some(spells()))).unwrap();

    gallery.search(&mut page, "  WEAPON ");
    assert_eq!(visible_titles(&gallery), ["Sword"]);

    gallery.clear(&mut page);
    assert_eq!(gallery.visible_count(), 2);
    assert_eq!(gallery.state().query, "");
}

#[test]
fn empty_data_is_a_valid_gallery() {
    let mut page = Page::new("Empty").with_mount("g");
    let gallery = init(&mut page, "g", config_with(Some(vec![]))).unwrap();

    assert_eq!(gallery.count(), 0);
    let html = page.mount_content("g").unwrap();
    assert!(html.contains(">0 items<"));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn refresh_replaces_records_and_resets_query() {
    let mut page = Page::new("Spells").with_mount("g");
    let mut gallery = init(&mut page, "g", config_with(Some(spells()))).unwrap();
    gallery.search(&mut page, "sword");

    gallery.refresh(
        &mut page,
        Some(vec![
            Record::from_pairs([("title", "Shield")]),
            Record::from_pairs([("title", "Bow")]),
            Record::from_pairs([("title", "Axe")]),
        ]),
    );
    gallery.search(&mut page, "");

    assert_eq!(gallery.count(), 3);
    assert_eq!(visible_titles(&gallery), ["Shield", "Bow", "Axe"]);
    assert_eq!(gallery.elements().cards.len(), 3);
    assert!(page.mount_content("g").unwrap().contains("id=\"g-gallery-card-2\""));
}

#[test]
fn overlay_shows_only_the_last_opened_record() {
    let mut page = Page::new("Spells").with_mount("g");
    let mut gallery = init(&mut page, "g", config_with(Some(spells()))).unwrap();

    gallery.dispatch(&mut page, &Event::ActivateCard(0));
    assert!(gallery.is_overlay_open());
    assert!(page.mount_content("g").unwrap().contains("cg-overlay-title\">Fireball<"));

    gallery.dispatch(&mut page, &Event::CloseControl);
    gallery.dispatch(&mut page, &Event::ActivateCard(1));

    let html = page.mount_content("g").unwrap();
    assert!(html.contains("cg-overlay-title\">Sword<"));
    assert!(!html.contains("cg-overlay-title\">Fireball<"));
}

#[test]
fn every_close_trigger_releases_the_scroll_lock() {
    let mut page = Page::new("Spells").with_mount("g");
    let mut gallery = init(&mut page, "g", config_with(Some(spells()))).unwrap();

    for close in [Event::CloseControl, Event::BackdropClick, Event::key("Escape")] {
        gallery.dispatch(&mut page, &Event::ActivateCard(1));
        assert!(page.is_scroll_locked());
        assert!(page.to_html().contains("<body style=\"overflow: hidden\">"));

        gallery.dispatch(&mut page, &Event::ContentClick);
        gallery.dispatch(&mut page, &Event::key("a"));
        assert!(gallery.is_overlay_open());

        gallery.dispatch(&mut page, &close);
        assert!(!gallery.is_overlay_open());
        assert!(!page.is_scroll_locked());

        assert!(!gallery.dispatch(&mut page, &close));
        assert!(!page.is_scroll_locked());
    }
}

#[test]
fn missing_mount_fails_without_touching_the_page() {
    let mut page = Page::new("Spells").with_mount("other");
    let before = page.clone();

    let err = init(&mut page, "missing", config_with(Some(spells()))).unwrap_err();

    assert!(matches!(err, GalleryError::MountNotFound(ref id) if id == "missing"));
    assert_eq!(page, before);
}

#[test]
fn missing_data_mounts_an_error_view() {
    let mut page = Page::new("Broken").with_mount("g");
    let mut gallery = init(&mut page, "g", config_with(None)).unwrap();

    assert_eq!(gallery.count(), 0);
    let html = page.mount_content("g").unwrap().to_string();
    assert!(html.contains("role=\"alert\">Database Error"));

    assert!(!gallery.dispatch(&mut page, &Event::Input("x".into())));
    assert_eq!(page.mount_content("g").unwrap(), html);

    gallery.refresh(&mut page, Some(spells()));
    assert!(!page.mount_content("g").unwrap().contains("role=\"alert\""));
    assert_eq!(gallery.count(), 2);
}

#[test]
fn characters_preset_maps_named_columns() {
    let mut page = Page::new("Heroes").with_mount("heroes");
    let config = Config {
        data: Some(vec![Record::from_pairs([
            ("englishName", "Lin"),
            ("chineseName", "\u{6797}"),
            ("intro", "A wandering swordsman"),
            ("picUrl", "https://img/lin.png"),
        ])]),
        ..Preset::Characters.config()
    };
    let mut gallery = init(&mut page, "heroes", config).unwrap();

    let html = page.mount_content("heroes").unwrap();
    assert!(html.contains("cg-card--poster"));
    assert!(html.contains("src=\"https://img/lin.png\""));
    assert!(html.contains("No characters found."));
    assert!(!html.contains(" items<"));

    gallery.search(&mut page, "\u{6797}");
    assert_eq!(gallery.visible_count(), 1);
    gallery.search(&mut page, "SWORDSMAN");
    assert_eq!(gallery.visible_count(), 1);
}

#[test]
fn broken_card_image_falls_back_once() {
    let mut page = Page::new("Spells").with_mount("g");
    let config = config_with(Some(vec![Record::from_pairs([
        ("title", "Sword"),
        ("image", "https://x/missing.png"),
    ])]));
    let mut gallery = init(&mut page, "g", config).unwrap();

    assert!(gallery.dispatch(&mut page, &Event::ImageFailed(0)));
    assert!(!page.mount_content("g").unwrap().contains("https://x/missing.png"));
    assert!(!gallery.dispatch(&mut page, &Event::ImageFailed(0)));
}

#[test]
fn galleries_on_one_page_are_independent() {
    let mut page = Page::new("Two").with_mount("a").with_mount("b");
    let mut first = init(&mut page, "a", config_with(Some(spells()))).unwrap();
    let second = init(
        &mut page,
        "b",
        Config {
            theme: cardgallery::ThemeName::Light,
            ..config_with(Some(spells()))
        },
    )
    .unwrap();

    first.search(&mut page, "sp");

    assert_eq!(first.visible_count(), 1);
    assert_eq!(second.visible_count(), 2);
    assert!(page.mount_content("a").unwrap().contains("#a-gallery"));
    assert!(!page.mount_content("a").unwrap().contains("#b-gallery"));
    assert!(page.mount_content("b").unwrap().contains("#b-gallery"));
}

#[test]
fn vanished_mount_does_not_break_the_widget() {
    let mut page = Page::new("Spells").with_mount("g");
    let mut gallery = init(&mut page, "g", config_with(Some(spells()))).unwrap();
    page.remove_mount("g");

    gallery.search(&mut page, "sp");
    assert_eq!(gallery.visible_count(), 1);
    assert!(!page.has_mount("g"));
}

#[test]
fn refresh_to_missing_data_releases_an_open_overlay() {
    let mut page = Page::new("Spells").with_mount("g");
    let mut gallery = init(&mut page, "g", config_with(Some(spells()))).unwrap();
    gallery.dispatch(&mut page, &Event::ActivateCard(0));
    assert!(page.is_scroll_locked());

    gallery.refresh(&mut page, None);

    assert!(!gallery.is_overlay_open());
    assert!(!page.is_scroll_locked());
    let html = page.mount_content("g").unwrap();
    assert!(html.contains("role=\"alert\""));
    assert!(!html.contains("data-action=\"close\""));
}

#[test]
fn quoted_mount_id_keeps_markup_and_scope_intact() {
    let mount = "my \"spells\"";
    let mut page = Page::new("Spells").with_mount(mount);
    let gallery = init(&mut page, mount, config_with(Some(spells()))).unwrap();

    assert_eq!(gallery.elements().root, "my__spells_-gallery");
    let html = page.mount_content(mount).unwrap();
    assert!(html.contains("<div id=\"my__spells_-gallery\" class=\"cg-container\">"));
    assert!(html.contains("#my__spells_-gallery .cg-grid"));
    assert!(!html.contains("id=\"my \"spells\""));
    assert!(page.to_html().contains("<div id=\"my &quot;spells&quot;\">"));
}
