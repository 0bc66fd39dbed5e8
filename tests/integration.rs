// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios through the public API.

use iced::{Point, Rectangle, Size};
use iced_popups::config::{self, Config, GeneralConfig, SnackbarConfig};
use iced_popups::error::{Error, SnackbarError};
use iced_popups::ui::modal::{dismiss, Anchor, PointerTarget};
use iced_popups::ui::snackbar::{
    AddOutcome, Snackbar, SnackbarKind, SnackbarQueue, SnackbarSettings,
};
use iced_popups::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn queue(lifetime_ms: u64) -> SnackbarQueue {
    SnackbarQueue::new(SnackbarSettings::new(5, lifetime_ms))
}

fn messages(queue: &SnackbarQueue) -> Vec<String> {
    queue
        .iter()
        .map(|(_, entry)| entry.message().to_string())
        .collect()
}

#[test]
fn duplicate_success_snackbar_is_shown_once() {
    let mut queue = queue(4000);
    let now = Instant::now();

    let first = queue.add_at(Snackbar::success("Saved").unwrap(), now);
    let second = queue.add_at(Snackbar::success("Saved").unwrap(), now);

    assert!(matches!(first, AddOutcome::Inserted(_)));
    assert!(matches!(second, AddOutcome::Refreshed(_)));
    assert_eq!(queue.len(), 1);
}

#[test]
fn sixth_distinct_snackbar_evicts_the_first() {
    let mut queue = queue(4000);
    let now = Instant::now();

    let mut outcomes = Vec::new();
    for message in ["A", "B", "C", "D", "E", "F"] {
        outcomes.push(queue.add_at(Snackbar::info(message).unwrap(), now));
    }

    assert_eq!(messages(&queue), ["B", "C", "D", "E", "F"]);
    match outcomes.last() {
        Some(AddOutcome::Evicted { evicted, .. }) => {
            assert_eq!(evicted, &Snackbar::info("A").unwrap().key());
        }
        other => panic!("expected eviction, got {:?}", other),
    }
}

#[test]
fn same_message_with_different_kinds_are_distinct() {
    let mut queue = queue(4000);
    let now = Instant::now();

    for kind in SnackbarKind::ALL {
        queue.add_at(Snackbar::new(kind, "Disk full").unwrap(), now);
    }

    assert_eq!(queue.len(), SnackbarKind::ALL.len());
}

#[test]
fn snackbar_lives_exactly_its_lifetime() {
    let mut queue = queue(4000);
    let start = Instant::now();
    let snackbar = Snackbar::attention("Low battery").unwrap();
    let key = snackbar.key();
    queue.add_at(snackbar, start);

    assert!(queue
        .expire(start + Duration::from_millis(3999))
        .is_empty());
    assert!(queue.contains(&key));

    assert_eq!(
        queue.expire(start + Duration::from_millis(4000)),
        vec![key.clone()]
    );
    assert!(!queue.contains(&key));
}

#[test]
fn dismissed_snackbar_never_expires_later() {
    let mut queue = queue(1000);
    let start = Instant::now();
    let snackbar = Snackbar::failed("Upload failed").unwrap();
    let key = snackbar.key();
    queue.add_at(snackbar, start);

    assert!(queue.delete(&key));
    assert!(!queue.delete(&key));
    assert!(queue.expire(start + Duration::from_secs(10)).is_empty());
}

#[test]
fn re_adding_restarts_the_clock_in_place() {
    let mut queue = queue(1000);
    let start = Instant::now();
    queue.add_at(Snackbar::info("A").unwrap(), start);
    queue.add_at(Snackbar::info("B").unwrap(), start);
    queue.add_at(
        Snackbar::info("A").unwrap(),
        start + Duration::from_millis(800),
    );

    let expired = queue.expire(start + Duration::from_millis(1000));

    assert_eq!(expired, vec![Snackbar::info("B").unwrap().key()]);
    assert_eq!(messages(&queue), ["A"]);
}

#[test]
fn invalid_snackbars_are_rejected() {
    assert_eq!(
        Snackbar::parse("warning", "Hi"),
        Err(Error::Snackbar(SnackbarError::UnknownKind(
            "warning".to_string()
        )))
    );
    assert_eq!(
        Snackbar::info("   "),
        Err(Error::Snackbar(SnackbarError::EmptyMessage))
    );
}

#[test]
fn modal_dismisses_only_outside_presses() {
    let surface = Rectangle::new(Point::new(200.0, 150.0), Size::new(360.0, 240.0));
    let anchor = Anchor::new();
    anchor.record(Rectangle::new(Point::new(8.0, 8.0), Size::new(90.0, 44.0)));

    let toggler = anchor.bounds();

    assert_eq!(
        dismiss::classify(Point::new(300.0, 200.0), surface, toggler),
        PointerTarget::Surface
    );
    assert_eq!(
        dismiss::classify(Point::new(20.0, 20.0), surface, toggler),
        PointerTarget::Toggler
    );
    assert!(dismiss::should_dismiss(
        Point::new(700.0, 500.0),
        surface,
        toggler
    ));
}

#[test]
fn config_round_trip_drives_queue_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let config = Config {
        general: GeneralConfig {
            theme_mode: ThemeMode::Dark,
        },
        snackbar: SnackbarConfig {
            capacity: Some(2),
            lifetime_ms: Some(1500),
        },
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    let mut queue = SnackbarQueue::new(loaded.snackbar.settings());
    assert_eq!(queue.capacity().get(), 2);
    assert_eq!(queue.lifetime(), Duration::from_millis(1500));

    let now = Instant::now();
    for message in ["A", "B", "C"] {
        queue.add_at(Snackbar::info(message).unwrap(), now);
    }
    assert_eq!(messages(&queue), ["B", "C"]);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn corrupt_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[snackbar\ncapacity = ")
        .expect("Failed to write corrupt config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_WARNING));
}
