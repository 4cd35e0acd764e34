/// Output directory housekeeping: atomic saves, listing, deletion, cleanup.

use std::time::Duration as StdDuration;

use chrono::Duration;
use serde_json::json;

use deckhand::models::dispatch::{DispatchPolicy, generate};
use deckhand::models::error::GenerationError;
use deckhand::models::presentation::PresentationConfig;
use deckhand::models::theme::Brand;
use deckhand::scheduler::spawn_cleanup;
use deckhand::storage::{OutputDir, StorageError, generate_filename, validate_filename};
use deckhand::writer::PptxWriter;

mod common;
use common::{FailingWriter, dir_entries, fixed_now, instr, setup_output_dir};

fn save_one(out: &OutputDir, org: &str) -> String {
    generate(
        "corporate",
        &PresentationConfig::for_organisation(org),
        &[instr("createTitleSlide", json!(["a", "b"]))],
        DispatchPolicy::Strict,
        &PptxWriter::new(),
        out,
        fixed_now(),
    )
    .expect("generate")
    .filename
}

#[test]
fn test_filenames_are_unique_within_a_second() {
    let now = fixed_now();
    let a = generate_filename(Brand::Investment, "Acme Capital", now);
    let b = generate_filename(Brand::Investment, "Acme Capital", now);
    assert_ne!(a, b);
    assert!(a.starts_with("investment_Acme_Capital_20240315-093000_"));
    assert!(validate_filename(&a).is_ok());
}

#[test]
fn test_filename_organisation_is_sanitized() {
    let name = generate_filename(Brand::Corporate, "../../etc/passwd", fixed_now());
    assert!(!name.contains('/'));
    assert!(validate_filename(&name).is_ok());

    let empty = generate_filename(Brand::Corporate, "   ", fixed_now());
    assert!(empty.starts_with("corporate_corporate_"));

    let long = generate_filename(Brand::Corporate, &"x".repeat(200), fixed_now());
    assert!(long.len() < 100);
}

#[test]
fn test_validate_filename_rejects_unsafe_names() {
    for bad in ["../x.pptx", "a/b.pptx", "x.txt", ".x.pptx", "", ".pptx", "a\\b.pptx"] {
        assert!(validate_filename(bad).is_err(), "accepted {bad:?}");
    }
    assert!(validate_filename("deck.pptx").is_ok());
}

#[test]
fn test_failed_serialization_leaves_nothing_behind() {
    let (_dir, out) = setup_output_dir();
    let err = generate(
        "corporate",
        &PresentationConfig::default(),
        &[instr("createTitleSlide", json!(["a", "b"]))],
        DispatchPolicy::Strict,
        &FailingWriter,
        &out,
        fixed_now(),
    )
    .unwrap_err();

    assert!(matches!(err, GenerationError::Serialization(_)));
    assert_eq!(err.code(), "SerializationError");
    assert!(!err.is_client_error());
    assert!(dir_entries(&out).is_empty());
}

#[test]
fn test_list_and_delete() {
    let (_dir, out) = setup_output_dir();
    let first = save_one(&out, "One");
    let second = save_one(&out, "Two");
    std::fs::write(out.path().join("notes.txt"), "ignored").expect("write");

    let listed: Vec<String> = out.list().expect("list").into_iter().map(|f| f.filename).collect();
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&first));
    assert!(listed.contains(&second));
    assert_eq!(out.stats().expect("stats").presentation_count, 2);

    out.delete(&first).expect("delete");
    assert!(matches!(out.delete(&first), Err(StorageError::NotFound(_))));
    assert!(matches!(out.delete("../escape.pptx"), Err(StorageError::InvalidFilename(_))));
    assert_eq!(out.stats().expect("stats").presentation_count, 1);
}

#[test]
fn test_cleanup_uses_injected_clock() {
    let (_dir, out) = setup_output_dir();
    let name = save_one(&out, "Acme");
    let modified = out.list().expect("list")[0].modified;

    // Six days on, a seven day limit keeps the file.
    let kept = out.cleanup(Duration::days(7), modified + Duration::days(6)).expect("cleanup");
    assert_eq!(kept, 0);
    assert!(out.resolve(&name).is_ok());

    // Eight days on, it goes.
    let deleted = out.cleanup(Duration::days(7), modified + Duration::days(8)).expect("cleanup");
    assert_eq!(deleted, 1);
    assert!(matches!(out.resolve(&name), Err(StorageError::NotFound(_))));
}

#[test]
fn test_cleanup_with_out_of_range_age_keeps_everything() {
    let (_dir, out) = setup_output_dir();
    let name = save_one(&out, "Acme");

    let deleted = out.cleanup(Duration::days(4_000_000_000), fixed_now()).expect("cleanup");
    assert_eq!(deleted, 0);
    assert!(out.resolve(&name).is_ok());
}

/// Polls on the paused clock until the background task has emptied the
/// directory. Sleeping auto-advances virtual time only while the runtime is
/// idle, so each pass also waits for in-flight blocking work.
async fn wait_until_empty(out: &OutputDir) -> bool {
    for _ in 0..50 {
        if out.stats().expect("stats").presentation_count == 0 {
            return true;
        }
        tokio::time::sleep(StdDuration::from_millis(10)).await;
    }
    false
}

#[actix_web::test]
async fn test_scheduler_runs_cleanup_every_interval() {
    tokio::time::pause();
    let (_dir, out) = setup_output_dir();
    save_one(&out, "Stale");

    // A negative age puts the cutoff in the future, so every deck on disk
    // counts as expired no matter when the task runs.
    let every = StdDuration::from_secs(3600);
    spawn_cleanup(out.clone(), Duration::days(-1), every);
    assert!(wait_until_empty(&out).await, "first tick did not clean up");

    save_one(&out, "Later");
    assert_eq!(out.stats().expect("stats").presentation_count, 1);
    tokio::time::advance(every).await;
    assert!(wait_until_empty(&out).await, "second tick did not clean up");
}
