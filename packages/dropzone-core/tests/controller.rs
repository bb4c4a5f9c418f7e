use dropzone_core::*;
use pretty_assertions::assert_eq;

fn controller() -> UploadController<SelectedFile> {
    UploadController::new(&UploadConfig::default())
}

fn photo() -> SelectedFile {
    SelectedFile::new("street.png", 1536, "image/png")
}

fn clip() -> SelectedFile {
    SelectedFile::new("traffic.mp4", 1048576, "video/mp4")
}

#[test]
fn submit_is_disabled_until_a_file_is_chosen() {
    let mut form = controller();
    assert_eq!(
        form.ui(),
        UiState {
            highlighted: false,
            preview_visible: false,
            submit_enabled: false,
            submit_label: "Upload".to_string(),
            loading: false,
        }
    );

    form.select(Some(clip()));
    let ui = form.ui();
    assert!(ui.submit_enabled);
    assert!(ui.preview_visible);
    assert_eq!(form.selected().map(|f| f.display_size()).as_deref(), Some("1 MB"));
}

#[test]
fn empty_selection_changes_nothing() {
    let mut form = controller();
    assert!(form.select(None).is_none());
    assert_eq!(form.selected(), None);

    form.select(Some(clip()));
    let before = form.ui();
    assert!(form.select(None).is_none());
    assert_eq!(form.ui(), before);
    assert_eq!(form.selected(), Some(&clip()));
}

#[test]
fn drag_highlights_and_empty_drop_keeps_submit_state() {
    let mut form = controller();
    form.set_highlighted(true);
    assert!(form.ui().highlighted);

    assert!(form.drop_files(Vec::new()).is_none());
    let ui = form.ui();
    assert!(!ui.highlighted);
    assert!(!ui.submit_enabled);

    form.select(Some(clip()));
    form.set_highlighted(true);
    form.drop_files(Vec::new());
    assert!(form.ui().submit_enabled);
    assert!(!form.ui().highlighted);
}

#[test]
fn drop_uses_only_the_first_file() {
    let mut form = controller();
    form.drop_files(vec![clip(), photo()]);
    assert_eq!(form.selected(), Some(&clip()));
    assert_eq!(form.preview(), &Preview::Unavailable);
}

#[test]
fn non_image_gets_placeholder_synchronously() {
    let mut form = controller();
    assert!(form.select(Some(clip())).is_none());
    assert_eq!(form.preview(), &Preview::Unavailable);
    assert_eq!(PREVIEW_UNAVAILABLE, "Video preview not available");
}

#[test]
fn image_preview_arrives_after_read() {
    let mut form = controller();
    let request = form.select(Some(photo())).expect("images are read");
    assert_eq!(form.preview(), &Preview::Loading);

    let url = request.encode(b"png");
    assert!(form.finish_preview(request.ticket, Ok(url.clone())));
    assert_eq!(form.preview(), &Preview::Image { data_url: url });
}

#[test]
fn stale_preview_is_discarded() {
    let mut form = controller();
    let first = form.select(Some(photo())).unwrap();
    let second = form
        .select(Some(SelectedFile::new("other.jpg", 10, "image/jpeg")))
        .unwrap();

    assert!(form.finish_preview(second.ticket, Ok(second.encode(b"new"))));
    assert!(!form.finish_preview(first.ticket, Ok(first.encode(b"old"))));

    assert_eq!(
        form.preview(),
        &Preview::Image {
            data_url: data_url("image/jpeg", b"new")
        }
    );
}

#[test]
fn stale_preview_cannot_overwrite_placeholder() {
    let mut form = controller();
    let pending = form.select(Some(photo())).unwrap();
    form.select(Some(clip()));

    assert!(!form.finish_preview(pending.ticket, Ok(pending.encode(b"late"))));
    assert_eq!(form.preview(), &Preview::Unavailable);
}

#[test]
fn failed_read_clears_preview_silently() {
    let mut form = controller();
    let request = form.select(Some(photo())).unwrap();
    assert!(form.finish_preview(request.ticket, Err(read_error("street.png", "denied"))));
    assert_eq!(form.preview(), &Preview::Empty);
    assert!(form.ui().submit_enabled);
}

#[test]
fn submit_enters_processing_even_without_a_file() {
    let mut form = controller();
    let submission = form.begin_submit().expect("first submit starts");
    assert!(submission.file.is_none());

    let ui = form.ui();
    assert_eq!(ui.submit_label, PROCESSING_LABEL);
    assert_eq!(ui.submit_label, "Processing...");
    assert!(!ui.submit_enabled);
    assert!(ui.loading);
}

#[test]
fn submit_carries_the_selected_file_and_ignores_repeats() {
    let mut form = controller();
    form.select(Some(clip()));
    form.set_highlighted(true);

    let submission = form.begin_submit().unwrap();
    assert_eq!(submission.file, Some(clip()));
    assert!(!form.ui().highlighted);

    assert!(form.begin_submit().is_none());
    assert!(form.select(Some(photo())).is_none());
    assert_eq!(form.selected(), Some(&clip()));
}

#[test]
fn successful_upload_completes() {
    let mut form = controller();
    form.select(Some(clip()));
    form.begin_submit();
    form.finish_submit(Ok(Receipt {
        status: 200,
        body: "<h1>Done</h1>".to_string(),
    }));

    assert_eq!(
        form.phase(),
        &Phase::Completed {
            status: 200,
            body: "<h1>Done</h1>".to_string()
        }
    );
    let ui = form.ui();
    assert!(!ui.loading);
    assert!(!ui.submit_enabled);
    assert_eq!(ui.submit_label, "Upload");
}

#[test]
fn failed_upload_rolls_back() {
    let mut form = controller();
    form.select(Some(clip()));
    form.begin_submit();
    form.finish_submit(Err(Error::Rejected {
        status: 400,
        body: "File type not allowed".to_string(),
    }));

    assert_eq!(
        form.phase(),
        &Phase::Failed {
            message: "File type not allowed".to_string()
        }
    );
    let ui = form.ui();
    assert!(ui.submit_enabled);
    assert!(!ui.loading);

    // Picking again clears the failure.
    form.select(Some(photo()));
    assert_eq!(form.phase(), &Phase::Idle);
}

#[test]
fn transport_failure_message() {
    let mut form = controller();
    form.begin_submit();
    form.finish_submit(Err(Error::Transport("connection refused".to_string())));
    assert_eq!(
        form.phase(),
        &Phase::Failed {
            message: "Upload failed: connection refused".to_string()
        }
    );
    assert!(!form.ui().submit_enabled);
}

#[test]
fn late_upload_result_is_ignored_outside_submitting() {
    let mut form = controller();
    form.finish_submit(Ok(Receipt {
        status: 200,
        body: String::new(),
    }));
    assert_eq!(form.phase(), &Phase::Idle);
}

#[test]
fn custom_label_comes_from_config() {
    let mut cfg = UploadConfig::default();
    cfg.submit_label("Detect Objects");
    let form: UploadController<SelectedFile> = UploadController::new(&cfg);
    assert_eq!(form.ui().submit_label, "Detect Objects");
}
