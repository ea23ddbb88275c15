//! The state machine behind the analyzer screen.
//!
//! Everything the screen shows is derived from an [`UploadAnalysisController`].
//! It is plain data with synchronous transitions so it can be driven without a
//! renderer; [`submit_for_analysis`] strings the transitions together around
//! the network call and the fallback timer.

use crate::compat;
use crate::preview::PreviewStore;
use crate::preview::PreviewUrl;
use crate::request_state::AnalyzerError;
use crate::request_state::RequestState;
use api::AnalysisResult;
use api::AnalysisService;
use api::AnalyzeError;
use api::ImageUpload;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use std::marker::PhantomData;
use std::time::Duration;

/// How long the loading state lingers before the demo result is shown.
pub const FALLBACK_DELAY: Duration = Duration::from_millis(1500);

/// The image currently staged for upload, together with its preview.
#[derive(Debug)]
pub struct SelectedImage {
    upload: ImageUpload,
    preview: PreviewUrl,
}

impl SelectedImage {
    pub fn upload(&self) -> &ImageUpload {
        &self.upload
    }

    pub fn preview_url(&self) -> &str {
        self.preview.as_str()
    }
}

/// What the caller must do after a request settled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Settled {
    /// The state is final.
    Done,
    /// Wait this long, then call [`UploadAnalysisController::complete_fallback`].
    FallbackAfter(Duration),
}

/// A file read started by [`UploadAnalysisController::begin_selection`].
///
/// Only the most recent pick may stage its image once the read finishes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PendingSelection(u64);

pub struct UploadAnalysisController<P: PreviewStore> {
    previews: P,
    selected: Option<SelectedImage>,
    request: RequestState,
    selection_seq: u64,
}

impl<P: PreviewStore> UploadAnalysisController<P> {
    pub fn new(previews: P) -> Self {
        Self {
            previews,
            selected: None,
            request: RequestState::Idle,
            selection_seq: 0,
        }
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn is_in_flight(&self) -> bool {
        self.request.is_in_flight()
    }

    pub fn error(&self) -> Option<AnalyzerError> {
        self.request.error()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.request.result()
    }

    /// Whether the analyze button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_in_flight()
    }

    pub fn previews(&self) -> &P {
        &self.previews
    }

    /// Stages `candidate` for upload.
    ///
    /// Anything that is not an `image/*` is refused and the previously staged
    /// image, if any, stays as it was.
    pub fn select_image(&mut self, candidate: ImageUpload) -> Result<(), AnalyzerError> {
        self.selection_seq += 1;
        self.stage(candidate)
    }

    /// Records that the user picked a file whose content is still being read.
    ///
    /// Any read started earlier becomes stale.
    pub fn begin_selection(&mut self) -> PendingSelection {
        self.selection_seq += 1;
        PendingSelection(self.selection_seq)
    }

    fn is_current(&self, pending: PendingSelection) -> bool {
        pending.0 == self.selection_seq
    }

    /// Like [`Self::select_image`] for a read started by
    /// [`Self::begin_selection`]. Returns `None`, changing nothing, when a
    /// later pick superseded it.
    pub fn finish_selection(
        &mut self,
        pending: PendingSelection,
        candidate: ImageUpload,
    ) -> Option<Result<(), AnalyzerError>> {
        if !self.is_current(pending) {
            debug!("dropping stale read of {}", candidate.file_name());
            return None;
        }
        Some(self.stage(candidate))
    }

    /// Fails a pending read, unless a later pick superseded it.
    pub fn fail_selection(&mut self, pending: PendingSelection) -> Option<AnalyzerError> {
        if !self.is_current(pending) {
            return None;
        }
        Some(self.reject_selection())
    }

    fn stage(&mut self, candidate: ImageUpload) -> Result<(), AnalyzerError> {
        if !candidate.is_image() {
            info!("rejected {:?}: not an image", candidate);
            return Err(self.reject_selection());
        }

        let preview = match self.previews.create(&candidate) {
            Ok(preview) => preview,
            Err(e) => {
                warn!("rejected {:?}: {}", candidate, e);
                return Err(self.reject_selection());
            }
        };

        info!("selected {:?}", candidate);
        self.release_selected();
        self.selected = Some(SelectedImage {
            upload: candidate,
            preview,
        });

        // Prior error and result go away; an outstanding request keeps running.
        self.request = match &self.request {
            RequestState::InFlight { .. } => RequestState::InFlight { notice: None },
            _ => RequestState::Idle,
        };
        Ok(())
    }

    /// Shows the invalid file error without touching the staged image.
    pub fn reject_selection(&mut self) -> AnalyzerError {
        let err = AnalyzerError::InvalidFileType;
        self.request = match &self.request {
            RequestState::InFlight { .. } => RequestState::InFlight { notice: Some(err) },
            _ => RequestState::Failed(err),
        };
        err
    }

    /// Unstages the image. Result and error are left alone.
    ///
    /// Reads still pending are dropped as well.
    pub fn clear_image(&mut self) {
        self.selection_seq += 1;
        self.release_selected();
    }

    fn release_selected(&mut self) {
        if let Some(selected) = self.selected.take() {
            debug!("releasing preview of {}", selected.upload.file_name());
            self.previews.release(selected.preview);
        }
    }

    /// Moves to in-flight and returns the image to upload.
    ///
    /// Returns `None`, changing nothing, when no image is staged or a
    /// submission is already outstanding.
    pub fn begin_submission(&mut self) -> Option<ImageUpload> {
        if self.is_in_flight() {
            warn!("submission rejected: a request is already in flight");
            return None;
        }
        let upload = self.selected.as_ref()?.upload.clone();
        info!("submitting {:?}", upload);
        self.request = RequestState::InFlight { notice: None };
        Some(upload)
    }

    /// Applies the outcome of the request started by [`Self::begin_submission`].
    pub fn settle(&mut self, outcome: Result<AnalysisResult, AnalyzeError>) -> Settled {
        if !self.is_in_flight() {
            warn!("ignoring response: no request in flight");
            return Settled::Done;
        }

        match outcome {
            Ok(result) => {
                info!("analysis succeeded");
                self.request = RequestState::Succeeded {
                    result,
                    notice: None,
                };
            }
            Err(e) => {
                warn!("analysis failed, falling back to demo data: {}", e);
                // The loading state is kept on purpose; only the deferred
                // transition ends it.
                self.request = RequestState::InFlight {
                    notice: Some(AnalyzerError::ServiceUnreachable),
                };
            }
        }

        // Cleanup that only ends the request when no error is showing.
        match self.request.error() {
            None => Settled::Done,
            Some(_) => Settled::FallbackAfter(FALLBACK_DELAY),
        }
    }

    /// The deferred half of the fallback: shows the demo result.
    ///
    /// Returns `false` if there was no longer a request to complete.
    pub fn complete_fallback(&mut self) -> bool {
        let RequestState::InFlight { notice } = &self.request else {
            debug!("fallback fired with nothing in flight");
            return false;
        };
        info!("showing demo result");
        self.request = RequestState::Succeeded {
            result: AnalysisResult::demo(),
            notice: *notice,
        };
        true
    }

    /// Ends a submission whose request or fallback wait was cancelled.
    ///
    /// A notice already showing is kept as the error; otherwise the state
    /// goes back to idle.
    pub fn abandon_submission(&mut self) {
        let RequestState::InFlight { notice } = &self.request else {
            return;
        };
        info!("submission abandoned");
        self.request = match notice {
            Some(err) => RequestState::Failed(*err),
            None => RequestState::Idle,
        };
    }
}

impl<P: PreviewStore> Drop for UploadAnalysisController<P> {
    fn drop(&mut self) {
        self.release_selected();
    }
}

/// Somewhere a controller lives that can be briefly borrowed mutably, such as
/// a `Signal`.
pub trait ControllerCell<P: PreviewStore> {
    fn update<R>(&mut self, f: impl FnOnce(&mut UploadAnalysisController<P>) -> R) -> R;

    /// Like [`Self::update`], but does nothing if the controller is already
    /// gone. Used from destructors.
    fn update_if_alive(&mut self, f: impl FnOnce(&mut UploadAnalysisController<P>)) {
        self.update(f);
    }
}

impl<P: PreviewStore + 'static> ControllerCell<P> for Signal<UploadAnalysisController<P>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut UploadAnalysisController<P>) -> R) -> R {
        f(&mut *self.write())
    }

    // The owning scope may drop the signal before the task holding it.
    fn update_if_alive(&mut self, f: impl FnOnce(&mut UploadAnalysisController<P>)) {
        if let Ok(mut controller) = self.try_write() {
            f(&mut *controller);
        }
    }
}

/// Abandons the submission unless it was marked finished before being dropped.
struct OutstandingSubmission<'a, P: PreviewStore, C: ControllerCell<P>> {
    cell: &'a mut C,
    finished: bool,
    _previews: PhantomData<P>,
}

impl<'a, P: PreviewStore, C: ControllerCell<P>> OutstandingSubmission<'a, P, C> {
    fn new(cell: &'a mut C) -> Self {
        Self {
            cell,
            finished: false,
            _previews: PhantomData,
        }
    }
}

impl<P: PreviewStore, C: ControllerCell<P>> Drop for OutstandingSubmission<'_, P, C> {
    fn drop(&mut self) {
        if !self.finished {
            self.cell.update_if_alive(|c| c.abandon_submission());
        }
    }
}

/// Submits the staged image and sees the request through to a final state,
/// including the fallback wait.
///
/// The borrow of the controller is never held across an await. Dropping the
/// returned future cancels whatever is still pending, the fallback timer
/// included, and takes the controller out of the in-flight state.
pub async fn submit_for_analysis<P, C, S>(cell: &mut C, service: &S)
where
    P: PreviewStore,
    C: ControllerCell<P>,
    S: AnalysisService,
{
    let Some(upload) = cell.update(|c| c.begin_submission()) else {
        return;
    };
    let mut pending = OutstandingSubmission::new(cell);

    let outcome = service.analyze(&upload).await;

    if let Settled::FallbackAfter(delay) = pending.cell.update(|c| c.settle(outcome)) {
        compat::sleep(delay).await;
        pending.cell.update(|c| c.complete_fallback());
    }
    pending.finished = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    /// Hands out numbered previews and remembers what happened to them.
    #[derive(Default)]
    struct CountingPreviews {
        created: usize,
        released: Vec<String>,
    }

    impl PreviewStore for CountingPreviews {
        fn create(&mut self, _image: &ImageUpload) -> Result<PreviewUrl, crate::preview::PreviewError> {
            self.created += 1;
            Ok(PreviewUrl::new(format!("blob:{}", self.created)))
        }

        fn release(&mut self, preview: PreviewUrl) {
            self.released.push(preview.as_str().to_string());
        }
    }

    impl<P: PreviewStore> ControllerCell<P> for Rc<RefCell<UploadAnalysisController<P>>> {
        fn update<R>(&mut self, f: impl FnOnce(&mut UploadAnalysisController<P>) -> R) -> R {
            f(&mut *self.borrow_mut())
        }
    }

    /// Answers every request the same way and counts calls.
    struct FakeService {
        respond: fn() -> Result<AnalysisResult, AnalyzeError>,
        calls: Cell<usize>,
    }

    impl FakeService {
        fn new(respond: fn() -> Result<AnalysisResult, AnalyzeError>) -> Self {
            Self {
                respond,
                calls: Cell::new(0),
            }
        }
    }

    impl AnalysisService for FakeService {
        async fn analyze(&self, image: &ImageUpload) -> Result<AnalysisResult, AnalyzeError> {
            assert!(image.is_image());
            self.calls.set(self.calls.get() + 1);
            (self.respond)()
        }
    }

    fn ok_response() -> Result<AnalysisResult, AnalyzeError> {
        Ok(AnalysisResult::new(
            json!({"status": "success", "confidence": 0.9}),
        ))
    }

    fn down() -> Result<AnalysisResult, AnalyzeError> {
        Err(AnalyzeError::Status(502))
    }

    fn photo() -> ImageUpload {
        ImageUpload::new("photo.png", "image/png", vec![1, 2, 3])
    }

    fn text_file() -> ImageUpload {
        ImageUpload::new("notes.txt", "text/plain", b"hello".to_vec())
    }

    fn controller() -> UploadAnalysisController<CountingPreviews> {
        UploadAnalysisController::new(CountingPreviews::default())
    }

    #[test]
    fn non_image_is_rejected_and_keeps_prior_selection() {
        let mut ctl = controller();
        ctl.select_image(photo()).unwrap();

        assert_eq!(ctl.select_image(text_file()), Err(AnalyzerError::InvalidFileType));
        assert_eq!(ctl.error(), Some(AnalyzerError::InvalidFileType));
        assert_eq!(ctl.selected().unwrap().upload().file_name(), "photo.png");
        assert_eq!(ctl.selected().unwrap().preview_url(), "blob:1");
        assert_eq!(ctl.previews().created, 1);
        assert!(ctl.previews().released.is_empty());
    }

    #[test]
    fn invalid_file_creates_no_preview_and_nothing_to_submit() {
        let mut ctl = controller();
        assert!(ctl.select_image(text_file()).is_err());

        assert_eq!(
            ctl.error().map(|e| e.to_string()).as_deref(),
            Some("Please upload a valid image file.")
        );
        assert_eq!(ctl.previews().created, 0);
        assert!(ctl.begin_submission().is_none());
    }

    #[test]
    fn image_replaces_prior_preview_and_clears_result_and_error() {
        let mut ctl = controller();
        ctl.select_image(photo()).unwrap();
        ctl.begin_submission().unwrap();
        ctl.settle(ok_response());
        assert!(ctl.result().is_some());

        ctl.select_image(ImageUpload::new("second.jpg", "image/jpeg", vec![9]))
            .unwrap();

        assert_eq!(ctl.previews().released, vec!["blob:1".to_string()]);
        assert_eq!(ctl.selected().unwrap().preview_url(), "blob:2");
        assert_eq!(ctl.request(), &RequestState::Idle);
    }

    #[test]
    fn image_after_invalid_file_clears_error() {
        let mut ctl = controller();
        let _ = ctl.select_image(text_file());
        ctl.select_image(photo()).unwrap();
        assert_eq!(ctl.error(), None);
    }

    #[test]
    fn submit_without_image_is_a_noop() {
        let mut ctl = controller();
        assert!(ctl.begin_submission().is_none());
        assert_eq!(ctl.request(), &RequestState::Idle);

        let _ = ctl.select_image(text_file());
        let before = ctl.request().clone();
        assert!(ctl.begin_submission().is_none());
        assert_eq!(ctl.request(), &before);
    }

    #[test]
    fn second_submission_while_in_flight_is_rejected() {
        let mut ctl = controller();
        ctl.select_image(photo()).unwrap();
        assert!(ctl.begin_submission().is_some());
        assert!(!ctl.can_submit());

        assert!(ctl.begin_submission().is_none());
        assert_eq!(ctl.request(), &RequestState::InFlight { notice: None });
    }

    #[test]
    fn failure_keeps_loading_state_until_fallback_completes() {
        let mut ctl = controller();
        ctl.select_image(photo()).unwrap();
        ctl.begin_submission().unwrap();

        assert_eq!(ctl.settle(down()), Settled::FallbackAfter(FALLBACK_DELAY));
        assert!(ctl.is_in_flight());
        assert_eq!(ctl.error(), Some(AnalyzerError::ServiceUnreachable));
        assert!(ctl.result().is_none());

        assert!(ctl.complete_fallback());
        assert!(!ctl.is_in_flight());
        assert_eq!(ctl.result(), Some(&AnalysisResult::demo()));
        assert_eq!(ctl.error(), Some(AnalyzerError::ServiceUnreachable));
    }

    #[test]
    fn late_fallback_is_ignored() {
        let mut ctl = controller();
        ctl.select_image(photo()).unwrap();
        ctl.begin_submission().unwrap();
        ctl.settle(ok_response());

        assert!(!ctl.complete_fallback());
        assert_eq!(
            ctl.result().unwrap().value(),
            &json!({"status": "success", "confidence": 0.9})
        );
    }

    #[test]
    fn invalid_file_during_request_does_not_end_it() {
        let mut ctl = controller();
        ctl.select_image(photo()).unwrap();
        ctl.begin_submission().unwrap();

        let _ = ctl.select_image(text_file());
        assert!(ctl.is_in_flight());
        assert_eq!(ctl.error(), Some(AnalyzerError::InvalidFileType));

        assert_eq!(ctl.settle(ok_response()), Settled::Done);
        assert_eq!(ctl.error(), None);
    }

    #[test]
    fn clear_image_releases_preview_but_keeps_result() {
        let mut ctl = controller();
        ctl.select_image(photo()).unwrap();
        ctl.begin_submission().unwrap();
        ctl.settle(ok_response());

        ctl.clear_image();
        assert!(ctl.selected().is_none());
        assert_eq!(ctl.previews().released, vec!["blob:1".to_string()]);
        assert!(ctl.result().is_some());

        ctl.clear_image();
        assert_eq!(ctl.previews().released.len(), 1);
    }

    #[test]
    fn previews_created_equal_released_plus_active() {
        let mut ctl = controller();
        let files = [
            photo(),
            text_file(),
            ImageUpload::new("b.gif", "image/gif", vec![]),
            text_file(),
            ImageUpload::new("c.webp", "", vec![]),
            ImageUpload::new("d.bin", "", vec![]),
            photo(),
        ];
        for (i, file) in files.into_iter().enumerate() {
            let _ = ctl.select_image(file);
            if i == 3 {
                ctl.clear_image();
            }
            let p = ctl.previews();
            let active = usize::from(ctl.selected().is_some());
            assert_eq!(p.created, p.released.len() + active);
            let unique: HashSet<_> = p.released.iter().collect();
            assert_eq!(unique.len(), p.released.len(), "released twice");
        }
    }

    #[test]
    fn dropping_controller_releases_active_preview() {
        let released = Rc::new(RefCell::new(Vec::new()));

        struct Shared(Rc<RefCell<Vec<String>>>);
        impl PreviewStore for Shared {
            fn create(&mut self, _: &ImageUpload) -> Result<PreviewUrl, crate::preview::PreviewError> {
                Ok(PreviewUrl::new("blob:only"))
            }
            fn release(&mut self, preview: PreviewUrl) {
                self.0.borrow_mut().push(preview.as_str().to_string());
            }
        }

        let mut ctl = UploadAnalysisController::new(Shared(released.clone()));
        ctl.select_image(photo()).unwrap();
        drop(ctl);
        assert_eq!(*released.borrow(), vec!["blob:only".to_string()]);
    }

    #[tokio::test]
    async fn happy_path_ends_in_success() {
        let mut cell = Rc::new(RefCell::new(controller()));
        cell.borrow_mut().select_image(photo()).unwrap();
        let service = FakeService::new(ok_response);

        submit_for_analysis(&mut cell, &service).await;

        let ctl = cell.borrow();
        assert_eq!(service.calls.get(), 1);
        assert!(!ctl.is_in_flight());
        assert_eq!(ctl.error(), None);
        assert_eq!(
            ctl.result().unwrap().value(),
            &json!({"status": "success", "confidence": 0.9})
        );
    }

    #[tokio::test]
    async fn no_request_is_issued_without_an_image() {
        let mut cell = Rc::new(RefCell::new(controller()));
        let _ = cell.borrow_mut().select_image(text_file());
        let service = FakeService::new(ok_response);

        submit_for_analysis(&mut cell, &service).await;
        assert_eq!(service.calls.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_path_shows_demo_after_delay() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let cell = Rc::new(RefCell::new(controller()));
                cell.borrow_mut().select_image(photo()).unwrap();

                let mut task_cell = cell.clone();
                let started = tokio::time::Instant::now();
                tokio::task::spawn_local(async move {
                    submit_for_analysis(&mut task_cell, &FakeService::new(down)).await;
                });

                tokio::time::sleep(Duration::from_millis(10)).await;
                {
                    let ctl = cell.borrow();
                    assert_eq!(ctl.error(), Some(AnalyzerError::ServiceUnreachable));
                    assert!(ctl.is_in_flight());
                    assert!(ctl.result().is_none());
                }

                tokio::time::sleep(FALLBACK_DELAY).await;
                let ctl = cell.borrow();
                assert!(started.elapsed() >= FALLBACK_DELAY);
                assert!(!ctl.is_in_flight());
                assert_eq!(ctl.result(), Some(&AnalysisResult::demo()));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_fallback_never_shows_demo_and_unblocks_submit() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let cell = Rc::new(RefCell::new(controller()));
                cell.borrow_mut().select_image(photo()).unwrap();

                let mut task_cell = cell.clone();
                let handle = tokio::task::spawn_local(async move {
                    submit_for_analysis(&mut task_cell, &FakeService::new(down)).await;
                });

                tokio::time::sleep(Duration::from_millis(10)).await;
                handle.abort();

                let _ = handle.await;

                tokio::time::sleep(FALLBACK_DELAY * 2).await;
                let mut ctl = cell.borrow_mut();
                assert!(ctl.result().is_none());
                assert!(!ctl.is_in_flight());
                assert_eq!(
                    ctl.request(),
                    &RequestState::Failed(AnalyzerError::ServiceUnreachable)
                );
                assert!(ctl.can_submit());
                assert!(ctl.begin_submission().is_some());
            })
            .await;
    }

    /// Never answers, like a request still on the wire.
    struct SilentService;

    impl AnalysisService for SilentService {
        async fn analyze(&self, _image: &ImageUpload) -> Result<AnalysisResult, AnalyzeError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_request_returns_to_idle() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let cell = Rc::new(RefCell::new(controller()));
                cell.borrow_mut().select_image(photo()).unwrap();

                let mut task_cell = cell.clone();
                let handle = tokio::task::spawn_local(async move {
                    submit_for_analysis(&mut task_cell, &SilentService).await;
                });

                tokio::time::sleep(Duration::from_millis(10)).await;
                assert!(cell.borrow().is_in_flight());

                handle.abort();
                let _ = handle.await;

                let ctl = cell.borrow();
                assert_eq!(ctl.request(), &RequestState::Idle);
                assert!(ctl.can_submit());
            })
            .await;
    }

    #[test]
    fn abandon_outside_a_submission_changes_nothing() {
        let mut ctl = controller();
        ctl.select_image(photo()).unwrap();
        ctl.begin_submission().unwrap();
        ctl.settle(ok_response());

        let before = ctl.request().clone();
        ctl.abandon_submission();
        assert_eq!(ctl.request(), &before);
    }

    /// Fails every preview after the first.
    #[derive(Default)]
    struct FirstPreviewOnly {
        created: usize,
        released: usize,
    }

    impl PreviewStore for FirstPreviewOnly {
        fn create(&mut self, _image: &ImageUpload) -> Result<PreviewUrl, crate::preview::PreviewError> {
            if self.created > 0 {
                return Err(crate::preview::PreviewError::Platform("out of memory".into()));
            }
            self.created += 1;
            Ok(PreviewUrl::new("blob:first"))
        }

        fn release(&mut self, _preview: PreviewUrl) {
            self.released += 1;
        }
    }

    #[test]
    fn preview_failure_is_an_invalid_file_and_keeps_prior_image() {
        let mut ctl = UploadAnalysisController::new(FirstPreviewOnly::default());
        ctl.select_image(photo()).unwrap();

        let second = ImageUpload::new("second.jpg", "image/jpeg", vec![9]);
        assert_eq!(ctl.select_image(second), Err(AnalyzerError::InvalidFileType));
        assert_eq!(ctl.error(), Some(AnalyzerError::InvalidFileType));
        assert_eq!(ctl.selected().unwrap().upload().file_name(), "photo.png");
        assert_eq!(ctl.selected().unwrap().preview_url(), "blob:first");
        assert_eq!(ctl.previews().released, 0);
    }

    #[test]
    fn valid_image_during_request_clears_notice_and_request_lands() {
        let mut ctl = controller();
        ctl.select_image(photo()).unwrap();
        ctl.begin_submission().unwrap();
        let _ = ctl.select_image(text_file());
        assert_eq!(ctl.error(), Some(AnalyzerError::InvalidFileType));

        ctl.select_image(ImageUpload::new("second.jpg", "image/jpeg", vec![9]))
            .unwrap();
        assert_eq!(ctl.request(), &RequestState::InFlight { notice: None });
        assert!(!ctl.can_submit());
        assert_eq!(ctl.previews().released, vec!["blob:1".to_string()]);

        assert_eq!(ctl.settle(ok_response()), Settled::Done);
        assert_eq!(
            ctl.result().unwrap().value(),
            &json!({"status": "success", "confidence": 0.9})
        );
        assert_eq!(ctl.selected().unwrap().upload().file_name(), "second.jpg");
    }

    #[test]
    fn last_pick_wins_when_reads_finish_out_of_order() {
        let mut ctl = controller();
        let large = ctl.begin_selection();
        let small = ctl.begin_selection();

        let small_file = ImageUpload::new("small.png", "image/png", vec![1]);
        assert_eq!(ctl.finish_selection(small, small_file), Some(Ok(())));

        let large_file = ImageUpload::new("large.png", "image/png", vec![0; 1024]);
        assert_eq!(ctl.finish_selection(large, large_file), None);
        assert_eq!(ctl.fail_selection(large), None);

        assert_eq!(ctl.selected().unwrap().upload().file_name(), "small.png");
        assert_eq!(ctl.previews().created, 1);
        assert!(ctl.previews().released.is_empty());
        assert_eq!(ctl.error(), None);
    }

    #[test]
    fn later_pick_or_clear_supersedes_pending_read() {
        let mut ctl = controller();
        let pending = ctl.begin_selection();
        let _ = ctl.select_image(text_file());
        assert_eq!(ctl.finish_selection(pending, photo()), None);
        assert!(ctl.selected().is_none());

        let pending = ctl.begin_selection();
        ctl.clear_image();
        assert_eq!(ctl.finish_selection(pending, photo()), None);
        assert!(ctl.selected().is_none());
        assert_eq!(ctl.previews().created, 0);
    }

    #[test]
    fn failed_read_of_latest_pick_is_an_invalid_file() {
        let mut ctl = controller();
        ctl.select_image(photo()).unwrap();
        let pending = ctl.begin_selection();

        assert_eq!(ctl.fail_selection(pending), Some(AnalyzerError::InvalidFileType));
        assert_eq!(ctl.selected().unwrap().upload().file_name(), "photo.png");
    }
}
