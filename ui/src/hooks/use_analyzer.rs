use crate::controller::submit_for_analysis;
use crate::controller::UploadAnalysisController;
use crate::preview::PlatformPreviewStore;
use api::HttpAnalysisService;
use api::ImageUpload;
use dioxus::html::FileData;
use dioxus::prelude::*;

pub type AnalyzerController = UploadAnalysisController<PlatformPreviewStore>;

/// Handle to the analyzer state of the screen that called [`use_analyzer`].
#[derive(Clone, Copy)]
pub struct Analyzer {
    controller: Signal<AnalyzerController>,
}

impl Analyzer {
    /// Returns the signal holding the controller.
    /// Call .read() on this in a component to subscribe to changes.
    pub fn controller(&self) -> Signal<AnalyzerController> {
        self.controller
    }

    /// Stages a file coming from the file input or a drop.
    ///
    /// Files that are not images are refused before their content is read.
    /// When reads overlap, only the file picked last is staged.
    pub fn select_file(&self, file: FileData) {
        let mut controller = self.controller;
        let probe = ImageUpload::new(file.name(), file.content_type().unwrap_or_default(), Vec::new());
        if !probe.is_image() {
            let _ = controller.write().select_image(probe);
            return;
        }

        let pending = controller.write().begin_selection();
        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    let upload = ImageUpload::new(probe.file_name(), probe.mime_type(), bytes.to_vec());
                    let _ = controller.write().finish_selection(pending, upload);
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("could not read {}: {}", probe.file_name(), e);
                    controller.write().fail_selection(pending);
                }
            }
        });
    }

    pub fn clear(&self) {
        let mut controller = self.controller;
        controller.write().clear_image();
    }

    /// Starts a submission in the background.
    ///
    /// The task belongs to the calling component's scope, so unmounting the
    /// screen cancels the request and any pending fallback timer with it.
    pub fn submit(&self) {
        let mut controller = self.controller;
        if !controller.peek().can_submit() {
            return;
        }
        spawn(async move {
            let service = HttpAnalysisService::default();
            submit_for_analysis(&mut controller, &service).await;
        });
    }
}

pub fn use_analyzer() -> Analyzer {
    let controller = use_signal(|| UploadAnalysisController::new(PlatformPreviewStore::default()));
    Analyzer { controller }
}
