use std::io;

use thiserror::Error;

use crate::api::GenerateRequest;
use crate::selection::Selection;

use super::client::CaseStudySource;
use super::clipboard::Clipboard;

pub const INVALID_SELECTION_MESSAGE: &str =
    "Please select an industry or enter a custom brand type";
const CLIENT_FAILURE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Ready,
    Generating,
    Done { case_study: String },
    Failed { message: String },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StudioError {
    #[error("{}", INVALID_SELECTION_MESSAGE)]
    InvalidSelection,
    #[error("a case study is already being generated")]
    Busy,
}

/// Transient view state of one studio session.
#[derive(Debug, Clone)]
pub struct Studio {
    selection: Selection,
    view: ViewState,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

impl Studio {
    pub fn new() -> Self {
        Self {
            selection: Selection::None,
            view: ViewState::Idle,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn select_industry(&mut self, tag: &str) {
        self.selection = Selection::industry(tag);
        self.settle();
    }

    pub fn set_custom_brand(&mut self, text: &str) {
        self.selection = Selection::custom(text);
        self.settle();
    }

    // An in-flight request keeps running; its result still lands.
    fn settle(&mut self) {
        if self.view == ViewState::Generating {
            return;
        }
        self.view = if self.selection.is_none() {
            ViewState::Idle
        } else {
            ViewState::Ready
        };
    }

    pub fn is_generating(&self) -> bool {
        self.view == ViewState::Generating
    }

    pub fn can_generate(&self) -> bool {
        !self.is_generating() && !self.selection.is_none()
    }

    /// Moves to `Generating` and hands back the request to send.
    pub fn begin_generation(&mut self) -> Result<GenerateRequest, StudioError> {
        if self.is_generating() {
            return Err(StudioError::Busy);
        }
        if self.selection.is_none() {
            self.view = ViewState::Failed {
                message: INVALID_SELECTION_MESSAGE.to_string(),
            };
            return Err(StudioError::InvalidSelection);
        }
        self.view = ViewState::Generating;
        Ok(self.selection.to_request())
    }

    pub fn finish_generation(&mut self, outcome: Result<String, String>) {
        if !self.is_generating() {
            tracing::warn!("generation result arrived with no request in flight");
            return;
        }
        self.view = match outcome {
            Ok(case_study) => ViewState::Done { case_study },
            Err(message) if message.trim().is_empty() => ViewState::Failed {
                message: CLIENT_FAILURE.to_string(),
            },
            Err(message) => ViewState::Failed { message },
        };
    }

    pub async fn generate(&mut self, source: &dyn CaseStudySource) -> Result<(), StudioError> {
        let request = self.begin_generation()?;
        let outcome = source.generate(&request).await.map_err(|err| {
            tracing::debug!(error = %err, "case study request failed");
            err.to_string()
        });
        self.finish_generation(outcome);
        Ok(())
    }

    /// The displayed case study, if there is one to show.
    pub fn result(&self) -> Option<&str> {
        match &self.view {
            ViewState::Done { case_study } if !case_study.is_empty() => Some(case_study),
            _ => None,
        }
    }

    pub fn banner(&self) -> Option<&str> {
        match &self.view {
            ViewState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Copies the displayed result verbatim. Returns `false` when there is nothing to copy.
    pub fn copy_result(&self, clipboard: &mut dyn Clipboard) -> io::Result<bool> {
        match self.result() {
            Some(text) => {
                clipboard.set_text(text)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
