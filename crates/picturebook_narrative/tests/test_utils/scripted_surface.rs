//! Approval surface answering from a script.

use picturebook_error::{PicturebookResult, SurfaceError};
use picturebook_interface::ApprovalSurface;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Answers text prompts and confirmations from queues and records what was shown.
///
/// Running out of scripted answers is a surface error, so a test that
/// loops more than expected fails instead of hanging.
#[derive(Default)]
pub struct ScriptedSurface {
    texts: Mutex<VecDeque<String>>,
    confirms: Mutex<VecDeque<bool>>,
    prompts: Mutex<Vec<String>>,
    shown: Mutex<Vec<(String, String)>>,
    questions: Mutex<Vec<String>>,
}

impl ScriptedSurface {
    /// Script text answers and yes/no answers.
    pub fn new<I, T, C>(texts: I, confirms: C) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
        C: IntoIterator<Item = bool>,
    {
        Self {
            texts: Mutex::new(texts.into_iter().map(Into::into).collect()),
            confirms: Mutex::new(confirms.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Labels of text prompts, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// `(label, text)` pairs shown, in order.
    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().unwrap().clone()
    }

    /// Yes/no questions asked, in order.
    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl ApprovalSurface for ScriptedSurface {
    fn prompt_text(&self, label: &str) -> PicturebookResult<String> {
        self.prompts.lock().unwrap().push(label.to_string());
        self.texts
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SurfaceError::new("no scripted text left").into())
    }

    fn show(&self, label: &str, text: &str) -> PicturebookResult<()> {
        self.shown
            .lock()
            .unwrap()
            .push((label.to_string(), text.to_string()));
        Ok(())
    }

    fn confirm(&self, label: &str) -> PicturebookResult<bool> {
        self.questions.lock().unwrap().push(label.to_string());
        self.confirms
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SurfaceError::new("no scripted answer left").into())
    }
}
