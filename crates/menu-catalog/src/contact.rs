//! Contact Form
//!
//! Form fields, the in-flight guard, and the response banner. The
//! submission itself is simulated by the caller (a timer plus a random
//! roll fed into [`simulate_outcome`]).

use serde::Serialize;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We will get back to you soon.";
pub const ERROR_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Submission failed")]
    Failed,
}

/// Decide a simulated submission from a uniform roll in `[0, 1)`
pub fn simulate_outcome(roll: f64, failure_rate: f64) -> Result<(), SubmitError> {
    if roll > failure_rate {
        Ok(())
    } else {
        Err(SubmitError::Failed)
    }
}

/// Payload captured at submit time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success-message",
            MessageKind::Error => "error-message",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMessage {
    pub kind: MessageKind,
    pub text: String,
    /// Cleared by the auto-hide timer; text stays for the fade out
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitting: bool,
    response: Option<ResponseMessage>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn response(&self) -> Option<&ResponseMessage> {
        self.response.as_ref()
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Enter the submitting state. `None` while a submission is in flight.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Leave the submitting state and show the response banner.
    /// Success clears the fields.
    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.response = Some(ResponseMessage {
                    kind: MessageKind::Success,
                    text: SUCCESS_MESSAGE.to_string(),
                    visible: true,
                });
            }
            Err(e) => {
                log::warn!("contact submission failed: {}", e);
                self.response = Some(ResponseMessage {
                    kind: MessageKind::Error,
                    text: ERROR_MESSAGE.to_string(),
                    visible: true,
                });
            }
        }
    }

    pub fn hide_message(&mut self) {
        if let Some(response) = self.response.as_mut() {
            response.visible = false;
        }
    }
}
