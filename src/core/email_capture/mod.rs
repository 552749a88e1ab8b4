//! Email capture: show-once modal gating and the subscribe contract.

mod controller;
mod error;
mod flags;
mod subscribe;

pub use controller::{
    AUTO_CLOSE_DELAY, CaptureCommand, CaptureTiming, ClickTarget, EmailCaptureController,
    FormState, ModalState, REVEAL_DELAY, RevealTrigger, SCROLL_THRESHOLD,
};
pub use error::{CaptureError, SUBSCRIBE_FALLBACK_MESSAGE};
pub use flags::{CaptureFlag, CaptureFlags, CaptureGate, FLAG_SET_VALUE, is_flag_value};
pub use subscribe::{
    SUBSCRIBE_PATH, SubscribeErrorBody, SubscribeRequest, interpret_response, subscribe_url,
};
