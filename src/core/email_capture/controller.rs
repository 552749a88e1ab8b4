//! Modal visibility controller for the email capture modal.
//!
//! The controller is a plain state machine. Browser events are fed in as
//! method calls and every side effect the host has to perform (timers,
//! scroll observer, storage writes, the network request) comes back as a
//! [`CaptureCommand`]. This keeps the gating logic testable without a DOM.
//!
//! ```text
//! Hidden --reveal--> VisibleForm --ok--> VisibleSuccess --auto close--> Hidden
//!                    VisibleForm --err--> VisibleForm
//!                    VisibleForm --dismiss--> Hidden
//! ```

use std::time::Duration;

use super::error::CaptureError;
use super::flags::{CaptureFlag, CaptureFlags, CaptureGate};
use super::subscribe::SubscribeRequest;

/// Delay before the timer trigger reveals the modal.
pub const REVEAL_DELAY: Duration = Duration::from_secs(10);
/// Vertical scroll offset (CSS pixels) the page must pass to reveal the modal.
pub const SCROLL_THRESHOLD: f64 = 500.0;
/// Delay between a successful subscription and the modal closing itself.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_secs(3);

/// Timing knobs for the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureTiming {
    pub reveal_delay: Duration,
    pub scroll_threshold: f64,
    pub auto_close_delay: Duration,
}

impl Default for CaptureTiming {
    fn default() -> Self {
        Self {
            reveal_delay: REVEAL_DELAY,
            scroll_threshold: SCROLL_THRESHOLD,
            auto_close_delay: AUTO_CLOSE_DELAY,
        }
    }
}

/// What the modal currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    VisibleForm,
    VisibleSuccess,
}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ModalState::Hidden)
    }
}

/// Which trigger won the reveal race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    Timer,
    Scroll,
}

impl RevealTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealTrigger::Timer => "timer",
            RevealTrigger::Scroll => "scroll",
        }
    }
}

/// Where a click inside the modal overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog.
    Backdrop,
    /// The dialog itself or anything inside it.
    Content,
}

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureCommand {
    StartRevealTimer(Duration),
    CancelRevealTimer,
    ObserveScroll { threshold: f64 },
    StopScrollObserver,
    Persist(CaptureFlag),
    Subscribe(SubscribeRequest),
    ScheduleAutoClose(Duration),
    CancelAutoClose,
}

/// Transient form data. Exists only while the modal is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub submitting: bool,
    pub submitted: bool,
    pub error: Option<CaptureError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Unmounted,
    Inert,
    Armed,
    TornDown,
}

/// Decides once per page lifetime whether to show the capture modal.
#[derive(Debug, Clone)]
pub struct EmailCaptureController {
    timing: CaptureTiming,
    lifecycle: Lifecycle,
    state: ModalState,
    form: Option<FormState>,
    revealed_by: Option<RevealTrigger>,
    reveal_timer_pending: bool,
    scroll_observed: bool,
    auto_close_pending: bool,
    /// A subscribe request is in flight. Outlives the form on dismiss.
    request_pending: bool,
}

impl Default for EmailCaptureController {
    fn default() -> Self {
        Self::new(CaptureTiming::default())
    }
}

impl EmailCaptureController {
    pub fn new(timing: CaptureTiming) -> Self {
        Self {
            timing,
            lifecycle: Lifecycle::Unmounted,
            state: ModalState::Hidden,
            form: None,
            revealed_by: None,
            reveal_timer_pending: false,
            scroll_observed: false,
            auto_close_pending: false,
            request_pending: false,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub fn revealed_by(&self) -> Option<RevealTrigger> {
        self.revealed_by
    }

    /// True once the persisted flags have switched the controller off.
    pub fn is_inert(&self) -> bool {
        self.lifecycle == Lifecycle::Inert
    }

    fn is_armed(&self) -> bool {
        self.lifecycle == Lifecycle::Armed
    }

    /// Arm the triggers unless a persisted flag says otherwise.
    ///
    /// With any flag set nothing is armed and no command is returned.
    pub fn mount(&mut self, flags: CaptureFlags) -> Vec<CaptureCommand> {
        if self.lifecycle != Lifecycle::Unmounted {
            return Vec::new();
        }
        if flags.gate() == CaptureGate::Inert {
            self.lifecycle = Lifecycle::Inert;
            return Vec::new();
        }

        self.lifecycle = Lifecycle::Armed;
        self.reveal_timer_pending = true;
        self.scroll_observed = true;
        vec![
            CaptureCommand::StartRevealTimer(self.timing.reveal_delay),
            CaptureCommand::ObserveScroll {
                threshold: self.timing.scroll_threshold,
            },
        ]
    }

    /// The one-shot reveal timer fired.
    pub fn reveal_timer_elapsed(&mut self) -> Vec<CaptureCommand> {
        if !self.is_armed() || !self.reveal_timer_pending {
            return Vec::new();
        }
        self.reveal_timer_pending = false;
        self.reveal(RevealTrigger::Timer)
    }

    /// The page scrolled to `offset_y`.
    pub fn scrolled(&mut self, offset_y: f64) -> Vec<CaptureCommand> {
        if !self.is_armed() || !self.scroll_observed {
            return Vec::new();
        }
        if offset_y <= self.timing.scroll_threshold {
            return Vec::new();
        }
        self.scroll_observed = false;
        let mut commands = vec![CaptureCommand::StopScrollObserver];
        commands.extend(self.reveal(RevealTrigger::Scroll));
        commands
    }

    /// First caller wins; later calls in the same page lifetime do nothing.
    fn reveal(&mut self, trigger: RevealTrigger) -> Vec<CaptureCommand> {
        if self.revealed_by.is_some() || self.state.is_visible() {
            return Vec::new();
        }
        self.revealed_by = Some(trigger);
        self.state = ModalState::VisibleForm;
        self.form = Some(FormState::default());

        let mut commands = vec![CaptureCommand::Persist(CaptureFlag::Seen)];
        if self.reveal_timer_pending {
            self.reveal_timer_pending = false;
            commands.push(CaptureCommand::CancelRevealTimer);
        }
        if self.scroll_observed {
            self.scroll_observed = false;
            commands.push(CaptureCommand::StopScrollObserver);
        }
        commands
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(form) = self.form.as_mut() {
            form.name = name.into();
            form.error = None;
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        if let Some(form) = self.form.as_mut() {
            form.email = email.into();
            form.error = None;
        }
    }

    /// Validate the form and request exactly one subscribe call.
    pub fn submit(&mut self) -> Vec<CaptureCommand> {
        if !self.is_armed() || self.state != ModalState::VisibleForm {
            return Vec::new();
        }
        let Some(form) = self.form.as_mut() else {
            return Vec::new();
        };
        if form.submitting || form.submitted {
            return Vec::new();
        }

        match SubscribeRequest::from_form(&form.name, &form.email) {
            Ok(request) => {
                form.submitting = true;
                form.error = None;
                self.request_pending = true;
                vec![CaptureCommand::Subscribe(request)]
            }
            Err(err) => {
                form.error = Some(err);
                Vec::new()
            }
        }
    }

    /// The subscribe call finished. Ignored unless a request is in flight.
    ///
    /// If the modal was dismissed meanwhile, a success is still remembered
    /// but nothing is shown.
    pub fn submission_finished(&mut self, result: Result<(), CaptureError>) -> Vec<CaptureCommand> {
        if !self.is_armed() || !self.request_pending {
            return Vec::new();
        }
        self.request_pending = false;

        let Some(form) = self.form.as_mut().filter(|f| f.submitting) else {
            return match result {
                Ok(()) => vec![CaptureCommand::Persist(CaptureFlag::Subscribed)],
                Err(_) => Vec::new(),
            };
        };
        form.submitting = false;

        match result {
            Ok(()) => {
                form.submitted = true;
                self.state = ModalState::VisibleSuccess;
                self.auto_close_pending = true;
                vec![
                    CaptureCommand::Persist(CaptureFlag::Subscribed),
                    CaptureCommand::ScheduleAutoClose(self.timing.auto_close_delay),
                ]
            }
            Err(err) => {
                form.error = Some(err);
                Vec::new()
            }
        }
    }

    /// The post-success timer fired.
    pub fn auto_close_elapsed(&mut self) -> Vec<CaptureCommand> {
        if !self.is_armed() || !self.auto_close_pending {
            return Vec::new();
        }
        self.auto_close_pending = false;
        if self.state == ModalState::VisibleSuccess {
            self.state = ModalState::Hidden;
            self.form = None;
        }
        Vec::new()
    }

    /// Close the modal on the visitor's request and remember the choice.
    pub fn dismiss(&mut self) -> Vec<CaptureCommand> {
        if !self.is_armed() || !self.state.is_visible() {
            return Vec::new();
        }
        self.state = ModalState::Hidden;
        self.form = None;

        let mut commands = vec![CaptureCommand::Persist(CaptureFlag::Dismissed)];
        if self.auto_close_pending {
            self.auto_close_pending = false;
            commands.push(CaptureCommand::CancelAutoClose);
        }
        commands
    }

    /// A click on the overlay. Only the backdrop dismisses.
    pub fn clicked(&mut self, target: ClickTarget) -> Vec<CaptureCommand> {
        match target {
            ClickTarget::Backdrop => self.dismiss(),
            ClickTarget::Content => Vec::new(),
        }
    }

    /// The owning view is going away. Everything afterwards is a no-op.
    pub fn teardown(&mut self) -> Vec<CaptureCommand> {
        let mut commands = Vec::new();
        if self.reveal_timer_pending {
            commands.push(CaptureCommand::CancelRevealTimer);
        }
        if self.scroll_observed {
            commands.push(CaptureCommand::StopScrollObserver);
        }
        if self.auto_close_pending {
            commands.push(CaptureCommand::CancelAutoClose);
        }
        self.reveal_timer_pending = false;
        self.scroll_observed = false;
        self.auto_close_pending = false;
        self.request_pending = false;
        self.state = ModalState::Hidden;
        self.form = None;
        self.lifecycle = Lifecycle::TornDown;
        commands
    }
}
