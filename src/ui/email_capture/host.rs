//! Executes controller commands against the browser.
//!
//! Timers are `setTimeout` handles and the scroll observer is a window
//! listener handle; both are held in stored values so they can be cleared
//! when the controller asks, and go away with the owning component.

use leptos::prelude::*;

use crate::core::email_capture::{CaptureCommand, EmailCaptureController};

#[cfg(not(feature = "ssr"))]
use super::{api, storage};
#[cfg(not(feature = "ssr"))]
use crate::core::email_capture::CaptureFlag;
#[cfg(not(feature = "ssr"))]
use leptos::leptos_dom::helpers::{TimeoutHandle, WindowListenerHandle, set_timeout_with_handle};
#[cfg(not(feature = "ssr"))]
use leptos::logging::{log, warn};

/// Browser side of the capture controller.
#[derive(Clone, Copy)]
pub struct CaptureHost {
    controller: RwSignal<EmailCaptureController>,
    #[cfg_attr(feature = "ssr", allow(dead_code))]
    subscribe_url: StoredValue<String>,
    #[cfg(not(feature = "ssr"))]
    reveal_timer: StoredValue<Option<TimeoutHandle>>,
    #[cfg(not(feature = "ssr"))]
    auto_close_timer: StoredValue<Option<TimeoutHandle>>,
    #[cfg(not(feature = "ssr"))]
    scroll_listener: StoredValue<Option<WindowListenerHandle>>,
}

impl CaptureHost {
    pub fn new(controller: RwSignal<EmailCaptureController>, subscribe_url: String) -> Self {
        Self {
            controller,
            subscribe_url: StoredValue::new(subscribe_url),
            #[cfg(not(feature = "ssr"))]
            reveal_timer: StoredValue::new(None),
            #[cfg(not(feature = "ssr"))]
            auto_close_timer: StoredValue::new(None),
            #[cfg(not(feature = "ssr"))]
            scroll_listener: StoredValue::new(None),
        }
    }

    /// Read the persisted flags and arm the triggers if allowed.
    pub fn mount(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let flags = storage::load_flags();
            self.dispatch(|c| c.mount(flags));
        }
    }

    /// Feed one input to the controller and carry out what it asks for.
    ///
    /// Does nothing once the controller signal has been disposed.
    pub fn dispatch<F>(&self, input: F)
    where
        F: FnOnce(&mut EmailCaptureController) -> Vec<CaptureCommand>,
    {
        let Some(commands) = self.controller.try_update(input) else {
            return;
        };
        for command in commands {
            self.run(command);
        }
    }

    #[cfg(feature = "ssr")]
    fn run(&self, _command: CaptureCommand) {}

    #[cfg(not(feature = "ssr"))]
    fn run(&self, command: CaptureCommand) {
        let host = *self;
        match command {
            CaptureCommand::StartRevealTimer(delay) => {
                match set_timeout_with_handle(
                    move || host.dispatch(|c| c.reveal_timer_elapsed()),
                    delay,
                ) {
                    Ok(handle) => Self::replace_timer(self.reveal_timer, handle),
                    Err(e) => warn!("email capture: failed to start timer: {:?}", e),
                }
            }
            CaptureCommand::CancelRevealTimer => Self::clear_timer(self.reveal_timer),
            CaptureCommand::ObserveScroll { .. } => {
                let handle = window_event_listener(leptos::ev::scroll, move |_| {
                    let offset = window().scroll_y().unwrap_or_default();
                    host.dispatch(|c| c.scrolled(offset));
                });
                let previous = self
                    .scroll_listener
                    .try_update_value(|slot| slot.replace(handle))
                    .flatten();
                if let Some(previous) = previous {
                    previous.remove();
                }
            }
            CaptureCommand::StopScrollObserver => {
                if let Some(handle) = self.scroll_listener.try_update_value(Option::take).flatten() {
                    handle.remove();
                }
            }
            CaptureCommand::Persist(flag) => {
                if flag == CaptureFlag::Seen {
                    let trigger = self
                        .controller
                        .try_with_untracked(|c| c.revealed_by())
                        .flatten();
                    if let Some(trigger) = trigger {
                        log!("email capture revealed by {}", trigger.as_str());
                    }
                }
                if let Err(e) = storage::persist_flag(flag) {
                    warn!("email capture: {}", e);
                }
            }
            CaptureCommand::Subscribe(request) => {
                let Some(url) = self.subscribe_url.try_get_value() else {
                    return;
                };
                leptos::task::spawn_local(async move {
                    let result = api::subscribe(&url, &request).await;
                    if let Err(e) = &result {
                        warn!(
                            "email subscription failed: {} (server detail: {})",
                            e.kind(),
                            e.has_server_detail()
                        );
                    }
                    host.dispatch(|c| c.submission_finished(result));
                });
            }
            CaptureCommand::ScheduleAutoClose(delay) => {
                match set_timeout_with_handle(
                    move || host.dispatch(|c| c.auto_close_elapsed()),
                    delay,
                ) {
                    Ok(handle) => Self::replace_timer(self.auto_close_timer, handle),
                    Err(e) => warn!("email capture: failed to schedule close: {:?}", e),
                }
            }
            CaptureCommand::CancelAutoClose => Self::clear_timer(self.auto_close_timer),
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn replace_timer(slot: StoredValue<Option<TimeoutHandle>>, handle: TimeoutHandle) {
        if let Some(previous) = slot.try_update_value(|t| t.replace(handle)).flatten() {
            previous.clear();
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn clear_timer(slot: StoredValue<Option<TimeoutHandle>>) {
        if let Some(handle) = slot.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }
}
