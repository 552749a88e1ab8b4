#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use crate::core::email_capture::{
        CaptureCommand, CaptureError, CaptureFlag, CaptureFlags, ClickTarget,
        EmailCaptureController, ModalState, SubscribeRequest, interpret_response,
    };

    /// Stand-in for the browser: storage, pending timers, scroll listener
    /// and outbound requests, all driven by controller commands.
    #[derive(Default)]
    struct FakeHost {
        storage: HashMap<String, String>,
        storage_writes: Vec<CaptureFlag>,
        reveal_timer: Option<Duration>,
        auto_close: Option<Duration>,
        scroll_threshold: Option<f64>,
        requests: Vec<SubscribeRequest>,
    }

    impl FakeHost {
        fn with_flags(flags: &[CaptureFlag]) -> Self {
            let mut host = FakeHost::default();
            for flag in flags {
                host.storage
                    .insert(flag.storage_key().to_string(), "true".to_string());
            }
            host
        }

        fn flags(&self) -> CaptureFlags {
            CaptureFlags::load(|key| self.storage.get(key).cloned())
        }

        fn apply(&mut self, commands: Vec<CaptureCommand>) {
            for command in commands {
                match command {
                    CaptureCommand::StartRevealTimer(delay) => self.reveal_timer = Some(delay),
                    CaptureCommand::CancelRevealTimer => self.reveal_timer = None,
                    CaptureCommand::ObserveScroll { threshold } => {
                        self.scroll_threshold = Some(threshold)
                    }
                    CaptureCommand::StopScrollObserver => self.scroll_threshold = None,
                    CaptureCommand::Persist(flag) => {
                        self.storage
                            .insert(flag.storage_key().to_string(), "true".to_string());
                        self.storage_writes.push(flag);
                    }
                    CaptureCommand::Subscribe(request) => self.requests.push(request),
                    CaptureCommand::ScheduleAutoClose(delay) => self.auto_close = Some(delay),
                    CaptureCommand::CancelAutoClose => self.auto_close = None,
                }
            }
        }

        fn mount(&mut self, ctrl: &mut EmailCaptureController) {
            let flags = self.flags();
            let commands = ctrl.mount(flags);
            self.apply(commands);
        }

        /// Fire the reveal timer if it is still registered.
        fn fire_reveal_timer(&mut self, ctrl: &mut EmailCaptureController) {
            if self.reveal_timer.take().is_some() {
                let commands = ctrl.reveal_timer_elapsed();
                self.apply(commands);
            }
        }

        /// Deliver a scroll event if a listener is attached.
        fn scroll(&mut self, ctrl: &mut EmailCaptureController, offset: f64) {
            if self.scroll_threshold.is_some() {
                let commands = ctrl.scrolled(offset);
                self.apply(commands);
            }
        }

        fn fire_auto_close(&mut self, ctrl: &mut EmailCaptureController) {
            if self.auto_close.take().is_some() {
                let commands = ctrl.auto_close_elapsed();
                self.apply(commands);
            }
        }

        fn respond(&mut self, ctrl: &mut EmailCaptureController, status: u16, body: &str) {
            let commands = ctrl.submission_finished(interpret_response(status, body));
            self.apply(commands);
        }

        fn nothing_registered(&self) -> bool {
            self.reveal_timer.is_none() && self.scroll_threshold.is_none() && self.auto_close.is_none()
        }

        fn writes_of(&self, flag: CaptureFlag) -> usize {
            self.storage_writes.iter().filter(|f| **f == flag).count()
        }
    }

    fn revealed(host: &mut FakeHost) -> EmailCaptureController {
        let mut ctrl = EmailCaptureController::default();
        host.mount(&mut ctrl);
        host.fire_reveal_timer(&mut ctrl);
        assert_eq!(ctrl.state(), ModalState::VisibleForm);
        ctrl
    }

    #[test]
    fn test_any_persisted_flag_short_circuits_mount() {
        let combos: Vec<Vec<CaptureFlag>> = vec![
            vec![CaptureFlag::Seen],
            vec![CaptureFlag::Dismissed],
            vec![CaptureFlag::Subscribed],
            vec![CaptureFlag::Seen, CaptureFlag::Dismissed],
            vec![CaptureFlag::Seen, CaptureFlag::Subscribed],
            vec![CaptureFlag::Dismissed, CaptureFlag::Subscribed],
            CaptureFlag::ALL.to_vec(),
        ];

        for combo in combos {
            let mut host = FakeHost::with_flags(&combo);
            let mut ctrl = EmailCaptureController::default();
            host.mount(&mut ctrl);

            assert!(host.nothing_registered(), "{:?}", combo);
            assert!(ctrl.is_inert(), "{:?}", combo);

            // Even if a stray event arrives, nothing becomes visible
            let commands = ctrl.reveal_timer_elapsed();
            host.apply(commands);
            let commands = ctrl.scrolled(10_000.0);
            host.apply(commands);
            assert_eq!(ctrl.state(), ModalState::Hidden, "{:?}", combo);
            assert!(host.storage_writes.is_empty(), "{:?}", combo);
        }
    }

    #[test]
    fn test_timer_and_scroll_in_same_tick_reveal_once() {
        let mut host = FakeHost::default();
        let mut ctrl = EmailCaptureController::default();
        host.mount(&mut ctrl);

        // Both callbacks were already queued before either ran
        host.reveal_timer.take();
        let from_timer = ctrl.reveal_timer_elapsed();
        let from_scroll = ctrl.scrolled(800.0);
        host.apply(from_timer);
        host.apply(from_scroll);

        assert_eq!(ctrl.state(), ModalState::VisibleForm);
        assert_eq!(host.writes_of(CaptureFlag::Seen), 1);
        assert!(host.nothing_registered());
    }

    #[test]
    fn test_scroll_then_timer_reveal_once() {
        let mut host = FakeHost::default();
        let mut ctrl = EmailCaptureController::default();
        host.mount(&mut ctrl);

        host.scroll(&mut ctrl, 200.0);
        assert_eq!(ctrl.state(), ModalState::Hidden);
        host.scroll(&mut ctrl, 650.0);
        assert_eq!(ctrl.state(), ModalState::VisibleForm);

        // Timer was cancelled by the scroll reveal
        assert!(host.reveal_timer.is_none());
        let commands = ctrl.reveal_timer_elapsed();
        host.apply(commands);

        assert_eq!(host.writes_of(CaptureFlag::Seen), 1);
    }

    #[test]
    fn test_reload_after_reveal_stays_hidden() {
        let mut host = FakeHost::default();
        let _first = revealed(&mut host);

        let mut second = EmailCaptureController::default();
        host.mount(&mut second);
        assert!(second.is_inert());
        assert!(host.nothing_registered());
    }

    #[test]
    fn test_blank_email_never_hits_network() {
        for email in ["", "   ", "\t\n"] {
            let mut host = FakeHost::default();
            let mut ctrl = revealed(&mut host);
            ctrl.set_name("Ana");
            ctrl.set_email(email);

            let commands = ctrl.submit();
            host.apply(commands);

            assert!(host.requests.is_empty());
            assert_eq!(
                ctrl.form().and_then(|f| f.error.clone()),
                Some(CaptureError::Validation)
            );
            assert!(!ctrl.form().unwrap().submitting);
        }
    }

    #[test]
    fn test_successful_subscription_auto_hides() {
        let mut host = FakeHost::default();
        let mut ctrl = revealed(&mut host);
        ctrl.set_email("learner@example.com");

        let commands = ctrl.submit();
        host.apply(commands);
        assert_eq!(host.requests.len(), 1);
        assert_eq!(host.requests[0].email, "learner@example.com");
        assert!(host.requests[0].name.is_none());

        host.respond(&mut ctrl, 200, "{}");
        assert!(ctrl.form().unwrap().submitted);
        assert_eq!(ctrl.state(), ModalState::VisibleSuccess);
        assert_eq!(host.storage.get("email_subscribed").map(String::as_str), Some("true"));
        assert_eq!(host.auto_close, Some(Duration::from_secs(3)));

        host.fire_auto_close(&mut ctrl);
        assert_eq!(ctrl.state(), ModalState::Hidden);
        assert!(host.nothing_registered());
    }

    #[test]
    fn test_rejected_subscription_allows_retry() {
        let mut host = FakeHost::default();
        let mut ctrl = revealed(&mut host);
        ctrl.set_email("learner@example.com");

        let commands = ctrl.submit();
        host.apply(commands);
        host.respond(&mut ctrl, 400, r#"{"detail": "Already subscribed"}"#);

        assert_eq!(ctrl.state(), ModalState::VisibleForm);
        let form = ctrl.form().unwrap();
        assert_eq!(
            form.error.as_ref().map(|e| e.to_string()),
            Some("Already subscribed".to_string())
        );
        assert!(!form.submitting);
        assert_eq!(host.writes_of(CaptureFlag::Subscribed), 0);

        // Editing clears the error, and resubmitting issues a fresh request
        ctrl.set_email("other@example.com");
        assert!(ctrl.form().unwrap().error.is_none());
        let commands = ctrl.submit();
        host.apply(commands);
        assert_eq!(host.requests.len(), 2);
        assert_eq!(host.requests[1].email, "other@example.com");
    }

    #[test]
    fn test_transport_failure_resets_submitting() {
        let mut host = FakeHost::default();
        let mut ctrl = revealed(&mut host);
        ctrl.set_email("learner@example.com");
        let commands = ctrl.submit();
        host.apply(commands);

        let commands = ctrl.submission_finished(Err(CaptureError::Transport));
        host.apply(commands);

        let form = ctrl.form().unwrap();
        assert!(!form.submitting);
        assert_eq!(form.error, Some(CaptureError::Transport));
        assert_eq!(ctrl.state(), ModalState::VisibleForm);
    }

    #[test]
    fn test_success_after_dismiss_still_persists_subscribed() {
        let mut host = FakeHost::default();
        let mut ctrl = revealed(&mut host);
        ctrl.set_email("learner@example.com");
        let commands = ctrl.submit();
        host.apply(commands);

        // Visitor closes the modal while the request is in flight
        let commands = ctrl.dismiss();
        host.apply(commands);
        assert_eq!(ctrl.state(), ModalState::Hidden);

        host.respond(&mut ctrl, 200, "{}");
        assert_eq!(host.storage.get("email_subscribed").map(String::as_str), Some("true"));
        assert_eq!(
            host.storage.get("email_capture_dismissed").map(String::as_str),
            Some("true")
        );
        assert_eq!(ctrl.state(), ModalState::Hidden);
        assert!(ctrl.form().is_none());
        assert!(host.nothing_registered());

        // A duplicate completion does not write again
        host.respond(&mut ctrl, 200, "{}");
        assert_eq!(host.writes_of(CaptureFlag::Subscribed), 1);
    }

    #[test]
    fn test_failure_after_dismiss_is_dropped() {
        let mut host = FakeHost::default();
        let mut ctrl = revealed(&mut host);
        ctrl.set_email("learner@example.com");
        let commands = ctrl.submit();
        host.apply(commands);
        let commands = ctrl.dismiss();
        host.apply(commands);

        host.respond(&mut ctrl, 500, "");
        assert_eq!(host.writes_of(CaptureFlag::Subscribed), 0);
        assert_eq!(ctrl.state(), ModalState::Hidden);
        assert!(ctrl.form().is_none());
    }

    #[test]
    fn test_backdrop_click_dismisses_content_click_does_not() {
        let mut host = FakeHost::default();
        let mut ctrl = revealed(&mut host);

        let commands = ctrl.clicked(ClickTarget::Content);
        host.apply(commands);
        assert_eq!(ctrl.state(), ModalState::VisibleForm);
        assert_eq!(host.writes_of(CaptureFlag::Dismissed), 0);

        let commands = ctrl.clicked(ClickTarget::Backdrop);
        host.apply(commands);
        assert_eq!(ctrl.state(), ModalState::Hidden);
        assert_eq!(
            host.storage.get("email_capture_dismissed").map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn test_unmount_before_triggers_leaves_no_callbacks() {
        let mut host = FakeHost::default();
        let mut ctrl = EmailCaptureController::default();
        host.mount(&mut ctrl);
        assert!(!host.nothing_registered());

        let commands = ctrl.teardown();
        host.apply(commands);
        assert!(host.nothing_registered());

        // A late callback that slipped through must not mutate anything
        let before = host.storage.clone();
        let commands = ctrl.reveal_timer_elapsed();
        host.apply(commands);
        let commands = ctrl.scrolled(9_999.0);
        host.apply(commands);
        assert_eq!(ctrl.state(), ModalState::Hidden);
        assert_eq!(host.storage, before);
    }

    #[test]
    fn test_dismissed_visitor_never_sees_modal_again() {
        let mut host = FakeHost::default();
        let mut ctrl = revealed(&mut host);
        let commands = ctrl.dismiss();
        host.apply(commands);

        for _ in 0..3 {
            let mut next = EmailCaptureController::default();
            host.mount(&mut next);
            host.fire_reveal_timer(&mut next);
            host.scroll(&mut next, 5_000.0);
            assert_eq!(next.state(), ModalState::Hidden);
        }
    }
}
