use fullbleed_common::{LifecycleEvent, LifecycleState};

use crate::{Host, ImmersionController};

/// Callbacks delivered by the host's lifecycle dispatcher.
///
/// Every callback defaults to doing nothing. The host is only lent for the
/// duration of a callback.
pub trait Lifecycle {
    fn on_create(&mut self, _host: &mut dyn Host, _saved_state: Option<&[u8]>) {}
    fn on_start(&mut self, _host: &mut dyn Host) {}
    fn on_resume(&mut self, _host: &mut dyn Host) {}
    fn on_pause(&mut self, _host: &mut dyn Host) {}
    fn on_stop(&mut self, _host: &mut dyn Host) {}
    fn on_destroy(&mut self, _host: &mut dyn Host) {}

    fn dispatch(&mut self, host: &mut dyn Host, event: &LifecycleEvent) {
        match event {
            LifecycleEvent::Create { saved_state } => self.on_create(host, saved_state.as_deref()),
            LifecycleEvent::Start => self.on_start(host),
            LifecycleEvent::Resume => self.on_resume(host),
            LifecycleEvent::Pause => self.on_pause(host),
            LifecycleEvent::Stop => self.on_stop(host),
            LifecycleEvent::Destroy => self.on_destroy(host),
        }
    }
}

impl Lifecycle for () {}

/// An activity that keeps the display immersive around a base handler.
///
/// On create the policy is applied before the base runs; on resume it is
/// applied after. Every other callback goes straight to the base.
pub struct ImmersiveActivity<B: Lifecycle = ()> {
    base: B,
    controller: ImmersionController,
    state: LifecycleState,
}

impl<B: Lifecycle> ImmersiveActivity<B> {
    pub fn new(base: B, controller: ImmersionController) -> Self {
        Self {
            base,
            controller,
            state: LifecycleState::Initialized,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    fn enter(&mut self, state: LifecycleState) {
        tracing::debug!("Activity {} -> {state}", self.state);
        self.state = state;
    }
}

impl<B: Lifecycle> Lifecycle for ImmersiveActivity<B> {
    fn on_create(&mut self, host: &mut dyn Host, saved_state: Option<&[u8]>) {
        tracing::info!("Activity created, applying immersive display policy");
        self.controller.on_create(host);
        self.base.on_create(host, saved_state);
        self.enter(LifecycleState::Created);
    }

    fn on_start(&mut self, host: &mut dyn Host) {
        self.base.on_start(host);
        self.enter(LifecycleState::Started);
    }

    fn on_resume(&mut self, host: &mut dyn Host) {
        self.base.on_resume(host);
        tracing::info!("Activity resumed, re-applying immersive display policy");
        self.controller.on_resume(host);
        self.enter(LifecycleState::Resumed);
    }

    fn on_pause(&mut self, host: &mut dyn Host) {
        self.base.on_pause(host);
        self.enter(LifecycleState::Paused);
    }

    fn on_stop(&mut self, host: &mut dyn Host) {
        self.base.on_stop(host);
        self.enter(LifecycleState::Stopped);
    }

    fn on_destroy(&mut self, host: &mut dyn Host) {
        self.base.on_destroy(host);
        self.enter(LifecycleState::Destroyed);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use fullbleed_common::{
        CutoutMode, InsetType, SdkVersion, SystemBarsBehavior, WindowRequest,
    };

    use super::*;
    use crate::{
        HostWindow,
        recording::{RecordingHost, RecordingWindow},
    };

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Window(WindowRequest),
        Base(&'static str),
    }

    type Journal = Rc<RefCell<Vec<Call>>>;

    struct JournalWindow(Journal);

    impl HostWindow for JournalWindow {
        fn set_decor_fits_system_windows(&mut self, fits: bool) {
            self.0.borrow_mut().push(Call::Window(WindowRequest::DecorFitsSystemWindows(fits)));
        }

        fn set_cutout_mode(&mut self, mode: CutoutMode) {
            self.0.borrow_mut().push(Call::Window(WindowRequest::CutoutMode(mode)));
        }

        fn hide(&mut self, inset: InsetType) {
            self.0.borrow_mut().push(Call::Window(WindowRequest::Hide(inset)));
        }

        fn set_system_bars_behavior(&mut self, behavior: SystemBarsBehavior) {
            self.0.borrow_mut().push(Call::Window(WindowRequest::SystemBarsBehavior(behavior)));
        }
    }

    struct JournalHost {
        sdk: SdkVersion,
        window: JournalWindow,
    }

    impl Host for JournalHost {
        fn sdk_version(&self) -> SdkVersion {
            self.sdk
        }

        fn window(&mut self) -> Option<&mut dyn HostWindow> {
            Some(&mut self.window)
        }
    }

    struct JournalBase(Journal);

    impl Lifecycle for JournalBase {
        fn on_create(&mut self, _host: &mut dyn Host, _saved_state: Option<&[u8]>) {
            self.0.borrow_mut().push(Call::Base("create"));
        }

        fn on_resume(&mut self, _host: &mut dyn Host) {
            self.0.borrow_mut().push(Call::Base("resume"));
        }

        fn on_pause(&mut self, _host: &mut dyn Host) {
            self.0.borrow_mut().push(Call::Base("pause"));
        }
    }

    fn journaled(sdk: u32) -> (ImmersiveActivity<JournalBase>, JournalHost, Journal) {
        let journal = Journal::default();
        let activity =
            ImmersiveActivity::new(JournalBase(journal.clone()), ImmersionController::default());
        let host = JournalHost {
            sdk: SdkVersion(sdk),
            window: JournalWindow(journal.clone()),
        };
        (activity, host, journal)
    }

    fn policy_calls() -> Vec<Call> {
        vec![
            Call::Window(WindowRequest::CutoutMode(CutoutMode::Always)),
            Call::Window(WindowRequest::Hide(InsetType::SystemBars)),
            Call::Window(WindowRequest::Hide(InsetType::DisplayCutout)),
            Call::Window(WindowRequest::SystemBarsBehavior(
                SystemBarsBehavior::ShowTransientBarsBySwipe,
            )),
        ]
    }

    #[test]
    fn create_applies_policy_before_base() {
        let (mut activity, mut host, journal) = journaled(33);

        activity.dispatch(&mut host, &LifecycleEvent::create());

        let mut expected = vec![Call::Window(WindowRequest::DecorFitsSystemWindows(false))];
        expected.extend(policy_calls());
        expected.push(Call::Base("create"));

        assert_eq!(*journal.borrow(), expected);
        assert_eq!(activity.state(), LifecycleState::Created);
    }

    #[test]
    fn resume_applies_policy_after_base() {
        let (mut activity, mut host, journal) = journaled(33);

        activity.dispatch(&mut host, &LifecycleEvent::Resume);

        let mut expected = vec![Call::Base("resume")];
        expected.extend(policy_calls());

        assert_eq!(*journal.borrow(), expected);
        assert_eq!(activity.state(), LifecycleState::Resumed);
    }

    #[test]
    fn resume_below_minimum_sdk_only_reaches_base() {
        let (mut activity, mut host, journal) = journaled(30);

        activity.dispatch(&mut host, &LifecycleEvent::Resume);

        assert_eq!(*journal.borrow(), vec![Call::Base("resume")]);
        assert_eq!(activity.state(), LifecycleState::Resumed);
    }

    #[test]
    fn other_events_only_reach_base() {
        let (mut activity, mut host, journal) = journaled(33);

        for event in [
            LifecycleEvent::Start,
            LifecycleEvent::Pause,
            LifecycleEvent::Stop,
            LifecycleEvent::Destroy,
        ] {
            activity.dispatch(&mut host, &event);
        }

        assert_eq!(*journal.borrow(), vec![Call::Base("pause")]);
        assert_eq!(activity.state(), LifecycleState::Destroyed);
    }

    #[test]
    fn fresh_start_sequence() {
        let mut activity = ImmersiveActivity::new((), ImmersionController::default());
        let mut host = RecordingHost::new(SdkVersion(34));

        activity.dispatch(&mut host, &LifecycleEvent::create());

        assert_eq!(host.window_ref().unwrap().requests(), [
            WindowRequest::DecorFitsSystemWindows(false),
            WindowRequest::CutoutMode(CutoutMode::Always),
            WindowRequest::Hide(InsetType::SystemBars),
            WindowRequest::Hide(InsetType::DisplayCutout),
            WindowRequest::SystemBarsBehavior(SystemBarsBehavior::ShowTransientBarsBySwipe),
        ]);
    }

    #[test]
    fn resume_after_background_sequence() {
        let mut activity = ImmersiveActivity::new((), ImmersionController::default());
        let mut host = RecordingHost::new(SdkVersion(34));

        for event in [
            LifecycleEvent::create(),
            LifecycleEvent::Start,
            LifecycleEvent::Resume,
            LifecycleEvent::Pause,
            LifecycleEvent::Stop,
            LifecycleEvent::Start,
        ] {
            activity.dispatch(&mut host, &event);
        }
        host.window_mut().unwrap().take_requests();

        activity.dispatch(&mut host, &LifecycleEvent::Resume);

        assert_eq!(host.window_ref().unwrap().requests(), [
            WindowRequest::CutoutMode(CutoutMode::Always),
            WindowRequest::Hide(InsetType::SystemBars),
            WindowRequest::Hide(InsetType::DisplayCutout),
            WindowRequest::SystemBarsBehavior(SystemBarsBehavior::ShowTransientBarsBySwipe),
        ]);
    }

    #[test]
    fn resume_after_swipe_re_suppresses() {
        let mut activity = ImmersiveActivity::new((), ImmersionController::default());
        let mut host = RecordingHost::new(SdkVersion(34));

        activity.dispatch(&mut host, &LifecycleEvent::create());
        host.window_mut().unwrap().take_requests();
        activity.dispatch(&mut host, &LifecycleEvent::Resume);
        let after_resume = host.window_mut().unwrap().take_requests();

        let window: &mut RecordingWindow = host.window_mut().unwrap();
        assert!(window.swipe_from_edge());
        assert!(window.display().system_bars_visible());

        activity.dispatch(&mut host, &LifecycleEvent::Resume);

        let window = host.window_ref().unwrap();
        assert_eq!(window.requests(), after_resume.as_slice());
        assert!(!window.display().system_bars_visible());
    }
}
