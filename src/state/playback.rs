//! Playback state management
//!
//! The page is a pure function of one phase value. Media events and user
//! gestures reduce to three events applied through [`transition`]; the
//! overlays render from [`overlay_for`]. Illegal flag combinations (prompt
//! shown while playing, skip shown after the end) are unrepresentable.

use leptos::prelude::*;

/// Where the gating video currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Initial play attempt has not settled yet.
    Booting,
    /// Autoplay was blocked; waiting for a user gesture.
    AwaitingGesture,
    /// Video is running with sound.
    Playing,
    /// Video finished or was skipped. Terminal.
    Ended,
}

/// Everything that can move the phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A play request resolved.
    PlayStarted,
    /// A play request was rejected by the browser's autoplay policy.
    PlayBlocked,
    /// The video reached its end or the visitor skipped it.
    Finished,
}

/// Which surface sits on top of the video, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    None,
    GesturePrompt,
    SkipControl,
    JumpScare,
}

/// Applies one event to the phase. `Ended` absorbs every event.
pub fn transition(phase: PlaybackPhase, event: PlaybackEvent) -> PlaybackPhase {
    match (phase, event) {
        (PlaybackPhase::Ended, _) => PlaybackPhase::Ended,
        (_, PlaybackEvent::Finished) => PlaybackPhase::Ended,
        (_, PlaybackEvent::PlayStarted) => PlaybackPhase::Playing,
        // A rejected retry keeps the prompt up; a stray rejection while
        // already playing changes nothing.
        (PlaybackPhase::Playing, PlaybackEvent::PlayBlocked) => PlaybackPhase::Playing,
        (_, PlaybackEvent::PlayBlocked) => PlaybackPhase::AwaitingGesture,
    }
}

/// Overlay selection is total: every phase names exactly one surface.
pub fn overlay_for(phase: PlaybackPhase) -> Overlay {
    match phase {
        PlaybackPhase::Booting => Overlay::None,
        PlaybackPhase::AwaitingGesture => Overlay::GesturePrompt,
        PlaybackPhase::Playing => Overlay::SkipControl,
        PlaybackPhase::Ended => Overlay::JumpScare,
    }
}

/// Global playback context
#[derive(Clone, Copy)]
pub struct PlaybackContext {
    pub phase: RwSignal<PlaybackPhase>,
    /// Load result of the scare-panel image. Orthogonal to the phase and
    /// overwritten by whichever load/error event fires last.
    pub mask_loaded: RwSignal<bool>,
}

impl PlaybackContext {
    pub fn new() -> Self {
        Self {
            phase: RwSignal::new(PlaybackPhase::Booting),
            mask_loaded: RwSignal::new(false),
        }
    }

    pub fn overlay(&self) -> Overlay {
        overlay_for(self.phase.get())
    }

    pub fn mark_started(&self) {
        self.apply(PlaybackEvent::PlayStarted);
    }

    pub fn mark_blocked(&self) {
        self.apply(PlaybackEvent::PlayBlocked);
    }

    pub fn mark_ended(&self) {
        self.apply(PlaybackEvent::Finished);
    }

    pub fn set_mask_loaded(&self, loaded: bool) {
        self.mask_loaded.set(loaded);
    }

    fn apply(&self, event: PlaybackEvent) {
        let current = self.phase.get_untracked();
        let next = transition(current, event);
        if next != current {
            log::info!("playback phase {:?} -> {:?} on {:?}", current, next, event);
            self.phase.set(next);
        }
    }
}

pub fn provide_playback_context() -> PlaybackContext {
    let context = PlaybackContext::new();
    provide_context(context);
    context
}

pub fn use_playback_context() -> PlaybackContext {
    expect_context::<PlaybackContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENTS: [PlaybackEvent; 3] = [
        PlaybackEvent::PlayStarted,
        PlaybackEvent::PlayBlocked,
        PlaybackEvent::Finished,
    ];

    #[test]
    fn test_ended_absorbs_every_event() {
        for event in EVENTS {
            assert_eq!(transition(PlaybackPhase::Ended, event), PlaybackPhase::Ended);
        }
    }

    #[test]
    fn test_finished_ends_from_every_phase() {
        for phase in [
            PlaybackPhase::Booting,
            PlaybackPhase::AwaitingGesture,
            PlaybackPhase::Playing,
            PlaybackPhase::Ended,
        ] {
            assert_eq!(transition(phase, PlaybackEvent::Finished), PlaybackPhase::Ended);
        }
    }

    #[test]
    fn test_ended_entered_at_most_once_and_never_left() {
        // Walk every event sequence up to length six.
        for len in 0u32..=6 {
            for seed in 0..3usize.pow(len) {
                let mut code = seed;
                let mut phase = PlaybackPhase::Booting;
                let mut endings = 0;
                for _ in 0..len {
                    let event = EVENTS[code % 3];
                    code /= 3;
                    let next = transition(phase, event);
                    if next == PlaybackPhase::Ended && phase != PlaybackPhase::Ended {
                        endings += 1;
                    }
                    if phase == PlaybackPhase::Ended {
                        assert_eq!(next, PlaybackPhase::Ended);
                    }
                    phase = next;
                }
                assert!(endings <= 1);
            }
        }
    }

    #[test]
    fn test_prompt_unreachable_after_initial_start() {
        // Once the first attempt succeeds, no later event sequence can put
        // the gesture prompt on screen.
        for len in 0u32..=5 {
            for seed in 0..3usize.pow(len) {
                let mut code = seed;
                let mut phase = transition(PlaybackPhase::Booting, PlaybackEvent::PlayStarted);
                assert_eq!(phase, PlaybackPhase::Playing);
                for _ in 0..len {
                    phase = transition(phase, EVENTS[code % 3]);
                    code /= 3;
                    assert_ne!(phase, PlaybackPhase::AwaitingGesture);
                }
            }
        }
    }

    #[test]
    fn test_blocked_autoplay_shows_prompt_until_retry_succeeds() {
        let mut phase = transition(PlaybackPhase::Booting, PlaybackEvent::PlayBlocked);
        assert_eq!(phase, PlaybackPhase::AwaitingGesture);
        assert_eq!(overlay_for(phase), Overlay::GesturePrompt);

        // A rejected retry keeps the prompt up, never the skip control.
        phase = transition(phase, PlaybackEvent::PlayBlocked);
        assert_eq!(overlay_for(phase), Overlay::GesturePrompt);

        phase = transition(phase, PlaybackEvent::PlayStarted);
        assert_eq!(phase, PlaybackPhase::Playing);
        assert_eq!(overlay_for(phase), Overlay::SkipControl);
    }

    #[test]
    fn test_natural_completion_reaches_scare_panel() {
        let mut phase = transition(PlaybackPhase::Booting, PlaybackEvent::PlayStarted);
        phase = transition(phase, PlaybackEvent::Finished);
        assert_eq!(phase, PlaybackPhase::Ended);
        assert_eq!(overlay_for(phase), Overlay::JumpScare);
    }

    #[test]
    fn test_skip_while_playing_ends_immediately() {
        assert_eq!(
            transition(PlaybackPhase::Playing, PlaybackEvent::Finished),
            PlaybackPhase::Ended
        );
    }

    #[test]
    fn test_overlay_for_each_phase() {
        assert_eq!(overlay_for(PlaybackPhase::Booting), Overlay::None);
        assert_eq!(overlay_for(PlaybackPhase::AwaitingGesture), Overlay::GesturePrompt);
        assert_eq!(overlay_for(PlaybackPhase::Playing), Overlay::SkipControl);
        assert_eq!(overlay_for(PlaybackPhase::Ended), Overlay::JumpScare);
    }

    #[test]
    fn test_context_starts_booting_with_mask_unloaded() {
        let ctx = PlaybackContext::new();
        assert_eq!(ctx.phase.get_untracked(), PlaybackPhase::Booting);
        assert!(!ctx.mask_loaded.get_untracked());
        assert_eq!(ctx.overlay(), Overlay::None);
    }

    #[test]
    fn test_context_blocked_then_retry() {
        let ctx = PlaybackContext::new();
        ctx.mark_blocked();
        assert_eq!(ctx.overlay(), Overlay::GesturePrompt);
        ctx.mark_started();
        assert_eq!(ctx.overlay(), Overlay::SkipControl);
    }

    #[test]
    fn test_context_end_is_terminal() {
        let ctx = PlaybackContext::new();
        ctx.mark_started();
        ctx.mark_ended();
        ctx.mark_started();
        ctx.mark_blocked();
        assert_eq!(ctx.overlay(), Overlay::JumpScare);
    }

    #[test]
    fn test_mask_flag_follows_latest_event() {
        let ctx = PlaybackContext::new();
        ctx.mark_started();
        ctx.mark_ended();
        ctx.set_mask_loaded(true);
        ctx.set_mask_loaded(false);
        // The placeholder comes back; the panel itself stays put.
        assert!(!ctx.mask_loaded.get_untracked());
        assert_eq!(ctx.overlay(), Overlay::JumpScare);
    }
}
