//! Animation bank
//!
//! The avatar asset exposes its clips by name. The bank resolves the three
//! clips the controller needs once, at load, and afterwards addresses them
//! through [`AnimationClip`]. A clip the asset doesn't provide stays absent:
//! starting or stopping it is a no-op.

/// Default clip length in seconds when the asset doesn't report one
pub const DEFAULT_CLIP_DURATION: f32 = 1.0;

/// The clips the controller drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationClip {
    Idle,
    Walk,
    Run,
}

impl AnimationClip {
    pub const ALL: [AnimationClip; 3] = [AnimationClip::Idle, AnimationClip::Walk, AnimationClip::Run];

    /// Name the clip carries in the asset
    pub fn name(self) -> &'static str {
        match self {
            AnimationClip::Idle => "idle",
            AnimationClip::Walk => "walk",
            AnimationClip::Run => "run",
        }
    }

    /// Resolve an asset clip name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|clip| clip.name() == name)
    }

    fn index(self) -> usize {
        match self {
            AnimationClip::Idle => 0,
            AnimationClip::Walk => 1,
            AnimationClip::Run => 2,
        }
    }
}

/// Playback state of one clip
#[derive(Debug, Clone, PartialEq)]
pub struct ClipState {
    pub playing: bool,
    pub looping: bool,
    pub speed_ratio: f32,
    /// Seconds into the clip
    pub elapsed: f32,
    /// Clip length in seconds
    pub duration: f32,
}

impl ClipState {
    fn new(duration: f32) -> Self {
        Self {
            playing: false,
            looping: false,
            speed_ratio: 1.0,
            elapsed: 0.0,
            duration,
        }
    }
}

/// Resolved clip table for one avatar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationBank {
    clips: [Option<ClipState>; 3],
}

impl AnimationBank {
    /// Bank with no clips at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bank with all three clips present
    pub fn standard() -> Self {
        Self::from_names(AnimationClip::ALL.iter().map(|clip| clip.name()))
    }

    /// Resolve clips from the names an asset exposes
    ///
    /// Unknown names are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_clips(names.into_iter().map(|name| (name, DEFAULT_CLIP_DURATION)))
    }

    /// Resolve clips from `(name, duration)` pairs
    pub fn from_clips<I, S>(clips: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: AsRef<str>,
    {
        let mut bank = Self::empty();
        for (name, duration) in clips {
            match AnimationClip::from_name(name.as_ref()) {
                Some(clip) => bank.clips[clip.index()] = Some(ClipState::new(duration.max(f32::EPSILON))),
                None => log::debug!("Ignoring unused animation clip '{}'", name.as_ref()),
            }
        }
        for clip in AnimationClip::ALL {
            if !bank.has(clip) {
                log::debug!("Animation clip '{}' not provided by asset", clip.name());
            }
        }
        bank
    }

    /// Whether the asset provided this clip
    pub fn has(&self, clip: AnimationClip) -> bool {
        self.clips[clip.index()].is_some()
    }

    pub fn state(&self, clip: AnimationClip) -> Option<&ClipState> {
        self.clips[clip.index()].as_ref()
    }

    pub fn is_playing(&self, clip: AnimationClip) -> bool {
        self.state(clip).map_or(false, |s| s.playing)
    }

    /// Clips currently playing
    pub fn playing(&self) -> impl Iterator<Item = AnimationClip> + '_ {
        AnimationClip::ALL.into_iter().filter(|&clip| self.is_playing(clip))
    }

    /// Start a clip from the beginning at normal speed
    pub fn start(&mut self, clip: AnimationClip, looping: bool) {
        match self.clips[clip.index()].as_mut() {
            Some(state) => {
                state.playing = true;
                state.looping = looping;
                state.speed_ratio = 1.0;
                state.elapsed = 0.0;
            }
            None => log::debug!("Cannot start missing animation clip '{}'", clip.name()),
        }
    }

    /// Stop a clip
    pub fn stop(&mut self, clip: AnimationClip) {
        match self.clips[clip.index()].as_mut() {
            Some(state) => state.playing = false,
            None => log::debug!("Cannot stop missing animation clip '{}'", clip.name()),
        }
    }

    /// Advance every playing clip by `dt` seconds
    ///
    /// Looping clips wrap; one-shot clips stop at their end.
    pub fn advance(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        for state in self.clips.iter_mut().flatten() {
            if !state.playing {
                continue;
            }
            state.elapsed += dt * state.speed_ratio;
            if state.elapsed >= state.duration {
                if state.looping {
                    state.elapsed %= state.duration;
                } else {
                    state.elapsed = state.duration;
                    state.playing = false;
                }
            }
        }
    }
}
