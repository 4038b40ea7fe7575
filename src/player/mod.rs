//! Playback state machine.
//!
//! Every user intent and media event goes through [`Player::apply`], which
//! mutates [`PlaybackState`] and answers with the [`Effect`]s the caller has
//! to run against the media engine and the timer layer. Nothing in here
//! touches audio or rendering.

mod policy;

pub use policy::{next_index, previous_index};

use crate::{
    library::{Library, Playlist, Track},
    notification::Notification,
};
use rand::Rng;
use tracing::{debug, info};

/// Skip-back restarts the current track instead of moving once playback is
/// past this many seconds.
pub const SKIP_BACK_RESTART_AFTER: f64 = 3.0;

/// Seek bound used while the duration is still unknown.
const FALLBACK_SEEK_LIMIT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub playlist_index: usize,
    pub track_index: usize,
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f32,
    pub is_muted: bool,
    pub is_repeat: bool,
    pub is_shuffle: bool,
    pub is_playlist_menu_open: bool,
    pub track_change_animation: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Play,
    Pause,
    TogglePlayback,
    SkipForward,
    SkipBack,
    Seek(f64),
    SetVolume(f32),
    ToggleMute,
    ToggleRepeat,
    ToggleShuffle,
    TogglePlaylistMenu,
    SelectTrack(usize),
    SelectPlaylist(usize),

    /// Engine events name the source they were produced for; events for a
    /// track that is no longer current are dropped.
    TrackEnded { url: String },
    TimeUpdate { url: String, seconds: f64 },
    DurationChanged { url: String, duration: f64 },
    PlaybackRejected,
    PulseElapsed(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Load { url: String, autoplay: bool },
    Play,
    Pause,
    Seek(f64),
    /// Effective gain, zero while muted.
    SetVolume(f32),
    /// Clear the track-change flag after the pulse window unless a newer
    /// change happened in between.
    StartPulse(u64),
    Notify(Notification),
}

#[derive(Debug)]
pub struct Player {
    library: Library,
    state: PlaybackState,
    pulse_generation: u64,
}

impl Player {
    pub fn new(library: Library, initial_playlist: usize, volume: f32) -> Self {
        let playlist_index = initial_playlist.min(library.len().saturating_sub(1));
        let duration = library
            .get(playlist_index)
            .and_then(|p| p.tracks.first())
            .map_or(0.0, |t| t.duration);
        let volume = volume.clamp(0.0, 1.0);
        Self {
            library,
            state: PlaybackState {
                playlist_index,
                track_index: 0,
                is_playing: false,
                current_time: 0.0,
                duration,
                volume,
                is_muted: volume == 0.0,
                is_repeat: false,
                is_shuffle: false,
                is_playlist_menu_open: false,
                track_change_animation: false,
            },
            pulse_generation: 0,
        }
    }

    /// Effects to run once the page is up: apply the volume and cue the
    /// first track without playing it.
    pub fn mount(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::SetVolume(self.effective_volume())];
        effects.extend(self.cue_track(self.state.track_index));
        effects
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn playlist(&self) -> &Playlist {
        &self.library.playlists()[self.state.playlist_index]
    }

    pub fn track(&self) -> &Track {
        &self.playlist().tracks[self.state.track_index]
    }

    pub fn effective_volume(&self) -> f32 {
        if self.state.is_muted {
            0.0
        } else {
            self.state.volume
        }
    }

    /// Upper bound of the seek bar.
    pub fn seek_limit(&self) -> f64 {
        if self.state.duration > 0.0 {
            self.state.duration
        } else {
            FALLBACK_SEEK_LIMIT
        }
    }

    pub fn apply<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) -> Vec<Effect> {
        let len = self.playlist().tracks.len();
        match action {
            Action::Play => {
                if self.state.is_playing {
                    return vec![];
                }
                self.state.is_playing = true;
                vec![Effect::Play]
            }
            Action::Pause => {
                if !self.state.is_playing {
                    return vec![];
                }
                self.state.is_playing = false;
                vec![Effect::Pause]
            }
            Action::TogglePlayback => {
                let next = if self.state.is_playing {
                    Action::Pause
                } else {
                    Action::Play
                };
                self.apply(next, rng)
            }
            Action::SkipForward => {
                let index = next_index(len, self.state.track_index, self.state.is_shuffle, rng);
                self.move_to(index)
            }
            Action::SkipBack => {
                if self.state.current_time > SKIP_BACK_RESTART_AFTER {
                    self.state.current_time = 0.0;
                    return vec![Effect::Seek(0.0)];
                }
                self.move_to(previous_index(len, self.state.track_index))
            }
            Action::Seek(seconds) => {
                if !seconds.is_finite() {
                    return vec![];
                }
                let seconds = seconds.clamp(0.0, self.seek_limit());
                self.state.current_time = seconds;
                vec![Effect::Seek(seconds)]
            }
            Action::SetVolume(volume) => {
                if !volume.is_finite() {
                    return vec![];
                }
                self.state.volume = volume.clamp(0.0, 1.0);
                self.state.is_muted = self.state.volume == 0.0;
                vec![Effect::SetVolume(self.effective_volume())]
            }
            Action::ToggleMute => {
                self.state.is_muted = !self.state.is_muted;
                vec![Effect::SetVolume(self.effective_volume())]
            }
            Action::ToggleRepeat => {
                self.state.is_repeat = !self.state.is_repeat;
                vec![]
            }
            Action::ToggleShuffle => {
                self.state.is_shuffle = !self.state.is_shuffle;
                vec![]
            }
            Action::TogglePlaylistMenu => {
                self.state.is_playlist_menu_open = !self.state.is_playlist_menu_open;
                vec![]
            }
            Action::SelectTrack(index) => {
                if index >= len {
                    return vec![];
                }
                let was_playing = self.state.is_playing;
                self.state.is_playing = true;
                if index == self.state.track_index {
                    return if was_playing { vec![] } else { vec![Effect::Play] };
                }
                self.cue_track(index)
            }
            Action::SelectPlaylist(index) => {
                if index >= self.library.len() {
                    return vec![];
                }
                self.state.playlist_index = index;
                self.state.is_playing = true;
                self.state.is_playlist_menu_open = false;
                info!("Switched to playlist '{}'", self.playlist().name);
                self.cue_track(0)
            }
            Action::TrackEnded { url } => {
                if url != self.track().url {
                    debug!("Ignoring end of {url}");
                    return vec![];
                }
                self.state.is_playing = true;
                if self.state.is_repeat {
                    self.state.current_time = 0.0;
                    return vec![Effect::Seek(0.0), Effect::Play];
                }
                let index = next_index(len, self.state.track_index, self.state.is_shuffle, rng);
                self.move_to(index)
            }
            Action::TimeUpdate { url, seconds } => {
                if url == self.track().url && seconds.is_finite() && seconds >= 0.0 {
                    self.state.current_time = seconds;
                }
                vec![]
            }
            Action::DurationChanged { url, duration } => {
                if url == self.track().url && duration.is_finite() && duration > 0.0 {
                    self.state.duration = duration;
                } else {
                    debug!("Ignoring duration {duration} reported for {url}");
                }
                vec![]
            }
            Action::PlaybackRejected => {
                self.state.is_playing = false;
                vec![Effect::Notify(Notification::PLAYBACK_BLOCKED)]
            }
            Action::PulseElapsed(generation) => {
                if generation == self.pulse_generation {
                    self.state.track_change_animation = false;
                }
                vec![]
            }
        }
    }

    /// Skip or end-of-track landing. Landing on the current index, which
    /// only happens in a single-track playlist, restarts it.
    fn move_to(&mut self, index: usize) -> Vec<Effect> {
        if index != self.state.track_index {
            return self.cue_track(index);
        }
        self.state.current_time = 0.0;
        let mut effects = vec![Effect::Seek(0.0)];
        if self.state.is_playing {
            effects.push(Effect::Play);
        }
        effects
    }

    fn cue_track(&mut self, index: usize) -> Vec<Effect> {
        self.state.track_index = index;
        self.state.current_time = 0.0;
        self.state.duration = self.track().duration;
        self.state.track_change_animation = true;
        self.pulse_generation += 1;
        info!("Now on '{}'", self.track().name);
        vec![
            Effect::Load {
                url: self.track().url.clone(),
                autoplay: self.state.is_playing,
            },
            Effect::StartPulse(self.pulse_generation),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn playlist(name: &str, tracks: usize) -> Playlist {
        Playlist {
            name: name.to_string(),
            artist: "Artist".to_string(),
            year: 2024,
            tracks: (0..tracks)
                .map(|i| Track {
                    name: format!("{name} {i}"),
                    url: format!("/music/{name}/{i}.mp3"),
                    duration: 100.0 + i as f64,
                })
                .collect(),
        }
    }

    fn player(sizes: &[usize]) -> Player {
        let playlists = sizes
            .iter()
            .enumerate()
            .map(|(i, n)| playlist(&format!("p{i}"), *n))
            .collect();
        Player::new(Library::new(playlists).unwrap(), 0, 0.7)
    }

    fn time(player: &Player, seconds: f64) -> Action {
        Action::TimeUpdate {
            url: player.track().url.clone(),
            seconds,
        }
    }

    fn ended(player: &Player) -> Action {
        Action::TrackEnded {
            url: player.track().url.clone(),
        }
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn mount_cues_first_track_of_initial_playlist() {
        let library = Library::new(vec![playlist("a", 2), playlist("b", 3)]).unwrap();
        let mut player = Player::new(library, 1, 0.7);
        let effects = player.mount();

        assert_eq!(player.state().playlist_index, 1);
        assert_eq!(player.state().track_index, 0);
        assert!(!player.state().is_playing);
        assert!(player.state().track_change_animation);
        assert_eq!(
            effects,
            vec![
                Effect::SetVolume(0.7),
                Effect::Load {
                    url: "/music/b/0.mp3".to_string(),
                    autoplay: false
                },
                Effect::StartPulse(1),
            ]
        );
    }

    #[test]
    fn initial_playlist_is_clamped() {
        let library = Library::new(vec![playlist("a", 1)]).unwrap();
        let player = Player::new(library, 9, 2.0);
        assert_eq!(player.state().playlist_index, 0);
        assert_eq!(player.state().volume, 1.0);
    }

    #[test]
    fn play_and_pause_transition() {
        let mut player = player(&[3]);
        let mut rng = rng();
        assert_eq!(player.apply(Action::Play, &mut rng), vec![Effect::Play]);
        assert!(player.state().is_playing);
        assert_eq!(player.apply(Action::Play, &mut rng), vec![]);
        assert_eq!(player.apply(Action::TogglePlayback, &mut rng), vec![Effect::Pause]);
        assert!(!player.state().is_playing);
        assert_eq!(player.apply(Action::Pause, &mut rng), vec![]);
    }

    #[test]
    fn rejected_play_reverts_and_notifies() {
        let mut player = player(&[3]);
        let mut rng = rng();
        player.apply(Action::Play, &mut rng);
        let before = player.state().clone();

        let effects = player.apply(Action::PlaybackRejected, &mut rng);
        assert_eq!(effects, vec![Effect::Notify(Notification::PLAYBACK_BLOCKED)]);
        assert!(!player.state().is_playing);
        assert_eq!(
            PlaybackState {
                is_playing: true,
                ..player.state().clone()
            },
            before
        );
    }

    #[test]
    fn select_playlist_resets_index_and_plays() {
        let mut player = player(&[3, 4]);
        let mut rng = rng();
        player.apply(Action::SelectTrack(2), &mut rng);
        player.apply(Action::TogglePlaylistMenu, &mut rng);

        let effects = player.apply(Action::SelectPlaylist(1), &mut rng);
        let state = player.state();
        assert_eq!(state.playlist_index, 1);
        assert_eq!(state.track_index, 0);
        assert!(state.is_playing);
        assert!(!state.is_playlist_menu_open);
        assert_eq!(player.playlist().name, "p1");
        assert_eq!(
            effects[0],
            Effect::Load {
                url: "/music/p1/0.mp3".to_string(),
                autoplay: true
            }
        );
    }

    #[test]
    fn select_playlist_out_of_range_is_ignored() {
        let mut player = player(&[2]);
        let before = player.state().clone();
        assert_eq!(player.apply(Action::SelectPlaylist(5), &mut rng()), vec![]);
        assert_eq!(player.state(), &before);
    }

    #[test]
    fn select_track_forces_playing_and_seeds_duration() {
        let mut player = player(&[3]);
        let mut rng = rng();
        player.apply(time(&player, 42.0), &mut rng);

        let effects = player.apply(Action::SelectTrack(2), &mut rng);
        let state = player.state();
        assert_eq!(state.track_index, 2);
        assert!(state.is_playing);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.duration, 102.0);
        assert!(state.track_change_animation);
        assert!(matches!(
            effects[0],
            Effect::Load { autoplay: true, .. }
        ));
    }

    #[test]
    fn select_current_track_keeps_position() {
        let mut player = player(&[3]);
        let mut rng = rng();
        player.apply(time(&player, 30.0), &mut rng);

        assert_eq!(player.apply(Action::SelectTrack(0), &mut rng), vec![Effect::Play]);
        assert_eq!(player.state().current_time, 30.0);
        assert_eq!(player.apply(Action::SelectTrack(0), &mut rng), vec![]);
    }

    #[test]
    fn skip_forward_sequential() {
        let mut player = player(&[4]);
        let mut rng = rng();
        for expected in [1, 2, 3, 0] {
            player.apply(Action::SkipForward, &mut rng);
            assert_eq!(player.state().track_index, expected);
        }
    }

    #[test]
    fn skip_forward_shuffle_avoids_current() {
        let mut player = player(&[5]);
        let mut rng = rng();
        player.apply(Action::ToggleShuffle, &mut rng);
        for _ in 0..100 {
            let current = player.state().track_index;
            player.apply(Action::SkipForward, &mut rng);
            assert_ne!(player.state().track_index, current);
        }
    }

    #[test]
    fn skip_back_restarts_after_three_seconds() {
        let mut player = player(&[3]);
        let mut rng = rng();
        player.apply(Action::SelectTrack(1), &mut rng);
        player.apply(time(&player, 3.5), &mut rng);

        assert_eq!(player.apply(Action::SkipBack, &mut rng), vec![Effect::Seek(0.0)]);
        assert_eq!(player.state().track_index, 1);
        assert_eq!(player.state().current_time, 0.0);
    }

    #[test]
    fn skip_back_moves_to_previous_within_three_seconds() {
        let mut player = player(&[3]);
        let mut rng = rng();
        player.apply(time(&player, 3.0), &mut rng);
        player.apply(Action::SkipBack, &mut rng);
        assert_eq!(player.state().track_index, 2);
        player.apply(Action::SkipBack, &mut rng);
        assert_eq!(player.state().track_index, 1);
    }

    #[test]
    fn repeat_restarts_on_track_end() {
        let mut player = player(&[3]);
        let mut rng = rng();
        player.apply(Action::SelectTrack(1), &mut rng);
        player.apply(Action::ToggleRepeat, &mut rng);
        player.apply(time(&player, 101.0), &mut rng);

        let effects = player.apply(ended(&player), &mut rng);
        assert_eq!(effects, vec![Effect::Seek(0.0), Effect::Play]);
        assert_eq!(player.state().track_index, 1);
        assert_eq!(player.state().current_time, 0.0);
        assert!(player.state().is_playing);
    }

    #[test]
    fn track_end_walks_the_playlist() {
        let mut player = player(&[3]);
        let mut rng = rng();
        player.apply(Action::Play, &mut rng);
        let visited: Vec<usize> = (0..3)
            .map(|_| {
                player.apply(ended(&player), &mut rng);
                player.state().track_index
            })
            .collect();
        assert_eq!(visited, vec![1, 2, 0]);
        assert!(player.state().is_playing);
    }

    #[test]
    fn single_track_end_restarts() {
        let mut player = player(&[1]);
        let mut rng = rng();
        player.apply(Action::Play, &mut rng);
        player.apply(time(&player, 50.0), &mut rng);
        assert_eq!(
            player.apply(ended(&player), &mut rng),
            vec![Effect::Seek(0.0), Effect::Play]
        );
        assert_eq!(player.state().track_index, 0);
    }

    #[test]
    fn seek_is_clamped_and_optimistic() {
        let mut player = player(&[1]);
        let mut rng = rng();
        assert_eq!(player.apply(Action::Seek(40.0), &mut rng), vec![Effect::Seek(40.0)]);
        assert_eq!(player.state().current_time, 40.0);
        player.apply(Action::Seek(1000.0), &mut rng);
        assert_eq!(player.state().current_time, 100.0);
        player.apply(Action::Seek(-5.0), &mut rng);
        assert_eq!(player.state().current_time, 0.0);
    }

    #[test]
    fn volume_zero_mutes_and_positive_unmutes() {
        let mut player = player(&[1]);
        let mut rng = rng();
        assert_eq!(player.apply(Action::SetVolume(0.0), &mut rng), vec![Effect::SetVolume(0.0)]);
        assert!(player.state().is_muted);

        player.apply(Action::SetVolume(0.4), &mut rng);
        assert!(!player.state().is_muted);

        player.apply(Action::ToggleMute, &mut rng);
        assert!(player.state().is_muted);
        assert_eq!(player.apply(Action::SetVolume(0.5), &mut rng), vec![Effect::SetVolume(0.5)]);
        assert!(!player.state().is_muted);
    }

    #[test]
    fn mute_keeps_stored_volume() {
        let mut player = player(&[1]);
        let mut rng = rng();
        player.apply(Action::SetVolume(0.3), &mut rng);
        assert_eq!(player.apply(Action::ToggleMute, &mut rng), vec![Effect::SetVolume(0.0)]);
        assert_eq!(player.state().volume, 0.3);
        assert_eq!(player.apply(Action::ToggleMute, &mut rng), vec![Effect::SetVolume(0.3)]);
    }

    #[test]
    fn unmuting_at_zero_volume_stays_silent() {
        let mut player = player(&[1]);
        let mut rng = rng();
        player.apply(Action::SetVolume(0.0), &mut rng);
        player.apply(Action::ToggleMute, &mut rng);
        assert!(!player.state().is_muted);
        assert_eq!(player.effective_volume(), 0.0);
        assert_eq!(player.state().volume, 0.0);
    }

    #[test]
    fn toggles_are_involutions() {
        let mut player = player(&[2]);
        let mut rng = rng();
        let before = player.state().clone();
        for action in [Action::ToggleRepeat, Action::ToggleShuffle, Action::TogglePlaylistMenu] {
            player.apply(action.clone(), &mut rng);
            player.apply(action, &mut rng);
        }
        assert_eq!(player.state(), &before);
    }

    #[test]
    fn decoded_duration_replaces_declared_one() {
        let mut player = player(&[2]);
        let mut rng = rng();
        player.apply(
            Action::DurationChanged {
                url: "/music/p0/0.mp3".to_string(),
                duration: 98.25,
            },
            &mut rng,
        );
        assert_eq!(player.state().duration, 98.25);

        for (url, duration) in [
            ("/music/p0/1.mp3", 12.0),
            ("/music/p0/0.mp3", f64::NAN),
            ("/music/p0/0.mp3", 0.0),
        ] {
            player.apply(
                Action::DurationChanged {
                    url: url.to_string(),
                    duration,
                },
                &mut rng,
            );
        }
        assert_eq!(player.state().duration, 98.25);
    }

    #[test]
    fn pulse_clears_only_for_latest_change() {
        let mut player = player(&[3]);
        let mut rng = rng();
        player.mount();
        player.apply(Action::SelectTrack(1), &mut rng);
        let effects = player.apply(Action::SelectTrack(2), &mut rng);
        assert_eq!(effects.last(), Some(&Effect::StartPulse(3)));

        player.apply(Action::PulseElapsed(2), &mut rng);
        assert!(player.state().track_change_animation);
        player.apply(Action::PulseElapsed(3), &mut rng);
        assert!(!player.state().track_change_animation);
    }

    #[test]
    fn load_autoplays_only_when_playing() {
        let mut player = player(&[3]);
        let mut rng = rng();
        let effects = player.apply(Action::SkipForward, &mut rng);
        assert_eq!(
            effects[0],
            Effect::Load {
                url: "/music/p0/1.mp3".to_string(),
                autoplay: false
            }
        );
    }

    #[test]
    fn late_end_of_previous_track_is_ignored() {
        let mut player = player(&[3]);
        let mut rng = rng();
        player.apply(Action::Play, &mut rng);
        player.apply(time(&player, 99.8), &mut rng);
        let late_end = ended(&player);

        player.apply(Action::SkipForward, &mut rng);
        assert_eq!(player.state().track_index, 1);
        assert!(player.apply(late_end, &mut rng).is_empty());
        assert_eq!(player.state().track_index, 1);
    }

    #[test]
    fn late_position_of_previous_track_is_ignored() {
        let mut player = player(&[3]);
        let mut rng = rng();
        player.apply(Action::SelectTrack(1), &mut rng);
        let late_tick = time(&player, 80.0);

        player.apply(Action::SelectTrack(2), &mut rng);
        player.apply(late_tick, &mut rng);
        assert_eq!(player.state().current_time, 0.0);

        player.apply(Action::SkipBack, &mut rng);
        assert_eq!(player.state().track_index, 1);
    }
}
