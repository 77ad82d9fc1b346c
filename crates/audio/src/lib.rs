//! Background music service.
//!
//! The game only ever starts or stops one looping tune. With the `audio`
//! feature the tune is a procedural [`Melody`] played through `rodio`;
//! without it (or when no output device is available) [`MusicPlayer`] still
//! tracks the on/off flag so the HUD stays truthful.

use anyhow::Result;

/// Playback volume for the background loop.
pub const MUSIC_VOLUME: f32 = 0.4;

/// Endless procedural tune: a short square-ish melody with a soft envelope.
#[derive(Debug, Clone)]
pub struct Melody {
    sample_rate: u32,
    channels: u16,
    frame: u64,
    chan: u16,
}

impl Melody {
    /// (frequency in Hz, length in eighth notes); 0 Hz is a rest.
    const NOTES: [(f32, u64); 16] = [
        (659.25, 2),
        (493.88, 1),
        (523.25, 1),
        (587.33, 2),
        (523.25, 1),
        (493.88, 1),
        (440.0, 2),
        (440.0, 1),
        (523.25, 1),
        (659.25, 2),
        (587.33, 1),
        (523.25, 1),
        (493.88, 3),
        (523.25, 1),
        (587.33, 2),
        (0.0, 2),
    ];

    pub fn new() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 2,
            frame: 0,
            chan: 0,
        }
    }

    fn eighth_frames(&self) -> u64 {
        (self.sample_rate as u64) / 6
    }

    fn loop_frames(&self) -> u64 {
        Self::NOTES.iter().map(|(_, len)| len).sum::<u64>() * self.eighth_frames()
    }

    /// Note sounding at `frame`, and how far into it we are.
    fn note_at(&self, frame: u64) -> (f32, u64, u64) {
        let eighth = self.eighth_frames();
        let mut pos = frame % self.loop_frames();
        for &(freq, len) in Self::NOTES.iter() {
            let note_frames = len * eighth;
            if pos < note_frames {
                return (freq, pos, note_frames);
            }
            pos -= note_frames;
        }
        (0.0, 0, eighth)
    }

    fn sample(&self) -> f32 {
        let (freq, pos, len) = self.note_at(self.frame);
        if freq == 0.0 {
            return 0.0;
        }

        let attack = (self.sample_rate as u64) / 200;
        let release = (self.sample_rate as u64) / 30;
        let env = if pos < attack {
            pos as f32 / attack.max(1) as f32
        } else if pos + release >= len {
            len.saturating_sub(pos) as f32 / release.max(1) as f32
        } else {
            1.0
        };

        let t = pos as f32 / self.sample_rate as f32;
        let phase = 2.0 * std::f32::consts::PI * freq * t;
        // Odd harmonics give a mellow chiptune timbre.
        let wave = phase.sin() + (phase * 3.0).sin() / 3.0 + (phase * 5.0).sin() / 5.0;
        wave * 0.25 * env
    }
}

impl Default for Melody {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Melody {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let sample = self.sample();

        // Interleaved channels share one frame.
        self.chan += 1;
        if self.chan >= self.channels {
            self.chan = 0;
            self.frame = self.frame.wrapping_add(1);
        }
        Some(sample)
    }
}

#[cfg(feature = "audio")]
impl rodio::Source for Melody {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<std::time::Duration> {
        None
    }
}

#[cfg(feature = "audio")]
struct Output {
    _stream: rodio::OutputStream,
    sink: rodio::Sink,
}

#[cfg(feature = "audio")]
impl Output {
    fn open() -> Result<Self> {
        let (stream, handle) = rodio::OutputStream::try_default()?;
        let sink = rodio::Sink::try_new(&handle)?;
        sink.set_volume(MUSIC_VOLUME);
        sink.pause();
        sink.append(Melody::new());
        Ok(Self {
            _stream: stream,
            sink,
        })
    }
}

/// Start/stop control for the background loop. Starts stopped.
pub struct MusicPlayer {
    playing: bool,
    #[cfg(feature = "audio")]
    output: Option<Output>,
}

impl MusicPlayer {
    /// Open the default output device.
    ///
    /// Fails if the device cannot be opened; callers fall back to
    /// [`MusicPlayer::silent`].
    #[cfg(feature = "audio")]
    pub fn init() -> Result<Self> {
        Ok(Self {
            playing: false,
            output: Some(Output::open()?),
        })
    }

    /// Built without the `audio` feature: always silent.
    #[cfg(not(feature = "audio"))]
    pub fn init() -> Result<Self> {
        Ok(Self::silent())
    }

    /// A player with no device that only tracks the flag.
    pub fn silent() -> Self {
        Self {
            playing: false,
            #[cfg(feature = "audio")]
            output: None,
        }
    }

    /// Whether a real output device is attached.
    #[cfg(feature = "audio")]
    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }

    #[cfg(not(feature = "audio"))]
    pub fn has_output(&self) -> bool {
        false
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flip between playing and stopped. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_playing(!self.playing);
        self.playing
    }

    pub fn set_playing(&mut self, on: bool) {
        self.playing = on;
        self.sync_output();
    }

    /// Stop playback and release the device.
    pub fn shutdown(&mut self) {
        self.playing = false;
        self.release_output();
    }

    #[cfg(feature = "audio")]
    fn sync_output(&self) {
        if let Some(output) = &self.output {
            if self.playing {
                output.sink.play();
            } else {
                output.sink.pause();
            }
        }
    }

    #[cfg(not(feature = "audio"))]
    fn sync_output(&self) {}

    #[cfg(feature = "audio")]
    fn release_output(&mut self) {
        if let Some(output) = self.output.take() {
            output.sink.stop();
        }
    }

    #[cfg(not(feature = "audio"))]
    fn release_output(&mut self) {}
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_player_tracks_flag() {
        let mut player = MusicPlayer::silent();
        assert!(!player.is_playing());
        assert!(!player.has_output());

        assert!(player.toggle());
        assert!(player.is_playing());
        assert!(!player.toggle());

        player.set_playing(true);
        player.shutdown();
        assert!(!player.is_playing());
    }

    #[test]
    fn melody_is_endless_and_bounded() {
        let mut melody = Melody::new();
        let loop_samples = melody.loop_frames() as usize * 2;
        let mut peak = 0.0f32;
        for sample in melody.by_ref().take(loop_samples + 1000) {
            assert!(sample.is_finite());
            peak = peak.max(sample.abs());
        }
        assert!(peak > 0.05);
        assert!(peak <= 1.0);
        assert!(melody.next().is_some());
    }

    #[test]
    fn melody_channels_share_frames() {
        let mut melody = Melody::new();
        let left = melody.next();
        let right = melody.next();
        assert_eq!(left, right);
    }

    #[test]
    fn note_lookup_wraps_around_loop() {
        let melody = Melody::new();
        let total = melody.loop_frames();
        assert_eq!(melody.note_at(0), melody.note_at(total));
        assert_eq!(melody.note_at(0).0, 659.25);
        assert_eq!(melody.note_at(total - 1).0, 0.0);
    }
}
