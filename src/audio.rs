use log::warn;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;

/// Best-effort sound effects: any failure here leaves the game silent,
/// never broken.
pub struct AudioManager {
    output: Option<(OutputStream, OutputStreamHandle)>,
    /// Pre-loaded and buffered fire sound (None if loading failed)
    fire_sound: Option<Buffered<Decoder<BufReader<File>>>>,
}

impl AudioManager {
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(err) => {
                warn!("no audio output available: {err}");
                None
            }
        };

        // Pre-load and buffer the fire sound at startup
        let fire_sound = match Self::load_sound("assets/sounds/laser.wav") {
            Ok(sound) => Some(sound),
            Err(err) => {
                warn!("fire sound unavailable: {err}");
                None
            }
        };

        Self { output, fire_sound }
    }

    fn load_sound(
        path: &str,
    ) -> Result<Buffered<Decoder<BufReader<File>>>, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let source = Decoder::new(BufReader::new(file))?;
        Ok(source.buffered())
    }

    /// Play the fire sound, fire-and-forget. Playback errors are ignored.
    pub fn play_fire_sound(&self) {
        let (Some((_, handle)), Some(fire_sound)) = (self.output.as_ref(), self.fire_sound.as_ref())
        else {
            return;
        };
        if let Ok(sink) = Sink::try_new(handle) {
            sink.set_volume(0.3);
            // Clone the buffered source (fast - just clones references)
            sink.append(fire_sound.clone());
            sink.detach();
        }
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}
