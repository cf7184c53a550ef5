//! Terminal audio sink: logs the cue and rings the terminal bell.
use std::io::Write;

use log::info;
use quote_analyzer::AudioSink;

/// Audio sink for interactive terminals.
pub struct TerminalSpeaker;

impl TerminalSpeaker {
    fn ring(&self, times: usize) {
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all("\x07".repeat(times).as_bytes());
        let _ = stderr.flush();
    }
}

impl AudioSink for TerminalSpeaker {
    fn play_happy_music(&self) {
        info!("♪ happy tune: trading above the previous close");
        self.ring(1);
    }

    fn play_sad_music(&self) {
        info!("♪ sad tune: down one percent or more since the close");
        self.ring(2);
    }

    fn play_error_music(&self) {
        info!("♪ error tone: no quote available");
        self.ring(3);
    }
}
