use std::{
    fs,
    process::{
        Command,
        Stdio,
    },
};

use base64::{
    engine::general_purpose::STANDARD,
    Engine,
};

use crate::core::AnkiwordError;

/// Two-step local synthesis: the OS speech command produces an uncompressed
/// AIFF, the transcoder turns it into an Anki-friendly MP3. Commands are
/// replaceable so failure paths can be exercised in tests.
pub struct Synthesizer {
    speech_cmd: String,
    transcode_cmd: String,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self { speech_cmd: "say".to_string(), transcode_cmd: "ffmpeg".to_string() }
    }
}

impl Synthesizer {
    pub fn with_commands(speech_cmd: &str, transcode_cmd: &str) -> Self {
        Self { speech_cmd: speech_cmd.to_string(), transcode_cmd: transcode_cmd.to_string() }
    }

    /// Argument vectors for both steps, in invocation order: speech first,
    /// transcoder second.
    pub fn command_plan(&self, text: &str, stem: &str) -> [Vec<String>; 2] {
        let aiff = format!("{}.aiff", stem);
        let mp3 = format!("{}.mp3", stem);

        [
            vec![self.speech_cmd.clone(), "-o".to_string(), aiff.clone(), text.to_string()],
            vec![
                self.transcode_cmd.clone(),
                "-y".to_string(),
                "-i".to_string(),
                aiff,
                "-codec:a".to_string(),
                "libmp3lame".to_string(),
                "-qscale:a".to_string(),
                "2".to_string(),
                mp3,
            ],
        ]
    }

    /// Base64 payload for `storeMediaFile`, or `None` when the text is empty
    /// or any step fails. A failed field leaves its sound blank, it never
    /// aborts the run.
    pub fn synthesize_base64(&self, text: &str, stem: &str) -> Option<String> {
        if text.is_empty() {
            return None;
        }

        match self.synthesize(text, stem) {
            Ok(data) => Some(data),
            Err(e) => {
                let preview: String = text.chars().take(20).collect();
                eprintln!("Audio error for '{}...': {}", preview, e);
                None
            }
        }
    }

    fn synthesize(&self, text: &str, stem: &str) -> Result<String, AnkiwordError> {
        let [speech, transcode] = self.command_plan(text, stem);

        run_step(&speech, false)?;
        // The transcoder's own console output is noise, keep it quiet.
        run_step(&transcode, true)?;

        let mp3 = format!("{}.mp3", stem);
        let data = STANDARD.encode(fs::read(&mp3)?);

        fs::remove_file(format!("{}.aiff", stem))?;
        fs::remove_file(&mp3)?;

        Ok(data)
    }
}

fn run_step(argv: &[String], quiet: bool) -> Result<(), AnkiwordError> {
    let mut command = Command::new(&argv[0]);
    command.args(&argv[1..]);
    if quiet {
        command.stdout(Stdio::null()).stderr(Stdio::null());
    }

    let status = command
        .status()
        .map_err(|e| AnkiwordError::Audio(format!("could not run {}: {}", argv[0], e)))?;

    if !status.success() {
        return Err(AnkiwordError::Audio(format!("{} exited with {}", argv[0], status)));
    }

    Ok(())
}
