use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use crate::error::TtsError;

/// Re-encodes synthesized artifacts with ffmpeg
///
/// Applies pitch and speed adjustments and downmixes to a mono
/// 44.1 kHz stream, replacing the artifact in place on success.
pub struct AudioEncoder {
    ffmpeg_path: PathBuf,
    speed: f64,
    pitch: f64,
}

impl AudioEncoder {
    pub fn new(ffmpeg_path: PathBuf, speed: f64, pitch: f64) -> Self {
        Self {
            ffmpeg_path,
            speed,
            pitch,
        }
    }

    /// Audio filter chain for the configured speed and pitch
    ///
    /// Pitch is shifted through a sample-rate change, which also alters
    /// tempo; the tempo factor compensates so the net speed matches the
    /// configured one.
    fn filter(&self) -> String {
        let tempo = self.speed / self.pitch;
        format!("asetrate=44100*{},atempo={tempo},aformat=s16,pan=mono|c0=c0+c1", self.pitch)
    }

    /// Re-encode `path` in place
    ///
    /// Writes to a sibling temp file and swaps it over the original when
    /// ffmpeg succeeds. On a non-zero ffmpeg exit the original artifact
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if ffmpeg cannot be spawned or the artifact swap
    /// fails. A non-zero ffmpeg exit is logged, not returned as an error.
    pub async fn reencode(&self, path: &Path) -> crate::error::Result<()> {
        let tmp_path = temp_sibling(path)?;

        tracing::debug!(
            "re-encoding {} (speed={}, pitch={})",
            path.display(),
            self.speed,
            self.pitch,
        );

        let mut child = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(path)
            .arg("-filter:a")
            .arg(self.filter())
            .args(["-ar", "44100", "-ac", "1", "-b:a", "64k"])
            .arg(&tmp_path)
            .arg("-y")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let log_stdout = tokio::spawn(log_lines(child.stdout.take(), "ffmpeg stdout"));
        let log_stderr = tokio::spawn(log_lines(child.stderr.take(), "ffmpeg stderr"));

        let status = child.wait().await?;
        let _ = log_stdout.await;
        let _ = log_stderr.await;

        if !status.success() {
            tracing::error!("ffmpeg exited with {status} while re-encoding {}", path.display());
            return Ok(());
        }

        tokio::fs::remove_file(path).await?;
        tokio::fs::rename(&tmp_path, path).await?;

        Ok(())
    }
}

/// `<stem>_tmp.<ext>` next to the original artifact
fn temp_sibling(path: &Path) -> crate::error::Result<PathBuf> {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| TtsError::ConfigError(format!("artifact path has no file stem: {}", path.display())))?;
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let file_name = if extension.is_empty() {
        format!("{stem}_tmp")
    } else {
        format!("{stem}_tmp.{extension}")
    };

    Ok(path.with_file_name(file_name))
}

/// Forward a child output stream to the debug log, line by line
async fn log_lines<R>(reader: Option<R>, stream: &'static str)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let Some(reader) = reader else { return };

    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        tracing::debug!("{stream}: {line}");
    }
}
