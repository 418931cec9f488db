use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::encode::sink::{FrameOrder, FrameSink, SinkConfig, check_frame_size};
use crate::foundation::core::{Fps, FrameIndex, Rgba};
use crate::foundation::error::{WhisperError, WhisperResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::backend::FrameRGBA;
use crate::render::theme;

/// Options for [`FfmpegSink`].
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    pub out_path: PathBuf,
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
    /// Colour transparent pixels are flattened onto.
    pub background: Rgba,
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            background: theme::BACKGROUND,
        }
    }
}

/// Spawns the system `ffmpeg` and streams raw RGBA frames to its stdin, producing an h264 MP4.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,
    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    order: FrameOrder,
    frames: u64,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            scratch: Vec::new(),
            cfg: None,
            order: FrameOrder::default(),
            frames: 0,
        }
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> WhisperResult<()> {
        if cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(WhisperError::validation("fps must be non-zero"));
        }
        if cfg.width == 0 || cfg.height == 0 {
            return Err(WhisperError::validation(
                "ffmpeg sink width/height must be non-zero",
            ));
        }
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(WhisperError::validation(
                "ffmpeg sink width/height must be even (required for yuv420p mp4 output)",
            ));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(WhisperError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(WhisperError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.arg(if self.opts.overwrite { "-y" } else { "-n" });
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
        ]);
        push_input_fps(&mut cmd, cfg.fps);
        cmd.args(["-i", "pipe:0"]);
        cmd.args([
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ]);
        cmd.arg(&self.opts.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            WhisperError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| WhisperError::encode("failed to open ffmpeg stdin"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| WhisperError::encode("failed to open ffmpeg stderr"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut bytes = Vec::new();
            stderr.read_to_end(&mut bytes)?;
            Ok(bytes)
        });

        tracing::debug!(
            width = cfg.width,
            height = cfg.height,
            out = %self.opts.out_path.display(),
            "ffmpeg started"
        );
        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.order.reset();
        self.frames = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> WhisperResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| WhisperError::encode("ffmpeg sink not started"))?;
        check_frame_size(cfg, frame)?;
        self.order.accept(idx)?;

        flatten_over_background(&mut self.scratch, frame, self.opts.background)?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(WhisperError::encode("ffmpeg sink is already finalized"));
        };
        use std::io::Write as _;
        stdin.write_all(&self.scratch).map_err(|e| {
            WhisperError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        self.frames += 1;
        Ok(())
    }

    fn end(&mut self) -> WhisperResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| WhisperError::encode("ffmpeg sink not started"))?;
        let status = child
            .wait()
            .map_err(|e| WhisperError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| WhisperError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| WhisperError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };
        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(WhisperError::encode(format!(
                "ffmpeg exited with status {status}: {}",
                stderr.trim()
            )));
        }

        tracing::info!(
            frames = self.frames,
            out = %self.opts.out_path.display(),
            "mp4 written"
        );
        self.cfg = None;
        Ok(())
    }
}

fn push_input_fps(cmd: &mut Command, fps: Fps) {
    // `-r` before `-i` sets the rawvideo input rate.
    cmd.args(["-r", &format!("{}/{}", fps.num, fps.den)]);
}

/// Composite `frame` over an opaque `bg` into straight, opaque RGBA8.
fn flatten_over_background(dst: &mut [u8], frame: &FrameRGBA, bg: Rgba) -> WhisperResult<()> {
    if dst.len() != frame.data.len() || !dst.len().is_multiple_of(4) {
        return Err(WhisperError::validation(
            "flatten expects equal-length rgba8 buffers",
        ));
    }
    let straight;
    let src: &[u8] = if frame.premultiplied {
        &frame.data
    } else {
        straight = premultiply(&frame.data);
        &straight
    };

    let [bg_r, bg_g, bg_b, _] = bg.to_rgba8();
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }
        let inv = 255 - a;
        for (i, bg_c) in [bg_r, bg_g, bg_b].into_iter().enumerate() {
            let c = u16::from(s[i]) + u16::from(mul_div255_u8(u16::from(bg_c), inv));
            d[i] = c.min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

fn premultiply(straight: &[u8]) -> Vec<u8> {
    let mut out = straight.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = mul_div255_u8(u16::from(*c), a);
        }
    }
    out
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> WhisperResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// `true` when `ffmpeg -version` runs successfully from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
