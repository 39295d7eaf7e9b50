/// Interactive session — the Generate/Export actions, their notifications,
/// the simulated processing delay and keyboard shortcuts.
///
/// A session owns the single current output. Generation is split into
/// `begin_generate` and `complete` so the caller can schedule the delay with
/// whatever timer it has (`setTimeout` in the browser, a sleep in the CLI).
/// The session keeps the pending request itself; only one generation may be
/// in flight at a time.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::core::config::SessionConfig;
use crate::core::export::ExportDocument;
use crate::core::pipeline::{BlogGenerator, GeneratedPost};
use crate::schema::request::BlogRequest;

pub const GENERATION_FAILED: &str = "Error generating blog post. Please try again.";
pub const EXPORT_FAILED: &str = "Error exporting blog post. Please try again.";
pub const EXPORT_SUCCEEDED: &str = "Blog post exported successfully!";
pub const GENERATION_IN_PROGRESS: &str = "A blog post is already being generated.";
pub const NOTHING_TO_EXPORT: &str = "Generate a blog post before exporting.";
pub const NOTHING_PENDING: &str = "No blog post generation is pending.";

/// Placeholder topics offered, one at a time, while the topic field is empty.
pub const TOPIC_SUGGESTIONS: [&str; 10] = [
    "The Future of Artificial Intelligence",
    "Web Development Best Practices",
    "Digital Marketing Strategies",
    "Cybersecurity Fundamentals",
    "Sustainable Business Practices",
    "Remote Work Culture",
    "Data Privacy and Security",
    "E-commerce Trends",
    "Mobile App Development",
    "Cloud Computing Benefits",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Error,
    Success,
}

/// A transient message for the user, dismissed after `dismiss_after_ms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NoticeKind,
    pub message: String,
    pub dismiss_after_ms: u64,
}

impl Notification {
    fn new(kind: NoticeKind, message: impl Into<String>, config: &SessionConfig) -> Self {
        Self {
            kind,
            message: message.into(),
            dismiss_after_ms: config.notification_ms,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// A user-invocable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Generate,
    Export,
}

/// A key press with its modifier state. `key` follows DOM `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>, ctrl: bool, meta: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
            meta,
        }
    }

    fn has_command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// The result of a successful export to disk.
#[derive(Debug, Clone)]
pub struct Exported {
    pub path: PathBuf,
    pub notice: Notification,
}

pub struct Session {
    generator: BlogGenerator,
    config: SessionConfig,
    rng: StdRng,
    /// Validated request waiting out its delay.
    pending: Option<BlogRequest>,
    current: Option<GeneratedPost>,
    next_suggestion: usize,
}

impl Session {
    pub fn new(generator: BlogGenerator, config: SessionConfig, seed: u64) -> Self {
        Self {
            generator,
            config,
            rng: StdRng::seed_from_u64(seed),
            pending: None,
            current: None,
            next_suggestion: 0,
        }
    }

    pub fn generator(&self) -> &BlogGenerator {
        &self.generator
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether a generation has begun and not yet completed.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// The request waiting to be completed, if any.
    pub fn pending(&self) -> Option<&BlogRequest> {
        self.pending.as_ref()
    }

    pub fn current(&self) -> Option<&GeneratedPost> {
        self.current.as_ref()
    }

    fn notice(&self, kind: NoticeKind, message: impl Into<String>) -> Notification {
        Notification::new(kind, message, &self.config)
    }

    /// Validate the request and enter the busy state. Returns the delay to
    /// wait before calling `complete`.
    ///
    /// Nothing changes on failure: the current output stays as it was.
    pub fn begin_generate(&mut self, request: BlogRequest) -> Result<Duration, Notification> {
        if self.is_busy() {
            warn!("generate requested while another generation is in flight");
            return Err(self.notice(NoticeKind::Error, GENERATION_IN_PROGRESS));
        }
        if let Err(e) = request.validate() {
            debug!(error = %e, "rejected blog request");
            return Err(self.notice(NoticeKind::Error, e.to_string()));
        }

        let (min, max) = self.config.delay_ms;
        let millis = if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        };
        debug!(delay_ms = millis, "scheduled generation");

        self.pending = Some(request);
        Ok(Duration::from_millis(millis))
    }

    /// Run the assembler for the pending request and return to idle,
    /// whether or not assembly succeeded.
    pub fn complete(&mut self) -> Result<&GeneratedPost, Notification> {
        let Some(request) = self.pending.take() else {
            warn!("complete called with no pending generation");
            return Err(self.notice(NoticeKind::Error, NOTHING_PENDING));
        };
        match self.generator.generate(&request) {
            Ok(post) => Ok(self.current.insert(post)),
            Err(e) => {
                error!(error = %e, "blog generation failed");
                Err(self.notice(NoticeKind::Error, GENERATION_FAILED))
            }
        }
    }

    /// Drop the pending request, if any, and return to idle. The current
    /// output is untouched.
    pub fn cancel(&mut self) {
        if let Some(request) = self.pending.take() {
            debug!(topic = request.topic(), "cancelled pending generation");
        }
    }

    /// Begin, wait out the delay on this thread, then complete.
    pub fn generate_blocking(
        &mut self,
        request: BlogRequest,
    ) -> Result<&GeneratedPost, Notification> {
        let delay = self.begin_generate(request)?;
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.complete()
    }

    /// Format the current output as a standalone document.
    pub fn export(&self) -> Result<ExportDocument, Notification> {
        if self.is_busy() {
            return Err(self.notice(NoticeKind::Error, GENERATION_IN_PROGRESS));
        }
        match &self.current {
            Some(post) => Ok(self.generator.export(post)),
            None => Err(self.notice(NoticeKind::Error, NOTHING_TO_EXPORT)),
        }
    }

    /// Export the current output into `dir`.
    pub fn export_to(&self, dir: &Path) -> Result<Exported, Notification> {
        let document = self.export()?;
        match document.write_into(dir) {
            Ok(path) => {
                info!(path = %path.display(), "exported blog post");
                Ok(Exported {
                    path,
                    notice: self.notice(NoticeKind::Success, EXPORT_SUCCEEDED),
                })
            }
            Err(e) => {
                error!(error = %e, dir = %dir.display(), "blog export failed");
                Err(self.notice(NoticeKind::Error, EXPORT_FAILED))
            }
        }
    }

    /// Success notice for an export completed outside the session, such as
    /// a browser download.
    pub fn export_succeeded(&self) -> Notification {
        info!("exported blog post");
        self.notice(NoticeKind::Success, EXPORT_SUCCEEDED)
    }

    /// Error notice for an export that failed outside the session. The cause
    /// is logged, never shown.
    pub fn export_failed(&self, cause: &str) -> Notification {
        error!(error = cause, "blog export failed");
        self.notice(NoticeKind::Error, EXPORT_FAILED)
    }

    /// Map a key press to an action.
    ///
    /// Ctrl/Cmd+Enter generates. Ctrl/Cmd+S exports, but only when there is
    /// output and no generation is pending.
    pub fn handle_key(&self, chord: &KeyChord) -> Option<Action> {
        if !chord.has_command_modifier() {
            return None;
        }
        match chord.key.as_str() {
            "Enter" => Some(Action::Generate),
            "s" if self.current.is_some() && !self.is_busy() => Some(Action::Export),
            _ => None,
        }
    }

    /// The next placeholder topic, cycling through `TOPIC_SUGGESTIONS`.
    pub fn next_suggestion(&mut self) -> &'static str {
        let suggestion = TOPIC_SUGGESTIONS[self.next_suggestion];
        self.next_suggestion = (self.next_suggestion + 1) % TOPIC_SUGGESTIONS.len();
        suggestion
    }
}
