//! WASM bindings for blog-generator — powers the browser page.
//!
//! The page owns the timer: it calls `begin_generate`, waits `delay_ms` with
//! `setTimeout`, then calls `complete` (or `cancel` if it gives up). Downloads
//! are done page-side from the document returned by `export`; the page then
//! reports the outcome through `finish_export` to get the notice to show.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use blog_generator::core::config::SessionConfig;
use blog_generator::core::pipeline::BlogGenerator;
use blog_generator::core::session::{KeyChord, Notification, Session, TOPIC_SUGGESTIONS};
use blog_generator::schema::length::Length;
use blog_generator::schema::request::BlogRequest;
use blog_generator::schema::tone::Tone;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(Serialize)]
struct Reply<T: Serialize> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<Notification>,
}

impl<T: Serialize> Reply<T> {
    fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            notice: None,
        }
    }

    fn failed(notice: Notification) -> Self {
        Self {
            ok: false,
            data: None,
            notice: Some(notice),
        }
    }
}

impl Reply<()> {
    fn notice(notice: Notification) -> Self {
        Self {
            ok: !notice.is_error(),
            data: None,
            notice: Some(notice),
        }
    }
}

#[derive(Serialize)]
struct Scheduled {
    delay_ms: u64,
}

#[derive(Serialize)]
struct ToneInfo {
    name: &'static str,
    label: &'static str,
    sections: [&'static str; 5],
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {e}"))
}

fn js_error(message: String) -> JsError {
    JsError::new(&message)
}

// ---------------------------------------------------------------------------
// BlogGeneratorDemo — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct BlogGeneratorDemo {
    session: Session,
}

#[wasm_bindgen]
impl BlogGeneratorDemo {
    /// Create a new instance. `seed` drives the simulated delay.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<BlogGeneratorDemo, JsError> {
        Self::with_config(SessionConfig::default(), seed).map_err(js_error)
    }

    /// Validate the form and schedule a generation.
    ///
    /// Expected JSON shape:
    /// ```json
    /// {
    ///   "topic": "Remote Work Culture",
    ///   "tone": "casual",
    ///   "length": "medium",
    ///   "keywords": "async, trust"
    /// }
    /// ```
    /// Returns `{"ok":true,"data":{"delay_ms":n}}` or `{"ok":false,"notice":{..}}`.
    /// Unknown tone or length values are rejected with a `JsError`.
    pub fn begin_generate(&mut self, form_json: &str) -> Result<String, JsError> {
        self.begin_generate_json(form_json).map_err(js_error)
    }

    /// Finish the scheduled generation. Returns the fragment markup.
    pub fn complete(&mut self) -> Result<String, JsError> {
        self.complete_json().map_err(js_error)
    }

    /// Abandon the scheduled generation, e.g. when the page's timer failed.
    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Build the downloadable document for the current post.
    /// Returns `{"ok":true,"data":{"filename":..,"html":..}}`. No notice is
    /// attached; call `finish_export` once the download has been attempted.
    pub fn export(&self) -> Result<String, JsError> {
        self.export_json().map_err(js_error)
    }

    /// Report the outcome of the page-side download. Returns the success or
    /// error notice to show; `cause` is logged, never shown.
    pub fn finish_export(&self, ok: bool, cause: Option<String>) -> Result<String, JsError> {
        self.finish_export_json(ok, cause.as_deref()).map_err(js_error)
    }

    /// Map a `keydown` event to `"generate"`, `"export"`, or `undefined`.
    pub fn handle_key(&self, key: &str, ctrl: bool, meta: bool) -> Option<String> {
        self.session
            .handle_key(&KeyChord::new(key, ctrl, meta))
            .and_then(|action| serde_json::to_value(action).ok())
            .and_then(|value| value.as_str().map(str::to_string))
    }

    pub fn is_busy(&self) -> bool {
        self.session.is_busy()
    }

    /// Placeholder text for an empty topic field.
    pub fn next_suggestion(&mut self) -> String {
        self.session.next_suggestion().to_string()
    }

    /// Return JSON array of topics with hand-written content.
    pub fn topics(&self) -> Result<String, JsError> {
        to_json(&self.session.generator().library().topics()).map_err(js_error)
    }

    /// Return JSON array of tone descriptions.
    pub fn tones() -> String {
        let tones: Vec<ToneInfo> = Tone::ALL
            .into_iter()
            .map(|tone| ToneInfo {
                name: tone.name(),
                label: tone.label(),
                sections: tone.template().sections,
            })
            .collect();
        serde_json::to_string(&tones).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of length names.
    pub fn lengths() -> String {
        let names: Vec<&str> = Length::ALL.iter().map(|l| l.name()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of all placeholder suggestions.
    pub fn suggestions() -> String {
        serde_json::to_string(&TOPIC_SUGGESTIONS).unwrap_or_else(|_| "[]".to_string())
    }
}

// JSON logic behind the exported methods. Errors are plain strings here so
// this half also runs off-wasm.
impl BlogGeneratorDemo {
    fn with_config(config: SessionConfig, seed: u64) -> Result<BlogGeneratorDemo, String> {
        let generator = BlogGenerator::builder()
            .build()
            .map_err(|e| format!("Generator build error: {e}"))?;
        Ok(BlogGeneratorDemo {
            session: Session::new(generator, config, seed),
        })
    }

    fn begin_generate_json(&mut self, form_json: &str) -> Result<String, String> {
        let request: BlogRequest =
            serde_json::from_str(form_json).map_err(|e| format!("Invalid form JSON: {e}"))?;
        match self.session.begin_generate(request) {
            Ok(delay) => {
                let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
                to_json(&Reply::ok(Scheduled { delay_ms }))
            }
            Err(notice) => to_json(&Reply::<()>::failed(notice)),
        }
    }

    fn complete_json(&mut self) -> Result<String, String> {
        match self.session.complete() {
            Ok(post) => to_json(&Reply::ok(post)),
            Err(notice) => to_json(&Reply::<()>::failed(notice)),
        }
    }

    fn export_json(&self) -> Result<String, String> {
        match self.session.export() {
            Ok(document) => to_json(&Reply::ok(document)),
            Err(notice) => to_json(&Reply::<()>::failed(notice)),
        }
    }

    fn finish_export_json(&self, ok: bool, cause: Option<&str>) -> Result<String, String> {
        let notice = if ok {
            self.session.export_succeeded()
        } else {
            self.session.export_failed(cause.unwrap_or("download failed"))
        };
        to_json(&Reply::notice(notice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn demo() -> BlogGeneratorDemo {
        BlogGeneratorDemo::with_config(SessionConfig::immediate(), 7).unwrap()
    }

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn tones_json_lists_all_five() {
        let parsed = parse(&BlogGeneratorDemo::tones());
        assert_eq!(parsed.as_array().unwrap().len(), 5);
        assert_eq!(parsed[1]["name"], "casual");
        assert_eq!(parsed[1]["sections"][3], "What's Next?");
    }

    #[test]
    fn lengths_json() {
        assert_eq!(BlogGeneratorDemo::lengths(), r#"["short","medium","long"]"#);
    }

    #[test]
    fn generate_and_export_round_trip() {
        let mut demo = demo();
        let form = r#"{"topic":"Remote Work Culture","tone":"casual","length":"short","keywords":"async, trust"}"#;

        let scheduled = parse(&demo.begin_generate_json(form).unwrap());
        assert_eq!(scheduled["ok"], true);
        assert_eq!(scheduled["data"]["delay_ms"], 0);
        assert!(demo.is_busy());

        let completed = parse(&demo.complete_json().unwrap());
        assert_eq!(completed["ok"], true);
        assert_eq!(completed["data"]["topic"], "Remote Work Culture");
        assert!(completed["data"]["fragment"]
            .as_str()
            .unwrap()
            .contains("<h2>Remote Work Culture</h2>"));
        assert!(!demo.is_busy());

        let exported = parse(&demo.export_json().unwrap());
        assert_eq!(exported["ok"], true);
        assert_eq!(exported["data"]["filename"], "remote-work-culture-blog-post.html");
        assert!(exported.get("notice").is_none());
    }

    #[test]
    fn finish_export_reports_download_outcome() {
        let demo = demo();

        let ok = parse(&demo.finish_export_json(true, None).unwrap());
        assert_eq!(ok["ok"], true);
        assert_eq!(ok["notice"]["kind"], "success");
        assert_eq!(ok["notice"]["message"], "Blog post exported successfully!");

        let failed = parse(&demo.finish_export_json(false, Some("quota exceeded")).unwrap());
        assert_eq!(failed["ok"], false);
        assert_eq!(failed["notice"]["kind"], "error");
        assert_eq!(
            failed["notice"]["message"],
            "Error exporting blog post. Please try again."
        );
    }

    #[test]
    fn invalid_topic_comes_back_as_notice() {
        let mut demo = demo();
        let reply = parse(&demo.begin_generate_json(r#"{"topic":"ab"}"#).unwrap());
        assert_eq!(reply["ok"], false);
        assert_eq!(
            reply["notice"]["message"],
            "Blog topic must be at least 3 characters long"
        );
        assert!(!demo.is_busy());
    }

    #[test]
    fn unknown_tone_is_rejected() {
        let mut demo = demo();
        let err = demo
            .begin_generate_json(r#"{"topic":"Rust Tooling","tone":"sarcastic"}"#)
            .unwrap_err();
        assert!(err.starts_with("Invalid form JSON"), "{err}");
        assert!(!demo.is_busy());
    }

    #[test]
    fn cancel_frees_the_session() {
        let mut demo = demo();
        demo.begin_generate_json(r#"{"topic":"Rust Tooling"}"#).unwrap();
        demo.cancel();
        assert!(!demo.is_busy());
        assert_eq!(parse(&demo.complete_json().unwrap())["ok"], false);
    }
}
