use crate::cli::Args;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Resolved runtime configuration: defaults, overridden by CLI flags, with
/// the credential taken from the environment. Absence of the credential is
/// not fatal here; it surfaces at the first remote call.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    pub text_model: String,
    pub image_model: String,
    pub out_dir: String,
    pub timeout_secs: u64,
    pub save_transcript: bool,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: GEMINI_API_BASE.into(),
            api_key: None,
            text_model: "gemini-2.5-flash".into(),
            image_model: "gemini-2.5-flash-image".into(),
            out_dir: "presskit-out".into(),
            timeout_secs: 120,
            save_transcript: false,
            debug: false,
        }
    }
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        let mut cfg = Config::default();
        cfg.api_key = std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty());
        if let Some(m) = &args.text_model {
            cfg.text_model = m.clone();
        }
        if let Some(m) = &args.image_model {
            cfg.image_model = m.clone();
        }
        if let Some(out) = &args.out {
            cfg.out_dir = out.clone();
        }
        cfg.timeout_secs = args.timeout_secs;
        cfg.save_transcript = args.save_transcript;
        cfg.debug = args.debug;
        cfg
    }
}
