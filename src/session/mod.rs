use anyhow::Result;
use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One run of the generator. Exports and optional prompt/response
/// transcripts land in a per-session directory named by session id.
pub struct Session {
    pub id: Uuid,
    dir: PathBuf,
    save_transcript: bool,
}

#[derive(Serialize)]
struct Exchange<'a> {
    stage: &'a str,
    timestamp: DateTime<Utc>,
    prompt: &'a str,
    response: &'a str,
}

impl Session {
    pub fn new(out_dir: &str, save_transcript: bool) -> Self {
        let id = Uuid::new_v4();
        Session {
            id,
            dir: Path::new(out_dir).join(id.to_string()),
            save_transcript,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Absolute-ish path for an export file; creates the session directory.
    pub fn export_path(&self, filename: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        Ok(self.dir.join(filename))
    }

    /// Persist one prompt/response pair as pretty JSON, when transcripts are
    /// enabled. Filenames carry the stage and a timestamp so repeated stages
    /// do not overwrite each other.
    pub fn save_exchange(&self, stage: &str, prompt: &str, response: &str) -> Result<Option<PathBuf>> {
        if !self.save_transcript {
            return Ok(None);
        }
        let now = Utc::now();
        let exchange = Exchange {
            stage,
            timestamp: now,
            prompt,
            response,
        };
        fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("{stage}.{}.json", now.format("%H%M%S%3f")));
        fs::write(&path, serde_json::to_string_pretty(&exchange)?)?;
        Ok(Some(path))
    }

    pub fn print_planned_paths(&self) {
        println!("debug: session id: {}", self.id);
        println!("debug: session directory: {}", self.dir.display());
        println!(
            "debug: transcripts {}",
            if self.save_transcript { "enabled" } else { "disabled" }
        );
    }
}
