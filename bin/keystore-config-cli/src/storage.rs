//! Writes confirmed configurations to disk.

use keystore_config::{DialogCallbacks, KeyStoreConfig};
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The CLI's save callback.
///
/// Every save spawns its own write and returns right away; the dialog never
/// learns how the write went. Failures are logged here.
///
/// Files are numbered per client, continuing after the highest number already
/// in the output directory.
#[derive(Debug)]
pub struct ConfigWriter {
    client_id: String,
    output_dir: PathBuf,
    saved: usize,
    pending: Vec<JoinHandle<Option<PathBuf>>>,
}

impl ConfigWriter {
    pub fn new(client_id: &str, output_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        std::fs::create_dir_all(&output_dir)?;
        let saved = last_saved(client_id, output_dir.as_ref())?;
        Ok(Self {
            client_id: client_id.to_string(),
            output_dir: output_dir.as_ref().to_path_buf(),
            saved,
            pending: Vec::new(),
        })
    }

    /// Wait for writes still in flight. Returns the files they wrote
    /// successfully.
    pub async fn flush(&mut self) -> Vec<PathBuf> {
        let mut written = Vec::new();
        for handle in self.pending.drain(..) {
            match handle.await {
                Ok(Some(path)) => written.push(path),
                Ok(None) => {}
                Err(e) => error!("Save task failed: {e}"),
            }
        }
        written
    }
}

impl DialogCallbacks for ConfigWriter {
    fn save(&mut self, config: KeyStoreConfig) {
        // Finished writes have already logged their outcome.
        self.pending.retain(|handle| !handle.is_finished());

        self.saved += 1;
        let path = self
            .output_dir
            .join(format!("{}-{}.json", self.client_id, self.saved));

        match config.archive_filename() {
            Some(archive) => println!("Requested {archive} for {}", self.client_id),
            None => println!("Requested certificate for {}", self.client_id),
        }

        self.pending.push(tokio::spawn(async move {
            match write_config(&path, &config).await {
                Ok(()) => {
                    info!("Saved key store configuration to {}", path.display());
                    Some(path)
                }
                Err(e) => {
                    error!("Failed to save key store configuration: {e}");
                    None
                }
            }
        }));
    }

    fn toggle_dialog(&mut self) {
        println!("Dialog closed.");
    }
}

/// Highest `{client_id}-{n}.json` number in `dir`, or 0.
fn last_saved(client_id: &str, dir: &Path) -> std::io::Result<usize> {
    let prefix = format!("{client_id}-");
    let mut last = 0;
    for entry in std::fs::read_dir(dir)? {
        let name = entry?.file_name();
        let number = name
            .to_str()
            .and_then(|name| name.strip_prefix(&prefix))
            .and_then(|rest| rest.strip_suffix(".json"))
            .and_then(|number| number.parse::<usize>().ok());
        if let Some(number) = number {
            last = last.max(number);
        }
    }
    Ok(last)
}

async fn write_config(path: &Path, config: &KeyStoreConfig) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(config)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
