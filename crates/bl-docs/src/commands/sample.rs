//! `bl-docs sample` command implementations.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use bl_renderer::{ClipboardError, CodeSample, CopyFeedback, DownloadArtifact};
use bl_site::{Site, Taxonomy};
use clap::{Args, Subcommand};
use console::Term;

use crate::clipboard::Osc52Clipboard;
use crate::commands::load_site;
use crate::error::CliError;
use crate::output::Output;

/// Code sample subcommands.
#[derive(Subcommand)]
pub(crate) enum SampleCommand {
    /// Save a code sample with its download filename.
    Download(DownloadArgs),
    /// Copy a code sample to the clipboard through the terminal.
    Copy(CopyArgs),
}

impl SampleCommand {
    /// Execute the sample subcommand.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::Download(args) => args.execute(),
            Self::Copy(args) => args.execute(),
        }
    }
}

/// Page and position of a sample.
#[derive(Args, Clone)]
pub(crate) struct SampleRef {
    /// Page path, e.g. /charts/scatter.
    page: String,

    /// Zero-based position of the sample on the page.
    index: usize,

    /// Path to configuration file (default: auto-discover bl-docs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sidebar taxonomy: "sidebar" or "routes" (overrides config).
    #[arg(long)]
    taxonomy: Option<Taxonomy>,
}

impl SampleRef {
    fn lookup<'a>(&self, site: &'a Site) -> Result<&'a CodeSample, CliError> {
        site.sample(&self.page, self.index)
            .ok_or_else(|| CliError::SampleNotFound {
                page: self.page.clone(),
                index: self.index,
            })
    }
}

/// Arguments for the sample download command.
#[derive(Args)]
pub(crate) struct DownloadArgs {
    #[command(flatten)]
    sample: SampleRef,

    /// Directory to write the file into (default: print to stdout).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl DownloadArgs {
    /// Execute the download command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let site = load_site(self.sample.config.as_deref(), self.sample.taxonomy)?;
        let artifact = self.sample.lookup(&site)?.download();

        match &self.output_dir {
            Some(dir) => {
                let path = write_artifact(&artifact, dir)?;
                Output::new().success(&format!("Saved {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(artifact.content.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

/// Write `artifact` into `dir` under its download filename.
///
/// Only the last component of the filename is used.
fn write_artifact(artifact: &DownloadArtifact, dir: &Path) -> Result<PathBuf, CliError> {
    let name = Path::new(&artifact.filename)
        .file_name()
        .map_or_else(|| "code.txt".into(), ToOwned::to_owned);

    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    std::fs::write(&path, &artifact.content)?;
    tracing::debug!(path = %path.display(), bytes = artifact.content.len(), "Sample written");
    Ok(path)
}

/// Arguments for the sample copy command.
#[derive(Args)]
pub(crate) struct CopyArgs {
    #[command(flatten)]
    sample: SampleRef,
}

impl CopyArgs {
    /// Execute the copy command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = load_site(self.sample.config.as_deref(), self.sample.taxonomy)?;
        let sample = self.sample.lookup(&site)?;

        let term = Term::stdout();
        if !term.is_term() {
            return Err(ClipboardError::Unavailable("stdout is not a terminal".to_owned()).into());
        }

        let mut clipboard = Osc52Clipboard::new(term);
        let mut feedback = CopyFeedback::new(site.copied_feedback());
        let now = Instant::now();
        sample.copy(&mut clipboard, &mut feedback, now)?;

        output.success(&format!(
            "{}: {} ({} bytes)",
            feedback.label(now),
            sample.caption(),
            sample.code().len()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_artifact_uses_download_filename() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = CodeSample::new("layout.display()")
            .with_filename("scatter_plot.py")
            .download();

        let path = write_artifact(&artifact, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("scatter_plot.py"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "layout.display()");
    }

    #[test]
    fn test_write_artifact_default_names() {
        let dir = tempfile::tempdir().unwrap();

        let python = CodeSample::new("x = 1").download();
        let bash = CodeSample::new("pip install bestlib")
            .with_language("bash")
            .download();

        assert_eq!(
            write_artifact(&python, dir.path()).unwrap(),
            dir.path().join("code.py")
        );
        assert_eq!(
            write_artifact(&bash, dir.path()).unwrap(),
            dir.path().join("code.txt")
        );
    }

    #[test]
    fn test_write_artifact_strips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = CodeSample::new("x")
            .with_filename("../../etc/evil.py")
            .download();

        let path = write_artifact(&artifact, &dir.path().join("out")).unwrap();

        assert_eq!(path, dir.path().join("out").join("evil.py"));
    }

    #[test]
    fn test_lookup_sample_on_routed_page() {
        let site = Site::new(bl_site::Catalog::builtin(), bl_site::SiteOptions::default())
            .unwrap();
        let sample_ref = SampleRef {
            page: "/quick-start".to_owned(),
            index: 1,
            config: None,
            taxonomy: None,
        };
        let missing = SampleRef {
            index: 999,
            ..sample_ref.clone()
        };

        assert_eq!(
            sample_ref.lookup(&site).unwrap().download_filename(),
            "first_visualization.py"
        );
        assert!(matches!(
            missing.lookup(&site),
            Err(CliError::SampleNotFound { index: 999, .. })
        ));
    }
}
