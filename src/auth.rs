//! Authentication starter import.
//! Pulls the Remix indie-stack authentication files into an existing
//! project, rewriting their `@remix-run` imports for React Router. The
//! fetches run concurrently and the aggregate operation fails if any single
//! fetch fails; files already written by sibling fetches stay on disk.

use std::fs;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::thread;

use log::debug;
use regex::Regex;
use reqwest::blocking::Client;

use crate::error::{Error, Result};

/// Branch snapshot of the indie-stack repository the files are pulled from.
pub const INDIE_STACK_BASE_URL: &str =
    "https://raw.githubusercontent.com/remix-run/indie-stack/refs/heads/main/";

static REMIX_IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@remix-run/(node|react)").unwrap());

/// One file to import: its name, the directory it lives in upstream and the
/// directory it is written to, relative to the target project root.
#[derive(Debug, Clone, Copy)]
pub struct RemoteFile {
    pub name: &'static str,
    pub source_dir: &'static str,
    pub dest_dir: &'static str,
}

impl RemoteFile {
    fn url(&self, base_url: &str) -> String {
        format!("{}{}{}", base_url, self.source_dir, self.name)
    }

    /// Destination path of this file under the target project root.
    pub fn destination(&self, target_root: &Path) -> PathBuf {
        target_root.join(self.dest_dir).join(self.name)
    }
}

/// The authentication starter files provided by the indie-stack.
pub static AUTH_FILES: [RemoteFile; 8] = [
    RemoteFile { name: "session.server.ts", source_dir: "app/", dest_dir: "app" },
    RemoteFile { name: "db.server.ts", source_dir: "app/", dest_dir: "app" },
    RemoteFile { name: "singleton.server.ts", source_dir: "app/", dest_dir: "app" },
    RemoteFile { name: "utils.ts", source_dir: "app/", dest_dir: "app" },
    RemoteFile { name: "user.server.ts", source_dir: "models/", dest_dir: "app/models" },
    RemoteFile { name: "schema.prisma", source_dir: "prisma/", dest_dir: "prisma" },
    RemoteFile { name: "seed.ts", source_dir: "prisma/", dest_dir: "prisma" },
    RemoteFile { name: ".env.example", source_dir: "", dest_dir: "" },
];

/// Rewrites `@remix-run/node` and `@remix-run/react` import specifiers to
/// `react-router`. Other specifiers are left untouched.
pub fn rewrite_remix_imports(content: &str) -> String {
    REMIX_IMPORT_RE.replace_all(content, "react-router").into_owned()
}

fn fetch_and_write(client: &Client, file: &RemoteFile, base_url: &str, target_root: &Path) -> Result<()> {
    let url = file.url(base_url);
    debug!("Fetching {}", url);

    let response = client.get(&url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::FetchFailed { url, status: status.as_u16() });
    }
    let body = response.text()?;

    let destination = file.destination(target_root);
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&destination, rewrite_remix_imports(&body))?;
    println!("Pulled {}", destination.display());
    Ok(())
}

/// Imports the authentication files from `base_url` into `target_root`.
///
/// All fetches run concurrently with no per-file ordering guarantee. If any
/// fetch fails, the first error observed is returned after every fetch has
/// completed; there is no rollback of files written by the others.
pub fn import_from(base_url: &str, target_root: &Path) -> Result<()> {
    let client = Client::new();

    let results: Vec<Result<()>> = thread::scope(|scope| {
        let handles: Vec<_> = AUTH_FILES
            .iter()
            .map(|file| {
                let client = &client;
                scope.spawn(move || fetch_and_write(client, file, base_url, target_root))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    });

    for result in results {
        result?;
    }

    println!("Pulled {} authentication starter files", AUTH_FILES.len());
    Ok(())
}

/// Imports the indie-stack authentication files into the current project.
pub fn import_auth_files(target_root: &Path) -> Result<()> {
    import_from(INDIE_STACK_BASE_URL, target_root)
}
