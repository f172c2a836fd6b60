use std::str::FromStr;

use bumpcheck_version::{Version, VersionError};
use clap::Args;
use tracing::{debug, instrument};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Baseline version, e.g. the one on the main branch
    #[arg(value_name = "REFERENCE_VERSION")]
    pub reference: String,

    /// Version to check, e.g. the one on the working branch
    #[arg(value_name = "CANDIDATE_VERSION")]
    pub candidate: String,
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error("invalid reference version")]
    #[diagnostic(
        code(bumpcheck::invalid_reference),
        help("versions look like MAJOR[.MINOR[.PATCH]], optionally followed by aN or bN")
    )]
    InvalidReference(#[source] VersionError),
    #[error("invalid candidate version")]
    #[diagnostic(
        code(bumpcheck::invalid_candidate),
        help("versions look like MAJOR[.MINOR[.PATCH]], optionally followed by aN or bN")
    )]
    InvalidCandidate(#[source] VersionError),
}

type Result<T> = miette::Result<T, Error>;

/// Is the candidate strictly newer than the reference?
#[instrument(skip_all)]
pub fn compare(args: &CompareArgs) -> Result<bool> {
    let reference = Version::from_str(&args.reference).map_err(Error::InvalidReference)?;
    let candidate = Version::from_str(&args.candidate).map_err(Error::InvalidCandidate)?;
    debug!(%reference, %candidate, "comparing versions");

    let newer = candidate > reference;
    debug!(newer, ordering = ?candidate.cmp(&reference), "compared versions");
    Ok(newer)
}

/// The boolean literal written to stdout.
pub fn literal(newer: bool) -> &'static str {
    if newer { "True" } else { "False" }
}
