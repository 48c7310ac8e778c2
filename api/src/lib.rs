pub mod config;
pub mod domain;
pub mod error;
pub mod utilities;

use std::{io::Write, time::Instant};

use log::info;

pub use config::FetchConfig;
pub use domain::{endpoint::EndpointList, report::RunReport, user::UserSummary};
pub use error::FetchError;
pub use utilities::request::{HttpUserSource, UserSource};

/// Walks the endpoint list one request at a time, printing each user as
/// soon as its record is decoded. The first failure ends the run; lines
/// already written stay written.
pub struct SerialRunner<S> {
    pub source: S,
    pub endpoints: EndpointList,
}

impl SerialRunner<HttpUserSource> {
    pub fn from_config(config: FetchConfig) -> anyhow::Result<Self> {
        let source = HttpUserSource::new()?;
        Ok(SerialRunner {
            source,
            endpoints: config.endpoints,
        })
    }
}

impl<S: UserSource> SerialRunner<S> {
    pub fn new(source: S, endpoints: EndpointList) -> Self {
        SerialRunner { source, endpoints }
    }

    /// Writes the user lines followed by the timing line.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunReport, FetchError> {
        let report = self.fetch_all(out)?;
        writeln!(out, "{}", report.timing_line())?;
        info!(
            "fetched {} users in {:?}",
            report.users.len(),
            report.elapsed
        );
        Ok(report)
    }

    /// The timed loop on its own. The timing line is left to the caller.
    pub fn fetch_all<W: Write>(&self, out: &mut W) -> Result<RunReport, FetchError> {
        let start = Instant::now();
        let mut users = Vec::with_capacity(self.endpoints.len());

        for url in &self.endpoints {
            let record = self.source.fetch(url)?;
            let user = UserSummary::from_record(url, &record)?;
            writeln!(out, "{}", user.line())?;
            out.flush()?;
            users.push(user);
        }

        let end = Instant::now();
        Ok(RunReport {
            users,
            elapsed: end.duration_since(start),
        })
    }
}
