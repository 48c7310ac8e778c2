use std::time::Duration;

use crate::domain::user::UserSummary;

/// What a finished run printed, plus how long the loop took.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub users: Vec<UserSummary>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn timing_line(&self) -> String {
        format!(
            "Total Time Taken (Serial): {} seconds",
            format_elapsed(self.elapsed)
        )
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    elapsed.as_secs_f64().to_string()
}
