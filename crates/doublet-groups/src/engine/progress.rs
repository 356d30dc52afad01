/// Events emitted while a workflow runs.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// A loop over `total` doublets or tables begins.
    TaskStart { total: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback; silent without one.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `step` for every item, wrapping the loop in task events.
    pub fn track<T, E, F>(&self, items: &[T], mut step: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        self.report(Progress::TaskStart {
            total: items.len() as u64,
        });
        for item in items {
            step(item)?;
            self.report(Progress::TaskIncrement);
        }
        self.report(Progress::TaskFinish);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn track_reports_start_increments_and_finish() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(format!("{:?}", event));
        }));

        let mut seen = Vec::new();
        reporter
            .track(&[1, 2], |item| {
                seen.push(*item);
                Ok::<(), ()>(())
            })
            .unwrap();

        assert_eq!(seen, vec![1, 2]);
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "TaskStart { total: 2 }",
                "TaskIncrement",
                "TaskIncrement",
                "TaskFinish"
            ]
        );
    }

    #[test]
    fn track_stops_at_first_error() {
        let reporter = ProgressReporter::new();
        let mut calls = 0;
        let result = reporter.track(&[1, 2, 3], |item| {
            calls += 1;
            if *item == 2 { Err("boom") } else { Ok(()) }
        });
        assert_eq!(result, Err("boom"));
        assert_eq!(calls, 2);
    }
}
