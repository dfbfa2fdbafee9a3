use std::sync::Mutex;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LifecycleEvent {
    Started(String),
    Stopped(String),
}

/// Ordered record of producer lifecycle transitions across all endpoints of a
/// context.
#[derive(Debug, Default)]
pub struct LifecycleJournal {
    events: Mutex<Vec<LifecycleEvent>>,
}

impl LifecycleJournal {
    pub(crate) fn record(&self, event: LifecycleEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Largest number of producers that were started and not yet stopped at
    /// the same time.
    pub fn peak_live(&self) -> usize {
        let mut live = 0usize;
        let mut peak = 0usize;
        for event in self.events() {
            match event {
                LifecycleEvent::Started(_) => {
                    live += 1;
                    peak = peak.max(live);
                }
                LifecycleEvent::Stopped(_) => live = live.saturating_sub(1),
            }
        }
        peak
    }
}
