use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::{mpsc, watch};
use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::calendar::{CalendarSystem, Gregorian};
use crate::clock::{Clock, SystemClock};
use crate::error::{CalendarError, CalendarResult};
use crate::grid::build_grid_state;
use crate::locale::{BuiltinLocale, LocaleLabelProvider};
use crate::reducer::reduce;
use crate::state::CalendarGridState;
use crate::types::{DateParts, Direction, NavigationUnit};

/// Shared, immutable month snapshot as published to observers
pub type GridSnapshot = Arc<CalendarGridState>;

/// Capabilities the calendar core consumes
#[derive(Clone)]
pub struct CalendarServices {
    pub calendar: Arc<dyn CalendarSystem>,
    pub labels: Arc<dyn LocaleLabelProvider>,
    pub clock: Arc<dyn Clock>,
}

impl CalendarServices {
    pub fn new(
        calendar: Arc<dyn CalendarSystem>,
        labels: Arc<dyn LocaleLabelProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            calendar,
            labels,
            clock,
        }
    }

    /// Gregorian calendar and system clock with the given labels
    pub fn with_labels(labels: Arc<dyn LocaleLabelProvider>) -> Self {
        Self::new(Arc::new(Gregorian), labels, Arc::new(SystemClock))
    }
}

impl Default for CalendarServices {
    fn default() -> Self {
        Self::with_labels(Arc::new(BuiltinLocale::english()))
    }
}

impl std::fmt::Debug for CalendarServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarServices").finish_non_exhaustive()
    }
}

/// Cloneable handle for queueing navigation commands from anywhere
///
/// Commands are applied by the owning [`CalendarNavigation`] in exactly the
/// order they were sent, across all clones of the sender.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<Action>,
}

impl CommandSender {
    pub fn send(&self, action: Action) -> CalendarResult<()> {
        self.tx.send(action)?;
        Ok(())
    }

    pub fn advance(&self, direction: Direction) -> CalendarResult<()> {
        self.send(Action::advance(direction))
    }
}

/// Outcome of draining the command queue
#[derive(Debug, Default)]
pub struct ProcessReport {
    /// Commands that produced a new snapshot
    pub applied: usize,
    /// Commands that failed, in queue order; the snapshot was left unchanged for each
    pub failed: Vec<(Action, CalendarError)>,
}

impl ProcessReport {
    pub fn processed(&self) -> usize {
        self.applied + self.failed.len()
    }
}

/// Month navigation controller
///
/// Owns the published [`CalendarGridState`]. Every operation runs to
/// completion and either publishes a complete new snapshot or leaves the old
/// one in place; readers never see a grid that disagrees with its own
/// reference date.
pub struct CalendarNavigation {
    services: CalendarServices,

    /// Latest snapshot, also the channel observers subscribe to
    state_tx: watch::Sender<GridSnapshot>,

    /// Queued commands, applied FIFO
    command_tx: mpsc::UnboundedSender<Action>,
    command_rx: mpsc::UnboundedReceiver<Action>,
}

impl CalendarNavigation {
    /// Create a controller showing the month of `initial`
    ///
    /// An absent or invalid date (February 30th, month 13, ...) is replaced
    /// by the clock's today; it is never reported as an error. Label
    /// failures are.
    pub fn new(initial: Option<DateParts>, services: CalendarServices) -> CalendarResult<Self> {
        let reference = resolve_initial_date(initial, services.clock.as_ref());
        let state = build_grid_state(
            reference,
            services.calendar.as_ref(),
            services.labels.as_ref(),
        )?;
        debug!("NAV: initialized at {}", state.reference_date());

        let (state_tx, _) = watch::channel(Arc::new(state));
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        Ok(Self {
            services,
            state_tx,
            command_tx,
            command_rx,
        })
    }

    /// Re-run initialization on an existing controller
    ///
    /// Pending commands were issued against the old month and are applied
    /// first, so they are not silently reordered behind the reset.
    pub fn initialize(&mut self, date: Option<DateParts>) -> CalendarResult<GridSnapshot> {
        self.drain_pending();
        let reference = resolve_initial_date(date, self.services.clock.as_ref());
        let state = build_grid_state(
            reference,
            self.services.calendar.as_ref(),
            self.services.labels.as_ref(),
        )?;
        Ok(self.publish(state))
    }

    /// Current snapshot
    pub fn state(&self) -> GridSnapshot {
        self.state_tx.borrow().clone()
    }

    /// Observe snapshot replacements
    ///
    /// The receiver always holds the latest snapshot and is marked changed
    /// whenever a new one is published.
    pub fn subscribe(&self) -> watch::Receiver<GridSnapshot> {
        self.state_tx.subscribe()
    }

    pub fn command_sender(&self) -> CommandSender {
        CommandSender {
            tx: self.command_tx.clone(),
        }
    }

    pub fn services(&self) -> &CalendarServices {
        &self.services
    }

    /// One month forward or backward
    pub fn advance(&mut self, direction: Direction) -> CalendarResult<GridSnapshot> {
        self.apply(Action::advance(direction))
    }

    /// One `unit` forward or backward
    pub fn change(
        &mut self,
        unit: NavigationUnit,
        direction: Direction,
    ) -> CalendarResult<GridSnapshot> {
        self.apply(Action::Change { unit, direction })
    }

    pub fn jump_to_today(&mut self) -> CalendarResult<GridSnapshot> {
        self.apply(Action::JumpToToday)
    }

    /// Show the month of an explicit date
    ///
    /// Unlike construction, an invalid date here is the caller's mistake and
    /// is returned as [`CalendarError::InvalidDate`].
    pub fn jump_to(&mut self, date: DateParts) -> CalendarResult<GridSnapshot> {
        let target = date.to_date().ok_or(CalendarError::InvalidDate {
            year: date.year,
            month: date.month,
            day: date.day,
        })?;
        self.apply(Action::JumpTo(target))
    }

    /// Apply an action immediately
    ///
    /// Commands already queued through a [`CommandSender`] were issued
    /// earlier and run first.
    pub fn apply(&mut self, action: Action) -> CalendarResult<GridSnapshot> {
        self.drain_pending();
        self.apply_one(action)
    }

    /// Apply the commands queued at entry, in the order they were sent
    ///
    /// Commands sent while the drain runs wait for the next call, so a busy
    /// producer cannot keep this from returning.
    pub fn process_commands(&mut self) -> ProcessReport {
        let mut report = ProcessReport::default();
        let pending = self.command_rx.len();
        for _ in 0..pending {
            let Ok(action) = self.command_rx.try_recv() else {
                break;
            };
            match self.apply_one(action) {
                Ok(_) => report.applied += 1,
                Err(e) => report.failed.push((action, e)),
            }
        }
        if report.processed() > 0 {
            trace!(
                "CMD: processed {} queued commands ({} failed)",
                report.processed(),
                report.failed.len()
            );
        }
        report
    }

    fn drain_pending(&mut self) {
        for (action, e) in self.process_commands().failed {
            warn!("CMD: queued {:?} failed: {}", action, e);
        }
    }

    fn apply_one(&mut self, action: Action) -> CalendarResult<GridSnapshot> {
        let current = self.state();
        let next = reduce(&current, action, &self.services)?;
        Ok(self.publish(next))
    }

    fn publish(&self, state: CalendarGridState) -> GridSnapshot {
        let snapshot = Arc::new(state);
        self.state_tx.send_replace(snapshot.clone());
        snapshot
    }
}

impl std::fmt::Debug for CalendarNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarNavigation")
            .field("reference_date", &self.state().reference_date())
            .finish_non_exhaustive()
    }
}

/// Pick the date the first grid is built for
fn resolve_initial_date(initial: Option<DateParts>, clock: &dyn Clock) -> NaiveDate {
    match initial {
        Some(parts) => match parts.to_date() {
            Some(date) => date,
            None => {
                let today = clock.today();
                warn!("NAV: invalid initial date {}, falling back to {}", parts, today);
                today
            }
        },
        None => {
            let today = clock.today();
            debug!("NAV: no initial date, using {}", today);
            today
        }
    }
}
