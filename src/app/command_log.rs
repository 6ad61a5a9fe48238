//! Ringpuffer der zuletzt ausgeführten Commands (z.B. für eine Verlaufsanzeige).

use super::AppCommand;
use std::collections::VecDeque;

/// Hält die letzten `capacity` Commands; ältere fallen vorne heraus.
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    /// Standard-Kapazität
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::default()
    }

    /// Log mit eigener Kapazität (mindestens 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Hängt einen Command an, verdrängt bei voller Kapazität den ältesten.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge, ältester zuerst.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &AppCommand> {
        self.entries.iter()
    }

    /// Die letzten `count` Commands, neuester zuerst.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter().rev().take(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;

    #[test]
    fn full_log_drops_oldest_entry() {
        let mut log = CommandLog::with_capacity(3);
        log.record(&AppCommand::AddToken);
        log.record(&AppCommand::SelectAll);
        log.record(&AppCommand::Undo);
        log.record(&AppCommand::Redo);

        assert_eq!(log.len(), 3);
        assert_eq!(log.entries().next(), Some(&AppCommand::SelectAll));
    }

    #[test]
    fn recent_lists_newest_first() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::AddToken);
        log.record(&AppCommand::RemoveState {
            id: StateId::new("s"),
        });
        log.record(&AppCommand::Undo);

        let recent: Vec<_> = log.recent(2).cloned().collect();
        assert_eq!(
            recent,
            vec![
                AppCommand::Undo,
                AppCommand::RemoveState {
                    id: StateId::new("s")
                }
            ]
        );
        assert_eq!(log.recent(10).count(), 3);
    }

    #[test]
    fn zero_capacity_still_keeps_last_command() {
        let mut log = CommandLog::with_capacity(0);
        log.record(&AppCommand::AddToken);
        log.record(&AppCommand::Undo);
        assert_eq!(log.recent(5).collect::<Vec<_>>(), vec![&AppCommand::Undo]);
    }
}
