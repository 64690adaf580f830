// src/port/recording.rs

//! In-memory port backend that records every access.

use super::constants::{INPUT_STATUS, VRETRACE_BIT};
use super::PortIo;

/// Number of events kept by [`RecordingPorts`]; later events are counted
/// but dropped.
pub const RECORD_CAPACITY: usize = 1024;

/// A single recorded port access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortEvent {
    Read { port: u16, value: u8 },
    Write { port: u16, value: u8 },
}

/// Port backend used on targets without x86 port I/O and by the test suite.
///
/// Reads of the input status register follow an optional script; once the
/// script runs out the retrace bit toggles on every read so retrace waits
/// always terminate. Reads of any other port return `read_value`.
#[derive(Debug, Clone)]
pub struct RecordingPorts {
    events: [PortEvent; RECORD_CAPACITY],
    len: usize,
    dropped: usize,
    status_script: &'static [u8],
    status_reads: usize,
    read_value: u8,
}

impl RecordingPorts {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: [PortEvent::Write { port: 0, value: 0 }; RECORD_CAPACITY],
            len: 0,
            dropped: 0,
            status_script: &[],
            status_reads: 0,
            read_value: 0,
        }
    }

    /// Replay `script` for the first reads of the input status register.
    #[must_use]
    pub const fn with_status_script(mut self, script: &'static [u8]) -> Self {
        self.status_script = script;
        self
    }

    /// Value returned for reads of ports other than the input status register.
    #[must_use]
    pub const fn with_read_value(mut self, value: u8) -> Self {
        self.read_value = value;
        self
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[PortEvent] {
        &self.events[..self.len]
    }

    /// Only the writes, as `(port, value)` pairs.
    pub fn writes(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.events().iter().filter_map(|event| match *event {
            PortEvent::Write { port, value } => Some((port, value)),
            PortEvent::Read { .. } => None,
        })
    }

    /// Number of events that did not fit into the log.
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Forget all recorded events (the status script position is kept).
    pub fn clear(&mut self) {
        self.len = 0;
        self.dropped = 0;
    }

    fn record(&mut self, event: PortEvent) {
        match self.events.get_mut(self.len) {
            Some(slot) => {
                *slot = event;
                self.len += 1;
            }
            None => self.dropped += 1,
        }
    }

    fn next_status(&mut self) -> u8 {
        let n = self.status_reads;
        self.status_reads += 1;
        match self.status_script.get(n) {
            Some(&value) => value,
            None if (n - self.status_script.len()) % 2 == 0 => 0,
            None => VRETRACE_BIT,
        }
    }
}

impl Default for RecordingPorts {
    fn default() -> Self {
        Self::new()
    }
}

impl PortIo for RecordingPorts {
    fn read(&mut self, port: u16) -> u8 {
        let value = if port == INPUT_STATUS {
            self.next_status()
        } else {
            self.read_value
        };
        self.record(PortEvent::Read { port, value });
        value
    }

    fn write(&mut self, port: u16, value: u8) {
        self.record(PortEvent::Write { port, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_reads_and_writes_in_order() {
        let mut ports = RecordingPorts::new().with_read_value(0x42);
        ports.write(0x3D4, 0x0F);
        assert_eq!(ports.read(0x3D5), 0x42);

        assert_eq!(
            ports.events(),
            &[
                PortEvent::Write { port: 0x3D4, value: 0x0F },
                PortEvent::Read { port: 0x3D5, value: 0x42 },
            ]
        );
        assert_eq!(ports.writes().count(), 1);
    }

    #[test]
    fn status_script_then_toggle() {
        let mut ports = RecordingPorts::new().with_status_script(&[VRETRACE_BIT, VRETRACE_BIT]);
        assert_eq!(ports.read(INPUT_STATUS), VRETRACE_BIT);
        assert_eq!(ports.read(INPUT_STATUS), VRETRACE_BIT);
        assert_eq!(ports.read(INPUT_STATUS), 0);
        assert_eq!(ports.read(INPUT_STATUS), VRETRACE_BIT);
        assert_eq!(ports.read(INPUT_STATUS), 0);
    }

    #[test]
    fn overflow_is_counted_not_stored() {
        let mut ports = RecordingPorts::new();
        for i in 0..RECORD_CAPACITY + 3 {
            ports.write(0x80, i as u8);
        }
        assert_eq!(ports.events().len(), RECORD_CAPACITY);
        assert_eq!(ports.dropped(), 3);

        ports.clear();
        assert!(ports.events().is_empty());
        assert_eq!(ports.dropped(), 0);
    }

    #[test]
    fn write_indexed_emits_index_then_data() {
        let mut ports = RecordingPorts::new();
        ports.write_indexed(0x3C4, 0x3C5, 2, 0x0F);
        let writes: [(u16, u8); 2] = [(0x3C4, 2), (0x3C5, 0x0F)];
        assert!(ports.writes().eq(writes.iter().copied()));
    }
}
