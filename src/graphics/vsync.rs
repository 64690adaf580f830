// src/graphics/vsync.rs

//! Vertical retrace synchronization.

use crate::port::constants::{INPUT_STATUS, VRETRACE_BIT};
use crate::port::PortIo;

/// Busy-wait for the start of the next vertical retrace.
///
/// First waits for any retrace in progress to end, then for a new one to
/// begin, so the caller always lands at the very start of a retrace window.
/// Blocks for at most one refresh period (about 14.3 ms at 70 Hz); there is
/// no timeout and no yield.
pub fn wait_for_vertical_retrace<P: PortIo>(ports: &mut P) {
    while ports.read(INPUT_STATUS) & VRETRACE_BIT != 0 {
        core::hint::spin_loop();
    }
    while ports.read(INPUT_STATUS) & VRETRACE_BIT == 0 {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::{PortEvent, RecordingPorts};

    fn status_reads(ports: &RecordingPorts) -> usize {
        ports
            .events()
            .iter()
            .filter(|event| matches!(event, PortEvent::Read { port: INPUT_STATUS, .. }))
            .count()
    }

    #[test]
    fn waits_out_current_retrace_before_catching_the_next() {
        let mut ports =
            RecordingPorts::new().with_status_script(&[VRETRACE_BIT, VRETRACE_BIT, 0, 0, 0, VRETRACE_BIT]);
        wait_for_vertical_retrace(&mut ports);
        assert_eq!(status_reads(&ports), 6);
        assert_eq!(ports.writes().count(), 0);
    }

    #[test]
    fn outside_retrace_needs_only_the_second_phase() {
        let mut ports = RecordingPorts::new().with_status_script(&[0, 0, VRETRACE_BIT]);
        wait_for_vertical_retrace(&mut ports);
        assert_eq!(status_reads(&ports), 3);
    }
}
