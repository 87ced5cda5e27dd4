//=========================================================================
// Input Buffer
//
// Collects keyboard events between two redraws. Acts as a transient event
// aggregator between the Platform and the core thread.
//
// Responsibilities:
// - Store incoming platform events in arrival order
// - Drop consecutive duplicates (OS key repeat produces runs of KeyDown)
// - Hand the whole batch over via `drain()`
//
// Notes:
// The buffer lives for one frame only and is emptied on every drain.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for a typical frame so steady-state typing never
    // reallocates.
    //
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // Appends an event unless it repeats the previous one.
    //
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns the collected events and empties the buffer. `None` when
    // nothing was buffered, so empty batches never cross the channel.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    #[test]
    fn consecutive_duplicates_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyD));
        assert_eq!(buffer.len(), 2, "Key repeat should collapse");
    }

    #[test]
    fn non_consecutive_duplicates_kept() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::Digit3));
        buffer.push(key_up(KeyCode::Digit3));
        buffer.push(key_down(KeyCode::Digit3));

        let events = buffer.drain().unwrap();
        assert_eq!(
            events,
            vec![key_down(KeyCode::Digit3), key_up(KeyCode::Digit3), key_down(KeyCode::Digit3)]
        );
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyW));
        buffer.push(InputEvent::FocusLost);

        let events = buffer.drain().unwrap();
        assert_eq!(events.len(), 2);
        assert!(buffer.is_empty());
    }

    #[test]
    fn drain_empty_is_none() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn drain_keeps_capacity() {
        let mut buffer = InputBuffer::new();
        for i in 0..64 {
            let key = if i % 2 == 0 { KeyCode::KeyA } else { KeyCode::KeyB };
            buffer.push(key_down(key));
        }
        let capacity_before = buffer.events.capacity();

        buffer.drain();

        assert_eq!(buffer.events.capacity(), capacity_before);
    }
}
